//! HTTP client for the ticket backend.
//!
//! Wraps the three requests the app makes and turns status codes into
//! [`ApiError`] variants. Nothing is retried and no timeout is applied.

use std::sync::Once;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::normalize_base_url;
use crate::error::{ApiError, DeskError, Result};
use crate::model::{NewTicket, Ticket};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Clone)]
pub struct TicketClient {
    http: Client,
    base_url: String,
}

impl TicketClient {
    pub fn new(base_url: &str) -> Result<Self> {
        install_crypto_provider();
        let base_url = normalize_base_url(base_url)?;
        let http = Client::builder()
            .build()
            .map_err(|e| DeskError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn tickets_endpoint(&self) -> String {
        format!("{}/tickets", self.base_url)
    }

    fn ticket_endpoint(&self, id: u64) -> String {
        format!("{}/tickets/{}", self.base_url, id)
    }

    /// `POST /tickets`. Succeeds only on 201.
    pub async fn create_ticket(&self, ticket: &NewTicket) -> ApiResult<Ticket> {
        tracing::info!(subject = %ticket.subject, "Creating ticket");

        let response = self
            .http
            .post(self.tickets_endpoint())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(ticket)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Create ticket response");

        if status == StatusCode::CREATED {
            let created: Ticket = read_json(response).await?;
            tracing::info!(id = created.id, "Ticket created");
            return Ok(created);
        }

        let body = response.bytes().await.map_err(transport_error)?;
        let err = match serde_json::from_slice::<ValidationErrorBody>(&body) {
            Ok(parsed) if !parsed.detail.is_empty() => {
                ApiError::Validation(parsed.detail.into_iter().map(|item| item.msg).collect())
            }
            _ => ApiError::UnexpectedStatus(status.as_u16()),
        };
        tracing::warn!(status = status.as_u16(), error = %err, "Ticket rejected");
        Err(err)
    }

    /// `GET /tickets/{id}`. Succeeds only on 200.
    pub async fn get_ticket(&self, id: u64) -> ApiResult<Ticket> {
        tracing::info!(id, "Fetching ticket");
        let response = self.get(self.ticket_endpoint(id)).await?;
        read_json(response).await
    }

    /// `GET /tickets`. Succeeds only on 200.
    pub async fn list_tickets(&self) -> ApiResult<Vec<Ticket>> {
        tracing::info!("Listing tickets");
        let response = self.get(self.tickets_endpoint()).await?;
        let tickets: Vec<Ticket> = read_json(response).await?;
        tracing::debug!(count = tickets.len(), "Tickets listed");
        Ok(tickets)
    }

    async fn get(&self, url: String) -> ApiResult<Response> {
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "GET response");
        if status != StatusCode::OK {
            tracing::warn!(%url, status = status.as_u16(), "Unexpected status");
            return Err(ApiError::UnexpectedStatus(status.as_u16()));
        }
        Ok(response)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let body = response.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&body).map_err(|err| {
        tracing::warn!(error = %err, "Malformed response body");
        ApiError::Decode(err.to_string())
    })
}

fn transport_error(err: reqwest::Error) -> ApiError {
    tracing::warn!(error = %err, "Request failed");
    ApiError::Transport(err.to_string())
}

/// FastAPI-style validation error body.
#[derive(Deserialize)]
struct ValidationErrorBody {
    detail: Vec<ValidationErrorItem>,
}

#[derive(Deserialize)]
struct ValidationErrorItem {
    msg: String,
}

/// reqwest is built without a bundled crypto provider; install ring once.
fn install_crypto_provider() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_built_from_normalized_base() {
        let client = TicketClient::new("http://localhost:3001/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3001");
        assert_eq!(client.tickets_endpoint(), "http://localhost:3001/tickets");
        assert_eq!(client.ticket_endpoint(9), "http://localhost:3001/tickets/9");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(TicketClient::new("not a url").is_err());
    }

    #[test]
    fn test_validation_body_requires_list() {
        assert!(serde_json::from_str::<ValidationErrorBody>(r#"{"detail": "Not Found"}"#).is_err());
        let parsed: ValidationErrorBody =
            serde_json::from_str(r#"{"detail": [{"loc": ["body", "subject"], "msg": "field required", "type": "value_error.missing"}]}"#)
                .unwrap();
        assert_eq!(parsed.detail[0].msg, "field required");
    }
}
