//! Input validation for ticket data entered locally.

use crate::error::{DeskError, Result};
use crate::model::NewTicket;

/// Maximum allowed length for a ticket subject, in characters.
pub const MAX_SUBJECT_LENGTH: usize = 100;

/// Validates a ticket subject.
pub fn validate_subject(subject: &str) -> Result<()> {
    if subject.trim().is_empty() {
        return Err(DeskError::Validation("Subject is required.".to_string()));
    }
    if subject.chars().count() > MAX_SUBJECT_LENGTH {
        return Err(DeskError::Validation(format!(
            "Subject exceeds maximum length of {} characters.",
            MAX_SUBJECT_LENGTH
        )));
    }
    Ok(())
}

/// Validates a ticket description.
pub fn validate_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(DeskError::Validation(
            "Description is required.".to_string(),
        ));
    }
    Ok(())
}

/// Validates both fields of a ticket about to be submitted.
pub fn validate_new_ticket(ticket: &NewTicket) -> Result<()> {
    validate_subject(&ticket.subject)?;
    validate_description(&ticket.description)
}

/// Parses a ticket ID typed by the user. IDs start at 1.
pub fn parse_ticket_id(input: &str) -> Result<u64> {
    match input.trim().parse::<u64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(DeskError::Validation(
            "Enter a ticket ID of 1 or greater.".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_subject_empty() {
        assert!(validate_subject("").is_err());
        assert!(validate_subject("   ").is_err());
    }

    #[test]
    fn test_validate_subject_valid() {
        assert!(validate_subject("Printer on fire").is_ok());
    }

    #[test]
    fn test_validate_subject_too_long() {
        let at_limit = "s".repeat(MAX_SUBJECT_LENGTH);
        assert!(validate_subject(&at_limit).is_ok());
        let over = "s".repeat(MAX_SUBJECT_LENGTH + 1);
        assert!(validate_subject(&over).is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("\n\t").is_err());
        assert!(validate_description("Steps to reproduce").is_ok());
    }

    #[test]
    fn test_validate_new_ticket_reports_subject_first() {
        let err = validate_new_ticket(&NewTicket::new("", "")).unwrap_err();
        assert_eq!(err.to_string(), "Subject is required.");
    }

    #[test]
    fn test_parse_ticket_id() {
        assert_eq!(parse_ticket_id("42").unwrap(), 42);
        assert_eq!(parse_ticket_id(" 7 ").unwrap(), 7);
        assert!(parse_ticket_id("0").is_err());
        assert!(parse_ticket_id("").is_err());
        assert!(parse_ticket_id("abc").is_err());
        assert!(parse_ticket_id("99999999999999999999999").is_err());
    }
}
