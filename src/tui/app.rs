use super::effects::{ApiEvent, Effect, MountId};
use super::handlers;
use super::theme::ThemeMode;
use crate::client::ApiResult;
use crate::model::{NewTicket, Ticket};
use crate::validation::{self, MAX_SUBJECT_LENGTH};
use crossterm::event::KeyEvent;
use ratatui::widgets::TableState;

/// Longest ticket ID accepted in the status field.
const MAX_ID_DIGITS: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    Status,
    Dashboard,
}

impl View {
    pub const ALL: [View; 3] = [View::Form, View::Status, View::Dashboard];

    pub fn label(&self) -> &'static str {
        match self {
            View::Form => "Submit Ticket",
            View::Status => "Ticket Status",
            View::Dashboard => "Dashboard",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Form => "Submit a Support Ticket",
            View::Status => "Check Ticket Status",
            View::Dashboard => "Ticket Dashboard",
        }
    }

    pub fn hotkey(&self) -> &'static str {
        match self {
            View::Form => "F1",
            View::Status => "F2",
            View::Dashboard => "F3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Subject,
    Description,
    Submit,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Subject => FormField::Description,
            FormField::Description => FormField::Submit,
            FormField::Submit => FormField::Subject,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Subject => FormField::Submit,
            FormField::Description => FormField::Subject,
            FormField::Submit => FormField::Description,
        }
    }
}

/// State of the ticket submission form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub mount: MountId,
    pub subject: String,
    pub description: String,
    pub focus: FormField,
    pub submitting: bool,
    pub error: Option<String>,
    pub created: Option<Ticket>,
}

impl FormState {
    pub fn new(mount: MountId) -> Self {
        Self {
            mount,
            ..Self::default()
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Submitting..."
        } else {
            "Submit"
        }
    }

    /// Types a character into the focused field. The subject stops
    /// accepting input at its maximum length.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            FormField::Subject => {
                if c != '\n' && self.subject.chars().count() < MAX_SUBJECT_LENGTH {
                    self.subject.push(c);
                }
            }
            FormField::Description => self.description.push(c),
            FormField::Submit => {}
        }
    }

    pub fn delete_char(&mut self) {
        match self.focus {
            FormField::Subject => {
                self.subject.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Submit => {}
        }
    }

    /// Starts a submission. Returns `None` while one is in flight or when
    /// local validation fails.
    pub fn submit(&mut self) -> Option<Effect> {
        if self.submitting {
            return None;
        }
        self.error = None;
        self.created = None;

        let ticket = NewTicket::new(self.subject.clone(), self.description.clone());
        if let Err(e) = validation::validate_new_ticket(&ticket) {
            self.error = Some(e.to_string());
            return None;
        }

        self.submitting = true;
        Some(Effect::CreateTicket {
            mount: self.mount,
            ticket,
        })
    }

    pub fn apply_created(&mut self, result: ApiResult<Ticket>) {
        self.submitting = false;
        match result {
            Ok(ticket) => {
                self.created = Some(ticket);
                self.subject.clear();
                self.description.clear();
                self.focus = FormField::Subject;
            }
            Err(e) => self.error = Some(e.submit_message()),
        }
    }

    pub fn success_message(&self) -> Option<String> {
        self.created
            .as_ref()
            .map(|t| format!("Ticket submitted! Your Ticket ID: {}", t.id))
    }
}

/// State of the single-ticket lookup.
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub mount: MountId,
    pub ticket_id: String,
    pub fetching: bool,
    pub error: Option<String>,
    pub ticket: Option<Ticket>,
}

impl StatusState {
    pub fn new(mount: MountId) -> Self {
        Self {
            mount,
            ..Self::default()
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.ticket_id.is_empty() && !self.fetching
    }

    pub fn submit_label(&self) -> &'static str {
        if self.fetching {
            "Checking..."
        } else {
            "Check Status"
        }
    }

    /// Only digits are accepted, like a numeric input.
    pub fn insert_char(&mut self, c: char) {
        if c.is_ascii_digit() && self.ticket_id.len() < MAX_ID_DIGITS {
            self.ticket_id.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        self.ticket_id.pop();
    }

    pub fn submit(&mut self) -> Option<Effect> {
        if !self.can_submit() {
            return None;
        }
        self.error = None;
        self.ticket = None;

        let id = match validation::parse_ticket_id(&self.ticket_id) {
            Ok(id) => id,
            Err(e) => {
                self.error = Some(e.to_string());
                return None;
            }
        };

        self.fetching = true;
        Some(Effect::FetchTicket {
            mount: self.mount,
            id,
        })
    }

    pub fn apply_fetched(&mut self, result: ApiResult<Ticket>) {
        self.fetching = false;
        match result {
            Ok(ticket) => self.ticket = Some(ticket),
            Err(e) => self.error = Some(e.lookup_message().to_string()),
        }
    }
}

/// State of the ticket list.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub mount: MountId,
    /// Value of [`App::dashboard_refresh`] this dashboard was mounted under.
    pub refresh_key: u64,
    pub loading: bool,
    pub error: Option<String>,
    pub tickets: Vec<Ticket>,
    pub table_state: TableState,
}

impl DashboardState {
    pub fn new(mount: MountId, refresh_key: u64) -> Self {
        Self {
            mount,
            refresh_key,
            loading: true,
            ..Self::default()
        }
    }

    pub fn apply_listed(&mut self, result: ApiResult<Vec<Ticket>>) {
        self.loading = false;
        match result {
            Ok(tickets) => {
                self.table_state
                    .select(if tickets.is_empty() { None } else { Some(0) });
                self.tickets = tickets;
            }
            Err(e) => self.error = Some(e.list_message().to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.tickets.is_empty()
    }

    pub fn next(&mut self) {
        let count = self.tickets.len();
        if count > 0 {
            let i = self.table_state.selected().map_or(0, |i| (i + 1) % count);
            self.table_state.select(Some(i));
        }
    }

    pub fn previous(&mut self) {
        let count = self.tickets.len();
        if count > 0 {
            let i = match self.table_state.selected() {
                Some(0) | None => count - 1,
                Some(i) => i - 1,
            };
            self.table_state.select(Some(i));
        }
    }

    pub fn first(&mut self) {
        if !self.tickets.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub fn last(&mut self) {
        if !self.tickets.is_empty() {
            self.table_state.select(Some(self.tickets.len() - 1));
        }
    }
}

/// The visible feature panel. Exactly one exists at a time.
#[derive(Debug, Clone)]
pub enum Panel {
    Form(FormState),
    Status(StatusState),
    Dashboard(DashboardState),
}

impl Panel {
    pub fn view(&self) -> View {
        match self {
            Panel::Form(_) => View::Form,
            Panel::Status(_) => View::Status,
            Panel::Dashboard(_) => View::Dashboard,
        }
    }

    pub fn mount(&self) -> MountId {
        match self {
            Panel::Form(s) => s.mount,
            Panel::Status(s) => s.mount,
            Panel::Dashboard(s) => s.mount,
        }
    }
}

pub struct App {
    pub panel: Panel,
    pub theme: ThemeMode,
    /// Bumped on every successful submission; a dashboard mounted under an
    /// older value is remounted.
    pub dashboard_refresh: u64,
    pub should_quit: bool,
    last_mount: MountId,
}

impl App {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            panel: Panel::Form(FormState::new(1)),
            theme,
            dashboard_refresh: 0,
            should_quit: false,
            last_mount: 1,
        }
    }

    pub fn active_view(&self) -> View {
        self.panel.view()
    }

    /// Shows `view`. Switching to the visible view keeps its state.
    pub fn switch_view(&mut self, view: View) -> Vec<Effect> {
        if view == self.active_view() {
            return Vec::new();
        }
        self.mount(view)
    }

    /// Replaces the visible panel with a fresh instance of `view`.
    fn mount(&mut self, view: View) -> Vec<Effect> {
        self.last_mount += 1;
        let mount = self.last_mount;
        tracing::debug!(?view, mount, "Mounting panel");

        match view {
            View::Form => {
                self.panel = Panel::Form(FormState::new(mount));
                Vec::new()
            }
            View::Status => {
                self.panel = Panel::Status(StatusState::new(mount));
                Vec::new()
            }
            View::Dashboard => {
                self.panel = Panel::Dashboard(DashboardState::new(mount, self.dashboard_refresh));
                vec![Effect::FetchTickets { mount }]
            }
        }
    }

    /// Remounts the dashboard if it is visible.
    pub fn refresh_dashboard(&mut self) -> Vec<Effect> {
        if self.active_view() == View::Dashboard {
            self.mount(View::Dashboard)
        } else {
            Vec::new()
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = %self.theme, "Theme toggled");
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        handlers::handle_key(self, key)
    }

    /// Folds a response into the state of the panel that asked for it.
    pub fn apply(&mut self, event: ApiEvent) -> Vec<Effect> {
        match event {
            ApiEvent::TicketCreated { mount, result } => {
                // The success callback outlives the form.
                if result.is_ok() {
                    self.dashboard_refresh += 1;
                }
                match &mut self.panel {
                    Panel::Form(form) if form.mount == mount => form.apply_created(result),
                    _ => tracing::debug!(mount, "Dropping create response for unmounted form"),
                }
                let stale_dashboard = matches!(
                    &self.panel,
                    Panel::Dashboard(d) if d.refresh_key != self.dashboard_refresh
                );
                if stale_dashboard {
                    self.mount(View::Dashboard)
                } else {
                    Vec::new()
                }
            }
            ApiEvent::TicketFetched { mount, result } => {
                match &mut self.panel {
                    Panel::Status(status) if status.mount == mount => status.apply_fetched(result),
                    _ => tracing::debug!(mount, "Dropping lookup response for unmounted viewer"),
                }
                Vec::new()
            }
            ApiEvent::TicketsListed { mount, result } => {
                match &mut self.panel {
                    Panel::Dashboard(dashboard) if dashboard.mount == mount => {
                        dashboard.apply_listed(result)
                    }
                    _ => tracing::debug!(mount, "Dropping list response for unmounted dashboard"),
                }
                Vec::new()
            }
        }
    }

    pub fn form(&self) -> Option<&FormState> {
        match &self.panel {
            Panel::Form(s) => Some(s),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        match &mut self.panel {
            Panel::Form(s) => Some(s),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<&StatusState> {
        match &self.panel {
            Panel::Status(s) => Some(s),
            _ => None,
        }
    }

    pub fn status_mut(&mut self) -> Option<&mut StatusState> {
        match &mut self.panel {
            Panel::Status(s) => Some(s),
            _ => None,
        }
    }

    pub fn dashboard(&self) -> Option<&DashboardState> {
        match &self.panel {
            Panel::Dashboard(s) => Some(s),
            _ => None,
        }
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut DashboardState> {
        match &mut self.panel {
            Panel::Dashboard(s) => Some(s),
            _ => None,
        }
    }
}
