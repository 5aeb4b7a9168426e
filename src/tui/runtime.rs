//! Terminal ownership, event loop and effect execution.
//!
//! Effects are spawned as independent tasks on a tokio runtime. Each task
//! sends its [`ApiEvent`] to the inbox, which the loop drains once per
//! frame before waiting for input again.

use super::app::App;
use super::effects::{ApiEvent, Effect};
use super::ui;
use crate::{client::TicketClient, config::DeskConfig, error::Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// How long to wait for terminal input before checking the inbox again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

struct EffectRunner {
    runtime: tokio::runtime::Runtime,
    client: TicketClient,
    inbox_tx: UnboundedSender<ApiEvent>,
}

impl EffectRunner {
    fn dispatch(&self, effects: Vec<Effect>) {
        for effect in effects {
            tracing::debug!(mount = effect.mount(), ?effect, "Dispatching effect");
            let client = self.client.clone();
            let inbox_tx = self.inbox_tx.clone();
            self.runtime.spawn(async move {
                let event = effect.execute(&client).await;
                // The receiver is gone only when the UI has exited.
                let _ = inbox_tx.send(event);
            });
        }
    }
}

pub fn run_tui(config: DeskConfig) -> Result<()> {
    let client = TicketClient::new(&config.api_base_url()?)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let (inbox_tx, mut inbox_rx) = unbounded_channel();
    let runner = EffectRunner {
        runtime,
        client,
        inbox_tx,
    };
    tracing::info!(base_url = %runner.client.base_url(), "Starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.tui.theme);
    let res = run_app(&mut terminal, &mut app, &runner, &mut inbox_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Outstanding requests are abandoned, not awaited.
    runner.runtime.shutdown_background();

    if let Err(err) = &res {
        tracing::error!(error = %err, "TUI exited with error");
    }
    res.map_err(Into::into)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    runner: &EffectRunner,
    inbox_rx: &mut UnboundedReceiver<ApiEvent>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        while let Ok(api_event) = inbox_rx.try_recv() {
            let effects = app.apply(api_event);
            runner.dispatch(effects);
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let effects = app.handle_key(key);
                runner.dispatch(effects);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
