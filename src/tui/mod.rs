//! Terminal UI for Strictly Gomoku.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::config::GameConfig;
use crate::games::gomoku::ChannelPresenter;
use crate::orchestrator::{Flow, Orchestrator};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tokio::time::{Duration, Instant};
use tracing::{debug, error, info, instrument};

/// Longest wait for a key before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the game in the terminal until the player quits.
#[instrument(skip(config))]
pub async fn run_tui(config: GameConfig) -> Result<()> {
    info!("Starting Strictly Gomoku TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

async fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: GameConfig,
) -> Result<()> {
    let (presenter, mut events) = ChannelPresenter::channel();
    let mut orchestrator = Orchestrator::new(config, Box::new(presenter));
    let mut app = App::new();

    loop {
        while let Ok(event) = events.try_recv() {
            app.handle_event(event);
        }
        terminal.draw(|frame| ui::draw(frame, &app))?;

        let now = Instant::now();
        if orchestrator.poll_ai(now).is_some() {
            continue;
        }

        let timeout = orchestrator
            .deadline()
            .map_or(POLL_INTERVAL, |due| {
                due.saturating_duration_since(now).min(POLL_INTERVAL)
            });

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            debug!(code = ?key.code, "Key pressed");
            if let Some(command) = input::handle_key(&mut app, key.code)
                && orchestrator.handle(command) == Flow::Quit
            {
                info!("User quit");
                return Ok(());
            }
        }

        tokio::task::yield_now().await;
    }
}
