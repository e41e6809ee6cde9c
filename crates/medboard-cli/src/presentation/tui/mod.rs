//! Interactive dashboard
//!
//! The loop owns the controller. Each turn it draws the current state, then
//! waits for whichever comes first: a terminal event or a background
//! message (request completion, debounce timer). Both are turned into
//! `Msg` values and fed through `AppController::update`; resulting effects
//! go to the dispatcher.

pub mod input;
pub mod ui;
pub mod views;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use medboard_engine::{AppController, Msg};
use medboard_runtime::Dispatcher;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::UnboundedReceiver;

use input::UiState;

pub struct TuiApp {
    controller: AppController,
    dispatcher: Dispatcher,
    ui: UiState,
}

impl TuiApp {
    pub fn new(controller: AppController, dispatcher: Dispatcher) -> Self {
        Self {
            controller,
            dispatcher,
            ui: UiState::default(),
        }
    }

    /// Run until the user quits. Must be awaited inside a tokio runtime.
    pub async fn run(mut self, rx: UnboundedReceiver<Msg>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, rx).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        mut rx: UnboundedReceiver<Msg>,
    ) -> Result<()> {
        let mut events = EventStream::new();

        let effects = self.controller.start();
        self.dispatcher.dispatch(effects);

        loop {
            terminal.draw(|f| ui::draw(f, self.controller.state(), &self.ui))?;

            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) => {
                        let msgs = input::map_key(&mut self.ui, self.controller.state(), key);
                        for msg in msgs {
                            self.apply(msg);
                        }
                    }
                    // Resize and the rest only need a redraw
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                Some(msg) = rx.recv() => self.apply(msg),
            }

            if self.ui.should_quit {
                tracing::info!("quit requested");
                break;
            }
        }

        Ok(())
    }

    fn apply(&mut self, msg: Msg) {
        let effects = self.controller.update(msg);
        self.dispatcher.dispatch(effects);
    }
}
