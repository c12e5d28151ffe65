use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::events::EventHandler;
use crate::store::{HttpMessageStore, MessageStore};
use crate::tea::message::SystemMsg;
use crate::tea::{update, CommandExecutor, Model, Msg};
use crate::theme::Theme;

/// The running board: model, command executor and the channel results come back on
pub struct App {
    model: Model,
    executor: CommandExecutor,
    receiver: mpsc::UnboundedReceiver<Msg>,
    event_handler: EventHandler,
    theme: Theme,
}

impl App {
    /// Build an app talking to the HTTP store named in the configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let store = HttpMessageStore::new(&config.base_url, config.request_timeout())
            .map_err(|e| anyhow::anyhow!("Failed to create message store: {}", e))?;
        tracing::info!("Using message store at {}", store.base_url());
        Ok(Self::with_store(Arc::new(store), config))
    }

    pub fn with_store(store: Arc<dyn MessageStore>, config: &AppConfig) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            model: Model::from_config(config),
            executor: CommandExecutor::new(store, sender),
            receiver,
            event_handler: EventHandler::new(),
            theme: Theme::from_name(config.theme),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Fold one message into the model and run the resulting commands
    pub fn dispatch(&mut self, msg: Msg) {
        let model = std::mem::take(&mut self.model);
        let result = update(model, msg);
        self.model = result.model;
        for command in result.commands {
            self.executor.execute(command);
        }
    }

    /// Kick off the initial fetch
    pub fn start(&mut self) {
        self.dispatch(SystemMsg::Init.into());
    }

    /// Apply every completion that has already arrived. Returns how many were applied.
    pub fn drain_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.receiver.try_recv() {
            self.dispatch(msg);
            applied += 1;
        }
        applied
    }

    /// Wait for the next completion or timer and apply it
    pub async fn process_next(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    /// Stop in-flight work; anything completing afterwards is ignored
    pub fn shutdown(&mut self) {
        self.executor.shutdown();
        // Drop whatever was queued before cancellation took effect
        while self.receiver.try_recv().is_ok() {}
    }

    pub fn should_quit(&self) -> bool {
        self.model.ui.should_quit
    }

    pub async fn run(&mut self) -> Result<()> {
        // Check if we're running in a proper terminal
        if !std::io::stdout().is_tty() {
            return Err(anyhow::anyhow!(
                "msgboard requires a proper terminal (TTY) to run. Please run this application in a terminal emulator."
            ));
        }

        // Setup terminal
        enable_raw_mode().map_err(|e| {
            anyhow::anyhow!(
                "Failed to enable raw mode: {}. Make sure you're running in a proper terminal.",
                e
            )
        })?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| anyhow::anyhow!("Failed to setup terminal: {}", e))?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal =
            Terminal::new(backend).map_err(|e| anyhow::anyhow!("Failed to create terminal: {}", e))?;

        self.start();
        let result = self.run_loop(&mut terminal).await;
        self.shutdown();

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        let mut last_tick = Instant::now();
        let tick_rate = Duration::from_millis(50);

        loop {
            self.drain_pending();
            self.model.sync_transitions(Instant::now());

            let model = &self.model;
            let theme = &self.theme;
            terminal.draw(|f| crate::ui::render(f, model, theme))?;

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(msg) = self.event_handler.handle_key_event(key, &self.model) {
                        self.dispatch(msg);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
            }

            if self.should_quit() {
                tracing::info!("Quit requested");
                break;
            }
        }

        Ok(())
    }
}
