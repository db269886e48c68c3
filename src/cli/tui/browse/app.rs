use std::time::Duration;
use ratatui::{
    crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    crossterm::execute,
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time;

use crate::catalog::CatalogSource;
use crate::config::ShowroomConfig;
use crate::render::Container;
use crate::viewer::{fetch_action, Viewer, ViewerAction};
use crate::Result;
use super::events::AppEvent;
use super::screens::catalog::{self, CatalogView};
use super::state::{BrowseState, Intent};
use super::theme::Theme;

/// How long the input reader waits before checking for shutdown
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Main application struct
pub struct App {
    /// Catalog store and rendered cards
    viewer: Viewer<Container>,
    /// Search input, focus and scroll
    state: BrowseState,
    /// Theme for styling
    theme: Theme,
    title: String,
    /// Catalog source; taken when the load task starts
    source: Option<Box<dyn CatalogSource>>,
    /// Whether the app should quit
    should_quit: bool,
}

impl App {
    /// Create a new app instance
    pub fn new(config: &ShowroomConfig, source: Box<dyn CatalogSource>) -> Self {
        Self {
            viewer: Viewer::new(Container::new(), config.messages.clone()),
            state: BrowseState::default(),
            theme: Theme::default(),
            title: config.title.clone(),
            source: Some(source),
            should_quit: false,
        }
    }

    pub fn viewer(&self) -> &Viewer<Container> {
        &self.viewer
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        terminal.clear()?;
        execute!(std::io::stdout(), EnableMouseCapture)?;

        // Create event channel
        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();

        self.spawn_input_reader(event_tx.clone());
        self.spawn_catalog_load(event_tx);

        // Main render loop
        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Closing the channel stops the input reader
        drop(event_rx);

        // Cleanup
        let _ = execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            // Draw UI
            terminal.draw(|frame| self.draw(frame))?;

            match time::timeout(Duration::from_millis(250), event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event),
                Ok(None) => break, // Channel closed
                Err(_) => self.handle_event(AppEvent::Tick),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Draw the current state and remember the widget areas
    pub fn draw(&mut self, frame: &mut Frame) {
        let drawn = catalog::render(
            frame,
            &CatalogView {
                title: &self.title,
                state: &self.state,
                container: self.viewer.surface(),
                catalog_size: self.viewer.store().len(),
                theme: &self.theme,
            },
        );

        self.state.layout = drawn.layout;
        self.state.clamp_scroll(drawn.content_lines);
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: AppEvent) {
        let intent = match event {
            AppEvent::Key(key) => self.state.handle_key(key),
            AppEvent::Mouse(mouse) => self.state.handle_mouse(mouse),
            AppEvent::CatalogLoaded(items) => {
                self.apply(ViewerAction::LoadComplete(items));
                None
            }
            AppEvent::CatalogFailed(reason) => {
                self.apply(ViewerAction::LoadFailed(reason));
                None
            }
            AppEvent::Resize(_, _) | AppEvent::Tick => None,
        };

        match intent {
            Some(Intent::Search(query)) => self.apply(ViewerAction::SearchTriggered(query)),
            Some(Intent::Quit) => self.should_quit = true,
            None => {}
        }
    }

    /// Dispatch to the viewer; a new render starts at the top
    fn apply(&mut self, action: ViewerAction) {
        self.viewer.dispatch(action);
        self.state.scroll = 0;
    }

    /// Spawn the terminal input reader
    fn spawn_input_reader(&self, input_tx: UnboundedSender<AppEvent>) {
        tokio::task::spawn_blocking(move || {
            while !input_tx.is_closed() {
                match event::poll(INPUT_POLL) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(_) => break,
                }

                let app_event = match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                    Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                    Ok(Event::Resize(width, height)) => AppEvent::Resize(width, height),
                    Ok(_) => continue,
                    Err(_) => break,
                };

                if input_tx.send(app_event).is_err() {
                    break;
                }
            }
        });
    }

    /// Spawn the one-shot catalog load
    fn spawn_catalog_load(&mut self, event_tx: UnboundedSender<AppEvent>) {
        let Some(source) = self.source.take() else {
            return;
        };

        tokio::spawn(async move {
            let event = match fetch_action(source.as_ref()).await {
                ViewerAction::LoadComplete(items) => AppEvent::CatalogLoaded(items),
                ViewerAction::LoadFailed(reason) => AppEvent::CatalogFailed(reason),
                ViewerAction::SearchTriggered(_) => return,
            };
            let _ = event_tx.send(event);
        });
    }
}
