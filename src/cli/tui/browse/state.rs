use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

/// Lines moved per mouse wheel notch
const WHEEL_STEP: u16 = 3;

/// Which widget receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    SearchInput,
    SearchButton,
    Cards,
}

impl Focus {
    /// Next widget in Tab order
    pub fn next(self) -> Self {
        match self {
            Focus::SearchInput => Focus::SearchButton,
            Focus::SearchButton => Focus::Cards,
            Focus::Cards => Focus::SearchInput,
        }
    }

    /// Previous widget in Tab order
    pub fn previous(self) -> Self {
        match self {
            Focus::SearchInput => Focus::Cards,
            Focus::SearchButton => Focus::SearchInput,
            Focus::Cards => Focus::SearchButton,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Focus::SearchInput => "Search input",
            Focus::SearchButton => "Search button",
            Focus::Cards => "Cards",
        }
    }
}

/// Screen areas from the last draw, used for mouse hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub search_input: Rect,
    pub search_button: Rect,
    pub cards: Rect,
}

/// What the app should do after an input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Run a search with this query
    Search(String),
    /// Leave the browser
    Quit,
}

/// UI state of the browser screen
#[derive(Debug, Default)]
pub struct BrowseState {
    pub search_input: Input,
    pub focus: Focus,
    /// First visible line of the card list
    pub scroll: u16,
    /// Total lines of the card list at the last draw
    pub content_lines: u16,
    pub layout: ScreenLayout,
}

impl BrowseState {
    /// Current text of the search input
    pub fn query(&self) -> &str {
        self.search_input.value()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Intent> {
        // Global keys first
        match key.code {
            KeyCode::Esc => return Some(Intent::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(Intent::Quit);
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return None;
            }
            _ => {}
        }

        match self.focus {
            Focus::SearchInput => match key.code {
                KeyCode::Enter => Some(self.search_intent()),
                _ => {
                    self.search_input.handle_event(&Event::Key(key));
                    None
                }
            },
            Focus::SearchButton => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Some(self.search_intent()),
                _ => None,
            },
            Focus::Cards => {
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
                    KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
                    KeyCode::PageUp => self.scroll_up(self.page_height()),
                    KeyCode::PageDown => self.scroll_down(self.page_height()),
                    KeyCode::Home => self.scroll = 0,
                    KeyCode::End => self.scroll = self.max_scroll(),
                    KeyCode::Char('/') => self.focus = Focus::SearchInput,
                    _ => {}
                }
                None
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Intent> {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.layout.search_button.contains(position) {
                    self.focus = Focus::SearchButton;
                    return Some(self.search_intent());
                }
                if self.layout.search_input.contains(position) {
                    self.focus = Focus::SearchInput;
                } else if self.layout.cards.contains(position) {
                    self.focus = Focus::Cards;
                }
                None
            }
            MouseEventKind::ScrollDown => {
                self.scroll_down(WHEEL_STEP);
                None
            }
            MouseEventKind::ScrollUp => {
                self.scroll_up(WHEEL_STEP);
                None
            }
            _ => None,
        }
    }

    /// Keep the scroll offset inside the current content
    pub fn clamp_scroll(&mut self, content_lines: u16) {
        self.content_lines = content_lines;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn search_intent(&self) -> Intent {
        Intent::Search(self.query().to_string())
    }

    fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    fn max_scroll(&self) -> u16 {
        self.content_lines.saturating_sub(1)
    }

    fn page_height(&self) -> u16 {
        // Inside the card list borders
        self.layout.cards.height.saturating_sub(2).max(1)
    }
}
