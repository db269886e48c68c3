//! Card list screen with search bar

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

use crate::cli::tui::browse::state::{BrowseState, Focus, ScreenLayout};
use crate::cli::tui::browse::theme::Theme;
use crate::render::text::plain_text;
use crate::render::{Card, Container};

/// Everything the screen needs for one draw
pub struct CatalogView<'a> {
    pub title: &'a str,
    pub state: &'a BrowseState,
    pub container: &'a Container,
    pub catalog_size: usize,
    pub theme: &'a Theme,
}

/// Result of a draw: widget areas and card list height in lines
#[derive(Debug, Clone, Copy)]
pub struct Drawn {
    pub layout: ScreenLayout,
    pub content_lines: u16,
}

pub fn render(frame: &mut Frame, view: &CatalogView) -> Drawn {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Header
            Constraint::Length(3),      // Search bar
            Constraint::Min(5),         // Cards
            Constraint::Length(1),      // Help
        ])
        .split(frame.area());

    let search_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(chunks[1]);

    render_header(frame, chunks[0], view);
    render_search_input(frame, search_chunks[0], view);
    render_search_button(frame, search_chunks[1], view);
    let content_lines = render_cards(frame, chunks[2], view);
    render_help(frame, chunks[3], view.state.focus);

    Drawn {
        layout: ScreenLayout {
            search_input: search_chunks[0],
            search_button: search_chunks[1],
            cards: chunks[2],
        },
        content_lines,
    }
}

fn render_header(frame: &mut Frame, area: Rect, view: &CatalogView) {
    let shown = view.container.cards().len();

    let header = Line::from(vec![
        Span::styled(format!(" {} ", view.title), view.theme.heading),
        Span::styled("•", view.theme.muted),
        Span::raw(format!(" {} cars in catalog ", view.catalog_size)),
        Span::styled("•", view.theme.muted),
        Span::raw(format!(" {} shown", shown)),
    ]);

    let paragraph = Paragraph::new(header)
        .block(Block::default().borders(Borders::ALL).title(" Showroom "));

    frame.render_widget(paragraph, area);
}

fn render_search_input(frame: &mut Frame, area: Rect, view: &CatalogView) {
    let focused = view.state.focus == Focus::SearchInput;
    let input = &view.state.search_input;

    // Keep the cursor visible when the text is wider than the box
    let width = area.width.saturating_sub(3) as usize;
    let scroll = input.visual_scroll(width);

    let paragraph = Paragraph::new(input.value())
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(view.theme.border(focused)),
        );

    frame.render_widget(paragraph, area);

    if focused {
        let cursor = input.visual_cursor().max(scroll) - scroll;
        frame.set_cursor_position((area.x + cursor as u16 + 1, area.y + 1));
    }
}

fn render_search_button(frame: &mut Frame, area: Rect, view: &CatalogView) {
    let focused = view.state.focus == Focus::SearchButton;
    let style = if focused {
        view.theme.button_focused
    } else {
        view.theme.button
    };

    let button = Paragraph::new(Line::from(Span::styled("Search", style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(view.theme.border(focused)),
        );

    frame.render_widget(button, area);
}

/// Draw the card list; returns its length in lines
fn render_cards(frame: &mut Frame, area: Rect, view: &CatalogView) -> u16 {
    let focused = view.state.focus == Focus::Cards;

    let lines: Vec<Line> = match view.container.placeholder() {
        Some(placeholder) => vec![
            Line::from(""),
            Line::from(Span::styled(
                placeholder.message.clone(),
                view.theme.placeholder_style(placeholder.kind),
            ))
            .alignment(Alignment::Center),
        ],
        None => view
            .container
            .cards()
            .iter()
            .flat_map(|card| card_lines(card, view.theme))
            .collect(),
    };

    // Estimate of the wrapped height; word wrapping may add a few lines
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let wrapped: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(inner_width).max(1))
        .sum();
    let content_lines = u16::try_from(wrapped).unwrap_or(u16::MAX);

    let list = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((view.state.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Cars ")
                .border_style(view.theme.border(focused)),
        );

    frame.render_widget(list, area);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"));

    let mut scrollbar_state =
        ScrollbarState::new(content_lines as usize).position(view.state.scroll as usize);

    frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);

    content_lines
}

fn card_lines<'a>(card: &'a Card, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(Span::styled(card.heading.as_str(), theme.heading))];

    if !card.image.src.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("▣ ", theme.muted),
            Span::styled(format!("{} ({})", card.image.alt, card.image.src), theme.muted),
        ]));
    }

    for spec_line in plain_text(&card.specifications).lines() {
        lines.push(Line::from(Span::styled(
            spec_line.to_string(),
            Style::default().fg(Color::White),
        )));
    }

    if !card.history.is_empty() {
        lines.push(Line::from(card.history.as_str()));
    }

    lines.push(Line::from(vec![
        Span::styled(card.link.label.as_str(), theme.highlight),
        Span::raw(" "),
        Span::styled(card.link.href.as_str(), theme.link),
    ]));
    lines.push(Line::from(""));

    lines
}

fn render_help(frame: &mut Frame, area: Rect, focus: Focus) {
    let help_text = Line::from(vec![
        Span::raw(" "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" Search  "),
        Span::styled("•", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(" Focus  "),
        Span::styled("•", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::raw(" Scroll  "),
        Span::styled("•", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(" Quit  "),
        Span::styled("•", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(focus.name(), Style::default().fg(Color::Yellow)),
    ]);

    let help = Paragraph::new(help_text)
        .style(Style::default().bg(Color::DarkGray));

    frame.render_widget(help, area);
}
