use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use showroom::catalog::{FileSource, Item};
use showroom::cli::tui::browse::app::App;
use showroom::cli::tui::browse::events::AppEvent;
use showroom::config::ShowroomConfig;

fn draw(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn new_app() -> App {
    App::new(
        &ShowroomConfig::default(),
        Box::new(FileSource::new("unused.json")),
    )
}

fn cars() -> Vec<Item> {
    vec![
        Item::new(
            "Fusca",
            "img/fusca.jpg",
            "<strong>Motor:</strong> 1.3",
            "O carro do povo.",
            "https://example.com/fusca",
        ),
        Item::new(
            "Mustang",
            "img/mustang.jpg",
            "V8",
            "Pony car.",
            "https://example.com/mustang",
        ),
    ]
}

#[test]
fn test_draws_cards_and_header() {
    let mut app = new_app();
    app.handle_event(AppEvent::CatalogLoaded(cars()));

    let screen = draw(&mut app);
    assert!(screen.contains("Classic Cars"));
    assert!(screen.contains("2 cars in catalog"));
    assert!(screen.contains("Fusca"));
    assert!(screen.contains("Motor: 1.3"));
    assert!(!screen.contains("<strong>"));
    assert!(screen.contains("https://example.com/mustang"));
    assert!(screen.contains("Search"));
}

#[test]
fn test_draws_placeholder_after_empty_search() {
    let mut app = new_app();
    app.handle_event(AppEvent::CatalogLoaded(cars()));
    for ch in "zzz".chars() {
        app.handle_event(AppEvent::Key(KeyEvent::new(
            KeyCode::Char(ch),
            KeyModifiers::NONE,
        )));
    }
    app.handle_event(AppEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));

    let screen = draw(&mut app);
    assert!(screen.contains("No cars found for the search term."));
    assert!(screen.contains("0 shown"));
    assert!(screen.contains("zzz"));
}

#[test]
fn test_draws_load_failure() {
    let mut app = new_app();
    app.handle_event(AppEvent::CatalogFailed("HTTP 404".to_string()));

    let screen = draw(&mut app);
    assert!(screen.contains("Could not load the classic cars."));
    assert!(screen.contains("0 cars in catalog"));
}

#[test]
fn test_draw_records_layout_for_mouse() {
    let mut app = new_app();
    draw(&mut app);

    let layout = app.state().layout;
    assert_eq!(layout.search_button.width, 12);
    assert_eq!(layout.search_input.y, 3);
    assert_eq!(layout.cards.y, 6);
}
