use super::*;
use crate::test_utils::TestTerminal;
use nwish_app::config::Settings;
use nwish_app::{update, Message, Pages};
use nwish_core::Document;

fn numbered(n: usize) -> Document {
    Document::from_text(
        (0..n)
            .map(|i| format!("line {}", i))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

fn ready_state(width: u16, height: u16) -> AppState {
    let mut state = AppState::new(numbered(100), Settings::default());
    state.enter_screen();
    update(&mut state, Message::Resize { width, height });
    state
}

#[test]
fn test_loading_screen_renders_spinner() {
    let state = AppState::new(numbered(3), Settings::default());
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state, &Theme::default()));

    assert!(term.line_contains(2, "Loading content..."));
    assert!(term.buffer_contains("press c to continue"));
    assert!(term.buffer_contains("press q to quit"));
}

#[test]
fn test_loading_screen_shows_error() {
    let mut state = AppState::new(numbered(3), Settings::default());
    update(
        &mut state,
        Message::LoadFailed {
            message: "Could not load page blogs.md".into(),
        },
    );
    let theme = Theme::default();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state, &theme));

    assert!(term.line_contains(2, "Could not load page blogs.md"));
    assert!(!term.buffer_contains("press c"));
    assert_eq!(term.buffer()[(0, 2)].fg, palette_error());
}

fn palette_error() -> ratatui::style::Color {
    crate::theme::palette::ERROR
}

#[test]
fn test_placeholder_before_first_resize() {
    let mut state = AppState::new(numbered(3), Settings::default());
    state.enter_screen();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state, &Theme::default()));

    assert!(term.line_contains(0, "Initializing, Please wait!"));
}

#[test]
fn test_ready_screen_layout() {
    let state = ready_state(80, 24);
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state, &Theme::default()));

    assert!(term.line_contains(1, "Nimai C. (Dev)"));
    assert!(term.line_contains(4, "(a) About"));
    assert!(term.line_contains(4, "(g) Active Repos"));
    assert!(term.line_contains(7, "line 0"));
    assert!(term.line_contains(20, "line 13"));
    assert!(term.line_contains(22, "  0%"));
    assert!(!term.buffer_contains("line 14"));
}

#[test]
fn test_title_and_nav_key_colors() {
    let state = ready_state(80, 24);
    let theme = Theme::default();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state, &theme));

    // "│ Nimai..." : title starts at column 2
    assert_eq!(term.buffer()[(2, 1)].fg, theme.title.fg.unwrap());
    assert_eq!(term.buffer()[(0, 1)].fg, theme.rule.fg.unwrap());
    // "(a)" on the nav row
    assert_eq!(term.buffer()[(0, 4)].fg, theme.nav_key.fg.unwrap());
    assert_eq!(term.buffer()[(4, 4)].fg, theme.nav_text.fg.unwrap());
}

#[test]
fn test_truncated_title_keeps_title_color() {
    let state = ready_state(8, 24);
    let theme = Theme::default();
    let mut term = TestTerminal::with_size(8, 24);
    term.draw_with(|frame| view(frame, &state, &theme));

    // "│ Nimai " : the box edge is cut off, the visible title is still colored
    assert!(term.line_contains(1, "│ Nimai"));
    assert_eq!(term.buffer()[(0, 1)].fg, theme.rule.fg.unwrap());
    assert_eq!(term.buffer()[(2, 1)].fg, theme.title.fg.unwrap());
    assert_eq!(term.buffer()[(6, 1)].fg, theme.title.fg.unwrap());
}

#[test]
fn test_scrolled_frame_updates_footer() {
    let mut state = ready_state(80, 24);
    update(&mut state, Message::ScrollToBottom);
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state, &Theme::default()));

    assert!(term.line_contains(22, "100%"));
    assert!(term.line_contains(20, "line 99"));
}

#[test]
fn test_active_page_is_underlined() {
    let mut state = AppState::new(numbered(10), Settings::default());
    let mut pages = Pages::new();
    pages.insert('a', Document::from_text("About me"));
    update(&mut state, Message::PagesLoaded(pages));
    state.enter_screen();
    update(&mut state, Message::Resize { width: 80, height: 24 });
    update(&mut state, Message::ShowPage('a'));

    let theme = Theme::default();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state, &theme));

    assert!(term.line_contains(7, "About me"));
    assert_eq!(term.buffer()[(4, 4)].modifier, theme.nav_active().add_modifier);
}

#[test]
fn test_compact_terminal_does_not_overflow() {
    let state = ready_state(40, 12);
    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &state, &Theme::default()));

    assert!(term.line_contains(1, "Nimai C. (Dev)"));
    assert!(term.line_contains(7, "line 0"));
    assert!(term.line_contains(10, "  0%"));
}
