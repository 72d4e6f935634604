//! Main render/view function (View in TEA pattern)
//!
//! Paints the [`FrameView`] composed by `nwish-app`. Layout is already
//! decided there; this module only attaches styles.

#[cfg(test)]
mod tests;

use nwish_app::frame::{FrameLine, FrameView, NavSegment, PLACEHOLDER};
use nwish_app::spinner::SPINNER_FRAMES;
use nwish_app::state::AppState;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme::Theme;

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let lines = styled_lines(&nwish_app::view(state), &state.style.title, theme);
    frame.render_widget(Paragraph::new(lines), frame.area());
}

/// Convert a composed frame into styled lines
pub fn styled_lines(view: &FrameView, title: &str, theme: &Theme) -> Vec<Line<'static>> {
    match view {
        FrameView::Loading { text, failed } => loading_lines(text, *failed, theme),
        FrameView::Placeholder => vec![Line::raw(PLACEHOLDER)],
        FrameView::Screen(lines) => lines.iter().map(|l| screen_line(l, title, theme)).collect(),
    }
}

fn loading_lines(text: &str, failed: bool, theme: &Theme) -> Vec<Line<'static>> {
    text.split('\n')
        .map(|line| {
            if line.starts_with("press ") {
                Line::styled(line.to_string(), theme.hint)
            } else if failed {
                Line::styled(line.to_string(), theme.error)
            } else {
                spinner_line(line, theme)
            }
        })
        .collect()
}

/// Color the glyph of the `"<glyph> <status>"` line
fn spinner_line(line: &str, theme: &Theme) -> Line<'static> {
    let glyph = SPINNER_FRAMES.iter().find(|g| line.starts_with(**g));
    match glyph {
        Some(glyph) => Line::from(vec![
            Span::styled(glyph.to_string(), theme.spinner),
            Span::raw(line[glyph.len()..].to_string()),
        ]),
        None => Line::raw(line.to_string()),
    }
}

/// Left border and padding in front of the title
const TITLE_PREFIX: &str = "│ ";

fn screen_line(line: &FrameLine, title: &str, theme: &Theme) -> Line<'static> {
    match line {
        FrameLine::Header(text) => header_line(text, title, theme),
        FrameLine::Nav(segments) => nav_line(segments, theme),
        FrameLine::Blank => Line::default(),
        FrameLine::Body(text) => Line::raw(text.clone()),
        FrameLine::Footer(text) => Line::styled(text.clone(), theme.rule),
    }
}

/// Box and rule in the rule color, the title text in the title color.
/// A title cut short by a narrow terminal keeps its color up to the cut.
fn header_line(text: &str, title: &str, theme: &Theme) -> Line<'static> {
    let Some(rest) = text.strip_prefix(TITLE_PREFIX) else {
        return Line::styled(text.to_string(), theme.rule);
    };

    let shown: usize = rest
        .chars()
        .zip(title.chars())
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a.len_utf8())
        .sum();
    if shown == 0 {
        return Line::styled(text.to_string(), theme.rule);
    }

    Line::from(vec![
        Span::styled(TITLE_PREFIX, theme.rule),
        Span::styled(rest[..shown].to_string(), theme.title),
        Span::styled(rest[shown..].to_string(), theme.rule),
    ])
}

fn nav_line(segments: &[NavSegment], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(segments.len() * 3);
    for segment in segments {
        let label_style = if segment.active {
            theme.nav_active()
        } else {
            theme.nav_text
        };
        spans.push(Span::styled(segment.key_text.clone(), theme.nav_key));
        spans.push(Span::styled(segment.label.clone(), label_style));
        if segment.gap > 0 {
            spans.push(Span::raw(" ".repeat(segment.gap)));
        }
    }
    Line::from(spans)
}
