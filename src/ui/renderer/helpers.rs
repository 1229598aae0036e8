//! Shared rendering helpers: scrollbar, centered rect, prompt spans.

use ratatui::{
    layout::{Margin, Rect},
    text::Span,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::constants::PROMPT_USER_HOST;
use crate::ui::theme::Theme;

/// `root@hosting ~ $ ` as styled spans.
pub fn prompt_spans(t: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::styled(PROMPT_USER_HOST, t.prompt_user_style()),
        Span::raw(" "),
        Span::styled("~", t.prompt_path_style()),
        Span::raw(" "),
        Span::styled("$", t.prompt_symbol_style()),
        Span::raw(" "),
    ]
}

/// Display width of [`prompt_spans`].
pub fn prompt_width() -> usize {
    PROMPT_USER_HOST.len() + " ~ $ ".len()
}

/// Render a vertical scrollbar on the right side of `area`.
///
/// Only renders if `total > visible_height`.
pub fn render_scrollbar(frame: &mut Frame, area: Rect, total: usize, position: usize) {
    let visible_height = area.height as usize;
    if total <= visible_height {
        return;
    }
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("▲"))
        .end_symbol(Some("▼"));
    let mut scrollbar_state = ScrollbarState::new(total.saturating_sub(visible_height))
        .position(position);
    frame.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            vertical: 0,
            horizontal: 0,
        }),
        &mut scrollbar_state,
    );
}

/// Return a `Rect` centered within `area` with the given dimensions.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
