//! Section button strip. Button geometry is shared with mouse hit-testing.

use ratatui::{
    layout::{Position, Rect},
    text::Span,
    widgets::{Block, Borders},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::console::{Section, SECTIONS};
use crate::constants::SECTION_BUTTON_GAP;
use crate::ui::state::AppState;

fn button_label(section: &Section) -> String {
    format!(" {} {} ", section.icon, section.display_name())
}

/// Screen rect of each section button that fits in `area`, in table order.
///
/// Buttons that would overflow the right edge are dropped.
pub fn section_button_rects(area: Rect) -> Vec<(&'static Section, Rect)> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    if inner.height == 0 {
        return Vec::new();
    }
    let right = inner.x + inner.width;
    let mut x = inner.x;
    let mut rects = Vec::new();
    for section in SECTIONS {
        let width = button_label(section).width() as u16;
        if x + width > right {
            break;
        }
        rects.push((section, Rect::new(x, inner.y, width, 1)));
        x += width + SECTION_BUTTON_GAP;
    }
    rects
}

/// Section whose button covers the screen cell `(column, row)`.
pub fn section_at(area: Rect, column: u16, row: u16) -> Option<&'static Section> {
    section_button_rects(area)
        .into_iter()
        .find(|(_, rect)| rect.contains(Position::new(column, row)))
        .map(|(section, _)| section)
}

pub fn render_sections(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let block = Block::default()
        .title(Span::styled(t!("title.sections").to_string(), t.header_style()))
        .borders(Borders::ALL)
        .border_style(t.border_style());
    frame.render_widget(block, area);

    let current = state.session.current_section();
    for (section, rect) in section_button_rects(area) {
        let style = t.button_style(section.color, section.id == current);
        frame.render_widget(Span::styled(button_label(section), style), rect);
    }
}
