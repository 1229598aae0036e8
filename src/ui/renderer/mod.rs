//! Renderer module: split into focused submodules.
//!
//! - `header`: Pulse, product name, version, clock
//! - `sections`: Clickable section buttons
//! - `gauges`: CPU / RAM / DISK / NET cards with trend strips
//! - `terminal`: Scrollback, suggestion strip and input line
//! - `status_bar`: Footer with system line, keybinds and status message
//! - `overlays`: Help popup
//! - `helpers`: Shared rendering utilities

mod gauges;
mod header;
pub mod helpers;
mod overlays;
pub mod sections;
mod status_bar;
mod terminal;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::constants::*;

use super::state::AppState;

/// Rows taken by the footer (system line + keybind line).
const FOOTER_HEIGHT: u16 = 2;

/// Screen regions, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub sections: Rect,
    pub gauges: Rect,
    pub terminal: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(SECTION_BAR_HEIGHT),
                Constraint::Length(GAUGE_ROW_HEIGHT),
                Constraint::Min(5),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);
        Self {
            header: chunks[0],
            sections: chunks[1],
            gauges: chunks[2],
            terminal: chunks[3],
            footer: chunks[4],
        }
    }
}

/// Top-level render function.
pub fn render(frame: &mut Frame, state: &AppState) {
    let size = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(state.theme.bg)), size);

    let layout = ScreenLayout::new(size);
    header::render_header(frame, layout.header, state);
    sections::render_sections(frame, layout.sections, state);
    gauges::render_gauges(frame, layout.gauges, state);
    terminal::render_terminal(frame, layout.terminal, state);
    status_bar::render_status_bar(frame, layout.footer, state);

    if state.show_help {
        overlays::render_help_overlay(frame, size, state);
    }
}
