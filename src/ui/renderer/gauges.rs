//! Gauge row: one card per stat with value, bar and trend strip.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

use crate::models::Gauge;
use crate::ui::state::AppState;
use crate::ui::widgets::{TrendStrip, UsageBar};

pub fn render_gauges(frame: &mut Frame, area: Rect, state: &AppState) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (gauge, card) in Gauge::all().iter().zip(cards.iter()) {
        render_card(frame, *card, *gauge, state);
    }
}

fn render_card(frame: &mut Frame, area: Rect, gauge: Gauge, state: &AppState) {
    let t = &state.theme;
    let color = t.gauge_color(gauge);
    let value = state.stats.get(gauge);

    let block = Block::default()
        .title(Line::from(Span::styled(
            format!(" {} ", gauge.card_label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .title(
            Line::from(Span::styled(
                format!(" {}% ", value),
                Style::default()
                    .fg(t.usage_color(gauge, value))
                    .add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(t.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width < 2 {
        return;
    }
    let bar_row = Rect { height: 1, ..inner };
    frame.render_widget(UsageBar::new(value, gauge, t), bar_row);

    if inner.height >= 2 {
        let trend_row = Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        };
        let series = state.trend.series(gauge);
        frame.render_widget(TrendStrip::new(&series, gauge, t), trend_row);
    }
}
