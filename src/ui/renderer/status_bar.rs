//! Footer: system status line, keybind badges, transient status message.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::STATUS_MESSAGE_TIMEOUT_SECS;
use crate::ui::state::AppState;

pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    if area.height == 0 {
        return;
    }

    let system_line = Paragraph::new(Line::from(Span::styled(
        t!("footer.system").to_string(),
        Style::default().fg(t.text_output),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(system_line, Rect { height: 1, ..area });

    if area.height < 2 {
        return;
    }

    let badge = |key: &str, color: Color| -> Span {
        Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(t.bg)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
    };
    let dim =
        |text: &str| -> Span { Span::styled(text.to_string(), Style::default().fg(t.text_dim)) };

    let mut spans = vec![
        Span::raw(" "),
        badge("F1", t.accent_green),
        dim(&t!("status.help")),
        badge("^T", t.accent_purple),
        dim(&t!("status.theme", name = &t.name)),
        badge("F2", t.accent_cyan),
        dim(&t!("status.lang", lang = state.current_lang.to_uppercase())),
        badge("^C", t.accent_green),
        dim(&t!("status.quit")),
    ];

    // Auto-expires
    if let Some((msg, when)) = &state.status_message {
        if when.elapsed().as_secs() < STATUS_MESSAGE_TIMEOUT_SECS {
            spans.push(Span::styled(
                format!("  {} ", msg),
                Style::default().fg(t.warning).add_modifier(Modifier::BOLD),
            ));
        }
    }

    let keys = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), keys);
}
