use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::theme::Theme;
use crate::models::Gauge;

/// Horizontal usage bar with a smooth partial cell at the fill edge.
pub struct UsageBar<'a> {
    pub percent: u8,
    pub gauge: Gauge,
    pub theme: &'a Theme,
}

impl<'a> UsageBar<'a> {
    pub fn new(percent: u8, gauge: Gauge, theme: &'a Theme) -> Self {
        Self {
            percent: percent.min(100),
            gauge,
            theme,
        }
    }
}

impl Widget for UsageBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 1 {
            return;
        }

        let width = area.width as f32;
        let exact = (self.percent as f32 / 100.0) * width;
        let filled = exact as u16;
        let color = self.theme.usage_color(self.gauge, self.percent);

        // ░ ▒ ▓ █ from empty to full
        for i in 0..area.width {
            let (ch, style) = if i < filled {
                ('█', Style::default().fg(color))
            } else if i == filled && exact > filled as f32 {
                let frac = exact - filled as f32;
                let partial = if frac > 0.66 {
                    '▓'
                } else if frac > 0.33 {
                    '▒'
                } else {
                    '░'
                };
                (partial, Style::default().fg(color))
            } else {
                ('░', Style::default().fg(self.theme.gauge_bg))
            };
            buf.set_string(area.x + i, area.y, ch.to_string(), style);
        }
    }
}

/// Trend strip: one vertical bar character per recent sample, newest on the right.
pub struct TrendStrip<'a> {
    pub samples: &'a [u8],
    pub gauge: Gauge,
    pub theme: &'a Theme,
}

impl<'a> TrendStrip<'a> {
    pub fn new(samples: &'a [u8], gauge: Gauge, theme: &'a Theme) -> Self {
        Self {
            samples,
            gauge,
            theme,
        }
    }
}

/// Bar glyph for a 0..=100 value.
pub fn trend_glyph(value: u8) -> char {
    const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    let idx = ((value.min(100) as f32 / 100.0) * 7.0).round() as usize;
    BARS[idx.min(7)]
}

impl Widget for TrendStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 1 {
            return;
        }

        let shown = (area.width as usize).min(self.samples.len());
        let recent = &self.samples[self.samples.len() - shown..];
        let offset = area.width as usize - shown;

        for (i, &value) in recent.iter().enumerate() {
            let color = self.theme.usage_color(self.gauge, value);
            buf.set_string(
                area.x + (offset + i) as u16,
                area.y,
                trend_glyph(value).to_string(),
                Style::default().fg(color),
            );
        }
    }
}
