use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::console::SectionColor;
use crate::models::Gauge;

/// All available built-in theme names.
pub const BUILTIN_THEME_NAMES: &[&str] = &["phosphor", "amber", "nord", "dracula"];

/// Usage percentage at which a gauge turns "mid" / "high" / "critical".
const USAGE_MID_PCT: u8 = 60;
const USAGE_HIGH_PCT: u8 = 75;
const USAGE_CRITICAL_PCT: u8 = 90;

/// Data-driven theme: every color in one struct.
/// Constructed from built-in presets or loaded from TOML files.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ── Accents (the three section/gauge families) ───────────
    pub accent_green: Color,
    pub accent_cyan: Color,
    pub accent_purple: Color,

    // ── Surfaces ─────────────────────────────────────────────
    pub bg: Color,
    pub bg_panel: Color,

    // ── Text ─────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_output: Color,
    pub text_dim: Color,
    pub text_muted: Color,

    // ── Semantic ─────────────────────────────────────────────
    pub warning: Color,
    pub danger: Color,

    // ── Gauges ───────────────────────────────────────────────
    pub gauge_bg: Color,

    // ── Borders ──────────────────────────────────────────────
    pub border: Color,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────

    /// Green-screen CRT palette (the panel's original look).
    pub fn phosphor() -> Self {
        Self {
            name: "phosphor".to_string(),
            accent_green: Color::Rgb(0, 255, 0),
            accent_cyan: Color::Rgb(0, 255, 255),
            accent_purple: Color::Rgb(168, 85, 247),
            bg: Color::Rgb(10, 10, 10),
            bg_panel: Color::Rgb(15, 15, 15),
            text_primary: Color::Rgb(255, 255, 255),
            text_output: Color::Rgb(0, 204, 0),
            text_dim: Color::Rgb(102, 102, 102),
            text_muted: Color::Rgb(64, 64, 64),
            warning: Color::Rgb(255, 193, 69),
            danger: Color::Rgb(255, 85, 85),
            gauge_bg: Color::Rgb(0, 51, 0),
            border: Color::Rgb(0, 102, 0),
        }
    }

    /// Amber monochrome terminal.
    pub fn amber() -> Self {
        Self {
            name: "amber".to_string(),
            accent_green: Color::Rgb(255, 176, 0),
            accent_cyan: Color::Rgb(255, 204, 102),
            accent_purple: Color::Rgb(255, 140, 0),
            bg: Color::Rgb(18, 12, 0),
            bg_panel: Color::Rgb(26, 18, 0),
            text_primary: Color::Rgb(255, 230, 180),
            text_output: Color::Rgb(230, 160, 0),
            text_dim: Color::Rgb(140, 100, 30),
            text_muted: Color::Rgb(90, 64, 20),
            warning: Color::Rgb(255, 214, 10),
            danger: Color::Rgb(255, 80, 40),
            gauge_bg: Color::Rgb(51, 35, 0),
            border: Color::Rgb(120, 80, 0),
        }
    }

    /// Nord palette.
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            accent_green: Color::Rgb(163, 190, 140),  // nord14
            accent_cyan: Color::Rgb(136, 192, 208),   // nord8
            accent_purple: Color::Rgb(180, 142, 173), // nord15
            bg: Color::Rgb(46, 52, 64),               // nord0
            bg_panel: Color::Rgb(59, 66, 82),         // nord1
            text_primary: Color::Rgb(236, 239, 244),  // nord6
            text_output: Color::Rgb(216, 222, 233),   // nord4
            text_dim: Color::Rgb(129, 161, 193),      // nord9
            text_muted: Color::Rgb(76, 86, 106),      // nord3
            warning: Color::Rgb(235, 203, 139),       // nord13
            danger: Color::Rgb(191, 97, 106),         // nord11
            gauge_bg: Color::Rgb(67, 76, 94),         // nord2
            border: Color::Rgb(76, 86, 106),
        }
    }

    /// Dracula palette.
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            accent_green: Color::Rgb(80, 250, 123),
            accent_cyan: Color::Rgb(139, 233, 253),
            accent_purple: Color::Rgb(189, 147, 249),
            bg: Color::Rgb(40, 42, 54),
            bg_panel: Color::Rgb(48, 51, 65),
            text_primary: Color::Rgb(248, 248, 242),
            text_output: Color::Rgb(80, 250, 123),
            text_dim: Color::Rgb(98, 114, 164), // comment
            text_muted: Color::Rgb(68, 71, 90),
            warning: Color::Rgb(241, 250, 140),
            danger: Color::Rgb(255, 85, 85),
            gauge_bg: Color::Rgb(68, 71, 90),
            border: Color::Rgb(98, 114, 164),
        }
    }

    /// Look up a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "phosphor" => Some(Self::phosphor()),
            "amber" => Some(Self::amber()),
            "nord" => Some(Self::nord()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }

    /// Cycle to the next built-in theme. Custom themes cycle back to the first.
    pub fn next_builtin(&self) -> Self {
        let next_idx = BUILTIN_THEME_NAMES
            .iter()
            .position(|&n| n == self.name)
            .map(|idx| (idx + 1) % BUILTIN_THEME_NAMES.len())
            .unwrap_or(0);
        Self::by_name(BUILTIN_THEME_NAMES[next_idx]).unwrap_or_default()
    }

    /// Load a custom theme from a TOML file, falling back to phosphor for missing fields.
    pub fn from_toml_file(path: &std::path::Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let file: ThemeFile = toml::from_str(&content).ok()?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("custom");
        Some(file.into_theme(name))
    }

    // ── Color lookups ────────────────────────────────────────

    pub fn section_color(&self, color: SectionColor) -> Color {
        match color {
            SectionColor::Green => self.accent_green,
            SectionColor::Cyan => self.accent_cyan,
            SectionColor::Purple => self.accent_purple,
        }
    }

    /// Card color per gauge: CPU green, RAM cyan, DISK purple, NET green.
    pub fn gauge_color(&self, gauge: Gauge) -> Color {
        match gauge {
            Gauge::Cpu | Gauge::Network => self.accent_green,
            Gauge::Ram => self.accent_cyan,
            Gauge::Disk => self.accent_purple,
        }
    }

    /// Bar color for a usage value: the card color until it runs hot.
    pub fn usage_color(&self, gauge: Gauge, percent: u8) -> Color {
        if percent >= USAGE_CRITICAL_PCT {
            self.danger
        } else if percent >= USAGE_HIGH_PCT && gauge != Gauge::Disk {
            self.warning
        } else {
            self.gauge_color(gauge)
        }
    }

    // ── Computed Styles ──────────────────────────────────────

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent_green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn prompt_user_style(&self) -> Style {
        Style::default()
            .fg(self.accent_cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn prompt_path_style(&self) -> Style {
        Style::default().fg(self.accent_purple)
    }

    pub fn prompt_symbol_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn command_style(&self) -> Style {
        Style::default().fg(self.accent_green)
    }

    pub fn output_style(&self) -> Style {
        Style::default().fg(self.text_output)
    }

    pub fn timestamp_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_highlight_style(&self) -> Style {
        Style::default().fg(self.accent_green)
    }

    pub fn button_style(&self, color: SectionColor, selected: bool) -> Style {
        let fg = self.section_color(color);
        if selected {
            Style::default()
                .fg(self.bg)
                .bg(fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(fg)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::phosphor()
    }
}

// ── TOML deserialization for custom themes ──────────────────

/// Intermediate struct for parsing theme TOML files.
/// All fields are optional; missing fields inherit from phosphor.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ThemeFile {
    accent_green: Option<String>,
    accent_cyan: Option<String>,
    accent_purple: Option<String>,
    bg: Option<String>,
    bg_panel: Option<String>,
    text_primary: Option<String>,
    text_output: Option<String>,
    text_dim: Option<String>,
    text_muted: Option<String>,
    warning: Option<String>,
    danger: Option<String>,
    gauge_bg: Option<String>,
    border: Option<String>,
}

impl ThemeFile {
    fn into_theme(self, name: &str) -> Theme {
        let base = Theme::phosphor();
        let pick = |value: &Option<String>, fallback: Color| parse_color(value).unwrap_or(fallback);
        Theme {
            name: name.to_string(),
            accent_green: pick(&self.accent_green, base.accent_green),
            accent_cyan: pick(&self.accent_cyan, base.accent_cyan),
            accent_purple: pick(&self.accent_purple, base.accent_purple),
            bg: pick(&self.bg, base.bg),
            bg_panel: pick(&self.bg_panel, base.bg_panel),
            text_primary: pick(&self.text_primary, base.text_primary),
            text_output: pick(&self.text_output, base.text_output),
            text_dim: pick(&self.text_dim, base.text_dim),
            text_muted: pick(&self.text_muted, base.text_muted),
            warning: pick(&self.warning, base.warning),
            danger: pick(&self.danger, base.danger),
            gauge_bg: pick(&self.gauge_bg, base.gauge_bg),
            border: pick(&self.border, base.border),
        }
    }
}

/// Parse a hex color string like "#a855f7" or "a855f7" into a ratatui Color.
fn parse_color(opt: &Option<String>) -> Option<Color> {
    let s = opt.as_ref()?;
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
