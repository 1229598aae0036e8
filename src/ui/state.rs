use std::time::Instant;

use crate::console::{vocabulary, Completer, Session};
use crate::constants::*;
use crate::models::{Stats, StatsTrend};

use super::theme::Theme;

/// The complete UI state, single source of truth for rendering.
pub struct AppState {
    // Console
    pub session: Session,
    pub input: String,
    /// Byte offset into `input`, always on a char boundary.
    pub cursor_pos: usize,
    pub completer: Completer,

    // Gauges
    pub stats: Stats,
    pub trend: StatsTrend,

    // UI
    /// Lines scrolled up from the bottom of the terminal panel; 0 follows new output.
    pub scroll_offset: usize,
    pub show_help: bool,
    pub tick_count: u64,
    pub theme: Theme,
    pub current_lang: String,
    /// Transient footer message (e.g. theme changed). Auto-expires.
    pub status_message: Option<(String, Instant)>,
}

impl AppState {
    pub fn new(theme: Theme, lang: &str) -> Self {
        let stats = Stats::default();
        let mut trend = StatsTrend::new(TREND_CAPACITY);
        trend.push(stats);
        Self {
            session: Session::new(),
            input: String::new(),
            cursor_pos: 0,
            completer: Completer::new(vocabulary()),
            stats,
            trend,
            scroll_offset: 0,
            show_help: false,
            tick_count: 0,
            theme,
            current_lang: lang.to_string(),
            status_message: None,
        }
    }

    /// Advance the animation clock (cursor blink, header pulse).
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Record a fresh simulator sample.
    pub fn apply_stats(&mut self, stats: Stats) {
        self.stats = stats;
        self.trend.push(stats);
    }

    // ── Input line ───────────────────────────────────────────────

    pub fn input_char(&mut self, c: char) {
        self.input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
        self.input_changed();
    }

    pub fn input_backspace(&mut self) {
        if self.cursor_pos > 0 {
            let prev = self.prev_boundary();
            self.input.remove(prev);
            self.cursor_pos = prev;
            self.input_changed();
        }
    }

    /// Delete the character under the cursor.
    pub fn input_delete(&mut self) {
        if self.cursor_pos < self.input.len() {
            self.input.remove(self.cursor_pos);
            self.input_changed();
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos = self.prev_boundary();
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_pos < self.input.len() {
            self.cursor_pos = self.input[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(self.input.len());
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.input.len();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
        self.completer.clear();
    }

    fn prev_boundary(&self) -> usize {
        self.input[..self.cursor_pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn input_changed(&mut self) {
        self.completer.update(&self.input);
    }

    /// Replace the input with the first suggestion. Returns `false` if there was none.
    pub fn accept_suggestion(&mut self) -> bool {
        match self.completer.accept() {
            Some(name) => {
                self.input = name.to_string();
                self.cursor_pos = self.input.len();
                true
            }
            None => false,
        }
    }

    // ── Console ──────────────────────────────────────────────────

    /// Run the input line. Blank input is left in place and nothing happens.
    pub fn submit(&mut self) -> bool {
        if self.input.trim().is_empty() {
            return false;
        }
        let line = std::mem::take(&mut self.input);
        self.clear_input();
        self.run(&line)
    }

    /// Run `clear` without touching the input line.
    pub fn clear_history(&mut self) -> bool {
        self.run("clear")
    }

    /// Section-button path: behaves like typing `section <id>`.
    pub fn select_section(&mut self, id: &str) -> bool {
        let had_history = !self.session.history().is_empty();
        let changed = self.session.select_section(id, &self.stats);
        self.after_run(had_history, changed);
        changed
    }

    fn run(&mut self, line: &str) -> bool {
        let had_history = !self.session.history().is_empty();
        let changed = self.session.submit(line, &self.stats);
        self.after_run(had_history, changed);
        changed
    }

    fn after_run(&mut self, had_history: bool, changed: bool) {
        if !changed {
            return;
        }
        self.scroll_offset = 0;
        if had_history && self.session.history().is_empty() {
            self.set_status(t!("status.history_cleared").to_string());
        }
    }

    // ── Scrolling ────────────────────────────────────────────────

    /// Upper bound on scrollable lines, ignoring wrap. The renderer clamps further.
    fn history_line_count(&self) -> usize {
        self.session
            .history()
            .iter()
            .map(|e| e.line_count() + 1)
            .sum()
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(self.history_line_count());
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    // ── Chrome ───────────────────────────────────────────────────

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Cycle to the next built-in color theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next_builtin();
        log::info!("theme -> {}", self.theme.name);
        self.set_status(t!("status.theme_changed", name = &self.theme.name).to_string());
    }

    /// Cycle to the next UI language.
    pub fn cycle_lang(&mut self) {
        let next = next_lang(&self.current_lang);
        rust_i18n::set_locale(next);
        self.current_lang = next.to_string();
        log::info!("language -> {}", next);
        self.set_status(t!("status.lang_changed", lang = next.to_uppercase()).to_string());
    }

    /// Set a status bar message with automatic timestamp.
    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some((msg, Instant::now()));
    }
}

/// Language after `current` in [`LANGUAGES`]; unknown codes restart the cycle.
pub fn next_lang(current: &str) -> &'static str {
    let idx = LANGUAGES
        .iter()
        .position(|&l| l == current)
        .map(|i| (i + 1) % LANGUAGES.len())
        .unwrap_or(0);
    LANGUAGES[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_state() -> AppState {
        AppState::new(Theme::phosphor(), "en")
    }

    fn type_str(s: &mut AppState, text: &str) {
        for c in text.chars() {
            s.input_char(c);
        }
    }

    // ── Input editing ─────────────────────────────────────────────

    #[test]
    fn input_char_and_backspace() {
        let mut s = make_state();
        type_str(&mut s, "hi");
        assert_eq!(s.input, "hi");
        assert_eq!(s.cursor_pos, 2);
        s.input_backspace();
        assert_eq!(s.input, "h");
        assert_eq!(s.cursor_pos, 1);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut s = make_state();
        s.input_backspace();
        assert_eq!(s.input, "");
        assert_eq!(s.cursor_pos, 0);
    }

    #[test]
    fn cursor_movement_and_mid_insert() {
        let mut s = make_state();
        type_str(&mut s, "ac");
        s.cursor_left();
        s.input_char('b');
        assert_eq!(s.input, "abc");
        assert_eq!(s.cursor_pos, 2);

        s.cursor_home();
        s.cursor_left();
        assert_eq!(s.cursor_pos, 0);
        s.cursor_end();
        s.cursor_right();
        assert_eq!(s.cursor_pos, 3);
    }

    #[test]
    fn delete_under_cursor() {
        let mut s = make_state();
        type_str(&mut s, "lsx");
        s.cursor_left();
        s.input_delete();
        assert_eq!(s.input, "ls");
        s.input_delete(); // at end
        assert_eq!(s.input, "ls");
    }

    #[test]
    fn multibyte_editing_stays_on_boundaries() {
        let mut s = make_state();
        type_str(&mut s, "cat файлы");
        s.cursor_left();
        s.cursor_left();
        s.input_backspace();
        assert_eq!(s.input, "cat фалы");
        s.cursor_right();
        s.cursor_right();
        assert_eq!(s.cursor_pos, s.input.len());
    }

    // ── Autocomplete ──────────────────────────────────────────────

    #[test]
    fn typing_updates_suggestions() {
        let mut s = make_state();
        s.input_char('s');
        assert_eq!(s.completer.suggestions(), &["status", "section"]);
        s.input_char('e');
        assert_eq!(s.completer.suggestions(), &["section"]);
        s.input_backspace();
        s.input_backspace();
        assert!(s.completer.suggestions().is_empty());
    }

    #[test]
    fn accept_suggestion_replaces_input() {
        let mut s = make_state();
        type_str(&mut s, "wh");
        assert!(s.accept_suggestion());
        assert_eq!(s.input, "whoami");
        assert_eq!(s.cursor_pos, 6);
        assert!(s.completer.suggestions().is_empty());
    }

    #[test]
    fn accept_without_suggestions_keeps_input() {
        let mut s = make_state();
        type_str(&mut s, "zz");
        assert!(!s.accept_suggestion());
        assert_eq!(s.input, "zz");
    }

    // ── Submit ────────────────────────────────────────────────────

    #[test]
    fn submit_runs_and_clears_input() {
        let mut s = make_state();
        type_str(&mut s, "uptime");
        assert!(s.submit());
        assert_eq!(s.input, "");
        assert_eq!(s.cursor_pos, 0);
        assert_eq!(s.session.history().len(), 1);
        assert!(s.completer.suggestions().is_empty());
    }

    #[test]
    fn submit_blank_keeps_input() {
        let mut s = make_state();
        type_str(&mut s, "   ");
        assert!(!s.submit());
        assert_eq!(s.input, "   ");
        assert!(s.session.history().is_empty());
    }

    #[test]
    fn submit_resets_scroll() {
        let mut s = make_state();
        for _ in 0..3 {
            type_str(&mut s, "ps");
            s.submit();
        }
        s.scroll_up(4);
        assert_eq!(s.scroll_offset, 4);
        type_str(&mut s, "df");
        s.submit();
        assert_eq!(s.scroll_offset, 0);
    }

    #[test]
    fn clear_sets_status_only_when_history_existed() {
        let _locale = crate::utils::lock_locale("en");
        let mut s = make_state();
        s.clear_history();
        assert!(s.status_message.is_none());

        type_str(&mut s, "help");
        s.submit();
        s.clear_history();
        assert!(s.session.history().is_empty());
        assert_eq!(s.status_message.as_ref().unwrap().0, "History cleared");
    }

    #[test]
    fn status_uses_latest_stats() {
        let mut s = make_state();
        s.apply_stats(Stats { cpu: 99, ram: 1, disk: 2, network: 3 });
        type_str(&mut s, "status");
        s.submit();
        assert!(s.session.history()[0].output[0].contains("99%"));
        assert_eq!(s.trend.len(), 2);
    }

    #[test]
    fn select_section_navigates() {
        let mut s = make_state();
        assert!(s.select_section("api"));
        assert_eq!(s.session.current_section(), "api");
        assert_eq!(s.session.history()[0].command, "section api");
    }

    // ── Scrolling ─────────────────────────────────────────────────

    #[test]
    fn scroll_is_bounded() {
        let mut s = make_state();
        s.scroll_up(5);
        assert_eq!(s.scroll_offset, 0);

        type_str(&mut s, "whoami");
        s.submit();
        s.scroll_up(100);
        // 1 prompt line + 1 output line + 1 spacer
        assert_eq!(s.scroll_offset, 3);
        s.scroll_down(100);
        assert_eq!(s.scroll_offset, 0);
    }

    // ── Chrome ────────────────────────────────────────────────────

    #[test]
    fn cycle_theme_sets_status() {
        let _locale = crate::utils::lock_locale("en");
        let mut s = make_state();
        s.cycle_theme();
        assert_eq!(s.theme.name, "amber");
        assert_eq!(s.status_message.as_ref().unwrap().0, "Theme: amber");
    }

    #[test]
    fn next_lang_wraps() {
        assert_eq!(next_lang("en"), "ru");
        assert_eq!(next_lang("ru"), "en");
        assert_eq!(next_lang("xx"), "en");
    }

    #[test]
    fn toggle_help_flips() {
        let mut s = make_state();
        s.toggle_help();
        assert!(s.show_help);
        s.toggle_help();
        assert!(!s.show_help);
    }
}
