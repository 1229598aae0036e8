//! Shared utility functions used across modules.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::constants::{CURSOR_BLINK_TICKS, PULSE_CHARS};

#[cfg(test)]
static LOCALE_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Switch the process-wide locale and hold it until the guard drops.
#[cfg(test)]
pub fn lock_locale(lang: &str) -> std::sync::MutexGuard<'static, ()> {
    let guard = LOCALE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    rust_i18n::set_locale(lang);
    guard
}

/// Truncate a string to `max_width` terminal columns, appending "…" if truncated.
///
/// Width-aware so box-drawing and CJK text never overflow a cell.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Whether the blinking cursor is lit on this UI tick.
pub fn cursor_visible(tick: u64) -> bool {
    (tick / CURSOR_BLINK_TICKS) % 2 == 0
}

/// Header pulse glyph for this UI tick. Alternates in step with the cursor.
pub fn pulse_char(tick: u64) -> &'static str {
    let phase = (tick / CURSOR_BLINK_TICKS) as usize;
    PULSE_CHARS[phase % PULSE_CHARS.len()]
}

/// Spaces needed to push `right` flush against column `total` after `left_width` columns.
///
/// Always at least one space so the two sides never touch.
pub fn gap_before_right(left_width: usize, right: &str, total: usize) -> usize {
    total.saturating_sub(left_width + right.width()).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── truncate_to_width ─────────────────────────────────────────

    #[test]
    fn truncate_short_unchanged() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    }

    #[test]
    fn truncate_zero_width() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn truncate_counts_wide_chars_as_two() {
        // Each CJK char is 2 columns: 2 fit in the 5-column budget minus ellipsis.
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn truncate_box_drawing_is_single_width() {
        let line = "╔══════╗";
        assert_eq!(truncate_to_width(line, 8), line);
        assert_eq!(truncate_to_width(line, 4), "╔══…");
    }

    // ── blink / pulse ─────────────────────────────────────────────

    #[test]
    fn cursor_blinks_in_phases() {
        assert!(cursor_visible(0));
        assert!(cursor_visible(CURSOR_BLINK_TICKS - 1));
        assert!(!cursor_visible(CURSOR_BLINK_TICKS));
        assert!(cursor_visible(CURSOR_BLINK_TICKS * 2));
    }

    #[test]
    fn pulse_follows_cursor_phase() {
        assert_eq!(pulse_char(0), "●");
        assert_eq!(pulse_char(CURSOR_BLINK_TICKS), "○");
        assert_eq!(pulse_char(CURSOR_BLINK_TICKS * 2), "●");
    }

    // ── gap_before_right ──────────────────────────────────────────

    #[test]
    fn gap_right_aligns() {
        assert_eq!(gap_before_right(10, "12:00:00", 30), 12);
    }

    #[test]
    fn gap_is_at_least_one() {
        assert_eq!(gap_before_right(28, "12:00:00", 30), 1);
    }
}
