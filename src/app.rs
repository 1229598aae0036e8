//! Application struct and event loop.
//!
//! Owns the terminal, state and the stats channel.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::console::SECTIONS;
use crate::constants::*;
use crate::models::Stats;
use crate::stats::{self, StatsSimulator};
use crate::ui::{self, AppState, ScreenLayout};

pub struct App {
    state: AppState,
    tick_ms: u64,
    stats_rx: mpsc::UnboundedReceiver<Stats>,
    stats_task: JoinHandle<()>,
    /// Area of the last drawn frame, for mouse hit-testing.
    screen: Rect,
}

impl App {
    /// Build the state and start the stats simulator. Needs a tokio runtime.
    pub fn new(config: &Config) -> Self {
        // Resolve theme
        let theme = ui::Theme::by_name(&config.theme)
            .or_else(|| ui::Theme::from_toml_file(&custom_theme_path(&config.theme)))
            .unwrap_or_else(|| {
                log::warn!("theme {:?} not found, using phosphor", config.theme);
                ui::Theme::default()
            });

        let mut state = AppState::new(theme, &config.lang);
        if config.show_banner {
            state.session.push_banner();
        }

        let simulator = StatsSimulator::new(config.stat_ranges, config.seed);
        log::info!(
            "stats simulator every {}ms, ranges {:?}, seed {:?}",
            config.stats_interval_ms,
            simulator.ranges(),
            config.seed
        );
        let (stats_tx, stats_rx) = mpsc::unbounded_channel();
        let stats_task = stats::spawn(
            simulator,
            Duration::from_millis(config.stats_interval_ms),
            stats_tx,
        );

        Self {
            state,
            tick_ms: config.tick_ms,
            stats_rx,
            stats_task,
            screen: Rect::default(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Terminal init
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let outcome = self.event_loop(&mut terminal);

        // Cleanup
        self.stats_task.abort();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        outcome?;

        log::info!("session ended");
        println!("\n{}\n", t!("app.stopped"));
        Ok(())
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            let completed = terminal.draw(|frame| ui::render(frame, &self.state))?;
            self.screen = completed.area;

            self.drain_stats_events();

            if event::poll(Duration::from_millis(self.tick_ms))? {
                match event::read()? {
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(()); // quit requested
                        }
                    }
                    _ => {}
                }
            }

            self.state.tick();
        }
    }

    // ── Channel draining ─────────────────────────────────────────

    fn drain_stats_events(&mut self) {
        while let Ok(stats) = self.stats_rx.try_recv() {
            self.state.apply_stats(stats);
        }
    }

    // ── Input ────────────────────────────────────────────────────

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.scroll_up(WHEEL_STEP),
            MouseEventKind::ScrollDown => self.state.scroll_down(WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                if self.state.show_help {
                    self.state.show_help = false;
                    return;
                }
                let layout = ScreenLayout::new(self.screen);
                if let Some(section) = ui::section_at(layout.sections, mouse.column, mouse.row) {
                    self.state.select_section(section.id);
                }
            }
            _ => {}
        }
    }

    /// Returns `true` when the user asked to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Control chords work in every mode
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => return true,
                KeyCode::Char('l') => {
                    self.state.clear_history();
                }
                KeyCode::Char('t') => self.state.cycle_theme(),
                _ => {}
            }
            return false;
        }

        if self.state.show_help {
            return self.handle_key_help(key);
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            if let KeyCode::Char(c) = key.code {
                self.select_section_by_digit(c);
            }
            return false;
        }

        match key.code {
            KeyCode::Enter => {
                self.state.submit();
            }
            KeyCode::Tab => {
                self.state.accept_suggestion();
            }
            KeyCode::Backspace => self.state.input_backspace(),
            KeyCode::Delete => self.state.input_delete(),
            KeyCode::Left => self.state.cursor_left(),
            KeyCode::Right => self.state.cursor_right(),
            KeyCode::Home => self.state.cursor_home(),
            KeyCode::End => self.state.cursor_end(),
            KeyCode::PageUp => self.state.scroll_up(PAGE_SIZE),
            KeyCode::PageDown => self.state.scroll_down(PAGE_SIZE),
            KeyCode::Esc => self.state.clear_input(),
            KeyCode::F(1) => self.state.toggle_help(),
            KeyCode::F(2) => self.state.cycle_lang(),
            KeyCode::Char(c) => self.state.input_char(c),
            _ => {}
        }
        false
    }

    fn handle_key_help(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) => self.state.show_help = false,
            KeyCode::F(2) => self.state.cycle_lang(),
            _ => {}
        }
        false
    }

    /// Alt+1..Alt+8 pick the n-th section button.
    fn select_section_by_digit(&mut self, c: char) {
        let section = c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(|idx| SECTIONS.get(idx));
        if let Some(section) = section {
            self.state.select_section(section.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> App {
        let config = Config {
            show_banner: false,
            seed: Some(7),
            ..Config::default()
        };
        App::new(&config)
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn chord(app: &mut App, modifiers: KeyModifiers, c: char) -> bool {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), modifiers))
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    // ── Startup ───────────────────────────────────────────────────

    #[tokio::test]
    async fn banner_follows_config() {
        let app = make_app();
        assert!(app.state.session.history().is_empty());

        let app = App::new(&Config::default());
        assert_eq!(app.state.session.history()[0].command, "system");
    }

    #[tokio::test]
    async fn unknown_theme_falls_back() {
        let config = Config {
            theme: "no-such-theme-anywhere".to_string(),
            ..Config::default()
        };
        assert_eq!(App::new(&config).state.theme.name, "phosphor");
    }

    #[tokio::test]
    async fn stats_arrive_through_channel() {
        let config = Config {
            stats_interval_ms: 10,
            seed: Some(1),
            ..Config::default()
        };
        let mut app = App::new(&config);
        tokio::time::sleep(Duration::from_millis(80)).await;
        app.drain_stats_events();
        assert!(app.state.trend.len() > 1);
    }

    // ── Keyboard ──────────────────────────────────────────────────

    #[tokio::test]
    async fn type_tab_enter_runs_completed_command() {
        let mut app = make_app();
        type_line(&mut app, "he");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state.input, "help");
        assert!(!press(&mut app, KeyCode::Enter));
        assert_eq!(app.state.session.history().len(), 1);
        assert_eq!(app.state.session.history()[0].output[0], "Available commands:");
    }

    #[tokio::test]
    async fn ctrl_c_and_ctrl_q_quit() {
        let mut app = make_app();
        assert!(chord(&mut app, KeyModifiers::CONTROL, 'c'));
        assert!(chord(&mut app, KeyModifiers::CONTROL, 'q'));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.state.input, "q");
    }

    #[tokio::test]
    async fn ctrl_l_clears_history_keeps_input() {
        let mut app = make_app();
        type_line(&mut app, "ls");
        press(&mut app, KeyCode::Enter);
        type_line(&mut app, "df");
        chord(&mut app, KeyModifiers::CONTROL, 'l');
        assert!(app.state.session.history().is_empty());
        assert_eq!(app.state.input, "df");
    }

    #[tokio::test]
    async fn esc_clears_input() {
        let mut app = make_app();
        type_line(&mut app, "sta");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.input, "");
        assert!(app.state.completer.suggestions().is_empty());
    }

    #[tokio::test]
    async fn alt_digit_selects_section() {
        let mut app = make_app();
        chord(&mut app, KeyModifiers::ALT, '2');
        assert_eq!(app.state.session.current_section(), "settings");
        chord(&mut app, KeyModifiers::ALT, '9');
        chord(&mut app, KeyModifiers::ALT, '0');
        assert_eq!(app.state.session.current_section(), "settings");
        assert_eq!(app.state.session.history().len(), 1);
    }

    #[tokio::test]
    async fn help_overlay_swallows_typing() {
        let mut app = make_app();
        press(&mut app, KeyCode::F(1));
        assert!(app.state.show_help);
        type_line(&mut app, "ls");
        assert_eq!(app.state.input, "");
        press(&mut app, KeyCode::Esc);
        assert!(!app.state.show_help);
    }

    #[tokio::test]
    async fn page_keys_scroll() {
        let mut app = make_app();
        for _ in 0..5 {
            type_line(&mut app, "ps");
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.state.scroll_offset, PAGE_SIZE);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.state.scroll_offset, 0);
    }

    // ── Mouse ─────────────────────────────────────────────────────

    #[tokio::test]
    async fn clicking_section_button_navigates() {
        let mut app = make_app();
        app.screen = Rect::new(0, 0, 120, 40);
        // Section bar starts below the header; buttons sit inside its border.
        click(&mut app, 2, HEADER_HEIGHT + 1);
        assert_eq!(app.state.session.current_section(), "files");
        assert_eq!(app.state.session.history()[0].command, "section files");
    }

    #[tokio::test]
    async fn click_outside_buttons_is_ignored() {
        let mut app = make_app();
        app.screen = Rect::new(0, 0, 120, 40);
        click(&mut app, 2, 30);
        assert_eq!(app.state.session.current_section(), "home");
        assert!(app.state.session.history().is_empty());
    }
}
