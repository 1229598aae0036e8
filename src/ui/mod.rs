mod renderer;
mod state;
pub mod theme;
mod widgets;

pub use renderer::sections::section_at;
pub use renderer::{render, ScreenLayout};
pub use state::AppState;
pub use theme::Theme;
