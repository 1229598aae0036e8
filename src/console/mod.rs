//! The simulated console: command table, section table, dispatcher,
//! autocomplete and the session that ties them together.

mod autocomplete;
mod commands;
mod dispatch;
mod sections;
mod session;

pub use autocomplete::Completer;
pub use commands::vocabulary;
pub use sections::{Section, SectionColor, SECTIONS};
pub use session::Session;
