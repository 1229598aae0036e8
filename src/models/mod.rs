mod history;
mod stats;

pub use history::*;
pub use stats::*;
