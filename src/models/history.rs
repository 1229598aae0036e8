/// One logged command-and-response pair shown in the scrollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The raw input exactly as typed (not trimmed or lower-cased).
    pub command: String,
    pub output: Vec<String>,
    /// Wall-clock display string captured when the entry was appended.
    pub timestamp: String,
}

impl HistoryEntry {
    pub fn new(command: &str, output: Vec<String>, timestamp: String) -> Self {
        Self {
            command: command.to_string(),
            output,
            timestamp,
        }
    }

    /// Rows this entry occupies in the scrollback: prompt line plus output.
    pub fn line_count(&self) -> usize {
        1 + self.output.len()
    }
}
