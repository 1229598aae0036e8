//! Prefix completion over the command vocabulary.

/// Vocabulary entries starting with `partial`, in vocabulary order.
///
/// Empty input gives no suggestions rather than the whole vocabulary, and
/// so does input that already carries an argument.
pub fn suggest<'v>(partial: &str, vocabulary: &[&'v str]) -> Vec<&'v str> {
    let needle = partial.trim_start().to_lowercase();
    if needle.is_empty() || needle.contains(char::is_whitespace) {
        return Vec::new();
    }
    vocabulary
        .iter()
        .copied()
        .filter(|name| name.starts_with(needle.as_str()))
        .collect()
}

/// Suggestion list kept in sync with the input line.
#[derive(Debug)]
pub struct Completer {
    vocabulary: Vec<&'static str>,
    suggestions: Vec<&'static str>,
}

impl Completer {
    pub fn new(vocabulary: Vec<&'static str>) -> Self {
        Self {
            vocabulary,
            suggestions: Vec::new(),
        }
    }

    /// Recompute for the current input. Call on every input change.
    pub fn update(&mut self, input: &str) {
        self.suggestions = suggest(input, &self.vocabulary);
    }

    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    /// Take the first suggestion and clear the list.
    pub fn accept(&mut self) -> Option<&'static str> {
        let first = self.suggestions.first().copied();
        if first.is_some() {
            self.suggestions.clear();
        }
        first
    }

    pub fn clear(&mut self) {
        self.suggestions.clear();
    }
}
