/// In-memory log of accepted input lines.
///
/// Entries are never removed or reordered. A line identical to the one
/// directly before it is not stored again.
#[derive(Debug, Default, Clone)]
pub struct HistoryBuffer {
    entries: Vec<String>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the line was stored.
    pub fn append(&mut self, line: &str) -> bool {
        if line.is_empty() || self.entries.last().map(String::as_str) == Some(line) {
            return false;
        }

        self.entries.push(line.to_owned());
        true
    }

    pub fn all(&self) -> &[String] {
        &self.entries
    }

    /// Entries paired with their 1-based display number.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, line)| (i + 1, line.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
