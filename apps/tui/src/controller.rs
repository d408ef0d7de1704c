use serde::Serialize;
use tracing::debug;

/// Read-only view of the list state handed to the renderer after every intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot<'a> {
    pub draft: &'a str,
    pub entries: &'a [String],
    pub can_submit: bool,
}

/// Owns the draft text and the submitted entries for one mounted view.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListController {
    draft: String,
    entries: Vec<String>,
}

impl ListController {
    pub const fn new() -> Self {
        Self {
            draft: String::new(),
            entries: Vec::new(),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether the current draft may be submitted.
    ///
    /// Derived from the draft on every call, so it can never disagree with it.
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            draft: &self.draft,
            entries: &self.entries,
            can_submit: self.can_submit(),
        }
    }

    /// Replaces the draft with `text` verbatim. Blank text is accepted.
    pub fn set_draft(&mut self, text: impl Into<String>) -> Snapshot<'_> {
        self.draft = text.into();
        self.snapshot()
    }

    /// Appends the draft to the entries and resets it.
    ///
    /// A draft that is blank after trimming is ignored. The stored entry keeps
    /// its surrounding whitespace; trimming only gates submission.
    pub fn submit(&mut self) -> Snapshot<'_> {
        if !self.can_submit() {
            debug!("ignoring submit of blank draft");
            return self.snapshot();
        }

        let entry = std::mem::take(&mut self.draft);
        debug!(entry = %entry, position = self.entries.len(), "entry added");
        self.entries.push(entry);
        self.snapshot()
    }

    /// Removes every entry. The draft is left alone.
    pub fn clear_all(&mut self) -> Snapshot<'_> {
        if !self.entries.is_empty() {
            debug!(removed = self.entries.len(), "entries cleared");
            self.entries.clear();
        }
        self.snapshot()
    }
}
