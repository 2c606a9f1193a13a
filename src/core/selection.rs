//! Selection state for the file browser: the set of selected entry ids and
//! the cut buffer staged for a move.

use std::collections::BTreeSet;

/// Entry ids are paths relative to the storage root, never with a leading
/// slash.
fn normalize(id: &str) -> String {
    id.trim_start_matches('/').to_string()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Whether the browser is in multi-select mode.
    pub selection_mode: bool,
    selected: BTreeSet<String>,
    /// Whether buffered ids are staged for a move pending a paste target.
    pub cut_mode: bool,
    buffer: BTreeSet<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str) {
        let id = normalize(id);
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(&normalize(id))
    }

    pub fn is_buffered(&self, id: &str) -> bool {
        self.buffer.contains(&normalize(id))
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    pub fn buffer_ids(&self) -> Vec<String> {
        self.buffer.iter().cloned().collect()
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Drop the selection (navigation does this before every fetch).
    /// The cut buffer survives so a paste can follow navigation.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.selection_mode = false;
    }

    /// Stage the current selection for a move.
    pub fn start_cut(&mut self) {
        self.buffer = std::mem::take(&mut self.selected);
        self.cut_mode = true;
        self.selection_mode = false;
    }

    /// Abandon or complete the staged move.
    pub fn end_cut(&mut self) {
        self.buffer.clear();
        self.cut_mode = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_normalizes_leading_slash() {
        let mut sel = SelectionState::new();
        sel.toggle("/docs/a.txt");
        assert!(sel.is_selected("docs/a.txt"));
        assert_eq!(sel.selected_ids(), vec!["docs/a.txt".to_string()]);
        sel.toggle("docs/a.txt");
        assert!(!sel.has_selection());
    }

    #[test]
    fn test_clear_keeps_cut_buffer() {
        let mut sel = SelectionState::new();
        sel.toggle("a.txt");
        sel.toggle("b/");
        sel.start_cut();
        assert!(sel.cut_mode);
        assert!(!sel.has_selection());
        assert_eq!(sel.buffer_ids(), vec!["a.txt".to_string(), "b/".to_string()]);

        // Navigation clears selection but must not lose the pending move
        sel.toggle("c.txt");
        sel.clear();
        assert!(!sel.has_selection());
        assert!(sel.cut_mode);
        assert_eq!(sel.buffer_ids().len(), 2);

        sel.end_cut();
        assert!(!sel.cut_mode);
        assert!(sel.buffer_ids().is_empty());
    }

    #[test]
    fn test_start_cut_leaves_selection_mode() {
        let mut sel = SelectionState::new();
        sel.selection_mode = true;
        sel.toggle("a.txt");
        sel.start_cut();
        assert!(!sel.selection_mode);
    }
}
