use serde::{Deserialize, Serialize};

use crate::analyzer::error::SelectionError;

/// Upper bound on simultaneously compared profiles.
pub const MAX_COMPARED_PROFILES: usize = 4;

/// Composite key identifying a profile across groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub group_name: String,
    pub profile_name: String,
}

/// Outcome of a successful toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionToggle {
    Added,
    Removed,
}

/// Ordered, deduplicated multi-profile selection with capacity
/// [`MAX_COMPARED_PROFILES`].
///
/// Entries are keys, not profile clones; insertion order is meaningful
/// (it drives comparison column ordering). The group store cascades
/// profile removals into the selection so keys never dangle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonSelection {
    entries: Vec<SelectionEntry>,
}

impl ComparisonSelection {
    /// Adds the key if absent and there is room, removes it if present.
    /// At capacity an absent key is rejected and the selection is left
    /// unchanged.
    pub fn toggle(
        &mut self,
        group_name: &str,
        profile_name: &str,
    ) -> Result<SelectionToggle, SelectionError> {
        if let Some(pos) = self.position(group_name, profile_name) {
            self.entries.remove(pos);
            return Ok(SelectionToggle::Removed);
        }

        if self.entries.len() >= MAX_COMPARED_PROFILES {
            return Err(SelectionError::CapacityExceeded);
        }

        self.entries.push(SelectionEntry {
            group_name: group_name.to_string(),
            profile_name: profile_name.to_string(),
        });
        Ok(SelectionToggle::Added)
    }

    /// Empties the selection, e.g. when exiting comparison mode.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, group_name: &str, profile_name: &str) -> bool {
        self.position(group_name, profile_name).is_some()
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops the entry for one profile; order of the rest is preserved.
    pub(crate) fn remove_entry(&mut self, group_name: &str, profile_name: &str) {
        self.entries
            .retain(|e| !(e.group_name == group_name && e.profile_name == profile_name));
    }

    /// Drops every entry belonging to a group.
    pub(crate) fn remove_group_entries(&mut self, group_name: &str) {
        self.entries.retain(|e| e.group_name != group_name);
    }

    fn position(&self, group_name: &str, profile_name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.group_name == group_name && e.profile_name == profile_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_restores_selection() {
        let mut selection = ComparisonSelection::default();
        assert_eq!(selection.toggle("sku-a", "game1"), Ok(SelectionToggle::Added));
        assert_eq!(selection.len(), 1);
        assert_eq!(
            selection.toggle("sku-a", "game1"),
            Ok(SelectionToggle::Removed)
        );
        assert!(selection.is_empty());
    }

    #[test]
    fn test_same_profile_name_in_different_groups_is_distinct() {
        let mut selection = ComparisonSelection::default();
        selection.toggle("sku-a", "game1").unwrap();
        selection.toggle("sku-b", "game1").unwrap();
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_capacity_exceeded_leaves_selection_untouched() {
        let mut selection = ComparisonSelection::default();
        for i in 0..MAX_COMPARED_PROFILES {
            selection.toggle("sku", &format!("game{i}")).unwrap();
        }
        let before = selection.clone();

        let result = selection.toggle("sku", "one-too-many");
        assert_eq!(result, Err(SelectionError::CapacityExceeded));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_toggle_off_at_capacity_still_works() {
        let mut selection = ComparisonSelection::default();
        for i in 0..MAX_COMPARED_PROFILES {
            selection.toggle("sku", &format!("game{i}")).unwrap();
        }
        assert_eq!(
            selection.toggle("sku", "game2"),
            Ok(SelectionToggle::Removed)
        );
        // Remaining entries keep their relative order.
        let names: Vec<&str> = selection
            .entries()
            .iter()
            .map(|e| e.profile_name.as_str())
            .collect();
        assert_eq!(names, vec!["game0", "game1", "game3"]);
    }

    #[test]
    fn test_clear() {
        let mut selection = ComparisonSelection::default();
        selection.toggle("sku", "game0").unwrap();
        selection.clear();
        assert!(selection.is_empty());
    }
}
