use serde::{Deserialize, Serialize};

use crate::analyzer::comparison::ComparisonSelection;
use crate::analyzer::error::StoreError;
use crate::analyzer::models::{Group, Profile};
use crate::analyzer::storage::StateStorage;

/// Reference to the profile currently opened in the focused view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusedProfile {
    pub group_name: String,
    pub profile_name: String,
}

/// Owns the active and archived group partitions and the focused-profile
/// reference.
///
/// Every profile belongs to exactly one group; moving a group between
/// partitions transfers ownership. Mutations that can invalidate the
/// comparison selection or the focused reference cascade the cleanup
/// synchronously as part of the same call.
#[derive(Debug, Default)]
pub struct GroupStore {
    groups: Vec<Group>,
    archived_groups: Vec<Group>,
    focused: Option<FocusedProfile>,
}

impl GroupStore {
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn archived_groups(&self) -> &[Group] {
        &self.archived_groups
    }

    pub fn find_group(&self, group_name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == group_name)
    }

    pub fn focused(&self) -> Option<&FocusedProfile> {
        self.focused.as_ref()
    }

    pub fn set_focused(&mut self, group_name: &str, profile_name: &str) {
        self.focused = Some(FocusedProfile {
            group_name: group_name.to_string(),
            profile_name: profile_name.to_string(),
        });
    }

    pub fn clear_focused(&mut self) {
        self.focused = None;
    }

    /// Appends profiles to an existing active group, or creates the group.
    /// An empty batch creates nothing; a group never exists with zero
    /// profiles.
    pub fn add_profiles(&mut self, group_name: &str, profiles: Vec<Profile>) {
        if profiles.is_empty() {
            return;
        }

        log::info!("adding {} profile(s) to group '{group_name}'", profiles.len());
        match self.groups.iter_mut().find(|g| g.name == group_name) {
            Some(group) => group.profiles.extend(profiles),
            None => self.groups.push(Group {
                name: group_name.to_string(),
                profiles,
                archived: false,
            }),
        }
    }

    /// Removes one profile by position. The group is deleted when it
    /// becomes empty; any selection entry or focused reference pointing at
    /// the removed profile is cleared in the same call.
    pub fn remove_profile(
        &mut self,
        selection: &mut ComparisonSelection,
        group_name: &str,
        index: usize,
    ) -> Result<(), StoreError> {
        let group = self
            .groups
            .iter()
            .find(|g| g.name == group_name)
            .ok_or_else(|| StoreError::GroupNotFound(group_name.to_string()))?;
        let profile_name = group
            .profiles
            .get(index)
            .map(|p| p.name.clone())
            .ok_or_else(|| StoreError::ProfileIndex {
                group: group_name.to_string(),
                index,
            })?;

        let groups = std::mem::take(&mut self.groups);
        self.groups = groups
            .into_iter()
            .filter_map(|mut g| {
                if g.name == group_name {
                    g.profiles.remove(index);
                    if g.profiles.is_empty() {
                        return None;
                    }
                }
                Some(g)
            })
            .collect();

        selection.remove_entry(group_name, &profile_name);
        self.clear_focused_if(group_name, Some(&profile_name));
        log::info!("removed profile '{profile_name}' from group '{group_name}'");
        Ok(())
    }

    /// Deletes a whole active group and cleans up references into it.
    pub fn remove_group(
        &mut self,
        selection: &mut ComparisonSelection,
        group_name: &str,
    ) -> Result<(), StoreError> {
        if !self.groups.iter().any(|g| g.name == group_name) {
            return Err(StoreError::GroupNotFound(group_name.to_string()));
        }

        let groups = std::mem::take(&mut self.groups);
        self.groups = groups.into_iter().filter(|g| g.name != group_name).collect();

        selection.remove_group_entries(group_name);
        self.clear_focused_if(group_name, None);
        log::info!("removed group '{group_name}'");
        Ok(())
    }

    /// Permanently deletes an archived group. Archived groups cannot be
    /// selected or focused, so no reference cleanup is needed.
    pub fn remove_archived_group(&mut self, group_name: &str) -> Result<(), StoreError> {
        if !self.archived_groups.iter().any(|g| g.name == group_name) {
            return Err(StoreError::GroupNotFound(group_name.to_string()));
        }

        let archived = std::mem::take(&mut self.archived_groups);
        self.archived_groups = archived.into_iter().filter(|g| g.name != group_name).collect();
        log::info!("permanently removed archived group '{group_name}'");
        Ok(())
    }

    /// Moves an active group into the archived partition. A name collision
    /// in the destination is rejected and nothing is mutated.
    pub fn archive(
        &mut self,
        selection: &mut ComparisonSelection,
        group_name: &str,
    ) -> Result<(), StoreError> {
        let pos = self
            .groups
            .iter()
            .position(|g| g.name == group_name)
            .ok_or_else(|| StoreError::GroupNotFound(group_name.to_string()))?;
        if self.archived_groups.iter().any(|g| g.name == group_name) {
            return Err(StoreError::NameCollision(group_name.to_string()));
        }

        let mut group = self.groups.remove(pos);
        group.archived = true;
        self.archived_groups.push(group);

        selection.remove_group_entries(group_name);
        self.clear_focused_if(group_name, None);
        log::info!("archived group '{group_name}'");
        Ok(())
    }

    /// Moves an archived group back into the active partition, with the
    /// same collision policy as [`archive`](Self::archive).
    pub fn unarchive(&mut self, group_name: &str) -> Result<(), StoreError> {
        let pos = self
            .archived_groups
            .iter()
            .position(|g| g.name == group_name)
            .ok_or_else(|| StoreError::GroupNotFound(group_name.to_string()))?;
        if self.groups.iter().any(|g| g.name == group_name) {
            return Err(StoreError::NameCollision(group_name.to_string()));
        }

        let mut group = self.archived_groups.remove(pos);
        group.archived = false;
        self.groups.push(group);
        log::info!("unarchived group '{group_name}'");
        Ok(())
    }

    /// Snapshot of both partitions for persistence.
    pub fn to_storage(&self) -> StateStorage {
        StateStorage::new(self.groups.clone(), self.archived_groups.clone())
    }

    /// Rebuilds a store from persisted state. The focused reference and
    /// comparison selection are session state and start empty.
    pub fn from_storage(storage: StateStorage) -> Self {
        Self {
            groups: storage.groups,
            archived_groups: storage.archived_groups,
            focused: None,
        }
    }

    fn clear_focused_if(&mut self, group_name: &str, profile_name: Option<&str>) {
        let matches = self.focused.as_ref().is_some_and(|f| {
            f.group_name == group_name
                && profile_name.map_or(true, |name| f.profile_name == name)
        });
        if matches {
            self.focused = None;
        }
    }
}
