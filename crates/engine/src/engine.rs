use log::{debug, warn};
use setlist_domain::{
    self as domain, AttributePatch, DisplayIndex, GroupDrag, GroupError, GroupID, GroupSummary,
    MarkerItem, Set, SetID,
};

use crate::{RawPatch, Settings};

macro_rules! log_on_error {
    ($result: expr, $fallback: expr, $action: literal) => {{
        match $result {
            Ok(value) => value,
            Err(err) => {
                warn!("failed to {}: {err}", $action);
                $fallback
            }
        }
    }};
}

/// Entry point for the set editors.
///
/// Every operation takes the current list and returns the next one. Operations that cannot be
/// carried out return the list they were given.
pub struct SetListEngine {
    settings: Settings,
}

impl SetListEngine {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn new_set(&self) -> Set {
        Set::new(SetID::random())
    }

    #[must_use]
    pub fn expand_summaries(&self, summaries: &[GroupSummary]) -> Vec<Set> {
        domain::expand_group_summaries_to_sets(summaries)
    }

    #[must_use]
    pub fn collapse_to_summaries(&self, sets: &[Set]) -> Vec<GroupSummary> {
        domain::collapse_sets_to_group_summaries(sets)
    }

    /// Builds the drag-reorder rows, repairing interleaved groups according to the configured
    /// policy first.
    pub fn marker_list(&self, sets: &[Set]) -> Result<Vec<MarkerItem>, GroupError> {
        let sets = self.settings.contiguity_policy.enforce(sets.to_vec())?;
        domain::to_marker_list(&sets)
    }

    #[must_use]
    pub fn sets(&self, items: &[MarkerItem]) -> Vec<Set> {
        domain::from_marker_list(items)
    }

    #[must_use]
    pub fn create_dropset(&self, sets: &[Set], set_id: &SetID) -> Vec<Set> {
        domain::create_dropset(sets, set_id)
    }

    #[must_use]
    pub fn ungroup_dropset(&self, sets: &[Set], group_id: &GroupID) -> Vec<Set> {
        domain::ungroup_dropset(sets, group_id)
    }

    #[must_use]
    pub fn delete_set(&self, sets: &[Set], set_id: &SetID) -> Vec<Set> {
        domain::delete_set(sets, set_id)
    }

    #[must_use]
    pub fn insert_after(&self, sets: &[Set], anchor_set_id: &SetID, new_set: Set) -> Vec<Set> {
        self.restore_contiguity(sets, domain::insert_after(sets, anchor_set_id, new_set))
    }

    #[must_use]
    pub fn append_set(&self, sets: &[Set], new_set: Set) -> Vec<Set> {
        self.restore_contiguity(sets, domain::append_set(sets, new_set))
    }

    #[must_use]
    pub fn apply_bulk_attribute(
        &self,
        sets: &[Set],
        set_ids: &[SetID],
        patch: &AttributePatch,
    ) -> Vec<Set> {
        debug!(
            "applying {} attribute changes to {} sets",
            patch.changes().count(),
            set_ids.len()
        );
        domain::apply_bulk_attribute(sets, set_ids, patch)
    }

    /// Validates a patch from the bulk edit dialog before applying it. An invalid patch leaves
    /// every set unchanged.
    #[must_use]
    pub fn apply_raw_patch(&self, sets: &[Set], set_ids: &[SetID], patch: RawPatch) -> Vec<Set> {
        let patch = log_on_error!(
            AttributePatch::try_from(patch),
            return sets.to_vec(),
            "apply bulk attribute"
        );
        self.apply_bulk_attribute(sets, set_ids, &patch)
    }

    #[must_use]
    pub fn move_set(&self, items: &[MarkerItem], from: usize, to: usize) -> Vec<MarkerItem> {
        log_on_error!(
            domain::move_set(items, from, to),
            items.to_vec(),
            "move set"
        )
    }

    /// Collapses the group for dragging. Depending on the settings, all other groups are
    /// collapsed as well.
    #[must_use]
    pub fn begin_group_drag(
        &self,
        items: &[MarkerItem],
        group_id: &GroupID,
    ) -> Option<(Vec<MarkerItem>, GroupDrag)> {
        let (collapsed, drag) = log_on_error!(
            domain::begin_group_drag(items, group_id),
            return None,
            "begin group drag"
        );
        if self.settings.collapse_other_groups_on_drag {
            Some((domain::collapse_all_other_groups(&collapsed, group_id), drag))
        } else {
            Some((collapsed, drag))
        }
    }

    /// `from` and `to` are indices into [`GroupDrag::surface`].
    #[must_use]
    pub fn complete_group_drag(
        &self,
        items: &[MarkerItem],
        drag: &GroupDrag,
        from: usize,
        to: usize,
    ) -> Vec<MarkerItem> {
        log_on_error!(
            domain::complete_group_drag(items, drag, from, to),
            domain::expand_all(items),
            "complete group drag"
        )
    }

    #[must_use]
    pub fn collapse_group(&self, items: &[MarkerItem], group_id: &GroupID) -> Vec<MarkerItem> {
        domain::collapse_group(items, group_id)
    }

    #[must_use]
    pub fn collapse_all_other_groups(
        &self,
        items: &[MarkerItem],
        except_group_id: &GroupID,
    ) -> Vec<MarkerItem> {
        domain::collapse_all_other_groups(items, except_group_id)
    }

    #[must_use]
    pub fn expand_all(&self, items: &[MarkerItem]) -> Vec<MarkerItem> {
        domain::expand_all(items)
    }

    #[must_use]
    pub fn display_indices(&self, sets: &[Set]) -> Vec<DisplayIndex> {
        domain::display_indices(sets)
    }

    fn restore_contiguity(&self, original: &[Set], sets: Vec<Set>) -> Vec<Set> {
        log_on_error!(
            self.settings.contiguity_policy.enforce(sets),
            original.to_vec(),
            "restore contiguity"
        )
    }
}

impl Default for SetListEngine {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
