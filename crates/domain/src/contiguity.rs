use std::collections::HashSet;

use log::debug;

use crate::{GroupError, GroupID, Set, fresh_group_id};

/// How a list whose groups are interleaved is brought back into shape.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ContiguityPolicy {
    Reject,
    Gather,
    #[default]
    Split,
}

impl ContiguityPolicy {
    pub fn enforce(self, sets: Vec<Set>) -> Result<Vec<Set>, GroupError> {
        if let Err(err) = check_contiguity(&sets) {
            debug!("restoring contiguity ({self:?}): {err}");
            match self {
                ContiguityPolicy::Reject => return Err(err),
                ContiguityPolicy::Gather => return Ok(gather_groups(&sets)),
                ContiguityPolicy::Split => return Ok(split_groups(&sets)),
            }
        }
        Ok(sets)
    }
}

pub fn check_contiguity(sets: &[Set]) -> Result<(), GroupError> {
    let mut closed: HashSet<&GroupID> = HashSet::new();
    let mut current: Option<&GroupID> = None;

    for set in sets {
        let group_id = set.group_id.as_ref();
        if group_id != current {
            if let Some(previous) = current {
                closed.insert(previous);
            }
            if let Some(group_id) = group_id
                && closed.contains(group_id)
            {
                return Err(GroupError::NotContiguous(group_id.clone()));
            }
            current = group_id;
        }
    }

    Ok(())
}

/// Moves every member of a group directly behind the first run of that group.
#[must_use]
pub fn gather_groups(sets: &[Set]) -> Vec<Set> {
    let mut emitted: HashSet<&GroupID> = HashSet::new();
    let mut result = Vec::with_capacity(sets.len());

    for set in sets {
        match &set.group_id {
            None => result.push(set.clone()),
            Some(group_id) => {
                if emitted.insert(group_id) {
                    result.extend(sets.iter().filter(|s| s.belongs_to(group_id)).cloned());
                }
            }
        }
    }

    result
}

/// Keeps the first run of each group and moves every later run into a new group.
#[must_use]
pub fn split_groups(sets: &[Set]) -> Vec<Set> {
    let mut taken: HashSet<GroupID> = sets.iter().filter_map(|s| s.group_id.clone()).collect();
    let mut closed: HashSet<GroupID> = HashSet::new();
    let mut current: Option<(GroupID, GroupID)> = None;
    let mut result = Vec::with_capacity(sets.len());

    for set in sets {
        let mut set = set.clone();
        let original = set.group_id.clone();

        let continues_run = matches!(
            (&original, &current),
            (Some(group_id), Some((run_group_id, _))) if group_id == run_group_id
        );

        if continues_run {
            set.group_id = current
                .as_ref()
                .map(|(_, replacement)| replacement.clone());
        } else {
            if let Some((run_group_id, _)) = current.take() {
                closed.insert(run_group_id);
            }
            if let Some(group_id) = original {
                let replacement = if closed.contains(&group_id) {
                    let fresh = fresh_group_id(&taken);
                    taken.insert(fresh.clone());
                    fresh
                } else {
                    group_id.clone()
                };
                set.group_id = Some(replacement.clone());
                current = Some((group_id, replacement));
            }
        }

        result.push(set);
    }

    result
}
