use crate::{GroupID, Set};

/// Number shown next to a set row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayIndex {
    pub text: String,
    /// Set for every member of a group but the first.
    pub is_sub_index: bool,
}

/// Numbers standalone sets and groups consecutively. Later members of a group are numbered
/// `.2`, `.3`, … within their group.
#[must_use]
pub fn display_indices(sets: &[Set]) -> Vec<DisplayIndex> {
    let mut result = Vec::with_capacity(sets.len());
    let mut group_number = 0;
    let mut local_index = 0;
    let mut previous_group: Option<&GroupID> = None;

    for set in sets {
        match &set.group_id {
            Some(group_id) if previous_group == Some(group_id) => {
                local_index += 1;
                result.push(DisplayIndex {
                    text: format!(".{}", local_index + 1),
                    is_sub_index: true,
                });
            }
            _ => {
                group_number += 1;
                local_index = 0;
                result.push(DisplayIndex {
                    text: group_number.to_string(),
                    is_sub_index: false,
                });
            }
        }
        previous_group = set.group_id.as_ref();
    }

    result
}
