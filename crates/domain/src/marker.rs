use crate::{GroupError, GroupID, Set, check_contiguity};

#[derive(Debug, Clone, PartialEq)]
pub enum Marker {
    Set(Set),
    GroupHeader { group_id: GroupID, count: usize },
    GroupFooter { group_id: GroupID },
}

/// Row of the drag-reorder view.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerItem {
    pub marker: Marker,
    pub is_collapsed: bool,
}

impl MarkerItem {
    #[must_use]
    pub fn set(set: Set) -> Self {
        Self {
            marker: Marker::Set(set),
            is_collapsed: false,
        }
    }

    #[must_use]
    pub fn header(group_id: GroupID, count: usize) -> Self {
        Self {
            marker: Marker::GroupHeader { group_id, count },
            is_collapsed: false,
        }
    }

    #[must_use]
    pub fn footer(group_id: GroupID) -> Self {
        Self {
            marker: Marker::GroupFooter { group_id },
            is_collapsed: false,
        }
    }

    /// Stable identifier of the row.
    #[must_use]
    pub fn key(&self) -> String {
        match &self.marker {
            Marker::Set(set) => set.id.to_string(),
            Marker::GroupHeader { group_id, .. } => format!("header-{group_id}"),
            Marker::GroupFooter { group_id } => format!("footer-{group_id}"),
        }
    }

    #[must_use]
    pub fn group_id(&self) -> Option<&GroupID> {
        match &self.marker {
            Marker::Set(set) => set.group_id.as_ref(),
            Marker::GroupHeader { group_id, .. } | Marker::GroupFooter { group_id } => {
                Some(group_id)
            }
        }
    }

    #[must_use]
    pub fn as_set(&self) -> Option<&Set> {
        match &self.marker {
            Marker::Set(set) => Some(set),
            Marker::GroupHeader { .. } | Marker::GroupFooter { .. } => None,
        }
    }

    #[must_use]
    pub fn is_header_of(&self, group_id: &GroupID) -> bool {
        matches!(&self.marker, Marker::GroupHeader { group_id: g, .. } if g == group_id)
    }

    #[must_use]
    pub fn is_footer_of(&self, group_id: &GroupID) -> bool {
        matches!(&self.marker, Marker::GroupFooter { group_id: g } if g == group_id)
    }

    #[must_use]
    pub fn belongs_to(&self, group_id: &GroupID) -> bool {
        self.group_id() == Some(group_id)
    }
}

/// Wraps every run of grouped sets in a header and a footer.
///
/// A group that reappears after its run has ended is rejected instead of being given a second
/// header.
pub fn to_marker_list(sets: &[Set]) -> Result<Vec<MarkerItem>, GroupError> {
    check_contiguity(sets)?;

    let mut items = Vec::with_capacity(sets.len());
    let mut i = 0;

    while i < sets.len() {
        match &sets[i].group_id {
            None => {
                items.push(MarkerItem::set(sets[i].clone()));
                i += 1;
            }
            Some(group_id) => {
                let count = sets[i..]
                    .iter()
                    .take_while(|s| s.belongs_to(group_id))
                    .count();
                items.push(MarkerItem::header(group_id.clone(), count));
                items.extend(sets[i..i + count].iter().cloned().map(MarkerItem::set));
                items.push(MarkerItem::footer(group_id.clone()));
                i += count;
            }
        }
    }

    Ok(items)
}

/// Returns the sets in list order. Headers and footers are dropped without being checked.
#[must_use]
pub fn from_marker_list(items: &[MarkerItem]) -> Vec<Set> {
    items
        .iter()
        .filter_map(MarkerItem::as_set)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn keys(items: &[MarkerItem]) -> Vec<String> {
        items.iter().map(MarkerItem::key).collect()
    }

    static SETS: std::sync::LazyLock<Vec<Set>> = std::sync::LazyLock::new(|| {
        vec![
            Set::new("a"),
            Set::new("b").in_group("g1"),
            Set::new("c").in_group("g1"),
            Set::new("d"),
            Set::new("e").in_group("g2"),
        ]
    });

    #[test]
    fn test_to_marker_list() {
        let items = to_marker_list(&SETS).unwrap();
        assert_eq!(
            keys(&items),
            vec![
                "a", "header-g1", "b", "c", "footer-g1", "d", "header-g2", "e", "footer-g2"
            ]
        );
        assert_eq!(items[1], MarkerItem::header(GroupID::from("g1"), 2));
        assert_eq!(items[6], MarkerItem::header(GroupID::from("g2"), 1));
        assert!(items.iter().all(|i| !i.is_collapsed));
    }

    #[test]
    fn test_to_marker_list_adjacent_groups() {
        let sets = vec![Set::new("a").in_group("g1"), Set::new("b").in_group("g2")];
        assert_eq!(
            keys(&to_marker_list(&sets).unwrap()),
            vec!["header-g1", "a", "footer-g1", "header-g2", "b", "footer-g2"]
        );
    }

    #[test]
    fn test_to_marker_list_rejects_reappearing_group() {
        let sets = vec![
            Set::new("a").in_group("g1"),
            Set::new("b"),
            Set::new("c").in_group("g1"),
        ];
        assert_eq!(
            to_marker_list(&sets),
            Err(GroupError::NotContiguous(GroupID::from("g1")))
        );
    }

    #[test]
    fn test_marker_list_round_trip() {
        assert_eq!(from_marker_list(&to_marker_list(&SETS).unwrap()), *SETS);
    }

    #[test]
    fn test_marker_list_empty() {
        assert!(to_marker_list(&[]).unwrap().is_empty());
        assert!(from_marker_list(&[]).is_empty());
    }

    #[test]
    fn test_marker_item_group_id() {
        let items = to_marker_list(&SETS).unwrap();
        let g1 = GroupID::from("g1");
        assert_eq!(
            items.iter().map(|i| i.belongs_to(&g1)).collect::<Vec<_>>(),
            vec![false, true, true, true, true, false, false, false, false]
        );
        assert!(items[1].is_header_of(&g1));
        assert!(items[4].is_footer_of(&g1));
        assert!(!items[6].is_header_of(&g1));
    }
}
