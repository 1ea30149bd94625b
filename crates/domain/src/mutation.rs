use std::collections::HashSet;

use log::debug;

use crate::{GroupID, RestSeconds, Set, SetID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeChange {
    Rest(Option<RestSeconds>),
    Warmup(bool),
    Failure(bool),
}

/// Ordered list of attribute changes. Changes are applied in order, so when warmup and failure
/// are both switched on, the later one wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AttributePatch(Vec<AttributeChange>);

impl AttributePatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rest(mut self, rest_seconds: Option<RestSeconds>) -> Self {
        self.0.push(AttributeChange::Rest(rest_seconds));
        self
    }

    #[must_use]
    pub fn warmup(mut self, value: bool) -> Self {
        self.0.push(AttributeChange::Warmup(value));
        self
    }

    #[must_use]
    pub fn failure(mut self, value: bool) -> Self {
        self.0.push(AttributeChange::Failure(value));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn changes(&self) -> impl Iterator<Item = &AttributeChange> {
        self.0.iter()
    }

    fn apply(&self, set: &mut Set) {
        for change in &self.0 {
            match *change {
                AttributeChange::Rest(rest_seconds) => set.rest_seconds = rest_seconds,
                AttributeChange::Warmup(value) => set.kind = set.kind.with_warmup(value),
                AttributeChange::Failure(value) => set.kind = set.kind.with_failure(value),
            }
        }
    }
}

impl From<Vec<AttributeChange>> for AttributePatch {
    fn from(value: Vec<AttributeChange>) -> Self {
        Self(value)
    }
}

/// Puts a standalone set into a new group of its own.
#[must_use]
pub fn create_dropset(sets: &[Set], set_id: &SetID) -> Vec<Set> {
    let Some(index) = sets.iter().position(|s| s.id == *set_id) else {
        debug!("create dropset: unknown set {set_id}");
        return sets.to_vec();
    };

    if let Some(group_id) = &sets[index].group_id {
        debug!("create dropset: set {set_id} already belongs to group {group_id}");
        return sets.to_vec();
    }

    let mut result = sets.to_vec();
    result[index].group_id = Some(GroupID::random());
    result
}

#[must_use]
pub fn ungroup_dropset(sets: &[Set], group_id: &GroupID) -> Vec<Set> {
    if !sets.iter().any(|s| s.belongs_to(group_id)) {
        debug!("ungroup dropset: unknown group {group_id}");
    }

    sets.iter()
        .cloned()
        .map(|mut s| {
            if s.belongs_to(group_id) {
                s.group_id = None;
            }
            s
        })
        .collect()
}

/// Removes a set. A group left with a single member stays a group.
#[must_use]
pub fn delete_set(sets: &[Set], set_id: &SetID) -> Vec<Set> {
    if !sets.iter().any(|s| s.id == *set_id) {
        debug!("delete set: unknown set {set_id}");
        return sets.to_vec();
    }

    sets.iter().filter(|s| s.id != *set_id).cloned().collect()
}

/// Applies the patch to every listed set. Ids not present in the list are ignored.
#[must_use]
pub fn apply_bulk_attribute(sets: &[Set], set_ids: &[SetID], patch: &AttributePatch) -> Vec<Set> {
    let selected: HashSet<&SetID> = set_ids.iter().collect();

    sets.iter()
        .cloned()
        .map(|mut s| {
            if selected.contains(&s.id) {
                patch.apply(&mut s);
            }
            s
        })
        .collect()
}

/// Inserts `new_set` directly behind the anchor. The group of the new set is kept as given.
#[must_use]
pub fn insert_after(sets: &[Set], anchor_set_id: &SetID, new_set: Set) -> Vec<Set> {
    if sets.iter().any(|s| s.id == new_set.id) {
        debug!("insert set: set {} already exists", new_set.id);
        return sets.to_vec();
    }

    let Some(index) = sets.iter().position(|s| s.id == *anchor_set_id) else {
        debug!("insert set: unknown anchor {anchor_set_id}");
        return sets.to_vec();
    };

    let mut result = sets.to_vec();
    result.insert(index + 1, new_set);
    result
}

#[must_use]
pub fn append_set(sets: &[Set], new_set: Set) -> Vec<Set> {
    if sets.iter().any(|s| s.id == new_set.id) {
        debug!("append set: set {} already exists", new_set.id);
        return sets.to_vec();
    }

    let mut result = sets.to_vec();
    result.push(new_set);
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::SetKind;

    use super::*;

    fn rest(value: u32) -> RestSeconds {
        RestSeconds::new(value).unwrap()
    }

    fn ids(sets: &[Set]) -> Vec<&str> {
        sets.iter().map(|s| s.id.as_str()).collect()
    }

    static SETS: std::sync::LazyLock<Vec<Set>> = std::sync::LazyLock::new(|| {
        vec![
            Set::new("a").with_kind(SetKind::Warmup),
            Set::new("b").in_group("g1"),
            Set::new("c").in_group("g1").with_kind(SetKind::Failure),
            Set::new("d").with_rest(rest(120)),
        ]
    });

    #[test]
    fn test_create_dropset() {
        let result = create_dropset(&SETS, &SetID::from("d"));
        let group_id = result[3].group_id.clone().unwrap();
        assert_ne!(group_id, GroupID::from("g1"));
        assert_eq!(&result[..3], &SETS[..3]);
        assert_eq!(
            result[3],
            Set {
                group_id: Some(group_id),
                ..SETS[3].clone()
            }
        );
    }

    #[rstest]
    #[case("x")]
    #[case("b")]
    fn test_create_dropset_no_op(#[case] set_id: &str) {
        assert_eq!(create_dropset(&SETS, &SetID::from(set_id)), *SETS);
    }

    #[test]
    fn test_ungroup_dropset() {
        let result = ungroup_dropset(&SETS, &GroupID::from("g1"));
        assert_eq!(ids(&result), ids(&SETS));
        assert!(result.iter().all(|s| s.group_id.is_none()));
        assert_eq!(result[2].kind, SetKind::Failure);
    }

    #[test]
    fn test_ungroup_unknown_dropset() {
        assert_eq!(ungroup_dropset(&SETS, &GroupID::from("g9")), *SETS);
    }

    #[test]
    fn test_delete_set() {
        let result = delete_set(&SETS, &SetID::from("b"));
        assert_eq!(ids(&result), vec!["a", "c", "d"]);
        assert_eq!(result[1].group_id, Some(GroupID::from("g1")));
    }

    #[test]
    fn test_delete_last_member_removes_group() {
        let result = delete_set(
            &delete_set(&SETS, &SetID::from("b")),
            &SetID::from("c"),
        );
        assert_eq!(ids(&result), vec!["a", "d"]);
        assert!(result.iter().all(|s| s.group_id.is_none()));
    }

    #[test]
    fn test_delete_unknown_set() {
        assert_eq!(delete_set(&SETS, &SetID::from("x")), *SETS);
        assert!(delete_set(&[], &SetID::from("x")).is_empty());
    }

    #[test]
    fn test_apply_bulk_attribute_rest() {
        let result = apply_bulk_attribute(
            &SETS,
            &[SetID::from("a"), SetID::from("c"), SetID::from("x")],
            &AttributePatch::new().rest(Some(rest(90))),
        );
        assert_eq!(
            result.iter().map(|s| s.rest_seconds).collect::<Vec<_>>(),
            vec![Some(rest(90)), None, Some(rest(90)), Some(rest(120))]
        );
    }

    #[test]
    fn test_apply_bulk_attribute_clears_rest() {
        let result = apply_bulk_attribute(
            &SETS,
            &[SetID::from("d")],
            &AttributePatch::new().rest(None),
        );
        assert_eq!(result[3].rest_seconds, None);
    }

    #[rstest]
    #[case(AttributePatch::new().warmup(true), [SetKind::Warmup, SetKind::Warmup, SetKind::Warmup, SetKind::Working])]
    #[case(AttributePatch::new().failure(true), [SetKind::Failure, SetKind::Failure, SetKind::Failure, SetKind::Working])]
    #[case(AttributePatch::new().warmup(false), [SetKind::Working, SetKind::Working, SetKind::Failure, SetKind::Working])]
    #[case(AttributePatch::new().warmup(true).failure(true), [SetKind::Failure, SetKind::Failure, SetKind::Failure, SetKind::Working])]
    #[case(AttributePatch::new().failure(true).warmup(true), [SetKind::Warmup, SetKind::Warmup, SetKind::Warmup, SetKind::Working])]
    fn test_apply_bulk_attribute_kind(
        #[case] patch: AttributePatch,
        #[case] expected: [SetKind; 4],
    ) {
        let result = apply_bulk_attribute(
            &SETS,
            &[SetID::from("a"), SetID::from("b"), SetID::from("c")],
            &patch,
        );
        assert_eq!(result.iter().map(|s| s.kind).collect::<Vec<_>>(), expected);
        assert!(result.iter().all(|s| !(s.is_warmup() && s.is_failure())));
    }

    #[test]
    fn test_apply_bulk_attribute_touches_only_selected_sets() {
        let result = apply_bulk_attribute(
            &SETS,
            &[SetID::from("b")],
            &AttributePatch::new().failure(true).rest(Some(rest(45))),
        );
        for (i, (before, after)) in SETS.iter().zip(&result).enumerate() {
            if i == 1 {
                assert_eq!(after.kind, SetKind::Failure);
                assert_eq!(after.rest_seconds, Some(rest(45)));
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn test_insert_after() {
        let result = insert_after(&SETS, &SetID::from("a"), Set::new("n"));
        assert_eq!(ids(&result), vec!["a", "n", "b", "c", "d"]);
        assert_eq!(result[1].group_id, None);
    }

    #[test]
    fn test_insert_after_joining_group() {
        let result = insert_after(&SETS, &SetID::from("b"), Set::new("n").in_group("g1"));
        assert_eq!(ids(&result), vec!["a", "b", "n", "c", "d"]);
        assert_eq!(result[2].group_id, Some(GroupID::from("g1")));
    }

    #[rstest]
    #[case("x", "n")]
    #[case("a", "d")]
    fn test_insert_after_no_op(#[case] anchor: &str, #[case] new_id: &str) {
        assert_eq!(
            insert_after(&SETS, &SetID::from(anchor), Set::new(new_id)),
            *SETS
        );
    }

    #[test]
    fn test_append_set() {
        assert_eq!(ids(&append_set(&SETS, Set::new("n"))), vec!["a", "b", "c", "d", "n"]);
        assert_eq!(append_set(&SETS, Set::new("a")), *SETS);
        assert_eq!(ids(&append_set(&[], Set::new("n"))), vec!["n"]);
    }
}
