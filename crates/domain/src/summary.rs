use std::{
    collections::{BTreeMap, HashSet},
    hash::BuildHasher,
};

use crate::{GroupID, RestSeconds, Set, SetID, SetKind, SetPayload};

/// Compact description of a run of sets, as shown by the non-drag list views.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub id: GroupID,
    pub count: usize,
    pub is_dropset: bool,
    pub kind: SetKind,
    pub rest_seconds: Option<RestSeconds>,
    /// Rest periods overriding `rest_seconds`, keyed by position inside the group.
    pub per_set_rest: BTreeMap<usize, RestSeconds>,
    /// Only honoured for dropsets.
    pub per_set_kind: Option<Vec<SetKind>>,
}

impl GroupSummary {
    #[must_use]
    pub fn new(id: impl Into<GroupID>, count: usize) -> Self {
        Self {
            id: id.into(),
            count,
            is_dropset: false,
            kind: SetKind::Working,
            rest_seconds: None,
            per_set_rest: BTreeMap::new(),
            per_set_kind: None,
        }
    }

    #[must_use]
    pub fn dropset(id: impl Into<GroupID>, count: usize) -> Self {
        Self {
            is_dropset: true,
            ..Self::new(id, count)
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: SetKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_rest(mut self, rest_seconds: RestSeconds) -> Self {
        self.rest_seconds = Some(rest_seconds);
        self
    }

    fn kind_at(&self, local_index: usize) -> SetKind {
        if self.is_dropset
            && let Some(kinds) = &self.per_set_kind
            && let Some(kind) = kinds.get(local_index)
        {
            return *kind;
        }
        self.kind
    }

    fn rest_at(&self, local_index: usize) -> Option<RestSeconds> {
        self.per_set_rest
            .get(&local_index)
            .copied()
            .or(self.rest_seconds)
    }
}

/// Expands every summary into `count` sets.
///
/// Each dropset summary becomes a group of its own. A dropset summary repeating the id of an
/// earlier one gets a fresh group id, so that groups stay contiguous.
#[must_use]
pub fn expand_group_summaries_to_sets(summaries: &[GroupSummary]) -> Vec<Set> {
    let mut used: HashSet<SetID> = HashSet::new();
    let mut taken: HashSet<GroupID> = summaries.iter().map(|s| s.id.clone()).collect();
    let mut grouped: HashSet<GroupID> = HashSet::new();
    let mut sets = Vec::with_capacity(summaries.iter().map(|s| s.count).sum());

    for summary in summaries {
        let group_id = if !summary.is_dropset || summary.count == 0 {
            None
        } else if grouped.contains(&summary.id) {
            let fresh = fresh_group_id(&taken);
            taken.insert(fresh.clone());
            Some(fresh)
        } else {
            Some(summary.id.clone())
        };
        grouped.extend(group_id.clone());

        for local_index in 0..summary.count {
            let id = unique_set_id(&format!("{}-{local_index}", summary.id), &used);
            used.insert(id.clone());
            sets.push(Set {
                id,
                group_id: group_id.clone(),
                kind: summary.kind_at(local_index),
                rest_seconds: summary.rest_at(local_index),
                payload: SetPayload::default(),
            });
        }
    }

    sets
}

fn unique_set_id(base: &str, used: &HashSet<SetID>) -> SetID {
    let candidate = SetID::from(base);
    if !used.contains(&candidate) {
        return candidate;
    }
    let mut suffix = 1;
    loop {
        let candidate = SetID::from(format!("{base}-{suffix}"));
        if !used.contains(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

/// Merges runs of sets into summaries.
///
/// Sets sharing a group become one dropset summary that keeps the kind and rest period of every
/// member. Consecutive ungrouped sets of the same kind become one plain summary, whose rest period
/// is only kept if all merged sets agree on it.
#[must_use]
pub fn collapse_sets_to_group_summaries(sets: &[Set]) -> Vec<GroupSummary> {
    let mut taken: HashSet<GroupID> = sets.iter().filter_map(|s| s.group_id.clone()).collect();
    let mut used: HashSet<GroupID> = HashSet::new();
    let mut summaries = vec![];

    for run in runs(sets) {
        let first = &run[0];
        let summary = if let Some(group_id) = &first.group_id {
            let id = if used.contains(group_id) {
                fresh_group_id(&taken)
            } else {
                group_id.clone()
            };
            dropset_summary(id, run)
        } else {
            let id = derive_group_id(&first.id, &taken);
            GroupSummary {
                kind: first.kind,
                rest_seconds: common_rest(run),
                ..GroupSummary::new(id, run.len())
            }
        };
        taken.insert(summary.id.clone());
        used.insert(summary.id.clone());
        summaries.push(summary);
    }

    summaries
}

fn runs(sets: &[Set]) -> impl Iterator<Item = &[Set]> {
    sets.chunk_by(|previous, current| {
        match (&previous.group_id, &current.group_id) {
            (None, None) => previous.kind == current.kind,
            (a, b) => a == b,
        }
    })
}

fn dropset_summary(id: GroupID, run: &[Set]) -> GroupSummary {
    let kinds = run.iter().map(|s| s.kind).collect::<Vec<_>>();
    let kind = if kinds.iter().all(|k| *k == kinds[0]) {
        kinds[0]
    } else {
        SetKind::Working
    };
    GroupSummary {
        id,
        count: run.len(),
        is_dropset: true,
        kind,
        rest_seconds: common_rest(run),
        per_set_rest: run
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.rest_seconds.map(|r| (i, r)))
            .collect(),
        per_set_kind: Some(kinds),
    }
}

fn common_rest(run: &[Set]) -> Option<RestSeconds> {
    let first = run.first()?.rest_seconds;
    if run.iter().all(|s| s.rest_seconds == first) {
        first
    } else {
        None
    }
}

/// Reuses `<base>` of a set id shaped like `<base>-0` as group id, so that a summary keeps its
/// name across an expand and collapse. The shape of ids carries no meaning beyond that.
#[must_use]
pub fn derive_group_id<S: BuildHasher>(
    candidate: &SetID,
    taken: &HashSet<GroupID, S>,
) -> GroupID {
    if let Some(base) = candidate.strip_suffix("-0")
        && !base.is_empty()
        && !taken.contains(&GroupID::from(base))
    {
        return GroupID::from(base);
    }
    fresh_group_id(taken)
}

#[must_use]
pub fn fresh_group_id<S: BuildHasher>(taken: &HashSet<GroupID, S>) -> GroupID {
    let mut n = 1;
    loop {
        let group_id = GroupID::from(format!("group-{n}"));
        if !taken.contains(&group_id) {
            return group_id;
        }
        n += 1;
    }
}
