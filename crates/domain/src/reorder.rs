use log::debug;

use crate::{
    DragError, GroupError, GroupID, Marker, MarkerItem, Set, collapse_group, expand_all,
    to_marker_list,
};

/// Moves a single set row and derives the group of every set from its new position.
///
/// A set belongs to a group exactly if it sits between the header and the footer of that group,
/// so dropping a set into the span of a group joins it and dropping it outside leaves it
/// ungrouped.
pub fn move_set(
    items: &[MarkerItem],
    from: usize,
    to: usize,
) -> Result<Vec<MarkerItem>, DragError> {
    check_index(from, items.len())?;
    check_index(to, items.len())?;

    if items[from].as_set().is_none() {
        return Err(DragError::NotASet(from));
    }

    let mut moved = items.to_vec();
    let item = moved.remove(from);
    moved.insert(to, item);

    Ok(to_marker_list(&assign_groups_by_position(&moved))?)
}

/// Extracts the sets of a marker list, replacing their groups by the groups implied by the
/// surrounding headers and footers.
#[must_use]
pub fn assign_groups_by_position(items: &[MarkerItem]) -> Vec<Set> {
    let mut open_before: Vec<Option<&GroupID>> = Vec::with_capacity(items.len());
    let mut open: Option<&GroupID> = None;
    for item in items {
        match &item.marker {
            Marker::GroupHeader { group_id, .. } => open = Some(group_id),
            Marker::GroupFooter { .. } => open = None,
            Marker::Set(_) => {}
        }
        open_before.push(open);
    }

    let mut open_after: Vec<Option<&GroupID>> = vec![None; items.len()];
    let mut open: Option<&GroupID> = None;
    for (i, item) in items.iter().enumerate().rev() {
        match &item.marker {
            Marker::GroupFooter { group_id } => open = Some(group_id),
            Marker::GroupHeader { .. } => open = None,
            Marker::Set(_) => {}
        }
        open_after[i] = open;
    }

    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let mut set = item.as_set()?.clone();
            set.group_id = match (open_before[i], open_after[i]) {
                (Some(header), Some(footer)) if header == footer => Some(header.clone()),
                _ => None,
            };
            Some(set)
        })
        .collect()
}

/// State of a group drag between picking up the group and dropping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDrag {
    group_id: GroupID,
    member_keys: Vec<String>,
}

impl GroupDrag {
    #[must_use]
    pub fn group_id(&self) -> &GroupID {
        &self.group_id
    }

    /// Rows that take part in the drag: the list without the sets and the footer of the dragged
    /// group. Indices passed to [`complete_group_drag`] refer to this list.
    pub fn surface(&self, items: &[MarkerItem]) -> Result<Vec<MarkerItem>, DragError> {
        let (header, footer) = self.span(items)?;
        Ok(items[..=header]
            .iter()
            .chain(&items[footer + 1..])
            .cloned()
            .collect())
    }

    /// Position of the dragged header within the surface.
    pub fn header_index(&self, items: &[MarkerItem]) -> Result<usize, DragError> {
        Ok(self.span(items)?.0)
    }

    fn span(&self, items: &[MarkerItem]) -> Result<(usize, usize), DragError> {
        let (header, footer) = group_span(items, &self.group_id)
            .map_err(|_| DragError::StaleDrag(self.group_id.clone()))?;
        if items[header + 1..=footer]
            .iter()
            .map(MarkerItem::key)
            .ne(self.member_keys.iter().cloned())
        {
            return Err(DragError::StaleDrag(self.group_id.clone()));
        }
        Ok((header, footer))
    }
}

/// Collapses the group so that only its header is dragged.
pub fn begin_group_drag(
    items: &[MarkerItem],
    group_id: &GroupID,
) -> Result<(Vec<MarkerItem>, GroupDrag), DragError> {
    let (header, footer) = group_span(items, group_id)?;
    let drag = GroupDrag {
        group_id: group_id.clone(),
        member_keys: items[header + 1..=footer]
            .iter()
            .map(MarkerItem::key)
            .collect(),
    };
    Ok((collapse_group(items, group_id), drag))
}

/// Drops the dragged header at `to` and puts the members of the group back behind it.
///
/// Groups keep their sets. A drop inside the span of another group is moved to the nearer end of
/// that group.
pub fn complete_group_drag(
    items: &[MarkerItem],
    drag: &GroupDrag,
    from: usize,
    to: usize,
) -> Result<Vec<MarkerItem>, DragError> {
    let (header, footer) = drag.span(items)?;
    let members = items[header + 1..=footer].to_vec();
    let mut surface = drag.surface(items)?;

    check_index(from, surface.len())?;
    check_index(to, surface.len())?;

    if from != header {
        return Err(DragError::NotAGroupHeader(from));
    }

    let header_item = surface.remove(from);
    let target = snap_out_of_groups(&surface, to, to >= from);
    if target != to {
        debug!(
            "group drag of {}: drop target {to} moved to {target}",
            drag.group_id
        );
    }
    surface.splice(target..target, std::iter::once(header_item).chain(members));

    Ok(expand_all(&surface))
}

fn snap_out_of_groups(items: &[MarkerItem], to: usize, moving_down: bool) -> usize {
    let mut open: Option<(usize, &GroupID)> = None;
    for (i, item) in items[..to].iter().enumerate() {
        match &item.marker {
            Marker::GroupHeader { group_id, .. } => open = Some((i, group_id)),
            Marker::GroupFooter { .. } => open = None,
            Marker::Set(_) => {}
        }
    }

    match open {
        None => to,
        Some((header, _)) if !moving_down => header,
        Some((header, group_id)) => items[header..]
            .iter()
            .position(|i| i.is_footer_of(group_id))
            .map_or(items.len(), |offset| header + offset + 1),
    }
}

fn group_span(items: &[MarkerItem], group_id: &GroupID) -> Result<(usize, usize), DragError> {
    let header = items
        .iter()
        .position(|i| i.is_header_of(group_id))
        .ok_or_else(|| DragError::UnknownGroup(group_id.clone()))?;
    let footer = items[header..]
        .iter()
        .position(|i| i.is_footer_of(group_id))
        .map(|offset| header + offset)
        .ok_or_else(|| GroupError::NotContiguous(group_id.clone()))?;

    if items[header + 1..footer]
        .iter()
        .all(|i| i.as_set().is_some_and(|s| s.belongs_to(group_id)))
    {
        Ok((header, footer))
    } else {
        Err(GroupError::NotContiguous(group_id.clone()).into())
    }
}

fn check_index(index: usize, len: usize) -> Result<(), DragError> {
    if index < len {
        Ok(())
    } else {
        Err(DragError::IndexOutOfRange { index, len })
    }
}
