use crate::{GroupID, MarkerItem};

/// Marks the header, the sets and the footer of the group as collapsed. Nothing is removed, so
/// the list stays complete while a drag is in progress.
#[must_use]
pub fn collapse_group(items: &[MarkerItem], group_id: &GroupID) -> Vec<MarkerItem> {
    mark_collapsed(items, |g| g == group_id)
}

#[must_use]
pub fn collapse_all_other_groups(
    items: &[MarkerItem],
    except_group_id: &GroupID,
) -> Vec<MarkerItem> {
    mark_collapsed(items, |g| g != except_group_id)
}

#[must_use]
pub fn expand_all(items: &[MarkerItem]) -> Vec<MarkerItem> {
    items
        .iter()
        .cloned()
        .map(|mut item| {
            item.is_collapsed = false;
            item
        })
        .collect()
}

fn mark_collapsed(items: &[MarkerItem], selects: impl Fn(&GroupID) -> bool) -> Vec<MarkerItem> {
    items
        .iter()
        .cloned()
        .map(|mut item| {
            if item.group_id().is_some_and(&selects) {
                item.is_collapsed = true;
            }
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{Set, to_marker_list};

    use super::*;

    fn collapsed(items: &[MarkerItem]) -> Vec<bool> {
        items.iter().map(|i| i.is_collapsed).collect()
    }

    static ITEMS: std::sync::LazyLock<Vec<MarkerItem>> = std::sync::LazyLock::new(|| {
        // [a, header-g1, b, footer-g1, c, header-g2, d, e, footer-g2]
        to_marker_list(&[
            Set::new("a"),
            Set::new("b").in_group("g1"),
            Set::new("c"),
            Set::new("d").in_group("g2"),
            Set::new("e").in_group("g2"),
        ])
        .unwrap()
    });

    #[test]
    fn test_collapse_group() {
        let result = collapse_group(&ITEMS, &GroupID::from("g2"));
        assert_eq!(
            collapsed(&result),
            vec![false, false, false, false, false, true, true, true, true]
        );
        assert_eq!(result.len(), ITEMS.len());
    }

    #[test]
    fn test_collapse_all_other_groups() {
        let result = collapse_all_other_groups(&ITEMS, &GroupID::from("g2"));
        assert_eq!(
            collapsed(&result),
            vec![false, true, true, true, false, false, false, false, false]
        );
    }

    #[test]
    fn test_collapse_unknown_group() {
        assert_eq!(collapse_group(&ITEMS, &GroupID::from("g9")), *ITEMS);
    }

    #[test]
    fn test_expand_all() {
        let result = expand_all(&collapse_all_other_groups(
            &collapse_group(&ITEMS, &GroupID::from("g2")),
            &GroupID::from("g2"),
        ));
        assert_eq!(result, *ITEMS);
        assert!(expand_all(&[]).is_empty());
    }
}
