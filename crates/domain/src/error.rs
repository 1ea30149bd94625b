use crate::GroupID;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    #[error("sets of group {0} are not contiguous")]
    NotContiguous(GroupID),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DragError {
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("item at index {0} is not a set")]
    NotASet(usize),
    #[error("item at index {0} is not the header of the dragged group")]
    NotAGroupHeader(usize),
    #[error("unknown group {0}")]
    UnknownGroup(GroupID),
    #[error("drag of group {0} does not match the current list")]
    StaleDrag(GroupID),
    #[error(transparent)]
    Group(#[from] GroupError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_error_from_group_error() {
        assert!(matches!(
            DragError::from(GroupError::NotContiguous(GroupID::from("g1"))),
            DragError::Group(GroupError::NotContiguous(group_id)) if group_id == GroupID::from("g1")
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DragError::IndexOutOfRange { index: 7, len: 3 }.to_string(),
            "index 7 out of range for list of length 3"
        );
        assert_eq!(
            DragError::Group(GroupError::NotContiguous(GroupID::from("g1"))).to_string(),
            "sets of group g1 are not contiguous"
        );
    }
}
