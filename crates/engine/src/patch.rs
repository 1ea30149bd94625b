use setlist_domain::{AttributePatch, RestSeconds, RestSecondsError};

/// Attribute change as entered in the bulk edit dialog.
///
/// Fields are applied in declaration order, so a patch that switches on both warmup and failure
/// ends up marking the sets as failure sets.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPatch {
    pub rest_seconds: Option<u32>,
    pub clear_rest: bool,
    pub is_warmup: Option<bool>,
    pub is_failure: Option<bool>,
}

impl TryFrom<RawPatch> for AttributePatch {
    type Error = PatchError;

    fn try_from(value: RawPatch) -> Result<Self, Self::Error> {
        let mut patch = AttributePatch::new();
        match (value.rest_seconds, value.clear_rest) {
            (Some(_), true) => return Err(PatchError::AmbiguousRest),
            (Some(rest_seconds), false) => {
                patch = patch.rest(Some(RestSeconds::new(rest_seconds)?));
            }
            (None, true) => patch = patch.rest(None),
            (None, false) => {}
        }
        if let Some(is_warmup) = value.is_warmup {
            patch = patch.warmup(is_warmup);
        }
        if let Some(is_failure) = value.is_failure {
            patch = patch.failure(is_failure);
        }
        if patch.is_empty() {
            return Err(PatchError::Empty);
        }
        Ok(patch)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PatchError {
    #[error("patch does not change anything")]
    Empty,
    #[error("patch both sets and clears the rest period")]
    AmbiguousRest,
    #[error(transparent)]
    RestSeconds(#[from] RestSecondsError),
}
