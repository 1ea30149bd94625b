use derive_more::{AsRef, Deref, Display, Into};
use uuid::Uuid;

use crate::SetPayload;

#[derive(AsRef, Deref, Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetID(String);

impl SetID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for SetID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SetID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(AsRef, Deref, Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupID(String);

impl GroupID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for GroupID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for GroupID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Warmup and failure are mutually exclusive, so both flags are folded into one value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetKind {
    #[default]
    Working,
    Warmup,
    Failure,
}

impl SetKind {
    #[must_use]
    pub fn from_flags(is_warmup: bool, is_failure: bool) -> Option<Self> {
        match (is_warmup, is_failure) {
            (false, false) => Some(SetKind::Working),
            (true, false) => Some(SetKind::Warmup),
            (false, true) => Some(SetKind::Failure),
            (true, true) => None,
        }
    }

    #[must_use]
    pub fn is_warmup(self) -> bool {
        self == SetKind::Warmup
    }

    #[must_use]
    pub fn is_failure(self) -> bool {
        self == SetKind::Failure
    }

    #[must_use]
    pub fn with_warmup(self, value: bool) -> Self {
        match (self, value) {
            (_, true) => SetKind::Warmup,
            (SetKind::Warmup, false) => SetKind::Working,
            (kind, false) => kind,
        }
    }

    #[must_use]
    pub fn with_failure(self, value: bool) -> Self {
        match (self, value) {
            (_, true) => SetKind::Failure,
            (SetKind::Failure, false) => SetKind::Working,
            (kind, false) => kind,
        }
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RestSeconds(u32);

impl RestSeconds {
    pub fn new(value: u32) -> Result<Self, RestSecondsError> {
        if value == 0 {
            return Err(RestSecondsError::NotPositive);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for RestSeconds {
    type Error = RestSecondsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => RestSeconds::new(parsed_value),
            Err(_) => Err(RestSecondsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RestSecondsError {
    #[error("Rest period must be greater than 0 s")]
    NotPositive,
    #[error("Rest period must be an integer")]
    ParseError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    pub id: SetID,
    pub group_id: Option<GroupID>,
    pub kind: SetKind,
    pub rest_seconds: Option<RestSeconds>,
    pub payload: SetPayload,
}

impl Set {
    #[must_use]
    pub fn new(id: impl Into<SetID>) -> Self {
        Self {
            id: id.into(),
            group_id: None,
            kind: SetKind::Working,
            rest_seconds: None,
            payload: SetPayload::default(),
        }
    }

    #[must_use]
    pub fn in_group(mut self, group_id: impl Into<GroupID>) -> Self {
        self.group_id = Some(group_id.into());
        self
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

    #[must_use]
    pub fn is_warmup(&self) -> bool {
        self.kind.is_warmup()
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.kind.is_failure()
    }

    #[must_use]
    pub fn belongs_to(&self, group_id: &GroupID) -> bool {
        self.group_id.as_ref() == Some(group_id)
    }
}
