use log::LevelFilter;
use setlist_domain::ContiguityPolicy;

pub const MAX_LOG_CAPACITY: usize = 100_000;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Applied after every insertion, deletion or regrouping.
    #[serde(with = "ContiguityPolicyDef")]
    pub contiguity_policy: ContiguityPolicy,
    pub collapse_other_groups_on_drag: bool,
    #[serde(with = "LevelFilterDef")]
    pub log_level: LevelFilter,
    pub log_capacity: usize,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        if !(1..=MAX_LOG_CAPACITY).contains(&settings.log_capacity) {
            return Err(SettingsError::InvalidLogCapacity(settings.log_capacity));
        }
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            contiguity_policy: ContiguityPolicy::Split,
            collapse_other_groups_on_drag: true,
            log_level: LevelFilter::Info,
            log_capacity: 1000,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(remote = "ContiguityPolicy", rename_all = "camelCase")]
enum ContiguityPolicyDef {
    Reject,
    Gather,
    Split,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(remote = "LevelFilter", rename_all = "camelCase")]
enum LevelFilterDef {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("log capacity must be in the range 1 to {MAX_LOG_CAPACITY}, got {0}")]
    InvalidLogCapacity(usize),
}
