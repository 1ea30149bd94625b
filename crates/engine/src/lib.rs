#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;

mod engine;
mod patch;
mod record;
mod settings;

pub use engine::SetListEngine;
pub use patch::{PatchError, RawPatch};
pub use record::{RecordError, SetRecord, sets_from_json, sets_to_json};
pub use settings::{MAX_LOG_CAPACITY, Settings, SettingsError};
