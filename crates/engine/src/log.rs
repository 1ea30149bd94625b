use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Utc;
use log::{Level, LevelFilter, Metadata, Record};
use serde::{Deserialize, Serialize};

use crate::Settings;

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&mut self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("log is not initialized")]
    Uninitialized,
    #[error("log is poisoned")]
    Poisoned,
    #[error("log is already initialized")]
    AlreadyInitialized,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Keeps the most recent entries, dropping the oldest once `capacity` is reached.
///
/// Memory is allocated as entries arrive, not up front.
pub struct MemoryRepository {
    entries: VecDeque<Entry>,
    capacity: usize,
}

impl MemoryRepository {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }
}

impl Repository for MemoryRepository {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
        Ok(self.entries.clone())
    }

    fn write_entry(&mut self, entry: Entry) -> Result<(), Error> {
        while self.entries.len() >= self.capacity.max(1) {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        Ok(())
    }
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized or the log is poisoned. The
/// repository of an installed logger is never replaced.
pub fn init(repository: Arc<Mutex<dyn Repository>>, level: LevelFilter) -> Result<(), Error> {
    let mut log = LOG.lock().map_err(|_| Error::Poisoned)?;
    log::set_logger(&LOGGER).map_err(|_| Error::AlreadyInitialized)?;
    *log = Some(repository);
    log::set_max_level(level);
    Ok(())
}

/// Sets up an in-memory log sized and filtered as configured.
///
/// # Errors
///
/// Returns an error if the logger has already been initialized or the log is poisoned.
pub fn init_from_settings(settings: &Settings) -> Result<(), Error> {
    init(
        Arc::new(Mutex::new(MemoryRepository::new(settings.log_capacity))),
        settings.log_level,
    )
}

/// # Errors
///
/// Returns an error if no logger has been initialized.
pub fn entries() -> Result<VecDeque<Entry>, Error> {
    let log = LOG.lock().map_err(|_| Error::Poisoned)?;
    let repository = log.as_ref().ok_or(Error::Uninitialized)?;
    let repository = repository.lock().map_err(|_| Error::Poisoned)?;
    repository.read_entries()
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(log) = LOG.lock()
            && let Some(repository) = log.as_ref()
            && let Ok(mut repository) = repository.lock()
        {
            let _ = repository.write_entry(Entry {
                time: Utc::now().format("%b %d %H:%M:%S").to_string(),
                level: record.level(),
                message: record.args().to_string(),
            });
        }
    }

    fn flush(&self) {}
}
