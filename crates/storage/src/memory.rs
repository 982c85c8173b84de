use std::{
    collections::{BTreeMap, VecDeque},
    sync::Mutex,
};

use aura_domain::{self as domain, StorageError};
use aura_web_app::log;

/// Volatile key-value store using the same string encoding as the local storage.
///
/// Used where no browser storage exists, e.g. in native hosts.
#[derive(Default)]
pub struct Memory {
    entries: Mutex<BTreeMap<String, String>>,
    log: Mutex<VecDeque<log::Entry>>,
}

impl Memory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
            log: Mutex::default(),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

impl domain::ProfileRepository for Memory {
    fn read_profile(&self) -> Result<domain::Profile, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|err| StorageError::Other(err.to_string()))?;
        Ok(domain::Profile::from_entries(|key| entries.get(key).cloned()))
    }

    fn write_profile(&self, profile: &domain::Profile) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| StorageError::Other(err.to_string()))?;
        for (key, value) in profile.entries() {
            entries.insert(key.to_string(), value);
        }
        Ok(())
    }
}

impl log::Repository for Memory {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.log
            .lock()
            .map(|entries| entries.clone())
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self
            .log
            .lock()
            .map_err(|err| log::Error::Unknown(err.to_string()))?;
        log::push_entry(&mut entries, entry);
        Ok(())
    }
}
