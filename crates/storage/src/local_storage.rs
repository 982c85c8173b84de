use std::collections::VecDeque;

use aura_domain::{self as domain, StorageError};
use aura_web_app::log;
use gloo_storage::Storage as GlooStorage;

/// Profile persisted as one plain string per key in the browser's local storage.
pub struct Profile;

impl domain::ProfileRepository for Profile {
    fn read_profile(&self) -> Result<domain::Profile, StorageError> {
        let storage = local_storage()?;
        Ok(domain::Profile::from_entries(|key| {
            storage.get_item(key).ok().flatten()
        }))
    }

    fn write_profile(&self, profile: &domain::Profile) -> Result<(), StorageError> {
        let storage = local_storage()?;
        for (key, value) in profile.entries() {
            storage
                .set_item(key, &value)
                .map_err(|err| StorageError::Other(format!("failed to write {key}: {err:?}")))?;
        }
        Ok(())
    }
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::NoStorage)
}

pub struct Log;

const KEY_LOG: &str = "aura_log";

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(VecDeque::new()),
            Err(err) => Err(log::Error::Unknown(err.to_string())),
        }
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::push_entry(&mut entries, entry);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
