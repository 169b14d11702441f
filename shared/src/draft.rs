//! Unsubmitted reservation drafts kept in per-browser storage.
//!
//! Values are stored as the raw field strings under a single JSON object.
//! There is no versioning or expiry; each save overwrites the last one.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::StorageError;
use crate::reservation::ReservationForm;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationDraft {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub time: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub guests: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub requests: String,
}

// A field stored as `null` reads back as an empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&ReservationForm> for ReservationDraft {
    fn from(form: &ReservationForm) -> Self {
        Self {
            name: form.name.clone(),
            phone: form.phone.clone(),
            date: form.date.clone(),
            time: form.time.clone(),
            guests: form.guests.get().to_string(),
            requests: form.requests.clone(),
        }
    }
}

/// Whether the autosave tick should write a draft.
///
/// Only the first input (name) and the first text area (requests) are
/// inspected, so a form with just a phone number is not saved.
pub fn should_autosave(form: &ReservationForm) -> bool {
    !form.name.is_empty() || !form.requests.is_empty()
}

pub fn save_draft<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    draft: &ReservationDraft,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(draft).map_err(|e| StorageError::Serialization(e.to_string()))?;
    store.set(key, &json)
}

/// Load the saved draft; absent or malformed entries yield `None`
pub fn load_draft<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<ReservationDraft> {
    let raw = store.get(key)?;
    match serde_json::from_str::<ReservationDraft>(&raw) {
        Ok(draft) => Some(draft),
        Err(e) => {
            log::warn!("⚠️ DRAFT: ignoring malformed draft: {}", e);
            None
        }
    }
}

/// One autosave tick. Returns whether a draft was written.
pub fn autosave<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    form: &ReservationForm,
) -> Result<bool, StorageError> {
    if !should_autosave(form) {
        return Ok(false);
    }
    save_draft(store, key, &ReservationDraft::from(form))?;
    log::debug!("💾 DRAFT: saved");
    Ok(true)
}
