//! Browser key-value persistence for the archive.
//!
//! The archive lives as one JSON payload under a fixed `localStorage` key.
//! Loading is fail-soft; writing rewrites the whole payload.

use designcraft_archive::{ArchiveStore, STORAGE_KEY};
use wasm_bindgen::JsError;

/// Load the archive from `localStorage`.
///
/// Missing storage, a missing key, or a malformed payload all yield an
/// empty archive.
pub(crate) fn load_archive() -> ArchiveStore {
    let payload =
        local_storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    ArchiveStore::from_json(payload.as_deref())
}

/// Rewrite the whole archive payload under the fixed storage key.
pub(crate) fn persist_archive(archive: &ArchiveStore) -> Result<(), JsError> {
    let storage =
        local_storage().ok_or_else(|| JsError::new("localStorage is not available"))?;
    let payload = archive
        .to_json()
        .map_err(|e| JsError::new(&format!("Archive error: {e}")))?;
    storage
        .set_item(STORAGE_KEY, &payload)
        .map_err(|_| JsError::new("Failed to write the archive payload"))?;
    Ok(())
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}
