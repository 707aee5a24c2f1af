//! Persisted storage for the form state
//!
//! The state lives in a single key-value slot as a JSON blob. Backends
//! implement [`KeyValueStore`]; the browser uses `localStorage`, tests and
//! non-browser hosts use [`MemoryStore`].

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

use super::form_schema::FormSchema;
use super::form_state::FormState;

/// Slot the form state is stored under
pub const DEFAULT_STORAGE_KEY: &str = "formData";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("persistent storage is not available")]
    Unavailable,
    #[error("storage backend failure: {0}")]
    Backend(String),
    #[error("failed to serialize form state: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("stored form state is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
}

/// Narrow get/set capability over a string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut slots) = store.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
        store
    }

    /// Forget everything, like clearing site data
    pub fn clear(&self) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.clear();
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self
            .slots
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// Hydrate / persist
// ============================================================================

/// How the initial state was obtained
#[derive(Debug)]
pub enum HydrationOutcome {
    /// A stored blob was adopted; `dropped` entries held no usable value or
    /// did not fit the schema
    Restored { dropped: usize },
    /// Nothing was stored yet
    Empty,
    /// The slot could not be read or parsed; started empty instead
    Discarded(StorageError),
}

#[derive(Debug)]
pub struct Hydration {
    pub state: FormState,
    pub outcome: HydrationOutcome,
}

/// Read the initial state. Never fails: unreadable or corrupt storage falls
/// back to an empty state and is reported through the outcome.
pub fn hydrate<S>(store: &S, key: &str, schema: Option<&FormSchema>) -> Hydration
where
    S: KeyValueStore + ?Sized,
{
    match load_state(store, key) {
        Ok(Some((mut state, skipped))) => {
            let dropped = skipped + schema.map(|s| state.conform_to(s)).unwrap_or(0);
            Hydration {
                state,
                outcome: HydrationOutcome::Restored { dropped },
            }
        }
        Ok(None) => Hydration {
            state: FormState::new(),
            outcome: HydrationOutcome::Empty,
        },
        Err(e) => Hydration {
            state: FormState::new(),
            outcome: HydrationOutcome::Discarded(e),
        },
    }
}

/// Stored state plus the number of entries that held no usable value
fn load_state<S>(store: &S, key: &str) -> Result<Option<(FormState, usize)>, StorageError>
where
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    FormState::decode(&raw)
        .map(Some)
        .map_err(StorageError::Corrupt)
}

/// Write the whole state into the slot
pub fn persist<S>(store: &S, key: &str, state: &FormState) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
{
    let raw = state.to_json().map_err(StorageError::Serialize)?;
    store.set(key, &raw)
}

/// Write after a change. An empty state is never written, so mounting with
/// nothing entered does not clobber what is stored. Returns whether a write
/// happened.
pub fn persist_on_change<S>(store: &S, key: &str, state: &FormState) -> Result<bool, StorageError>
where
    S: KeyValueStore + ?Sized,
{
    if state.is_empty() {
        return Ok(false);
    }
    persist(store, key, state)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form_schema::FormDocument;
    use crate::shared::form_state::FieldEvent;

    const SCHEMA: &str = r#"{"form": {"title": "Profile", "groups": [
        {"title": "You", "fields": [
            {"name": "name", "label": "Name", "type": "text", "required": true},
            {"name": "colors", "label": "Colors", "type": "checkbox",
             "options": [{"value": "red", "label": "Red"}, {"value": "blue", "label": "Blue"}]}
        ]}
    ]}}"#;

    fn schema() -> FormSchema {
        FormDocument::parse(SCHEMA).unwrap().schema().unwrap().clone()
    }

    #[test]
    fn test_empty_store_hydrates_empty() {
        let store = MemoryStore::new();
        let h = hydrate(&store, DEFAULT_STORAGE_KEY, Some(&schema()));
        assert!(h.state.is_empty());
        assert!(matches!(h.outcome, HydrationOutcome::Empty));
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_empty() {
        let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "{not json");
        let h = hydrate(&store, DEFAULT_STORAGE_KEY, Some(&schema()));
        assert!(h.state.is_empty());
        assert!(matches!(
            h.outcome,
            HydrationOutcome::Discarded(StorageError::Corrupt(_))
        ));
    }

    #[test]
    fn test_submit_then_reload_round_trip() {
        let schema = schema();
        let store = MemoryStore::new();

        let mut state = FormState::new();
        state.apply_event(schema.field("name").unwrap(), FieldEvent::value("Ada"));
        state.apply_event(schema.field("colors").unwrap(), FieldEvent::toggle("blue", true));
        state.apply_event(schema.field("colors").unwrap(), FieldEvent::toggle("red", true));
        persist(&store, DEFAULT_STORAGE_KEY, &state).unwrap();

        let h = hydrate(&store, DEFAULT_STORAGE_KEY, Some(&schema));
        assert!(matches!(h.outcome, HydrationOutcome::Restored { dropped: 0 }));
        assert_eq!(h.state.scalar("name"), Some("Ada"));
        assert!(h.state.is_checked("colors", "red"));
        assert!(h.state.is_checked("colors", "blue"));
        assert_eq!(h.state, state);
    }

    #[test]
    fn test_submit_without_changes_is_idempotent() {
        let schema = schema();
        let stored = r#"{"name":"Ada","colors":["red","blue"]}"#;
        let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, stored);

        let first = hydrate(&store, DEFAULT_STORAGE_KEY, Some(&schema));
        persist(&store, DEFAULT_STORAGE_KEY, &first.state).unwrap();
        let second = hydrate(&store, DEFAULT_STORAGE_KEY, Some(&schema));

        assert_eq!(second.state, first.state);
        assert_eq!(second.state, FormState::from_json(stored).unwrap());
        assert_eq!(second.state.selected("colors"), ["red", "blue"].map(String::from));
    }

    #[test]
    fn test_repeated_selections_are_collapsed_on_hydrate() {
        let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, r#"{"colors":["red","red"]}"#);
        let mut h = hydrate(&store, DEFAULT_STORAGE_KEY, Some(&schema()));
        assert_eq!(h.state.selected("colors"), ["red".to_string()]);

        h.state.toggle("colors", "red", false);
        persist(&store, DEFAULT_STORAGE_KEY, &h.state).unwrap();
        let h = hydrate(&store, DEFAULT_STORAGE_KEY, Some(&schema()));
        assert!(h.state.selected("colors").is_empty());
    }

    #[test]
    fn test_non_string_entries_do_not_discard_the_blob() {
        let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, r#"{"name":"Ada","age":30}"#);
        let h = hydrate(&store, DEFAULT_STORAGE_KEY, Some(&schema()));
        assert!(matches!(h.outcome, HydrationOutcome::Restored { dropped: 1 }));
        assert_eq!(h.state.scalar("name"), Some("Ada"));
    }

    #[test]
    fn test_empty_state_does_not_overwrite_on_change() {
        let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, r#"{"name":"Ada"}"#);
        let wrote = persist_on_change(&store, DEFAULT_STORAGE_KEY, &FormState::new()).unwrap();
        assert!(!wrote);
        assert_eq!(
            store.get(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
            Some(r#"{"name":"Ada"}"#)
        );
    }

    #[test]
    fn test_every_change_is_mirrored() {
        let schema = schema();
        let store = MemoryStore::new();
        let mut state = FormState::new();

        state.apply_event(schema.field("name").unwrap(), FieldEvent::value("A"));
        persist_on_change(&store, DEFAULT_STORAGE_KEY, &state).unwrap();
        state.apply_event(schema.field("name").unwrap(), FieldEvent::value("Ad"));
        persist_on_change(&store, DEFAULT_STORAGE_KEY, &state).unwrap();

        let h = hydrate(&store, DEFAULT_STORAGE_KEY, Some(&schema));
        assert_eq!(h.state.scalar("name"), Some("Ad"));
    }

    #[test]
    fn test_cleared_store_starts_over() {
        let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, r#"{"name":"Ada"}"#);
        store.clear();
        let h = hydrate(&store, DEFAULT_STORAGE_KEY, None);
        assert!(matches!(h.outcome, HydrationOutcome::Empty));
    }
}
