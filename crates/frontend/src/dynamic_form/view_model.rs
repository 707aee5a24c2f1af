//! ViewModel for the dynamic form

use std::sync::Arc;

use contracts::shared::form_schema::{FieldDescriptor, FormDocument, FormSchema};
use contracts::shared::form_state::{FieldEvent, FormState};
use contracts::shared::storage::{self, HydrationOutcome, KeyValueStore};
use leptos::prelude::*;

use super::browser::SubmitEffects;
use crate::config::AppConfig;

/// Storage capability shared by every handler of the form
pub type SharedStore = Arc<dyn KeyValueStore + Send + Sync>;

/// Acknowledge/reload capability used on submit
pub type SharedEffects = Arc<dyn SubmitEffects + Send + Sync>;

#[derive(Clone)]
pub struct DynamicFormVm {
    pub state: RwSignal<FormState>,
    schema: Option<Arc<FormSchema>>,
    store: SharedStore,
    effects: SharedEffects,
    config: Arc<AppConfig>,
}

impl DynamicFormVm {
    pub fn new(
        document: &FormDocument,
        store: SharedStore,
        effects: SharedEffects,
        config: AppConfig,
    ) -> Self {
        Self {
            state: RwSignal::new(FormState::new()),
            schema: document.schema().cloned().map(Arc::new),
            store,
            effects,
            config: Arc::new(config),
        }
    }

    fn storage_key(&self) -> &str {
        &self.config.storage.key
    }

    fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.schema.as_ref()?.field(name)
    }

    /// Adopt whatever is persisted, or start empty
    pub fn hydrate(&self) {
        let hydration = storage::hydrate(
            self.store.as_ref(),
            self.storage_key(),
            self.schema.as_deref(),
        );

        match &hydration.outcome {
            HydrationOutcome::Restored { dropped } => {
                log::debug!(
                    "Restored {} field(s) from '{}'",
                    hydration.state.len(),
                    self.storage_key()
                );
                if *dropped > 0 {
                    log::warn!("Discarded {} stored field(s) unknown to the schema", dropped);
                }
            }
            HydrationOutcome::Empty => log::debug!("No stored form state, starting empty"),
            HydrationOutcome::Discarded(e) => {
                log::warn!("Ignoring stored form state, starting empty: {}", e)
            }
        }

        self.state.set(hydration.state);
    }

    /// Route a control event into the state according to the field kind
    pub fn on_field_event(&self, name: &str, event: FieldEvent) {
        let Some(field) = self.field(name) else {
            log::warn!("Event for undeclared field '{}'", name);
            return;
        };
        self.state.maybe_update(|state| state.apply_event(field, event));
    }

    /// Mirror the current state into storage; tracks `state` when run inside an effect
    pub fn persist_changes(&self) {
        self.state.with(|state| {
            match storage::persist_on_change(self.store.as_ref(), self.storage_key(), state) {
                Ok(true) => log::debug!("Persisted {} field(s)", state.len()),
                Ok(false) => {}
                Err(e) => log::warn!("Failed to persist form state: {}", e),
            }
        });
    }

    /// Persist, acknowledge, then round-trip through storage
    pub fn submit(&self) {
        let written = self
            .state
            .with_untracked(|state| storage::persist(self.store.as_ref(), self.storage_key(), state));
        if let Err(e) = written {
            log::error!("Failed to persist form state on submit: {}", e);
        }

        self.effects.acknowledge(&self.config.submit.acknowledgement);

        if self.config.submit.reload {
            self.effects.reload();
        } else {
            self.hydrate();
        }
    }

    // ------------------------------------------------------------------
    // Bindings for controls
    // ------------------------------------------------------------------

    pub fn scalar(&self, name: &str) -> Signal<String> {
        let state = self.state;
        let name = name.to_string();
        Signal::derive(move || state.with(|s| s.scalar(&name).unwrap_or_default().to_string()))
    }

    pub fn selected(&self, name: &str) -> Signal<Vec<String>> {
        let state = self.state;
        let name = name.to_string();
        Signal::derive(move || state.with(|s| s.selected(&name).to_vec()))
    }

    /// Stored slider value, or the slider minimum while nothing is stored
    pub fn slider_value(&self, name: &str) -> Signal<String> {
        let state = self.state;
        let field = self.field(name).cloned();
        Signal::derive(move || match &field {
            Some(field) => state.with(|s| s.slider_display(field)),
            None => String::new(),
        })
    }

    pub fn input_handler(&self, name: &str) -> Callback<String> {
        let vm = self.clone();
        let name = name.to_string();
        Callback::new(move |value: String| vm.on_field_event(&name, FieldEvent::value(value)))
    }

    pub fn toggle_handler(&self, name: &str) -> Callback<(String, bool)> {
        let vm = self.clone();
        let name = name.to_string();
        Callback::new(move |(value, checked): (String, bool)| {
            vm.on_field_event(&name, FieldEvent::toggle(value, checked))
        })
    }
}
