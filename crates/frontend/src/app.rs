use std::sync::Arc;

use crate::config::load_config;
use crate::dynamic_form::browser::{BrowserPage, LocalStorage};
use crate::dynamic_form::model::FormPlan;
use crate::dynamic_form::source::load_document;
use crate::dynamic_form::{DynamicForm, DynamicFormVm};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let document = load_document();
    let plan = FormPlan::from_document(&document);

    // State is hydrated once, before the first render
    let vm = DynamicFormVm::new(
        &document,
        Arc::new(LocalStorage),
        Arc::new(BrowserPage),
        config,
    );
    vm.hydrate();

    view! {
        <DynamicForm vm=vm plan=plan />
    }
}
