use leptos::prelude::*;

/// Checkbox for one option of a multi-select field
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// Name attribute shared by the options of one field
    #[prop(into)]
    name: String,
    /// Option value
    #[prop(into)]
    value: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let checkbox_id = format!("{}-{}", name, value);

    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=checkbox_id.clone()
                type="checkbox"
                class="form__checkbox"
                name=name
                value=value
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=checkbox_id>
                {label}
            </label>
        </div>
    }
}

/// Independent toggles, one per option, grouped by field name
#[component]
pub fn CheckboxGroup(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    name: String,
    /// Options: Vec of (value, label) tuples
    options: Vec<(String, String)>,
    /// Currently selected option values
    #[prop(into)]
    selected: Signal<Vec<String>>,
    /// Receives `(option value, checked)` on every toggle
    #[prop(optional)]
    on_toggle: Option<Callback<(String, bool)>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <div class="form__checkbox-group">
                {options
                    .into_iter()
                    .map(|(val, lbl)| {
                        let val_for_check = val.clone();
                        let val_for_toggle = val.clone();
                        let checked = Signal::derive(move || {
                            selected.with(|s| s.iter().any(|v| *v == val_for_check))
                        });
                        view! {
                            <Checkbox
                                label=lbl
                                name=name.clone()
                                value=val
                                checked=checked
                                on_change=Callback::new(move |is_checked: bool| {
                                    if let Some(handler) = on_toggle {
                                        handler.run((val_for_toggle.clone(), is_checked));
                                    }
                                })
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
