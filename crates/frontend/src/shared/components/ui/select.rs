use leptos::prelude::*;

/// Text of the empty option shown before anything is chosen
pub const SELECT_PLACEHOLDER: &str = "Select an option";

/// Single-select dropdown.
///
/// Always starts with an empty, non-selectable placeholder option, so a
/// required dropdown fails native validation until a real option is picked.
#[component]
pub fn Select(
    #[prop(into)]
    name: String,
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value, empty when nothing is chosen
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    options: Vec<(String, String)>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let label_for = name.clone();
    let nothing_chosen = move || value.get().is_empty();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=label_for.clone()>
                    {l}
                </label>
            })}
            <select
                id=name.clone()
                name=name
                class="form__select"
                required=required
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" disabled=true selected=nothing_chosen>
                    {SELECT_PLACEHOLDER}
                </option>
                {options
                    .into_iter()
                    .map(|(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
