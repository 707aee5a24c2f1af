use leptos::prelude::*;

/// Single-line input bound to a form field.
///
/// Serves `text` and `number` fields; `min`/`max` are only emitted when set.
#[component]
pub fn Input(
    /// Field name, also used as the element id
    #[prop(into)]
    name: String,
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default) or "number"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Lower bound for numeric inputs
    #[prop(optional, into)]
    min: MaybeProp<String>,
    /// Upper bound for numeric inputs
    #[prop(optional, into)]
    max: MaybeProp<String>,
) -> impl IntoView {
    let label_for = name.clone();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=label_for.clone()>
                    {l}
                </label>
            })}
            <input
                id=name.clone()
                name=name
                class="form__input"
                type=input_t
                placeholder=input_placeholder
                required=required
                min=move || min.get()
                max=move || max.get()
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
