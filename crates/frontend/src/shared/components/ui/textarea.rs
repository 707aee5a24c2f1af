use leptos::prelude::*;

const TEXTAREA_ROWS: u32 = 3;

/// Multi-line text field; same value semantics as [`super::Input`]
#[component]
pub fn Textarea(
    #[prop(into)]
    name: String,
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let label_for = name.clone();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=label_for.clone()>
                    {l}
                </label>
            })}
            <textarea
                id=name.clone()
                name=name
                class="form__textarea"
                placeholder=textarea_placeholder
                required=required
                rows=TEXTAREA_ROWS
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
        </div>
    }
}
