use leptos::prelude::*;

/// Range input with a live numeric readout next to it
#[component]
pub fn Slider(
    #[prop(into)]
    name: String,
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    min: String,
    #[prop(into)]
    max: String,
    #[prop(into)]
    step: String,
    /// Value to display; callers substitute `min` while nothing is stored
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
) -> impl IntoView {
    let label_for = name.clone();

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
                type="range"
                class="form__range"
                min=min
                max=max
                step=step
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            <span class="form__range-value">{move || value.get()}</span>
        </div>
    }
}
