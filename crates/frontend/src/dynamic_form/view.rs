use leptos::prelude::*;

use super::model::{ControlKind, ControlPlan, FormLayout, FormPlan, OptionList, SectionPlan};
use super::view_model::DynamicFormVm;
use crate::shared::components::ui::{
    Button, CheckboxGroup, Input, RadioGroup, Select, Slider, Textarea,
};

#[component]
pub fn DynamicForm(vm: DynamicFormVm, plan: FormPlan) -> impl IntoView {
    let FormPlan::Ready(layout) = plan else {
        return view! { <div class="form-loading">"Loading..."</div> }.into_any();
    };

    // Every state change is written back to storage
    let vm_persist = vm.clone();
    Effect::new(move |_| vm_persist.persist_changes());

    let vm_submit = vm.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm_submit.submit();
    };

    let FormLayout {
        title,
        description,
        sections,
    } = layout;

    view! {
        <div class="form-container">
            <h2>{title}</h2>
            <p>{description}</p>
            <form on:submit=on_submit>
                {sections
                    .into_iter()
                    .map(|section| view! { <FormSection section=section vm=vm.clone() /> })
                    .collect_view()}
                <Button button_type="submit">"Submit"</Button>
            </form>
        </div>
    }
    .into_any()
}

#[component]
fn FormSection(section: SectionPlan, vm: DynamicFormVm) -> impl IntoView {
    view! {
        <fieldset class="form__section">
            <legend class="form__legend">{section.title}</legend>
            {section
                .controls
                .into_iter()
                .map(|control| render_control(control, &vm))
                .collect_view()}
        </fieldset>
    }
}

fn render_control(plan: ControlPlan, vm: &DynamicFormVm) -> AnyView {
    let ControlPlan {
        name,
        label,
        required,
        control,
    } = plan;

    match control {
        ControlKind::TextInput { placeholder } => {
            render_text_input(vm, name, label, required, placeholder)
        }
        ControlKind::TextArea { placeholder } => {
            render_textarea(vm, name, label, required, placeholder)
        }
        ControlKind::NumberInput {
            placeholder,
            min,
            max,
        } => render_number_input(vm, name, label, required, placeholder, min, max),
        ControlKind::Select { options } => render_select(vm, name, label, required, options),
        ControlKind::RadioGroup { options } => {
            render_radio_group(vm, name, label, required, options)
        }
        ControlKind::CheckboxGroup { options } => render_checkbox_group(vm, name, label, options),
        ControlKind::Range { min, max, step } => render_range(vm, name, label, min, max, step),
    }
}

fn render_text_input(
    vm: &DynamicFormVm,
    name: String,
    label: String,
    required: bool,
    placeholder: String,
) -> AnyView {
    view! {
        <Input
            name=name.clone()
            label=label
            value=vm.scalar(&name)
            on_input=vm.input_handler(&name)
            placeholder=placeholder
            required=required
        />
    }
    .into_any()
}

fn render_textarea(
    vm: &DynamicFormVm,
    name: String,
    label: String,
    required: bool,
    placeholder: String,
) -> AnyView {
    view! {
        <Textarea
            name=name.clone()
            label=label
            value=vm.scalar(&name)
            on_input=vm.input_handler(&name)
            placeholder=placeholder
            required=required
        />
    }
    .into_any()
}

fn render_number_input(
    vm: &DynamicFormVm,
    name: String,
    label: String,
    required: bool,
    placeholder: String,
    min: Option<String>,
    max: Option<String>,
) -> AnyView {
    view! {
        <Input
            name=name.clone()
            label=label
            input_type="number"
            value=vm.scalar(&name)
            on_input=vm.input_handler(&name)
            placeholder=placeholder
            required=required
            min=min
            max=max
        />
    }
    .into_any()
}

fn render_select(
    vm: &DynamicFormVm,
    name: String,
    label: String,
    required: bool,
    options: OptionList,
) -> AnyView {
    view! {
        <Select
            name=name.clone()
            label=label
            value=vm.scalar(&name)
            on_change=vm.input_handler(&name)
            options=options
            required=required
        />
    }
    .into_any()
}

fn render_radio_group(
    vm: &DynamicFormVm,
    name: String,
    label: String,
    required: bool,
    options: OptionList,
) -> AnyView {
    view! {
        <RadioGroup
            label=label
            value=vm.scalar(&name)
            on_change=vm.input_handler(&name)
            name=name
            options=options
            required=required
        />
    }
    .into_any()
}

fn render_checkbox_group(
    vm: &DynamicFormVm,
    name: String,
    label: String,
    options: OptionList,
) -> AnyView {
    view! {
        <CheckboxGroup
            label=label
            selected=vm.selected(&name)
            on_toggle=vm.toggle_handler(&name)
            name=name
            options=options
        />
    }
    .into_any()
}

fn render_range(
    vm: &DynamicFormVm,
    name: String,
    label: String,
    min: String,
    max: String,
    step: String,
) -> AnyView {
    view! {
        <Slider
            name=name.clone()
            label=label
            min=min
            max=max
            step=step
            value=vm.slider_value(&name)
            on_input=vm.input_handler(&name)
        />
    }
    .into_any()
}
