//! RSVP Field Component
//!
//! One labelled control bound to a field of the RSVP controller.

use leptos::prelude::*;
use wedding_core::rsvp::{field_spec, FieldKind};
use wedding_core::RsvpController;

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Tel => "tel",
        FieldKind::Number => "number",
        _ => "text",
    }
}

#[component]
pub fn RsvpField(
    form: RwSignal<RsvpController>,
    name: &'static str,
    #[prop(optional)] placeholder: &'static str,
    /// (value, label) pairs for select fields
    #[prop(optional)]
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    let (label, kind, required) = field_spec(name)
        .map(|spec| (spec.label, spec.kind, spec.required))
        .unwrap_or((name, FieldKind::Text, false));
    let input_id = format!("rsvp-{}", name);

    let value = move || form.with(|f| f.value(name).to_string());
    let error = move || form.with(|f| f.error(name).map(str::to_string));
    let group_class = move || if error().is_some() { "form-group has-error" } else { "form-group" };
    let control_class = move || if error().is_some() { "form-input error" } else { "form-input" };

    let control = match kind {
        FieldKind::TextArea => view! {
            <textarea
                id=input_id.clone()
                name=name
                class=control_class
                rows="3"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| form.update(|f| f.set_value(name, event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),
        FieldKind::Select => view! {
            <select
                id=input_id.clone()
                name=name
                class=control_class
                on:change=move |ev| form.update(|f| f.set_value(name, event_target_value(&ev)))
            >
                {options.iter().map(|(option, text)| view! {
                    <option value=*option selected=move || form.with(|f| f.value(name) == *option)>
                        {*text}
                    </option>
                }).collect_view()}
            </select>
        }
        .into_any(),
        _ => view! {
            <input
                id=input_id.clone()
                type=input_type(kind)
                name=name
                class=control_class
                placeholder=placeholder
                aria-required=required.to_string()
                prop:value=value
                on:input=move |ev| form.update(|f| f.set_value(name, event_target_value(&ev)))
            />
        }
        .into_any(),
    };

    view! {
        <div class=group_class>
            <label for=input_id>{label}{required.then_some(" *")}</label>
            {control}
            <span class="error-message" role="alert">{move || error().unwrap_or_default()}</span>
        </div>
    }
}
