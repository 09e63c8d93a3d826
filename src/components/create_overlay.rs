use leptos::prelude::*;

use crate::context::use_console;
use crate::controllers::create::{CreateForm, SubmitOutcome};
use crate::models::{ACTION_STATES, ACTION_TYPES, PLATFORMS};
use crate::render::Surface;

type FieldGet = fn(&CreateForm) -> &str;
type FieldSet = fn(&mut CreateForm, String);

/// One free-form input of the create form.
struct InputField {
    label: &'static str,
    input_type: &'static str,
    required: bool,
    get: FieldGet,
    set: FieldSet,
}

const TITLE: InputField = InputField {
    label: "Title",
    input_type: "text",
    required: true,
    get: |f| f.title.as_str(),
    set: |f, v| f.title = v,
};

const DETAIL_INPUTS: &[InputField] = &[
    InputField {
        label: "Created by",
        input_type: "text",
        required: true,
        get: |f| f.created_by.as_str(),
        set: |f, v| f.created_by = v,
    },
    InputField {
        label: "Owner id",
        input_type: "text",
        required: true,
        get: |f| f.owner_id.as_str(),
        set: |f, v| f.owner_id = v,
    },
    InputField {
        label: "Subject",
        input_type: "text",
        required: false,
        get: |f| f.content_subject.as_str(),
        set: |f, v| f.content_subject = v,
    },
    InputField {
        label: "Message",
        input_type: "text",
        required: false,
        get: |f| f.content_message.as_str(),
        set: |f, v| f.content_message = v,
    },
    InputField {
        label: "Media URLs (comma separated)",
        input_type: "text",
        required: false,
        get: |f| f.media.as_str(),
        set: |f, v| f.media = v,
    },
    InputField {
        label: "Scheduled date",
        input_type: "datetime-local",
        required: false,
        get: |f| f.scheduled_date.as_str(),
        set: |f, v| f.scheduled_date = v,
    },
    InputField {
        label: "Interval",
        input_type: "number",
        required: false,
        get: |f| f.execution_interval.as_str(),
        set: |f, v| f.execution_interval = v,
    },
    InputField {
        label: "Start date",
        input_type: "date",
        required: false,
        get: |f| f.start_date.as_str(),
        set: |f, v| f.start_date = v,
    },
    InputField {
        label: "End date",
        input_type: "date",
        required: false,
        get: |f| f.end_date.as_str(),
        set: |f, v| f.end_date = v,
    },
    InputField {
        label: "Campaign id",
        input_type: "text",
        required: false,
        get: |f| f.campaign_id.as_str(),
        set: |f, v| f.campaign_id = v,
    },
];

fn input_field(form: RwSignal<CreateForm>, field: &InputField) -> impl IntoView {
    let (get, set) = (field.get, field.set);
    view! {
        <label class="form-field">
            <span class="form-label">{field.label}{field.required.then_some(" *")}</span>
            <input
                type=field.input_type
                class="input"
                prop:value=move || form.with(|f| get(f).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </label>
    }
}

fn select_field(
    form: RwSignal<CreateForm>,
    label: &'static str,
    options: &'static [&'static str],
    get: FieldGet,
    set: FieldSet,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <select
                class="select"
                prop:value=move || form.with(|f| get(f).to_string())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            >
                {options
                    .iter()
                    .map(|o| view! { <option value=*o>{*o}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn CreateOverlay() -> impl IntoView {
    let ctx = use_console();
    let surface = ctx.view.surface(Surface::Create);
    let form = RwSignal::new(CreateForm::default());

    let close = move |_| ctx.run(|console| async move { console.close_create().await });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get_untracked();
        ctx.run(move |console| async move {
            if console.submit_create(&snapshot).await == SubmitOutcome::Created {
                form.set(CreateForm::default());
            }
        });
    };

    view! {
        <div
            class="overlay create-overlay"
            class:hidden=move || !surface.visible.get()
            class:entered=move || surface.entered.get()
        >
            <div class="overlay-backdrop" on:click=close></div>
            <form class="overlay-panel form-grid" role="dialog" aria-modal="true" on:submit=on_submit>
                <h2>"New action"</h2>
                {input_field(form, &TITLE)}
                {select_field(form, "Type", ACTION_TYPES, |f| f.kind.as_str(), |f, v| f.kind = v)}
                {select_field(form, "State", ACTION_STATES, |f| f.state.as_str(), |f, v| f.state = v)}
                {select_field(form, "Platform", PLATFORMS, |f| f.target_platform.as_str(), |f, v| f.target_platform = v)}
                {DETAIL_INPUTS.iter().map(|field| input_field(form, field)).collect_view()}
                <div class="form-actions">
                    <button type="button" class="btn btn-secondary" on:click=close>"Cancel"</button>
                    <button type="submit" class="btn btn-primary" prop:disabled=move || surface.busy.get()>
                        "Create"
                    </button>
                </div>
            </form>
        </div>
    }
}
