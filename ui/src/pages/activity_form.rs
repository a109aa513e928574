use std::rc::Rc;

use jiff::civil;
use payloads::{ActivityId, Category};
use ui_state::{
    EditorAction, EditorState, SubmitRequest, activity_validator, draft,
    exit_destination, plan_submission,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{destination_route, get_api_client, hooks::use_push_route};

/// Reducer wrapper so editor actions are always applied to the latest
/// state, including dispatches from async completions.
struct Editor(EditorState);

impl Reducible for Editor {
    type Action = EditorAction;

    fn reduce(self: Rc<Self>, action: EditorAction) -> Rc<Self> {
        Rc::new(Editor(self.0.apply(action)))
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Present when editing an existing activity; absent when creating.
    #[prop_or_default]
    pub id: Option<ActivityId>,
}

#[function_component]
pub fn ActivityFormPage(props: &Props) -> Html {
    let push_route = use_push_route();
    let editor = use_reducer(|| Editor(EditorState::default()));

    // Hydrate the draft when editing. The loading flag clears on both
    // outcomes; a failed load leaves the empty draft in place.
    {
        let editor = editor.clone();
        use_effect_with(props.id, move |id| {
            if let Some(id) = *id {
                editor.dispatch(EditorAction::LoadStarted);
                yew::platform::spawn_local(async move {
                    let api_client = get_api_client();
                    let loaded = match api_client.get_activity(&id).await {
                        Ok(activity) => Some(activity),
                        Err(e) => {
                            tracing::warn!(
                                "failed to load activity {id}: {e}"
                            );
                            None
                        }
                    };
                    editor.dispatch(EditorAction::LoadFinished(loaded));
                });
            }
        });
    }

    let state = &editor.0;
    let errors = activity_validator().validate(&state.draft.field_values());
    let show_errors = !state.is_pristine();

    let on_title_change = {
        let editor = editor.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut draft = editor.0.draft.clone();
            draft.title = input.value();
            editor.dispatch(EditorAction::Edited(draft));
        })
    };

    let on_description_change = {
        let editor = editor.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut draft = editor.0.draft.clone();
            draft.description = input.value();
            editor.dispatch(EditorAction::Edited(draft));
        })
    };

    let on_category_change = {
        let editor = editor.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut draft = editor.0.draft.clone();
            draft.category = Category::parse(&select.value());
            editor.dispatch(EditorAction::Edited(draft));
        })
    };

    let on_date_change = {
        let editor = editor.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut draft = editor.0.draft.clone();
            draft.date =
                civil::Date::strptime("%Y-%m-%d", &input.value()).ok();
            editor.dispatch(EditorAction::Edited(draft));
        })
    };

    let on_time_change = {
        let editor = editor.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut draft = editor.0.draft.clone();
            draft.time = civil::Time::strptime("%H:%M", &input.value()).ok();
            editor.dispatch(EditorAction::Edited(draft));
        })
    };

    let on_city_change = {
        let editor = editor.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut draft = editor.0.draft.clone();
            draft.city = input.value();
            editor.dispatch(EditorAction::Edited(draft));
        })
    };

    let on_venue_change = {
        let editor = editor.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut draft = editor.0.draft.clone();
            draft.venue = input.value();
            editor.dispatch(EditorAction::Edited(draft));
        })
    };

    let on_submit = {
        let editor = editor.clone();
        let push_route = push_route.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let state = &editor.0;
            let errors =
                activity_validator().validate(&state.draft.field_values());
            if !state.can_submit(&errors) {
                return;
            }

            // A draft without an identity gets a freshly generated one and
            // becomes a create; otherwise this is an update.
            let plan = match plan_submission(&state.draft, ActivityId::new())
            {
                Ok(plan) => plan,
                Err(e) => {
                    tracing::warn!("draft not submittable: {e}");
                    return;
                }
            };

            let editor = editor.clone();
            let push_route = push_route.clone();
            yew::platform::spawn_local(async move {
                editor.dispatch(EditorAction::SubmitStarted);

                let api_client = get_api_client();
                let result = match &plan.request {
                    SubmitRequest::Create(payload) => {
                        api_client.create_activity(payload).await
                    }
                    SubmitRequest::Update(payload) => {
                        api_client.update_activity(payload).await
                    }
                };
                if let Err(e) = result {
                    // Navigation below proceeds regardless; the failure is
                    // only logged.
                    tracing::error!("activity submission failed: {e}");
                }

                editor.dispatch(EditorAction::SubmitSettled);
                push_route.emit(destination_route(plan.destination));
            });
        })
    };

    let on_cancel = {
        let push_route = push_route.clone();
        let id = state.draft.id;
        Callback::from(move |_| {
            push_route.emit(destination_route(exit_destination(id)));
        })
    };

    if state.is_loading {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading activity..."}
                </p>
            </div>
        };
    }

    let field_error = |field: &str| -> Html {
        match errors.get(field) {
            Some(message) if show_errors => html! {
                <p class="mt-1 text-sm text-red-600 dark:text-red-400">
                    {message}
                </p>
            },
            _ => html! {},
        }
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                       rounded-md shadow-sm bg-white dark:bg-neutral-700
                       text-neutral-900 dark:text-neutral-100
                       focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500
                       dark:focus:ring-neutral-400 dark:focus:border-neutral-400";
    let label_class = "block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2";

    html! {
        <div class="max-w-2xl mx-auto bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-6">
                {if props.id.is_some() {
                    "Edit Activity"
                } else {
                    "Create Activity"
                }}
            </h1>

            <form onsubmit={on_submit} class="space-y-6">
                <div>
                    <label for="title" class={label_class}>{"Title"}</label>
                    <input
                        type="text"
                        id="title"
                        value={state.draft.title.clone()}
                        onchange={on_title_change}
                        placeholder="Title"
                        class={input_class}
                    />
                    {field_error(draft::TITLE)}
                </div>

                <div>
                    <label for="description" class={label_class}>
                        {"Description"}
                    </label>
                    <textarea
                        id="description"
                        rows="3"
                        value={state.draft.description.clone()}
                        onchange={on_description_change}
                        placeholder="Description"
                        class={input_class}
                    />
                    {field_error(draft::DESCRIPTION)}
                </div>

                <div>
                    <label for="category" class={label_class}>{"Category"}</label>
                    <select
                        id="category"
                        onchange={on_category_change}
                        class={input_class}
                    >
                        <option
                            value=""
                            selected={state.draft.category.is_none()}
                        >
                            {"Category"}
                        </option>
                        {Category::ALL.iter().map(|category| html! {
                            <option
                                value={category.as_str()}
                                selected={state.draft.category == Some(*category)}
                            >
                                {category.label()}
                            </option>
                        }).collect::<Html>()}
                    </select>
                    {field_error(draft::CATEGORY)}
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label for="date" class={label_class}>{"Date"}</label>
                        <input
                            type="date"
                            id="date"
                            value={state.draft.date
                                .map(|d| d.strftime("%Y-%m-%d").to_string())
                                .unwrap_or_default()}
                            onchange={on_date_change}
                            class={input_class}
                        />
                        {field_error(draft::DATE)}
                    </div>
                    <div>
                        <label for="time" class={label_class}>{"Time"}</label>
                        <input
                            type="time"
                            id="time"
                            value={state.draft.time
                                .map(|t| t.strftime("%H:%M").to_string())
                                .unwrap_or_default()}
                            onchange={on_time_change}
                            class={input_class}
                        />
                        {field_error(draft::TIME)}
                    </div>
                </div>

                <div>
                    <label for="city" class={label_class}>{"City"}</label>
                    <input
                        type="text"
                        id="city"
                        value={state.draft.city.clone()}
                        onchange={on_city_change}
                        placeholder="City"
                        class={input_class}
                    />
                    {field_error(draft::CITY)}
                </div>

                <div>
                    <label for="venue" class={label_class}>{"Venue"}</label>
                    <input
                        type="text"
                        id="venue"
                        value={state.draft.venue.clone()}
                        onchange={on_venue_change}
                        placeholder="Venue"
                        class={input_class}
                    />
                    {field_error(draft::VENUE)}
                </div>

                <div class="flex justify-end space-x-3">
                    <button
                        type="button"
                        onclick={on_cancel}
                        disabled={state.is_loading}
                        class="py-2 px-4 border border-neutral-300 dark:border-neutral-600
                               rounded-md shadow-sm text-sm font-medium
                               text-neutral-700 dark:text-neutral-300
                               bg-white dark:bg-neutral-700
                               hover:bg-neutral-50 dark:hover:bg-neutral-600
                               disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        disabled={!state.can_submit(&errors)}
                        class="py-2 px-4 border border-transparent rounded-md shadow-sm
                               text-sm font-medium text-white
                               bg-neutral-900 hover:bg-neutral-800
                               dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                               disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {if state.is_submitting {
                            "Submitting..."
                        } else {
                            "Submit"
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
