use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, hooks::use_activities, utils::time::format_timestamp};

#[function_component]
pub fn ActivitiesPage() -> Html {
    let activities_hook = use_activities();

    html! {
        <div class="max-w-3xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Activities"}
                </h1>
                <Link<Route> to={Route::NewActivity}
                    classes="px-3 py-2 rounded-md text-sm font-medium text-white
                             bg-neutral-900 hover:bg-neutral-800
                             dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200">
                    {"Create Activity"}
                </Link<Route>>
            </div>

            {activities_hook.render("activities", |activities, _, _| {
                if activities.is_empty() {
                    return html! {
                        <p class="text-center py-8 text-neutral-500 dark:text-neutral-400">
                            {"No activities yet. Create the first one."}
                        </p>
                    };
                }

                html! {
                    <div class="space-y-4">
                        {activities.iter().map(|activity| html! {
                            <ActivityListItem
                                key={activity.id.to_string()}
                                activity={activity.clone()}
                            />
                        }).collect::<Html>()}
                    </div>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ActivityListItemProps {
    activity: responses::Activity,
}

#[function_component]
fn ActivityListItem(props: &ActivityListItemProps) -> Html {
    let activity = &props.activity;

    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md border
                    border-neutral-200 dark:border-neutral-700 p-4">
            <div class="flex items-start justify-between gap-4">
                <div class="min-w-0">
                    <Link<Route>
                        to={Route::ActivityDetail { id: activity.id }}
                        classes="text-lg font-semibold text-neutral-900
                                 dark:text-neutral-100 hover:underline">
                        {&activity.title}
                    </Link<Route>>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {format_timestamp(activity.date)}
                    </p>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {format!("{}, {}", activity.venue, activity.city)}
                    </p>
                </div>
                <span class="px-2 py-0.5 rounded text-xs font-medium
                             bg-neutral-100 text-neutral-700
                             dark:bg-neutral-700 dark:text-neutral-300">
                    {activity.category.label()}
                </span>
            </div>
        </div>
    }
}
