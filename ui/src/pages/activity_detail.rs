use payloads::ActivityId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    Route,
    components::AttendeeList,
    hooks::use_activity,
    utils::time::format_timestamp,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: ActivityId,
}

#[function_component]
pub fn ActivityDetailPage(props: &Props) -> Html {
    let activity_hook = use_activity(props.id);

    activity_hook.render("activity", |activity, _, _| {
        html! {
            <div class="max-w-4xl mx-auto grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 bg-white dark:bg-neutral-800 rounded-lg
                            shadow-md border border-neutral-200 dark:border-neutral-700 p-6">
                    <div class="flex items-start justify-between gap-4">
                        <div>
                            <span class="px-2 py-0.5 rounded text-xs font-medium
                                         bg-neutral-100 text-neutral-700
                                         dark:bg-neutral-700 dark:text-neutral-300">
                                {activity.category.label()}
                            </span>
                            <h1 class="mt-2 text-2xl font-bold text-neutral-900
                                       dark:text-neutral-100">
                                {&activity.title}
                            </h1>
                        </div>
                        <Link<Route>
                            to={Route::EditActivity { id: activity.id }}
                            classes="px-3 py-2 rounded-md text-sm font-medium
                                     border border-neutral-300 dark:border-neutral-600
                                     text-neutral-700 dark:text-neutral-300
                                     hover:bg-neutral-50 dark:hover:bg-neutral-700">
                            {"Edit"}
                        </Link<Route>>
                    </div>

                    <p class="mt-2 text-sm text-neutral-600 dark:text-neutral-400">
                        {format_timestamp(activity.date)}
                    </p>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {format!("{}, {}", activity.venue, activity.city)}
                    </p>

                    <p class="mt-4 text-neutral-800 dark:text-neutral-200">
                        {&activity.description}
                    </p>
                </div>

                <AttendeeList attendees={activity.attendees.clone()} />
            </div>
        }
    })
}
