use payloads::responses;
use ui_state::{attendee_rows, going_headline};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub attendees: Vec<responses::Attendee>,
}

/// Read-only sidebar listing an activity's attendees.
#[function_component]
pub fn AttendeeList(props: &Props) -> Html {
    let api_client = get_api_client();
    let rows =
        attendee_rows(&props.attendees, |path| api_client.photo_src(path));

    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md border
                    border-neutral-200 dark:border-neutral-700 overflow-hidden">
            <div class="px-4 py-3 text-center text-sm font-medium text-white
                        bg-neutral-900 dark:bg-neutral-700">
                {going_headline(rows.len())}
            </div>
            <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
                {rows.iter().map(|row| html! {
                    <li key={row.username.clone()}
                        class="relative flex items-center gap-3 p-3">
                        {if row.is_host {
                            html! {
                                <span class="absolute top-2 right-2 px-2 py-0.5
                                             rounded text-xs font-medium
                                             bg-orange-100 text-orange-800
                                             dark:bg-orange-900/30 dark:text-orange-300">
                                    {"Host"}
                                </span>
                            }
                        } else {
                            html! {}
                        }}
                        <img
                            src={row.image_src.clone()}
                            alt={row.display_name.clone()}
                            class="w-12 h-12 rounded-full object-cover
                                   bg-neutral-100 dark:bg-neutral-700"
                        />
                        <div class="min-w-0">
                            <Link<Route>
                                to={Route::Profile { username: row.username.clone() }}
                                classes="font-medium text-neutral-900 dark:text-neutral-100
                                         hover:underline">
                                {&row.display_name}
                            </Link<Route>>
                            {if row.following {
                                html! {
                                    <p class="text-xs text-orange-600 dark:text-orange-400">
                                        {"Following"}
                                    </p>
                                }
                            } else {
                                html! {}
                            }}
                        </div>
                    </li>
                }).collect::<Html>()}
            </ul>
        </div>
    }
}
