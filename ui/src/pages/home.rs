use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn HomePage() -> Html {
    html! {
        <div class="text-center py-24">
            <h1 class="text-4xl font-bold text-neutral-900 dark:text-white">
                {"Gatherly"}
            </h1>
            <p class="mt-4 text-neutral-600 dark:text-neutral-300">
                {"Find and host activities near you."}
            </p>
            <Link<Route> to={Route::Activities}
                classes="mt-8 inline-block px-4 py-2 rounded-md text-sm font-medium
                         text-white bg-neutral-900 hover:bg-neutral-800
                         dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200">
                {"Browse Activities"}
            </Link<Route>>
        </div>
    }
}
