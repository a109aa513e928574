use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Header() -> Html {
    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-8">
                        <Link<Route> to={Route::Home}
                            classes="text-xl font-semibold text-neutral-900 dark:text-white">
                            {"Gatherly"}
                        </Link<Route>>
                        <Link<Route> to={Route::Activities}
                            classes="text-sm font-medium text-neutral-600 hover:text-neutral-900
                                     dark:text-neutral-300 dark:hover:text-white">
                            {"Activities"}
                        </Link<Route>>
                    </div>
                    <Link<Route> to={Route::NewActivity}
                        classes="px-3 py-2 rounded-md text-sm font-medium text-white
                                 bg-neutral-900 hover:bg-neutral-800
                                 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200">
                        {"Create Activity"}
                    </Link<Route>>
                </div>
            </div>
        </header>
    }
}
