use payloads::{APIClient, ActivityId};
use ui_state::Destination;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod hooks;
mod logs;
pub mod pages;
pub mod utils;

use components::layout::Header;

/// API client pointed at `BACKEND_URL` (baked in at build time), or the
/// page's own origin when none was configured.
pub fn get_api_client() -> APIClient {
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/activities")]
    Activities,
    #[at("/activities/new")]
    NewActivity,
    #[at("/activities/:id")]
    ActivityDetail { id: ActivityId },
    #[at("/activities/:id/edit")]
    EditActivity { id: ActivityId },
    #[at("/profile/:username")]
    Profile { username: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Map a state-layer exit destination onto a router target.
pub fn destination_route(destination: Destination) -> Route {
    match destination {
        Destination::ActivityList => Route::Activities,
        Destination::ActivityDetail(id) => Route::ActivityDetail { id },
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
                <Header />
                <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <pages::HomePage /> },
        Route::Activities => html! { <pages::ActivitiesPage /> },
        Route::NewActivity => html! { <pages::ActivityFormPage /> },
        Route::ActivityDetail { id } => html! {
            <pages::ActivityDetailPage {id} />
        },
        Route::EditActivity { id } => html! {
            <pages::ActivityFormPage {id} />
        },
        Route::Profile { username } => html! {
            <pages::ProfilePage {username} />
        },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}
