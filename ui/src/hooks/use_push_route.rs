use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Navigation callback that also resets the scroll position, so a pushed
/// page never opens mid-scroll.
#[hook]
pub fn use_push_route() -> Callback<Route> {
    let navigator = use_navigator().unwrap();
    Callback::from(move |route: Route| {
        navigator.push(&route);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    })
}
