pub mod use_activities;
pub mod use_activity;
pub mod use_fetch;
pub mod use_profile;
pub mod use_push_route;

pub use use_activities::use_activities;
pub use use_activity::use_activity;
pub use use_fetch::{FetchHookReturn, FetchState, use_fetch};
pub use use_profile::use_profile;
pub use use_push_route::use_push_route;
