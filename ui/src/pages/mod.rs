pub mod activities;
pub mod activity_detail;
pub mod activity_form;
pub mod home;
pub mod not_found;
pub mod profile;

pub use activities::ActivitiesPage;
pub use activity_detail::ActivityDetailPage;
pub use activity_form::ActivityFormPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
