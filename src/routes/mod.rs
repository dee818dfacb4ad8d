pub mod courses;

pub mod fallback;

pub mod users;

pub use courses::configure_courses_routes;
pub use fallback::configure_fallback_routes;
pub use users::configure_user_routes;
