pub mod courses;
pub mod users;

pub use courses::CourseService;
pub use users::UserService;
