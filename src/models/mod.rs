pub mod common;
pub mod courses;
pub mod users;

pub use common::response::{ErrorDetails, MessageResponse, ValidationErrors};

// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
