use serde::Serialize;

use super::entities::Course;
use crate::models::users::entities::User;

// 课程创建者公开信息
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCreator {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl CourseCreator {
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email_address: user.email_address.clone(),
        }
    }
}

// 课程响应（含创建者，不含审计时间戳）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i64,
    pub course_creator: CourseCreator,
}

impl CourseResponse {
    pub fn from_parts(course: Course, creator: &User) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            estimated_time: course.estimated_time,
            materials_needed: course.materials_needed,
            user_id: course.user_id,
            course_creator: CourseCreator::from_user(creator),
        }
    }
}
