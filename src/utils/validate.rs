//! 请求体约束校验
//!
//! 每个违反的约束产生一条固定文案，按字段顺序收集。
//! 缺失字段与空字段使用不同的文案。

use crate::models::courses::requests::{
    CourseUpdate, CreateCourseRequest, NewCourse, UpdateCourseRequest,
};
use crate::models::users::requests::CreateUserRequest;

pub const EMAIL_TAKEN_MSG: &str = "A user has already used this email address";
pub const COURSE_OWNER_MISSING_MSG: &str = "Course owner does not exist";

/// 校验通过的用户字段（密码仍为明文，由调用方哈希）
#[derive(Debug, Clone)]
pub struct ValidatedUser {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
}

fn check_required(
    value: Option<String>,
    missing: &'static str,
    empty: &'static str,
    errors: &mut Vec<String>,
) -> Option<String> {
    match value {
        None => {
            errors.push(missing.to_string());
            None
        }
        Some(s) if s.trim().is_empty() => {
            errors.push(empty.to_string());
            None
        }
        Some(s) => Some(s),
    }
}

/// 校验用户创建请求
pub fn validate_new_user(req: CreateUserRequest) -> Result<ValidatedUser, Vec<String>> {
    let mut errors = Vec::new();

    let first_name = check_required(
        req.first_name,
        "A first name is required",
        "Please provide a first name",
        &mut errors,
    );
    let last_name = check_required(
        req.last_name,
        "A last name is required",
        "Please provide a last name",
        &mut errors,
    );
    let email_address = check_required(
        req.email_address,
        "An email address is required",
        "Please provide an email address",
        &mut errors,
    );
    let password = check_required(
        req.password,
        "A password is required",
        "Please provide a password",
        &mut errors,
    );

    match (first_name, last_name, email_address, password) {
        (Some(first_name), Some(last_name), Some(email_address), Some(password)) => {
            Ok(ValidatedUser {
                first_name,
                last_name,
                email_address,
                password,
            })
        }
        _ => Err(errors),
    }
}

/// 校验课程创建请求
pub fn validate_new_course(req: CreateCourseRequest) -> Result<NewCourse, Vec<String>> {
    let mut errors = Vec::new();

    let title = check_required(
        req.title,
        "A title is required",
        "Please provide a title",
        &mut errors,
    );
    let description = check_required(
        req.description,
        "A description is required",
        "Please provide a description",
        &mut errors,
    );

    let user_id = req.user_id;
    if user_id.is_none() {
        errors.push("A user id is required".to_string());
    }

    match (title, description, user_id) {
        (Some(title), Some(description), Some(user_id)) => Ok(NewCourse {
            title,
            description,
            estimated_time: req.estimated_time,
            materials_needed: req.materials_needed,
            user_id,
        }),
        _ => Err(errors),
    }
}

/// 校验课程更新请求
pub fn validate_course_update(req: UpdateCourseRequest) -> Result<CourseUpdate, Vec<String>> {
    let mut errors = Vec::new();

    let title = check_required(
        req.title,
        "A title is required",
        "Please provide a title",
        &mut errors,
    );
    let description = check_required(
        req.description,
        "A description is required",
        "Please provide a description",
        &mut errors,
    );

    match (title, description) {
        (Some(title), Some(description)) => Ok(CourseUpdate {
            title,
            description,
            estimated_time: req.estimated_time,
            materials_needed: req.materials_needed,
        }),
        _ => Err(errors),
    }
}
