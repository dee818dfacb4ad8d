use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::middlewares::AuthenticateUser;
use crate::models::courses::{entities::Course, requests::UpdateCourseRequest};
use crate::models::{MessageResponse, ValidationErrors};
use crate::utils::validate::validate_course_update;

pub async fn update_course(
    service: &CourseService,
    course_id: i64,
    update_data: UpdateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let uid = match AuthenticateUser::current_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(MessageResponse::new("Access Denied")));
        }
    };

    // 查询课程信息
    let course = match storage.get_course_by_id(course_id).await? {
        Some(course) => course,
        None => {
            return Ok(HttpResponse::NotFound().json(MessageResponse::new("Course Not Found")));
        }
    };

    // 权限校验
    if let Err(resp) = check_course_owner(uid, &course, "update") {
        return Ok(resp);
    }

    // 字段校验
    let update = match validate_course_update(update_data) {
        Ok(update) => update,
        Err(errors) => {
            return Ok(HttpResponse::BadRequest().json(ValidationErrors::new(errors)));
        }
    };

    match storage.update_course(course_id, update).await? {
        Some(_) => Ok(HttpResponse::NoContent().finish()),
        None => Ok(HttpResponse::NotFound().json(MessageResponse::new("Course Not Found"))),
    }
}

/// 权限校验辅助函数：只有课程所有者可以变更课程
pub(super) fn check_course_owner(
    uid: i64,
    course: &Course,
    action: &str,
) -> Result<(), HttpResponse> {
    if course.user_id != uid {
        return Err(HttpResponse::Forbidden().json(MessageResponse::new(format!(
            "You do not have permission to {action} this course"
        ))));
    }
    Ok(())
}
