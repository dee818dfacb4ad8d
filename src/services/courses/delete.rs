use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use super::update::check_course_owner;
use crate::middlewares::AuthenticateUser;
use crate::models::MessageResponse;

pub async fn delete_course(
    service: &CourseService,
    course_id: i64,
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
    if let Err(resp) = check_course_owner(uid, &course, "delete") {
        return Ok(resp);
    }

    if storage.delete_course(course_id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(HttpResponse::NotFound().json(MessageResponse::new("Course Not Found")))
    }
}
