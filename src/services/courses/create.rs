use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use tracing::error;

use super::CourseService;
use crate::models::ValidationErrors;
use crate::models::courses::requests::CreateCourseRequest;
use crate::utils::validate::{COURSE_OWNER_MISSING_MSG, validate_new_course};

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    let new_course = match validate_new_course(course_data) {
        Ok(new_course) => new_course,
        Err(errors) => {
            return Ok(HttpResponse::BadRequest().json(ValidationErrors::new(errors)));
        }
    };

    // 所属用户取自请求体，必须指向已存在的用户
    if storage.get_user_by_id(new_course.user_id).await?.is_none() {
        return Ok(HttpResponse::BadRequest().json(ValidationErrors::new(vec![
            COURSE_OWNER_MISSING_MSG.to_string(),
        ])));
    }

    match storage.create_course(new_course).await {
        Ok(course) => Ok(HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/courses/{}", course.id)))
            .finish()),
        Err(e) => {
            let msg = format!("Course creation failed: {e}");
            error!("{}", msg);
            // 外键约束冲突兜底
            if msg.contains("FOREIGN KEY constraint failed") {
                Ok(HttpResponse::BadRequest().json(ValidationErrors::new(vec![
                    COURSE_OWNER_MISSING_MSG.to_string(),
                ])))
            } else {
                Err(e.into())
            }
        }
    }
}
