use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::MessageResponse;
use crate::models::courses::responses::CourseResponse;

pub async fn get_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_with_creator(course_id).await? {
        Some((course, creator)) => {
            Ok(HttpResponse::Ok().json(CourseResponse::from_parts(course, &creator)))
        }
        None => Ok(HttpResponse::NotFound().json(MessageResponse::new("Course Not Found"))),
    }
}
