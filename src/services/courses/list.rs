use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::courses::responses::CourseResponse;

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let courses = storage.list_courses_with_creators().await?;

    let body: Vec<CourseResponse> = courses
        .into_iter()
        .map(|(course, creator)| CourseResponse::from_parts(course, &creator))
        .collect();

    Ok(HttpResponse::Ok().json(body))
}
