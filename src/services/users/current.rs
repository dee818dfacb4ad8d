use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::middlewares::AuthenticateUser;
use crate::models::MessageResponse;
use crate::models::users::responses::UserResponse;

pub async fn get_current_user(
    _service: &UserService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 中间件保证这里有用户；缺失视为认证失败而非内部错误
    match AuthenticateUser::current_user(request) {
        Some(user) => Ok(HttpResponse::Ok().json(UserResponse::from_user(user))),
        None => Ok(HttpResponse::Unauthorized().json(MessageResponse::new("Access Denied"))),
    }
}
