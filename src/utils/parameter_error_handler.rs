//! 请求参数解析错误处理器
//!
//! JSON 请求体或查询字符串解析失败时，返回与全局错误处理一致的响应体。

use actix_web::{HttpRequest, HttpResponse, error};

use crate::models::ErrorDetails;

pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ErrorDetails::new(detail));
    error::InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ErrorDetails::new(detail));
    error::InternalError::from_response(err, response).into()
}
