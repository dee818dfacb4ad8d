//! 路径参数安全提取器
//!
//! 非法的课程 ID（非数字、非正数）与不存在的 ID 表现一致：404。

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::errors::CourseHubError;

pub struct SafeCourseIdI64(pub i64);

impl FromRequest for SafeCourseIdI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let id = req
            .match_info()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok());

        ready(match id {
            Some(id) if id > 0 => Ok(SafeCourseIdI64(id)),
            _ => Err(CourseHubError::not_found("Course Not Found").into()),
        })
    }
}
