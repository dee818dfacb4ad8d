/*!
 * HTTP Basic 认证中间件
 *
 * 每个请求独立地从 `Authorization: Basic <base64>` 头完成认证，
 * 不签发任何令牌或会话。凭据中的 identifier 是用户邮箱。
 *
 * ## 认证流程
 *
 * 1. 客户端在请求头中包含 `Authorization: Basic base64(email:password)`
 * 2. 中间件解码凭据，按邮箱查找用户
 * 3. 用存储的哈希校验密码；通过则将用户写入请求扩展，继续处理请求
 * 4. 头缺失、格式错误、用户不存在或密码不符，一律返回 401，
 *    响应体只有拒绝信息，具体原因仅记录日志
 *
 * ## 在处理程序中提取用户
 *
 * ```rust,ignore
 * async fn handler(req: HttpRequest) -> Result<HttpResponse> {
 *     if let Some(user) = AuthenticateUser::current_user(&req) {
 *         return Ok(HttpResponse::Ok().json(user.email_address));
 *     }
 *     Ok(HttpResponse::Unauthorized().finish())
 * }
 * ```
 */

use crate::models::MessageResponse;
use crate::models::users::entities::User;
use crate::storage::Storage;
use crate::utils::basic_auth::decode_credentials;
use crate::utils::password::verify_password;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

const AUTHORIZATION_HEADER: &str = "Authorization";
const ACCESS_DENIED: &str = "Access Denied";

#[derive(Clone)]
pub struct AuthenticateUser;

// 辅助函数：创建错误响应
fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(MessageResponse::new(message)),
    }
}

// 辅助函数：解码凭据并核对用户
async fn resolve_basic_user(req: &ServiceRequest) -> Result<User, String> {
    let header = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let credentials = decode_credentials(header).map_err(|err| err.to_string())?;

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    let user = storage
        .get_user_by_email(&credentials.email_address)
        .await
        .map_err(|_| "Failed to retrieve user from storage".to_string())?
        .ok_or_else(|| format!("User not found: {}", credentials.email_address))?;

    if !verify_password(&credentials.password, &user.password_hash) {
        return Err(format!(
            "Password mismatch for user: {}",
            credentials.email_address
        ));
    }

    Ok(user)
}

impl<S, B> Transform<S, ServiceRequest> for AuthenticateUser
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticateUserMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateUserMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthenticateUserMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticateUserMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            // 校验 Basic 凭据
            match resolve_basic_user(&req).await {
                Ok(user) => {
                    debug!("Basic authentication successful for ID: {}", user.id);
                    // 将用户写入请求扩展，供后续处理程序使用
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "Basic authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(StatusCode::UNAUTHORIZED, ACCESS_DENIED)
                            .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取用户信息
impl AuthenticateUser {
    /// 从请求扩展中提取当前认证用户
    /// 此函数应该在应用了 AuthenticateUser 中间件的路由处理程序中使用
    pub fn current_user(req: &actix_web::HttpRequest) -> Option<User> {
        req.extensions().get::<User>().cloned()
    }

    /// 从请求扩展中提取当前认证用户ID
    pub fn current_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<User>().map(|user| user.id)
    }
}
