use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::requests::CreateUserRequest;
use crate::services::UserService;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP处理程序
pub async fn get_current_user(req: HttpRequest) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_current_user(&req).await
}

pub async fn create_user(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_user(user_data.into_inner(), &req).await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users").service(
            web::resource("")
                .route(
                    web::get()
                        .to(get_current_user)
                        // 每个请求从 Basic 头重新认证
                        .wrap(middlewares::AuthenticateUser),
                )
                .route(web::post().to(create_user)),
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use base64::{Engine as _, engine::general_purpose};
    use std::sync::Arc;

    use crate::models::users::requests::NewUser;
    use crate::storage::{Storage, memory::MemoryStorage};
    use crate::utils::password::hash_password;

    fn test_storage() -> Arc<dyn Storage> {
        Arc::new(MemoryStorage::new())
    }

    async fn seed_user(storage: &Arc<dyn Storage>, email: &str, password: &str) {
        let password_hash = hash_password(password).expect("hashing failed");
        storage
            .create_user(NewUser {
                first_name: "Joe".to_string(),
                last_name: "Smith".to_string(),
                email_address: email.to_string(),
                password_hash,
            })
            .await
            .expect("seeding user failed");
    }

    fn basic_auth(email: &str, password: &str) -> (&'static str, String) {
        (
            "Authorization",
            format!(
                "Basic {}",
                general_purpose::STANDARD.encode(format!("{email}:{password}"))
            ),
        )
    }

    #[actix_web::test]
    async fn test_create_user_returns_201_location_and_empty_body() {
        let storage = test_storage();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(configure_user_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({
                "firstName": "Joe",
                "lastName": "Smith",
                "emailAddress": "joe@x.com",
                "password": "secret1"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            resp.headers()
                .get("Location")
                .and_then(|v| v.to_str().ok()),
            Some("/")
        );
        let body = test::read_body(resp).await;
        assert!(body.is_empty());

        // 密码只以哈希形式存储
        let stored = storage
            .get_user_by_email("joe@x.com")
            .await
            .expect("lookup failed")
            .expect("user not persisted");
        assert_ne!(stored.password_hash, "secret1");
    }

    #[actix_web::test]
    async fn test_create_user_missing_fields_returns_400_with_messages() {
        let storage = test_storage();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_user_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({ "firstName": "Joe" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["errors"],
            serde_json::json!([
                "A last name is required",
                "An email address is required",
                "A password is required",
            ])
        );
    }

    #[actix_web::test]
    async fn test_create_user_duplicate_email_returns_400_and_persists_nothing() {
        let storage = test_storage();
        seed_user(&storage, "joe@x.com", "secret1").await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(configure_user_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({
                "firstName": "Other",
                "lastName": "Person",
                "emailAddress": "joe@x.com",
                "password": "secret2"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["errors"],
            serde_json::json!(["A user has already used this email address"])
        );

        let stored = storage
            .get_user_by_email("joe@x.com")
            .await
            .expect("lookup failed")
            .expect("seed user missing");
        assert_eq!(stored.first_name, "Joe");
    }

    #[actix_web::test]
    async fn test_get_current_user_without_credentials_returns_401() {
        let storage = test_storage();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_user_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Access Denied");
    }

    #[actix_web::test]
    async fn test_get_current_user_with_wrong_password_returns_401() {
        let storage = test_storage();
        seed_user(&storage, "joe@x.com", "secret1").await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_user_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/users")
            .insert_header(basic_auth("joe@x.com", "wrong"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_get_current_user_returns_public_fields_only() {
        let storage = test_storage();
        seed_user(&storage, "joe@x.com", "secret1").await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_user_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/users")
            .insert_header(basic_auth("joe@x.com", "secret1"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({
                "firstName": "Joe",
                "lastName": "Smith",
                "emailAddress": "joe@x.com"
            })
        );
    }
}
