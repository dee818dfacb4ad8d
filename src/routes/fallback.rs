use actix_web::{HttpResponse, web};

use crate::models::MessageResponse;

// 兜底路由：未匹配的请求统一返回 404
pub async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(MessageResponse::new("Route Not Found"))
}

// 配置路由（放在最后作为 fallback）
pub fn configure_fallback_routes(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::route().to(route_not_found));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};

    #[actix_web::test]
    async fn test_unmatched_route_returns_404() {
        let app =
            test::init_service(App::new().configure(configure_fallback_routes)).await;

        let req = test::TestRequest::get().uri("/api/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Route Not Found");
    }
}
