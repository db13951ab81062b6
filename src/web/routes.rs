use actix_files::Files;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use robottrader::routing::Route;

use crate::web::state::AppState;

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Serves `index.html` so the client router can take over. Paths no page
/// answers to still get the shell, but with a 404 status.
pub async fn spa_fallback(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> impl Responder {
    let route = Route::parse(req.path(), req.query_string());
    let status = if route.is_known() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(state.index_html.clone())
}

pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.service(health)
        .service(
            Files::new("/pkg", state.site_root.join("pkg")).prefer_utf8(true),
        )
        .service(
            Files::new("/assets", state.site_root.join("assets"))
                .prefer_utf8(true),
        );
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use actix_web::web::Bytes;
    use actix_web::{App, test};

    use super::*;

    fn state() -> AppState {
        AppState {
            site_root: PathBuf::from("./dist"),
            index_html: Bytes::from_static(b"<html><body></body></html>"),
        }
    }

    #[actix_web::test]
    async fn test_spa_fallback_status() {
        let state = state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(|cfg| configure(cfg, &state))
                .default_service(web::to(spa_fallback)),
        )
        .await;

        for (path, status) in [
            ("/", StatusCode::OK),
            ("/dashboard", StatusCode::OK),
            ("/auth?mode=signup", StatusCode::OK),
            ("/learn/unknown-lesson", StatusCode::OK),
            ("/wp-admin", StatusCode::NOT_FOUND),
        ] {
            let req = test::TestRequest::get().uri(path).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), status, "{}", path);
        }
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().service(health)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value =
            test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
    }
}
