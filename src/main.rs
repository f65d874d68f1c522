use actix_web::HttpServer;
use analytics_ai::{AppConfig, AppState, create_app, init_tracing};
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format).map_err(std::io::Error::other)?;

    let (host, port) = config.bind_address();
    let state = AppState::new(config).map_err(std::io::Error::other)?;

    info!(%host, port, "Analytics AI server starting");

    HttpServer::new(move || create_app(state.clone()))
        .bind((host, port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use analytics_ai::{health, version};

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().route("/health", web::get().to(health))).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        assert!(body_str.contains("healthy"));
    }

    #[actix_web::test]
    async fn test_version() {
        let app = test::init_service(App::new().route("/version", web::get().to(version))).await;

        let req = test::TestRequest::get().uri("/version").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        assert!(body_str.contains("version"));
        assert!(body_str.contains("commit"));
        assert!(body_str.contains("build_time"));
    }
}
