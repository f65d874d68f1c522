//! OpenAPI specification generation and app factory.

use crate::{
    config::AppConfig,
    error::AnalyticsError,
    handlers::{
        analyze_logs, analyze_performance, convert_to_csv, get_metrics, health, upload, version,
    },
    middleware::{MetricsMiddleware, RequestIdMiddleware},
    services::{AnalyticsService, AppMetrics, GeminiClient, UploadStore},
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};
use tracing::info;

/// Errors raised while assembling shared application state
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to create metrics registry: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Shared state handed to every worker's app instance
#[derive(Clone)]
pub struct AppState {
    pub config: web::Data<AppConfig>,
    pub service: web::Data<AnalyticsService>,
    pub metrics: web::Data<AppMetrics>,
    pub uploads: web::Data<UploadStore>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, StartupError> {
        let metrics = AppMetrics::new()?;
        let client = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_endpoint.clone())?;
        let service = AnalyticsService::new(client).with_metrics(metrics.clone());
        let uploads = UploadStore::new(config.upload_dir.clone());

        info!(
            endpoint = %config.gemini_endpoint,
            upload_dir = %config.upload_dir.display(),
            metrics_enabled = config.metrics_enabled,
            "Application state initialized"
        );

        Ok(Self {
            config: web::Data::new(config),
            service: web::Data::new(service),
            metrics: web::Data::new(metrics),
            uploads: web::Data::new(uploads),
        })
    }
}

/// Creates the OpenAPI specification for the service
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Analytics AI".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Aggregates structured log entries per request path and asks a generative-text \
                model to interpret them.\n\n\
                - `POST /analyze/logs`: popular pages, slow pages, potential issues, insights\n\
                - `POST /analyze/performance`: slow endpoints, patterns, resource issues, recommendations\n\
                - `POST /convert/to-csv`: fixed-column CSV export of the entries\n\
                - `POST /upload`: multipart field `file` holding a JSON array of entries, analysed like `/analyze/logs`\n\n\
                Every error response has the shape `{\"error\": \"<message>\"}`. Malformed input yields 400; \
                failures reaching or decoding the model reply yield 500."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates the application with routes, middleware and shared state
///
/// Used by `main` for every worker and by the integration tests.
pub fn create_app(
    state: AppState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = actix_web::web::JsonConfig::default()
        .limit(state.config.max_payload_bytes)
        .error_handler(|err, _req| AnalyticsError::InputValidation(err.to_string()).into());

    App::new()
        .wrap(MetricsMiddleware)
        .wrap(RequestIdMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(json_config)
        .app_data(state.config)
        .app_data(state.service)
        .app_data(state.metrics)
        .app_data(state.uploads)
        .service(web::resource("/health").route(web::get().to(health)))
        .service(web::resource("/version").route(web::get().to(version)))
        .service(web::resource("/metrics").route(web::get().to(get_metrics)))
        .service(web::resource("/analyze/logs").route(web::post().to(analyze_logs)))
        .service(web::resource("/analyze/performance").route(web::post().to(analyze_performance)))
        .service(web::resource("/convert/to-csv").route(web::post().to(convert_to_csv)))
        .with_json_spec_at("/api/spec/v2")
        .build()
        // Registered after build(): multipart bodies have no OpenAPI schema.
        .route("/upload", actix_web::web::post().to(upload))
}
