#!/usr/bin/env cargo
//! Development Server Demo
//!
//! Starts the full application on localhost with debug logging. Run with:
//!
//! ```
//! GEMINI_API_KEY=... cargo run --example dev_server
//! ```
//!
//! Without `GEMINI_API_KEY` the server still starts; the analysis endpoints
//! then fail with the remote API's authentication error.

use actix_web::HttpServer;
use analytics_ai::{AppConfig, AppState, LogFormat, create_app, init_tracing};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("🚀 Analytics AI Development Server");
    println!("==================================\n");

    if std::env::var_os("RUST_LOG").is_none() {
        // SAFETY: set before any other thread is started.
        unsafe { std::env::set_var("RUST_LOG", "debug") };
    }
    init_tracing(LogFormat::Text).map_err(std::io::Error::other)?;

    let mut config = AppConfig::from_env().unwrap_or_else(|e| {
        println!("⚠️  {e}; using a placeholder key\n");
        AppConfig::with_api_key("dev-placeholder-key")
    });
    config.host = "127.0.0.1".to_string();

    println!("🔧 Development Configuration:");
    println!("  - Logging: DEBUG level enabled");
    println!("  - Model endpoint: {}", config.gemini_endpoint);
    println!("  - Upload directory: {}\n", config.upload_dir.display());

    println!("📋 Available endpoints:");
    println!("  GET  /health               - Health check");
    println!("  GET  /version              - Version information");
    println!("  GET  /metrics              - Prometheus metrics");
    println!("  GET  /api/spec/v2          - OpenAPI spec");
    println!("  POST /analyze/logs         - Log analysis");
    println!("  POST /analyze/performance  - Performance analysis");
    println!("  POST /convert/to-csv       - CSV export");
    println!("  POST /upload               - Upload a JSON log file\n");

    let (host, port) = config.bind_address();
    println!("🌐 Starting server at http://{host}:{port}");
    println!("   Press Ctrl+C to stop\n");

    let state = AppState::new(config).map_err(std::io::Error::other)?;
    HttpServer::new(move || create_app(state.clone()))
        .bind((host, port))?
        .run()
        .await
}
