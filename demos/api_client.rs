#!/usr/bin/env cargo
//! API Client Demo
//!
//! Sends a small batch of log entries to a running Analytics AI server.
//! Run with:
//!
//! ```
//! cargo run --example api_client
//! ```

use reqwest::Client;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📡 Analytics AI Client Demo");
    println!("===========================\n");

    let client = Client::new();
    let base_url = std::env::var("ANALYTICS_URL").unwrap_or_else(|_| "http://localhost:8081".to_string());

    println!("🏥 Testing health endpoint...");
    match client.get(format!("{base_url}/health")).send().await {
        Ok(response) => println!("✅ Health check: {}\n", response.text().await?),
        Err(e) => {
            println!("❌ Health check failed: {e}");
            println!("💡 Make sure the server is running: cargo run --example dev_server\n");
            return Err(e.into());
        }
    }

    let logs = sample_logs();

    println!("📊 Requesting log analysis...");
    match post_json(&client, &format!("{base_url}/analyze/logs"), &logs).await {
        Ok(json) => {
            let analysis = &json["analysis"];
            println!("✅ Popular pages: {}", analysis["popular_pages"]);
            if let Some(issues) = analysis["potential_issues"].as_array() {
                for issue in issues {
                    println!(
                        "   [{}] {}: {}",
                        issue["severity"].as_str().unwrap_or("?"),
                        issue["type"].as_str().unwrap_or("?"),
                        issue["description"].as_str().unwrap_or("")
                    );
                }
            }
            println!();
        }
        Err(e) => println!("❌ Log analysis failed: {e}\n"),
    }

    println!("⏱️  Requesting performance analysis...");
    match post_json(&client, &format!("{base_url}/analyze/performance"), &logs).await {
        Ok(json) => {
            if let Some(recommendations) = json["analysis"]["recommendations"].as_array() {
                for recommendation in recommendations {
                    println!("   • {}", recommendation.as_str().unwrap_or(""));
                }
            }
            println!();
        }
        Err(e) => println!("❌ Performance analysis failed: {e}\n"),
    }

    println!("📄 Converting to CSV...");
    let response = client
        .post(format!("{base_url}/convert/to-csv"))
        .json(&logs)
        .send()
        .await?;
    println!("{}", response.text().await?);

    println!("🎯 Demo complete!");
    Ok(())
}

async fn post_json(client: &Client, url: &str, body: &Value) -> Result<Value, Box<dyn std::error::Error>> {
    let response = client.post(url).json(body).send().await?;
    let status = response.status();
    let json: Value = response.json().await?;

    if !status.is_success() {
        return Err(format!("HTTP {status}: {}", json["error"]).into());
    }

    Ok(json)
}

fn sample_logs() -> Value {
    json!([
        {"timestamp": "2024-01-01T10:00:00Z", "level": "info", "message": "home served", "path": "/home", "method": "GET", "duration": 120, "status": 200},
        {"timestamp": "2024-01-01T10:00:05Z", "level": "info", "message": "home served", "path": "/home", "method": "GET", "duration": 95, "status": 200},
        {"timestamp": "2024-01-01T10:00:09Z", "level": "error", "message": "payment gateway timeout", "path": "/api/checkout", "method": "POST", "duration": 4800, "status": 504},
        {"timestamp": "2024-01-01T10:00:12Z", "level": "warning", "message": "slow query", "path": "/api/search", "method": "GET", "duration": 1800, "status": 200},
        {"timestamp": "2024-01-01T10:00:20Z", "level": "info", "message": "checkout ok", "path": "/api/checkout", "method": "POST", "duration": 900, "status": 201}
    ])
}
