/*
 * SPDX-FileCopyrightText: 2026 Skill Matrix Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod business_units;
pub mod resources;
pub mod skills;


use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: String,
}

pub type RequestType = reqwest::Method;

/// Error payload shape used by the API on non-2xx responses.
#[derive(Deserialize, Debug)]
struct ErrorResponse {
    detail: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
}

fn get_client(
    config: RequestConfig,
    endpoint: String,
    request_type: RequestType,
) -> reqwest::RequestBuilder {
    let client = reqwest::Client::new();
    client
        .request(
            request_type,
            format!("{}/api/{}", config.server_url, endpoint),
        )
        .header("Content-Type", "application/json")
}

fn error_message(bytes: &[u8], status: reqwest::StatusCode) -> String {
    match serde_json::from_slice::<ErrorResponse>(bytes) {
        Ok(ErrorResponse {
            detail: Some(detail),
        }) => detail,
        _ => format!("Server error ({})", status),
    }
}

async fn parse_response<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, String> {
    let status = res.status();
    let bytes = res
        .bytes()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))?;

    if !status.is_success() {
        return Err(error_message(&bytes, status));
    }

    serde_json::from_slice::<T>(&bytes)
        .map_err(|e| format!("Failed to decode server response: {}", e))
}

// 204 carries no body and must not be fed to the JSON decoder.
async fn parse_empty_response(res: reqwest::Response) -> Result<(), String> {
    let status = res.status();
    if status.is_success() {
        return Ok(());
    }

    let bytes = res.bytes().await.unwrap_or_default();
    Err(error_message(&bytes, status))
}

async fn send(builder: reqwest::RequestBuilder) -> Result<reqwest::Response, String> {
    builder.send().await.map_err(|e| e.to_string())
}

pub async fn health(config: RequestConfig) -> Result<HealthResponse, String> {
    let res = send(get_client(config, "health".to_string(), RequestType::GET)).await?;
    parse_response(res).await
}
