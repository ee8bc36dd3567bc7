//! HTTP operations against the backup gateway.
//!
//! Three endpoints, all POST: a multipart upload of the CSV + ZIP pair,
//! a body-less trigger for the backup job, and a body-less session close.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{CLOSE_PATH, PROCESS_PATH, UPLOAD_PATH};
use crate::types::{AppError, AppResult, UploadResponse};

/// Uploads the CSV + ZIP pair as a multipart form with parts named
/// `csv` and `zip`.
pub async fn submit_files(csv: &File, zip: &File, base_url: &str) -> AppResult<UploadResponse> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Upload(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob("csv", csv)
        .map_err(|e| AppError::Upload(format!("Failed to append CSV file: {:?}", e)))?;
    form_data
        .append_with_blob("zip", zip)
        .map_err(|e| AppError::Upload(format!("Failed to append ZIP file: {:?}", e)))?;

    let url = format!("{}{}", base_url, UPLOAD_PATH);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Upload(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Upload(format!(
            "Server error ({}): {}",
            response.status(),
            error_text
        )));
    }

    response
        .json::<UploadResponse>()
        .await
        .map_err(|e| AppError::Upload(format!("Failed to parse response: {}", e)))
}

/// Triggers the backup job. The response body is logged but not
/// interpreted; only the HTTP status matters.
pub async fn start_backup(base_url: &str) -> AppResult<()> {
    let url = format!("{}{}", base_url, PROCESS_PATH);
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        return Err(AppError::Job(format!(
            "Server error ({})",
            response.status()
        )));
    }

    if let Ok(body) = response.text().await {
        log::debug!("Backup job response: {}", body);
    }
    Ok(())
}

/// Notifies the gateway that the session is over. The response is not
/// interpreted.
pub async fn close_session(base_url: &str) -> AppResult<()> {
    let url = format!("{}{}", base_url, CLOSE_PATH);
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        return Err(AppError::Network(format!(
            "Server error ({})",
            response.status()
        )));
    }
    Ok(())
}
