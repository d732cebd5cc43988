use salvo::Response;
use salvo::http::StatusCode;
use salvo::prelude::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// ## Summary
/// JSON envelope shared by every events endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// ## Summary
/// Renders `result` as `{ success: true, data }` with `status`, or as
/// `{ success: false, error }` with the error's status.
pub fn respond<T: Serialize + Send>(res: &mut Response, status: StatusCode, result: AppResult<T>) {
    match result {
        Ok(data) => {
            res.status_code(status);
            res.render(Json(ApiResponse {
                success: true,
                data: Some(data),
                error: None,
            }));
        }
        Err(err) => render_error(res, &err),
    }
}

fn render_error(res: &mut Response, err: &AppError) {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!(error = ?err, "Request failed");
    } else {
        tracing::debug!(error = %err, status = %status, "Request rejected");
    }

    res.status_code(status);
    res.render(Json(ApiResponse::<()> {
        success: false,
        data: None,
        error: Some(err.public_message()),
    }));
}
