/// Centralized helpers for WebSocket and HTTP error responses.
///
/// Use these helpers to ensure all error messages are consistent, explicit, and include a code and context.
use actix_http::StatusCode;
use actix_web::HttpResponse;
use serde_json::{json, Value};

/// Formats a WebSocket error message as a JSON string.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "NOT_YOUR_TURN").
/// - `message`: Human-readable error message (in English).
/// - `context`: Optional context (e.g. player_id, target cell).
pub fn ws_error_message(code: &str, message: &str, context: Option<Value>) -> String {
    json!({
        "action": "Error",
        "data": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(Value::Null),
        }
    })
    .to_string()
}

/// Returns an HTTP error response with a JSON body.
///
/// # Arguments
/// - `code`: Unique error code.
/// - `message`: Human-readable error message.
/// - `status`: HTTP status code.
pub fn http_error_response(code: &str, message: &str, status: StatusCode) -> HttpResponse {
    let body = json!({ "error": { "code": code, "message": message } });
    HttpResponse::build(status).json(body)
}
