//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}

impl PingResponse {
    pub fn pong() -> Self {
        Self { message: "pong" }
    }
}

/// GET /ping — always answers `{"message":"pong"}`.
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse::pong())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pong_serializes_to_single_field() {
        let json = serde_json::to_string(&PingResponse::pong()).unwrap();
        assert_eq!(json, r#"{"message":"pong"}"#);
    }

    #[tokio::test]
    async fn test_handler_returns_pong() {
        let Json(body) = ping().await;
        assert_eq!(body.message, "pong");
    }
}
