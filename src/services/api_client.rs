// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// One endpoint: GET ?action=list and POST {action: add|delete, ...}.
// Each call is fire-once: no retry, no timeout, no queue.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use crate::config::CONFIG;
use crate::error::{BoardError, BoardResult};
use crate::models::{ListData, ListResponse, MutationRequest, MutationResponse};

const BODY_SNIPPET_LEN: usize = 100;

/// Remote spreadsheet service, as seen by the view model
#[async_trait(?Send)]
pub trait RemoteApi {
    /// Canonical list of every row
    async fn list(&self) -> BoardResult<ListData>;

    /// Add or delete one row. `Ok` only when the endpoint answered `success: true`.
    async fn mutate(&self, request: &MutationRequest) -> BoardResult<()>;
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.endpoint_url.clone())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn read_body(response: Response) -> BoardResult<String> {
        if !response.ok() {
            return Err(BoardError::Network(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }
        response
            .text()
            .await
            .map_err(|e| BoardError::Network(format!("Error reading body: {}", e)))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl RemoteApi for ApiClient {
    async fn list(&self) -> BoardResult<ListData> {
        log::info!("🔄 [API] Fetching board rows");

        let response = Request::get(&self.base_url)
            .query([("action", "list")])
            .send()
            .await
            .map_err(|e| BoardError::Network(e.to_string()))?;

        let body = Self::read_body(response).await?;
        let data = parse_list_body(&body)?;
        log::info!(
            "✅ [API] Rows received: {} morning, {} afternoon",
            data.morning.len(),
            data.afternoon.len()
        );
        Ok(data)
    }

    async fn mutate(&self, request: &MutationRequest) -> BoardResult<()> {
        log::info!(
            "📤 [API] {:?} '{}' in {} / {}",
            request.action,
            request.name,
            request.session.as_str(),
            request.category
        );

        let payload = serde_json::to_string(request)
            .map_err(|e| BoardError::Protocol(format!("Serialization error: {}", e)))?;

        // text/plain keeps the request "simple" for the spreadsheet service (no CORS preflight)
        let response = Request::post(&self.base_url)
            .header("Content-Type", "text/plain;charset=utf-8")
            .body(payload)
            .map_err(|e| BoardError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| BoardError::Network(e.to_string()))?;

        let body = Self::read_body(response).await?;
        parse_mutation_body(&body)
    }
}

/// Decodes a list envelope; `success: false` becomes `Rejected`
pub fn parse_list_body(body: &str) -> BoardResult<ListData> {
    let envelope: ListResponse = serde_json::from_str(body)
        .map_err(|_| BoardError::Protocol(format!("Invalid JSON response: {}", snippet(body))))?;
    if !envelope.success {
        return Err(BoardError::Rejected(
            envelope.message.or_else(|| Some("Failed to load sheet data".to_string())),
        ));
    }
    Ok(envelope.data.unwrap_or_default())
}

/// Decodes an add/delete envelope
pub fn parse_mutation_body(body: &str) -> BoardResult<()> {
    let envelope: MutationResponse = serde_json::from_str(body)
        .map_err(|_| BoardError::Protocol(format!("Invalid JSON response: {}", snippet(body))))?;
    if envelope.success {
        Ok(())
    } else {
        Err(BoardError::Rejected(envelope.message))
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_body_success() {
        let data = parse_list_body(
            r#"{"success":true,"data":{"Morning":[{"category":"lab","name":"L","url":"u"}],"Afternoon":[]}}"#,
        )
        .unwrap();
        assert_eq!(data.morning.len(), 1);
    }

    #[test]
    fn list_body_without_data_is_empty() {
        let data = parse_list_body(r#"{"success":true}"#).unwrap();
        assert_eq!(data, ListData::default());
    }

    #[test]
    fn list_body_with_null_session_keeps_other_rows() {
        let data = parse_list_body(
            r#"{"success":true,"data":{"Morning":null,"Afternoon":[{"category":"lab","name":"L","url":"u"}]}}"#,
        )
        .unwrap();
        assert!(data.morning.is_empty());
        assert_eq!(data.afternoon.len(), 1);
    }

    #[test]
    fn list_body_rejection_keeps_server_message() {
        let err = parse_list_body(r#"{"success":false,"message":"quota"}"#).unwrap_err();
        assert_eq!(err, BoardError::Rejected(Some("quota".into())));
    }

    #[test]
    fn malformed_body_is_a_protocol_failure() {
        let html = format!("<html>{}</html>", "x".repeat(300));
        match parse_mutation_body(&html) {
            Err(BoardError::Protocol(msg)) => {
                assert!(msg.starts_with("Invalid JSON response: <html>"));
                assert_eq!(msg.len(), "Invalid JSON response: ".len() + BODY_SNIPPET_LEN);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn mutation_body_success_flag() {
        assert!(parse_mutation_body(r#"{"success":true}"#).is_ok());
        assert_eq!(
            parse_mutation_body(r#"{"success":false}"#),
            Err(BoardError::Rejected(None))
        );
    }
}
