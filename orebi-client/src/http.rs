//! HTTP client for the storefront REST API
//!
//! Response handling is two-step: HTTP status codes map onto the error
//! taxonomy first, then the `{ success, message, ... }` envelope is
//! checked before the endpoint payload is decoded. A server failure is
//! always surfaced as a typed error, never an unhandled decode panic.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::client::{
    LoginRequest, PlaceOrderRequest, ProfileUpdate, UpdateStatusRequest, UserInfo,
};
use shared::models::{ContactInput, ContactMessage, Order, OrderStatus};
use shared::response::{ApiStatus, AuthPayload, ContactsPayload, OrderPayload, OrdersPayload, UserPayload};

/// HTTP client for making network requests to the storefront API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request for a raw JSON document (no envelope)
    async fn get_raw(&self, path: &str) -> ClientResult<serde_json::Value> {
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::status_error(status, text));
        }
        response.json().await.map_err(Into::into)
    }

    /// Handle the HTTP response: status code, then envelope, then payload
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Self::status_error(status, text));
        }

        Self::decode_envelope(&text)
    }

    /// Decode an envelope body: status header first, then the payload
    fn decode_envelope<T: DeserializeOwned>(text: &str) -> ClientResult<T> {
        let api_status: ApiStatus = serde_json::from_str(text)?;
        if let Err(message) = api_status.into_result() {
            return Err(ClientError::Api(message));
        }

        serde_json::from_str(text).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    fn status_error(status: StatusCode, text: String) -> ClientError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Unauthorized,
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Internal(text),
        }
    }

    // ========== Auth API ==========

    /// Login with email and password; the returned token is kept for
    /// subsequent requests
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<UserInfo> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let payload: AuthPayload = self.post("/api/user/login", &request).await?;
        tracing::debug!(user = %payload.user.email, "logged in");
        self.token = Some(payload.token);
        Ok(payload.user)
    }

    /// Drop the stored token
    pub fn logout(&mut self) {
        self.token = None;
    }

    // ========== User API ==========

    /// Get current user profile
    pub async fn profile(&self) -> ClientResult<UserInfo> {
        let payload: UserPayload = self.get("/api/user/profile").await?;
        Ok(payload.user)
    }

    /// Update current user profile
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<UserInfo> {
        let payload: UserPayload = self.put("/api/user/profile", update).await?;
        Ok(payload.user)
    }

    // ========== Order API ==========

    /// Get all orders (admin)
    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        let payload: OrdersPayload = self.get("/api/order/list").await?;
        Ok(payload.orders)
    }

    /// Get the current user's orders
    pub async fn my_orders(&self) -> ClientResult<Vec<Order>> {
        let payload: OrdersPayload = self.get("/api/order/my-orders").await?;
        Ok(payload.orders)
    }

    /// Place a new order
    pub async fn place_order(&self, request: &PlaceOrderRequest) -> ClientResult<Order> {
        let payload: OrderPayload = self.post("/api/order/place", request).await?;
        tracing::info!(order_id = %payload.order.id, "order placed");
        Ok(payload.order)
    }

    /// Update order status (admin)
    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> ClientResult<()> {
        let request = UpdateStatusRequest {
            order_id: order_id.to_string(),
            status,
        };

        let _: ApiStatus = self.post("/api/order/status", &request).await?;
        tracing::info!(order_id, status = %status, "order status updated");
        Ok(())
    }

    // ========== Contact API ==========

    /// Get the current user's contact messages
    pub async fn my_contacts(&self) -> ClientResult<Vec<ContactMessage>> {
        let payload: ContactsPayload = self.get("/api/contact/my-contacts").await?;
        Ok(payload.contacts)
    }

    /// Get all contact messages (admin)
    pub async fn list_contacts(&self) -> ClientResult<Vec<ContactMessage>> {
        let payload: ContactsPayload = self.get("/api/contact").await?;
        Ok(payload.contacts)
    }

    /// Submit a contact message
    pub async fn submit_contact(&self, input: &ContactInput) -> ClientResult<()> {
        let _: ApiStatus = self.post("/api/contact", input).await?;
        Ok(())
    }

    /// Make a GET request for a raw text document (no envelope)
    async fn get_text(&self, path: &str) -> ClientResult<String> {
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Self::status_error(status, text));
        }
        Ok(text)
    }

    // ========== Docs API ==========

    /// Fetch the static API documentation payload
    pub async fn api_docs(&self) -> ClientResult<serde_json::Value> {
        self.get_raw("/api/docs").await
    }

    /// Fetch the HTML-formatted API documentation
    pub async fn api_docs_html(&self) -> ClientResult<String> {
        self.get_text("/api/docs/html").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::response::OrdersPayload;

    #[test]
    fn test_status_codes_map_to_error_taxonomy() {
        assert!(matches!(
            HttpClient::status_error(StatusCode::UNAUTHORIZED, "no token".into()),
            ClientError::Unauthorized
        ));
        assert!(matches!(
            HttpClient::status_error(StatusCode::FORBIDDEN, "not admin".into()),
            ClientError::Unauthorized
        ));
        assert!(matches!(
            HttpClient::status_error(StatusCode::NOT_FOUND, "no such order".into()),
            ClientError::NotFound(text) if text == "no such order"
        ));
        assert!(matches!(
            HttpClient::status_error(StatusCode::BAD_REQUEST, "amount required".into()),
            ClientError::Validation(text) if text == "amount required"
        ));
        assert!(matches!(
            HttpClient::status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom".into()),
            ClientError::Internal(text) if text == "boom"
        ));
        assert!(matches!(
            HttpClient::status_error(StatusCode::BAD_GATEWAY, "upstream".into()),
            ClientError::Internal(_)
        ));
    }

    #[test]
    fn test_success_envelope_with_payload_decodes() {
        let payload: OrdersPayload =
            HttpClient::decode_envelope(r#"{"success": true, "orders": []}"#).unwrap();
        assert!(payload.orders.is_empty());
    }

    #[test]
    fn test_missing_payload_is_invalid_response() {
        // success:true without the expected payload key must surface as
        // a typed error, never a decode panic
        let err = HttpClient::decode_envelope::<OrdersPayload>(r#"{"success": true}"#).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn test_server_failure_maps_to_api_error() {
        let err = HttpClient::decode_envelope::<OrdersPayload>(
            r#"{"success": false, "message": "Not Authorized"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::Api(message) if message == "Not Authorized"));
    }

    #[test]
    fn test_non_json_body_is_serialization_error() {
        let err = HttpClient::decode_envelope::<OrdersPayload>("<html>gateway</html>").unwrap_err();
        assert!(matches!(err, ClientError::Serialization(_)));
    }
}
