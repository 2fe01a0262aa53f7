//! Request plumbing shared by every endpoint module: bearer-token
//! attachment, status-to-error mapping, and the global 401 logout rule.

use citaflow_core::errors::{BookingError, BookingResult};
use eyre::Report;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ApiClient;

impl ApiClient {
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> BookingResult<T> {
        let builder = self.http.get(self.url(path)).query(query);
        self.execute_json(builder).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> BookingResult<T> {
        let builder = self.http.post(self.url(path)).json(body);
        self.execute_json(builder).await
    }

    pub(crate) async fn patch_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> BookingResult<T> {
        let builder = self.http.patch(self.url(path)).json(body);
        self.execute_json(builder).await
    }

    /// PATCH without a body; used by the token-based cancellation endpoint.
    pub(crate) async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> BookingResult<T> {
        let builder = self.http.patch(self.url(path));
        self.execute_json(builder).await
    }

    /// DELETE, discarding whatever body the backend echoes back.
    pub(crate) async fn delete_resource(&self, path: &str) -> BookingResult<()> {
        let builder = self.http.delete(self.url(path));
        self.execute(builder).await?;
        Ok(())
    }

    async fn execute_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> BookingResult<T> {
        let response = self.execute(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| BookingError::Network(Report::new(err)))
    }

    async fn execute(&self, builder: RequestBuilder) -> BookingResult<Response> {
        let builder = match self.auth.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|err| BookingError::Network(Report::new(err)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            // Global rule: an expired or rejected session forces a logout
            tracing::info!("Received 401, clearing stored session");
            self.auth.logout();
            return Err(BookingError::Authentication(
                "Session expired, please log in again".to_string(),
            ));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(status, &body);
            return Err(if status == StatusCode::NOT_FOUND {
                BookingError::NotFound(message)
            } else {
                BookingError::Api {
                    status: status.as_u16(),
                    message,
                }
            });
        }

        Ok(response)
    }
}

/// Pulls the human-readable message out of a backend error body. The backend
/// reports `{"message": "..."}` (sometimes an array of field errors) or
/// `{"error": "..."}`; fall back to the status text when neither parses.
pub(crate) fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        match &value["message"] {
            serde_json::Value::String(message) => return message.clone(),
            serde_json::Value::Array(parts) => {
                let joined: Vec<&str> = parts.iter().filter_map(|p| p.as_str()).collect();
                if !joined.is_empty() {
                    return joined.join("; ");
                }
            }
            _ => {}
        }
        if let Some(message) = value["error"].as_str() {
            return message.to_string();
        }
    }

    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}
