use serde::Serialize;

use crate::{Client, ClientError, ClientResult};

/// Making requests to the YouTube Data API.
impl Client {
    /// POST `body` as JSON to the configured endpoint, returning the raw
    /// response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers with a
    /// non-success status.
    pub(crate) async fn post<B: Serialize>(&self, body: &B) -> ClientResult<Vec<u8>> {
        let body = serde_json::to_string(body)?;
        tracing::info!("{body}");

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            return Err(ClientError::RequestFailed {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(bytes.to_vec())
    }
}
