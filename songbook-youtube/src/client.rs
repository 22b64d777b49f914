#[derive(Debug)]
/// An error that can occur when interacting with the client.
pub enum ClientError {
    /// An error that occurred when making a request.
    ReqwestError(reqwest::Error),
    /// An error that occurred when serializing a request or deserializing a response.
    SerializationError(serde_json::Error),
    /// The API answered with a non-success status.
    RequestFailed {
        /// The HTTP status code.
        status: u16,
        /// The response body, as text.
        body: String,
    },
}
impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::ReqwestError(e) => write!(f, "Reqwest error: {e}"),
            ClientError::SerializationError(e) => write!(f, "Serialization error: {e}"),
            ClientError::RequestFailed { status, body } => {
                write!(f, "Request failed with status code {status}")?;
                if !body.is_empty() {
                    write!(f, ": {body}")?;
                }
                Ok(())
            }
        }
    }
}
impl std::error::Error for ClientError {}
impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::ReqwestError(e)
    }
}
impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::SerializationError(e)
    }
}
/// A result type for the client.
pub type ClientResult<T> = Result<T, ClientError>;

/// A client for the YouTube Data API.
pub struct Client {
    pub(crate) endpoint: String,
    pub(crate) authorization: String,
    pub(crate) client: reqwest::Client,
}
impl Client {
    /// Create a new client.
    ///
    /// `authorization` is sent verbatim as the `Authorization` header, so it
    /// should include its scheme (e.g. `Bearer ya29...`).
    pub fn new(endpoint: impl Into<String>, authorization: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            authorization: authorization.into(),
            client: reqwest::Client::new(),
        }
    }
}
