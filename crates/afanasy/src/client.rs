//! HTTP client for the Afanasy server.
//!
//! Delivers a materialized job payload with a single `POST /json`
//! request. Failures are reported as-is; nothing here retries or
//! rolls back already-sent jobs.

/// Errors from the Afanasy binding layer.
#[derive(Debug, thiserror::Error)]
pub enum AfError {
    /// The job description has no command blocks to submit.
    #[error("job has no command blocks")]
    EmptyJob,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("Afanasy server error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Client for a single Afanasy server.
pub struct AfClient {
    client: reqwest::Client,
    server_address: String,
}

impl AfClient {
    /// Create a client for the server at `server_address`, e.g.
    /// `http://farm-master:51000`.
    pub fn new(server_address: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            server_address: server_address.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, server_address: impl Into<String>) -> Self {
        Self {
            client,
            server_address: server_address.into(),
        }
    }

    /// Server address this client submits to.
    pub fn server_address(&self) -> &str {
        &self.server_address
    }

    /// Send a job payload to the server.
    pub async fn send(&self, payload: &serde_json::Value) -> Result<(), AfError> {
        let response = self
            .client
            .post(format!("{}/json", self.server_address))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AfError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
