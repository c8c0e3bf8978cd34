//! HTTP client for the contactbook API.

pub mod contacts;
pub mod submit;

#[cfg(test)]
mod test_server;

use contactbook_core::problem::ProblemDetails;

use crate::error::{ClientError, Result};

/// HTTP client for the `contactController` endpoint.
///
/// Requests go to `{url_base}contactController{extension}`, so the same client
/// works against deployments that expose the endpoint as e.g. `contactController.php`.
#[derive(Debug, Clone)]
pub struct ContactbookClient {
    client: reqwest::Client,
    url_base: String,
    extension: String,
}

impl ContactbookClient {
    /// Create a new client with the given URL base and endpoint extension.
    pub fn new(url_base: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url_base: url_base.into(),
            extension: extension.into(),
        }
    }

    /// URL of the endpoint itself.
    pub fn endpoint(&self) -> String {
        format!("{}contactController{}", self.url_base, self.extension)
    }

    /// Build a URL below the endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint(), path)
    }

    /// Handle responses that carry a JSON body on success.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status().is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(problem_from_response(response).await)
        }
    }

    /// Handle responses with no body on success.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(problem_from_response(response).await)
        }
    }
}

/// Reads a `{title, detail}` error body.
pub(crate) async fn read_problem(response: reqwest::Response) -> Result<ProblemDetails> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|_| ClientError::InvalidResponse(format!("status {status} with body: {body}")))
}

/// Converts an error response into a [`ClientError`].
async fn problem_from_response(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    match read_problem(response).await {
        Ok(problem) => ClientError::Problem {
            status,
            title: problem.title,
            detail: problem.detail,
        },
        Err(err) => err,
    }
}
