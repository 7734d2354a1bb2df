use anyhow::{Context, anyhow};
use itertools::Itertools;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::dto::{ListResponseRestDTO, ProblemDetailsRestDTO};
use crate::provider::http_client::{Error, RequestBuilder, Response};
use crate::provider::loan_api_client::error::LoanApiClientError;

/// Sends the request and normalizes every failure into [`LoanApiClientError`].
pub(super) async fn execute(request: RequestBuilder) -> Result<Response, LoanApiClientError> {
    let response = request.send().await.map_err(|error| match error {
        Error::HttpError(message) => LoanApiClientError::NetworkError(message),
        other => LoanApiClientError::Transport(other.into()),
    })?;

    if response.status.is_success() {
        Ok(response)
    } else {
        let error = error_from_response(&response);
        tracing::warn!(
            method = %response.request.method,
            url = %response.request.url,
            status = %response.status,
            %error,
            "Loan API request failed"
        );
        Err(error)
    }
}

pub(super) fn error_from_response(response: &Response) -> LoanApiClientError {
    let status = response.status;
    match status.0 {
        401 | 403 => LoanApiClientError::Unauthorized,
        404 => LoanApiClientError::NotFound,
        400..=499 => LoanApiClientError::ValidationFailed(
            validation_message(&response.body).unwrap_or_else(|| format!("HTTP {status}")),
        ),
        500..=599 => LoanApiClientError::ServerError { status: status.0 },
        _ => LoanApiClientError::Transport(anyhow!("Unexpected HTTP status {status}")),
    }
}

/// Extracts a readable message from a rejected request. Field errors are flattened and
/// joined in the order the server sent them.
fn validation_message(body: &[u8]) -> Option<String> {
    if let Ok(problem) = serde_json::from_slice::<ProblemDetailsRestDTO>(body) {
        let field_errors = problem
            .errors
            .unwrap_or_default()
            .into_values()
            .flat_map(|value| match value {
                Value::Array(values) => values,
                other => vec![other],
            })
            .filter_map(|value| match value {
                Value::String(message) => Some(message),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .join(", ");

        if !field_errors.is_empty() {
            return Some(field_errors);
        }

        if let Some(message) = problem.message.or(problem.title) {
            return Some(message);
        }
    }

    if let Ok(Value::String(message)) = serde_json::from_slice::<Value>(body) {
        return Some(message);
    }

    std::str::from_utf8(body)
        .ok()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned)
}

pub(super) fn parse<T: DeserializeOwned>(response: Response) -> Result<T, LoanApiClientError> {
    response
        .json::<T>()
        .context("parsing error")
        .map_err(LoanApiClientError::Transport)
}

/// Empty and `null` bodies are empty lists
pub(super) fn parse_list<T: DeserializeOwned>(
    response: Response,
) -> Result<Vec<T>, LoanApiClientError> {
    if response.has_empty_body() {
        return Ok(vec![]);
    }

    Ok(parse::<Option<ListResponseRestDTO<T>>>(response)?
        .map(ListResponseRestDTO::into_vec)
        .unwrap_or_default())
}
