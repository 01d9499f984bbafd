//! Client for the remote hit-check service
//!
//! The service receives `x`, `y` and `r` as a form-urlencoded POST and
//! answers with the complete history as a JSON array. Failures are
//! classified the same way regardless of transport so the controller can
//! turn each of them into one notification string.

use serde::Deserialize;
use thiserror::Error;

use crate::config::{ApiConfig, UiText};
use crate::domain::history::SubmissionResult;
use crate::domain::region::Radius;

/// Values sent for one submission
#[derive(Debug, Clone, PartialEq)]
pub struct HitRequest {
    /// X exactly as entered in the form
    pub x: String,
    /// Validated Y value
    pub y: f64,
    pub r: Radius,
}

impl HitRequest {
    /// Key/value pairs in the order the service expects them
    pub fn form_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("x", self.x.clone()),
            ("y", self.y.to_string()),
            ("r", self.r.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HitCheckError {
    #[error("Hit-check service rejected the request as malformed")]
    ClientRequest,
    #[error("Hit-check service answered {status} without JSON (content type {content_type:?})")]
    UnexpectedContentType {
        status: u16,
        content_type: Option<String>,
    },
    #[error("Hit-check service failed with status {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Server {
        status: u16,
        message: Option<String>,
    },
    #[error("Hit-check response could not be decoded: {0}")]
    Decode(String),
    #[error("Hit-check service unreachable: {0}")]
    Transport(String),
    #[error("Hit-check service returned an empty history")]
    EmptyHistory,
}

impl HitCheckError {
    /// Text shown in the server notification for this failure
    pub fn user_message(&self, text: &UiText) -> String {
        match self {
            HitCheckError::ClientRequest => text.invalid_data.clone(),
            HitCheckError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            HitCheckError::UnexpectedContentType { .. }
            | HitCheckError::Server { .. }
            | HitCheckError::Decode(_)
            | HitCheckError::Transport(_)
            | HitCheckError::EmptyHistory => text.server_error.clone(),
        }
    }
}

/// The remote collaborator deciding whether a point is inside the region
pub trait HitCheckService {
    /// Submits one point and returns the full history, most recent last
    fn check(&self, request: &HitRequest) -> Result<Vec<SubmissionResult>, HitCheckError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// Turns a raw HTTP answer into a history or a classified failure
pub fn interpret_response(
    status: u16,
    content_type: Option<&str>,
    body: &str,
) -> Result<Vec<SubmissionResult>, HitCheckError> {
    if status == 400 {
        return Err(HitCheckError::ClientRequest);
    }

    let is_json = content_type.is_some_and(|value| value.contains("application/json"));
    if !is_json {
        return Err(HitCheckError::UnexpectedContentType {
            status,
            content_type: content_type.map(str::to_owned),
        });
    }

    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .and_then(|detail| detail.message);
        return Err(HitCheckError::Server { status, message });
    }

    serde_json::from_str(body).map_err(|err| HitCheckError::Decode(err.to_string()))
}

/// Blocking HTTP implementation of the hit-check service
#[derive(Debug, Clone)]
pub struct HttpHitCheck {
    agent: ureq::Agent,
    url: String,
}

impl HttpHitCheck {
    pub fn new(api: &ApiConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(api.timeout).build();
        Self {
            agent,
            url: api.url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl HitCheckService for HttpHitCheck {
    fn check(&self, request: &HitRequest) -> Result<Vec<SubmissionResult>, HitCheckError> {
        let pairs = request.form_pairs();
        let form: Vec<(&str, &str)> = pairs
            .iter()
            .map(|(key, value)| (*key, value.as_str()))
            .collect();

        log::debug!("POST {} {:?}", self.url, form);
        let response = match self.agent.post(&self.url).send_form(&form) {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                return Err(HitCheckError::Transport(transport.to_string()));
            }
        };

        let status = response.status();
        let content_type = response.header("content-type").map(str::to_owned);
        let body = response
            .into_string()
            .map_err(|err| HitCheckError::Transport(err.to_string()))?;

        interpret_response(status, content_type.as_deref(), &body)
    }
}
