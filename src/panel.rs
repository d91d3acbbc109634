use crate::models::message::{ErrorResponse, PublicMessageResponse};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "http://zomota-api-service:3001/api/public-message";
pub const CONNECTION_FAILED_SOURCE: &str = "Connection Failed";
pub const LOGIN_SIMULATED: &str =
    "Login simulated! Data would be sent to the backend for authentication.";

/// What the status panel shows. Exactly one state is visible at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    Loading,
    Loaded {
        message: String,
        source: String,
        timestamp: String,
    },
    /// The service answered, but not with a success.
    ServiceError { status: u16, error: String },
    /// No usable answer came back at all.
    ConnectionFailed { reason: String },
}

impl PanelState {
    /// Maps a completed HTTP exchange onto a panel state.
    pub fn from_response(status: u16, body: &str) -> Self {
        if !(200..300).contains(&status) {
            let error = serde_json::from_str::<ErrorResponse>(body)
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("HTTP error! status: {status}"));
            return PanelState::ServiceError { status, error };
        }

        match serde_json::from_str::<PublicMessageResponse>(body) {
            Ok(response) => PanelState::Loaded {
                message: response.message,
                source: response.source,
                timestamp: response.timestamp,
            },
            Err(e) => PanelState::ConnectionFailed {
                reason: format!("malformed response body: {e}"),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            PanelState::ServiceError { .. } | PanelState::ConnectionFailed { .. }
        )
    }

    pub fn message(&self) -> String {
        match self {
            PanelState::Loading => "Fetching...".to_string(),
            PanelState::Loaded { message, .. } => message.clone(),
            PanelState::ServiceError { error, .. } => format!("API Error: {error}"),
            PanelState::ConnectionFailed { reason } => format!(
                "API Error: Cannot connect to backend or DB. Check K8s Service: {reason}"
            ),
        }
    }

    pub fn source(&self) -> String {
        match self {
            PanelState::Loading => "...".to_string(),
            PanelState::Loaded { source, .. } => source.clone(),
            PanelState::ServiceError { status, .. } => format!("Status Endpoint (HTTP {status})"),
            PanelState::ConnectionFailed { .. } => CONNECTION_FAILED_SOURCE.to_string(),
        }
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Backend DB Status:")?;
        writeln!(f, "  {}", self.message())?;
        write!(f, "  Source: {}", self.source())?;
        if let PanelState::Loaded { timestamp, .. } = self {
            write!(f, " @ {timestamp}")?;
        }
        Ok(())
    }
}

/// Fetches the public message once per [`StatusPanel::load`] call.
pub struct StatusPanel {
    client: reqwest::Client,
    endpoint: String,
}

impl StatusPanel {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn load(&self) -> PanelState {
        debug!(endpoint = %self.endpoint, "fetching public message");

        let response = match self.client.get(&self.endpoint).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "status request failed");
                return PanelState::ConnectionFailed {
                    reason: e.to_string(),
                };
            }
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => PanelState::from_response(status, &body),
            Err(e) => {
                warn!(error = %e, "status response body unreadable");
                PanelState::ConnectionFailed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginFormError {
    #[error("Email address is required")]
    MissingEmail,

    #[error("Password is required")]
    MissingPassword,
}

/// Sign-in form state. Submission is simulated and never leaves the process.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn submit(&self) -> Result<&'static str, LoginFormError> {
        if self.email.trim().is_empty() {
            return Err(LoginFormError::MissingEmail);
        }
        if self.password.is_empty() {
            return Err(LoginFormError::MissingPassword);
        }
        Ok(LOGIN_SIMULATED)
    }
}
