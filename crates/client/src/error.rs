//! Transport/decoding error taxonomy.

use thiserror::Error;

/// Error from the API gateway client.
///
/// `Unauthorized` is surfaced separately because the app-level policy for it
/// (drop the token, return to login) differs from ordinary server errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401: token missing/expired; caller must re-authenticate.
    #[error("unauthorized")]
    Unauthorized,

    /// 404: resource not found. Some call sites (assigned products) map
    /// this to an empty result instead of propagating it.
    #[error("not found")]
    NotFound,

    /// Any other non-success status, with the server's own message when the
    /// body carried one.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Connection/timeout/transport failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body did not match any known envelope shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),

    /// Client construction failed (e.g. the token is not a valid header).
    #[error("client configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Map a non-success status + body into the taxonomy.
    ///
    /// Prefers the server's `message` (or `error`) field verbatim; falls
    /// back to a generic string so the UI always has something to show.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            _ => Self::Server {
                status,
                message: extract_message(body)
                    .unwrap_or_else(|| "request failed".to_string()),
            },
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["message", "error"] {
        if let Some(msg) = value.get(key).and_then(|v| v.as_str())
            && !msg.trim().is_empty()
        {
            return Some(msg.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_follows_the_taxonomy() {
        assert!(matches!(ApiError::from_status(401, ""), ApiError::Unauthorized));
        assert!(matches!(ApiError::from_status(404, ""), ApiError::NotFound));
        assert!(matches!(
            ApiError::from_status(500, ""),
            ApiError::Server { status: 500, .. }
        ));
    }

    #[test]
    fn server_message_is_taken_verbatim_when_present() {
        let err = ApiError::from_status(422, r#"{"error":"validation_error","message":"cost price must be positive"}"#);
        match err {
            ApiError::Server { message, .. } => {
                assert_eq!(message, "cost price must be positive");
            }
            _ => panic!("Expected Server error"),
        }
    }

    #[test]
    fn missing_message_falls_back_to_generic_text() {
        let err = ApiError::from_status(502, "<html>bad gateway</html>");
        match err {
            ApiError::Server { message, .. } => assert_eq!(message, "request failed"),
            _ => panic!("Expected Server error"),
        }
    }
}
