//! User-facing wording for service failures.

use crate::service::ServiceError;

/// Context tags passed by the invite commands.
pub mod context {
    pub const GET_INVITES: &str = "invites.get";
    pub const ADD_INVITE: &str = "invites.add";
    pub const UPDATE_INVITE: &str = "invites.update";
    pub const REMOVE_INVITE: &str = "invites.remove";
}

/// Turns a service error into text suitable for display.
///
/// `context` names the operation that failed so the same status can be
/// worded differently per command. Implementations must never return an
/// empty string.
pub trait ErrorFormatter: Send + Sync {
    fn format(&self, error: &ServiceError, context: Option<&str>) -> String;
}

/// Built-in wording for invite operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorFormatter;

impl ErrorFormatter for DefaultErrorFormatter {
    fn format(&self, error: &ServiceError, context: Option<&str>) -> String {
        let message = match error {
            ServiceError::Timeout { .. } => {
                "The invite service did not respond in time".to_string()
            }
            ServiceError::Transport(_) => "Could not reach the invite service".to_string(),
            ServiceError::Decode(_) => "Unexpected response from the invite service".to_string(),
            ServiceError::InvalidUrl(url) => format!("Invite service URL is invalid: {}", url),
            ServiceError::Status { status, message } => {
                status_message(*status, message, context)
            }
        };

        if message.trim().is_empty() {
            "Request failed".to_string()
        } else {
            message
        }
    }
}

fn status_message(status: u16, server_message: &str, context: Option<&str>) -> String {
    match (status, context) {
        (401 | 403, _) => "You are not allowed to manage invites for this project".to_string(),
        (404, Some(context::UPDATE_INVITE | context::REMOVE_INVITE)) => {
            "Invite not found".to_string()
        }
        (404, _) => "Project not found".to_string(),
        (409, Some(context::ADD_INVITE)) => "An invite for this email already exists".to_string(),
        _ if !server_message.trim().is_empty() => server_message.trim().to_string(),
        _ => format!("Request failed ({})", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16, message: &str) -> ServiceError {
        ServiceError::Status {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn not_found_depends_on_context() {
        let f = DefaultErrorFormatter;
        assert_eq!(
            f.format(&status(404, ""), Some(context::REMOVE_INVITE)),
            "Invite not found"
        );
        assert_eq!(
            f.format(&status(404, ""), Some(context::GET_INVITES)),
            "Project not found"
        );
        assert_eq!(f.format(&status(404, ""), None), "Project not found");
    }

    #[test]
    fn conflict_on_add_mentions_email() {
        let f = DefaultErrorFormatter;
        assert_eq!(
            f.format(&status(409, "dup"), Some(context::ADD_INVITE)),
            "An invite for this email already exists"
        );
        assert_eq!(
            f.format(&status(409, "dup"), Some(context::UPDATE_INVITE)),
            "dup"
        );
    }

    #[test]
    fn falls_back_to_status_code() {
        let f = DefaultErrorFormatter;
        assert_eq!(f.format(&status(500, "  "), None), "Request failed (500)");
        assert_eq!(f.format(&status(422, "Bad email"), None), "Bad email");
    }

    #[test]
    fn timeout_and_decode_are_worded() {
        let f = DefaultErrorFormatter;
        assert!(f
            .format(&ServiceError::Timeout { seconds: 3 }, None)
            .contains("did not respond"));
        assert!(f
            .format(&ServiceError::Decode("eof".into()), None)
            .contains("Unexpected response"));
    }

    #[test]
    fn forbidden_is_permission_message() {
        let f = DefaultErrorFormatter;
        assert_eq!(
            f.format(&status(403, "forbidden"), Some(context::ADD_INVITE)),
            "You are not allowed to manage invites for this project"
        );
    }
}
