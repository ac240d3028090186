use crate::PolicyArn;

/// Errors raised while talking to the identity service
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{operation} failed: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    #[error("Policy listing was truncated but returned no marker")]
    MissingMarker,

    #[error("Version listing for {0} was truncated but returned no marker")]
    MissingVersionMarker(PolicyArn),
}

impl Error {
    pub fn transport(operation: &'static str, message: impl ToString) -> Self {
        Self::Transport { operation, message: message.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_transport_error_display() {
        let fixture = Error::transport("ListPolicies", "AccessDenied: not authorized");

        let actual = fixture.to_string();

        let expected = "ListPolicies failed: AccessDenied: not authorized";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_missing_version_marker_names_policy() {
        let fixture = Error::MissingVersionMarker(PolicyArn::from("arn:aws:iam::123:policy/a"));

        let actual = fixture.to_string();

        assert!(actual.contains("arn:aws:iam::123:policy/a"));
    }
}
