//! # Identifier Strategies
//!
//! Some deployments of the collection API expect the client to mint
//! entity ids as `<PREFIX>-<unix-millis>` and send them inside the
//! create payload. Time-based generation is not collision-proof, so id
//! assignment is pluggable: the default leaves the id out of the
//! payload and lets the server assign one, while
//! [`IdStrategy::TimestampPrefix`] mints ids locally for servers that
//! expect them.

use chrono::Utc;

/// How ids for newly created entities are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Omit the id from the create payload; the server assigns one.
    #[default]
    ServerAssigned,
    /// Mint `<PREFIX>-<unix-millis>` locally.
    TimestampPrefix,
}

impl IdStrategy {
    /// The id to embed in a create payload, or `None` when the server
    /// assigns it.
    pub fn generate(&self, prefix: &str) -> Option<String> {
        match self {
            IdStrategy::ServerAssigned => None,
            IdStrategy::TimestampPrefix => {
                Some(format!("{prefix}-{}", Utc::now().timestamp_millis()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_assigned_generates_nothing() {
        assert_eq!(IdStrategy::ServerAssigned.generate("CLI"), None);
    }

    #[test]
    fn test_timestamp_prefix_mints_prefixed_millis() {
        let id = IdStrategy::TimestampPrefix.generate("ORD").unwrap();

        let suffix = id.strip_prefix("ORD-").unwrap();
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
        assert!(suffix.parse::<i64>().unwrap() > 0);
    }

    #[test]
    fn test_default_is_server_assigned() {
        assert_eq!(IdStrategy::default(), IdStrategy::ServerAssigned);
    }
}
