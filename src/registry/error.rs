use crate::domain::{channel::ChannelType, services::ServiceError};

pub type DatasourceResult<T> = Result<T, DatasourceError>;

/// Errors surfaced at the datasource boundary.
///
/// "This module does not own the request" is not an error; it is reported as
/// [`ChannelResolution::NotApplicable`](super::ChannelResolution::NotApplicable).
#[derive(Debug, thiserror::Error)]
pub enum DatasourceError {
    /// No registered module resolved the channel.
    #[error("channel not found: {channel_id} (type {channel_type})")]
    ChannelNotFound {
        channel_id: String,
        channel_type: ChannelType,
    },

    /// Owned scope, but a required related record is missing.
    #[error("data integrity fault on channel {channel_id}: {detail}")]
    DataIntegrity { channel_id: String, detail: String },

    #[error("module `{name}` is already registered")]
    DuplicateModuleName { name: String },

    /// A single-owner capability is claimed by a second module.
    #[error("module `{module}` claims {capability}, already provided by `{existing}`")]
    CapabilityConflict {
        capability: String,
        existing: String,
        module: String,
    },

    #[error("no module provides the {capability} capability")]
    CapabilityNotRegistered { capability: &'static str },

    /// Wrapped domain-service failure.
    #[error("{context}: {source}")]
    Upstream {
        context: String,
        #[source]
        source: ServiceError,
    },
}

/// Flat classification the messaging core can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    DataIntegrityFault,
    DuplicateRegistration,
    CapabilityNotRegistered,
    UpstreamFailure,
}

impl DatasourceError {
    pub fn upstream(context: impl Into<String>, source: ServiceError) -> Self {
        Self::Upstream {
            context: context.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ChannelNotFound { .. } => ErrorKind::NotFound,
            Self::DataIntegrity { .. } => ErrorKind::DataIntegrityFault,
            Self::DuplicateModuleName { .. } | Self::CapabilityConflict { .. } => {
                ErrorKind::DuplicateRegistration
            }
            Self::CapabilityNotRegistered { .. } => ErrorKind::CapabilityNotRegistered,
            Self::Upstream { .. } => ErrorKind::UpstreamFailure,
        }
    }

    /// Only upstream failures may succeed when retried.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::UpstreamFailure
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn upstream_keeps_the_service_error_as_source() {
        let error = DatasourceError::upstream(
            "load friends",
            ServiceError::unavailable("connection refused"),
        );

        let source = error.source().expect("upstream should expose its cause");
        assert!(source.to_string().contains("connection refused"));
        assert_eq!(error.kind(), ErrorKind::UpstreamFailure);
        assert!(error.is_retryable());
    }

    #[test]
    fn backend_cause_stays_reachable_through_the_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "read timed out");
        let error =
            DatasourceError::upstream("query devices", ServiceError::backend("select device", io));

        let service = error.source().expect("service error");
        let backend = service.source().expect("backend error");

        assert_eq!(backend.to_string(), "read timed out");
        assert_eq!(
            error.to_string(),
            "query devices: select device: read timed out"
        );
    }

    #[test]
    fn integrity_faults_are_not_retryable() {
        let error = DatasourceError::DataIntegrity {
            channel_id: "u1".to_owned(),
            detail: "user record missing".to_owned(),
        };

        assert_eq!(error.kind(), ErrorKind::DataIntegrityFault);
        assert!(!error.is_retryable());
    }

    #[test]
    fn channel_not_found_classifies_as_not_found() {
        let error = DatasourceError::ChannelNotFound {
            channel_id: "g1".to_owned(),
            channel_type: ChannelType::GROUP,
        };

        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.to_string(), "channel not found: g1 (type 2)");
    }
}
