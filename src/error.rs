use thiserror::Error;

use crate::{
    config::ConfigError,
    hotstorage::{BlockId, StackId},
};

/// Reasons a single planning invocation can fail.
///
/// None of these are fatal for the process: the transport answers with an empty
/// schedule and waits for the next snapshot.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("block {block} has no priority entry")]
    MalformedSnapshot { block: BlockId },

    #[error("stack {stack} is not part of the yard model")]
    UnknownStack { stack: StackId },

    #[error("cannot pick up from empty stack {stack}")]
    EmptyStack { stack: StackId },

    #[error("expected block {expected} on top of stack {stack}, found {found}")]
    UnexpectedBlock {
        stack: StackId,
        expected: BlockId,
        found: BlockId,
    },

    #[error("failed to decode world: {0}")]
    Decode(#[source] protobuf::ProtobufError),

    #[error("failed to encode schedule: {0}")]
    Encode(#[source] protobuf::ProtobufError),
}

/// Failures that stop the planner process.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("zmq error: {0}")]
    Zmq(#[from] zmq::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
}

pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_failures_convert_into_transport_errors() {
        let err: TransportError = ConfigError::Invalid("budget".to_string()).into();
        assert!(matches!(err, TransportError::Config(_)));

        let err: TransportError = zmq::Error::EAGAIN.into();
        assert!(matches!(err, TransportError::Zmq(zmq::Error::EAGAIN)));
    }

    #[test]
    fn malformed_snapshot_names_the_block() {
        let err = PlanError::MalformedSnapshot { block: 17 };
        assert_eq!(err.to_string(), "block 17 has no priority entry");
    }
}
