//! Replacement-policy error definitions.
//!
//! Every variant is a structural or configuration defect in the caller, not a
//! recoverable runtime condition: policy name and way count are validated once
//! at setup time, after which steady-state `touch`/`update` calls on a
//! correctly constructed policy never fail. A failing operation leaves prior
//! state unchanged.

use thiserror::Error;

/// Errors raised by policy construction and by unsupported operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReplacementError {
    /// The factory was given a policy name outside the recognized set.
    #[error("\"{0}\" replacement policy is not defined, supported policies are: LRU, Pseudo-LRU")]
    UnknownPolicy(String),

    /// A policy was constructed with a way count it cannot represent.
    #[error("invalid way count {ways}: {requirement}")]
    InvalidWayCount {
        /// The rejected way count.
        ways: usize,
        /// The constraint the way count violated.
        requirement: &'static str,
    },

    /// An operation was invoked on a policy that does not implement it.
    #[error("{operation} is not supported by the {policy} replacement policy")]
    UnsupportedOperation {
        /// Name of the refusing policy.
        policy: &'static str,
        /// Name of the refused operation.
        operation: &'static str,
    },
}
