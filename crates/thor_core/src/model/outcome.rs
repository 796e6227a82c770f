//! Outcome convention for entity operations.
//!
//! # Responsibility
//! - Report success/failure of constructing and mutating operations without
//!   using `Err` or panics for expected business failures.
//! - Carry a human-readable message on both variants and a payload on
//!   success only.
//!
//! # Invariants
//! - Exactly one of `is_success()` / `is_failure()` holds.
//! - `Failure` has no payload field, so a payload can never be read from it.
//! - `Outcome<()>` is the payload-less form used by plain mutators.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Two-variant result of a validated entity operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<T = ()> {
    /// Operation applied; `value` is fully constructed.
    Success { message: String, value: T },
    /// Operation rejected; entity state is unchanged.
    Failure { message: String },
}

impl Outcome<()> {
    /// Creates a payload-less success.
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
            value: (),
        }
    }
}

impl<T> Outcome<T> {
    /// Creates a success carrying `value`.
    pub fn with_value(message: impl Into<String>, value: T) -> Self {
        Self::Success {
            message: message.into(),
            value,
        }
    }

    /// Creates a failure with a user-facing reason.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Confirmation text on success, reason on failure.
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message } => message,
        }
    }

    /// Borrows the payload; `None` for failures.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// Consumes the outcome and returns the payload; `None` for failures.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// Converts into a std `Result`, keeping the failure message as the error.
    pub fn into_result(self) -> Result<T, OutcomeFailure> {
        match self {
            Self::Success { value, .. } => Ok(value),
            Self::Failure { message } => Err(OutcomeFailure(message)),
        }
    }

    /// Maps the success payload, keeping the message.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success { message, value } => Outcome::Success {
                message,
                value: f(value),
            },
            Self::Failure { message } => Outcome::Failure { message },
        }
    }
}

impl<T> From<ValidationFailure> for Outcome<T> {
    fn from(value: ValidationFailure) -> Self {
        Self::fail(value.to_string())
    }
}

/// Failure message lifted out of an `Outcome` by `into_result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeFailure(pub String);

impl Display for OutcomeFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for OutcomeFailure {}

/// Broad category of an expected business failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MissingRequiredField,
    NoChangeRequested,
    RuleViolated,
}

/// Typed reason behind a `Failure` outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    NameRequired,
    ImageUrlRequired,
    DepartmentRequired,
    NothingToUpdate,
    RuleViolated(String),
}

impl ValidationFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NameRequired | Self::ImageUrlRequired | Self::DepartmentRequired => {
                FailureKind::MissingRequiredField
            }
            Self::NothingToUpdate => FailureKind::NoChangeRequested,
            Self::RuleViolated(_) => FailureKind::RuleViolated,
        }
    }
}

impl Display for ValidationFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameRequired => write!(f, "name is required"),
            Self::ImageUrlRequired => write!(f, "image URL or path is required"),
            Self::DepartmentRequired => write!(f, "department is required"),
            Self::NothingToUpdate => write!(f, "nothing was provided to update"),
            Self::RuleViolated(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ValidationFailure {}
