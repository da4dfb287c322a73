//! Two-variant result shared by the resource API and page state.

use serde::{Deserialize, Serialize};

/// Either a usable value or the reason it is not usable.
///
/// Unlike `Result`, `Invalid` is an expected outcome: API calls return it for
/// not-found and validation failures, and pages use it for a terminal
/// "never rendered" state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag", content = "value", rename_all = "camelCase")]
pub enum Validation<T, E> {
    Valid(T),
    Invalid(E),
}

impl<T, E> Validation<T, E> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn as_valid(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    pub fn as_invalid(&self) -> Option<&E> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(error) => Some(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validation<U, E> {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(error) => Validation::Invalid(error),
        }
    }

    pub fn map_invalid<F>(self, f: impl FnOnce(E) -> F) -> Validation<T, F> {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(error) => Validation::Invalid(f(error)),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::Invalid(error),
        }
    }
}
