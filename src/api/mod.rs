//! Organization resource API.
//!
//! Calls never fail with `Err`: every outcome, transport failures included,
//! comes back as a [`Validation`] the page threads into its state.

mod memory;
mod types;
mod validation;

use thiserror::Error;
use uuid::Uuid;

pub use memory::{MemoryOrganizations, Operation};
pub use types::{
    FileRef, OrgField, Organization, UpdateErrors, UpdateOrganizationBody, User, UserSlim,
    UserType,
};
pub use validation::{validate_field, validate_update_body, MAX_TEXT_LEN};

use crate::ui::mvi::BoxFuture;
use crate::validation::Validation;

pub type ApiResult<T, E = ApiError> = Validation<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("organization {0} not found")]
    NotFound(Uuid),

    #[error("service unavailable: {0}")]
    Unavailable(String),
}

pub trait OrganizationApi: Send + Sync {
    fn read_one(&self, id: Uuid) -> BoxFuture<ApiResult<Organization>>;

    fn update(
        &self,
        id: Uuid,
        body: UpdateOrganizationBody,
    ) -> BoxFuture<ApiResult<Organization, UpdateErrors>>;

    /// Deactivate the organization. It is no longer readable afterwards.
    fn delete(&self, id: Uuid) -> BoxFuture<ApiResult<Organization>>;
}
