use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use uuid::Uuid;

use super::types::{FileRef, Organization, UpdateErrors, UpdateOrganizationBody};
use super::validation::validate_update_body;
use super::{ApiError, ApiResult, OrganizationApi};
use crate::ui::mvi::BoxFuture;
use crate::validation::Validation;

const TARGET: &str = "marketframe::api";

/// API call kinds, for failure injection and call counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ReadOne,
    Update,
    Delete,
}

#[derive(Default)]
struct Inner {
    orgs: RwLock<HashMap<Uuid, Organization>>,
    failures: Mutex<HashMap<Operation, u32>>,
    calls: Mutex<HashMap<Operation, usize>>,
}

/// In-process organization store.
///
/// Cloning shares the store. Every call waits out the configured latency
/// first, which lets tests and the demo overlap requests.
#[derive(Clone, Default)]
pub struct MemoryOrganizations {
    inner: Arc<Inner>,
    latency: Duration,
}

impl MemoryOrganizations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn insert(&self, org: Organization) -> Organization {
        self.inner.orgs.write().insert(org.id, org.clone());
        org
    }

    /// Current record, inactive ones included.
    pub fn get(&self, id: Uuid) -> Option<Organization> {
        self.inner.orgs.read().get(&id).cloned()
    }

    /// Make the next call of `op` fail as if the service were unreachable.
    pub fn fail_next(&self, op: Operation) {
        *self.inner.failures.lock().entry(op).or_default() += 1;
    }

    pub fn calls(&self, op: Operation) -> usize {
        self.inner.calls.lock().get(&op).copied().unwrap_or(0)
    }

    async fn begin(&self, op: Operation) -> Result<(), ApiError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        *self.inner.calls.lock().entry(op).or_default() += 1;

        let mut failures = self.inner.failures.lock();
        match failures.get_mut(&op) {
            Some(pending) if *pending > 0 => {
                *pending -= 1;
                tracing::warn!(target: TARGET, ?op, "injected failure");
                Err(ApiError::Unavailable(format!("{op:?} failed")))
            }
            _ => Ok(()),
        }
    }

    fn active(&self, id: Uuid) -> ApiResult<Organization> {
        let found = self.inner.orgs.read().get(&id).filter(|org| org.active).cloned();
        match found {
            Some(org) => Validation::Valid(org),
            None => Validation::Invalid(ApiError::NotFound(id)),
        }
    }

    fn apply_update(&self, id: Uuid, body: &UpdateOrganizationBody) -> ApiResult<Organization, UpdateErrors> {
        if let Validation::Invalid(errors) = validate_update_body(body) {
            tracing::debug!(target: TARGET, %id, "update rejected");
            return Validation::Invalid(errors);
        }

        let mut orgs = self.inner.orgs.write();
        let Some(org) = orgs.get_mut(&id).filter(|org| org.active) else {
            return Validation::Invalid(UpdateErrors::general(ApiError::NotFound(id).to_string()));
        };
        org.apply(body);
        org.logo_image_file = match body.logo_image_file {
            None => None,
            Some(file_id) => match org.logo_image_file.take() {
                Some(current) if current.id == file_id => Some(current),
                _ => Some(FileRef {
                    id: file_id,
                    name: String::new(),
                }),
            },
        };
        Validation::Valid(org.clone())
    }

    fn deactivate(&self, id: Uuid) -> ApiResult<Organization> {
        let mut orgs = self.inner.orgs.write();
        match orgs.get_mut(&id).filter(|org| org.active) {
            Some(org) => {
                org.active = false;
                Validation::Valid(org.clone())
            }
            None => Validation::Invalid(ApiError::NotFound(id)),
        }
    }
}

impl OrganizationApi for MemoryOrganizations {
    fn read_one(&self, id: Uuid) -> BoxFuture<ApiResult<Organization>> {
        let this = self.clone();
        Box::pin(async move {
            if let Err(err) = this.begin(Operation::ReadOne).await {
                return Validation::Invalid(err);
            }
            tracing::debug!(target: TARGET, %id, "read organization");
            this.active(id)
        })
    }

    fn update(
        &self,
        id: Uuid,
        body: UpdateOrganizationBody,
    ) -> BoxFuture<ApiResult<Organization, UpdateErrors>> {
        let this = self.clone();
        Box::pin(async move {
            if let Err(err) = this.begin(Operation::Update).await {
                return Validation::Invalid(UpdateErrors::general(err.to_string()));
            }
            tracing::debug!(target: TARGET, %id, "update organization");
            this.apply_update(id, &body)
        })
    }

    fn delete(&self, id: Uuid) -> BoxFuture<ApiResult<Organization>> {
        let this = self.clone();
        Box::pin(async move {
            if let Err(err) = this.begin(Operation::Delete).await {
                return Validation::Invalid(err);
            }
            tracing::info!(target: TARGET, %id, "deactivate organization");
            this.deactivate(id)
        })
    }
}
