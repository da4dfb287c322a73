//! Saving the organization form.

use std::future::Future;

use uuid::Uuid;

use crate::api::{Organization, OrganizationApi};
use crate::ui::mvi::Immutable;
use crate::ui::org_form::state::OrgFormState;
use crate::validation::Validation;

/// Attributes the form does not edit but the update body must carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraBody {
    pub logo_image_file: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub enum PersistAction {
    Update {
        state: Immutable<OrgFormState>,
        org_id: Uuid,
        extra_body: ExtraBody,
    },
}

/// On success: a form reset from the saved organization, and the
/// organization. On rejection: the submitted form with the errors attached.
pub type PersistResult = Validation<(Immutable<OrgFormState>, Organization), Immutable<OrgFormState>>;

/// Submit the form. A form that fails client-side validation is returned
/// with its errors without calling the API.
///
/// The API call is issued before the returned future is first polled, so
/// the future does not borrow `api`.
pub fn persist(
    api: &dyn OrganizationApi,
    action: PersistAction,
) -> impl Future<Output = PersistResult> + Send + 'static {
    let PersistAction::Update {
        state,
        org_id,
        extra_body,
    } = action;

    let pending = if state.is_valid() {
        Some(api.update(org_id, state.to_body(extra_body.logo_image_file)))
    } else {
        None
    };

    async move {
        let Some(pending) = pending else {
            return Validation::Invalid(state.with(|form| form.validate_all()));
        };
        match pending.await {
            Validation::Valid(org) => {
                tracing::debug!(target: "marketframe::org_form", id = %org.id, "organization saved");
                let fresh = Immutable::new(OrgFormState::from_organization(&org));
                Validation::Valid((fresh, org))
            }
            Validation::Invalid(errors) => {
                tracing::debug!(target: "marketframe::org_form", %org_id, "organization update rejected");
                Validation::Invalid(state.with(|form| form.attach_errors(&errors)))
            }
        }
    }
}
