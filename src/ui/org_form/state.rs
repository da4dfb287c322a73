//! State for the organization form.

use serde::Serialize;
use uuid::Uuid;

use crate::api::{validate_field, OrgField, Organization, UpdateErrors, UpdateOrganizationBody};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub value: String,
    /// Messages from the last validation, client or server side.
    pub errors: Vec<String>,
}

/// One [`FormField`] per editable organization attribute, indexed by
/// [`OrgField::index`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrgFormState {
    fields: [FormField; OrgField::COUNT],
    /// Errors the server reported for the form as a whole.
    pub general_errors: Vec<String>,
}

impl UiState for OrgFormState {}

impl OrgFormState {
    /// Form reset to the organization's current values, no errors.
    pub fn from_organization(org: &Organization) -> Self {
        let mut state = Self::default();
        for field in OrgField::ALL {
            state.fields[field.index()].value = org.get(field).to_string();
        }
        state
    }

    pub fn field(&self, field: OrgField) -> &FormField {
        &self.fields[field.index()]
    }

    pub fn value(&self, field: OrgField) -> &str {
        &self.field(field).value
    }

    pub fn set_value(&mut self, field: OrgField, value: String) {
        self.fields[field.index()].value = value;
    }

    pub fn validate(&mut self, field: OrgField) {
        let slot = &mut self.fields[field.index()];
        slot.errors = validate_field(field, &slot.value);
    }

    pub fn validate_all(&mut self) {
        for field in OrgField::ALL {
            self.validate(field);
        }
    }

    /// Whether every current value passes the field validators.
    pub fn is_valid(&self) -> bool {
        OrgField::ALL
            .into_iter()
            .all(|field| validate_field(field, self.value(field)).is_empty())
    }

    pub fn has_errors(&self) -> bool {
        !self.general_errors.is_empty() || self.fields.iter().any(|f| !f.errors.is_empty())
    }

    /// Replace the error lists with the ones a rejected update reported.
    pub fn attach_errors(&mut self, errors: &UpdateErrors) {
        for field in OrgField::ALL {
            self.fields[field.index()].errors = errors.for_field(field).to_vec();
        }
        self.general_errors = errors.general.clone();
    }

    pub fn to_body(&self, logo_image_file: Option<Uuid>) -> UpdateOrganizationBody {
        OrgField::ALL.into_iter().fold(
            UpdateOrganizationBody {
                logo_image_file,
                ..UpdateOrganizationBody::default()
            },
            |body, field| body.set(field, self.value(field)),
        )
    }
}
