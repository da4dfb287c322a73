use crate::api::OrgField;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgFormIntent {
    /// User typed into a field. The field is re-validated right away.
    Edit { field: OrgField, value: String },
    /// Field lost focus.
    Validate(OrgField),
}

impl Intent for OrgFormIntent {}
