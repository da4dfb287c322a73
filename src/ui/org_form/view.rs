use serde::Serialize;

use crate::api::OrgField;
use crate::ui::org_form::state::OrgFormState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub field: OrgField,
    pub label: &'static str,
    pub value: String,
    pub required: bool,
    pub errors: Vec<String>,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgFormView {
    pub fields: Vec<FieldView>,
    pub general_errors: Vec<String>,
}

pub fn org_form_view(state: &OrgFormState, disabled: bool) -> OrgFormView {
    OrgFormView {
        fields: OrgField::ALL
            .into_iter()
            .map(|field| {
                let slot = state.field(field);
                FieldView {
                    field,
                    label: field.label(),
                    value: slot.value.clone(),
                    required: field.is_required(),
                    errors: slot.errors.clone(),
                    disabled,
                }
            })
            .collect(),
        general_errors: state.general_errors.clone(),
    }
}
