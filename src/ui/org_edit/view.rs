use serde::Serialize;

use crate::ui::org_edit::state::OrgEditState;
use crate::ui::org_form::{org_form_view, OrgFormView};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonView {
    pub label: &'static str,
    pub loading: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveBarView {
    pub save: ButtonView,
    pub cancel: ButtonView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgEditView {
    pub heading: String,
    /// Hidden while editing.
    pub edit_button: Option<ButtonView>,
    pub form: OrgFormView,
    pub form_disabled: bool,
    /// Only shown while editing.
    pub save_bar: Option<SaveBarView>,
    pub submit_errors: Vec<String>,
    pub deactivate_button: ButtonView,
}

pub(crate) fn render(state: &OrgEditState) -> OrgEditView {
    let is_editing_loading = state.editing_loading.is_loading();
    let is_save_changes_loading = state.save_changes_loading.is_loading();
    let is_deactivate_loading = state.deactivate_loading.is_loading();
    let is_loading = state.is_loading();
    let form_disabled = is_loading || !state.is_editing;

    let edit_button = (!state.is_editing).then_some(ButtonView {
        label: "Edit Organization",
        loading: is_editing_loading,
        disabled: is_loading,
    });
    let save_bar = state.is_editing.then(|| SaveBarView {
        save: ButtonView {
            label: "Save Changes",
            loading: is_save_changes_loading,
            disabled: !state.org_form.is_valid() || is_loading,
        },
        cancel: ButtonView {
            label: "Cancel",
            loading: false,
            disabled: is_loading,
        },
    });

    OrgEditView {
        heading: state.organization.legal_name.clone(),
        edit_button,
        form: org_form_view(&state.org_form, form_disabled),
        form_disabled,
        save_bar,
        submit_errors: state.submit_errors.clone(),
        deactivate_button: ButtonView {
            label: "Deactivate Organization",
            loading: is_deactivate_loading,
            disabled: is_loading,
        },
    }
}
