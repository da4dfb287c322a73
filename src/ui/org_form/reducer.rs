use crate::api::Organization;
use crate::route::GlobalMsg;
use crate::ui::mvi::{Component, Immutable, Update};
use crate::ui::org_form::intent::OrgFormIntent;
use crate::ui::org_form::state::OrgFormState;
use crate::ui::org_form::view::{org_form_view, OrgFormView};

/// Organization form component.
///
/// Its updates are synchronous; saving goes through
/// [`persist`](super::persist) from the page that owns the form.
pub struct OrgForm;

pub fn update(
    state: Immutable<OrgFormState>,
    intent: OrgFormIntent,
) -> Update<OrgFormState, OrgFormIntent, GlobalMsg> {
    let next = match intent {
        OrgFormIntent::Edit { field, value } => state.with(|form| {
            form.set_value(field, value);
            form.validate(field);
            form.general_errors.clear();
        }),
        OrgFormIntent::Validate(field) => state.with(|form| form.validate(field)),
    };
    Update::new(next)
}

impl Component for OrgForm {
    type Params = Organization;
    type State = OrgFormState;
    type Intent = OrgFormIntent;
    type Global = GlobalMsg;
    type View = OrgFormView;

    fn init(&self, organization: Organization) -> OrgFormState {
        OrgFormState::from_organization(&organization)
    }

    fn update(
        &self,
        state: Immutable<OrgFormState>,
        intent: OrgFormIntent,
    ) -> Update<OrgFormState, OrgFormIntent, GlobalMsg> {
        update(state, intent)
    }

    fn view(&self, state: &OrgFormState) -> OrgFormView {
        org_form_view(state, false)
    }
}
