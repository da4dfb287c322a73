use crate::api::{Organization, User, UserType};
use crate::route::ProfileTab;
use crate::ui::mvi::{Component, Immutable, Lens, Loading, Sequence, UiState, ValidState};
use crate::ui::org_form::{OrgForm, OrgFormState};
use crate::ui::sidebar::{make_sidebar, MenuSidebar, SidebarState};

#[derive(Debug, Clone, PartialEq)]
pub struct OrgEditState {
    pub is_editing: bool,
    pub editing_loading: Loading,
    pub save_changes_loading: Loading,
    pub deactivate_loading: Loading,
    /// Tickets for start/cancel editing; only the newest fetch may open
    /// the form.
    pub editing_seq: Sequence,
    pub user: User,
    pub organization: Organization,
    pub org_form: Immutable<OrgFormState>,
    pub submit_errors: Vec<String>,
    pub sidebar: Immutable<SidebarState>,
}

impl UiState for OrgEditState {}

/// Page state: `Invalid` when the init preconditions failed.
pub type OrgEditPageState = ValidState<OrgEditState, ()>;

impl OrgEditState {
    /// Read-only page for `organization` as seen by `user`.
    pub fn new(user: User, organization: Organization) -> Self {
        let sidebar = if user.user_type == UserType::Vendor {
            make_sidebar(&user, &user, ProfileTab::Organizations)
        } else {
            MenuSidebar.init(Vec::new())
        };
        Self {
            is_editing: false,
            editing_loading: Loading::default(),
            save_changes_loading: Loading::default(),
            deactivate_loading: Loading::default(),
            editing_seq: Sequence::default(),
            org_form: Immutable::new(OrgForm.init(organization.clone())),
            submit_errors: Vec::new(),
            sidebar: Immutable::new(sidebar),
            user,
            organization,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.editing_loading.is_loading()
            || self.save_changes_loading.is_loading()
            || self.deactivate_loading.is_loading()
    }

    /// Form reset from the organization currently shown.
    pub fn reset_form(&mut self) {
        self.org_form = Immutable::new(OrgFormState::from_organization(&self.organization));
    }
}

pub(crate) fn editing_loading(state: &mut OrgEditState) -> &mut Loading {
    &mut state.editing_loading
}

pub(crate) fn save_changes_loading(state: &mut OrgEditState) -> &mut Loading {
    &mut state.save_changes_loading
}

pub(crate) fn deactivate_loading(state: &mut OrgEditState) -> &mut Loading {
    &mut state.deactivate_loading
}

fn org_form(state: &OrgEditState) -> &Immutable<OrgFormState> {
    &state.org_form
}

fn org_form_mut(state: &mut OrgEditState) -> &mut Immutable<OrgFormState> {
    &mut state.org_form
}

fn sidebar(state: &OrgEditState) -> &Immutable<SidebarState> {
    &state.sidebar
}

fn sidebar_mut(state: &mut OrgEditState) -> &mut Immutable<SidebarState> {
    &mut state.sidebar
}

pub(crate) fn org_form_lens() -> Lens<OrgEditState, OrgFormState> {
    Lens::field(org_form, org_form_mut)
}

pub(crate) fn sidebar_lens() -> Lens<OrgEditState, SidebarState> {
    Lens::field(sidebar, sidebar_mut)
}
