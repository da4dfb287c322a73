use std::sync::Arc;

use crate::api::OrganizationApi;
use crate::route::{GlobalMsg, ProfileTab, Route};
use crate::ui::mvi::{
    start_loading, stop_loading, update_component_child, update_global_component_child,
    Dispatcher, Immutable, Merge, Task, Ticket, Update,
};
use crate::ui::org_edit::intent::OrgEditIntent;
use crate::ui::org_edit::state::{
    deactivate_loading, editing_loading, org_form_lens, save_changes_loading, sidebar_lens,
    OrgEditState,
};
use crate::ui::org_form::{self, persist, ExtraBody, OrgFormState, PersistAction};
use crate::ui::sidebar;
use crate::validation::Validation;

const TARGET: &str = "marketframe::org_edit";

type PageTask = Task<OrgEditState, OrgEditIntent, GlobalMsg>;
type PageDispatcher = Dispatcher<OrgEditIntent, GlobalMsg>;
pub(crate) type PageUpdate = Update<OrgEditState, OrgEditIntent, GlobalMsg>;

/// Update over the valid page state.
pub(crate) fn update(
    api: &Arc<dyn OrganizationApi>,
    state: Immutable<OrgEditState>,
    intent: OrgEditIntent,
) -> PageUpdate {
    match intent {
        OrgEditIntent::StartEditing => start_editing(api, state),
        OrgEditIntent::CancelEditing => cancel_editing(state),
        OrgEditIntent::SaveChanges => save_changes(api, state),
        OrgEditIntent::Deactivate => deactivate(api, state),
        OrgEditIntent::OrgForm(msg) => update_global_component_child(
            state,
            &org_form_lens(),
            org_form::update,
            msg,
            OrgEditIntent::OrgForm,
        ),
        OrgEditIntent::Sidebar(msg) => update_component_child(
            state,
            &sidebar_lens(),
            sidebar::update,
            msg,
            OrgEditIntent::Sidebar,
        ),
    }
}

fn start_editing(api: &Arc<dyn OrganizationApi>, state: Immutable<OrgEditState>) -> PageUpdate {
    let mut ticket = Ticket::default();
    let next = start_loading(&state, editing_loading).with(|s| ticket = s.editing_seq.issue());

    let api = Arc::clone(api);
    let task: PageTask = Task::new(move |state: Immutable<OrgEditState>, _: PageDispatcher| {
        let pending = api.read_one(state.organization.id);
        async move {
            let result = pending.await;
            Merge::apply(move |latest: Immutable<OrgEditState>| {
                let latest = stop_loading(&latest, editing_loading);
                match result {
                    Validation::Valid(org) if latest.editing_seq.is_current(ticket) => {
                        latest.with(|s| {
                            s.is_editing = true;
                            s.org_form = Immutable::new(OrgFormState::from_organization(&org));
                            s.organization = org;
                        })
                    }
                    Validation::Valid(_) => {
                        tracing::debug!(target: TARGET, "stale edit fetch discarded");
                        latest
                    }
                    Validation::Invalid(err) => {
                        tracing::warn!(target: TARGET, error = %err, "could not start editing");
                        latest
                    }
                }
            })
        }
    });
    Update::with_task(next, task)
}

fn cancel_editing(state: Immutable<OrgEditState>) -> PageUpdate {
    // A pending edit fetch must not reopen the form once cancelled.
    let next = if state.editing_loading.is_loading() {
        state.with(|s| s.editing_seq.invalidate())
    } else {
        state
    };
    let task: PageTask = Task::apply(|latest: Immutable<OrgEditState>| {
        latest.with(|s| {
            s.is_editing = false;
            s.reset_form();
        })
    });
    Update::with_task(next, task)
}

fn save_changes(api: &Arc<dyn OrganizationApi>, state: Immutable<OrgEditState>) -> PageUpdate {
    let next = start_loading(&state, save_changes_loading);

    let api = Arc::clone(api);
    let task: PageTask = Task::new(move |state: Immutable<OrgEditState>, _: PageDispatcher| {
        let action = PersistAction::Update {
            state: state.org_form.clone(),
            org_id: state.organization.id,
            extra_body: ExtraBody {
                logo_image_file: state.organization.logo_image_file.as_ref().map(|file| file.id),
            },
        };
        let pending = persist(&*api, action);
        async move {
            let result = pending.await;
            Merge::apply(move |latest: Immutable<OrgEditState>| {
                let latest = stop_loading(&latest, save_changes_loading);
                match result {
                    Validation::Valid((form, org)) => latest.with(|s| {
                        s.is_editing = false;
                        s.organization = org;
                        s.org_form = form;
                    }),
                    Validation::Invalid(form) if latest.is_editing => {
                        latest.with(|s| s.org_form = form)
                    }
                    // The form was closed while the save was in flight.
                    Validation::Invalid(_) => {
                        tracing::debug!(target: TARGET, "stale save rejection discarded");
                        latest
                    }
                }
            })
        }
    });
    Update::with_task(next, task)
}

fn deactivate(api: &Arc<dyn OrganizationApi>, state: Immutable<OrgEditState>) -> PageUpdate {
    let next = start_loading(&state, deactivate_loading);

    let api = Arc::clone(api);
    let task: PageTask = Task::new(move |state: Immutable<OrgEditState>, dispatcher: PageDispatcher| {
        let pending = api.delete(state.organization.id);
        let destination = if state.organization.is_owned_by(&state.user) {
            Route::UserProfile {
                user_id: state.user.id,
                tab: ProfileTab::Organizations,
            }
        } else {
            Route::OrgList
        };
        async move {
            match pending.await {
                Validation::Valid(org) => {
                    tracing::info!(target: TARGET, id = %org.id, "organization deactivated");
                    dispatcher.dispatch_global(GlobalMsg::ReplaceRoute(destination));
                }
                Validation::Invalid(err) => {
                    tracing::warn!(target: TARGET, error = %err, "deactivation failed");
                }
            }
            Merge::apply(|latest: Immutable<OrgEditState>| stop_loading(&latest, deactivate_loading))
        }
    });
    Update::with_task(next, task)
}
