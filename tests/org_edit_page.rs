//! Edit-organization page driven through its runtime.

mod common;

use std::time::Duration;

use common::{admin, government, organization_owned_by, vendor, Harness, SLOW};
use marketframe::api::{MemoryOrganizations, OrgField, Operation};
use marketframe::route::{Navigation, Notice, ProfileTab, Route};
use marketframe::ui::mvi::{Dispatcher, Immutable};
use marketframe::ui::org_edit::{OrgEditIntent, OrgEditPageState};
use marketframe::ui::org_form::{OrgFormIntent, OrgFormState};
use marketframe::ui::sidebar::SidebarIntent;
use uuid::Uuid;

fn edit(field: OrgField, value: &str) -> OrgEditIntent {
    OrgEditIntent::OrgForm(OrgFormIntent::Edit {
        field,
        value: value.to_string(),
    })
}

// ============================================================================
// Init
// ============================================================================

#[tokio::test]
async fn vendor_opens_read_only_page_with_profile_sidebar() {
    let h = Harness::owner(vendor(), Duration::ZERO).await;
    let state = h.valid();

    assert!(!state.is_editing);
    assert!(!state.is_loading());
    assert_eq!(state.sidebar.links.len(), 4);
    assert!(h.history().is_empty());

    let page_state = h.runtime.state();
    assert_eq!(
        h.page.metadata(&page_state).title,
        "Acme Consulting — Organizations"
    );
    let view = h.page.view(&page_state).unwrap();
    assert_eq!(view.heading, "Acme Consulting");
    assert!(view.edit_button.is_some());
    assert!(view.save_bar.is_none());
    assert!(view.form_disabled);
}

#[tokio::test]
async fn admin_gets_empty_menu() {
    let h = Harness::owner(admin(), Duration::ZERO).await;
    assert!(h.valid().sidebar.links.is_empty());
}

#[tokio::test]
async fn government_user_is_sent_to_not_found() {
    let h = Harness::owner(government(), Duration::ZERO).await;
    let page_state = h.runtime.state();

    assert!(page_state.is_invalid());
    assert_eq!(
        h.history(),
        vec![Navigation::Replace(Route::Notice(Notice::NotFound))]
    );
    assert_eq!(h.page.metadata(&page_state).title, "Edit Organization");
    assert!(h.page.view(&page_state).is_none());
    assert!(h.page.sidebar_view(&page_state).is_none());
    assert_eq!(h.store.calls(Operation::ReadOne), 0);
}

#[tokio::test]
async fn missing_organization_is_sent_to_not_found() {
    let h = Harness::open(MemoryOrganizations::new(), Uuid::new_v4(), vendor()).await;

    assert!(h.runtime.state().is_invalid());
    assert_eq!(
        h.navigator.last(),
        Some(Navigation::Replace(Route::Notice(Notice::NotFound)))
    );
}

#[tokio::test]
async fn invalid_page_ignores_intents() {
    let mut h = Harness::owner(government(), Duration::ZERO).await;
    let before = h.runtime.state();

    h.run([OrgEditIntent::StartEditing, OrgEditIntent::Deactivate]).await;

    assert!(Immutable::ptr_eq(&before, &h.runtime.state()));
    assert_eq!(h.store.calls(Operation::ReadOne), 0);
    assert_eq!(h.store.calls(Operation::Delete), 0);
    assert_eq!(h.history().len(), 1);
}

// ============================================================================
// Editing
// ============================================================================

#[tokio::test]
async fn start_editing_counts_loading_and_returns_one_task() {
    let h = Harness::owner(vendor(), Duration::ZERO).await;
    let update = h.page.update();

    let (next, tasks) = update(h.runtime.state(), OrgEditIntent::StartEditing).into_parts();
    let state = next.as_valid().unwrap();
    assert_eq!(state.editing_loading.count(), 1);
    assert!(!state.is_editing);
    assert_eq!(tasks.len(), 1);
}

#[tokio::test]
async fn start_editing_refetches_and_opens_form() {
    let mut h = Harness::owner(vendor(), Duration::ZERO).await;
    let mut fresher = h.store.get(h.org_id).unwrap();
    fresher.city = "Nanaimo".into();
    h.store.insert(fresher);

    h.run([OrgEditIntent::StartEditing]).await;
    let state = h.valid();

    assert_eq!(state.editing_loading.count(), 0);
    assert!(state.is_editing);
    assert_eq!(state.organization.city, "Nanaimo");
    assert_eq!(state.org_form.value(OrgField::City), "Nanaimo");

    let view = h.page.view(&h.runtime.state()).unwrap();
    assert!(view.edit_button.is_none());
    assert!(!view.form_disabled);
    assert!(view.save_bar.is_some());
}

#[tokio::test]
async fn failed_fetch_only_stops_loading() {
    let mut h = Harness::owner(vendor(), Duration::ZERO).await;
    h.store.fail_next(Operation::ReadOne);

    h.run([OrgEditIntent::StartEditing]).await;
    let state = h.valid();

    assert_eq!(state.editing_loading.count(), 0);
    assert!(!state.is_editing);
}

#[tokio::test]
async fn cancel_while_not_editing_only_resets_form() {
    let mut h = Harness::owner(vendor(), Duration::ZERO).await;
    h.run([edit(OrgField::City, "Somewhere else")]).await;
    let before = h.valid();
    assert_eq!(before.org_form.value(OrgField::City), "Somewhere else");

    let update = h.page.update();
    let input = h.runtime.state();
    let (next, tasks) = update(input.clone(), OrgEditIntent::CancelEditing).into_parts();
    assert_eq!(next, input);
    assert_eq!(tasks.len(), 1);

    h.run([OrgEditIntent::CancelEditing]).await;
    let after = h.valid();

    let expected_form = OrgFormState::from_organization(&before.organization);
    assert_eq!(*after.org_form, expected_form);
    assert_eq!(after.is_editing, before.is_editing);
    assert_eq!(after.organization, before.organization);
    assert_eq!(after.sidebar, before.sidebar);
    assert_eq!(after.editing_loading, before.editing_loading);
}

#[tokio::test]
async fn cancel_discards_unsaved_edits() {
    let mut h = Harness::owner(vendor(), Duration::ZERO).await;
    h.run([OrgEditIntent::StartEditing]).await;
    h.run([
        edit(OrgField::LegalName, "Renamed"),
        OrgEditIntent::CancelEditing,
    ])
    .await;
    let state = h.valid();

    assert!(!state.is_editing);
    assert_eq!(state.org_form.value(OrgField::LegalName), "Acme Consulting");
    assert_eq!(h.store.get(h.org_id).unwrap().legal_name, "Acme Consulting");
}

#[tokio::test]
async fn cancel_beats_a_slow_edit_fetch() {
    let mut h = Harness::owner(vendor(), SLOW).await;

    h.run([OrgEditIntent::StartEditing, OrgEditIntent::CancelEditing])
        .await;
    let state = h.valid();

    assert!(!state.is_editing);
    assert_eq!(state.editing_loading.count(), 0);
    assert_eq!(h.store.calls(Operation::ReadOne), 2);
}

// ============================================================================
// Saving
// ============================================================================

#[tokio::test]
async fn invalid_form_stays_open_with_errors() {
    let mut h = Harness::owner(vendor(), Duration::ZERO).await;
    h.run([OrgEditIntent::StartEditing]).await;
    h.run([edit(OrgField::LegalName, ""), OrgEditIntent::SaveChanges])
        .await;
    let state = h.valid();

    assert!(state.is_editing);
    assert_eq!(state.save_changes_loading.count(), 0);
    assert!(!state.org_form.field(OrgField::LegalName).errors.is_empty());
    assert_eq!(h.store.calls(Operation::Update), 0);

    let view = h.page.view(&h.runtime.state()).unwrap();
    assert!(view.save_bar.unwrap().save.disabled);
}

#[tokio::test]
async fn rejected_update_attaches_server_errors() {
    let mut h = Harness::owner(vendor(), Duration::ZERO).await;
    h.run([OrgEditIntent::StartEditing]).await;
    h.run([edit(OrgField::City, "Nanaimo")]).await;
    h.store.fail_next(Operation::Update);

    h.run([OrgEditIntent::SaveChanges]).await;
    let state = h.valid();

    assert!(state.is_editing);
    assert_eq!(state.save_changes_loading.count(), 0);
    assert_eq!(state.org_form.general_errors.len(), 1);
    assert_eq!(state.org_form.value(OrgField::City), "Nanaimo");
    assert_eq!(h.store.get(h.org_id).unwrap().city, "Victoria");
}

#[tokio::test]
async fn cancel_discards_a_late_save_rejection() {
    let mut h = Harness::owner(vendor(), SLOW).await;
    h.run([OrgEditIntent::StartEditing]).await;
    h.run([edit(OrgField::City, "Nanaimo")]).await;
    h.store.fail_next(Operation::Update);

    h.run([OrgEditIntent::SaveChanges, OrgEditIntent::CancelEditing])
        .await;
    let state = h.valid();

    assert!(!state.is_editing);
    assert_eq!(state.save_changes_loading.count(), 0);
    assert!(state.org_form.general_errors.is_empty());
    assert_eq!(state.org_form.value(OrgField::City), "Victoria");
    assert_eq!(state.organization.city, "Victoria");
    assert_eq!(h.store.get(h.org_id).unwrap().city, "Victoria");
}

#[tokio::test]
async fn valid_save_closes_form_and_shows_saved_organization() {
    let mut h = Harness::owner(vendor(), Duration::ZERO).await;
    h.run([OrgEditIntent::StartEditing]).await;
    h.run([
        edit(OrgField::LegalName, "Acme Holdings"),
        OrgEditIntent::SaveChanges,
    ])
    .await;
    let state = h.valid();

    assert!(!state.is_editing);
    assert_eq!(state.save_changes_loading.count(), 0);
    assert_eq!(state.organization.legal_name, "Acme Holdings");
    assert_eq!(state.org_form.value(OrgField::LegalName), "Acme Holdings");
    assert_eq!(h.store.get(h.org_id).unwrap().legal_name, "Acme Holdings");
    assert_eq!(
        h.page.metadata(&h.runtime.state()).title,
        "Acme Holdings — Organizations"
    );
}

#[tokio::test]
async fn overlapping_saves_share_one_counter() {
    let mut h = Harness::owner(vendor(), SLOW).await;
    h.run([OrgEditIntent::StartEditing]).await;

    let update = h.page.update();
    let (once, _) = update(h.runtime.state(), OrgEditIntent::SaveChanges).into_parts();
    let (twice, tasks) = update(once, OrgEditIntent::SaveChanges).into_parts();
    assert_eq!(twice.as_valid().unwrap().save_changes_loading.count(), 2);
    assert_eq!(tasks.len(), 1);

    h.run([OrgEditIntent::SaveChanges, OrgEditIntent::SaveChanges])
        .await;
    let state = h.valid();
    assert_eq!(state.save_changes_loading.count(), 0);
    assert!(!state.is_loading());
    assert_eq!(h.store.calls(Operation::Update), 2);
}

// ============================================================================
// Deactivation
// ============================================================================

#[tokio::test]
async fn owner_lands_on_own_organizations_tab() {
    let user = vendor();
    let user_id = user.id;
    let mut h = Harness::owner(user, Duration::ZERO).await;

    h.run([OrgEditIntent::Deactivate]).await;

    assert_eq!(h.valid().deactivate_loading.count(), 0);
    assert!(!h.store.get(h.org_id).unwrap().active);
    assert_eq!(
        h.history(),
        vec![Navigation::Replace(Route::UserProfile {
            user_id,
            tab: ProfileTab::Organizations,
        })]
    );
}

#[tokio::test]
async fn non_owner_lands_on_organization_list() {
    let store = MemoryOrganizations::new();
    let org = store.insert(organization_owned_by(&vendor()));
    let mut h = Harness::open(store, org.id, admin()).await;

    h.run([OrgEditIntent::Deactivate]).await;

    assert_eq!(h.history(), vec![Navigation::Replace(Route::OrgList)]);
}

#[tokio::test]
async fn failed_deactivation_stays_put() {
    let mut h = Harness::owner(vendor(), Duration::ZERO).await;
    h.store.fail_next(Operation::Delete);

    h.run([OrgEditIntent::Deactivate]).await;

    assert_eq!(h.valid().deactivate_loading.count(), 0);
    assert!(h.history().is_empty());
    assert!(h.store.get(h.org_id).unwrap().active);
}

#[tokio::test]
async fn deactivate_merge_stops_loading() {
    let h = Harness::owner(vendor(), Duration::ZERO).await;
    let update = h.page.update();

    let (next, mut tasks) = update(h.runtime.state(), OrgEditIntent::Deactivate).into_parts();
    assert_eq!(next.as_valid().unwrap().deactivate_loading.count(), 1);

    let merge = tasks
        .remove(0)
        .run(next.clone(), Dispatcher::detached())
        .await;
    let settled: Immutable<OrgEditPageState> = merge.merge_into(next);
    assert_eq!(settled.as_valid().unwrap().deactivate_loading.count(), 0);
}

// ============================================================================
// Sidebar
// ============================================================================

#[tokio::test]
async fn sidebar_toggle_leaves_form_untouched() {
    let mut h = Harness::owner(vendor(), Duration::ZERO).await;
    let before = h.valid();

    h.run([OrgEditIntent::Sidebar(SidebarIntent::Toggle)]).await;
    let after = h.valid();

    assert_ne!(after.sidebar.is_open, before.sidebar.is_open);
    assert!(Immutable::ptr_eq(&before.org_form, &after.org_form));
    let view = h.page.sidebar_view(&h.runtime.state()).unwrap();
    assert_eq!(view.is_open, after.sidebar.is_open);
}

#[tokio::test]
async fn sidebar_intent_without_change_keeps_page_root() {
    let mut h = Harness::owner(vendor(), Duration::ZERO).await;
    let before = h.runtime.state();
    let published = h.runtime.subscribe();
    let update = h.page.update();

    let (next, tasks) =
        update(before.clone(), OrgEditIntent::Sidebar(SidebarIntent::SetOpen(false))).into_parts();
    assert!(Immutable::ptr_eq(&before, &next));
    assert!(tasks.is_empty());

    h.run([OrgEditIntent::Sidebar(SidebarIntent::SetOpen(false))])
        .await;
    assert!(Immutable::ptr_eq(&before, &h.runtime.state()));
    assert!(!published.has_changed().unwrap());
}
