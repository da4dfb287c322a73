//! Shared fixtures for the page and runtime tests.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use marketframe::api::{MemoryOrganizations, Organization, User, UserType};
use marketframe::route::{route_sink, Navigation, RecordingNavigator};
use marketframe::session::SharedState;
use marketframe::ui::mvi::RunOutcome;
use marketframe::ui::org_edit::{OrgEditIntent, OrgEditPage, OrgEditRuntime, OrgEditState, RouteParams};
use uuid::Uuid;

/// Latency that keeps API calls in flight across several queued intents.
pub const SLOW: Duration = Duration::from_millis(30);

pub fn vendor() -> User {
    User::new("Vera Vendor", UserType::Vendor)
}

pub fn admin() -> User {
    User::new("Ada Admin", UserType::Admin)
}

pub fn government() -> User {
    User::new("Gus Government", UserType::Government)
}

pub fn organization_owned_by(owner: &User) -> Organization {
    let mut org = Organization::new("Acme Consulting", "contact@acme.test");
    org.website_url = "https://acme.test".into();
    org.city = "Victoria".into();
    org.owner = Some(owner.slim());
    org
}

/// A started page plus everything needed to inspect it.
pub struct Harness {
    pub store: MemoryOrganizations,
    pub page: OrgEditPage,
    pub navigator: RecordingNavigator,
    pub runtime: OrgEditRuntime,
    pub org_id: Uuid,
}

impl Harness {
    /// Store seeded with an organization owned by `user`, page opened by
    /// `user`, init settled.
    pub async fn owner(user: User, latency: Duration) -> Self {
        let store = MemoryOrganizations::new().with_latency(latency);
        let org = store.insert(organization_owned_by(&user));
        Self::open(store, org.id, user).await
    }

    pub async fn open(store: MemoryOrganizations, org_id: Uuid, user: User) -> Self {
        let navigator = RecordingNavigator::new();
        let page = OrgEditPage::new(Arc::new(store.clone()));
        let mut runtime = page
            .start(
                RouteParams { org_id },
                SharedState::signed_in(user),
                route_sink(navigator.clone()),
            )
            .await;
        assert_eq!(runtime.run_until_idle().await, RunOutcome::Idle);
        Self {
            store,
            page,
            navigator,
            runtime,
            org_id,
        }
    }

    /// Dispatch `intents` in order, then drive the runtime to idle.
    pub async fn run(&mut self, intents: impl IntoIterator<Item = OrgEditIntent>) {
        for intent in intents {
            self.runtime.dispatch(intent);
        }
        assert_eq!(self.runtime.run_until_idle().await, RunOutcome::Idle);
    }

    /// Current valid page state. Panics when the page is invalid.
    pub fn valid(&self) -> OrgEditState {
        let state = self.runtime.state();
        let inner = state.as_valid().expect("page should be valid");
        OrgEditState::clone(inner)
    }

    pub fn history(&self) -> Vec<Navigation> {
        self.navigator.history()
    }
}
