use std::sync::Arc;

use crate::api::OrganizationApi;
use crate::route::GlobalMsg;
use crate::session::SharedState;
use crate::ui::mvi::{update_valid, view_valid, with_valid, GlobalSink, Immutable, Runtime, Update};
use crate::ui::org_edit::init::RouteParams;
use crate::ui::org_edit::intent::OrgEditIntent;
use crate::ui::org_edit::reducer;
use crate::ui::org_edit::state::{OrgEditPageState, OrgEditState};
use crate::ui::org_edit::view::{render, OrgEditView};
use crate::ui::page::PageMetadata;
use crate::ui::sidebar::{sidebar_view, SidebarView};

/// The "edit organization" page.
#[derive(Clone)]
pub struct OrgEditPage {
    api: Arc<dyn OrganizationApi>,
}

pub type OrgEditRuntime = Runtime<OrgEditPageState, OrgEditIntent, GlobalMsg>;

type PageStateUpdate = Update<OrgEditPageState, OrgEditIntent, GlobalMsg>;

impl OrgEditPage {
    pub fn new(api: Arc<dyn OrganizationApi>) -> Self {
        Self { api }
    }

    pub(crate) fn api(&self) -> &Arc<dyn OrganizationApi> {
        &self.api
    }

    /// Page update. An `Invalid` page ignores every intent.
    pub fn update(
        &self,
    ) -> impl Fn(Immutable<OrgEditPageState>, OrgEditIntent) -> PageStateUpdate + Send + 'static {
        let api = Arc::clone(&self.api);
        update_valid::<OrgEditState, (), OrgEditIntent, GlobalMsg, _>(move |state, intent| {
            reducer::update(&api, state, intent)
        })
    }

    pub fn view(&self, state: &OrgEditPageState) -> Option<OrgEditView> {
        view_valid(state, |valid| render(valid))
    }

    pub fn sidebar_view(&self, state: &OrgEditPageState) -> Option<SidebarView> {
        view_valid(state, |valid| sidebar_view(&valid.sidebar))
    }

    pub fn metadata(&self, state: &OrgEditPageState) -> PageMetadata {
        with_valid(
            state,
            |valid| PageMetadata::new(format!("{} — Organizations", valid.organization.legal_name)),
            PageMetadata::new("Edit Organization"),
        )
    }

    /// Run init and hand the page to a fresh runtime. Global messages,
    /// the init redirect included, go to `sink`.
    pub async fn start(
        &self,
        params: RouteParams,
        shared: SharedState,
        sink: impl GlobalSink<GlobalMsg> + 'static,
    ) -> OrgEditRuntime {
        let page = self.clone();
        OrgEditRuntime::boot(
            move |dispatcher| async move {
                Update::new(Immutable::new(page.init(params, &shared, &dispatcher).await))
            },
            self.update(),
            sink,
        )
        .await
    }
}
