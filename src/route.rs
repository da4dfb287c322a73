//! Application routes and the global navigation messages pages emit.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use uuid::Uuid;

use crate::ui::mvi::{GlobalSink, Intent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Notice {
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileTab {
    Profile,
    Organizations,
    Notifications,
    AcceptedPolicies,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag", content = "value", rename_all = "camelCase")]
pub enum Route {
    Landing,
    SignIn,
    SignOut,
    Notice(Notice),
    #[serde(rename_all = "camelCase")]
    UserProfile { user_id: Uuid, tab: ProfileTab },
    OrgList,
    #[serde(rename_all = "camelCase")]
    OrgEdit { org_id: Uuid },
}

/// App-wide messages a page can emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalMsg<R = Route> {
    /// Navigate without leaving a history entry.
    ReplaceRoute(R),
    NewRoute(R),
}

impl<R: Send + 'static> Intent for GlobalMsg<R> {}

/// The routing service. Pages never call it directly; their global
/// messages reach it through [`route_sink`].
pub trait Navigator: Send {
    fn replace_route(&mut self, route: Route);
    fn new_route(&mut self, route: Route);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "route", rename_all = "camelCase")]
pub enum Navigation {
    Replace(Route),
    New(Route),
}

impl Navigation {
    pub fn route(&self) -> &Route {
        match self {
            Self::Replace(route) | Self::New(route) => route,
        }
    }
}

/// Navigator that only records what it was asked to do. Clones share the
/// record.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    history: Arc<Mutex<Vec<Navigation>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Navigation> {
        self.history.lock().clone()
    }

    pub fn last(&self) -> Option<Navigation> {
        self.history.lock().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn replace_route(&mut self, route: Route) {
        tracing::debug!(target: "marketframe::route", ?route, "replace route");
        self.history.lock().push(Navigation::Replace(route));
    }

    fn new_route(&mut self, route: Route) {
        tracing::debug!(target: "marketframe::route", ?route, "new route");
        self.history.lock().push(Navigation::New(route));
    }
}

/// Feed a runtime's global messages to a navigator.
pub fn route_sink<N: Navigator + 'static>(mut navigator: N) -> impl GlobalSink<GlobalMsg> {
    move |msg: GlobalMsg| match msg {
        GlobalMsg::ReplaceRoute(route) => navigator.replace_route(route),
        GlobalMsg::NewRoute(route) => navigator.new_route(route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_forwards_to_navigator_in_order() {
        let navigator = RecordingNavigator::new();
        let mut sink = route_sink(navigator.clone());

        sink.deliver(GlobalMsg::NewRoute(Route::OrgList));
        sink.deliver(GlobalMsg::ReplaceRoute(Route::Notice(Notice::NotFound)));

        assert_eq!(
            navigator.history(),
            vec![
                Navigation::New(Route::OrgList),
                Navigation::Replace(Route::Notice(Notice::NotFound)),
            ]
        );
    }

    #[test]
    fn route_serializes_tagged() {
        let id = Uuid::nil();
        let json = serde_json::to_value(Route::UserProfile {
            user_id: id,
            tab: ProfileTab::Organizations,
        })
        .unwrap();
        assert_eq!(json["tag"], "userProfile");
        assert_eq!(json["value"]["tab"], "organizations");
    }
}
