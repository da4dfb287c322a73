use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::UserType;
use crate::route::{GlobalMsg, Notice, Route};
use crate::session::{is_user_type, SharedState};
use crate::ui::mvi::{Dispatcher, Immutable};
use crate::ui::org_edit::component::OrgEditPage;
use crate::ui::org_edit::intent::OrgEditIntent;
use crate::ui::org_edit::state::{OrgEditPageState, OrgEditState};
use crate::validation::Validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteParams {
    pub org_id: Uuid,
}

const ALLOWED: [UserType; 2] = [UserType::Vendor, UserType::Admin];

fn not_found(dispatcher: &Dispatcher<OrgEditIntent, GlobalMsg>) -> OrgEditPageState {
    dispatcher.dispatch_global(GlobalMsg::ReplaceRoute(Route::Notice(Notice::NotFound)));
    Validation::Invalid(())
}

impl OrgEditPage {
    /// Build the page state.
    ///
    /// Only vendors and admins may open the page. When the session does not
    /// qualify or the organization cannot be read, a redirect to the
    /// not-found notice is dispatched and the page is `Invalid` for good.
    pub async fn init(
        &self,
        params: RouteParams,
        shared: &SharedState,
        dispatcher: &Dispatcher<OrgEditIntent, GlobalMsg>,
    ) -> OrgEditPageState {
        let Some(user) = is_user_type(shared, &ALLOWED).cloned() else {
            tracing::debug!(target: "marketframe::org_edit", "session may not edit organizations");
            return not_found(dispatcher);
        };

        match self.api().read_one(params.org_id).await {
            Validation::Valid(organization) => {
                Validation::Valid(Immutable::new(OrgEditState::new(user, organization)))
            }
            Validation::Invalid(err) => {
                tracing::warn!(target: "marketframe::org_edit", error = %err, "organization unavailable");
                not_found(dispatcher)
            }
        }
    }
}
