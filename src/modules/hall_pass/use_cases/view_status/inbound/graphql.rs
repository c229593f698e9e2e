use async_graphql::{Context, Object, SimpleObject};

use crate::modules::hall_pass::core::settings::Settings;
use crate::modules::hall_pass::use_cases::end_pass::inbound::graphql::GqlLogEntry;
use crate::modules::hall_pass::use_cases::start_pass::inbound::graphql::GqlSession;
use crate::modules::hall_pass::use_cases::view_status::view::PassStatus;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlSettings {
    pub location_name: String,
    pub require_location_token: bool,
    pub allow_manual_identifier: bool,
}

impl From<Settings> for GqlSettings {
    fn from(s: Settings) -> Self {
        Self {
            location_name: s.location_name,
            require_location_token: s.require_location_token,
            allow_manual_identifier: s.allow_manual_identifier,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlPassStatus {
    pub occupied: bool,
    pub session: Option<GqlSession>,
    pub elapsed_ms: Option<i64>,
    pub elapsed: Option<String>,
    pub settings: GqlSettings,
    pub roster_size: i64,
    pub log_count: i64,
    pub refresh_interval_ms: i64,
}

impl From<PassStatus> for GqlPassStatus {
    fn from(s: PassStatus) -> Self {
        Self {
            occupied: s.occupied,
            session: s.session.map(Into::into),
            elapsed_ms: s.elapsed_ms,
            elapsed: s.elapsed,
            settings: s.settings.into(),
            roster_size: s.roster_size as i64,
            log_count: s.log_count as i64,
            refresh_interval_ms: s.refresh_interval_ms as i64,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn status(&self, context: &Context<'_>) -> GqlPassStatus {
        let state = context.data_unchecked::<AppState>();
        state.controller.status().await.into()
    }

    async fn logs(&self, context: &Context<'_>) -> Vec<GqlLogEntry> {
        let state = context.data_unchecked::<AppState>();
        state
            .controller
            .logs()
            .await
            .into_iter()
            .map(Into::into)
            .collect()
    }
}
