use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::hall_pass::adapters::inbound::graphql_error::gql_error;
use crate::modules::hall_pass::core::ledger::LogEntry;
use crate::modules::hall_pass::use_cases::end_pass::command::EndPass;
use crate::shared::core::duration::format_mm_ss;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlLogEntry {
    pub id: String,
    pub name: String,
    pub start_time: i64,
    pub end_time: i64,
    pub duration_ms: i64,
    pub duration: String,
    pub location_name: String,
}

impl From<LogEntry> for GqlLogEntry {
    fn from(e: LogEntry) -> Self {
        Self {
            duration: format_mm_ss(e.duration_ms),
            id: e.id,
            name: e.name,
            start_time: e.start_time,
            end_time: e.end_time,
            duration_ms: e.duration_ms,
            location_name: e.location_name,
        }
    }
}

#[derive(Default)]
pub struct EndPassMutation;

#[Object]
impl EndPassMutation {
    async fn end_pass(
        &self,
        context: &Context<'_>,
        id: String,
        location_token: Option<String>,
    ) -> GqlResult<GqlLogEntry> {
        let state = context.data_unchecked::<AppState>();
        let entry = state
            .controller
            .end_pass(EndPass::new(&id, location_token.as_deref()))
            .await
            .map_err(gql_error)?;
        Ok(entry.into())
    }
}
