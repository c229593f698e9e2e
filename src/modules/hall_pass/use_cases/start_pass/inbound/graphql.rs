use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::hall_pass::adapters::inbound::graphql_error::gql_error;
use crate::modules::hall_pass::core::session::Session;
use crate::modules::hall_pass::use_cases::start_pass::command::StartPass;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlSession {
    pub id: String,
    pub name: String,
    pub location_token: Option<String>,
    pub start_time: i64,
}

impl From<Session> for GqlSession {
    fn from(s: Session) -> Self {
        Self {
            id: s.id,
            name: s.name,
            location_token: s.location_token,
            start_time: s.start_time,
        }
    }
}

#[derive(Default)]
pub struct StartPassMutation;

#[Object]
impl StartPassMutation {
    async fn start_pass(
        &self,
        context: &Context<'_>,
        id: String,
        location_token: Option<String>,
    ) -> GqlResult<GqlSession> {
        let state = context.data_unchecked::<AppState>();
        let session = state
            .controller
            .start_pass(StartPass::new(&id, location_token.as_deref()))
            .await
            .map_err(gql_error)?;
        Ok(session.into())
    }
}
