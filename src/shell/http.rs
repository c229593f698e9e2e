use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::hall_pass::use_cases::end_pass::inbound::http as end_http;
use crate::modules::hall_pass::use_cases::manage_ledger::inbound::http as ledger_http;
use crate::modules::hall_pass::use_cases::manage_roster::inbound::http as roster_http;
use crate::modules::hall_pass::use_cases::scan::inbound::http as scan_http;
use crate::modules::hall_pass::use_cases::start_pass::inbound::http as start_http;
use crate::modules::hall_pass::use_cases::update_settings::inbound::http as settings_http;
use crate::modules::hall_pass::use_cases::view_status::inbound::http as status_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::build_schema(state.clone());
    Router::new()
        .route("/status", get(status_http::handle))
        .route("/start-pass", post(start_http::handle))
        .route("/end-pass", post(end_http::handle))
        .route("/logs", get(ledger_http::list))
        .route("/logs/export", get(ledger_http::export))
        .route("/logs/{index}", delete(ledger_http::delete))
        .route(
            "/settings",
            get(settings_http::get).patch(settings_http::patch),
        )
        .route("/roster", delete(roster_http::clear))
        .route("/roster/import", post(roster_http::import))
        .route("/roster/export", get(roster_http::export))
        .route("/scan", get(scan_http::status))
        .route("/scan/activate", post(scan_http::activate))
        .route("/scan/deactivate", post(scan_http::deactivate))
        .route("/scan/decoded", post(scan_http::decoded))
        .with_state(state)
        .merge(graphql::router(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
