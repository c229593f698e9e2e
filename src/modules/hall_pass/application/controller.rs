// Session controller: the single consumer of pass intents.
//
// Responsibilities
// - Hold settings, roster, ledger and the zero-or-one active session.
// - Run the pure deciders, write the affected blobs, then commit in memory.
// - Serialize every operation behind one lock so each intent is applied fully before the next.
//
// A store failure leaves the in-memory state as it was before the call.

use crate::modules::hall_pass::adapters::outbound::snapshots::{load_snapshot, save_snapshot};
use crate::modules::hall_pass::application::errors::ApplicationError;
use crate::modules::hall_pass::core::events::PassEvent;
use crate::modules::hall_pass::core::evolve::evolve;
use crate::modules::hall_pass::core::ledger::{Ledger, LogEntry};
use crate::modules::hall_pass::core::roster::Roster;
use crate::modules::hall_pass::core::session::Session;
use crate::modules::hall_pass::core::settings::{Settings, SettingsPatch};
use crate::modules::hall_pass::core::state::PassState;
use crate::modules::hall_pass::use_cases::end_pass::command::EndPass;
use crate::modules::hall_pass::use_cases::end_pass::decide::decide_end_pass;
use crate::modules::hall_pass::use_cases::start_pass::command::StartPass;
use crate::modules::hall_pass::use_cases::start_pass::decide::decide_start_pass;
use crate::modules::hall_pass::use_cases::view_status::view::PassStatus;
use crate::shared::core::clock::{Clock, STATUS_REFRESH_INTERVAL_MS};
use crate::shared::core::duration::format_mm_ss;
use crate::shared::infrastructure::persistent_store::{PersistentStore, StoreKey};
use chrono::TimeZone;
use serde::Serialize;
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Default)]
struct PassBook {
    settings: Settings,
    roster: Roster,
    ledger: Ledger,
    state: PassState,
}

pub struct SessionController {
    store: Arc<dyn PersistentStore>,
    clock: Arc<dyn Clock>,
    book: Mutex<PassBook>,
}

impl SessionController {
    /// Rehydrates the controller from the store. Absent blobs fall back to defaults,
    /// malformed ones fail the load.
    pub async fn load(
        store: Arc<dyn PersistentStore>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ApplicationError> {
        let settings = load_snapshot::<Settings>(&*store, StoreKey::Settings)
            .await?
            .unwrap_or_default();
        let roster = load_snapshot::<Roster>(&*store, StoreKey::Roster)
            .await?
            .unwrap_or_default();
        let ledger = load_snapshot::<Ledger>(&*store, StoreKey::Logs)
            .await?
            .unwrap_or_default();
        let session = load_snapshot::<Option<Session>>(&*store, StoreKey::Session)
            .await?
            .flatten();

        if let Some(session) = &session {
            info!(id = %session.id, started_at = session.start_time, "resuming active pass");
        }
        info!(
            roster = roster.len(),
            logs = ledger.len(),
            location = %settings.location_name,
            "pass book loaded"
        );

        Ok(Self {
            store,
            clock,
            book: Mutex::new(PassBook {
                settings,
                roster,
                ledger,
                state: PassState::from_session(session),
            }),
        })
    }

    pub async fn start_pass(&self, command: StartPass) -> Result<Session, ApplicationError> {
        let mut book = self.book.lock().await;
        let started = decide_start_pass(
            &book.state,
            &book.settings,
            &book.roster,
            command,
            self.clock.now(),
        )
        .inspect_err(|reason| warn!(%reason, "pass start rejected"))?;

        self.persist(StoreKey::Session, &started.session).await?;

        let session = started.session.clone();
        let state = std::mem::take(&mut book.state);
        book.state = evolve(state, PassEvent::PassStarted(started));
        info!(id = %session.id, name = %session.name, "pass started");
        Ok(session)
    }

    pub async fn end_pass(&self, command: EndPass) -> Result<LogEntry, ApplicationError> {
        let mut book = self.book.lock().await;
        let ended = decide_end_pass(&book.state, &book.settings, command, self.clock.now())
            .inspect_err(|reason| warn!(%reason, "pass end rejected"))?;

        let mut ledger = book.ledger.clone();
        ledger.append(ended.entry.clone());
        self.persist(StoreKey::Logs, &ledger).await?;
        if let Err(e) = self.store.clear(StoreKey::Session).await {
            error!(error = %e, key = %StoreKey::Session, "failed to clear active pass");
            // Put the ledger back so the still-active pass is not already logged.
            if let Err(rollback) = save_snapshot(&*self.store, StoreKey::Logs, &book.ledger).await {
                error!(error = %rollback, key = %StoreKey::Logs, "failed to roll back ledger");
            }
            return Err(e.into());
        }

        let entry = ended.entry.clone();
        book.ledger = ledger;
        let state = std::mem::take(&mut book.state);
        book.state = evolve(state, PassEvent::PassEnded(ended));
        info!(
            id = %entry.id,
            duration = %format_mm_ss(entry.duration_ms),
            "pass returned"
        );
        Ok(entry)
    }

    pub async fn delete_log_entry(&self, index: usize) -> Result<LogEntry, ApplicationError> {
        let mut book = self.book.lock().await;
        let mut ledger = book.ledger.clone();
        let removed = ledger.remove(index)?;
        self.persist(StoreKey::Logs, &ledger).await?;
        book.ledger = ledger;
        info!(index, id = %removed.id, "log entry deleted");
        Ok(removed)
    }

    pub async fn update_settings(&self, patch: SettingsPatch) -> Result<Settings, ApplicationError> {
        let mut book = self.book.lock().await;
        let mut settings = book.settings.clone();
        settings.update(patch);
        self.persist(StoreKey::Settings, &settings).await?;
        book.settings = settings.clone();
        info!(
            location = %settings.location_name,
            require_location_token = settings.require_location_token,
            allow_manual_identifier = settings.allow_manual_identifier,
            "settings updated"
        );
        Ok(settings)
    }

    pub async fn import_roster(&self, text: &str) -> Result<usize, ApplicationError> {
        let mut book = self.book.lock().await;
        let mut roster = Roster::new();
        let count = roster
            .import_csv(text)
            .inspect_err(|reason| warn!(%reason, "roster import rejected"))?;
        self.persist(StoreKey::Roster, &roster).await?;
        book.roster = roster;
        info!(entries = count, "roster imported");
        Ok(count)
    }

    pub async fn clear_roster(&self) -> Result<(), ApplicationError> {
        let mut book = self.book.lock().await;
        let mut roster = book.roster.clone();
        roster.clear();
        self.persist(StoreKey::Roster, &roster).await?;
        book.roster = roster;
        info!("roster cleared");
        Ok(())
    }

    pub async fn export_roster(&self) -> Result<String, ApplicationError> {
        let book = self.book.lock().await;
        book.roster
            .export_csv()
            .map_err(ApplicationError::RosterExport)
    }

    pub async fn export_logs<Tz>(&self, tz: &Tz) -> Result<String, ApplicationError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let book = self.book.lock().await;
        Ok(book.ledger.export_csv(tz)?)
    }

    pub async fn logs(&self) -> Vec<LogEntry> {
        self.book.lock().await.ledger.entries().to_vec()
    }

    pub async fn settings(&self) -> Settings {
        self.book.lock().await.settings.clone()
    }

    pub async fn status(&self) -> PassStatus {
        let book = self.book.lock().await;
        let session = book.state.active_session().cloned();
        let elapsed_ms = session
            .as_ref()
            .map(|s| self.clock.elapsed(s.start_time));
        PassStatus {
            occupied: session.is_some(),
            elapsed: elapsed_ms.map(format_mm_ss),
            elapsed_ms,
            session,
            settings: book.settings.clone(),
            roster_size: book.roster.len(),
            log_count: book.ledger.len(),
            refresh_interval_ms: STATUS_REFRESH_INTERVAL_MS,
        }
    }

    async fn persist<T: Serialize>(&self, key: StoreKey, value: &T) -> Result<(), ApplicationError> {
        save_snapshot(&*self.store, key, value)
            .await
            .inspect_err(|e| error!(error = %e, %key, "failed to persist"))?;
        Ok(())
    }
}
