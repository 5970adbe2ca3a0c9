//! View model for a client showing the dashboard.
//!
//! The screen reloads its summary when it is first shown and every time it
//! regains focus. Reloads are not cancelled; instead each reload takes a
//! [LoadTicket] and a result is only displayed if no reload started after it
//! has already been displayed.

use std::sync::{
    Mutex,
    atomic::{AtomicU64, Ordering},
};

use time::UtcOffset;

use crate::{
    Error,
    dashboard::summary::{DashboardSummary, load_and_summarize},
    storage::KeyValueStore,
    user::UserId,
};

/// What caused the dashboard to reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// The screen was shown for the first time.
    OnLoad,
    /// The user navigated back to the screen.
    OnRefocus,
}

/// What the dashboard currently displays.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    /// No summary has been displayed yet, show a spinner.
    Loading,
    /// The latest summary.
    Ready(DashboardSummary),
    /// The latest load failed. The user should be offered a retry.
    Failed {
        /// A message suitable for showing to the user.
        message: String,
    },
}

/// Identifies one reload of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

#[derive(Debug)]
struct Displayed {
    state: ScreenState,
    ticket: Option<LoadTicket>,
}

/// Holds the dashboard's display state across reloads.
#[derive(Debug)]
pub struct DashboardScreen {
    next_ticket: AtomicU64,
    displayed: Mutex<Displayed>,
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardScreen {
    /// Create a screen that is loading.
    pub fn new() -> Self {
        Self {
            next_ticket: AtomicU64::new(0),
            displayed: Mutex::new(Displayed {
                state: ScreenState::Loading,
                ticket: None,
            }),
        }
    }

    /// A copy of what the screen currently displays.
    ///
    /// # Errors
    ///
    /// Returns [Error::ScreenStateLockError] if the display state lock is poisoned.
    pub fn state(&self) -> Result<ScreenState, Error> {
        self.displayed
            .lock()
            .map(|displayed| displayed.state.clone())
            .map_err(|_| Error::ScreenStateLockError)
    }

    /// Start a reload triggered by `event`.
    pub fn begin(&self, event: DashboardEvent) -> LoadTicket {
        let ticket = LoadTicket(self.next_ticket.fetch_add(1, Ordering::SeqCst));
        tracing::debug!("starting dashboard reload {ticket:?} for {event:?}");
        ticket
    }

    /// Display the result of the reload identified by `ticket`.
    ///
    /// The result is discarded if the result of a later reload is already displayed.
    ///
    /// # Returns
    /// Whether the result was displayed.
    ///
    /// # Errors
    ///
    /// Returns [Error::ScreenStateLockError] if the display state lock is poisoned.
    pub fn finish(
        &self,
        ticket: LoadTicket,
        result: Result<DashboardSummary, Error>,
    ) -> Result<bool, Error> {
        let mut displayed = self
            .displayed
            .lock()
            .map_err(|_| Error::ScreenStateLockError)?;

        if displayed.ticket.is_some_and(|shown| shown > ticket) {
            tracing::debug!("discarding stale dashboard reload {ticket:?}");
            return Ok(false);
        }

        displayed.state = match result {
            Ok(summary) => ScreenState::Ready(summary),
            Err(error) => {
                tracing::error!("dashboard reload {ticket:?} failed: {error}");
                ScreenState::Failed {
                    message: error.user_message(),
                }
            }
        };
        displayed.ticket = Some(ticket);

        Ok(true)
    }

    /// Reload the dashboard for `user_id` from `store` and display the result.
    ///
    /// # Errors
    ///
    /// Returns [Error::ScreenStateLockError] if the display state lock is poisoned.
    /// Errors from loading the summary are displayed, not returned.
    pub fn refresh(
        &self,
        event: DashboardEvent,
        store: &impl KeyValueStore,
        user_id: &UserId,
        local_offset: UtcOffset,
    ) -> Result<ScreenState, Error> {
        let ticket = self.begin(event);
        let result = load_and_summarize(store, user_id, local_offset);
        self.finish(ticket, result)?;

        self.state()
    }
}
