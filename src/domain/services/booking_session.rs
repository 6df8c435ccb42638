use chrono::NaiveDate;
use tracing::debug;
use crate::domain::services::time_codec::TimeLabel;

/// What the customer currently has picked in the booking flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub date: Option<NaiveDate>,
    pub barber_id: Option<String>,
}

/// Handed out whenever the selection changes; the slot fetch it triggers
/// must present it back to [`BookingSession::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    selection: Selection,
}

impl FetchTicket {
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}

#[derive(Debug, Clone)]
struct AppliedSlots {
    generation: u64,
    selection: Selection,
    slots: Vec<TimeLabel>,
}

/// Client-side slot state for one customer.
///
/// Fetches are issued per selection change and may resolve in any order.
/// A result is applied only if it was requested for the selection that is
/// current now, and only if nothing newer for that selection was applied.
#[derive(Debug, Default)]
pub struct BookingSession {
    selection: Selection,
    generation: u64,
    applied: Option<AppliedSlots>,
}

impl BookingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select_date(&mut self, date: NaiveDate) -> FetchTicket {
        self.selection.date = Some(date);
        self.issue()
    }

    pub fn select_barber(&mut self, barber_id: Option<String>) -> FetchTicket {
        self.selection.barber_id = barber_id;
        self.issue()
    }

    /// Re-request slots for the unchanged selection, e.g. after a booking elsewhere.
    pub fn refresh(&mut self) -> FetchTicket {
        self.issue()
    }

    /// Returns `false` when the response is stale and was discarded.
    pub fn complete(&mut self, ticket: &FetchTicket, slots: Vec<TimeLabel>) -> bool {
        if ticket.selection != self.selection {
            debug!(generation = ticket.generation, "Discarding slots fetched for a previous selection");
            return false;
        }
        if let Some(applied) = &self.applied
            && applied.selection == ticket.selection
            && applied.generation > ticket.generation
        {
            debug!(generation = ticket.generation, "Discarding slots older than the applied result");
            return false;
        }

        self.applied = Some(AppliedSlots {
            generation: ticket.generation,
            selection: ticket.selection.clone(),
            slots,
        });
        true
    }

    /// `None` until a fetch for the current selection has landed.
    pub fn slots(&self) -> Option<&[TimeLabel]> {
        self.applied
            .as_ref()
            .filter(|applied| applied.selection == self.selection)
            .map(|applied| applied.slots.as_slice())
    }

    fn issue(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket {
            generation: self.generation,
            selection: self.selection.clone(),
        }
    }
}
