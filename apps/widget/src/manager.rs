//! Selection & availability state manager.
//!
//! Owns the [`Selection`], turns UI events into transitions and decides when
//! availability has to be fetched. One instance per widget; it lives on the
//! host's event loop, so there is no locking.
//!
//! Availability fetches are split into request → fetch → apply so a host can
//! run the network call without holding the manager. Every date or service
//! change bumps a generation counter; a response carrying an older
//! generation is dropped instead of overwriting the newer state.

use chrono::{FixedOffset, NaiveDate};

use crate::api::BookingApi;
use crate::bridge::HostBridge;
use crate::calendar::{self, QuickDate};
use crate::error::{Result, WidgetError};
use crate::models::{BookingPayload, Service};
use crate::selection::Selection;
use crate::texts;

/// Where the current selection cycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoDate,
    DateSelected,
    ServicesChosen,
    AvailabilityLoaded,
    TimeSelected,
    Confirmed,
}

/// Content of the time-slot grid.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotsState {
    Hidden,
    Loading,
    Slots(Vec<String>),
    Empty,
    Failed(WidgetError),
}

/// One availability lookup, stamped with the generation it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRequest {
    pub generation: u64,
    pub date: NaiveDate,
    pub duration_hours: u32,
}

/// Outcome of [`SelectionManager::apply_availability`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    /// The selection moved on while the request was in flight.
    Stale,
}

type TodayFn = Box<dyn Fn() -> NaiveDate + Send + Sync>;

/// Run the network half of an availability lookup.
pub async fn fetch_availability(
    api: &dyn BookingApi,
    request: &AvailabilityRequest,
) -> Result<Vec<String>> {
    api.available_times(request.date, request.duration_hours).await
}

pub struct SelectionManager<B: HostBridge> {
    selection: Selection,
    slots: SlotsState,
    generation: u64,
    confirmed: bool,
    date_label: Option<String>,
    today: TodayFn,
    bridge: B,
}

impl<B: HostBridge> SelectionManager<B> {
    /// Manager whose "today" follows the wall clock at `offset`.
    pub fn new(bridge: B, offset: FixedOffset) -> Self {
        Self::with_today(bridge, move || calendar::local_today(offset))
    }

    pub fn with_today(bridge: B, today: impl Fn() -> NaiveDate + Send + Sync + 'static) -> Self {
        Self {
            selection: Selection::default(),
            slots: SlotsState::Hidden,
            generation: 0,
            confirmed: false,
            date_label: None,
            today: Box::new(today),
            bridge,
        }
    }

    // ── Accessors ──

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn slots(&self) -> &SlotsState {
        &self.slots
    }

    /// Header text for the picked date ("Bugun (…)" for quick dates).
    pub fn date_label(&self) -> Option<&str> {
        self.date_label.as_deref()
    }

    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }

    pub fn phase(&self) -> Phase {
        if self.confirmed {
            return Phase::Confirmed;
        }
        if self.selection.date().is_none() {
            return Phase::NoDate;
        }
        if self.selection.services().is_empty() {
            return Phase::DateSelected;
        }
        if self.selection.time().is_some() {
            return Phase::TimeSelected;
        }
        match self.slots {
            SlotsState::Slots(_) | SlotsState::Empty => Phase::AvailabilityLoaded,
            _ => Phase::ServicesChosen,
        }
    }

    // ── Transitions ──

    /// Start a new cycle on `date`. Dates before today are ignored.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        let today = self.today();
        if date < today {
            tracing::warn!("select_date: {} is before today ({})", date, today);
            return false;
        }

        self.selection.reset_for(date);
        self.slots = SlotsState::Hidden;
        self.confirmed = false;
        self.generation += 1;
        self.date_label = Some(texts::format_date(date));
        tracing::info!("date selected: {}", date);
        true
    }

    /// Today/tomorrow shortcut: same as [`select_date`](Self::select_date)
    /// plus a labelled header and a haptic tick.
    pub fn select_quick_date(&mut self, quick: QuickDate) -> bool {
        let date = quick.resolve(self.today());
        if !self.select_date(date) {
            return false;
        }
        self.date_label = Some(texts::format_labeled_date(quick.label(), date));
        self.bridge.haptic_selection_changed();
        true
    }

    /// Check or uncheck a service.
    ///
    /// Returns the availability lookup to run when the checked set changed
    /// and is non-empty. Any change drops the picked time, since it was
    /// validated against the previous total duration.
    pub fn toggle_service(&mut self, service: Service, selected: bool) -> Option<AvailabilityRequest> {
        if self.confirmed {
            tracing::warn!("toggle_service: cycle already confirmed");
            return None;
        }
        let Some(date) = self.selection.date() else {
            tracing::warn!("toggle_service: no date selected");
            return None;
        };

        self.bridge.haptic_selection_changed();

        let changed = if selected {
            self.selection.add_service(service)
        } else {
            self.selection.remove_service(&service.service)
        };
        if !changed {
            return None;
        }

        self.generation += 1;
        self.selection.clear_time();

        if self.selection.services().is_empty() {
            self.slots = SlotsState::Hidden;
            return None;
        }

        self.slots = SlotsState::Loading;
        let request = AvailabilityRequest {
            generation: self.generation,
            date,
            duration_hours: self.selection.total_duration(),
        };
        tracing::info!(
            "services: {}, requesting {}h on {}",
            self.selection.services().len(),
            request.duration_hours,
            request.date
        );
        Some(request)
    }

    /// Feed a finished lookup back in. Stale responses change nothing.
    pub fn apply_availability(
        &mut self,
        request: &AvailabilityRequest,
        result: Result<Vec<String>>,
    ) -> Applied {
        if request.generation != self.generation {
            tracing::debug!(
                "dropping stale availability (gen {} != {})",
                request.generation,
                self.generation
            );
            return Applied::Stale;
        }

        self.slots = match result {
            Ok(times) if times.is_empty() => SlotsState::Empty,
            Ok(times) => SlotsState::Slots(times),
            Err(e) => {
                tracing::error!("availability for {}: {}", request.date, e);
                self.bridge.show_alert(e.user_message());
                SlotsState::Failed(e)
            }
        };
        Applied::Current
    }

    /// Toggle a service and, if that calls for it, fetch and apply
    /// availability in one go.
    pub async fn toggle_service_and_refresh(
        &mut self,
        api: &dyn BookingApi,
        service: Service,
        selected: bool,
    ) -> Option<Applied> {
        let request = self.toggle_service(service, selected)?;
        let result = fetch_availability(api, &request).await;
        Some(self.apply_availability(&request, result))
    }

    /// Pick a start time. Only times from the latest loaded grid are accepted.
    pub fn select_time(&mut self, time: &str) -> bool {
        if self.confirmed {
            tracing::warn!("select_time: cycle already confirmed");
            return false;
        }
        let offered = matches!(&self.slots, SlotsState::Slots(times) if times.iter().any(|t| t == time));
        if !offered {
            tracing::warn!("select_time: {} was not offered", time);
            return false;
        }

        self.selection.set_time(time.to_string());
        self.bridge.haptic_selection_changed();
        tracing::info!(
            "time selected: {}",
            self.selection.time_range().unwrap_or_default()
        );
        true
    }

    pub fn build_booking_payload(&self) -> Result<BookingPayload> {
        self.selection.to_payload()
    }

    /// Hand the booking to the host. Fire-and-forget: nothing comes back.
    ///
    /// An incomplete selection is reported with an alert and leaves the
    /// state untouched. Once sent, further calls send nothing until a new
    /// date starts the next cycle.
    pub fn confirm(&mut self) -> Result<BookingPayload> {
        if self.confirmed {
            tracing::warn!("confirm: booking already sent for this cycle");
            return Err(WidgetError::AlreadyConfirmed);
        }

        let payload = match self.build_booking_payload() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("confirm blocked: {}", e);
                self.bridge.show_alert(e.user_message());
                return Err(e);
            }
        };

        let data = serde_json::to_string(&payload).map_err(|e| {
            tracing::error!("confirm: cannot encode booking: {}", e);
            WidgetError::Encode(e.to_string())
        })?;
        self.bridge.send_data(&data);
        self.confirmed = true;
        tracing::info!(
            "booking sent: {} {} ({} services, {}h)",
            payload.date,
            payload.time,
            payload.services.len(),
            payload.total_duration
        );
        Ok(payload)
    }
}

// ── Tests ──
