//! Admin panel: list bookings for a day.
//!
//! The password check runs on the client against a string the client
//! already holds, so anyone can read or skip it. It only keeps casual users
//! out of the panel; real access control belongs on the backend.

use chrono::NaiveDate;

use crate::api::BookingApi;
use crate::bridge::HostBridge;
use crate::models::BookingEntry;
use crate::texts;

#[derive(Debug, Clone)]
pub struct AdminGate {
    password: String,
}

impl AdminGate {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    pub fn check(&self, attempt: &str) -> bool {
        attempt == self.password
    }
}

/// One row of the admin listing.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRow {
    /// 1-based position in the day.
    pub position: usize,
    pub client_name: String,
    pub client_phone: String,
    pub time: String,
    pub id_label: String,
}

impl BookingRow {
    fn from_entry(position: usize, entry: &BookingEntry) -> Self {
        Self {
            position,
            client_name: entry
                .user_name
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| texts::UNKNOWN_CLIENT.into()),
            client_phone: entry
                .user_phone
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| texts::NO_PHONE.into()),
            time: entry.time.clone(),
            id_label: format!("ID: {}", entry.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingsView {
    /// Nothing requested yet.
    Idle,
    Loaded {
        date_label: String,
        total_label: String,
        rows: Vec<BookingRow>,
    },
    /// The day has no bookings; not an error.
    Empty {
        date_label: String,
        message: &'static str,
    },
    Failed {
        message: String,
    },
}

impl BookingsView {
    pub fn from_entries(date: NaiveDate, entries: &[BookingEntry]) -> Self {
        let date_label = texts::format_date(date);
        if entries.is_empty() {
            return BookingsView::Empty {
                date_label,
                message: texts::NO_BOOKINGS,
            };
        }
        BookingsView::Loaded {
            date_label,
            total_label: texts::bookings_total(entries.len()),
            rows: entries
                .iter()
                .enumerate()
                .map(|(i, e)| BookingRow::from_entry(i + 1, e))
                .collect(),
        }
    }
}

pub struct AdminPanel {
    gate: AdminGate,
    open: bool,
    date: NaiveDate,
    listing: BookingsView,
}

impl AdminPanel {
    /// `today` pre-fills the panel's date input.
    pub fn new(gate: AdminGate, today: NaiveDate) -> Self {
        Self {
            gate,
            open: false,
            date: today,
            listing: BookingsView::Idle,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn listing(&self) -> &BookingsView {
        &self.listing
    }

    /// Open the panel if `attempt` matches; alert otherwise.
    pub fn open<B: HostBridge + ?Sized>(&mut self, attempt: &str, bridge: &mut B) -> bool {
        if !self.gate.check(attempt) {
            tracing::warn!("admin panel: wrong password");
            bridge.show_alert(texts::WRONG_PASSWORD);
            return false;
        }
        self.open = true;
        tracing::info!("admin panel opened");
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Load the listing for `date` (or alert if no date was given).
    ///
    /// A closed panel does not touch the backend. Failures become a
    /// [`BookingsView::Failed`]; nothing is retried.
    pub async fn load_bookings<B: HostBridge + ?Sized>(
        &mut self,
        api: &dyn BookingApi,
        date: Option<NaiveDate>,
        bridge: &mut B,
    ) -> &BookingsView {
        if !self.open {
            tracing::warn!("admin: bookings requested while the panel is closed");
            return &self.listing;
        }
        let Some(date) = date else {
            bridge.show_alert(texts::PICK_ADMIN_DATE);
            return &self.listing;
        };

        self.date = date;
        self.listing = match api.bookings_for_date(date).await {
            Ok(entries) => {
                tracing::info!("admin: {} bookings on {}", entries.len(), date);
                BookingsView::from_entries(date, &entries)
            }
            Err(e) => {
                tracing::error!("admin: bookings for {}: {}", date, e);
                BookingsView::Failed {
                    message: format!("Xatolik: {}", e.user_message()),
                }
            }
        };
        &self.listing
    }
}

// ── Tests ──
