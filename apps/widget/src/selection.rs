use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::error::{MissingField, Result, WidgetError};
use crate::models::{BookingPayload, Service};

/// The user's in-progress choice for one selection cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    date: Option<NaiveDate>,
    time: Option<String>,
    services: Vec<Service>,
}

impl Selection {
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    /// Checked services in the order they were checked.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Start a new cycle on `date`: time and services are dropped.
    pub fn reset_for(&mut self, date: NaiveDate) {
        self.date = Some(date);
        self.time = None;
        self.services.clear();
    }

    /// Returns `false` if a service with the same id is already checked.
    pub fn add_service(&mut self, service: Service) -> bool {
        if self.contains(&service.service) {
            return false;
        }
        self.services.push(service);
        true
    }

    /// Returns `false` if no service with this id was checked.
    pub fn remove_service(&mut self, id: &str) -> bool {
        let before = self.services.len();
        self.services.retain(|s| s.service != id);
        self.services.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.services.iter().any(|s| s.service == id)
    }

    pub fn set_time(&mut self, time: String) {
        self.time = Some(time);
    }

    pub fn clear_time(&mut self) {
        self.time = None;
    }

    pub fn total_duration(&self) -> u32 {
        total_duration(&self.services)
    }

    pub fn total_price(&self) -> u64 {
        total_price(&self.services)
    }

    /// Display range for the picked time, e.g. `"14:00 - 16:00"`.
    pub fn time_range(&self) -> Option<String> {
        time_range(self.time.as_deref()?, self.total_duration())
    }

    /// Package the selection for submission.
    ///
    /// Date and time are checked before services, so an empty selection
    /// reports [`MissingField::DateOrTime`].
    pub fn to_payload(&self) -> Result<BookingPayload> {
        let (date, time) = match (self.date, self.time.as_ref()) {
            (Some(date), Some(time)) => (date, time.clone()),
            _ => return Err(WidgetError::IncompleteSelection(MissingField::DateOrTime)),
        };
        if self.services.is_empty() {
            return Err(WidgetError::IncompleteSelection(MissingField::Services));
        }

        Ok(BookingPayload {
            date,
            time,
            services: self.services.clone(),
            total_price: self.total_price(),
            total_duration: self.total_duration(),
        })
    }
}

// ── Totals ──

pub fn total_duration(services: &[Service]) -> u32 {
    services.iter().map(|s| s.duration_hours).sum()
}

pub fn total_price(services: &[Service]) -> u64 {
    services.iter().map(|s| u64::from(s.price)).sum()
}

// ── Time arithmetic ──

/// End of a booking starting at `start` ("HH:MM") and lasting `hours`.
///
/// Hour granularity only: minutes of `start` are dropped, so "14:30" + 2h
/// ends at "16:00". The hour is not wrapped past midnight.
pub fn end_time(start: &str, hours: u32) -> Option<String> {
    let start = NaiveTime::parse_from_str(start, "%H:%M").ok()?;
    Some(format!("{:02}:00", start.hour() + hours))
}

pub fn time_range(start: &str, hours: u32) -> Option<String> {
    end_time(start, hours).map(|end| format!("{} - {}", start, end))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn svc(id: &str, price: u32, hours: u32) -> Service {
        Service {
            name: id.to_uppercase(),
            service: id.into(),
            price,
            duration_hours: hours,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── services ──

    #[test]
    fn test_add_service_keeps_order() {
        let mut sel = Selection::default();
        assert!(sel.add_service(svc("beard", 30_000, 1)));
        assert!(sel.add_service(svc("haircut", 50_000, 1)));
        let ids: Vec<&str> = sel.services().iter().map(|s| s.service.as_str()).collect();
        assert_eq!(ids, vec!["beard", "haircut"]);
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let mut sel = Selection::default();
        assert!(sel.add_service(svc("haircut", 50_000, 1)));
        assert!(!sel.add_service(svc("haircut", 50_000, 1)));
        assert_eq!(sel.services().len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut sel = Selection::default();
        sel.add_service(svc("haircut", 50_000, 1));
        assert!(!sel.remove_service("beard"));
        assert_eq!(sel.services().len(), 1);
    }

    #[test]
    fn test_remove_present() {
        let mut sel = Selection::default();
        sel.add_service(svc("haircut", 50_000, 1));
        sel.add_service(svc("beard", 30_000, 1));
        assert!(sel.remove_service("haircut"));
        assert_eq!(sel.services()[0].service, "beard");
    }

    #[test]
    fn test_reset_for_clears_time_and_services() {
        let mut sel = Selection::default();
        sel.reset_for(date(2026, 10, 20));
        sel.add_service(svc("haircut", 50_000, 1));
        sel.set_time("14:00".into());

        sel.reset_for(date(2026, 10, 21));
        assert_eq!(sel.date(), Some(date(2026, 10, 21)));
        assert_eq!(sel.time(), None);
        assert!(sel.services().is_empty());
    }

    // ── totals ──

    #[test]
    fn test_totals_empty() {
        assert_eq!(total_duration(&[]), 0);
        assert_eq!(total_price(&[]), 0);
    }

    #[test]
    fn test_totals_sum() {
        let services = vec![svc("a", 50_000, 1), svc("b", 120_000, 2)];
        assert_eq!(total_duration(&services), 3);
        assert_eq!(total_price(&services), 170_000);
    }

    #[test]
    fn test_total_price_no_overflow() {
        let services = vec![svc("a", u32::MAX, 1), svc("b", u32::MAX, 1)];
        assert_eq!(total_price(&services), 2 * u64::from(u32::MAX));
    }

    // ── end_time / time_range ──

    #[test]
    fn test_end_time_two_hours() {
        assert_eq!(end_time("14:00", 2).as_deref(), Some("16:00"));
    }

    #[test]
    fn test_end_time_drops_minutes() {
        assert_eq!(end_time("14:30", 2).as_deref(), Some("16:00"));
    }

    #[test]
    fn test_end_time_pads_hour() {
        assert_eq!(end_time("07:00", 1).as_deref(), Some("08:00"));
    }

    #[test]
    fn test_end_time_past_midnight_not_wrapped() {
        assert_eq!(end_time("22:00", 3).as_deref(), Some("25:00"));
    }

    #[test]
    fn test_end_time_invalid() {
        assert_eq!(end_time("garbage", 1), None);
    }

    #[test]
    fn test_time_range() {
        assert_eq!(time_range("14:00", 2).as_deref(), Some("14:00 - 16:00"));
    }

    // ── to_payload ──

    #[test]
    fn test_payload_empty_selection_reports_date_or_time() {
        let sel = Selection::default();
        assert_eq!(
            sel.to_payload().unwrap_err(),
            WidgetError::IncompleteSelection(MissingField::DateOrTime)
        );
    }

    #[test]
    fn test_payload_missing_time() {
        let mut sel = Selection::default();
        sel.reset_for(date(2026, 10, 20));
        sel.add_service(svc("haircut", 50_000, 1));
        assert_eq!(
            sel.to_payload().unwrap_err(),
            WidgetError::IncompleteSelection(MissingField::DateOrTime)
        );
    }

    #[test]
    fn test_payload_missing_services() {
        let mut sel = Selection::default();
        sel.reset_for(date(2026, 10, 20));
        sel.set_time("14:00".into());
        assert_eq!(
            sel.to_payload().unwrap_err(),
            WidgetError::IncompleteSelection(MissingField::Services)
        );
    }

    #[test]
    fn test_payload_complete() {
        let mut sel = Selection::default();
        sel.reset_for(date(2026, 10, 20));
        sel.add_service(svc("haircut", 50_000, 1));
        sel.add_service(svc("color", 120_000, 2));
        sel.set_time("14:00".into());

        let payload = sel.to_payload().unwrap();
        assert_eq!(payload.date, date(2026, 10, 20));
        assert_eq!(payload.time, "14:00");
        assert_eq!(payload.services.len(), 2);
        assert_eq!(payload.total_price, 170_000);
        assert_eq!(payload.total_duration, 3);
    }
}
