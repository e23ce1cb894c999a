use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Catalog ──

/// A bookable service as offered in the service picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    /// Stable identifier; two services with the same id are the same service.
    pub service: String,
    pub price: u32,
    #[serde(rename = "duration")]
    pub duration_hours: u32,
}

// ── Outbound booking ──

/// What gets handed to the host bridge on confirm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingPayload {
    pub date: NaiveDate,
    pub time: String,
    pub services: Vec<Service>,
    pub total_price: u64,
    pub total_duration: u32,
}

// ── API response types ──

#[derive(Debug, Deserialize)]
pub struct AvailableTimesResponse {
    #[serde(default)]
    pub available_times: Vec<String>,
}

/// One row of `GET /bookings/{date}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookingEntry {
    pub id: i64,
    pub time: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_phone: Option<String>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub total_duration: Option<u32>,
    #[serde(default)]
    pub services: Vec<BookedService>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookedService {
    pub service_name: String,
    pub service_code: String,
    pub price: f64,
    pub duration: u32,
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_uses_duration_wire_name() {
        let service = Service {
            name: "Soch olish".into(),
            service: "haircut".into(),
            price: 50_000,
            duration_hours: 1,
        };
        let json = serde_json::to_value(&service).unwrap();
        assert_eq!(json["duration"], 1);
        assert!(json.get("duration_hours").is_none());
    }

    #[test]
    fn test_payload_date_serializes_as_iso() {
        let payload = BookingPayload {
            date: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
            time: "14:00".into(),
            services: vec![],
            total_price: 0,
            total_duration: 0,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["date"], "2026-10-20");
        assert_eq!(json["time"], "14:00");
    }

    #[test]
    fn test_available_times_ignores_extra_keys() {
        let body = r#"{"available_times":["09:00","10:00"],"date":"2026-10-20","duration":2}"#;
        let parsed: AvailableTimesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.available_times, vec!["09:00", "10:00"]);
    }

    #[test]
    fn test_booking_entry_minimal_row() {
        let body = r#"{"id":7,"time":"11:00"}"#;
        let entry: BookingEntry = serde_json::from_str(body).unwrap();
        assert_eq!(entry.id, 7);
        assert!(entry.user_name.is_none());
        assert!(entry.services.is_empty());
    }

    #[test]
    fn test_booking_entry_full_row() {
        let body = r#"{
            "id": 3, "date": "2026-10-20", "time": "15:00",
            "user_name": "Ali", "user_phone": "+998901234567",
            "total_price": 80000.0, "total_duration": 2,
            "services": [{"service_name":"Soch olish","service_code":"haircut","price":50000.0,"duration":1}]
        }"#;
        let entry: BookingEntry = serde_json::from_str(body).unwrap();
        assert_eq!(entry.user_name.as_deref(), Some("Ali"));
        assert_eq!(entry.total_duration, Some(2));
        assert_eq!(entry.services[0].service_code, "haircut");
    }
}
