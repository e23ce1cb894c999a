//! HTTP client for the booking backend.
//!
//! Endpoints:
//! - `GET {base}/available-times/{date}?duration={hours}` → `{ "available_times": [...] }`
//! - `GET {base}/bookings/{date}` → `[{ id, time, user_name?, user_phone?, ... }]`

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::error::{Result, WidgetError};
use crate::models::{AvailableTimesResponse, BookingEntry};

/// Tells the ngrok tunnel to skip its browser interstitial.
const NGROK_SKIP_HEADER: &str = "ngrok-skip-browser-warning";

/// Duration sent when the caller has nothing better.
pub const DEFAULT_DURATION_HOURS: u32 = 1;

/// The remote side the widget talks to.
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Bookable start times for `date` given the total requested hours.
    async fn available_times(&self, date: NaiveDate, duration_hours: u32) -> Result<Vec<String>>;

    /// Active bookings on `date`, in backend order.
    async fn bookings_for_date(&self, date: NaiveDate) -> Result<Vec<BookingEntry>>;
}

/// reqwest-backed [`BookingApi`].
#[derive(Debug, Clone)]
pub struct HttpBookingApi {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpBookingApi {
    pub fn new(base_url: Url, timeout: Duration) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(NGROK_SKIP_HEADER, HeaderValue::from_static("true"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { base_url, http })
    }

    /// Append path segments to the base URL (percent-encoding each one).
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let path = url.path().to_string();
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("request to {} failed: {}", path, e);
            WidgetError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("{} answered {}", path, status);
            return Err(WidgetError::from_status(status, &path));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("{}: unreadable body: {}", path, e);
            WidgetError::Server {
                status: status.as_u16(),
                message: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn available_times(&self, date: NaiveDate, duration_hours: u32) -> Result<Vec<String>> {
        let date = date.format("%Y-%m-%d").to_string();
        let mut url = self.endpoint(&["available-times", &date]);
        url.query_pairs_mut()
            .append_pair("duration", &duration_hours.to_string());

        let body: AvailableTimesResponse = self.get_json(url).await?;
        tracing::info!(
            "available times for {} ({}h): {}",
            date,
            duration_hours,
            body.available_times.len()
        );
        Ok(body.available_times)
    }

    async fn bookings_for_date(&self, date: NaiveDate) -> Result<Vec<BookingEntry>> {
        let date = date.format("%Y-%m-%d").to_string();
        let url = self.endpoint(&["bookings", &date]);
        self.get_json(url).await
    }
}

// ── Tests ──
