//! Booking widget core for the barbershop mini-app.
//!
//! The host (a Telegram Web App page, or the console harness) owns one
//! [`SelectionManager`] and one [`AdminPanel`], feeds UI events into them and
//! draws [`WidgetView`] / [`BookingsView`]. Network access goes through a
//! [`BookingApi`]; everything the host runtime provides goes through a
//! [`HostBridge`].

pub mod admin;
pub mod api;
pub mod bridge;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod error;
pub mod manager;
pub mod models;
pub mod selection;
pub mod texts;
pub mod view;

pub use admin::{AdminGate, AdminPanel, BookingsView};
pub use api::{BookingApi, HttpBookingApi};
pub use bridge::{HostBridge, Theme};
pub use config::WidgetConfig;
pub use error::{MissingField, WidgetError};
pub use manager::{Applied, AvailabilityRequest, Phase, SelectionManager, SlotsState};
pub use models::{BookingEntry, BookingPayload, Service};
pub use view::WidgetView;
