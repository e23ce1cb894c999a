//! Pure projection of the manager's state onto the widget panels.
//!
//! Nothing here mutates state; a renderer only needs to draw what it gets.

use crate::bridge::HostBridge;
use crate::manager::{SelectionManager, SlotsState};
use crate::texts;

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetView {
    /// Calendar and quick-date buttons.
    pub date_picker_visible: bool,
    pub date_label: Option<String>,
    pub services_visible: bool,
    /// Ids of the checked services, in check order.
    pub checked: Vec<String>,
    pub time_section: Option<TimeSectionView>,
    pub selected_info: Option<SelectedInfoView>,
    pub confirm_visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSectionView {
    pub date_label: String,
    pub grid: SlotGrid,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlotGrid {
    Loading,
    Times {
        times: Vec<String>,
        selected: Option<String>,
    },
    Empty {
        message: &'static str,
        hint: &'static str,
    },
    Failed {
        message: &'static str,
        hint: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedInfoView {
    pub date_label: String,
    pub time_range: String,
    pub lines: Vec<ServiceLine>,
    pub total_duration: String,
    pub total_price: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceLine {
    pub name: String,
    pub price: String,
}

impl WidgetView {
    /// Everything hidden except the admin panel.
    pub fn admin_only() -> Self {
        Self {
            date_picker_visible: false,
            date_label: None,
            services_visible: false,
            checked: Vec::new(),
            time_section: None,
            selected_info: None,
            confirm_visible: false,
        }
    }

    pub fn project<B: HostBridge>(manager: &SelectionManager<B>) -> Self {
        let selection = manager.selection();
        let date_label = manager.date_label().map(str::to_string);

        let grid = match manager.slots() {
            SlotsState::Hidden => None,
            SlotsState::Loading => Some(SlotGrid::Loading),
            SlotsState::Slots(times) => Some(SlotGrid::Times {
                times: times.clone(),
                selected: selection.time().map(str::to_string),
            }),
            SlotsState::Empty => Some(SlotGrid::Empty {
                message: texts::NO_SLOTS,
                hint: texts::NO_SLOTS_HINT,
            }),
            SlotsState::Failed(e) => Some(SlotGrid::Failed {
                message: e.user_message(),
                hint: texts::RETRY_HINT,
            }),
        };

        let time_section = match (&date_label, grid) {
            (Some(label), Some(grid)) if !selection.services().is_empty() => Some(TimeSectionView {
                date_label: label.clone(),
                grid,
            }),
            _ => None,
        };

        let selected_info = match (&date_label, selection.time_range()) {
            (Some(label), Some(range)) if !selection.services().is_empty() => {
                Some(SelectedInfoView {
                    date_label: label.clone(),
                    time_range: range,
                    lines: selection
                        .services()
                        .iter()
                        .map(|s| ServiceLine {
                            name: s.name.clone(),
                            price: texts::format_price(u64::from(s.price)),
                        })
                        .collect(),
                    total_duration: texts::format_hours(selection.total_duration()),
                    total_price: texts::format_price(selection.total_price()),
                })
            }
            _ => None,
        };

        Self {
            date_picker_visible: true,
            services_visible: selection.date().is_some(),
            checked: selection
                .services()
                .iter()
                .map(|s| s.service.clone())
                .collect(),
            confirm_visible: selected_info.is_some(),
            date_label,
            time_section,
            selected_info,
        }
    }
}

// ── Tests ──
