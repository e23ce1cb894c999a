//! Date picker model: the month grid and the today/tomorrow shortcuts.

use chrono::{Datelike, FixedOffset, NaiveDate, TimeDelta, Utc};

use crate::texts;

/// Grid is at most six Sunday-first weeks.
const MAX_CELLS: usize = 42;
/// How far into the next month the grid reaches.
const NEXT_MONTH_DAYS: u32 = 14;

/// "Today" in the shop's timezone.
pub fn local_today(offset: FixedOffset) -> NaiveDate {
    Utc::now().with_timezone(&offset).date_naive()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarCell {
    /// Padding before the first day of the month.
    Blank,
    Day {
        date: NaiveDate,
        selectable: bool,
        is_today: bool,
        next_month: bool,
    },
}

/// Current month (past days disabled) followed by the start of next month.
pub fn month_grid(today: NaiveDate) -> Vec<CalendarCell> {
    let first = today.with_day(1).unwrap_or(today);
    let mut cells: Vec<CalendarCell> = (0..first.weekday().num_days_from_sunday())
        .map(|_| CalendarCell::Blank)
        .collect();

    let mut day = first;
    while day.month() == first.month() {
        cells.push(CalendarCell::Day {
            date: day,
            selectable: day >= today,
            is_today: day == today,
            next_month: false,
        });
        match day.succ_opt() {
            Some(next) => day = next,
            None => return cells,
        }
    }

    // `day` is now the 1st of next month.
    for _ in 0..NEXT_MONTH_DAYS {
        cells.push(CalendarCell::Day {
            date: day,
            selectable: true,
            is_today: false,
            next_month: true,
        });
        if cells.len() >= MAX_CELLS {
            break;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    cells
}

/// Shortcut buttons above the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickDate {
    Today,
    Tomorrow,
}

impl QuickDate {
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            QuickDate::Today => today,
            QuickDate::Tomorrow => today + TimeDelta::days(1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuickDate::Today => texts::TODAY,
            QuickDate::Tomorrow => texts::TOMORROW,
        }
    }
}

// ── Tests ──
