//! Plain-text drawing of the widget views.

use barbershop_widget::calendar::CalendarCell;
use barbershop_widget::view::{SlotGrid, WidgetView};
use barbershop_widget::{BookingsView, Service};
use chrono::Datelike;

pub fn calendar(cells: &[CalendarCell]) -> String {
    let mut out = String::from(" Ya  Du  Se  Ch  Pa  Ju  Sh\n");
    for (i, cell) in cells.iter().enumerate() {
        let text = match cell {
            CalendarCell::Blank => "    ".to_string(),
            CalendarCell::Day {
                date,
                selectable,
                is_today,
                next_month,
            } => {
                let mark = if *is_today {
                    '*'
                } else if !selectable {
                    '-'
                } else if *next_month {
                    '+'
                } else {
                    ' '
                };
                format!("{:>3}{}", date.day(), mark)
            }
        };
        out.push_str(&text);
        if i % 7 == 6 {
            out.push('\n');
        }
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

pub fn services(catalog: &[Service], checked: &[String]) -> String {
    catalog
        .iter()
        .map(|s| {
            let mark = if checked.contains(&s.service) { "x" } else { " " };
            format!(
                "[{}] {:<12} {} ({} soat, {} so'm)",
                mark, s.service, s.name, s.duration_hours, s.price
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn widget(view: &WidgetView, catalog: &[Service]) -> String {
    let mut out = Vec::new();

    if let Some(label) = &view.date_label {
        out.push(format!("📅 {}", label));
    }
    if view.services_visible {
        out.push(services(catalog, &view.checked));
    }
    if let Some(section) = &view.time_section {
        out.push(format!("⏰ {}", section.date_label));
        match &section.grid {
            SlotGrid::Loading => out.push("   ...".into()),
            SlotGrid::Times { times, selected } => {
                let row: Vec<String> = times
                    .iter()
                    .map(|t| {
                        if selected.as_deref() == Some(t.as_str()) {
                            format!("[{}]", t)
                        } else {
                            format!(" {} ", t)
                        }
                    })
                    .collect();
                out.push(format!("   {}", row.join(" ")));
            }
            SlotGrid::Empty { message, hint } | SlotGrid::Failed { message, hint } => {
                out.push(format!("   {}\n   {}", message, hint));
            }
        }
    }
    if let Some(info) = &view.selected_info {
        out.push(format!("✅ {} · {}", info.date_label, info.time_range));
        for line in &info.lines {
            out.push(format!("   {} - {}", line.name, line.price));
        }
        out.push(format!("   {} · {}", info.total_duration, info.total_price));
    }
    if view.confirm_visible {
        out.push("   (confirm)".into());
    }

    out.join("\n")
}

pub fn bookings(view: &BookingsView) -> String {
    match view {
        BookingsView::Idle => String::new(),
        BookingsView::Empty {
            date_label,
            message,
        } => format!("{}\n{}", date_label, message),
        BookingsView::Failed { message } => format!("❌ {}", message),
        BookingsView::Loaded {
            date_label,
            total_label,
            rows,
        } => {
            let mut out = vec![date_label.clone(), total_label.clone()];
            for row in rows {
                out.push(format!(
                    "{:>2}. {} {} | {} | {}",
                    row.position, row.time, row.client_name, row.client_phone, row.id_label
                ));
            }
            out.join("\n")
        }
    }
}
