//! User-facing strings (Uzbek) and the small formatters that produce them.

use chrono::{Datelike, NaiveDate, Weekday};

// ── Errors ──

pub const NETWORK_ERROR: &str = "Serverga ulanib bo'lmadi. Internet aloqasini tekshiring.";
pub const SERVER_ERROR: &str = "Server xatoligi. Iltimos, keyinroq urinib ko'ring.";
pub const NOT_FOUND_ERROR: &str = "API topilmadi. URL ni tekshiring.";
pub const RETRY_HINT: &str = "Iltimos, qayta urinib ko'ring";

pub const PICK_DATE_AND_TIME: &str = "Iltimos, sana va vaqtni tanlang!";
pub const PICK_SERVICE: &str = "Iltimos, kamida bitta xizmat tanlang!";
pub const ALREADY_SENT: &str = "Bron allaqachon yuborilgan";

// ── Time slots ──

pub const NO_SLOTS: &str = "Bu kun uchun mavjud vaqt yo'q";
pub const NO_SLOTS_HINT: &str = "Boshqa kun yoki xizmat tanlang";

// ── Quick dates ──

pub const TODAY: &str = "Bugun";
pub const TOMORROW: &str = "Ertaga";

// ── Admin ──

pub const WRONG_PASSWORD: &str = "Noto'g'ri parol!";
pub const PICK_ADMIN_DATE: &str = "Iltimos, sanani tanlang!";
pub const NO_BOOKINGS: &str = "Bu sanada hech qanday bron yo'q";
pub const UNKNOWN_CLIENT: &str = "Noma'lum";
pub const NO_PHONE: &str = "Telefon ko'rsatilmagan";

const MONTHS: [&str; 12] = [
    "yanvar", "fevral", "mart", "aprel", "may", "iyun", "iyul", "avgust", "sentyabr", "oktyabr",
    "noyabr", "dekabr",
];

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "dushanba",
        Weekday::Tue => "seshanba",
        Weekday::Wed => "chorshanba",
        Weekday::Thu => "payshanba",
        Weekday::Fri => "juma",
        Weekday::Sat => "shanba",
        Weekday::Sun => "yakshanba",
    }
}

/// Long date form, e.g. `"yakshanba, 18-oktyabr, 2026-yil"`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{}, {}-{}, {}-yil",
        weekday_name(date.weekday()),
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Quick-date label: `"Bugun (…)"`.
pub fn format_labeled_date(label: &str, date: NaiveDate) -> String {
    format!("{} ({})", label, format_date(date))
}

/// `150000` → `"150 000 so'm"`.
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    format!("{} so'm", grouped)
}

pub fn format_hours(hours: u32) -> String {
    format!("{} soat", hours)
}

pub fn bookings_total(count: usize) -> String {
    format!("Jami {} ta bron", count)
}

// ── Tests ──
