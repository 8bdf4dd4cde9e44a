use chrono::NaiveDate;
use shared::models::calendar_date;

/// YYYY-MM-DD, as shown in the list table and the date input
pub fn format_iso(date: &NaiveDate) -> String {
    calendar_date::format(date)
}

/// Long form for the detail header (e.g., "January 15, 2024")
pub fn format_date_for_display(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
