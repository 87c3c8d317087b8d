use chrono::{Datelike, NaiveDate, Utc};
use dioxus::prelude::*;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Month calendar card with prev/next paging. Day 5 carries the highlight,
/// matching the "February 5th" fixture styling of the task list.
#[component]
pub fn CalendarCard() -> Element {
    let mut month = use_signal(current_month_start);

    let first = month();
    let title = first.format("%B %Y").to_string();
    let blanks = first.weekday().num_days_from_sunday();
    let days = days_in_month(first);

    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }

        div {
            class: "card calendar-card",
            div {
                class: "card-header",
                h3 { "{title}" }
                div {
                    class: "calendar-nav",
                    button {
                        class: "icon-button",
                        title: "Previous month",
                        onclick: move |_| month.set(add_months(month(), -1)),
                        Icon { icon: FaChevronLeft, width: 12, height: 12 }
                    }
                    button {
                        class: "icon-button",
                        title: "Next month",
                        onclick: move |_| month.set(add_months(month(), 1)),
                        Icon { icon: FaChevronRight, width: 12, height: 12 }
                    }
                }
            }
            div {
                class: "calendar-grid",
                for day in WEEKDAYS {
                    span { class: "calendar-weekday", "{day}" }
                }
                for _ in 0..blanks {
                    span { class: "calendar-cell" }
                }
                for day in 1..=days {
                    span {
                        class: if day == 5 { "calendar-cell calendar-day highlighted" } else { "calendar-cell calendar-day" },
                        "{day}"
                    }
                }
            }
        }
    }
}

fn current_month_start() -> NaiveDate {
    month_start(Utc::now().date_naive())
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `delta` months away. `delta` may be negative.
fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = date.year() * 12 + date.month0() as i32 + delta;
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

fn days_in_month(date: NaiveDate) -> u32 {
    let start = month_start(date);
    add_months(start, 1).signed_duration_since(start).num_days() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_paging_wraps_across_years() {
        assert_eq!(add_months(date(2024, 12, 1), 1), date(2025, 1, 1));
        assert_eq!(add_months(date(2024, 1, 1), -1), date(2023, 12, 1));
        assert_eq!(add_months(date(2024, 6, 15), 0), date(2024, 6, 1));
        assert_eq!(add_months(date(2024, 3, 1), -15), date(2022, 12, 1));
    }

    #[test]
    fn month_lengths_respect_leap_years() {
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2023, 2, 10)), 28);
        assert_eq!(days_in_month(date(2024, 4, 1)), 30);
        assert_eq!(days_in_month(date(2024, 12, 31)), 31);
    }

    #[test]
    fn leading_blank_count_is_the_weekday_of_the_first() {
        // 2024-02-01 was a Thursday: Sun(0) .. Thu(4)
        assert_eq!(
            date(2024, 2, 1).weekday().num_days_from_sunday(),
            4
        );
        // 2024-09-01 was a Sunday, so no blanks
        assert_eq!(
            date(2024, 9, 1).weekday().num_days_from_sunday(),
            0
        );
    }
}
