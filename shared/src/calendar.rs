//! Calendar grid generation for the reservation widget.
//!
//! The grid is Sunday-first and always covers whole weeks: trailing days of
//! the previous month, every day of the displayed month, then leading days
//! of the next month until the last row is complete. Rendering is a pure
//! function of the cursor, the selected date and "today", so the UI only
//! has to map each [`CalendarCell`] to markup.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

const KOREAN_WEEKDAYS: [&str; 7] = ["일요일", "월요일", "화요일", "수요일", "목요일", "금요일", "토요일"];

/// Column headers, Sunday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// The month currently shown in the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCursor {
    pub year: i32,
    /// 1-based month
    pub month: u32,
}

impl CalendarCursor {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Month heading, e.g. "2026년 10월"
    pub fn title(self) -> String {
        format!("{}년 {}월", self.year, self.month)
    }
}

/// Which part of the grid a cell belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarDayType {
    /// Trailing day of the previous month, shown dimmed
    PreviousMonth,
    CurrentMonth,
    /// Padding day from the next month completing the last week
    NextMonth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub day: u32,
    pub day_type: CalendarDayType,
    /// Only set for cells of the displayed month
    pub date: Option<NaiveDate>,
    pub is_disabled: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

impl CalendarCell {
    fn padding(day: u32, day_type: CalendarDayType) -> Self {
        Self {
            day,
            day_type,
            date: None,
            is_disabled: true,
            is_today: false,
            is_selected: false,
        }
    }

    pub fn is_current_month(&self) -> bool {
        self.day_type == CalendarDayType::CurrentMonth
    }

    /// Only enabled days of the displayed month react to clicks
    pub fn is_clickable(&self) -> bool {
        self.is_current_month() && !self.is_disabled && self.date.is_some()
    }

    /// CSS classes for the cell, in a stable order
    pub fn class_names(&self) -> Vec<&'static str> {
        let mut classes = vec!["calendar-day"];
        if !self.is_current_month() {
            classes.push("other-month");
        }
        if self.is_disabled {
            classes.push("disabled");
        }
        if self.is_today {
            classes.push("today");
        }
        if self.is_selected {
            classes.push("selected");
        }
        classes
    }
}

/// A fully laid out month grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub cursor: CalendarCursor,
    pub title: String,
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_day_of_week: u32,
    pub cells: Vec<CalendarCell>,
}

impl CalendarMonth {
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }

    pub fn selected_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_selected).count()
    }
}

/// Get days in a month (accounting for leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Weekday of the 1st as a column index (0 = Sunday)
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Number of cells needed to show whole weeks for the month
pub fn grid_cell_count(year: i32, month: u32) -> usize {
    let used = (first_weekday_offset(year, month) + days_in_month(year, month)) as usize;
    used.div_ceil(7) * 7
}

/// Lay out the grid for `cursor`, marking `today` and the selected date
pub fn render_month(
    cursor: CalendarCursor,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> CalendarMonth {
    let first_day = first_weekday_offset(cursor.year, cursor.month);
    let month_days = days_in_month(cursor.year, cursor.month);
    let prev = cursor.previous();
    let prev_month_days = days_in_month(prev.year, prev.month);

    log::debug!(
        "🗓️ CALENDAR: rendering {}/{} (offset {}, {} days)",
        cursor.month,
        cursor.year,
        first_day,
        month_days
    );

    let mut cells = Vec::with_capacity(grid_cell_count(cursor.year, cursor.month));

    for i in (0..first_day).rev() {
        cells.push(CalendarCell::padding(
            prev_month_days - i,
            CalendarDayType::PreviousMonth,
        ));
    }

    for day in 1..=month_days {
        let date = NaiveDate::from_ymd_opt(cursor.year, cursor.month, day);
        let (is_disabled, is_today, is_selected) = match date {
            Some(date) => (date < today, date == today, selected == Some(date)),
            None => (true, false, false),
        };
        cells.push(CalendarCell {
            day,
            day_type: CalendarDayType::CurrentMonth,
            date,
            is_disabled,
            is_today,
            is_selected,
        });
    }

    let used = cells.len();
    let remaining = used.div_ceil(7) * 7 - used;
    for day in 1..=remaining as u32 {
        cells.push(CalendarCell::padding(day, CalendarDayType::NextMonth));
    }

    CalendarMonth {
        cursor,
        title: cursor.title(),
        first_day_of_week: first_day,
        cells,
    }
}

/// Whether `date` can be booked relative to `today`
pub fn is_bookable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

pub fn korean_weekday(weekday: Weekday) -> &'static str {
    KOREAN_WEEKDAYS[weekday.num_days_from_sunday() as usize]
}

/// Long-form localized date, e.g. "2026년 10월 17일 토요일"
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}년 {}월 {}일 {}",
        date.year(),
        date.month(),
        date.day(),
        korean_weekday(date.weekday())
    )
}

/// Form value for a date input
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_cursor_wraps_year() {
        let january = CalendarCursor::new(2026, 1);
        assert_eq!(january.previous(), CalendarCursor::new(2025, 12));

        let december = CalendarCursor::new(2026, 12);
        assert_eq!(december.next(), CalendarCursor::new(2027, 1));
        assert_eq!(december.title(), "2026년 12월");
    }

    #[test]
    fn test_grid_is_whole_weeks_for_every_month() {
        let today = date(2000, 1, 1);
        for year in 1999..=2031 {
            for month in 1..=12 {
                let grid = render_month(CalendarCursor::new(year, month), None, today);
                let offset = first_weekday_offset(year, month) as usize;
                let expected = (offset + days_in_month(year, month) as usize).div_ceil(7) * 7;
                assert_eq!(grid.cells.len() % 7, 0, "{}/{}", month, year);
                assert_eq!(grid.cells.len(), expected, "{}/{}", month, year);
            }
        }
    }

    #[test]
    fn test_october_2026_layout() {
        // October 1st 2026 is a Thursday
        let grid = render_month(CalendarCursor::new(2026, 10), None, date(2026, 10, 17));
        assert_eq!(grid.first_day_of_week, 4);
        assert_eq!(grid.cells.len(), 35);
        assert_eq!(grid.title, "2026년 10월");

        let leading: Vec<u32> = grid.cells[..4].iter().map(|c| c.day).collect();
        assert_eq!(leading, vec![27, 28, 29, 30]);
        assert!(grid.cells[..4]
            .iter()
            .all(|c| c.day_type == CalendarDayType::PreviousMonth && c.is_disabled));
        assert!(grid
            .cells
            .iter()
            .all(|c| c.day_type != CalendarDayType::NextMonth));
        assert_eq!(grid.weeks().count(), 5);
    }

    #[test]
    fn test_february_starting_sunday_has_no_padding() {
        let grid = render_month(CalendarCursor::new(2026, 2), None, date(2026, 1, 1));
        assert_eq!(grid.first_day_of_week, 0);
        assert_eq!(grid.cells.len(), 28);
        assert!(grid.cells.iter().all(CalendarCell::is_current_month));
    }

    #[test]
    fn test_trailing_padding_numbers_from_one() {
        // August 1st 2026 is a Saturday: 6 + 31 = 37 cells -> 42
        let grid = render_month(CalendarCursor::new(2026, 8), None, date(2026, 1, 1));
        assert_eq!(grid.cells.len(), 42);
        let trailing: Vec<&CalendarCell> = grid
            .cells
            .iter()
            .filter(|c| c.day_type == CalendarDayType::NextMonth)
            .collect();
        assert_eq!(trailing.len(), 5);
        assert_eq!(trailing[0].day, 1);
        assert_eq!(trailing[4].day, 5);
        assert!(trailing.iter().all(|c| !c.is_clickable()));
    }

    #[test]
    fn test_past_days_are_disabled() {
        let today = date(2026, 10, 17);
        let grid = render_month(CalendarCursor::from_date(today), None, today);

        for cell in grid.cells.iter().filter(|c| c.is_current_month()) {
            let cell_date = cell.date.unwrap();
            if cell_date < today {
                assert!(cell.is_disabled);
                assert!(!cell.is_clickable());
            } else {
                assert!(cell.is_clickable());
            }
        }

        let today_cells: Vec<&CalendarCell> = grid.cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today_cells.len(), 1);
        assert_eq!(today_cells[0].day, 17);
        assert_eq!(today_cells[0].class_names(), vec!["calendar-day", "today"]);
    }

    #[test]
    fn test_previous_months_entirely_disabled() {
        let today = date(2026, 10, 17);
        let grid = render_month(CalendarCursor::new(2026, 9), None, today);
        assert!(grid.cells.iter().all(|c| !c.is_clickable()));
    }

    #[test]
    fn test_selected_date_marked_once() {
        let today = date(2026, 10, 17);
        let selected = date(2026, 10, 20);
        let grid = render_month(CalendarCursor::from_date(today), Some(selected), today);
        assert_eq!(grid.selected_count(), 1);

        let cell = grid.cells.iter().find(|c| c.is_selected).unwrap();
        assert_eq!(cell.date, Some(selected));
        assert_eq!(cell.class_names(), vec!["calendar-day", "selected"]);

        // A selection in another month is not marked here
        let next = render_month(CalendarCursor::new(2026, 11), Some(selected), today);
        assert_eq!(next.selected_count(), 0);
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date(date(2026, 10, 17)), "2026년 10월 17일 토요일");
        assert_eq!(format_long_date(date(2026, 2, 1)), "2026년 2월 1일 일요일");
    }

    #[test]
    fn test_iso_date_round_trip() {
        assert_eq!(format_iso_date(date(2026, 3, 5)), "2026-03-05");
        assert_eq!(parse_iso_date("2026-03-05"), Some(date(2026, 3, 5)));
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("2026-13-01"), None);
    }
}
