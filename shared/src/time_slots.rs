use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const NO_DATE_PLACEHOLDER: &str = "날짜를 먼저 선택해주세요";

/// Static display label; there is no capacity model behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Limited,
    Full,
}

impl SlotStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SlotStatus::Available => "available",
            SlotStatus::Limited => "limited",
            SlotStatus::Full => "full",
        }
    }

    pub fn is_selectable(self) -> bool {
        self != SlotStatus::Full
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub time: &'static str,
    pub status: SlotStatus,
}

/// Daily seating times, identical for every date
pub const DAILY_SLOTS: [TimeSlot; 10] = [
    TimeSlot { time: "11:30", status: SlotStatus::Available },
    TimeSlot { time: "12:00", status: SlotStatus::Limited },
    TimeSlot { time: "12:30", status: SlotStatus::Available },
    TimeSlot { time: "13:00", status: SlotStatus::Full },
    TimeSlot { time: "17:30", status: SlotStatus::Available },
    TimeSlot { time: "18:00", status: SlotStatus::Available },
    TimeSlot { time: "18:30", status: SlotStatus::Limited },
    TimeSlot { time: "19:00", status: SlotStatus::Available },
    TimeSlot { time: "19:30", status: SlotStatus::Full },
    TimeSlot { time: "20:00", status: SlotStatus::Available },
];

pub fn find_slot(time: &str) -> Option<TimeSlot> {
    DAILY_SLOTS.iter().copied().find(|slot| slot.time == time)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlotView {
    pub time: &'static str,
    pub status: SlotStatus,
    pub is_selectable: bool,
    pub is_selected: bool,
}

impl TimeSlotView {
    pub fn class_names(&self) -> Vec<&'static str> {
        let mut classes = vec!["time-slot", self.status.as_str()];
        if self.is_selected {
            classes.push("selected");
        }
        classes
    }
}

/// What the time slot area should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeSlotPanel {
    Placeholder(&'static str),
    Slots(Vec<TimeSlotView>),
}

/// Slots for the selected date, with at most one highlighted
pub fn render_slots(selected_date: Option<NaiveDate>, selected_slot: Option<&str>) -> TimeSlotPanel {
    if selected_date.is_none() {
        return TimeSlotPanel::Placeholder(NO_DATE_PLACEHOLDER);
    }

    TimeSlotPanel::Slots(
        DAILY_SLOTS
            .iter()
            .map(|slot| TimeSlotView {
                time: slot.time,
                status: slot.status,
                is_selectable: slot.status.is_selectable(),
                is_selected: slot.status.is_selectable() && selected_slot == Some(slot.time),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_date() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2026, 10, 20)
    }

    #[test]
    fn test_placeholder_without_date() {
        assert_eq!(
            render_slots(None, None),
            TimeSlotPanel::Placeholder(NO_DATE_PLACEHOLDER)
        );
    }

    #[test]
    fn test_ten_slots_with_two_full() {
        let TimeSlotPanel::Slots(slots) = render_slots(some_date(), None) else {
            panic!("expected slots");
        };
        assert_eq!(slots.len(), 10);
        let full: Vec<&str> = slots
            .iter()
            .filter(|s| !s.is_selectable)
            .map(|s| s.time)
            .collect();
        assert_eq!(full, vec!["13:00", "19:30"]);
        assert!(slots.iter().all(|s| !s.is_selected));
    }

    #[test]
    fn test_highlight_is_exclusive() {
        let TimeSlotPanel::Slots(slots) = render_slots(some_date(), Some("18:30")) else {
            panic!("expected slots");
        };
        let selected: Vec<&TimeSlotView> = slots.iter().filter(|s| s.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].time, "18:30");
        assert_eq!(selected[0].class_names(), vec!["time-slot", "limited", "selected"]);
    }

    #[test]
    fn test_find_slot() {
        assert_eq!(find_slot("13:00").map(|s| s.status), Some(SlotStatus::Full));
        assert_eq!(find_slot("09:00"), None);
    }
}
