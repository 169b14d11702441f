//! Reservation widget state: calendar cursor, date/slot selection, the
//! booking form and its submission.
//!
//! [`ReservationController`] owns everything the widget mutates. Handlers
//! call into it and re-render from the render instructions it returns;
//! nothing here touches the page.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{self, CalendarCursor, CalendarMonth};
use crate::draft::ReservationDraft;
use crate::error::ReservationError;
use crate::time_slots::{self, TimeSlotPanel};

pub const NO_DATE_LABEL: &str = "날짜를 선택해주세요";

/// Party size, always within `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GuestCount(u8);

impl GuestCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: u8 = 2;

    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Step by `delta`, saturating at the bounds
    pub fn apply(self, delta: i32) -> Self {
        Self::new(self.0 as i64 + delta as i64)
    }

    /// Parse an input value, falling back to the default when unparseable
    pub fn parse_or_default(value: &str) -> Self {
        value
            .trim()
            .parse::<i64>()
            .map(Self::new)
            .unwrap_or_default()
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Reformat a phone number as `XXX-XXXX-XXXX`.
///
/// Non-digits are dropped and at most eleven digits are kept. Separators only
/// appear once there are more than three digits.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        0..=3 => digits,
        4..=7 => format!("{}-{}", &digits[..3], &digits[3..]),
        len => format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..len.min(11)]),
    }
}

/// Live values of the booking form fields
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReservationForm {
    pub name: String,
    pub phone: String,
    /// `YYYY-MM-DD`, written by date selection or a restored draft
    pub date: String,
    pub time: String,
    pub guests: GuestCount,
    pub requests: String,
    pub marketing: bool,
}

/// Snapshot of the form taken at submit time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationSubmission {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: u8,
    pub requests: String,
    pub marketing: bool,
}

impl From<&ReservationForm> for ReservationSubmission {
    fn from(form: &ReservationForm) -> Self {
        Self {
            name: form.name.clone(),
            phone: form.phone.clone(),
            date: form.date.clone(),
            time: form.time.clone(),
            guests: form.guests.get(),
            requests: form.requests.clone(),
            marketing: form.marketing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

/// Lines shown in the confirmation modal
pub fn confirmation_summary(submission: &ReservationSubmission) -> Vec<SummaryLine> {
    let formatted_date = calendar::parse_iso_date(&submission.date)
        .map(calendar::format_long_date)
        .unwrap_or_else(|| submission.date.clone());

    let mut lines = vec![
        SummaryLine { label: "예약자", value: submission.name.clone() },
        SummaryLine { label: "연락처", value: submission.phone.clone() },
        SummaryLine { label: "날짜", value: formatted_date },
        SummaryLine { label: "시간", value: submission.time.clone() },
        SummaryLine { label: "인원", value: format!("{}명", submission.guests) },
    ];
    if !submission.requests.is_empty() {
        lines.push(SummaryLine { label: "요청사항", value: submission.requests.clone() });
    }
    lines
}

/// How the visitor tried to close the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    CloseButton,
    /// Click on the backdrop outside the modal surface
    Backdrop,
    /// Click inside the modal surface; does not close it
    Surface,
    EscapeKey,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfirmationModal {
    summary: Option<Vec<SummaryLine>>,
}

impl ConfirmationModal {
    pub fn show(&mut self, submission: &ReservationSubmission) {
        self.summary = Some(confirmation_summary(submission));
    }

    /// Returns whether the modal was closed
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        if reason == DismissReason::Surface || self.summary.is_none() {
            return false;
        }
        self.summary = None;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.summary.is_some()
    }

    pub fn summary(&self) -> Option<&[SummaryLine]> {
        self.summary.as_deref()
    }
}

/// Where finished reservations are sent
#[async_trait(?Send)]
pub trait ReservationGateway {
    async fn submit(&self, submission: &ReservationSubmission) -> Result<(), ReservationError>;
}

/// Analytics placeholder: records the reservation in the log
pub fn track_reservation(submission: &ReservationSubmission) {
    log::info!(
        "📊 ANALYTICS: reservation {} {} for {} guests (marketing: {})",
        submission.date,
        submission.time,
        submission.guests,
        submission.marketing
    );
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationController {
    cursor: CalendarCursor,
    selected_date: Option<NaiveDate>,
    selected_slot: Option<String>,
    form: ReservationForm,
    submitting: bool,
    modal: ConfirmationModal,
    last_error: Option<String>,
}

impl ReservationController {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            cursor: CalendarCursor::from_date(today),
            selected_date: None,
            selected_slot: None,
            form: ReservationForm::default(),
            submitting: false,
            modal: ConfirmationModal::default(),
            last_error: None,
        }
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_slot(&self) -> Option<&str> {
        self.selected_slot.as_deref()
    }

    pub fn form(&self) -> &ReservationForm {
        &self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn modal(&self) -> &ConfirmationModal {
        &self.modal
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn previous_month(&mut self) {
        self.cursor = self.cursor.previous();
    }

    pub fn next_month(&mut self) {
        self.cursor = self.cursor.next();
    }

    pub fn calendar(&self, today: NaiveDate) -> CalendarMonth {
        calendar::render_month(self.cursor, self.selected_date, today)
    }

    pub fn time_slots(&self) -> TimeSlotPanel {
        time_slots::render_slots(self.selected_date, self.selected_slot.as_deref())
    }

    /// Heading above the time slots
    pub fn selected_date_label(&self) -> String {
        self.selected_date
            .map(calendar::format_long_date)
            .unwrap_or_else(|| NO_DATE_LABEL.to_string())
    }

    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), ReservationError> {
        if !self.cursor.contains(date) || !calendar::is_bookable(date, today) {
            return Err(ReservationError::DateUnavailable(calendar::format_iso_date(date)));
        }

        if self.selected_date != Some(date) {
            self.selected_slot = None;
            self.form.time.clear();
        }
        self.selected_date = Some(date);
        self.form.date = calendar::format_iso_date(date);
        log::debug!("🗓️ RESERVATION: selected date {}", self.form.date);
        Ok(())
    }

    pub fn select_time_slot(&mut self, time: &str) -> Result<(), ReservationError> {
        if self.selected_date.is_none() {
            return Err(ReservationError::NoDateSelected);
        }
        match time_slots::find_slot(time) {
            Some(slot) if slot.status.is_selectable() => {
                self.selected_slot = Some(slot.time.to_string());
                self.form.time = slot.time.to_string();
                Ok(())
            }
            _ => Err(ReservationError::SlotUnavailable(time.to_string())),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    /// Store the phone input reformatted; returns the value to write back
    pub fn set_phone(&mut self, raw: &str) -> &str {
        self.form.phone = format_phone(raw);
        &self.form.phone
    }

    pub fn set_requests(&mut self, requests: impl Into<String>) {
        self.form.requests = requests.into();
    }

    pub fn set_marketing(&mut self, marketing: bool) {
        self.form.marketing = marketing;
    }

    pub fn change_guests(&mut self, delta: i32) -> GuestCount {
        self.form.guests = self.form.guests.apply(delta);
        self.form.guests
    }

    /// Repopulate the form fields from a saved draft. Selections are left alone.
    pub fn apply_draft(&mut self, draft: &ReservationDraft) {
        self.form.name = draft.name.clone();
        self.form.phone = draft.phone.clone();
        if !draft.date.is_empty() {
            self.form.date = draft.date.clone();
        }
        if !draft.time.is_empty() {
            self.form.time = draft.time.clone();
        }
        self.form.guests = GuestCount::parse_or_default(&draft.guests);
        self.form.requests = draft.requests.clone();
    }

    /// Lock the submit control and snapshot the form. `None` while a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ReservationSubmission> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.last_error = None;
        Some(ReservationSubmission::from(&self.form))
    }

    pub fn finish_submit(
        &mut self,
        submission: &ReservationSubmission,
        result: Result<(), ReservationError>,
    ) -> Result<(), ReservationError> {
        self.submitting = false;
        match result {
            Ok(()) => {
                log::info!("✅ RESERVATION: submitted for {} {}", submission.date, submission.time);
                self.modal.show(submission);
                track_reservation(submission);
                self.reset();
                Ok(())
            }
            Err(e) => {
                log::warn!("⚠️ RESERVATION: submission failed: {}", e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn submit<G: ReservationGateway + ?Sized>(
        &mut self,
        gateway: &G,
    ) -> Result<(), ReservationError> {
        let submission = self
            .begin_submit()
            .ok_or(ReservationError::AlreadySubmitting)?;
        let result = gateway.submit(&submission).await;
        self.finish_submit(&submission, result)
    }

    pub fn dismiss_confirmation(&mut self, reason: DismissReason) -> bool {
        self.modal.dismiss(reason)
    }

    fn reset(&mut self) {
        self.form = ReservationForm::default();
        self.selected_date = None;
        self.selected_slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 10, 17)
    }

    #[derive(Default)]
    struct RecordingGateway {
        received: RefCell<Vec<ReservationSubmission>>,
    }

    #[async_trait(?Send)]
    impl ReservationGateway for RecordingGateway {
        async fn submit(&self, submission: &ReservationSubmission) -> Result<(), ReservationError> {
            self.received.borrow_mut().push(submission.clone());
            Ok(())
        }
    }

    struct FailingGateway;

    #[async_trait(?Send)]
    impl ReservationGateway for FailingGateway {
        async fn submit(&self, _submission: &ReservationSubmission) -> Result<(), ReservationError> {
            Err(ReservationError::SubmissionFailed("offline".to_string()))
        }
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("01012345678"), "010-1234-5678");
        assert_eq!(format_phone("010"), "010");
        assert_eq!(format_phone("0101"), "010-1");
        assert_eq!(format_phone("0101234"), "010-1234");
        assert_eq!(format_phone("01012345"), "010-1234-5");
        assert_eq!(format_phone("010-1234-5678"), "010-1234-5678");
        assert_eq!(format_phone("010123456789999"), "010-1234-5678");
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn test_guest_count_clamps() {
        let mut guests = GuestCount::default();
        assert_eq!(guests.get(), 2);
        for _ in 0..5 {
            guests = guests.apply(-5);
            assert!(guests.get() >= GuestCount::MIN);
        }
        assert_eq!(guests.get(), 1);

        for _ in 0..5 {
            guests = guests.apply(50);
            assert!(guests.get() <= GuestCount::MAX);
        }
        assert_eq!(guests.get(), 10);

        assert_eq!(GuestCount::parse_or_default("abc").get(), 2);
        assert_eq!(GuestCount::parse_or_default("42").get(), 10);
    }

    #[test]
    fn test_select_date_rejects_past_and_other_months() {
        let mut controller = ReservationController::new(today());
        assert!(matches!(
            controller.select_date(date(2026, 10, 16), today()),
            Err(ReservationError::DateUnavailable(_))
        ));
        assert!(controller.select_date(date(2026, 11, 2), today()).is_err());
        assert_eq!(controller.selected_date(), None);

        controller.select_date(today(), today()).unwrap();
        assert_eq!(controller.form().date, "2026-10-17");
        assert_eq!(controller.selected_date_label(), "2026년 10월 17일 토요일");
    }

    #[test]
    fn test_selecting_date_marks_one_cell_and_shows_slots() {
        let mut controller = ReservationController::new(today());
        assert!(matches!(controller.time_slots(), TimeSlotPanel::Placeholder(_)));

        controller.select_date(date(2026, 10, 24), today()).unwrap();
        let grid = controller.calendar(today());
        assert_eq!(grid.selected_count(), 1);
        assert!(matches!(controller.time_slots(), TimeSlotPanel::Slots(_)));
    }

    #[test]
    fn test_time_slot_requires_date() {
        let mut controller = ReservationController::new(today());
        assert_eq!(
            controller.select_time_slot("18:00"),
            Err(ReservationError::NoDateSelected)
        );
        assert_eq!(controller.selected_slot(), None);

        controller.select_date(date(2026, 10, 20), today()).unwrap();
        assert!(controller.select_time_slot("13:00").is_err());
        assert!(controller.select_time_slot("09:15").is_err());
        controller.select_time_slot("18:00").unwrap();
        assert_eq!(controller.selected_slot(), Some("18:00"));
        assert_eq!(controller.form().time, "18:00");
    }

    #[test]
    fn test_changing_date_clears_slot() {
        let mut controller = ReservationController::new(today());
        controller.select_date(date(2026, 10, 20), today()).unwrap();
        controller.select_time_slot("19:00").unwrap();

        controller.select_date(date(2026, 10, 20), today()).unwrap();
        assert_eq!(controller.selected_slot(), Some("19:00"));

        controller.select_date(date(2026, 10, 21), today()).unwrap();
        assert_eq!(controller.selected_slot(), None);
        assert!(controller.form().time.is_empty());
    }

    #[test]
    fn test_month_navigation() {
        let mut controller = ReservationController::new(today());
        controller.next_month();
        controller.next_month();
        controller.next_month();
        assert_eq!(controller.cursor(), CalendarCursor::new(2027, 1));
        controller.previous_month();
        assert_eq!(controller.calendar(today()).title, "2026년 12월");
    }

    #[tokio::test]
    async fn test_submit_resets_selection_and_shows_confirmation() {
        let gateway = RecordingGateway::default();
        let mut controller = ReservationController::new(today());
        controller.select_date(date(2026, 10, 24), today()).unwrap();
        controller.select_time_slot("18:30").unwrap();
        controller.set_name("김민수");
        controller.set_phone("01012345678");
        controller.change_guests(3);
        controller.set_requests("창가 자리 부탁드립니다");
        controller.set_marketing(true);

        controller.submit(&gateway).await.unwrap();

        assert_eq!(controller.selected_date(), None);
        assert_eq!(controller.selected_slot(), None);
        assert_eq!(controller.form().guests.get(), 2);
        assert_eq!(controller.form(), &ReservationForm::default());
        assert!(!controller.is_submitting());

        let received = gateway.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].guests, 5);
        assert_eq!(received[0].phone, "010-1234-5678");
        assert!(received[0].marketing);

        let summary = controller.modal().summary().unwrap();
        assert_eq!(summary.len(), 6);
        assert_eq!(summary[2].value, "2026년 10월 24일 토요일");
        assert_eq!(summary[4].value, "5명");
        assert_eq!(summary[5].label, "요청사항");
    }

    #[tokio::test]
    async fn test_submit_resets_even_without_selection() {
        let mut controller = ReservationController::new(today());
        controller.change_guests(-1);
        controller.submit(&RecordingGateway::default()).await.unwrap();
        assert_eq!(controller.form().guests.get(), 2);
        assert_eq!(controller.selected_date(), None);

        // Empty requests leave the optional line out
        assert_eq!(controller.modal().summary().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_form() {
        let mut controller = ReservationController::new(today());
        controller.select_date(date(2026, 10, 24), today()).unwrap();
        controller.set_name("김민수");

        let result = controller.submit(&FailingGateway).await;
        assert!(matches!(result, Err(ReservationError::SubmissionFailed(_))));
        assert_eq!(controller.form().name, "김민수");
        assert!(controller.selected_date().is_some());
        assert!(!controller.is_submitting());
        assert!(!controller.modal().is_visible());
        assert_eq!(controller.last_error(), Some("reservation failed: offline"));
    }

    #[test]
    fn test_double_submit_is_refused() {
        let mut controller = ReservationController::new(today());
        assert!(controller.begin_submit().is_some());
        assert!(controller.is_submitting());
        assert!(controller.begin_submit().is_none());
    }

    #[test]
    fn test_modal_dismissal() {
        let mut modal = ConfirmationModal::default();
        assert!(!modal.dismiss(DismissReason::EscapeKey));

        let submission = ReservationSubmission::from(&ReservationForm::default());
        for reason in [DismissReason::CloseButton, DismissReason::Backdrop, DismissReason::EscapeKey] {
            modal.show(&submission);
            assert!(!modal.dismiss(DismissReason::Surface));
            assert!(modal.is_visible());
            assert!(modal.dismiss(reason));
            assert!(!modal.is_visible());
        }
    }

    #[test]
    fn test_summary_keeps_unparseable_date() {
        let submission = ReservationSubmission {
            date: String::new(),
            ..ReservationSubmission::from(&ReservationForm::default())
        };
        let lines = confirmation_summary(&submission);
        assert_eq!(lines[2].value, "");
    }
}
