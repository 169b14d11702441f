//! Platform-free logic for the La Maison website widgets: the reservation
//! calendar and form, draft autosave, and the chat assistant.

pub mod calendar;
pub mod chat;
pub mod completions;
pub mod config;
pub mod draft;
pub mod error;
pub mod map;
pub mod reservation;
pub mod storage;
pub mod time_slots;

pub use calendar::{CalendarCell, CalendarCursor, CalendarDayType, CalendarMonth};
pub use chat::{accepts_input, ChatController, ChatCredential, ChatMessage, ChatPanelState, ChatRole, SendStep, TranscriptEntry};
pub use completions::{CompletionRequest, CompletionsClient, CompletionsTransport, HttpReply};
pub use config::SiteConfig;
pub use draft::ReservationDraft;
pub use error::{ChatError, ReservationError, StorageError};
pub use reservation::{
    ConfirmationModal, DismissReason, GuestCount, ReservationController, ReservationForm,
    ReservationGateway, ReservationSubmission,
};
pub use storage::{KeyValueStore, MemoryStore};
pub use time_slots::{SlotStatus, TimeSlotPanel, TimeSlotView};
