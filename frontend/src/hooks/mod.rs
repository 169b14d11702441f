pub mod use_chat;
pub mod use_draft_autosave;
pub mod use_reservation;
