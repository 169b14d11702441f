pub mod calendar;
pub mod chat_widget;
pub mod confirmation_modal;
pub mod forms;
pub mod location_card;
pub mod time_slots;
