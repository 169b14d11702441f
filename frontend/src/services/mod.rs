pub mod completions;
pub mod date_utils;
pub mod logging;
pub mod reservation;
pub mod storage;
