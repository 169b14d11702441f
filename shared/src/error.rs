use thiserror::Error;

/// Failures reading or writing per-browser storage
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to serialize value: {0}")]
    Serialization(String),
}

/// Everything that can go wrong between the chat panel and the completions API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChatError {
    /// Key does not start with the expected prefix
    #[error("올바른 OpenAI API Key를 입력해주세요 (sk-로 시작).")]
    InvalidCredential,
    #[error("OpenAI API Key가 필요합니다. 상단 입력창에 키를 입력해주세요.")]
    MissingCredential,
    /// Non-success HTTP status; carries the API's own message verbatim
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("{0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    MalformedResponse(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReservationError {
    #[error("date {0} is not available for booking")]
    DateUnavailable(String),
    #[error("time slot {0} is not available")]
    SlotUnavailable(String),
    #[error("날짜를 먼저 선택해주세요")]
    NoDateSelected,
    #[error("a reservation is already being submitted")]
    AlreadySubmitting,
    #[error("reservation failed: {0}")]
    SubmissionFailed(String),
}
