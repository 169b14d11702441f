use async_trait::async_trait;
use gloo::timers::future::TimeoutFuture;
use shared::{ReservationError, ReservationGateway, ReservationSubmission};

/// Stand-in for a booking backend: waits, logs, and always succeeds
#[derive(Clone, Copy)]
pub struct SimulatedGateway {
    delay_ms: u32,
}

impl SimulatedGateway {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

#[async_trait(?Send)]
impl ReservationGateway for SimulatedGateway {
    async fn submit(&self, submission: &ReservationSubmission) -> Result<(), ReservationError> {
        TimeoutFuture::new(self.delay_ms).await;
        log::info!("Reservation data: {:?}", submission);
        Ok(())
    }
}
