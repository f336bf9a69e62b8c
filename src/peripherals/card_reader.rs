//! Mocked payment terminal.
//!
//! Approves every card after a fixed delay. The approval echoes the timer
//! generation it was started under so the state machine can drop it if the
//! customer has navigated away in the meantime.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::state::TimerGen;

pub fn start(
    runtime: &Arc<tokio::runtime::Runtime>,
    delay_ms: u64,
    gen: TimerGen,
    on_approved: impl Fn(TimerGen) + Send + 'static,
) {
    let delay = Duration::from_millis(delay_ms);
    runtime.spawn(async move {
        log::info!("Card reader waiting for card");
        sleep(delay).await;
        log::info!("Card accepted");
        on_approved(gen);
    });
}
