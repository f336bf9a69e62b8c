//! Mocked entry camera with license plate recognition.
//!
//! Plays the three-phase recognition script (car entering, scanning,
//! result) on a timer and always "recognizes" the configured demo plate.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::config::KioskConfig;
use crate::state::ScanPhase;

/// Events reported by the scanner
#[derive(Debug, Clone)]
pub enum ScanEvent {
    Phase(ScanPhase),
    Recognized { plate: String },
}

/// Run the recognition script. `on_event` is invoked from the tokio runtime;
/// the caller is responsible for hopping back onto the GTK main loop.
pub fn start(
    runtime: &Arc<tokio::runtime::Runtime>,
    config: &KioskConfig,
    on_event: impl Fn(ScanEvent) + Send + 'static,
) {
    let entering = Duration::from_millis(config.scan_entering_ms);
    let scanning = Duration::from_millis(config.scan_scanning_ms);
    let scanned = Duration::from_millis(config.scan_scanned_ms);
    let plate = config.demo_plate.clone();

    runtime.spawn(async move {
        log::info!("Entry camera armed, waiting for vehicle");
        sleep(entering).await;
        on_event(ScanEvent::Phase(ScanPhase::Scanning));

        sleep(scanning).await;
        on_event(ScanEvent::Phase(ScanPhase::Scanned));

        sleep(scanned).await;
        log::info!("Entry camera reports plate {}", plate);
        on_event(ScanEvent::Recognized { plate });
    });
}
