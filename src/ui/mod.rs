//! UI components for the kiosk.

pub mod arrival_time;
pub mod card_payment;
pub mod entry_scan;
pub mod landing;
pub mod main_menu;
pub mod payment_selection;
pub mod plate_confirm;
pub mod plate_input;
pub mod plate_mismatch;
pub mod thank_you;
pub mod widgets;
pub mod window;

pub use window::MainWindow;

use chrono::NaiveDateTime;

/// Wall-clock time as the views see it
pub(crate) fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
