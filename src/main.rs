//! ParkPay Kiosk - GTK4 parking payment terminal.
//!
//! Architecture:
//! - `state` module: GTK-free state machine with business logic (testable)
//! - `app` module: Bridges state machine to GTK and async operations
//! - `peripherals` module: Mocked entry camera and card reader
//! - `arrival`, `plate`, `i18n`: pure helpers for times, plates and texts
//! - `ui` module: GTK4 widgets and screens

use std::sync::Arc;

use gtk4::prelude::*;
use libadwaita as adw;

mod app;
mod arrival;
mod config;
mod i18n;
mod peripherals;
mod plate;
mod state;
mod ui;

use app::AppContext;
use config::KioskConfig;
use state::KioskEvent;
use ui::MainWindow;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting ParkPay Kiosk");

    let config = KioskConfig::load();

    // Create tokio runtime for the mock peripherals
    let runtime = Arc::new(
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime"),
    );

    // Set cursor theme to invisible before GTK init
    std::env::set_var("XCURSOR_THEME", "InvisibleCursor");
    std::env::set_var("XCURSOR_SIZE", "1");

    let app = adw::Application::builder()
        .application_id("com.parkpay.kiosk")
        .build();

    let runtime_clone = runtime.clone();

    app.connect_activate(move |app| {
        // Create application context (includes GTK-free state machine)
        let (ctx, mut rx) = AppContext::new(runtime_clone.clone(), config.clone());

        // Create main window (GTK layer)
        let main_window = MainWindow::new(app, ctx.clone());

        // Poll the tokio channel from the GTK main loop
        let window = main_window.clone();
        glib::timeout_add_local(std::time::Duration::from_millis(16), move || {
            // Process all pending messages
            while let Ok(msg) = rx.try_recv() {
                window.handle_message(msg);
            }
            glib::ControlFlow::Continue
        });

        // Arm the mocked entry camera
        ctx.send_event(KioskEvent::Boot);

        main_window.window.present();
    });

    app.run();

    log::info!("ParkPay Kiosk shutting down");
}
