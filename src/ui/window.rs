//! Main application window: swaps the screen of the current step.

use gtk4 as gtk;
use gtk4::prelude::*;
use libadwaita as adw;
use libadwaita::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::{AppContext, AppMessage};
use crate::arrival;
use crate::i18n::Language;
use crate::state::{KioskCommand, KioskEvent, KioskStep, ScanPhase, StepPatch, TripData};
use crate::ui;
use crate::ui::widgets::{animations, car_badge::CarBadge};

/// Identity of the screen currently mounted. Rebuilding only on a key
/// change keeps screen-local widget state (like a half-typed plate) alive
/// across unrelated UI updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScreenKey {
    step: KioskStep,
    language: Language,
    scan_phase: ScanPhase,
}

/// Main window containing the current step's screen
pub struct MainWindow {
    pub window: adw::ApplicationWindow,
    ctx: Rc<AppContext>,
    root: gtk::Overlay,
    badge: CarBadge,
    shown: RefCell<Option<ScreenKey>>,
}

impl MainWindow {
    pub fn new(app: &adw::Application, ctx: Rc<AppContext>) -> Rc<Self> {
        let window = adw::ApplicationWindow::builder()
            .application(app)
            .title("ParkPay Kiosk")
            .default_width(1280)
            .default_height(1024)
            .build();

        // Make fullscreen and hide cursor after window is mapped
        window.connect_map(|window| {
            let window = window.clone();
            glib::timeout_add_local_once(std::time::Duration::from_millis(100), move || {
                window.fullscreen();
            });
        });
        window.set_cursor_from_name(Some("none"));

        // Root overlay: current screen below, persistent car badge on top
        let root = gtk::Overlay::new();
        root.add_css_class("kiosk-root");

        let badge = CarBadge::new();
        root.add_overlay(&badge.container);

        window.set_content(Some(&root));

        let main_window = Rc::new(Self {
            window,
            ctx,
            root,
            badge,
            shown: RefCell::new(None),
        });

        main_window.load_css();
        main_window.update_ui();

        main_window
    }

    fn load_css(&self) {
        let provider = gtk::CssProvider::new();
        provider.load_from_string(include_str!("../../resources/style.css"));

        gtk::style_context_add_provider_for_display(
            &gtk::gdk::Display::default().expect("No display"),
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    /// Handle app messages - main entry point for state updates
    pub fn handle_message(self: &Rc<Self>, msg: AppMessage) {
        match msg {
            AppMessage::Event(ref event) => {
                // Process event through state machine
                let commands = self.ctx.process_event(event.clone());

                // Check if UI update was requested
                if commands.iter().any(|c| matches!(c, KioskCommand::UpdateUi)) {
                    self.update_ui();
                }
            }
        }
    }

    /// Update the UI to reflect current state
    fn update_ui(self: &Rc<Self>) {
        let sm = self.ctx.controller.borrow();
        let key = ScreenKey {
            step: sm.step,
            language: sm.language,
            scan_phase: sm.scan_phase,
        };
        let trip = sm.trip.clone();
        let is_demo = sm.is_demo_plate();
        drop(sm);

        if *self.shown.borrow() != Some(key) {
            let screen = self.build_screen(key, &trip, is_demo);
            self.root.set_child(Some(&screen));
            animations::reveal_screen(&screen);
            *self.shown.borrow_mut() = Some(key);
        }

        // The scanned car stays referenced in a corner of every screen
        // after the landing animation.
        let badge_visible = !trip.scanned_plate.is_empty()
            && !matches!(key.step, KioskStep::EntryScan | KioskStep::Landing);
        self.badge.set_visible(badge_visible);
        if badge_visible {
            self.badge.update(key.language, &trip.scanned_plate);
        }
    }

    fn build_screen(self: &Rc<Self>, key: ScreenKey, trip: &TripData, is_demo: bool) -> gtk::Box {
        let language = key.language;
        let config = &self.ctx.config;

        let on_back = {
            let ctx = self.ctx.clone();
            move || ctx.send_event(KioskEvent::Back)
        };
        let on_exit = {
            let ctx = self.ctx.clone();
            move || ctx.send_event(KioskEvent::Exit)
        };
        let on_language = {
            let ctx = self.ctx.clone();
            move |language| ctx.send_event(KioskEvent::SetLanguage(language))
        };

        match key.step {
            KioskStep::EntryScan => {
                ui::entry_scan::create(language, key.scan_phase, &config.demo_plate)
            }

            KioskStep::Landing => ui::landing::create(),

            KioskStep::MainMenu => {
                let ctx = self.ctx.clone();
                ui::main_menu::create(
                    config,
                    language,
                    move || {
                        ctx.send_event(KioskEvent::Advance {
                            step: KioskStep::PlateInput,
                            patch: None,
                        })
                    },
                    on_language,
                    on_exit,
                )
            }

            KioskStep::PlateInput => {
                let ctx = self.ctx.clone();
                ui::plate_input::create(
                    config,
                    language,
                    trip.country,
                    &trip.entered_plate,
                    move |plate, country| {
                        ctx.send_event(KioskEvent::Advance {
                            step: KioskStep::PlateConfirm,
                            patch: Some(StepPatch::Plate { plate, country }),
                        })
                    },
                    on_back,
                    on_language,
                    on_exit,
                )
            }

            KioskStep::PlateConfirm => {
                let ctx = self.ctx.clone();
                ui::plate_confirm::create(
                    language,
                    &trip.entered_plate,
                    trip.country,
                    is_demo,
                    move |step| {
                        ctx.send_event(KioskEvent::Advance { step, patch: None })
                    },
                    on_back,
                    on_language,
                    on_exit,
                )
            }

            KioskStep::PlateMismatch => {
                let ctx = self.ctx.clone();
                ui::plate_mismatch::create(
                    language,
                    &trip.entered_plate,
                    &trip.scanned_plate,
                    trip.country,
                    move || {
                        ctx.send_event(KioskEvent::Advance {
                            step: KioskStep::ArrivalTime,
                            patch: None,
                        })
                    },
                    on_back,
                    on_language,
                    on_exit,
                )
            }

            KioskStep::ArrivalTime => {
                let ctx = self.ctx.clone();
                ui::arrival_time::create(
                    language,
                    trip.arrival_time,
                    move |time| {
                        ctx.send_event(KioskEvent::Advance {
                            step: KioskStep::PaymentSelection,
                            patch: Some(StepPatch::Arrival { time }),
                        })
                    },
                    on_back,
                    on_language,
                    on_exit,
                )
            }

            KioskStep::PaymentSelection => {
                let ctx = self.ctx.clone();
                let duration = arrival::parked_duration(trip.arrival_time, crate::ui::now());
                let cost =
                    arrival::cost_cents(duration, config.rate_cents_per_hour, config.daily_cap_cents);
                ui::payment_selection::create(
                    language,
                    &trip.entered_plate,
                    trip.country,
                    duration,
                    cost,
                    move || {
                        ctx.send_event(KioskEvent::Advance {
                            step: KioskStep::CardPayment,
                            patch: None,
                        })
                    },
                    on_back,
                    on_language,
                    on_exit,
                )
            }

            KioskStep::CardPayment => {
                ui::card_payment::create(language, on_back, on_language, on_exit)
            }

            KioskStep::ThankYou => {
                let ctx = self.ctx.clone();
                ui::thank_you::create(
                    language,
                    move || ctx.send_event(KioskEvent::Restart),
                    on_language,
                    on_exit,
                )
            }
        }
    }
}
