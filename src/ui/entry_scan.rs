//! Entry screen: mocked camera recognition while the car pulls up.

use gtk4 as gtk;
use gtk4::prelude::*;

use crate::i18n::{self, Language};
use crate::state::ScanPhase;
use crate::ui::widgets::create_plate_display;

pub fn create(language: Language, phase: ScanPhase, demo_plate: &str) -> gtk::Box {
    let t = &i18n::texts(language).entry_scan;

    let screen = gtk::Box::new(gtk::Orientation::Vertical, 24);
    screen.add_css_class("entry-scan-screen");
    screen.set_valign(gtk::Align::Center);

    // Car pulling up to the barrier
    let car = gtk::Label::new(Some("\u{1F699}"));
    car.add_css_class("entry-car");
    match phase {
        ScanPhase::Entering => car.add_css_class("entry-car-entering"),
        _ => car.add_css_class("entry-car-stopped"),
    }
    screen.append(&car);

    // Camera with recognition frame
    if phase != ScanPhase::Entering {
        let camera = gtk::Label::new(Some("\u{1F4F7}"));
        camera.add_css_class("entry-camera");
        camera.add_css_class(if phase == ScanPhase::Scanning {
            "entry-camera-scanning"
        } else {
            "entry-camera-done"
        });
        screen.append(&camera);
    }

    let status = gtk::Label::new(Some(match phase {
        ScanPhase::Entering => t.entering,
        ScanPhase::Scanning => t.scanning,
        ScanPhase::Scanned => t.scanned,
    }));
    status.add_css_class("entry-status");
    screen.append(&status);

    match phase {
        ScanPhase::Scanning => {
            let spinner = gtk::Spinner::new();
            spinner.set_halign(gtk::Align::Center);
            spinner.start();
            screen.append(&spinner);
        }
        ScanPhase::Scanned => {
            screen.append(&create_plate_display(demo_plate, None));
        }
        ScanPhase::Entering => {}
    }

    let notice = gtk::Label::new(Some(t.demo_notice));
    notice.add_css_class("entry-demo-notice");
    notice.set_margin_top(32);
    screen.append(&notice);

    screen
}
