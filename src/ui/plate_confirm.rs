//! Plate confirmation: "Is this your plate?"

use gtk4 as gtk;
use gtk4::prelude::*;

use crate::i18n::{self, Language};
use crate::plate::CountryCode;
use crate::state::KioskStep;
use crate::ui::widgets::{create_header, create_plate_display};

pub fn create(
    language: Language,
    plate: &str,
    country: CountryCode,
    is_demo: bool,
    on_next: impl Fn(KioskStep) + 'static,
    on_back: impl Fn() + Clone + 'static,
    on_language: impl Fn(Language) + 'static,
    on_exit: impl Fn() + 'static,
) -> gtk::Box {
    let t = &i18n::texts(language).plate_confirm;

    let screen = gtk::Box::new(gtk::Orientation::Vertical, 0);
    screen.add_css_class("plate-confirm-screen");

    screen.append(&create_header(
        language,
        true,
        on_back.clone(),
        on_language,
        on_exit,
    ));

    let content = gtk::Box::new(gtk::Orientation::Vertical, 24);
    content.set_vexpand(true);
    content.set_valign(gtk::Align::Center);
    content.set_margin_start(32);
    content.set_margin_end(32);

    let title = gtk::Label::new(Some(t.title));
    title.add_css_class("screen-title");
    content.append(&title);

    let display = create_plate_display(plate, Some(country));
    display.add_css_class("plate-display-large");
    content.append(&display);

    if !is_demo {
        let warning = gtk::Label::new(Some(t.country_check));
        warning.add_css_class("warning-box");
        content.append(&warning);
    }

    let actions = gtk::Box::new(gtk::Orientation::Horizontal, 24);
    actions.set_halign(gtk::Align::Center);

    let edit = gtk::Button::with_label(t.edit);
    edit.add_css_class("secondary-button");
    edit.connect_clicked(move |_| on_back());
    actions.append(&edit);

    let yes = gtk::Button::with_label(t.yes);
    yes.add_css_class("primary-button");
    yes.connect_clicked(move |_| {
        // The demo plate was scanned at the barrier, so the arrival time is
        // already known and the trip can be priced right away.
        on_next(if is_demo {
            KioskStep::PaymentSelection
        } else {
            KioskStep::ArrivalTime
        })
    });
    actions.append(&yes);

    content.append(&actions);
    screen.append(&content);

    screen
}
