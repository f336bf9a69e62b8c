//! License plate rendering: white plate, country flag, mono lettering.

use gtk4 as gtk;
use gtk4::prelude::*;

use crate::plate::CountryCode;

pub fn create_plate_display(plate: &str, country: Option<CountryCode>) -> gtk::Box {
    let display = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    display.add_css_class("plate-display");
    display.set_halign(gtk::Align::Center);

    if let Some(country) = country {
        let flag = gtk::Label::new(Some(country.flag()));
        flag.add_css_class("plate-flag");
        display.append(&flag);
    }

    let text = gtk::Label::new(Some(plate));
    text.add_css_class("plate-text");
    display.append(&text);

    if let Some(country) = country {
        let code = gtk::Label::new(Some(country.code()));
        code.add_css_class("plate-country-code");
        display.append(&code);
    }

    display
}
