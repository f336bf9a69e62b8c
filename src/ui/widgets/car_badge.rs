//! Persistent corner badge showing the scanned vehicle.

use gtk4 as gtk;
use gtk4::prelude::*;

use crate::i18n::{self, Language};

pub struct CarBadge {
    pub container: gtk::Box,
    caption: gtk::Label,
    plate: gtk::Label,
}

impl CarBadge {
    pub fn new() -> Self {
        let container = gtk::Box::new(gtk::Orientation::Vertical, 4);
        container.add_css_class("car-badge");
        container.set_halign(gtk::Align::End);
        container.set_valign(gtk::Align::End);
        container.set_margin_end(16);
        container.set_margin_bottom(16);
        container.set_visible(false);

        let caption = gtk::Label::new(None);
        caption.add_css_class("car-badge-caption");
        caption.set_halign(gtk::Align::Start);
        container.append(&caption);

        let row = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        let car = gtk::Label::new(Some("\u{1F697}"));
        car.add_css_class("car-badge-icon");
        row.append(&car);

        let plate = gtk::Label::new(None);
        plate.add_css_class("car-badge-plate");
        row.append(&plate);
        container.append(&row);

        Self {
            container,
            caption,
            plate,
        }
    }

    pub fn set_visible(&self, visible: bool) {
        self.container.set_visible(visible);
    }

    pub fn update(&self, language: Language, plate: &str) {
        self.caption.set_text(i18n::texts(language).your_vehicle);
        self.plate.set_text(plate);
    }
}
