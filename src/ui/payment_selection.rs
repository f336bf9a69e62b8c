//! Payment method selection with duration and tariff summary.

use gtk4 as gtk;
use gtk4::prelude::*;

use crate::arrival::{self, ParkedDuration};
use crate::i18n::{self, Language};
use crate::plate::CountryCode;
use crate::ui::widgets::{create_header, create_plate_display};

pub fn create(
    language: Language,
    plate: &str,
    country: CountryCode,
    duration: ParkedDuration,
    cost_cents: u32,
    on_card: impl Fn() + 'static,
    on_back: impl Fn() + 'static,
    on_language: impl Fn(Language) + 'static,
    on_exit: impl Fn() + 'static,
) -> gtk::Box {
    let t = &i18n::texts(language).payment_selection;

    let screen = gtk::Box::new(gtk::Orientation::Vertical, 0);
    screen.add_css_class("payment-screen");

    screen.append(&create_header(language, true, on_back, on_language, on_exit));

    let content = gtk::Box::new(gtk::Orientation::Vertical, 24);
    content.set_vexpand(true);
    content.set_valign(gtk::Align::Center);
    content.set_margin_start(32);
    content.set_margin_end(32);

    content.append(&create_plate_display(plate, Some(country)));

    let summary = gtk::Box::new(gtk::Orientation::Vertical, 8);
    summary.add_css_class("payment-summary");

    let duration_label = gtk::Label::new(Some(&format!(
        "{} {} {} {} {}",
        t.duration, duration.hours, t.hours, duration.minutes, t.minutes
    )));
    duration_label.add_css_class("payment-duration");
    summary.append(&duration_label);

    let cost_label = gtk::Label::new(Some(&arrival::format_cents(cost_cents)));
    cost_label.add_css_class("payment-cost");
    summary.append(&cost_label);

    content.append(&summary);

    let choose = gtk::Label::new(Some(t.choose_method));
    choose.add_css_class("screen-subtitle");
    content.append(&choose);

    let methods = gtk::Box::new(gtk::Orientation::Horizontal, 24);
    methods.set_halign(gtk::Align::Center);

    let card = gtk::Button::new();
    card.add_css_class("menu-button");
    let card_content = gtk::Box::new(gtk::Orientation::Vertical, 12);
    let card_icon = gtk::Label::new(Some("\u{1F4B3}"));
    card_icon.add_css_class("menu-button-icon");
    let card_label = gtk::Label::new(Some(t.pay_card));
    card_content.append(&card_icon);
    card_content.append(&card_label);
    card.set_child(Some(&card_content));
    card.connect_clicked(move |_| on_card());
    methods.append(&card);

    // The coin unit of this machine is out of service
    let coins = gtk::Button::new();
    coins.add_css_class("menu-button");
    coins.set_sensitive(false);
    let coins_content = gtk::Box::new(gtk::Orientation::Vertical, 12);
    let coins_icon = gtk::Label::new(Some("\u{1FA99}"));
    coins_icon.add_css_class("menu-button-icon");
    let coins_label = gtk::Label::new(Some(t.pay_coins));
    coins_content.append(&coins_icon);
    coins_content.append(&coins_label);
    coins.set_child(Some(&coins_content));
    methods.append(&coins);

    content.append(&methods);
    screen.append(&content);

    screen
}
