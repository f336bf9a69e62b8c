//! Card payment: waiting for the reader.

use gtk4 as gtk;
use gtk4::prelude::*;

use crate::i18n::{self, Language};
use crate::ui::widgets::create_header;

pub fn create(
    language: Language,
    on_back: impl Fn() + 'static,
    on_language: impl Fn(Language) + 'static,
    on_exit: impl Fn() + 'static,
) -> gtk::Box {
    let t = &i18n::texts(language).card_payment;

    let screen = gtk::Box::new(gtk::Orientation::Vertical, 0);
    screen.add_css_class("card-screen");

    screen.append(&create_header(language, true, on_back, on_language, on_exit));

    let content = gtk::Box::new(gtk::Orientation::Vertical, 24);
    content.set_vexpand(true);
    content.set_valign(gtk::Align::Center);
    content.set_margin_start(32);
    content.set_margin_end(32);

    let title = gtk::Label::new(Some(t.title));
    title.add_css_class("screen-title");
    title.set_wrap(true);
    content.append(&title);

    let card = gtk::Label::new(Some("\u{1F4B3}"));
    card.add_css_class("card-graphic");
    content.append(&card);

    let spinner = gtk::Spinner::new();
    spinner.set_halign(gtk::Align::Center);
    spinner.start();
    content.append(&spinner);

    let hint = gtk::Label::new(Some(t.contactless_hint));
    hint.add_css_class("screen-subtitle");
    content.append(&hint);

    screen.append(&content);

    screen
}
