//! Mismatch review: scanned plate versus entered plate.

use gtk4 as gtk;
use gtk4::prelude::*;

use crate::i18n::{self, Language};
use crate::plate::CountryCode;
use crate::ui::widgets::{create_header, create_plate_display};

pub fn create(
    language: Language,
    entered_plate: &str,
    scanned_plate: &str,
    country: CountryCode,
    on_continue: impl Fn() + 'static,
    on_back: impl Fn() + Clone + 'static,
    on_language: impl Fn(Language) + 'static,
    on_exit: impl Fn() + 'static,
) -> gtk::Box {
    let t = &i18n::texts(language).plate_mismatch;

    let screen = gtk::Box::new(gtk::Orientation::Vertical, 0);
    screen.add_css_class("plate-mismatch-screen");

    screen.append(&create_header(
        language,
        true,
        on_back.clone(),
        on_language,
        on_exit,
    ));

    let content = gtk::Box::new(gtk::Orientation::Vertical, 16);
    content.set_vexpand(true);
    content.set_margin_start(32);
    content.set_margin_end(32);

    let title = gtk::Label::new(Some(t.title));
    title.add_css_class("screen-title");
    content.append(&title);

    let subtitle = gtk::Label::new(Some(t.subtitle));
    subtitle.add_css_class("screen-subtitle");
    subtitle.set_wrap(true);
    content.append(&subtitle);

    let scanned_caption = gtk::Label::new(Some(t.scanned));
    scanned_caption.add_css_class("plate-caption");
    content.append(&scanned_caption);
    content.append(&create_plate_display(scanned_plate, None));

    let entered_caption = gtk::Label::new(Some(t.entered));
    entered_caption.add_css_class("plate-caption");
    content.append(&entered_caption);
    content.append(&create_plate_display(entered_plate, Some(country)));

    let warning = gtk::Box::new(gtk::Orientation::Vertical, 4);
    warning.add_css_class("warning-box");
    let question = gtk::Label::new(Some(t.question));
    question.add_css_class("warning-question");
    let country_check = gtk::Label::new(Some(t.country_check));
    country_check.add_css_class("warning-detail");
    warning.append(&question);
    warning.append(&country_check);
    content.append(&warning);

    let actions = gtk::Box::new(gtk::Orientation::Horizontal, 24);
    actions.set_halign(gtk::Align::Center);

    let back = gtk::Button::with_label(&format!("\u{2190} {}", t.back));
    back.add_css_class("secondary-button");
    back.connect_clicked(move |_| on_back());
    actions.append(&back);

    let continue_button = gtk::Button::with_label(&format!("{} \u{2192}", t.continue_));
    continue_button.add_css_class("primary-button");
    continue_button.connect_clicked(move |_| on_continue());
    actions.append(&continue_button);

    content.append(&actions);
    screen.append(&content);

    screen
}
