//! Thank-you screen shown after a successful payment.

use gtk4 as gtk;
use gtk4::prelude::*;

use crate::i18n::{self, Language};
use crate::ui::widgets::create_header;

pub fn create(
    language: Language,
    on_restart: impl Fn() + 'static,
    on_language: impl Fn(Language) + 'static,
    on_exit: impl Fn() + 'static,
) -> gtk::Box {
    let t = &i18n::texts(language).thank_you;

    let screen = gtk::Box::new(gtk::Orientation::Vertical, 0);
    screen.add_css_class("thank-you-screen");

    screen.append(&create_header(language, false, || {}, on_language, on_exit));

    let content = gtk::Box::new(gtk::Orientation::Vertical, 24);
    content.set_vexpand(true);
    content.set_valign(gtk::Align::Center);
    content.set_margin_start(32);
    content.set_margin_end(32);

    let check = gtk::Label::new(Some("\u{2714}"));
    check.add_css_class("thank-you-check");
    content.append(&check);

    let title = gtk::Label::new(Some(t.title));
    title.add_css_class("screen-title");
    content.append(&title);

    let notice = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    notice.add_css_class("leave-notice");
    notice.set_halign(gtk::Align::Center);
    let clock = gtk::Label::new(Some("\u{23F1}"));
    clock.add_css_class("leave-notice-icon");
    notice.append(&clock);
    let notice_text = gtk::Label::new(Some(t.leave_notice));
    notice_text.set_wrap(true);
    notice.append(&notice_text);
    content.append(&notice);

    let exit = gtk::Button::with_label(t.exit);
    exit.add_css_class("primary-button");
    exit.set_halign(gtk::Align::Center);
    exit.connect_clicked(move |_| on_restart());
    content.append(&exit);

    let auto_close = gtk::Label::new(Some(t.auto_close));
    auto_close.add_css_class("auto-close-note");
    content.append(&auto_close);

    screen.append(&content);

    screen
}
