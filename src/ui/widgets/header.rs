//! Screen header: back arrow, clock, language toggle, exit.

use gtk4 as gtk;
use gtk4::prelude::*;

use crate::i18n::{self, Language};
use crate::ui;

pub fn create_header(
    language: Language,
    show_back: bool,
    on_back: impl Fn() + 'static,
    on_language: impl Fn(Language) + 'static,
    on_exit: impl Fn() + 'static,
) -> gtk::Box {
    let header = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    header.add_css_class("kiosk-header");
    header.set_margin_start(16);
    header.set_margin_end(16);
    header.set_margin_top(12);
    header.set_margin_bottom(12);

    if show_back {
        let back = gtk::Button::with_label("\u{2190}");
        back.add_css_class("header-back");
        back.connect_clicked(move |_| on_back());
        header.append(&back);
    }

    // Clock is rendered at build time; every screen change rebuilds it
    let clock = gtk::Label::new(Some(&i18n::format_datetime_long(language, ui::now())));
    clock.add_css_class("header-clock");
    header.append(&clock);

    let spacer = gtk::Box::new(gtk::Orientation::Horizontal, 0);
    spacer.set_hexpand(true);
    header.append(&spacer);

    // Shows the active language; tapping switches to the other one
    let lang_button = gtk::Button::with_label(language.code());
    lang_button.add_css_class("header-language");
    lang_button.connect_clicked(move |_| on_language(language.toggled()));
    header.append(&lang_button);

    let exit = gtk::Button::with_label("\u{2715}");
    exit.add_css_class("header-exit");
    exit.connect_clicked(move |_| on_exit());
    header.append(&exit);

    header
}
