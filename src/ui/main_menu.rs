//! Main menu: pay-and-leave or (disabled) day ticket.

use gtk4 as gtk;
use gtk4::prelude::*;

use crate::config::KioskConfig;
use crate::i18n::{self, Language};
use crate::ui::widgets::{create_footer, create_header};

pub fn create(
    config: &KioskConfig,
    language: Language,
    on_leave: impl Fn() + 'static,
    on_language: impl Fn(Language) + 'static,
    on_exit: impl Fn() + 'static,
) -> gtk::Box {
    let t = &i18n::texts(language).main_menu;

    let screen = gtk::Box::new(gtk::Orientation::Vertical, 0);
    screen.add_css_class("menu-screen");

    screen.append(&create_header(language, false, || {}, on_language, on_exit));

    let content = gtk::Box::new(gtk::Orientation::Vertical, 32);
    content.set_vexpand(true);
    content.set_valign(gtk::Align::Center);
    content.set_margin_start(32);
    content.set_margin_end(32);

    let title = gtk::Label::new(Some(t.title));
    title.add_css_class("menu-title");
    content.append(&title);

    let buttons = gtk::Box::new(gtk::Orientation::Horizontal, 24);
    buttons.set_halign(gtk::Align::Center);

    let leave = gtk::Button::new();
    leave.add_css_class("menu-button");
    let leave_content = gtk::Box::new(gtk::Orientation::Vertical, 12);
    let leave_icon = gtk::Label::new(Some("\u{2192}"));
    leave_icon.add_css_class("menu-button-icon");
    let leave_label = gtk::Label::new(Some(t.leave));
    leave_content.append(&leave_icon);
    leave_content.append(&leave_label);
    leave.set_child(Some(&leave_content));
    leave.connect_clicked(move |_| on_leave());
    buttons.append(&leave);

    // Day tickets are not sold at this machine
    let day_ticket = gtk::Button::new();
    day_ticket.add_css_class("menu-button");
    day_ticket.set_sensitive(false);
    let ticket_content = gtk::Box::new(gtk::Orientation::Vertical, 12);
    let ticket_icon = gtk::Label::new(Some("\u{1F697}"));
    ticket_icon.add_css_class("menu-button-icon");
    let ticket_label = gtk::Label::new(Some(t.day_ticket));
    ticket_content.append(&ticket_icon);
    ticket_content.append(&ticket_label);
    day_ticket.set_child(Some(&ticket_content));
    buttons.append(&day_ticket);

    content.append(&buttons);
    screen.append(&content);

    screen.append(&create_footer(config));

    screen
}
