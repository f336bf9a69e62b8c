//! Landing screen: the payment machine zooms in before the menu appears.

use gtk4 as gtk;
use gtk4::prelude::*;

pub fn create() -> gtk::Box {
    let screen = gtk::Box::new(gtk::Orientation::Vertical, 0);
    screen.add_css_class("landing-screen");
    screen.set_valign(gtk::Align::Center);

    let machine = gtk::Label::new(Some("\u{1F17F}"));
    machine.add_css_class("landing-machine");
    machine.set_halign(gtk::Align::Center);
    screen.append(&machine);

    screen
}
