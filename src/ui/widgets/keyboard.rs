//! On-screen keyboard for plate entry.
//!
//! German sessions get the QWERTZ layout, Italian sessions QWERTY; both
//! carry digits, dash, space and backspace.

use gtk4 as gtk;
use gtk4::prelude::*;

use crate::i18n::Language;

pub const KEY_DELETE: &str = "DELETE";
pub const KEY_SPACE: &str = "SPACE";

const DE_ROWS: [&[&str]; 4] = [
    &["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", KEY_DELETE],
    &["Q", "W", "E", "R", "T", "Z", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["Y", "X", "C", "V", "B", "N", "M", "-", KEY_SPACE],
];

const IT_ROWS: [&[&str]; 4] = [
    &["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", KEY_DELETE],
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["Z", "X", "C", "V", "B", "N", "M", "-", KEY_SPACE],
];

fn rows(language: Language) -> &'static [&'static [&'static str]] {
    match language {
        Language::De => &DE_ROWS,
        Language::It => &IT_ROWS,
    }
}

/// Build the keyboard. `on_key` receives the key token, including
/// [`KEY_DELETE`] and [`KEY_SPACE`].
pub fn create_keyboard(
    language: Language,
    on_key: impl Fn(&str) + Clone + 'static,
) -> gtk::Box {
    let keyboard = gtk::Box::new(gtk::Orientation::Vertical, 8);
    keyboard.add_css_class("keyboard");
    keyboard.set_halign(gtk::Align::Center);

    for row in rows(language) {
        let row_box = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        row_box.set_halign(gtk::Align::Center);

        for &key in *row {
            let label = match key {
                KEY_DELETE => "\u{232B}",
                KEY_SPACE => "\u{2423}",
                other => other,
            };
            let button = gtk::Button::with_label(label);
            button.add_css_class("key");
            if key.len() == 1 && key.chars().all(|c| c.is_ascii_digit()) {
                button.add_css_class("key-digit");
            }

            let on_key = on_key.clone();
            button.connect_clicked(move |_| on_key(key));
            row_box.append(&button);
        }

        keyboard.append(&row_box);
    }

    keyboard
}
