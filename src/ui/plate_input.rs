//! Plate entry: country selection, plate field, on-screen keyboard.

use gtk4 as gtk;
use gtk4::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::config::KioskConfig;
use crate::i18n::{self, Language};
use crate::plate::CountryCode;
use crate::ui::widgets::keyboard::{self, create_keyboard};
use crate::ui::widgets::create_header;

pub fn create(
    config: &KioskConfig,
    language: Language,
    country: CountryCode,
    initial_plate: &str,
    on_submit: impl Fn(String, CountryCode) + 'static,
    on_back: impl Fn() + 'static,
    on_language: impl Fn(Language) + 'static,
    on_exit: impl Fn() + 'static,
) -> gtk::Box {
    let t = &i18n::texts(language).plate_input;
    let min_len = config.min_plate_len;
    let demo_plate = config.demo_plate.clone();

    let screen = gtk::Box::new(gtk::Orientation::Vertical, 0);
    screen.add_css_class("plate-input-screen");

    screen.append(&create_header(language, true, on_back, on_language, on_exit));

    let content = gtk::Box::new(gtk::Orientation::Vertical, 20);
    content.set_vexpand(true);
    content.set_margin_start(32);
    content.set_margin_end(32);

    let title = gtk::Label::new(Some(t.title));
    title.add_css_class("screen-title");
    title.set_wrap(true);
    content.append(&title);

    let selected = Rc::new(Cell::new(country));

    // Step 1: country, step 2: plate
    let steps = gtk::Box::new(gtk::Orientation::Horizontal, 48);
    steps.set_halign(gtk::Align::Center);

    let country_col = gtk::Box::new(gtk::Orientation::Vertical, 8);
    let step1 = gtk::Label::new(Some("1."));
    step1.add_css_class("step-number");
    country_col.append(&step1);

    let change_country = gtk::Label::new(Some(t.change_country));
    change_country.add_css_class("step-caption");
    country_col.append(&change_country);

    let entry = gtk::Entry::new();
    entry.add_css_class("plate-entry");
    entry.set_text(initial_plate);
    entry.set_max_length(12);
    entry.set_placeholder_text(Some(country.placeholder()));
    entry.set_alignment(0.5);

    let country_row = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    let buttons: Rc<Vec<gtk::Button>> = Rc::new(
        CountryCode::ALL
            .iter()
            .map(|c| {
                let button =
                    gtk::Button::with_label(&format!("{} {}", c.flag(), c.name(language)));
                button.add_css_class("country-button");
                if *c == country {
                    button.add_css_class("country-selected");
                }
                button
            })
            .collect(),
    );
    for (button, c) in buttons.iter().zip(CountryCode::ALL) {
        let selected = selected.clone();
        let all = buttons.clone();
        let entry = entry.clone();
        button.connect_clicked(move |button| {
            selected.set(c);
            for other in all.iter() {
                other.remove_css_class("country-selected");
            }
            button.add_css_class("country-selected");
            entry.set_placeholder_text(Some(c.placeholder()));
        });
        country_row.append(button);
    }
    country_col.append(&country_row);
    steps.append(&country_col);

    let plate_col = gtk::Box::new(gtk::Orientation::Vertical, 8);
    let step2 = gtk::Label::new(Some("2."));
    step2.add_css_class("step-number");
    plate_col.append(&step2);
    plate_col.append(&entry);
    steps.append(&plate_col);

    content.append(&steps);

    // Suggest the scanned plate once the typed prefix matches it
    let proposal = gtk::Button::with_label(&format!("{} {}", t.proposal, demo_plate));
    proposal.add_css_class("proposal-button");
    proposal.set_halign(gtk::Align::Center);
    proposal.set_visible(
        initial_plate.len() > 2
            && demo_plate.contains(initial_plate)
            && initial_plate != demo_plate,
    );
    {
        let entry = entry.clone();
        let demo_plate = demo_plate.clone();
        proposal.connect_clicked(move |_| entry.set_text(&demo_plate));
    }
    content.append(&proposal);

    content.append(&create_keyboard(language, {
        let entry = entry.clone();
        move |key| {
            let mut text = entry.text().to_string();
            match key {
                keyboard::KEY_DELETE => {
                    text.pop();
                }
                keyboard::KEY_SPACE => text.push(' '),
                key => text.push_str(key),
            }
            entry.set_text(&text);
        }
    }));

    let continue_button = gtk::Button::with_label(&format!("{} \u{2192}", t.continue_));
    continue_button.add_css_class("primary-button");
    continue_button.set_halign(gtk::Align::Center);
    continue_button.set_sensitive(initial_plate.len() >= min_len);
    {
        let entry = entry.clone();
        let selected = selected.clone();
        continue_button.connect_clicked(move |_| {
            on_submit(entry.text().to_string(), selected.get());
        });
    }
    content.append(&continue_button);

    {
        let proposal = proposal.clone();
        let continue_button = continue_button.clone();
        entry.connect_changed(move |entry| {
            let text = entry.text().to_string();
            let upper = text.to_uppercase();
            if upper != text {
                // Re-enters this handler with the folded text
                entry.set_text(&upper);
                return;
            }
            continue_button.set_sensitive(text.len() >= min_len);
            proposal.set_visible(text.len() > 2 && demo_plate.contains(&text) && text != demo_plate);
        });
    }

    screen.append(&content);

    screen
}
