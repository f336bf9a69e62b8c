//! Manual arrival time selection.
//!
//! Date and time spinners may never pass "now": each increment button goes
//! insensitive as soon as one more step would land in the future.

use gtk4 as gtk;
use gtk4::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::arrival::{self, MINUTE_STEP};
use crate::i18n::{self, Language};
use crate::ui;
use crate::ui::widgets::create_header;

fn selection(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0)
        .expect("spinner values are in range")
}

fn spin_button(label: &str) -> gtk::Button {
    let button = gtk::Button::with_label(label);
    button.add_css_class("spin-button");
    button
}

pub fn create(
    language: Language,
    initial: NaiveDateTime,
    on_submit: impl Fn(NaiveDateTime) + 'static,
    on_back: impl Fn() + 'static,
    on_language: impl Fn(Language) + 'static,
    on_exit: impl Fn() + 'static,
) -> gtk::Box {
    let t = &i18n::texts(language).arrival_time;
    let now = ui::now();

    let screen = gtk::Box::new(gtk::Orientation::Vertical, 0);
    screen.add_css_class("arrival-screen");

    screen.append(&create_header(language, true, on_back, on_language, on_exit));

    let content = gtk::Box::new(gtk::Orientation::Vertical, 24);
    content.set_vexpand(true);
    content.set_valign(gtk::Align::Center);
    content.set_margin_start(32);
    content.set_margin_end(32);

    let title = gtk::Label::new(Some(t.title));
    title.add_css_class("screen-title");
    content.append(&title);

    // Picker state, seeded from the proposed arrival
    let date = Rc::new(Cell::new(initial.date()));
    let hour = Rc::new(Cell::new(initial.hour()));
    let minute = Rc::new(Cell::new(initial.minute()));

    // Date row
    let date_row = gtk::Box::new(gtk::Orientation::Horizontal, 16);
    date_row.set_halign(gtk::Align::Center);
    let date_prev = spin_button("\u{2039}");
    let date_label = gtk::Label::new(None);
    date_label.add_css_class("date-label");
    let date_next = spin_button("\u{203A}");
    date_row.append(&date_prev);
    date_row.append(&date_label);
    date_row.append(&date_next);
    content.append(&date_row);

    // Clock spinners
    let clock_row = gtk::Box::new(gtk::Orientation::Horizontal, 32);
    clock_row.set_halign(gtk::Align::Center);

    let hour_col = gtk::Box::new(gtk::Orientation::Vertical, 8);
    let hour_up = spin_button("\u{2303}");
    let hour_label = gtk::Label::new(None);
    hour_label.add_css_class("clock-label");
    let hour_down = spin_button("\u{2304}");
    hour_col.append(&hour_up);
    hour_col.append(&hour_label);
    hour_col.append(&hour_down);
    clock_row.append(&hour_col);

    let colon = gtk::Label::new(Some(":"));
    colon.add_css_class("clock-colon");
    clock_row.append(&colon);

    let minute_col = gtk::Box::new(gtk::Orientation::Vertical, 8);
    let minute_up = spin_button("\u{2303}");
    let minute_label = gtk::Label::new(None);
    minute_label.add_css_class("clock-label");
    let minute_down = spin_button("\u{2304}");
    minute_col.append(&minute_up);
    minute_col.append(&minute_label);
    minute_col.append(&minute_down);
    clock_row.append(&minute_col);

    content.append(&clock_row);

    let refresh: Rc<dyn Fn()> = {
        let date = date.clone();
        let hour = hour.clone();
        let minute = minute.clone();
        let date_label = date_label.clone();
        let hour_label = hour_label.clone();
        let minute_label = minute_label.clone();
        let date_next = date_next.clone();
        let hour_up = hour_up.clone();
        let hour_down = hour_down.clone();
        let minute_up = minute_up.clone();
        let minute_down = minute_down.clone();
        Rc::new(move || {
            let (d, h, m) = (date.get(), hour.get(), minute.get());
            date_label.set_text(&i18n::format_date_long(language, d));
            hour_label.set_text(&format!("{:02}", h));
            minute_label.set_text(&format!("{:02}", m));

            date_next.set_sensitive(
                d.succ_opt()
                    .is_some_and(|next| arrival::fits_before(selection(next, h, m), now)),
            );
            hour_up.set_sensitive(h < 23 && arrival::fits_before(selection(d, h + 1, m), now));
            minute_up.set_sensitive(
                m + MINUTE_STEP < 60
                    && arrival::fits_before(selection(d, h, m + MINUTE_STEP), now),
            );
            hour_down.set_sensitive(h > 0);
            minute_down.set_sensitive(m >= MINUTE_STEP);
        })
    };

    {
        let date = date.clone();
        let refresh = refresh.clone();
        date_prev.connect_clicked(move |_| {
            if let Some(prev) = date.get().pred_opt() {
                date.set(prev);
            }
            refresh();
        });
    }
    {
        let date = date.clone();
        let refresh = refresh.clone();
        date_next.connect_clicked(move |_| {
            if let Some(next) = date.get().succ_opt() {
                date.set(next);
            }
            refresh();
        });
    }
    {
        let hour = hour.clone();
        let refresh = refresh.clone();
        hour_up.connect_clicked(move |_| {
            hour.set(hour.get() + 1);
            refresh();
        });
    }
    {
        let hour = hour.clone();
        let refresh = refresh.clone();
        hour_down.connect_clicked(move |_| {
            hour.set(hour.get().saturating_sub(1));
            refresh();
        });
    }
    {
        let minute = minute.clone();
        let refresh = refresh.clone();
        minute_up.connect_clicked(move |_| {
            minute.set(minute.get() + MINUTE_STEP);
            refresh();
        });
    }
    {
        let minute = minute.clone();
        let refresh = refresh.clone();
        minute_down.connect_clicked(move |_| {
            minute.set(minute.get().saturating_sub(MINUTE_STEP));
            refresh();
        });
    }

    refresh();

    let confirm = gtk::Button::with_label(t.confirm);
    confirm.add_css_class("primary-button");
    confirm.set_halign(gtk::Align::Center);
    confirm.connect_clicked(move |_| {
        on_submit(selection(date.get(), hour.get(), minute.get()));
    });
    content.append(&confirm);

    screen.append(&content);

    screen
}
