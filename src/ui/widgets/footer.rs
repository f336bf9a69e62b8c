//! Screen footer with site name and service hotline.

use gtk4 as gtk;
use gtk4::prelude::*;

use crate::config::KioskConfig;

pub fn create_footer(config: &KioskConfig) -> gtk::Box {
    let footer = gtk::Box::new(gtk::Orientation::Horizontal, 0);
    footer.add_css_class("kiosk-footer");
    footer.set_margin_start(24);
    footer.set_margin_end(24);
    footer.set_margin_bottom(12);

    let site = gtk::Label::new(Some(&config.site_name));
    site.add_css_class("footer-site");
    footer.append(&site);

    let spacer = gtk::Box::new(gtk::Orientation::Horizontal, 0);
    spacer.set_hexpand(true);
    footer.append(&spacer);

    let hotline = gtk::Label::new(Some(&config.hotline));
    hotline.add_css_class("footer-hotline");
    hotline.set_justify(gtk::Justification::Right);
    footer.append(&hotline);

    footer
}
