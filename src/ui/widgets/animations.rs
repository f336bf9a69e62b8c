//! Cross-step screen transition.
//!
//! The in-screen animations (car pull-up, camera blink, card pulse) are GTK
//! CSS keyframes; the fade between steps lives here because it targets the
//! widget being mounted rather than a style class.

use gtk4 as gtk;
use gtk4::prelude::*;
use libadwaita as adw;
use libadwaita::prelude::*;

/// Milliseconds a freshly mounted screen takes to fade in
const SWAP_FADE_MS: u32 = 250;

/// Fade the screen of a newly committed step in over the kiosk background.
pub fn reveal_screen(screen: &impl IsA<gtk::Widget>) {
    screen.set_opacity(0.0);

    let widget = screen.clone().upcast::<gtk::Widget>();
    let target = adw::CallbackAnimationTarget::new(move |opacity| {
        widget.set_opacity(opacity);
    });

    adw::TimedAnimation::builder()
        .widget(screen)
        .value_from(0.0)
        .value_to(1.0)
        .duration(SWAP_FADE_MS)
        .easing(adw::Easing::EaseOutCubic)
        .target(&target)
        .build()
        .play();
}
