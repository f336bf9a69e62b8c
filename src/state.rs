//! GTK-free session state machine and business logic.
//!
//! This module contains the pure Rust state machine that can be tested
//! independently of GTK. The UI layer observes state changes and rebuilds
//! the current screen accordingly. All timed auto-transitions are issued as
//! commands carrying the current timer generation; a fire whose generation
//! no longer matches is stale and gets dropped, so a pending timer can never
//! apply a transition after the user has already navigated elsewhere.

use chrono::NaiveDateTime;

use crate::arrival;
use crate::i18n::Language;
use crate::plate::{self, CountryCode};

/// Generation counter for timed transitions. Bumped on every committed step
/// change; fires minted under an older generation are ignored.
pub type TimerGen = u64;

/// Screens of the payment flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KioskStep {
    /// Mocked camera recognition while the car pulls up
    EntryScan,
    /// Machine zoom-in animation before the menu appears
    Landing,
    /// "Parken bezahlen" entry menu
    MainMenu,
    /// License plate entry with country selection
    PlateInput,
    /// "Is this your plate?" confirmation
    PlateConfirm,
    /// Entered plate does not match the scanned one
    PlateMismatch,
    /// Manual arrival time selection
    ArrivalTime,
    /// Choose card or coins
    PaymentSelection,
    /// Waiting for the card reader
    CardPayment,
    /// Payment accepted, goodbye
    ThankYou,
}

/// Phase of the mocked plate recognition shown on the entry screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Entering,
    Scanning,
    Scanned,
}

/// Everything collected about the current trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripData {
    /// Plate as typed by the customer
    pub entered_plate: String,
    /// Plate reported by the entry camera; written once per scan
    pub scanned_plate: String,
    pub country: CountryCode,
    pub arrival_time: NaiveDateTime,
}

impl TripData {
    fn new(arrival_time: NaiveDateTime) -> Self {
        Self {
            entered_plate: String::new(),
            scanned_plate: String::new(),
            country: CountryCode::default(),
            arrival_time,
        }
    }
}

/// Per-step payload carried by an advance. A tagged union so a transition
/// can only ever update the fields it is allowed to touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepPatch {
    Plate { plate: String, country: CountryCode },
    Arrival { time: NaiveDateTime },
}

/// Timed transition payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimedAction {
    Advance(KioskStep),
    Restart,
}

/// Events that drive the state machine
#[derive(Debug, Clone)]
pub enum KioskEvent {
    /// Kiosk powered on; kicks off the entry scanner
    Boot,

    // User actions
    Advance {
        step: KioskStep,
        patch: Option<StepPatch>,
    },
    Back,
    Exit,
    Restart,
    SetLanguage(Language),

    // Peripheral responses
    ScanPhaseChanged(ScanPhase),
    PlateRecognized { plate: String },
    CardAccepted { gen: TimerGen },

    // Timers
    TimerFired { action: TimedAction, gen: TimerGen },
}

/// Commands emitted by the state machine for the app layer to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KioskCommand {
    /// Run the mocked entry camera
    StartScanner,
    /// Run the mocked card reader; its approval must echo `gen`
    StartCardReader { gen: TimerGen },
    /// Schedule a one-shot timed transition
    Schedule { action: TimedAction, gen: TimerGen },
    /// Update UI to reflect new state
    UpdateUi,
}

/// The session controller: single source of truth for all mutable kiosk
/// state. Views never assign a step; every transition goes through
/// [`SessionController::process`].
#[derive(Debug)]
pub struct SessionController {
    pub step: KioskStep,
    pub trip: TripData,
    pub language: Language,
    pub scan_phase: ScanPhase,
    timer_gen: TimerGen,
}

impl SessionController {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            step: KioskStep::EntryScan,
            trip: TripData::new(arrival::default_arrival(now)),
            language: Language::default(),
            scan_phase: ScanPhase::default(),
            timer_gen: 0,
        }
    }

    /// Entered plate equals the scanned one after normalization. The demo
    /// plate skips manual arrival entry because the entry time is known.
    pub fn is_demo_plate(&self) -> bool {
        plate::plates_match(&self.trip.entered_plate, &self.trip.scanned_plate)
    }

    /// Process an event and return commands to execute. `now` is injected so
    /// the machine stays a deterministic function of its inputs.
    pub fn process(&mut self, event: KioskEvent, now: NaiveDateTime) -> Vec<KioskCommand> {
        let mut commands = Vec::new();

        match event {
            KioskEvent::Boot => {
                commands.push(KioskCommand::StartScanner);
                commands.push(KioskCommand::UpdateUi);
            }

            KioskEvent::ScanPhaseChanged(phase) => {
                // The scanner only narrates the entry screen
                if self.step == KioskStep::EntryScan {
                    self.scan_phase = phase;
                    commands.push(KioskCommand::UpdateUi);
                }
            }

            KioskEvent::PlateRecognized { plate } => {
                if self.step == KioskStep::EntryScan {
                    log::info!("Plate recognized: {}", plate);
                    self.trip.scanned_plate = plate;
                    self.commit(KioskStep::Landing, &mut commands);
                }
            }

            KioskEvent::Advance { step, patch } => {
                let entered_plate = matches!(patch, Some(StepPatch::Plate { .. }));
                if let Some(patch) = patch {
                    self.apply_patch(patch);
                }

                // A new trip started from the menu gets a fresh default
                // arrival proposal.
                if step == KioskStep::PlateInput && self.step == KioskStep::MainMenu {
                    self.trip.arrival_time = arrival::default_arrival(now);
                }

                // Guardrail: a plate submit may only reach the confirm
                // screen when it matches the scan, otherwise it is routed
                // to the mismatch review regardless of the requested target.
                let target = if step == KioskStep::PlateConfirm && entered_plate {
                    if self.is_demo_plate() {
                        KioskStep::PlateConfirm
                    } else {
                        KioskStep::PlateMismatch
                    }
                } else {
                    step
                };

                self.commit(target, &mut commands);
            }

            KioskEvent::Back => {
                if let Some(prev) = self.predecessor() {
                    self.commit(prev, &mut commands);
                }
            }

            KioskEvent::SetLanguage(language) => {
                self.language = language;
                commands.push(KioskCommand::UpdateUi);
            }

            KioskEvent::Exit => {
                self.trip.entered_plate.clear();
                self.trip.country = CountryCode::default();
                self.commit(KioskStep::MainMenu, &mut commands);
            }

            KioskEvent::Restart => {
                self.reset(now);
                self.commit(KioskStep::MainMenu, &mut commands);
            }

            KioskEvent::CardAccepted { gen } => {
                if gen == self.timer_gen && self.step == KioskStep::CardPayment {
                    self.commit(KioskStep::ThankYou, &mut commands);
                }
            }

            KioskEvent::TimerFired { action, gen } => {
                if gen == self.timer_gen {
                    match action {
                        TimedAction::Advance(step) => self.commit(step, &mut commands),
                        TimedAction::Restart => {
                            self.reset(now);
                            self.commit(KioskStep::MainMenu, &mut commands);
                        }
                    }
                }
            }
        }

        commands
    }

    fn apply_patch(&mut self, patch: StepPatch) {
        match patch {
            StepPatch::Plate { plate, country } => {
                self.trip.entered_plate = plate;
                self.trip.country = country;
            }
            StepPatch::Arrival { time } => self.trip.arrival_time = time,
        }
    }

    /// Commit a step, invalidating pending timers, and emit the follow-up
    /// commands the new step requires.
    fn commit(&mut self, step: KioskStep, commands: &mut Vec<KioskCommand>) {
        self.step = step;
        self.timer_gen += 1;

        match step {
            KioskStep::Landing => commands.push(KioskCommand::Schedule {
                action: TimedAction::Advance(KioskStep::MainMenu),
                gen: self.timer_gen,
            }),
            KioskStep::CardPayment => {
                commands.push(KioskCommand::StartCardReader { gen: self.timer_gen })
            }
            KioskStep::ThankYou => commands.push(KioskCommand::Schedule {
                action: TimedAction::Restart,
                gen: self.timer_gen,
            }),
            _ => {}
        }

        commands.push(KioskCommand::UpdateUi);
    }

    /// Fixed back-navigation table. The main menu has no back affordance,
    /// so it (and the pre-menu screens) stay put.
    fn predecessor(&self) -> Option<KioskStep> {
        match self.step {
            KioskStep::PlateInput => Some(KioskStep::MainMenu),
            KioskStep::PlateConfirm | KioskStep::PlateMismatch => Some(KioskStep::PlateInput),
            KioskStep::ArrivalTime => Some(KioskStep::PlateConfirm),
            KioskStep::PaymentSelection => Some(if self.is_demo_plate() {
                KioskStep::PlateConfirm
            } else {
                KioskStep::ArrivalTime
            }),
            KioskStep::CardPayment => Some(KioskStep::PaymentSelection),
            _ => None,
        }
    }

    /// Full reset to the kiosk-ready state between customers. The scanned
    /// plate is cleared too: with no scan on record the next entry can never
    /// false-match and is routed through manual arrival entry.
    fn reset(&mut self, now: NaiveDateTime) {
        self.trip = TripData::new(arrival::default_arrival(now));
        self.language = Language::default();
        self.scan_phase = ScanPhase::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn now() -> NaiveDateTime {
        at(10, 7)
    }

    /// Drive a fresh controller through boot and a completed scan.
    fn scanned_controller(plate: &str) -> SessionController {
        let mut sm = SessionController::new(now());
        sm.process(KioskEvent::Boot, now());
        sm.process(
            KioskEvent::PlateRecognized {
                plate: plate.into(),
            },
            now(),
        );
        sm
    }

    fn advance_to_menu(sm: &mut SessionController) {
        let gen = sm.timer_gen;
        sm.process(
            KioskEvent::TimerFired {
                action: TimedAction::Advance(KioskStep::MainMenu),
                gen,
            },
            now(),
        );
        assert_eq!(sm.step, KioskStep::MainMenu);
    }

    fn submit_plate(sm: &mut SessionController, plate: &str) -> Vec<KioskCommand> {
        sm.process(
            KioskEvent::Advance {
                step: KioskStep::PlateConfirm,
                patch: Some(StepPatch::Plate {
                    plate: plate.into(),
                    country: CountryCode::It,
                }),
            },
            now(),
        )
    }

    #[test]
    fn test_initial_state() {
        let sm = SessionController::new(now());
        assert_eq!(sm.step, KioskStep::EntryScan);
        assert_eq!(sm.scan_phase, ScanPhase::Entering);
        assert_eq!(sm.language, Language::De);
        assert_eq!(sm.trip.country, CountryCode::It);
        assert!(sm.trip.entered_plate.is_empty());
        assert!(sm.trip.scanned_plate.is_empty());
        // 10:07 minus three hours, floored to the quarter hour
        assert_eq!(sm.trip.arrival_time, at(7, 0));
    }

    #[test]
    fn test_boot_starts_scanner() {
        let mut sm = SessionController::new(now());
        let cmds = sm.process(KioskEvent::Boot, now());
        assert!(cmds.contains(&KioskCommand::StartScanner));
    }

    #[test]
    fn test_scan_reaches_landing_then_menu() {
        let mut sm = SessionController::new(now());
        sm.process(KioskEvent::Boot, now());

        sm.process(KioskEvent::ScanPhaseChanged(ScanPhase::Scanning), now());
        assert_eq!(sm.scan_phase, ScanPhase::Scanning);

        let cmds = sm.process(
            KioskEvent::PlateRecognized {
                plate: "GRZ-M266".into(),
            },
            now(),
        );
        assert_eq!(sm.step, KioskStep::Landing);
        assert_eq!(sm.trip.scanned_plate, "GRZ-M266");
        assert!(cmds.iter().any(|c| matches!(
            c,
            KioskCommand::Schedule {
                action: TimedAction::Advance(KioskStep::MainMenu),
                ..
            }
        )));

        advance_to_menu(&mut sm);
    }

    #[test]
    fn test_scan_events_ignored_after_entry() {
        let mut sm = scanned_controller("GRZ-M266");
        advance_to_menu(&mut sm);

        let cmds = sm.process(
            KioskEvent::PlateRecognized {
                plate: "XX-0000".into(),
            },
            now(),
        );
        assert!(cmds.is_empty());
        assert_eq!(sm.trip.scanned_plate, "GRZ-M266");
        assert_eq!(sm.step, KioskStep::MainMenu);
    }

    #[test]
    fn test_matching_plate_commits_confirm() {
        let mut sm = scanned_controller("GRZ-M266");
        advance_to_menu(&mut sm);
        sm.process(
            KioskEvent::Advance {
                step: KioskStep::PlateInput,
                patch: None,
            },
            now(),
        );

        // Separators and case do not matter
        submit_plate(&mut sm, "grzm266");
        assert_eq!(sm.step, KioskStep::PlateConfirm);
        assert!(sm.is_demo_plate());
    }

    #[test]
    fn test_mismatched_plate_redirected_to_review() {
        let mut sm = scanned_controller("GRZ-M266");
        advance_to_menu(&mut sm);

        submit_plate(&mut sm, "ABC123");
        assert_eq!(sm.step, KioskStep::PlateMismatch);
        assert!(!sm.is_demo_plate());
        assert_eq!(sm.trip.entered_plate, "ABC123");
    }

    #[test]
    fn test_confirm_without_plate_patch_not_overridden() {
        // Back-navigation into the confirm screen carries no patch and must
        // not be re-routed even though the stored plates differ.
        let mut sm = scanned_controller("GRZ-M266");
        advance_to_menu(&mut sm);
        sm.trip.entered_plate = "ABC123".into();

        sm.process(
            KioskEvent::Advance {
                step: KioskStep::PlateConfirm,
                patch: None,
            },
            now(),
        );
        assert_eq!(sm.step, KioskStep::PlateConfirm);
    }

    #[test]
    fn test_back_table() {
        let mut sm = scanned_controller("GRZ-M266");
        advance_to_menu(&mut sm);

        for (from, expected) in [
            (KioskStep::PlateInput, KioskStep::MainMenu),
            (KioskStep::PlateConfirm, KioskStep::PlateInput),
            (KioskStep::PlateMismatch, KioskStep::PlateInput),
            (KioskStep::ArrivalTime, KioskStep::PlateConfirm),
            (KioskStep::CardPayment, KioskStep::PaymentSelection),
        ] {
            sm.step = from;
            sm.process(KioskEvent::Back, now());
            assert_eq!(sm.step, expected, "back from {:?}", from);
        }
    }

    #[test]
    fn test_back_from_payment_selection_depends_on_demo_plate() {
        let mut sm = scanned_controller("GRZ-M266");
        advance_to_menu(&mut sm);

        submit_plate(&mut sm, "GRZ M266");
        sm.step = KioskStep::PaymentSelection;
        sm.process(KioskEvent::Back, now());
        assert_eq!(sm.step, KioskStep::PlateConfirm);

        submit_plate(&mut sm, "ABC123");
        sm.step = KioskStep::PaymentSelection;
        sm.process(KioskEvent::Back, now());
        assert_eq!(sm.step, KioskStep::ArrivalTime);
    }

    #[test]
    fn test_back_on_main_menu_is_noop() {
        let mut sm = scanned_controller("GRZ-M266");
        advance_to_menu(&mut sm);

        let cmds = sm.process(KioskEvent::Back, now());
        assert_eq!(sm.step, KioskStep::MainMenu);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_exit_keeps_scan_and_language() {
        let mut sm = scanned_controller("GRZ-M266");
        advance_to_menu(&mut sm);
        sm.process(KioskEvent::SetLanguage(Language::It), now());
        submit_plate(&mut sm, "ABC123");

        sm.process(KioskEvent::Exit, now());
        assert_eq!(sm.step, KioskStep::MainMenu);
        assert!(sm.trip.entered_plate.is_empty());
        assert_eq!(sm.trip.country, CountryCode::It);
        assert_eq!(sm.trip.scanned_plate, "GRZ-M266");
        assert_eq!(sm.language, Language::It);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut sm = scanned_controller("GRZ-M266");
        advance_to_menu(&mut sm);
        sm.process(KioskEvent::SetLanguage(Language::It), now());
        submit_plate(&mut sm, "ABC123");
        sm.process(
            KioskEvent::Advance {
                step: KioskStep::ArrivalTime,
                patch: Some(StepPatch::Arrival { time: at(6, 30) }),
            },
            now(),
        );

        sm.process(KioskEvent::Restart, now());
        assert_eq!(sm.step, KioskStep::MainMenu);
        assert!(sm.trip.entered_plate.is_empty());
        assert!(sm.trip.scanned_plate.is_empty());
        assert_eq!(sm.trip.country, CountryCode::It);
        assert_eq!(sm.trip.arrival_time, at(7, 0));
        assert_eq!(sm.language, Language::De);
    }

    #[test]
    fn test_restart_then_back_stays_on_main_menu() {
        let mut sm = scanned_controller("GRZ-M266");
        advance_to_menu(&mut sm);
        sm.process(KioskEvent::Restart, now());
        sm.process(KioskEvent::Back, now());
        assert_eq!(sm.step, KioskStep::MainMenu);
    }

    #[test]
    fn test_set_language_is_idempotent() {
        let mut sm = scanned_controller("GRZ-M266");
        advance_to_menu(&mut sm);
        let step = sm.step;
        let trip = sm.trip.clone();

        sm.process(KioskEvent::SetLanguage(Language::It), now());
        sm.process(KioskEvent::SetLanguage(Language::It), now());
        assert_eq!(sm.language, Language::It);
        assert_eq!(sm.step, step);
        assert_eq!(sm.trip, trip);
    }

    #[test]
    fn test_new_trip_redefaults_arrival() {
        let mut sm = scanned_controller("GRZ-M266");
        advance_to_menu(&mut sm);
        sm.trip.arrival_time = at(6, 30);

        sm.process(
            KioskEvent::Advance {
                step: KioskStep::PlateInput,
                patch: None,
            },
            now(),
        );
        assert_eq!(sm.trip.arrival_time, at(7, 0));
    }

    #[test]
    fn test_card_acceptance_completes_payment() {
        let mut sm = scanned_controller("GRZ-M266");
        advance_to_menu(&mut sm);

        let cmds = sm.process(
            KioskEvent::Advance {
                step: KioskStep::CardPayment,
                patch: None,
            },
            now(),
        );
        let gen = match cmds
            .iter()
            .find(|c| matches!(c, KioskCommand::StartCardReader { .. }))
        {
            Some(KioskCommand::StartCardReader { gen }) => *gen,
            _ => panic!("card reader not started"),
        };

        let cmds = sm.process(KioskEvent::CardAccepted { gen }, now());
        assert_eq!(sm.step, KioskStep::ThankYou);
        assert!(cmds.iter().any(|c| matches!(
            c,
            KioskCommand::Schedule {
                action: TimedAction::Restart,
                ..
            }
        )));
    }

    #[test]
    fn test_stale_card_acceptance_ignored() {
        let mut sm = scanned_controller("GRZ-M266");
        advance_to_menu(&mut sm);

        let cmds = sm.process(
            KioskEvent::Advance {
                step: KioskStep::CardPayment,
                patch: None,
            },
            now(),
        );
        let gen = match cmds
            .iter()
            .find(|c| matches!(c, KioskCommand::StartCardReader { .. }))
        {
            Some(KioskCommand::StartCardReader { gen }) => *gen,
            _ => panic!("card reader not started"),
        };

        // User bails out before the reader answers
        sm.process(KioskEvent::Back, now());
        assert_eq!(sm.step, KioskStep::PaymentSelection);

        let cmds = sm.process(KioskEvent::CardAccepted { gen }, now());
        assert!(cmds.is_empty());
        assert_eq!(sm.step, KioskStep::PaymentSelection);
    }

    #[test]
    fn test_stale_timer_ignored_after_manual_exit() {
        let mut sm = scanned_controller("GRZ-M266");
        advance_to_menu(&mut sm);
        let cmds = sm.process(
            KioskEvent::Advance {
                step: KioskStep::ThankYou,
                patch: None,
            },
            now(),
        );
        let stale = match cmds
            .iter()
            .find(|c| matches!(c, KioskCommand::Schedule { .. }))
        {
            Some(KioskCommand::Schedule { gen, .. }) => *gen,
            _ => panic!("auto-restart not scheduled"),
        };

        // Customer taps the exit button before the auto-restart fires
        sm.process(KioskEvent::Restart, now());
        sm.process(KioskEvent::SetLanguage(Language::It), now());

        let cmds = sm.process(
            KioskEvent::TimerFired {
                action: TimedAction::Restart,
                gen: stale,
            },
            now(),
        );
        assert!(cmds.is_empty());
        // A stale restart must not wipe the new session's language
        assert_eq!(sm.language, Language::It);
    }

    #[test]
    fn test_timer_cannot_fire_twice() {
        let mut sm = scanned_controller("GRZ-M266");
        assert_eq!(sm.step, KioskStep::Landing);
        let gen = sm.timer_gen;

        sm.process(
            KioskEvent::TimerFired {
                action: TimedAction::Advance(KioskStep::MainMenu),
                gen,
            },
            now(),
        );
        assert_eq!(sm.step, KioskStep::MainMenu);
        sm.process(
            KioskEvent::Advance {
                step: KioskStep::PlateInput,
                patch: None,
            },
            now(),
        );

        // The same fire delivered again is a no-op
        let cmds = sm.process(
            KioskEvent::TimerFired {
                action: TimedAction::Advance(KioskStep::MainMenu),
                gen,
            },
            now(),
        );
        assert!(cmds.is_empty());
        assert_eq!(sm.step, KioskStep::PlateInput);
    }
}
