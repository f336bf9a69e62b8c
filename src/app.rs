//! Application context - bridges the GTK-free state machine with GTK UI.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tokio::sync::mpsc;

use crate::config::KioskConfig;
use crate::peripherals::{card_reader, scanner, ScanEvent};
use crate::state::{KioskCommand, KioskEvent, SessionController, TimedAction};

/// Messages sent from async tasks to the GTK main loop
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Process a kiosk event through the state machine
    Event(KioskEvent),
}

/// Sender that can dispatch messages to the GTK main loop from any thread
#[derive(Clone)]
pub struct MessageSender {
    /// tokio channel drained by a glib timeout on the GTK main loop
    tx: mpsc::UnboundedSender<AppMessage>,
}

impl MessageSender {
    pub fn send(&self, msg: AppMessage) {
        let _ = self.tx.send(msg);
    }

    pub fn send_event(&self, event: KioskEvent) {
        self.send(AppMessage::Event(event));
    }
}

/// Application context - holds state and provides methods to interact with it
pub struct AppContext {
    /// The GTK-free state machine
    pub controller: RefCell<SessionController>,
    /// Site settings
    pub config: KioskConfig,
    /// Tokio runtime for the mock peripherals
    pub runtime: Arc<tokio::runtime::Runtime>,
    /// Sender for dispatching messages to GTK main loop
    pub message_tx: MessageSender,
}

impl AppContext {
    pub fn new(
        runtime: Arc<tokio::runtime::Runtime>,
        config: KioskConfig,
    ) -> (Rc<Self>, mpsc::UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();

        let ctx = Rc::new(Self {
            controller: RefCell::new(SessionController::new(now())),
            config,
            runtime,
            message_tx: MessageSender { tx },
        });

        (ctx, rx)
    }

    /// Send an event to the state machine (from any thread)
    pub fn send_event(&self, event: KioskEvent) {
        self.message_tx.send(AppMessage::Event(event));
    }

    /// Process an event and execute resulting commands
    /// This should be called from the GTK main loop
    pub fn process_event(self: &Rc<Self>, event: KioskEvent) -> Vec<KioskCommand> {
        let commands = self.controller.borrow_mut().process(event, now());

        for cmd in &commands {
            self.execute_command(cmd.clone());
        }

        commands
    }

    /// Execute a command from the state machine
    fn execute_command(self: &Rc<Self>, cmd: KioskCommand) {
        match cmd {
            KioskCommand::StartScanner => {
                let tx = self.message_tx.clone();
                scanner::start(&self.runtime, &self.config, move |scan_event| {
                    let event = match scan_event {
                        ScanEvent::Phase(phase) => KioskEvent::ScanPhaseChanged(phase),
                        ScanEvent::Recognized { plate } => KioskEvent::PlateRecognized { plate },
                    };
                    tx.send_event(event);
                });
            }

            KioskCommand::StartCardReader { gen } => {
                let tx = self.message_tx.clone();
                card_reader::start(&self.runtime, self.config.card_read_ms, gen, move |gen| {
                    tx.send_event(KioskEvent::CardAccepted { gen });
                });
            }

            KioskCommand::Schedule { action, gen } => {
                let delay_ms = match action {
                    TimedAction::Advance(_) => self.config.landing_ms,
                    TimedAction::Restart => self.config.thank_you_ms,
                };
                let tx = self.message_tx.clone();
                glib::timeout_add_once(std::time::Duration::from_millis(delay_ms), move || {
                    tx.send_event(KioskEvent::TimerFired { action, gen });
                });
            }

            KioskCommand::UpdateUi => {
                // This is handled by the window after processing events
            }
        }
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
