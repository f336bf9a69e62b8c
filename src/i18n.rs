//! UI languages and the German/Italian text tables.
//!
//! Every screen pulls its strings from one `Texts` table so a language
//! switch is a plain table swap. Date formatting is done here too since
//! chrono only ships English calendar names.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    De,
    It,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::De => "DE",
            Language::It => "IT",
        }
    }

    pub fn toggled(self) -> Language {
        match self {
            Language::De => Language::It,
            Language::It => Language::De,
        }
    }
}

pub struct EntryScanTexts {
    pub entering: &'static str,
    pub scanning: &'static str,
    pub scanned: &'static str,
    pub demo_notice: &'static str,
}

pub struct MainMenuTexts {
    pub title: &'static str,
    pub leave: &'static str,
    pub day_ticket: &'static str,
}

pub struct PlateInputTexts {
    pub title: &'static str,
    pub change_country: &'static str,
    pub proposal: &'static str,
    pub continue_: &'static str,
}

pub struct PlateConfirmTexts {
    pub title: &'static str,
    pub country_check: &'static str,
    pub edit: &'static str,
    pub yes: &'static str,
}

pub struct PlateMismatchTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub scanned: &'static str,
    pub entered: &'static str,
    pub question: &'static str,
    pub country_check: &'static str,
    pub back: &'static str,
    pub continue_: &'static str,
}

pub struct ArrivalTimeTexts {
    pub title: &'static str,
    pub confirm: &'static str,
}

pub struct PaymentSelectionTexts {
    pub duration: &'static str,
    pub hours: &'static str,
    pub minutes: &'static str,
    pub choose_method: &'static str,
    pub pay_card: &'static str,
    pub pay_coins: &'static str,
}

pub struct CardPaymentTexts {
    pub title: &'static str,
    pub contactless_hint: &'static str,
}

pub struct ThankYouTexts {
    pub title: &'static str,
    pub leave_notice: &'static str,
    pub exit: &'static str,
    pub auto_close: &'static str,
}

pub struct Texts {
    pub entry_scan: EntryScanTexts,
    pub main_menu: MainMenuTexts,
    pub plate_input: PlateInputTexts,
    pub plate_confirm: PlateConfirmTexts,
    pub plate_mismatch: PlateMismatchTexts,
    pub arrival_time: ArrivalTimeTexts,
    pub payment_selection: PaymentSelectionTexts,
    pub card_payment: CardPaymentTexts,
    pub thank_you: ThankYouTexts,
    pub your_vehicle: &'static str,
}

static DE: Texts = Texts {
    entry_scan: EntryScanTexts {
        entering: "Fahrzeug erkannt...",
        scanning: "Kennzeichen wird gescannt...",
        scanned: "Kennzeichen erkannt:",
        demo_notice: "Demo - Automatische Kennzeichenerkennung",
    },
    main_menu: MainMenuTexts {
        title: "PARKEN BEZAHLEN",
        leave: "ICH FAHRE WEG",
        day_ticket: "TAGESTICKET",
    },
    plate_input: PlateInputTexts {
        title: "Bitte geben Sie Ihr korrektes Kennzeichen ein",
        change_country: "LAND ÄNDERN",
        proposal: "Vorschlag:",
        continue_: "WEITER",
    },
    plate_confirm: PlateConfirmTexts {
        title: "Ist das Ihr Kennzeichen?",
        country_check: "Bitte prüfen Sie das Land",
        edit: "Bearbeiten",
        yes: "Ja",
    },
    plate_mismatch: PlateMismatchTexts {
        title: "Kennzeichen stimmt nicht überein",
        subtitle: "Das eingegebene Kennzeichen stimmt nicht mit dem gescannten überein.",
        scanned: "Gescanntes Kennzeichen:",
        entered: "Eingegebenes Kennzeichen:",
        question: "Sind Sie sicher, dass dies korrekt ist?",
        country_check: "Bitte prüfen Sie auch das ausgewählte Land.",
        back: "Zurück",
        continue_: "Fortfahren",
    },
    arrival_time: ArrivalTimeTexts {
        title: "Wann sind Sie angekommen?",
        confirm: "Bestätigen",
    },
    payment_selection: PaymentSelectionTexts {
        duration: "Parkdauer:",
        hours: "Stunden",
        minutes: "Minuten",
        choose_method: "Bitte wählen Sie eine Zahlungsmethode",
        pay_card: "Mit Karte bezahlen",
        pay_coins: "Mit Münzen bezahlen",
    },
    card_payment: CardPaymentTexts {
        title: "Bitte halten Sie Ihre Karte an das Lesegerät",
        contactless_hint: "Kontaktloses Bezahlen ist schneller",
    },
    thank_you: ThankYouTexts {
        title: "Danke für Ihre Zahlung!",
        leave_notice: "Sie haben jetzt 15 Minuten Zeit, um den Parkplatz zu verlassen.",
        exit: "Beenden / Exit / Uscita",
        auto_close: "Automatisches Beenden in wenigen Sekunden...",
    },
    your_vehicle: "Ihr Fahrzeug:",
};

static IT: Texts = Texts {
    entry_scan: EntryScanTexts {
        entering: "Veicolo rilevato...",
        scanning: "Scansione della targa in corso...",
        scanned: "Targa riconosciuta:",
        demo_notice: "Demo - Riconoscimento automatico della targa",
    },
    main_menu: MainMenuTexts {
        title: "PAGARE IL PARCHEGGIO",
        leave: "VADO VIA",
        day_ticket: "BIGLIETTO GIORNALIERO",
    },
    plate_input: PlateInputTexts {
        title: "Inserisci la tua targa corretta",
        change_country: "CAMBIA PAESE",
        proposal: "Proposta:",
        continue_: "CONTINUA",
    },
    plate_confirm: PlateConfirmTexts {
        title: "È questa la tua targa?",
        country_check: "Verifica il paese",
        edit: "Modifica",
        yes: "Sì",
    },
    plate_mismatch: PlateMismatchTexts {
        title: "Targa non corrispondente",
        subtitle: "La targa inserita non corrisponde a quella scansionata.",
        scanned: "Targa scansionata:",
        entered: "Targa inserita:",
        question: "Sei sicuro che sia corretta?",
        country_check: "Verifica anche il paese selezionato.",
        back: "Indietro",
        continue_: "Continua",
    },
    arrival_time: ArrivalTimeTexts {
        title: "Quando è arrivato?",
        confirm: "Conferma",
    },
    payment_selection: PaymentSelectionTexts {
        duration: "Durata della sosta:",
        hours: "ore",
        minutes: "minuti",
        choose_method: "Scegli un metodo di pagamento",
        pay_card: "Paga con carta",
        pay_coins: "Paga in contanti",
    },
    card_payment: CardPaymentTexts {
        title: "Avvicina la carta al lettore",
        contactless_hint: "Il pagamento contactless è più veloce",
    },
    thank_you: ThankYouTexts {
        title: "Grazie per il pagamento!",
        leave_notice: "Hai 15 minuti di tempo per lasciare il parcheggio.",
        exit: "Beenden / Exit / Uscita",
        auto_close: "Chiusura automatica tra pochi secondi...",
    },
    your_vehicle: "Il suo veicolo:",
};

pub fn texts(language: Language) -> &'static Texts {
    match language {
        Language::De => &DE,
        Language::It => &IT,
    }
}

fn weekday_name(language: Language, weekday: Weekday) -> &'static str {
    const DE_DAYS: [&str; 7] = [
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
        "Sonntag",
    ];
    const IT_DAYS: [&str; 7] = [
        "Lunedì",
        "Martedì",
        "Mercoledì",
        "Giovedì",
        "Venerdì",
        "Sabato",
        "Domenica",
    ];
    let idx = weekday.num_days_from_monday() as usize;
    match language {
        Language::De => DE_DAYS[idx],
        Language::It => IT_DAYS[idx],
    }
}

fn month_name(language: Language, month: u32) -> &'static str {
    const DE_MONTHS: [&str; 12] = [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ];
    const IT_MONTHS: [&str; 12] = [
        "Gennaio",
        "Febbraio",
        "Marzo",
        "Aprile",
        "Maggio",
        "Giugno",
        "Luglio",
        "Agosto",
        "Settembre",
        "Ottobre",
        "Novembre",
        "Dicembre",
    ];
    let idx = (month - 1) as usize;
    match language {
        Language::De => DE_MONTHS[idx],
        Language::It => IT_MONTHS[idx],
    }
}

/// "Montag, 01. Januar 2024" / "Lunedì, 01 Gennaio 2024"
pub fn format_date_long(language: Language, date: NaiveDate) -> String {
    match language {
        Language::De => format!(
            "{}, {:02}. {} {}",
            weekday_name(language, date.weekday()),
            date.day(),
            month_name(language, date.month()),
            date.year()
        ),
        Language::It => format!(
            "{}, {:02} {} {}",
            weekday_name(language, date.weekday()),
            date.day(),
            month_name(language, date.month()),
            date.year()
        ),
    }
}

/// Long date plus hour:minute, for the header clock
pub fn format_datetime_long(language: Language, dt: NaiveDateTime) -> String {
    format!(
        "{}, {:02}:{:02}",
        format_date_long(language, dt.date()),
        dt.hour(),
        dt.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_german() {
        assert_eq!(Language::default(), Language::De);
    }

    #[test]
    fn test_toggle_flips_language() {
        assert_eq!(Language::De.toggled(), Language::It);
        assert_eq!(Language::It.toggled(), Language::De);
    }

    #[test]
    fn test_date_formatting() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_date_long(Language::De, date), "Montag, 01. Januar 2024");
        assert_eq!(format_date_long(Language::It, date), "Lunedì, 01 Gennaio 2024");
    }

    #[test]
    fn test_header_clock_formatting() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 8)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(
            format_datetime_long(Language::De, dt),
            "Freitag, 08. März 2024, 09:05"
        );
    }
}
