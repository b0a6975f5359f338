//! Vietnamese proficiency exam calendar and contact channels.

use time::macros::date;
use time::Date;

use crate::core::format::{format_day_span, format_long_date, format_window};
use crate::core::Locale;
use crate::i18n;

/// One exam round: two exam days, a registration window and a backup day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamRound {
    pub number: u8,
    pub exam_start: Date,
    pub exam_end: Date,
    pub registration_open: Date,
    pub registration_close: Date,
    pub backup: Date,
}

pub const SCHEDULE_2026: [ExamRound; 4] = [
    ExamRound {
        number: 1,
        exam_start: date!(2026 - 03 - 28),
        exam_end: date!(2026 - 03 - 29),
        registration_open: date!(2026 - 02 - 26),
        registration_close: date!(2026 - 03 - 11),
        backup: date!(2026 - 03 - 29),
    },
    ExamRound {
        number: 2,
        exam_start: date!(2026 - 06 - 27),
        exam_end: date!(2026 - 06 - 28),
        registration_open: date!(2026 - 05 - 25),
        registration_close: date!(2026 - 06 - 10),
        backup: date!(2026 - 06 - 28),
    },
    ExamRound {
        number: 3,
        exam_start: date!(2026 - 09 - 26),
        exam_end: date!(2026 - 09 - 27),
        registration_open: date!(2026 - 08 - 24),
        registration_close: date!(2026 - 09 - 09),
        backup: date!(2026 - 09 - 27),
    },
    ExamRound {
        number: 4,
        exam_start: date!(2026 - 12 - 26),
        exam_end: date!(2026 - 12 - 27),
        registration_open: date!(2026 - 11 - 23),
        registration_close: date!(2026 - 12 - 09),
        backup: date!(2026 - 12 - 27),
    },
];

/// Display strings for one schedule table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub round: String,
    pub date: String,
    pub deadline: String,
    pub backup: String,
}

impl ExamRound {
    pub fn round_key(&self) -> String {
        format!("exam-round-{}", self.number)
    }

    pub fn row(&self, locale: Locale) -> ScheduleRow {
        ScheduleRow {
            round: i18n::lookup(locale, &self.round_key())
                .unwrap_or_else(|| format!("#{}", self.number)),
            date: format_day_span(locale, self.exam_start, self.exam_end),
            deadline: format_window(locale, self.registration_open, self.registration_close),
            backup: format_long_date(locale, self.backup),
        }
    }
}

pub fn schedule_rows(locale: Locale) -> Vec<ScheduleRow> {
    SCHEDULE_2026.iter().map(|round| round.row(locale)).collect()
}

/// How to reach the exam organizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Website,
    Email,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ContactKind,
    pub display: &'static str,
    pub href: &'static str,
}

pub const CONTACTS: [ContactChannel; 3] = [
    ContactChannel {
        kind: ContactKind::Website,
        display: "ussh.vnu.edu.vn",
        href: "https://ussh.vnu.edu.vn/",
    },
    ContactChannel {
        kind: ContactKind::Email,
        display: "contact@ussh.edu.vn",
        href: "mailto:contact@ussh.edu.vn",
    },
    ContactChannel {
        kind: ContactKind::Phone,
        display: "+84 24 3858 3799",
        href: "tel:+842438583799",
    },
];
