//! Appointment record.
//!
//! # Invariants
//! - `patient_id` references a person by identity number.
//! - Two appointments are the same entity iff they share patient and time.

use crate::model::fields::{AppointmentNotes, AppointmentTime, IdentityNumber};
use crate::model::record::{Record, RecordKind};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub notes: AppointmentNotes,
    pub time: AppointmentTime,
    pub patient_id: IdentityNumber,
}

impl Appointment {
    pub fn new(notes: AppointmentNotes, time: AppointmentTime, patient_id: IdentityNumber) -> Self {
        Self {
            notes,
            time,
            patient_id,
        }
    }
}

impl Record for Appointment {
    const KIND: RecordKind = RecordKind::Appointment;

    fn is_same_entity(&self, other: &Self) -> bool {
        self.patient_id == other.patient_id && self.time == other.time
    }
}

impl Display for Appointment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Patient: {}; Time: {}; Notes: {}",
            self.patient_id, self.time, self.notes
        )
    }
}
