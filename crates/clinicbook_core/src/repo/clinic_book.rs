//! In-memory clinic book holding persons and their appointments.
//!
//! # Invariants
//! - Each list keeps its own filter; resetting one does not touch the other.
//! - Both `RecordStore` views read the same backing lists, so a command sees
//!   one consistent state for the duration of its execution.
//! - A person's identity change is carried over to their appointments, and
//!   deleting a person deletes their appointments.

use crate::model::appointment::Appointment;
use crate::model::fields::IdentityNumber;
use crate::model::person::Person;
use crate::model::record::RecordKind;
use crate::repo::record_store::{
    RecordList, RecordPredicate, RecordStore, RepoError, RepoResult,
};

#[derive(Debug, Default)]
pub struct ClinicBook {
    persons: RecordList<Person>,
    appointments: RecordList<Appointment>,
}

impl ClinicBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &RecordList<Person> {
        &self.persons
    }

    pub fn appointments(&self) -> &RecordList<Appointment> {
        &self.appointments
    }

    /// Returns whether moving `old_id`'s appointments to `new_id` would put
    /// two appointments for `new_id` at the same time.
    fn appointments_would_collide(
        &self,
        old_id: &IdentityNumber,
        new_id: &IdentityNumber,
    ) -> bool {
        let stored = self.appointments.all();
        stored
            .iter()
            .filter(|moved| &moved.patient_id == old_id)
            .any(|moved| {
                stored
                    .iter()
                    .any(|kept| &kept.patient_id == new_id && kept.time == moved.time)
            })
    }

    /// Returns whether a person with `identity_number` is stored.
    pub fn has_patient(&self, identity_number: &IdentityNumber) -> bool {
        self.persons
            .all()
            .iter()
            .any(|person| &person.identity_number == identity_number)
    }
}

impl RecordStore<Person> for ClinicBook {
    fn filtered_list(&self) -> Vec<&Person> {
        self.persons.filtered_list()
    }

    fn has_record(&self, candidate: &Person) -> bool {
        self.persons.has_record(candidate)
    }

    fn add_record(&mut self, record: Person) -> RepoResult<()> {
        self.persons.add_record(record)
    }

    /// Replaces a person; a changed identity number is carried over to the
    /// person's appointments.
    fn set_record(&mut self, target: &Person, edited: Person) -> RepoResult<()> {
        let old_id = target.identity_number.clone();
        let new_id = edited.identity_number.clone();
        if old_id != new_id && self.appointments_would_collide(&old_id, &new_id) {
            return Err(RepoError::Duplicate(RecordKind::Appointment));
        }

        self.persons.set_record(target, edited)?;
        if old_id != new_id {
            self.appointments.update_each(|appointment| {
                if appointment.patient_id == old_id {
                    appointment.patient_id = new_id.clone();
                }
            });
        }
        Ok(())
    }

    /// Removes a person together with their appointments.
    fn remove_record(&mut self, target: &Person) -> RepoResult<()> {
        self.persons.remove_record(target)?;
        self.appointments
            .retain(|appointment| appointment.patient_id != target.identity_number);
        Ok(())
    }

    fn update_filtered_list(&mut self, predicate: RecordPredicate<Person>) {
        self.persons.update_filtered_list(predicate);
    }
}

impl RecordStore<Appointment> for ClinicBook {
    fn filtered_list(&self) -> Vec<&Appointment> {
        self.appointments.filtered_list()
    }

    fn has_record(&self, candidate: &Appointment) -> bool {
        self.appointments.has_record(candidate)
    }

    fn add_record(&mut self, record: Appointment) -> RepoResult<()> {
        self.appointments.add_record(record)
    }

    fn set_record(&mut self, target: &Appointment, edited: Appointment) -> RepoResult<()> {
        self.appointments.set_record(target, edited)
    }

    fn remove_record(&mut self, target: &Appointment) -> RepoResult<()> {
        self.appointments.remove_record(target)
    }

    fn update_filtered_list(&mut self, predicate: RecordPredicate<Appointment>) {
        self.appointments.update_filtered_list(predicate);
    }
}
