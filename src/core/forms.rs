//! Field and column descriptors for the clinic records.

use crate::core::editor::{ColumnDescriptor, FieldDescriptor, InputKind};
use crate::core::models::{Appointment, MedicalRecord, Owner, Pet};
use crate::{column, field};

pub const SPECIES: &[(&str, &str)] = &[
    ("", "Select species"),
    ("Dog", "Dog"),
    ("Cat", "Cat"),
    ("Bird", "Bird"),
    ("Rabbit", "Rabbit"),
    ("Other", "Other"),
];

pub const APPOINTMENT_STATUSES: &[(&str, &str)] = &[
    ("Scheduled", "Scheduled"),
    ("Confirmed", "Confirmed"),
    ("Completed", "Completed"),
    ("Cancelled", "Cancelled"),
];

pub fn owner_fields() -> Vec<FieldDescriptor<Owner>> {
    vec![
        field!(Owner, first_name, "First name", InputKind::Text).required(),
        field!(Owner, last_name, "Last name", InputKind::Text).required(),
        field!(Owner, email, "Email", InputKind::Email).required(),
        field!(Owner, phone, "Phone", InputKind::Tel),
        field!(Owner, address, "Address", InputKind::TextArea),
    ]
}

pub fn owner_columns() -> Vec<ColumnDescriptor<Owner>> {
    vec![
        column!(Owner, first_name, "First name"),
        column!(Owner, last_name, "Last name"),
        column!(Owner, email, "Email"),
        column!(Owner, phone, "Phone"),
    ]
}

pub fn pet_fields() -> Vec<FieldDescriptor<Pet>> {
    vec![
        field!(Pet, name, "Name", InputKind::Text).required(),
        field!(Pet, species, "Species", InputKind::Select(SPECIES)).required(),
        field!(Pet, breed, "Breed", InputKind::Text),
        field!(Pet, birth_date, "Birth date", InputKind::Date),
        field!(Pet, owner_name, "Owner", InputKind::Text).required(),
    ]
}

pub fn pet_columns() -> Vec<ColumnDescriptor<Pet>> {
    vec![
        column!(Pet, name, "Name"),
        column!(Pet, species, "Species"),
        column!(Pet, breed, "Breed"),
        column!(Pet, owner_name, "Owner"),
    ]
}

/// Fields staff edit on the dashboard
pub fn appointment_fields() -> Vec<FieldDescriptor<Appointment>> {
    let mut fields = booking_fields();
    fields.push(field!(
        Appointment,
        status,
        "Status",
        InputKind::Select(APPOINTMENT_STATUSES)
    ));
    fields
}

/// Fields a customer fills in to book a visit
pub fn booking_fields() -> Vec<FieldDescriptor<Appointment>> {
    vec![
        field!(Appointment, pet_name, "Pet", InputKind::Text).required(),
        field!(Appointment, date, "Date", InputKind::Date).required(),
        field!(Appointment, time, "Time", InputKind::Time).required(),
        field!(Appointment, reason, "Reason", InputKind::TextArea),
    ]
}

pub fn appointment_columns() -> Vec<ColumnDescriptor<Appointment>> {
    vec![
        column!(Appointment, pet_name, "Pet"),
        column!(Appointment, date, "Date"),
        column!(Appointment, time, "Time"),
        column!(Appointment, reason, "Reason"),
        column!(Appointment, status, "Status"),
    ]
}

pub fn medical_columns() -> Vec<ColumnDescriptor<MedicalRecord>> {
    vec![
        column!(MedicalRecord, date, "Date"),
        column!(MedicalRecord, pet_name, "Pet"),
        column!(MedicalRecord, diagnosis, "Diagnosis"),
        column!(MedicalRecord, treatment, "Treatment"),
        column!(MedicalRecord, veterinarian, "Veterinarian"),
    ]
}

/// A booking submitted by a customer starts out scheduled
pub fn new_booking(mut appointment: Appointment) -> Appointment {
    if appointment.status.is_empty() {
        appointment.status = "Scheduled".to_string();
    }
    appointment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::editor::EntityForm;
    use std::collections::HashSet;

    #[test]
    fn test_field_keys_are_unique() {
        let keys: Vec<_> = owner_fields().iter().map(|f| f.key).collect();
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(keys.len(), unique.len());

        let keys: Vec<_> = appointment_fields().iter().map(|f| f.key).collect();
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(keys.len(), unique.len());
    }

    #[test]
    fn test_appointment_fields_extend_booking() {
        let booking = booking_fields();
        let staff = appointment_fields();
        assert_eq!(staff.len(), booking.len() + 1);
        assert_eq!(staff.last().map(|f| f.key), Some("status"));
    }

    #[test]
    fn test_booking_form_produces_scheduled_appointment() {
        let mut form = EntityForm::new(Appointment::default(), booking_fields());
        form.edit("pet_name", "Rex".to_string());
        form.edit("date", "2026-11-02".to_string());
        form.edit("time", "10:30".to_string());

        let booking = new_booking(form.submit().unwrap());
        assert_eq!(booking.pet_name, "Rex");
        assert_eq!(booking.status, "Scheduled");
        assert_eq!(booking.reason, "");
    }

    #[test]
    fn test_new_booking_keeps_explicit_status() {
        let appointment = Appointment {
            status: "Confirmed".to_string(),
            ..Default::default()
        };
        assert_eq!(new_booking(appointment).status, "Confirmed");
    }

    #[test]
    fn test_species_select_has_placeholder() {
        assert_eq!(SPECIES[0], ("", "Select species"));
    }
}
