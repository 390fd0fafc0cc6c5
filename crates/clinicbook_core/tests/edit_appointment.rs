use clinicbook_core::{ClinicService, CommandError, ParseError, RecordKind, ServiceError};

const ADD_AMY: &str = "add n/Amy Bee i/S1234567A p/85355255 e/amy@example.com \
    a/123, Jurong West Ave 6, #08-111 ec/91234567 dob/02-03-1995 bt/AB+ g/F";

fn service_with_checkup() -> ClinicService {
    let mut service = ClinicService::new();
    service.execute(ADD_AMY).unwrap();
    service
        .execute("addappt i/S1234567A at/01-02-2030 09:00 an/checkup")
        .unwrap();
    service
}

#[test]
fn edit_time_only_keeps_note_and_patient_then_shows_all() {
    let mut service = service_with_checkup();
    service
        .execute("addappt i/S1234567A at/05-02-2030 09:00 an/scan")
        .unwrap();
    service.execute("findappt T0000000X").unwrap();
    assert!(service.render_view(RecordKind::Appointment).is_empty());
    service.execute("listappt").unwrap();

    let result = service.execute("eappt 1 at/02-02-2030 10:30").unwrap();
    assert_eq!(
        result.feedback,
        "Edited Appointment: Patient: S1234567A; Time: 02-02-2030 10:30; Notes: checkup"
    );
    assert_eq!(result.view, Some(RecordKind::Appointment));

    let view = service.render_view(RecordKind::Appointment);
    assert_eq!(view.len(), 2);
    assert_eq!(
        view[0],
        "1. Patient: S1234567A; Time: 02-02-2030 10:30; Notes: checkup"
    );
}

#[test]
fn edit_without_fields_is_rejected_before_touching_the_book() {
    let mut service = service_with_checkup();
    let before = service.render_view(RecordKind::Appointment);

    let err = service.execute("eappt 1").unwrap_err();
    assert_eq!(err, ServiceError::Parse(ParseError::NotEdited));
    assert_eq!(service.render_view(RecordKind::Appointment), before);
}

#[test]
fn edit_into_existing_appointment_is_rejected() {
    let mut service = service_with_checkup();
    service
        .execute("addappt i/S1234567A at/03-02-2030 09:00 an/scan")
        .unwrap();
    let before = service.book().appointments().all().to_vec();

    let err = service.execute("eappt 2 at/01-02-2030 09:00").unwrap_err();
    assert_eq!(
        err,
        ServiceError::Command(CommandError::Duplicate(RecordKind::Appointment))
    );
    assert_eq!(service.book().appointments().all(), before.as_slice());
}

#[test]
fn editing_only_the_note_of_an_appointment_is_accepted() {
    let mut service = service_with_checkup();
    service
        .execute("addappt i/S1234567A at/03-02-2030 09:00 an/scan")
        .unwrap();

    service.execute("eappt 2 an/ct scan").unwrap();
    let notes: Vec<&str> = service
        .book()
        .appointments()
        .all()
        .iter()
        .map(|appointment| appointment.notes.as_str())
        .collect();
    assert_eq!(notes, ["checkup", "ct scan"]);
}

#[test]
fn edit_index_beyond_filtered_view_is_rejected() {
    let mut service = service_with_checkup();
    let err = service.execute("eappt 2 an/late").unwrap_err();
    assert_eq!(
        err,
        ServiceError::Command(CommandError::InvalidIndex(RecordKind::Appointment))
    );
    assert_eq!(err.to_string(), "The appointment index provided is invalid");
}
