use clinicbook_core::{ClinicService, CommandError, ParseError, RecordKind, ServiceError};

const ADD_AMY: &str = "add n/Amy Bee i/S1234567A p/85355255 e/amy@example.com \
    a/123, Jurong West Ave 6, #08-111 ec/91234567 dob/02-03-1995 bt/AB+ g/F \
    t/friend al/pollen m/salbutamol";
const ADD_BOB: &str = "add n/Bob Choo i/T7654321Z p/22222222 e/bob@example.com \
    a/Block 123, Bobby Street 3 ec/93210283 dob/15-08-1980 bt/O+ g/M";

fn service_with_amy_and_bob() -> ClinicService {
    let mut service = ClinicService::new();
    service.execute(ADD_AMY).unwrap();
    service.execute(ADD_BOB).unwrap();
    service
}

#[test]
fn edit_non_identity_fields_keeps_the_rest() {
    let mut service = service_with_amy_and_bob();
    service.execute("edit 1 p/91234567 bt/O- sr/quit 2019").unwrap();

    let amy = &service.book().persons().all()[0];
    assert_eq!(amy.phone.as_str(), "91234567");
    assert_eq!(amy.blood_type.as_str(), "O-");
    assert_eq!(amy.smoking_record.as_str(), "quit 2019");
    assert_eq!(amy.name.as_str(), "Amy Bee");
    assert_eq!(amy.email.as_str(), "amy@example.com");
    assert_eq!(amy.allergies.len(), 1);
}

#[test]
fn empty_tag_prefix_clears_tags_only() {
    let mut service = service_with_amy_and_bob();
    service.execute("edit 1 t/").unwrap();

    let amy = &service.book().persons().all()[0];
    assert!(amy.tags.is_empty());
    assert_eq!(amy.medicines.len(), 1);
}

#[test]
fn edit_to_another_identity_number_is_rejected() {
    let mut service = service_with_amy_and_bob();
    let before = service.book().persons().all().to_vec();

    let err = service.execute("edit 1 i/t7654321z").unwrap_err();
    assert_eq!(
        err,
        ServiceError::Command(CommandError::Duplicate(RecordKind::Person))
    );
    assert_eq!(service.book().persons().all(), before.as_slice());
}

#[test]
fn index_resolves_against_the_filtered_list() {
    let mut service = service_with_amy_and_bob();
    service.execute("find bob").unwrap();
    assert_eq!(service.render_view(RecordKind::Person).len(), 1);

    let result = service.execute("edit 1 n/Bob Tan").unwrap();
    assert!(result.feedback.starts_with("Edited Person: Bob Tan; Identity Number: T7654321Z;"));
    assert_eq!(service.book().persons().all()[0].name.as_str(), "Amy Bee");
    assert_eq!(service.render_view(RecordKind::Person).len(), 2);
}

#[test]
fn invalid_field_values_name_the_field() {
    let mut service = service_with_amy_and_bob();
    let err = service.execute("edit 2 e/not-an-email").unwrap_err();
    assert!(matches!(err, ServiceError::Parse(ParseError::InvalidField(_))));
    assert!(err.to_string().starts_with("Invalid email:"));
}

#[test]
fn repeated_single_valued_prefix_is_rejected() {
    let mut service = service_with_amy_and_bob();
    let err = service.execute("edit 1 p/123 p/456").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Multiple values specified for the following single-valued field(s): p/"
    );
}

#[test]
fn identity_number_edit_follows_into_appointments() {
    let mut service = service_with_amy_and_bob();
    service
        .execute("addappt i/S1234567A at/01-02-2030 09:00 an/checkup")
        .unwrap();

    service.execute("edit 1 i/T1111111Z").unwrap();

    let found = service.execute("findappt T1111111Z").unwrap();
    assert_eq!(found.feedback, "1 appointments listed!");
    assert_eq!(
        service.render_view(RecordKind::Appointment),
        ["1. Patient: T1111111Z; Time: 01-02-2030 09:00; Notes: checkup"]
    );
    let stale = service.execute("findappt S1234567A").unwrap();
    assert_eq!(stale.feedback, "0 appointments listed!");
}
