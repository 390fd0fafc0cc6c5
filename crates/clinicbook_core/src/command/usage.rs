//! Command words and their usage text.

pub const ADD_PERSON_WORD: &str = "add";
pub const ADD_PERSON_USAGE: &str = "add: Adds a person to the clinic book. \
Parameters: n/NAME i/IDENTITY_NUMBER p/PHONE e/EMAIL a/ADDRESS ec/EMERGENCY_CONTACT \
dob/DATE_OF_BIRTH bt/BLOOD_TYPE g/GENDER [ar/ALCOHOLIC_RECORD] [sr/SMOKING_RECORD] \
[pmh/PAST_MEDICAL_HISTORY] [t/TAG]... [al/ALLERGY]... [m/MEDICINE]...\n\
Example: add n/John Doe i/S1234567A p/98765432 e/johnd@example.com \
a/311, Clementi Ave 2, #02-25 ec/91234567 dob/01-01-1990 bt/O+ g/M t/diabetic al/pollen";

pub const ADD_APPOINTMENT_WORD: &str = "addappt";
pub const ADD_APPOINTMENT_USAGE: &str = "addappt: Adds an appointment for an existing patient. \
Parameters: i/IDENTITY_NUMBER at/TIME [an/NOTE]\n\
Example: addappt i/S1234567A at/11-11-2030 11:11 an/Needs physiotherapy";

pub const EDIT_PERSON_WORD: &str = "edit";
pub const EDIT_PERSON_USAGE: &str = "edit: Edits the details of the person identified \
by the index number used in the displayed person list. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [i/IDENTITY_NUMBER] [p/PHONE] \
[e/EMAIL] [a/ADDRESS] [ec/EMERGENCY_CONTACT] [dob/DATE_OF_BIRTH] [bt/BLOOD_TYPE] \
[g/GENDER] [ar/ALCOHOLIC_RECORD] [sr/SMOKING_RECORD] [pmh/PAST_MEDICAL_HISTORY] \
[t/TAG]... [al/ALLERGY]... [m/MEDICINE]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

pub const EDIT_APPOINTMENT_WORD: &str = "eappt";
pub const EDIT_APPOINTMENT_USAGE: &str = "eappt: Edits the details of the appointment identified \
by the index number used in the displayed appointment list. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [at/TIME] [an/NOTE]\n\
Example: eappt 1 at/11-11-2030 11:11 an/Needs physiotherapy";

pub const DELETE_PERSON_WORD: &str = "delete";
pub const DELETE_PERSON_USAGE: &str = "delete: Deletes the person identified \
by the index number used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

pub const DELETE_APPOINTMENT_WORD: &str = "deleteappt";
pub const DELETE_APPOINTMENT_USAGE: &str = "deleteappt: Deletes the appointment identified \
by the index number used in the displayed appointment list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: deleteappt 1";

pub const FIND_PERSON_WORD: &str = "find";
pub const FIND_PERSON_USAGE: &str = "find: Finds all persons whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

pub const FIND_APPOINTMENT_WORD: &str = "findappt";
pub const FIND_APPOINTMENT_USAGE: &str = "findappt: Finds all appointments of the patients \
with any of the specified identity numbers and displays them as a list with index numbers.\n\
Parameters: IDENTITY_NUMBER [MORE_IDENTITY_NUMBERS]...\n\
Example: findappt S1234567A";

pub const LIST_PERSON_WORD: &str = "list";
pub const LIST_APPOINTMENT_WORD: &str = "listappt";
pub const HELP_WORD: &str = "help";
pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";
pub const EXIT_WORD: &str = "exit";

/// Usage lines shown by `help`, one per command.
pub fn all_usages() -> Vec<&'static str> {
    vec![
        ADD_PERSON_USAGE,
        ADD_APPOINTMENT_USAGE,
        EDIT_PERSON_USAGE,
        EDIT_APPOINTMENT_USAGE,
        DELETE_PERSON_USAGE,
        DELETE_APPOINTMENT_USAGE,
        FIND_PERSON_USAGE,
        FIND_APPOINTMENT_USAGE,
        "list: Lists all persons.",
        "listappt: Lists all appointments.",
        HELP_USAGE,
        "exit: Exits the program.",
    ]
}
