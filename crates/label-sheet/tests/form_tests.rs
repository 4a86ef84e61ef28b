use label_sheet::*;

fn filled_form() -> FormState {
    let mut form = FormState::with_date("2024-01-01");
    form.product_type = "X".to_string();
    form.start_serial = "100".to_string();
    form.set_count_text("5");
    form
}

fn input_message(result: Result<LabelRequest>) -> String {
    match result {
        Err(LabelError::Input(msg)) => msg,
        other => panic!("Expected Input error, got {other:?}"),
    }
}

#[test]
fn test_auto_request() {
    let request = filled_form().to_request().unwrap();
    assert_eq!(request.count, 5);
    assert_eq!(request.date, "2024-01-01");
    assert_eq!(request.product_type, "X");
    assert_eq!(request.serials, vec!["100", "101", "102", "103", "104"]);
}

#[test]
fn test_count_must_be_integer() {
    let mut form = filled_form();
    form.set_count_text("five");
    assert_eq!(
        input_message(form.to_request()),
        "Number of labels must be a valid integer."
    );
}

#[test]
fn test_count_must_be_positive() {
    let mut form = filled_form();
    for bad in ["0", "-2"] {
        form.set_count_text(bad);
        assert_eq!(
            input_message(form.to_request()),
            "Number of labels must be greater than 0."
        );
    }
}

#[test]
fn test_required_fields() {
    let mut form = filled_form();
    form.date = "   ".to_string();
    assert_eq!(
        input_message(form.to_request()),
        "Date and Product Type cannot be empty."
    );

    let mut form = filled_form();
    form.product_type.clear();
    assert_eq!(
        input_message(form.to_request()),
        "Date and Product Type cannot be empty."
    );
}

#[test]
fn test_bad_start_serial() {
    let mut form = filled_form();
    form.start_serial = "A100".to_string();
    assert_eq!(
        input_message(form.to_request()),
        "Starting Serial Number must be a valid integer."
    );
}

#[test]
fn test_start_serial_ignored_in_manual_mode() {
    let mut form = filled_form();
    form.start_serial = "not a number".to_string();
    form.mode = SerialMode::Manual;
    form.set_count_text("2");
    form.manual_entries_mut()[0] = "A1".to_string();

    let request = form.to_request().unwrap();
    assert_eq!(request.serials, vec!["A1", ""]);
    assert_eq!(request.blank_count(), 1);
}

#[test]
fn test_manual_fields_follow_count() {
    let mut form = FormState::default();
    assert_eq!(form.manual_entries().len(), 1);

    form.set_count_text("3");
    assert_eq!(form.manual_entries().len(), 3);

    form.manual_entries_mut()[0] = "keep".to_string();
    form.set_count_text("4");
    assert_eq!(form.manual_entries().len(), 4);
    assert_eq!(form.manual_entries()[0], "keep");

    // Never fewer than one field
    form.set_count_text("0");
    assert_eq!(form.manual_entries().len(), 1);
    assert_eq!(form.manual_entries()[0], "keep");

    // Text that is not a number leaves the fields alone
    form.set_count_text("3");
    form.set_count_text("3x");
    assert_eq!(form.manual_entries().len(), 3);
    assert_eq!(form.count_text(), "3x");
}

#[test]
fn test_huge_count_clamps_manual_fields() {
    let mut form = filled_form();
    form.mode = SerialMode::Manual;
    form.manual_entries_mut()[0] = "keep".to_string();

    for huge in ["9223372036854775807", "1000000000", "10001"] {
        form.set_count_text(huge);
        assert_eq!(form.manual_entries().len(), MAX_LABELS);
        assert_eq!(form.manual_entries()[0], "keep");
        assert_eq!(
            input_message(form.to_request()),
            format!("Number of labels must be at most {MAX_LABELS}.")
        );
    }

    form.set_count_text("2");
    assert_eq!(form.manual_entries().len(), 2);
    assert_eq!(form.manual_entries()[0], "keep");
}

#[test]
fn test_huge_auto_count_rejected() {
    let mut form = filled_form();
    form.set_count_text("1000000000");
    assert!(input_message(form.to_request()).contains("at most"));

    form.set_count_text(MAX_LABELS.to_string());
    assert_eq!(form.count().unwrap(), MAX_LABELS);
    assert_eq!(form.to_request().unwrap().serials.len(), MAX_LABELS);
}

#[test]
fn test_focus_navigation() {
    let mut form = FormState::default();
    form.set_count_text("3");

    assert_eq!(form.focus_up(0), None);
    assert_eq!(form.focus_up(2), Some(1));
    assert_eq!(form.focus_down(0), Some(1));
    assert_eq!(form.focus_down(2), None);
}

#[test]
fn test_set_manual_entries() {
    let mut form = FormState::default();
    form.set_manual_entries(vec!["S1".to_string(), "S2".to_string()]);

    assert_eq!(form.mode, SerialMode::Manual);
    assert_eq!(form.count_text(), "2");
    assert_eq!(form.count().unwrap(), 2);
    assert_eq!(form.manual_entries(), ["S1", "S2"]);
}

#[test]
fn test_form_errors_are_input_kind() {
    let mut form = filled_form();
    form.set_count_text("");
    let err = form.to_request().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
    assert_eq!(err.title(), "Input Error");
}
