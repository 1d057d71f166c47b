use checks::{CheckError, check_not_null};

#[test]
fn check_not_null_passes_value_through() {
    let value = check_not_null(Some("present"), "must not be null").expect("non-null value");
    assert_eq!(value, "present");
}

#[test]
fn check_not_null_rejects_null_with_message() {
    let err = check_not_null::<u32>(None, "value must not be null").unwrap_err();
    assert_eq!(
        err,
        CheckError::NullReference {
            message: "value must not be null"
        }
    );
    assert_eq!(err.message(), "value must not be null");
    assert_eq!(err.to_string(), "null reference: value must not be null");
}
