use chrono::{Local, TimeZone};
use webhook_message_service::domain::message::{
    FALLBACK_MESSAGE, Message, NEVER_MODIFIED, format_last_modified,
};

#[test]
fn it_trims_stored_content() {
    let message = Message::from_stored(Some("  hello world \n".to_string()), None);

    assert_eq!(message.content, "hello world");
}

#[test]
fn it_keeps_embedded_newlines() {
    let message = Message::from_stored(Some("line one\nline two\n".to_string()), None);

    assert_eq!(message.content, "line one\nline two");
}

#[test]
fn it_falls_back_when_nothing_is_stored() {
    let message = Message::from_stored(None, None);

    assert_eq!(message.content, FALLBACK_MESSAGE);
    assert_eq!(message.last_modified_label(), NEVER_MODIFIED);
}

#[test]
fn it_formats_last_modified_time() {
    let time = Local
        .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
        .earliest()
        .unwrap();

    assert_eq!(format_last_modified(Some(time)), "2024-01-02 03:04:05");
    assert_eq!(format_last_modified(None), "Never");
}
