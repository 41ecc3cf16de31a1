use super::*;

#[test]
fn toast_ids_are_unique() {
    let first = Toast::new(ToastKind::Success, "one");
    let second = Toast::new(ToastKind::Success, "one");
    assert_ne!(first.id, second.id);
}

#[test]
fn toast_class_reflects_kind() {
    assert_eq!(toast_class(ToastKind::Success), "toast toast--success");
    assert_eq!(toast_class(ToastKind::Error), "toast toast--error");
}

#[test]
fn toast_keeps_message_verbatim() {
    let toast = Toast::new(ToastKind::Error, "Invalid credentials");
    assert_eq!(toast.message, "Invalid credentials");
    assert_eq!(toast.kind, ToastKind::Error);
}
