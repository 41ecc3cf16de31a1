use super::*;

fn member(id: &str, role: Role, fired: bool) -> StaffMember {
    StaffMember {
        id: id.to_owned(),
        name: "Staff".to_owned(),
        email: format!("{id}@example.com"),
        photo: None,
        designation: None,
        salary: Some(60000.0),
        role,
        fired,
    }
}

#[test]
fn active_count_excludes_fired_staff() {
    let staff = vec![
        member("a", Role::Employee, false),
        member("b", Role::Hr, true),
        member("c", Role::Employee, false),
    ];
    assert_eq!(active_count(&staff), 2);
}

#[test]
fn view_mode_defaults_to_table() {
    assert_eq!(ViewMode::default(), ViewMode::Table);
}
