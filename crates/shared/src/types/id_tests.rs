use super::*;
use std::str::FromStr;
use uuid::Uuid;

#[test]
fn test_typed_id_from_uuid() {
    let uuid = Uuid::new_v4();
    let id = ChallanId::from_uuid(uuid);
    assert_eq!(id.into_inner(), uuid);
}

#[test]
fn test_typed_id_new_is_unique() {
    assert_ne!(WaiverId::new(), WaiverId::new());
    assert_eq!(WaiverId::new().0.get_version_num(), 7);
}

#[test]
fn test_typed_id_display_and_parse() {
    let id = StudentId::new();
    let parsed = StudentId::from_str(&id.to_string()).unwrap();
    assert_eq!(parsed, id);
    assert!(StudentId::from_str("not-a-uuid").is_err());
}
