use crate::{crewmember, spaceship};

#[test]
fn crewmember_wire_shape() {
    let m = crewmember::Model { id: 7, name: "Alice".into(), morale: 100 };
    let json = serde_json::to_value(&m).unwrap();
    assert_eq!(json, serde_json::json!({"id": 7, "name": "Alice", "morale": 100}));
}

#[test]
fn spaceship_wire_shape() {
    let m = spaceship::Model { id: 3, name: "Apollo 11".into(), fuel: 95 };
    let json = serde_json::to_value(&m).unwrap();
    assert_eq!(json, serde_json::json!({"id": 3, "name": "Apollo 11", "fuel": 95}));
}

#[test]
fn crewmember_deserializes_from_wire() {
    let m: crewmember::Model =
        serde_json::from_str(r#"{"id": 1, "name": "Joe", "morale": -5}"#).unwrap();
    assert_eq!(m, crewmember::Model { id: 1, name: "Joe".into(), morale: -5 });
}
