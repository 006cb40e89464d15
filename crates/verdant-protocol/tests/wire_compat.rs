// Verify the envelope wire format matches what dashboard clients expect.
// These tests ensure the JSON field names are never broken.

use chrono::DateTime;
use verdant_protocol::{Envelope, PayloadKind};

#[test]
fn envelope_field_names_are_stable() {
    let env = Envelope::new(PayloadKind::Sensor, "42");
    let json = env.to_json();

    assert!(json.contains(r#""type":"sensor""#));
    assert!(json.contains(r#""data":"42""#));
    assert!(json.contains(r#""timestamp":"#));
}

#[test]
fn kind_serializes_lowercase() {
    for (kind, wire) in [
        (PayloadKind::Weather, r#""type":"weather""#),
        (PayloadKind::Sensor, r#""type":"sensor""#),
        (PayloadKind::Status, r#""type":"status""#),
        (PayloadKind::Watering, r#""type":"watering""#),
    ] {
        let json = Envelope::new(kind, "x").to_json();
        assert!(json.contains(wire), "missing {wire} in {json}");
    }
}

#[test]
fn timestamp_is_rfc3339_utc() {
    let env = Envelope::new(PayloadKind::Status, "Watering is OFF");
    let parsed = DateTime::parse_from_rfc3339(&env.timestamp).unwrap();
    assert_eq!(parsed.offset().local_minus_utc(), 0);
    assert!(env.timestamp.ends_with('Z'));
}

#[test]
fn envelope_round_trips() {
    let env = Envelope::new(PayloadKind::Watering, "ON");
    let back: Envelope = serde_json::from_str(&env.to_json()).unwrap();
    assert_eq!(back.kind, PayloadKind::Watering);
    assert_eq!(back.data, "ON");
    assert_eq!(back.timestamp, env.timestamp);
}
