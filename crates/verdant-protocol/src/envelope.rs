use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Payload discriminator carried in the wire `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    Weather,
    Sensor,
    Status,
    Watering,
}

/// Server → Client broadcast unit.
/// Wire: `{ "type": "sensor", "data": "42", "timestamp": "2026-08-23T10:15:00.123456Z" }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: PayloadKind,
    pub data: String,
    pub timestamp: String,
}

impl Envelope {
    /// Build an envelope stamped with the current UTC time (RFC 3339, Z suffix).
    pub fn new(kind: PayloadKind, data: impl Into<String>) -> Self {
        Self {
            kind,
            data: data.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }

    /// Serialized wire form. These fields cannot fail to serialize.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
