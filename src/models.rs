//! Records stored in the two tables and the request bodies that create or change them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// RSVP lifecycle state of a guest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestStatus {
    #[default]
    Pending,
    Confirmed,
    Declined,
}

impl GuestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuestStatus::Pending => "pending",
            GuestStatus::Confirmed => "confirmed",
            GuestStatus::Declined => "declined",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: u64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Tables created before the column was NOT NULL can hold NULL here; it reads as pending.
    #[serde(default, deserialize_with = "status_or_pending")]
    pub status: GuestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub name: String,
    pub message: String,
    #[serde(default, deserialize_with = "flag")]
    pub is_present: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /guests`.
#[derive(Debug, Default, Deserialize)]
pub struct NewGuest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Body of `PATCH /guests/:id`. Each field is `None` when the key is absent and
/// `Some(Value::Null)` when it was sent as `null`.
#[derive(Debug, Default, Deserialize)]
pub struct GuestPatch {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub phone: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub status: Option<Value>,
}

impl GuestPatch {
    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }

    /// (column, value) pairs for every key that was sent.
    pub fn assignments(&self) -> Vec<(&'static str, Value)> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("status", &self.status),
        ]
        .into_iter()
        .filter_map(|(col, v)| v.clone().map(|v| (col, v)))
        .collect()
    }
}

/// Body of `POST /comments`.
#[derive(Debug, Default, Deserialize)]
pub struct NewComment {
    pub name: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "isPresent", default)]
    pub is_present: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn status_or_pending<'de, D>(deserializer: D) -> Result<GuestStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<GuestStatus>::deserialize(deserializer)?.unwrap_or_default())
}

/// MySQL BOOLEAN is TINYINT(1); accept either a bool or 0/1.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        Value::Null => Ok(false),
        other => Err(serde::de::Error::custom(format!("expected boolean, got {}", other))),
    }
}
