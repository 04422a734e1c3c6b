//! Response bodies for writes that do not echo a record.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Ack {
    pub ok: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Deleted {
    pub deleted: u64,
}

pub fn ack() -> Json<Ack> {
    Json(Ack { ok: true })
}

pub fn deleted(count: u64) -> Json<Deleted> {
    Json(Deleted { deleted: count })
}
