#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use wedding_rsvp::config::CorsSettings;
use wedding_rsvp::{app_router, AppState, ExecResult, QueryExecutor, Row};

/// Scripted reply for the next statement.
pub enum Reply {
    Rows(Vec<Value>),
    Exec { last_insert_id: u64, rows_affected: u64 },
    Fail(&'static str),
}

/// In-memory executor: records every statement and answers from a queue.
/// An exhausted queue answers with no rows / nothing affected.
#[derive(Default)]
pub struct FakeStore {
    calls: Mutex<Vec<(String, Vec<Value>)>>,
    replies: Mutex<VecDeque<Reply>>,
    ping_fails: bool,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, r: Reply) -> Self {
        self.replies.lock().unwrap().push_back(r);
        self
    }

    pub fn failing_ping(mut self) -> Self {
        self.ping_fails = true;
        self
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, sql: &str, params: &[Value]) -> Option<Reply> {
        self.calls
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));
        self.replies.lock().unwrap().pop_front()
    }
}

#[async_trait]
impl QueryExecutor for FakeStore {
    async fn fetch_all(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, sqlx::Error> {
        match self.next(sql, params) {
            Some(Reply::Rows(rows)) => Ok(rows
                .into_iter()
                .map(|r| match r {
                    Value::Object(m) => m,
                    other => panic!("scripted row must be an object, got {}", other),
                })
                .collect()),
            Some(Reply::Fail(msg)) => Err(sqlx::Error::Protocol(msg.to_string())),
            Some(Reply::Exec { .. }) => panic!("exec reply queued for a query: {}", sql),
            None => Ok(Vec::new()),
        }
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> Result<ExecResult, sqlx::Error> {
        match self.next(sql, params) {
            Some(Reply::Exec {
                last_insert_id,
                rows_affected,
            }) => Ok(ExecResult {
                last_insert_id,
                rows_affected,
            }),
            Some(Reply::Fail(msg)) => Err(sqlx::Error::Protocol(msg.to_string())),
            Some(Reply::Rows(_)) => panic!("rows reply queued for a write: {}", sql),
            None => Ok(ExecResult::default()),
        }
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        if self.ping_fails {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

pub fn router(store: Arc<FakeStore>) -> Router {
    app_router(AppState::new(store), &CorsSettings::default())
}

/// Send one request; returns the status and the parsed JSON body (Null when empty).
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    raw: &'static str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw))
        .unwrap();
    send_request(app, request).await
}

async fn send_request(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
