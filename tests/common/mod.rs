#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use thingful::{
    auth::password::hash_password,
    build_app,
    users::{
        repo::UserStore,
        repo_types::{NewUser, User},
    },
    AppState,
};
use time::OffsetDateTime;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "thingful-test-secret";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<dyn UserStore>,
}

pub fn test_app() -> TestApp {
    let state = AppState::fake(TEST_SECRET);
    let store = state.store.clone();
    TestApp {
        router: build_app(state),
        store,
    }
}

pub fn test_app_with_store(store: Arc<dyn UserStore>) -> TestApp {
    let fake = AppState::fake(TEST_SECRET);
    let state = AppState::from_parts(store.clone(), fake.config);
    TestApp {
        router: build_app(state),
        store,
    }
}

pub struct TestUser {
    pub user_name: &'static str,
    pub full_name: &'static str,
    pub nick_name: Option<&'static str>,
    pub password: &'static str,
}

pub fn test_users() -> Vec<TestUser> {
    vec![
        TestUser {
            user_name: "test-user-1",
            full_name: "Test user 1",
            nick_name: Some("TU1"),
            password: "passworD1!",
        },
        TestUser {
            user_name: "test-user-2",
            full_name: "Test user 2",
            nick_name: Some("TU2"),
            password: "passworD2@",
        },
        TestUser {
            user_name: "test-user-3",
            full_name: "Test user 3",
            nick_name: None,
            password: "passworD3#",
        },
    ]
}

/// Inserts the users with hashed passwords, returning the stored rows.
pub async fn seed_users(store: &dyn UserStore, users: &[TestUser]) -> Vec<User> {
    let mut seeded = Vec::with_capacity(users.len());
    for u in users {
        let user = store
            .insert(NewUser {
                user_name: u.user_name.into(),
                password_hash: hash_password(u.password).await.expect("hash seed password"),
                full_name: u.full_name.into(),
                nick_name: u.nick_name.map(Into::into),
                date_created: OffsetDateTime::now_utc(),
            })
            .await
            .expect("seed user");
        seeded.push(user);
    }
    seeded
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<String>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let req = builder
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .expect("build request");
    let res = router.clone().oneshot(req).await.expect("router is infallible");
    let status = res.status();
    let headers = res.headers().clone();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn post_json(router: &Router, uri: &str, body: Value) -> TestResponse {
    send(router, Method::POST, uri, Some(body.to_string())).await
}
