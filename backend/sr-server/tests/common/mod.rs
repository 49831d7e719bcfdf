#![allow(dead_code)]

//! Test infrastructure for sr-server API tests

use sr_config::ShortcutConfig;
use sr_core::{CustomField, CustomFieldValue, Label, ReferenceKind, Story, StoryCustomField};
use sr_db::{ReferenceRepository, StoryRepository, reconcile_atomically};
use sr_server::{AppState, build_router};
use sr_shortcut::{
    BacklogSource, RemoteCustomField, RemoteLabel, RemoteStory, ShortcutClient, ShortcutError,
    ShortcutResult,
};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const BACKLOG_STATE: &str = "Önskemål";
pub const PRIORITY_FIELD_ID: &str = "field-priority";
pub const PERIOD_FIELD_ID: &str = "field-period";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sr_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Shortcut client pointed at `url` (a wiremock server, or nothing at all)
pub fn test_client(url: &str) -> ShortcutClient {
    ShortcutClient::new(&ShortcutConfig {
        url: url.to_string(),
        token: Some("test-token".to_string()),
        backlog_state: BACKLOG_STATE.to_string(),
        page_size: 25,
    })
}

/// Create AppState for testing. The source points at a closed port; use
/// [`create_test_app_state_with_source`] for tests that sync.
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    create_test_app_state_with_source(pool, Arc::new(test_client("http://127.0.0.1:9")))
}

pub fn create_test_app_state_with_source(
    pool: SqlitePool,
    source: Arc<dyn BacklogSource>,
) -> AppState {
    AppState {
        pool,
        source,
        backlog_state: BACKLOG_STATE.to_string(),
    }
}

pub fn test_router(state: AppState) -> Router {
    build_router(state, &["http://localhost:5173".to_string()])
}

/// Send one request and decode the body as JSON (Null when it is not JSON)
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

pub fn create_test_story(id: i64, name: &str) -> Story {
    Story {
        id,
        name: name.to_string(),
        description: format!("Description of {name}"),
        created: at(1),
        updated: at(2),
        shortcut_url: format!("https://app.shortcut.com/acme/story/{id}"),
        active: true,
        custom_fields: Vec::new(),
        labels: Vec::new(),
        persons: Vec::new(),
        components: Vec::new(),
        epic_groups: Vec::new(),
        products: Vec::new(),
    }
}

pub fn create_test_labels() -> Vec<Label> {
    vec![
        Label::new(1, "backend"),
        Label::new(2, "frontend"),
        Label::new(3, "bug"),
    ]
}

fn field_value(field_id: &str, value_id: &str, value: &str) -> CustomFieldValue {
    CustomFieldValue {
        value_id: value_id.to_string(),
        field_id: field_id.to_string(),
        value: value.to_string(),
    }
}

pub fn create_test_custom_fields() -> Vec<CustomField> {
    vec![
        CustomField {
            id: PERIOD_FIELD_ID.to_string(),
            name: "Periodsplanering".to_string(),
            values: vec![
                field_value(PERIOD_FIELD_ID, "period-p1", "P1 2024"),
                field_value(PERIOD_FIELD_ID, "period-p2", "P2 2024"),
            ],
        },
        CustomField {
            id: PRIORITY_FIELD_ID.to_string(),
            name: "Priority".to_string(),
            values: vec![
                field_value(PRIORITY_FIELD_ID, "priority-high", "High"),
                field_value(PRIORITY_FIELD_ID, "priority-medium", "Medium"),
                field_value(PRIORITY_FIELD_ID, "priority-low", "Low"),
            ],
        },
    ]
}

/// Link to one of the values from [`create_test_custom_fields`]
pub fn story_field(value_id: &str) -> StoryCustomField {
    create_test_custom_fields()
        .into_iter()
        .find_map(|field| {
            field.value(value_id).map(|v| StoryCustomField {
                value_id: v.value_id.clone(),
                field_id: field.id.clone(),
                field_name: field.name.clone(),
                value: v.value.clone(),
            })
        })
        .expect("unknown test value id")
}

/// Store labels, custom fields and the given stories
pub async fn seed_stories(pool: &SqlitePool, stories: &[Story]) {
    reconcile_atomically(pool, &create_test_labels(), true)
        .await
        .expect("Failed to seed labels");
    reconcile_atomically(pool, &create_test_custom_fields(), true)
        .await
        .expect("Failed to seed custom fields");
    reconcile_atomically(pool, stories, false)
        .await
        .expect("Failed to seed stories");
}

pub async fn create_test_reference(pool: &SqlitePool, kind: ReferenceKind, name: &str) -> i64 {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    ReferenceRepository::create(&mut conn, kind, name)
        .await
        .expect("Failed to create reference")
        .id
}

pub async fn attach_reference(pool: &SqlitePool, story_id: i64, kind: ReferenceKind, id: i64) {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    StoryRepository::attach(&mut conn, story_id, kind, id)
        .await
        .expect("Failed to attach reference");
}

pub async fn load_story(pool: &SqlitePool, id: i64) -> Option<Story> {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    StoryRepository::find_by_id(&mut conn, id)
        .await
        .expect("Failed to load story")
}

// =============================================================================
// In-process backlog source
// =============================================================================

/// Serves fixed data; `fail_stories` makes the story fetch fail like an
/// upstream 500.
#[derive(Default)]
pub struct StaticSource {
    pub labels: Vec<RemoteLabel>,
    pub fields: Vec<RemoteCustomField>,
    pub stories: Vec<RemoteStory>,
    pub fail_stories: bool,
    pub story_fetches: AtomicUsize,
}

#[async_trait]
impl BacklogSource for StaticSource {
    async fn fetch_stories(&self, _state: &str, _limit: i64) -> ShortcutResult<Vec<RemoteStory>> {
        self.story_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_stories {
            return Err(ShortcutError::api_error(500, "boom".to_string()));
        }
        Ok(self.stories.clone())
    }

    async fn fetch_labels(&self) -> ShortcutResult<Vec<RemoteLabel>> {
        Ok(self.labels.clone())
    }

    async fn fetch_custom_fields(&self) -> ShortcutResult<Vec<RemoteCustomField>> {
        Ok(self.fields.clone())
    }
}
