#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::{to_bytes, Body};
use axum::extract::Path;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use backend::domain::a001_timeline::repository as timeline;
use backend::routes::configure_routes;
use backend::shared::config::{default_config, Config};
use backend::shared::data::db;
use backend::state::{AppState, SharedState};
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

pub const CATALOG: &str = r#"{"disasters": [
    {"DisasterType": "Flood", "desc": "Overflowing water", "image": "/images/flood.jpg"},
    {"DisasterType": "Storm", "desc": "Strong winds", "image": "/images/storm.jpg"},
    {"DisasterType": "Drought", "desc": "Lack of rain", "image": "/images/drought.jpg"}
]}"#;

pub const DETAILS: &str = r#"[
    {"DisasterType": "Flood", "summary": "Rivers burst their banks", "deadliest": "1931 China floods"},
    {"DisasterType": "Earthquake", "summary": "Ground shaking"}
]"#;

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

pub struct TestApp {
    pub router: Router,
    pub state: SharedState,
    pub dir: PathBuf,
}

impl TestApp {
    pub fn db(&self) -> &DatabaseConnection {
        &self.state.db
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    pub fn write_catalog(&self, contents: &str) {
        std::fs::write(&self.state.config.reference.catalog_path, contents).unwrap();
    }

    pub fn write_details(&self, contents: &str) {
        std::fs::write(&self.state.config.reference.details_path, contents).unwrap();
    }
}

/// Fresh temp directory with reference files and a few views.
pub fn fixture_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "disasters-test-{}-{}",
        std::process::id(),
        NEXT_DIR.fetch_add(1, Ordering::SeqCst)
    ));
    std::fs::create_dir_all(dir.join("views/events_Section")).unwrap();
    std::fs::write(dir.join("data.json"), CATALOG).unwrap();
    std::fs::write(dir.join("newData.json"), DETAILS).unwrap();
    std::fs::write(dir.join("views/about.html"), "<h1>About us</h1>").unwrap();
    std::fs::write(
        dir.join("views/events_Section/wildfires.html"),
        "<h1>Wildfires</h1>",
    )
    .unwrap();
    dir
}

pub fn test_config(dir: &std::path::Path) -> Config {
    let mut config = default_config().unwrap();
    config.reference.catalog_path = dir.join("data.json").to_string_lossy().into_owned();
    config.reference.details_path = dir.join("newData.json").to_string_lossy().into_owned();
    config.views.dir = dir.join("views").to_string_lossy().into_owned();
    // nothing listens on the discard port
    config.nasa.base_url = "http://127.0.0.1:9".to_string();
    config.nasa.timeout_secs = 5;
    config.server.internal_api_base = Some("http://127.0.0.1:9".to_string());
    config
}

pub async fn test_app() -> TestApp {
    test_app_with(|_| {}).await
}

pub async fn test_app_with(configure: impl FnOnce(&mut Config)) -> TestApp {
    let dir = fixture_dir();
    let mut config = test_config(&dir);
    configure(&mut config);

    let conn = db::connect("sqlite::memory:").await.unwrap();
    db::ensure_schema(&conn).await.unwrap();

    let state = AppState::new(config, conn).unwrap();
    TestApp {
        router: configure_routes(state.clone()),
        state,
        dir,
    }
}

pub async fn seed_record(
    db: &DatabaseConnection,
    disaster_type: Option<&str>,
    year: i32,
    country: &str,
) {
    timeline::Entity::insert(timeline::ActiveModel {
        disaster_type: Set(disaster_type.map(str::to_string)),
        start_year: Set(Some(year)),
        country: Set(Some(country.to_string())),
        ..Default::default()
    })
    .exec(db)
    .await
    .unwrap();
}

// ============================================================================
// SVS stub
// ============================================================================

pub fn svs_document(id: u32) -> Value {
    json!({
        "id": id,
        "title": format!("Visualization {id}"),
        "description": format!("First sentence of {id}. Second sentence. Third sentence."),
        "media_groups": [
            {"description": format!("Group of {id}"), "items": [
                {"instance": {"title": "Related page", "media_type": "Page"}},
                {"instance": {"media_type": "Movie", "alt_text": "no file yet"}},
                {"instance": {"url": format!("https://svs.example/{id}/poster.jpg"), "media_type": "Image", "alt_text": "poster"}},
                {"instance": {"url": format!("https://svs.example/{id}/clip1.mp4"), "media_type": "Movie", "alt_text": "clip one"}},
                {"instance": {"url": format!("https://svs.example/{id}/clip2.mp4"), "media_type": "Movie", "alt_text": "clip two"}},
                {"instance": {"url": format!("https://svs.example/{id}/still.png"), "alt_text": "still"}}
            ]}
        ]
    })
}

/// Serves [`svs_document`] for every id except `failing`, which answers 404.
pub async fn spawn_svs_stub(failing: Option<u32>) -> String {
    let app = Router::new().route(
        "/:id",
        get(move |Path(id): Path<u32>| async move {
            if Some(id) == failing {
                return (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."})))
                    .into_response();
            }
            Json(svs_document(id)).into_response()
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
