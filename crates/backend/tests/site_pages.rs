mod support;

use axum::http::StatusCode;
use backend::routes::configure_routes;
use backend::state::AppState;
use sea_orm::{EntityTrait, Set};
use support::{seed_record, test_app, test_app_with};
use tokio::net::TcpListener;

#[tokio::test]
async fn health_answers_ok() {
    let app = test_app().await;
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn index_degrades_to_empty_list_when_api_is_unreachable() {
    let app = test_app().await;
    seed_record(app.db(), Some("Flood"), 2020, "Chad").await;

    let (status, html) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No disaster records available."));
}

#[tokio::test]
async fn index_renders_timeline_fetched_over_loopback() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = test_app_with(|config| {
        config.server.internal_api_base = Some(format!("http://{addr}"));
    })
    .await;
    seed_record(app.db(), Some("Flood"), 2020, "Chad").await;
    seed_record(app.db(), Some("Storm"), 1999, "India").await;

    let server = configure_routes(app.state.clone());
    tokio::spawn(async move {
        axum::serve(listener, server).await.unwrap();
    });

    let (status, html) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("class=\"timeline-row\"").count(), 2);
    assert!(html.contains("India"));
}

#[tokio::test]
async fn static_pages_come_from_views_dir() {
    let app = test_app().await;

    let (status, html) = app.get("/about").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html, "<h1>About us</h1>");

    let (status, html) = app.get("/wildfires").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Wildfires"));
}

#[tokio::test]
async fn missing_template_is_a_server_error() {
    let app = test_app().await;
    let (status, body) = app.get("/volcano").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Error rendering page");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = test_app().await;
    let (status, _) = app.get("/no/such/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn timeline_api_serves_dataset_field_names() {
    let app = test_app().await;
    seed_record(app.db(), Some("Flood"), 2020, "Chad").await;
    seed_record(app.db(), Some("Storm"), 2021, "Cuba").await;

    let (status, body) = app.get_json("/api/timeline/disaster").await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["Disaster Type"], "Flood");
    assert_eq!(records[0]["Start Year"], 2020);
    assert_eq!(records[1]["Country"], "Cuba");

    let (status, body) = app.get_json("/api/timeline/disaster/2021").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn dataset_apis_list_rows() {
    use backend::domain::a003_earthquake::repository as earthquake;

    let app = test_app().await;
    earthquake::Entity::insert(earthquake::ActiveModel {
        time: Set("2011-03-11T05:46:24Z".to_string()),
        place: Set(Some("Tohoku".to_string())),
        latitude: Set(38.3),
        longitude: Set(142.4),
        depth_km: Set(Some(29.0)),
        magnitude: Set(9.1),
        ..Default::default()
    })
    .exec(app.db())
    .await
    .unwrap();

    let (status, body) = app.get_json("/api/earthquake").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["place"], "Tohoku");
    assert_eq!(body[0]["magnitude"], 9.1);

    assert_eq!(body[0]["depth_km"], 29.0);
}

#[tokio::test]
async fn dataset_apis_start_empty() {
    let app = test_app().await;
    for uri in [
        "/api/airquality",
        "/api/earthquake",
        "/api/globalwarming",
        "/api/wildfires",
    ] {
        let (status, body) = app.get_json(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.as_array().unwrap().is_empty(), "{uri}");
    }
}

#[tokio::test]
async fn air_quality_api_lists_readings() {
    use backend::domain::a002_air_quality::repository as air_quality;

    let app = test_app().await;
    air_quality::Entity::insert(air_quality::ActiveModel {
        country: Set("India".to_string()),
        city: Set(None),
        year: Set(2019),
        aqi: Set(Some(158.0)),
        pm25: Set(Some(58.1)),
        pm10: Set(None),
        no2: Set(Some(21.5)),
        ..Default::default()
    })
    .exec(app.db())
    .await
    .unwrap();

    let (status, body) = app.get_json("/api/airquality").await;
    assert_eq!(status, StatusCode::OK);
    let row = &body[0];
    assert_eq!(row["country"], "India");
    assert!(row["city"].is_null());
    assert_eq!(row["year"], 2019);
    assert_eq!(row["aqi"], 158.0);
    assert_eq!(row["pm25"], 58.1);
    assert!(row["pm10"].is_null());
    assert_eq!(row["no2"], 21.5);
}

#[tokio::test]
async fn global_warming_api_lists_years_in_order() {
    use backend::domain::a004_global_warming::repository as global_warming;

    let app = test_app().await;
    for (year, anomaly, co2) in [(2016, 1.01, Some(404.2)), (1880, -0.16, None)] {
        global_warming::Entity::insert(global_warming::ActiveModel {
            year: Set(year),
            temperature_anomaly: Set(anomaly),
            co2_ppm: Set(co2),
            ..Default::default()
        })
        .exec(app.db())
        .await
        .unwrap();
    }

    let (status, body) = app.get_json("/api/globalwarming").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["year"], 1880);
    assert_eq!(body[0]["temperature_anomaly"], -0.16);
    assert!(body[0]["co2_ppm"].is_null());
    assert_eq!(body[1]["co2_ppm"], 404.2);
}

#[tokio::test]
async fn wildfire_api_lists_records() {
    use backend::domain::a005_wildfire::repository as wildfire;

    let app = test_app().await;
    wildfire::Entity::insert(wildfire::ActiveModel {
        year: Set(2020),
        country: Set("Australia".to_string()),
        region: Set(Some("New South Wales".to_string())),
        burned_area_ha: Set(Some(5_500_000.0)),
        fire_count: Set(None),
        ..Default::default()
    })
    .exec(app.db())
    .await
    .unwrap();

    let (status, body) = app.get_json("/api/wildfires").await;
    assert_eq!(status, StatusCode::OK);
    let row = &body[0];
    assert_eq!(row["year"], 2020);
    assert_eq!(row["country"], "Australia");
    assert_eq!(row["region"], "New South Wales");
    assert_eq!(row["burned_area_ha"], 5_500_000.0);
    assert!(row["fire_count"].is_null());
}

#[tokio::test]
async fn app_state_builds_from_default_config() {
    let conn = backend::shared::data::db::connect("sqlite::memory:")
        .await
        .unwrap();
    let config = backend::shared::config::default_config().unwrap();
    assert!(AppState::new(config, conn).is_ok());
}
