use axum::{
    extract::State,
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::shared::request_logger::request_logger;
use crate::state::SharedState;

/// Content-only pages: route path and template name under the views directory
pub const STATIC_PAGES: &[(&str, &str)] = &[
    ("/about", "about"),
    ("/news", "news"),
    ("/airQuality", "events_Section/airQuality"),
    ("/earthquake", "events_Section/earthquake"),
    ("/globalTemperature", "events_Section/globalTemperature"),
    ("/wildfires", "events_Section/wildfires"),
    ("/beforeEarth", "beforeEarth"),
    ("/afterEarth", "afterEarth"),
    ("/sun", "sun"),
    ("/blacksummer", "interesting_news_Section/blackSummer"),
    ("/intersingfactearthquake", "interesting_news_Section/earthquake"),
    ("/flood", "interesting_news_Section/flood"),
    ("/hurricane", "interesting_news_Section/hurricane"),
    ("/cyclone", "interesting_news_Section/cyclone"),
    ("/frozenfury", "interesting_news_Section/FrozenFury"),
    ("/tsunami", "interesting_news_Section/tsunami"),
    ("/tyhoon", "interesting_news_Section/tyhoon"),
    ("/corona", "interesting_news_Section/corona"),
    ("/solution", "solution"),
    ("/california", "interesting_news_Section/california"),
    ("/interconnected", "interesting_news_Section/interconnected"),
    ("/afmap", "afmap"),
    ("/aqmap", "aqmap"),
    ("/volcano", "volcano"),
];

/// Configure every route of the application
pub fn configure_routes(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let mut router = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DATA PAGES
        // ========================================
        .route("/", get(handlers::pages::index))
        .route("/year", get(handlers::pages::year_landing))
        .route("/year/:selected_year", get(handlers::pages::year))
        .route("/yearDisaster", get(handlers::pages::year_disaster))
        // ========================================
        // NASA MEDIA
        // ========================================
        .route("/home_events", get(handlers::media_events::home_events))
        .route("/events", get(handlers::media_events::events))
        // ========================================
        // JSON API
        // ========================================
        .nest("/api/timeline", handlers::a001_timeline::router())
        .nest("/api/airquality", handlers::a002_air_quality::router())
        .nest("/api/earthquake", handlers::a003_earthquake::router())
        .nest("/api/globalwarming", handlers::a004_global_warming::router())
        .nest("/api/wildfires", handlers::a005_wildfire::router());

    for &(path, template) in STATIC_PAGES {
        router = router.route(
            path,
            get(move |State(state): State<SharedState>| async move {
                handlers::pages::static_page(&state, template).await
            }),
        );
    }

    router
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}
