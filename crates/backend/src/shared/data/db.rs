use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};
use std::path::Path;

/// Tables the application reads. Created empty when missing so that a fresh
/// install serves empty pages instead of failing every query.
const SCHEMA: &[(&str, &str)] = &[
    (
        "timeline",
        r#"
        CREATE TABLE IF NOT EXISTS timeline (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            "Dis No" TEXT,
            "Disaster Group" TEXT,
            "Disaster Subgroup" TEXT,
            "Disaster Type" TEXT,
            "Disaster Subtype" TEXT,
            "Event Name" TEXT,
            "Country" TEXT,
            "ISO" TEXT,
            "Region" TEXT,
            "Continent" TEXT,
            "Location" TEXT,
            "Start Year" INTEGER,
            "Start Month" INTEGER,
            "Start Day" INTEGER,
            "End Year" INTEGER,
            "End Month" INTEGER,
            "End Day" INTEGER,
            "Total Deaths" INTEGER,
            "No Injured" INTEGER,
            "Total Affected" INTEGER
        );
        "#,
    ),
    (
        "timeline_start_year_idx",
        r#"CREATE INDEX IF NOT EXISTS timeline_start_year_idx ON timeline ("Start Year");"#,
    ),
    (
        "air_quality",
        r#"
        CREATE TABLE IF NOT EXISTS air_quality (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            country TEXT NOT NULL,
            city TEXT,
            year INTEGER NOT NULL,
            aqi REAL,
            pm25 REAL,
            pm10 REAL,
            no2 REAL
        );
        "#,
    ),
    (
        "earthquake",
        r#"
        CREATE TABLE IF NOT EXISTS earthquake (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            time TEXT NOT NULL,
            place TEXT,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL,
            depth_km REAL,
            magnitude REAL NOT NULL
        );
        "#,
    ),
    (
        "global_warming",
        r#"
        CREATE TABLE IF NOT EXISTS global_warming (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            year INTEGER NOT NULL,
            temperature_anomaly REAL NOT NULL,
            co2_ppm REAL
        );
        "#,
    ),
    (
        "wildfire",
        r#"
        CREATE TABLE IF NOT EXISTS wildfire (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            year INTEGER NOT NULL,
            country TEXT NOT NULL,
            region TEXT,
            burned_area_ha REAL,
            fire_count INTEGER
        );
        "#,
    ),
];

/// Open the SQLite file at `db_file` and make sure the schema exists.
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    // Нормализуем разделители пути и формируем корректный URL для Windows
    let normalized = db_file.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    let conn = connect(&db_url).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

pub async fn connect(db_url: &str) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(db_url.to_string());
    options.sqlx_logging(false);
    if db_url.contains(":memory:") {
        // иначе каждое соединение пула получит свою пустую базу
        options.max_connections(1).min_connections(1);
    }
    let conn = Database::connect(options).await?;
    Ok(conn)
}

pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (name, sql) in SCHEMA {
        tracing::debug!("Ensuring {}", name);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let conn = connect("sqlite::memory:").await.unwrap();
        ensure_schema(&conn).await.unwrap();
        ensure_schema(&conn).await.unwrap();

        let tables = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name;"
                    .to_string(),
            ))
            .await
            .unwrap();
        let names: Vec<String> = tables
            .iter()
            .map(|row| row.try_get("", "name").unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["air_quality", "earthquake", "global_warming", "timeline", "wildfire"]
        );
    }
}
