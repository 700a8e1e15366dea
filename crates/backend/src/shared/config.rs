use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub reference: ReferenceConfig,
    pub views: ViewsConfig,
    pub nasa: NasaConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Base URL the index page uses to reach this process's own API.
    /// Derived from `port` when not set.
    #[serde(default)]
    pub internal_api_base: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReferenceConfig {
    /// `{"disasters": [...]}` catalog used by the year page.
    pub catalog_path: String,
    /// Top-level array used by the year/type detail page.
    pub details_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewsConfig {
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NasaConfig {
    pub base_url: String,
    /// 0 disables the timeout.
    #[serde(default)]
    pub timeout_secs: u64,
}

/// Конфигурация по умолчанию, встроенная в бинарник
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[database]
path = "target/db/disasters.db"

[reference]
catalog_path = "public/JS/data.json"
details_path = "public/JS/newData.json"

[views]
dir = "views"

[nasa]
base_url = "https://svs.gsfc.nasa.gov/api"
timeout_secs = 30
"#;

impl ReferenceConfig {
    pub fn catalog(&self) -> &Path {
        Path::new(&self.catalog_path)
    }

    pub fn details(&self) -> &Path {
        Path::new(&self.details_path)
    }
}

impl ViewsConfig {
    pub fn dir(&self) -> &Path {
        Path::new(&self.dir)
    }
}

impl Config {
    pub fn internal_api_base(&self) -> String {
        self.server
            .internal_api_base
            .clone()
            .unwrap_or_else(|| format!("http://127.0.0.1:{}", self.server.port))
    }
}

/// Загрузка конфигурации из config.toml
///
/// Порядок поиска:
/// 1. Рядом с исполняемым файлом (для production)
/// 2. Текущая рабочая директория
/// 3. Встроенная конфигурация по умолчанию
pub fn load_config() -> anyhow::Result<Config> {
    for config_path in candidate_paths() {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    default_config()
}

pub fn default_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join("config.toml"));
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("config.toml"));
    }
    paths
}

/// Путь к файлу базы данных из конфигурации.
/// Относительный путь считается от рабочей директории.
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path = Path::new(&config.database.path);
    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(db_path))
}
