use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::backend::database::DatabaseBackendConfig;
use crate::backend::DatabaseType;
use crate::error::{AppError, AppResult};
use crate::models::Language;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    #[serde(rename = "type")]
    pub db_type: String,
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_connection_timeout() -> u64 {
    30
}

/// Records loaded into an empty store at startup
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub seed: Vec<SeedLanguage>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SeedLanguage {
    #[serde(default)]
    pub id: Option<String>,
    pub language: String,
    pub version: i64,
    #[serde(rename = "jvmBased", alias = "isJvmBased")]
    pub jvm_based: bool,
}

impl SeedLanguage {
    fn new(language: &str, version: i64, jvm_based: bool) -> Self {
        Self {
            id: None,
            language: language.to_string(),
            version,
            jvm_based,
        }
    }

    pub fn to_language(&self) -> Language {
        match &self.id {
            Some(id) => Language::new(
                id.clone(),
                self.language.clone(),
                self.version,
                self.jvm_based,
            ),
            None => {
                Language::with_generated_id(self.language.clone(), self.version, self.jvm_based)
            }
        }
    }
}

lazy_static! {
    static ref ENV_VAR: Regex =
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var pattern is valid");
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn load_from_file<P: AsRef<Path>>(config_path: P) -> Result<Self, String> {
        let path = config_path.as_ref();

        if !path.exists() {
            return Err(format!("Configuration file not found: {}", path.display()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;

        let expanded_content = Self::expand_env_vars(&content)?;

        serde_yaml::from_str(&expanded_content)
            .map_err(|e| format!("Failed to parse config file {}: {}", path.display(), e))
    }

    /// In-memory SQLite seeded with a small sample catalog
    pub fn default_config() -> Self {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                db_type: "sqlite".to_string(),
                url: ":memory:".to_string(),
                max_connections: 1,
                connection_timeout: default_connection_timeout(),
            },
            catalog: CatalogConfig {
                seed: vec![
                    SeedLanguage::new("Java", 7, true),
                    SeedLanguage::new("Java", 8, true),
                    SeedLanguage::new("Kotlin", 1, true),
                    SeedLanguage::new("Scala", 2, true),
                    SeedLanguage::new("Python", 3, false),
                    SeedLanguage::new("Rust", 1, false),
                ],
            },
        }
    }

    /// Expand environment variables in format ${VAR_NAME} or ${VAR_NAME:-default}
    fn expand_env_vars(content: &str) -> Result<String, String> {
        let mut missing = None;

        let expanded = ENV_VAR.replace_all(content, |caps: &Captures| {
            let name = &caps[1];
            match (std::env::var(name), caps.get(2)) {
                (Ok(value), _) => value,
                (Err(_), Some(default)) => default.as_str().to_string(),
                (Err(_), None) => {
                    missing.get_or_insert_with(|| name.to_string());
                    String::new()
                }
            }
        });

        match missing {
            Some(name) => Err(format!(
                "Environment variable {} not found and no default provided",
                name
            )),
            None => Ok(expanded.into_owned()),
        }
    }

    /// Translate the `database` section into a backend configuration
    pub fn database_backend_config(&self) -> AppResult<DatabaseBackendConfig> {
        let database_type = match self.database.db_type.as_str() {
            "postgresql" | "postgres" => DatabaseType::PostgreSQL,
            "sqlite" => DatabaseType::SQLite,
            other => {
                return Err(AppError::Configuration(format!(
                    "Unsupported database type: {}",
                    other
                )))
            }
        };

        let config = DatabaseBackendConfig::new(database_type, self.database.url.clone())
            .with_max_connections(self.database.max_connections)
            .with_connection_timeout(self.database.connection_timeout);

        config.validate().map_err(AppError::Configuration)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_env_var_expansion() {
        std::env::set_var("LANGSEARCH_TEST_PORT", "8080");

        let expanded = AppConfig::expand_env_vars(
            "port: ${LANGSEARCH_TEST_PORT:-3000}\nhost: \"${LANGSEARCH_MISSING:-localhost}\"",
        )
        .unwrap();
        assert!(expanded.contains("port: 8080"));
        assert!(expanded.contains("host: \"localhost\""));

        std::env::remove_var("LANGSEARCH_TEST_PORT");
    }

    #[test]
    fn test_env_var_without_default_must_exist() {
        let result = AppConfig::expand_env_vars("url: ${LANGSEARCH_DEFINITELY_UNSET}");
        assert!(result
            .unwrap_err()
            .contains("LANGSEARCH_DEFINITELY_UNSET not found"));
    }

    #[test]
    fn test_config_file_loading() {
        let path = write_temp_config(
            "language_search_test_config.yaml",
            r#"
server:
  host: "0.0.0.0"
  port: 8080

database:
  type: "postgresql"
  url: "${LANGSEARCH_DB_URL:-postgres://localhost/languages}"
  max_connections: 4

catalog:
  seed:
    - id: "1"
      language: Java
      version: 8
      isJvmBased: true
    - language: Python
      version: 3
      jvmBased: false
"#,
        );

        let config = AppConfig::load_from_file(&path).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.db_type, "postgresql");
        assert_eq!(config.database.url, "postgres://localhost/languages");
        assert_eq!(config.database.max_connections, 4);
        assert_eq!(config.database.connection_timeout, 30);
        assert_eq!(config.catalog.seed.len(), 2);
        assert_eq!(config.catalog.seed[0].to_language(), Language::new("1", "Java", 8, true));
        assert!(config.catalog.seed[1].id.is_none());

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_catalog_is_optional() {
        let path = write_temp_config(
            "language_search_no_catalog.yaml",
            "server: {host: 127.0.0.1, port: 3000}\ndatabase: {type: sqlite, url: \":memory:\"}\n",
        );

        let config = AppConfig::load_from_file(&path).unwrap();
        assert!(config.catalog.seed.is_empty());
        assert_eq!(config.database.max_connections, 10);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_config_file() {
        let result = AppConfig::load_from_file("/nonexistent/path/config.yaml");
        assert!(result.unwrap_err().contains("Configuration file not found"));
    }

    #[test]
    fn test_invalid_yaml() {
        let path = write_temp_config("language_search_invalid.yaml", "invalid: yaml: content: [");

        let result = AppConfig::load_from_file(&path);
        assert!(result.unwrap_err().contains("Failed to parse config file"));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default_config();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.db_type, "sqlite");
        assert_eq!(config.database.url, ":memory:");
        assert_eq!(config.database.max_connections, 1);
        assert!(config
            .catalog
            .seed
            .iter()
            .any(|s| s.language == "Java" && s.version == 8 && s.jvm_based));
    }

    #[test]
    fn test_database_backend_config() {
        let backend = AppConfig::default_config().database_backend_config().unwrap();
        assert_eq!(backend.database_type, DatabaseType::SQLite);
        assert!(backend.is_memory_database());

        let mut config = AppConfig::default_config();
        config.database.db_type = "mongodb".to_string();
        assert!(matches!(
            config.database_backend_config(),
            Err(AppError::Configuration(_))
        ));

        config.database.db_type = "postgresql".to_string();
        config.database.url = "mysql://localhost".to_string();
        assert!(config.database_backend_config().is_err());
    }
}
