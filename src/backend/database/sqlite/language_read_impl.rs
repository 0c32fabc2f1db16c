use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use super::super::filter::{FilterConverter, SqlParam};
use super::super::language_read::{language_from_document, LanguageReader};
use super::filter_impl::SqliteFilterConverter;
use crate::backend::database::LANGUAGES_TABLE;
use crate::error::{AppError, AppResult};
use crate::filter::Predicate;
use crate::models::Language;

/// SQLite-specific implementation of LanguageReader
pub struct SqliteLanguageReader {
    pool: SqlitePool,
    filter_converter: SqliteFilterConverter,
}

impl SqliteLanguageReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            filter_converter: SqliteFilterConverter::new(),
        }
    }

    fn row_to_language(row: &sqlx::sqlite::SqliteRow) -> AppResult<Language> {
        let id: String = row.get("id");
        let data: String = row.get("data");
        let document = serde_json::from_str(&data).map_err(AppError::Serialization)?;
        language_from_document(id, document)
    }
}

#[async_trait]
impl LanguageReader for SqliteLanguageReader {
    async fn find_language_by_id(&self, id: &str) -> AppResult<Option<Language>> {
        let sql = format!("SELECT id, data FROM {} WHERE id = ?1", LANGUAGES_TABLE);

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to find language: {}", e)))?;

        row.as_ref().map(Self::row_to_language).transpose()
    }

    async fn find_languages(&self, predicate: &Predicate) -> AppResult<Vec<Language>> {
        let (where_clause, params) = self.filter_converter.to_where_clause(predicate)?;
        let sql = format!(
            "SELECT id, data FROM {} WHERE {} ORDER BY rowid",
            LANGUAGES_TABLE, where_clause
        );

        let mut query = sqlx::query(&sql);
        for param in params {
            query = match param {
                SqlParam::Text(value) => query.bind(value),
                SqlParam::Integer(value) => query.bind(value),
                SqlParam::Boolean(value) => query.bind(value),
            };
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to search languages: {}", e)))?;

        Ok(rows
            .iter()
            .filter_map(|row| match Self::row_to_language(row) {
                Ok(language) => Some(language),
                Err(e) => {
                    tracing::warn!("Skipping unreadable language document: {}", e);
                    None
                }
            })
            .collect())
    }

    async fn count_languages(&self) -> AppResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", LANGUAGES_TABLE);

        sqlx::query_scalar(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to count languages: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::database::language_insert::{LanguageInsertProcessor, LanguageInserter};
    use crate::backend::database::sqlite::SqliteLanguageInserter;
    use crate::filter::{Filter, FilterTarget, Operator, QueryBuilder, Scalar};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn seeded_reader() -> SqliteLanguageReader {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        super::super::schema::init_schema(&pool).await.unwrap();

        let inserter = SqliteLanguageInserter::new(pool.clone());
        for language in [
            Language::new("1", "Java", 7, true),
            Language::new("2", "Java", 8, true),
            Language::new("3", "Python", 3, false),
            Language::new("4", "Kotlin", 1, true),
        ] {
            let prepared = LanguageInsertProcessor::prepare_language_for_insert(&language).unwrap();
            inserter.execute_language_insert(prepared).await.unwrap();
        }

        // Documents written by other tools may carry mistyped fields
        let mistyped = r#"{"language":"Java","version":"8","jvmBased":1}"#;
        sqlx::query("INSERT INTO languages (id, data) VALUES ('5', ?)")
            .bind(mistyped)
            .execute(&pool)
            .await
            .unwrap();

        SqliteLanguageReader::new(pool)
    }

    fn ids(languages: &[Language]) -> Vec<&str> {
        languages.iter().map(|l| l.id.as_str()).collect()
    }

    fn search(filters: Vec<Filter>) -> Predicate {
        QueryBuilder::build(&filters).unwrap()
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let reader = seeded_reader().await;

        let java = reader.find_language_by_id("2").await.unwrap();
        assert_eq!(java, Some(Language::new("2", "Java", 8, true)));

        assert!(reader.find_language_by_id("404").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_equality_and_range() {
        let reader = seeded_reader().await;

        let predicate = search(vec![
            Filter::new("language", Operator::Equals, FilterTarget::Value("Java".into())).unwrap(),
            Filter::new(
                "version",
                Operator::Equals,
                FilterTarget::Range {
                    from: Scalar::Integer(7),
                    to: Scalar::Integer(8),
                },
            )
            .unwrap(),
        ]);

        let found = reader.find_languages(&predicate).await.unwrap();
        assert_eq!(ids(&found), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_comparisons_respect_json_types() {
        let reader = seeded_reader().await;

        let predicate = search(vec![Filter::new(
            "version",
            Operator::GreaterOrEqual,
            FilterTarget::Value(Scalar::Integer(8)),
        )
        .unwrap()]);
        assert_eq!(ids(&reader.find_languages(&predicate).await.unwrap()), vec!["2"]);

        let predicate = search(vec![Filter::new(
            "jvmBased",
            Operator::Equals,
            FilterTarget::Value(Scalar::Boolean(true)),
        )
        .unwrap()]);
        assert_eq!(
            ids(&reader.find_languages(&predicate).await.unwrap()),
            vec!["1", "2", "4"]
        );
    }

    #[tokio::test]
    async fn test_range_with_one_unparseable_bound_matches_nothing() {
        let reader = seeded_reader().await;

        let predicate = search(vec![Filter::new(
            "version",
            Operator::Equals,
            FilterTarget::Range {
                from: "7".into(),
                to: "nine".into(),
            },
        )
        .unwrap()]);

        // Both bounds stay text, so no integer version can fall inside
        assert!(reader.find_languages(&predicate).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_lte_and_unknown_attribute() {
        let reader = seeded_reader().await;

        let predicate = search(vec![Filter::new(
            "version",
            Operator::LessOrEqual,
            FilterTarget::Value(Scalar::Integer(3)),
        )
        .unwrap()]);
        assert_eq!(ids(&reader.find_languages(&predicate).await.unwrap()), vec!["3", "4"]);

        let predicate = search(vec![Filter::new(
            "paradigm",
            Operator::Equals,
            FilterTarget::Value("functional".into()),
        )
        .unwrap()]);
        assert!(reader.find_languages(&predicate).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_predicate_and_count() {
        let reader = seeded_reader().await;

        // The mistyped document is counted but cannot be returned
        let all = reader.find_languages(&Predicate::default()).await.unwrap();
        assert_eq!(ids(&all), vec!["1", "2", "3", "4"]);
        assert_eq!(reader.count_languages().await.unwrap(), 5);
    }
}
