//! Repository Module
//!
//! Data access layer for the server.
//! Each repository handles database operations for a specific domain entity.

pub mod analytics;
pub mod article;
pub mod product;
pub mod settings;
pub mod user;

// Re-export for convenience
pub use analytics as analytics_repository;
pub use article as article_repository;
pub use product as product_repository;
pub use settings as settings_repository;
pub use user as user_repository;

/// True when the error is a Postgres unique-key violation (23505).
///
/// Services turn these into conflict errors instead of opaque 500s;
/// the generator in particular relies on slug conflicts being
/// distinguishable so re-runs can skip already-written articles.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("23505"),
        _ => false,
    }
}

/// True when the error is a Postgres foreign-key violation (23503).
///
/// An insert referencing a row that a concurrent request just deleted
/// fails this way; services map it to the same not-found error a
/// pre-check would have produced.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("23503"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::error::Error as StdError;

    #[derive(Debug)]
    struct StubDbError(&'static str);

    impl std::fmt::Display for StubDbError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "constraint violation")
        }
    }

    impl StdError for StubDbError {}

    impl sqlx::error::DatabaseError for StubDbError {
        fn message(&self) -> &str {
            "constraint violation"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.0))
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::Other
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }
    }

    fn db_error(code: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(StubDbError(code)))
    }

    #[test]
    fn test_unique_violation_detection() {
        assert!(is_unique_violation(&db_error("23505")));
        assert!(!is_unique_violation(&db_error("23503")));
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }

    #[test]
    fn test_foreign_key_violation_detection() {
        assert!(is_foreign_key_violation(&db_error("23503")));
        assert!(!is_foreign_key_violation(&db_error("23505")));
        assert!(!is_foreign_key_violation(&sqlx::Error::RowNotFound));
    }
}
