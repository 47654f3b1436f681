//! Structured classification of database errors.

/// Name of the unique constraint guarding `links.code` (see migrations).
const LINKS_CODE_CONSTRAINT: &str = "links_code_key";

/// Returns true when `e` is a unique-constraint violation on `links.code`.
///
/// Classification is structural (driver error kind plus constraint name)
/// rather than matching substrings of the error message, so an unrelated
/// constraint violation is never mistaken for a code collision.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    e.as_database_error().is_some_and(|db_err| {
        db_err.is_unique_violation() && db_err.constraint() == Some(LINKS_CODE_CONSTRAINT)
    })
}
