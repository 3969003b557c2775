/// Returns true if `e` is a unique-constraint violation reported by the database.
///
/// `links.code` is the only unique column, so any such violation on insert
/// means the code is taken.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}
