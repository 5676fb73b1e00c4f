/// All primary keys are SQLite `INTEGER PRIMARY KEY AUTOINCREMENT` values.
pub type DbId = i64;
