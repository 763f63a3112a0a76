// src/db/users.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub phone: String,
}

pub fn find_by_id(conn: &Connection, user_id: i64) -> Result<Option<User>, ServerError> {
    conn.query_row(
        "select id, email, display_name, phone from users where id = ?",
        params![user_id],
        |row| {
            Ok(User {
                id: row.get(0)?,
                email: row.get(1)?,
                display_name: row.get(2)?,
                phone: row.get(3)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("user lookup failed: {e}")))
}

/// Sign-in is email-only, so the first sign-in also creates the account.
pub fn find_or_create_by_email(
    conn: &Connection,
    email: &str,
    now: i64,
) -> Result<User, ServerError> {
    let existing = conn
        .query_row(
            "select id, email, display_name, phone from users where email = ?",
            params![email],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    email: row.get(1)?,
                    display_name: row.get(2)?,
                    phone: row.get(3)?,
                })
            },
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("user lookup failed: {e}")))?;

    if let Some(user) = existing {
        return Ok(user);
    }

    conn.execute(
        "insert into users (email, created_at) values (?, ?)",
        params![email, now],
    )
    .map_err(|e| ServerError::DbError(format!("create user failed: {e}")))?;

    Ok(User {
        id: conn.last_insert_rowid(),
        email: email.to_string(),
        display_name: String::new(),
        phone: String::new(),
    })
}
