// src/db/likes.rs
use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

/// Rejections of the like/unlike mutation. Each variant maps to its own
/// user-facing message; a self-like is never reported as a generic
/// persistence failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LikeError {
    #[error("listing not found")]
    ListingNotFound,
    #[error("you can't like your own listing")]
    OwnListing,
    #[error("listing was not liked")]
    NotLiked,
    #[error("like failed: {0}")]
    Db(String),
}

impl From<rusqlite::Error> for LikeError {
    fn from(e: rusqlite::Error) -> Self {
        LikeError::Db(e.to_string())
    }
}

pub fn has_liked(conn: &Connection, user_id: i64, listing_id: i64) -> Result<bool, LikeError> {
    let found: Option<i64> = conn
        .query_row(
            "select 1 from listing_likes where user_id = ? and listing_id = ?",
            params![user_id, listing_id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Records the like and bumps the counter, exactly once per (user, listing):
/// the unique index turns a repeat like into an ignored insert, and the
/// counter only moves when a row was actually inserted.
pub fn like_listing(
    conn: &mut Connection,
    user_id: i64,
    listing_id: i64,
    now: i64,
) -> Result<(), LikeError> {
    let tx = conn.transaction()?;

    let owner_id: Option<i64> = tx
        .query_row(
            "select user_id from listings where id = ?",
            params![listing_id],
            |row| row.get(0),
        )
        .optional()?;

    let owner_id = owner_id.ok_or(LikeError::ListingNotFound)?;
    if owner_id == user_id {
        return Err(LikeError::OwnListing);
    }

    let inserted = tx.execute(
        "insert or ignore into listing_likes (user_id, listing_id, created_at) values (?, ?, ?)",
        params![user_id, listing_id, now],
    )?;

    if inserted == 1 {
        tx.execute(
            "update listings set likes_count = likes_count + 1 where id = ?",
            params![listing_id],
        )?;
    }

    tx.commit()?;
    Ok(())
}

/// Removes the like and drops the counter, only if the like existed.
pub fn unlike_listing(
    conn: &mut Connection,
    user_id: i64,
    listing_id: i64,
) -> Result<(), LikeError> {
    let tx = conn.transaction()?;

    let deleted = tx.execute(
        "delete from listing_likes where user_id = ? and listing_id = ?",
        params![user_id, listing_id],
    )?;

    if deleted == 0 {
        return Err(LikeError::NotLiked);
    }

    tx.execute(
        "update listings set likes_count = max(likes_count - 1, 0) where id = ?",
        params![listing_id],
    )?;

    tx.commit()?;
    Ok(())
}

pub fn likes_count(conn: &Connection, listing_id: i64) -> Result<i64, LikeError> {
    let count = conn.query_row(
        "select likes_count from listings where id = ?",
        params![listing_id],
        |row| row.get(0),
    )?;
    Ok(count)
}
