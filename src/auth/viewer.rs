// src/auth/viewer.rs
use crate::db::connection::Database;
use crate::db::{sessions, users};
use crate::domain::listing::Listing;
use crate::errors::ServerError;
use astra::Request;

/// Who is looking at the page. Resolved once per request from the session
/// cookie; anonymous is a normal state, not an error.
#[derive(Debug, Clone)]
pub enum Viewer {
    Anonymous,
    User(users::User),
}

impl Viewer {
    pub fn user(&self) -> Option<&users::User> {
        match self {
            Viewer::Anonymous => None,
            Viewer::User(u) => Some(u),
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user().map(|u| u.id)
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Viewer::User(_))
    }
}

pub const SESSION_COOKIE: &str = "session";

/// Pulls the raw session token out of the Cookie header, if any.
pub fn session_token(req: &Request) -> Option<String> {
    let cookies = req.headers().get("Cookie")?.to_str().ok()?;

    for pair in cookies.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        if let (Some(name), Some(value)) = (parts.next(), parts.next()) {
            if name == SESSION_COOKIE {
                return Some(value.to_string());
            }
        }
    }
    None
}

pub fn resolve_viewer(db: &Database, req: &Request, now: i64) -> Result<Viewer, ServerError> {
    let Some(token) = session_token(req) else {
        return Ok(Viewer::Anonymous);
    };

    db.with_conn(|conn| {
        let Some(user_id) = sessions::load_user_id_from_session(conn, &token, now)? else {
            return Ok(Viewer::Anonymous);
        };
        match users::find_by_id(conn, user_id)? {
            Some(user) => Ok(Viewer::User(user)),
            None => Ok(Viewer::Anonymous),
        }
    })
}

/// Only the seller may edit or delete a listing.
pub fn can_edit_listing(viewer: &Viewer, listing: &Listing) -> bool {
    viewer.user_id() == Some(listing.user_id)
}

/// Whether this page load counts as a view. Owner loads never do;
/// anonymous and every other signed-in viewer always do.
pub fn counts_as_view(viewer: &Viewer, listing: &Listing) -> bool {
    match viewer.user_id() {
        Some(id) => id != listing.user_id,
        None => true,
    }
}
