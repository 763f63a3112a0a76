use crate::auth::viewer::{can_edit_listing, counts_as_view, resolve_viewer, session_token};
use crate::db::{likes, likes::LikeError, listings, sessions, users, Database};
use crate::domain::financing::{
    clamp_rate, is_allowed_term, min_down_payment, FinancingQuote, DEFAULT_ANNUAL_RATE,
    DEFAULT_TERM_MONTHS,
};
use crate::domain::hotness::default_hot_policy;
use crate::domain::like_state::LikeControl;
use crate::domain::listing::NewListing;
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, json_response, redirect, redirect_with_cookie};
use crate::templates::pages::{
    home_page, listing_detail_page, login_page, sell_page, ListingDetailVm, SellFormPrefill,
};
use astra::{Body, Request, ResponseBuilder};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

const SIMILAR_LISTINGS_COUNT: usize = 4;
const HOME_PAGE_LISTINGS: usize = 24;

pub fn handle(mut req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) => get_home(&req, db),

        ("GET", ["static", file]) => get_static(file),

        ("GET", ["login"]) => {
            let query = parse_query(&req);
            html_response(login_page(None, query.get("next").map(String::as_str)))
        }
        ("POST", ["login"]) => post_login(&mut req, db),
        ("POST", ["logout"]) => post_logout(&req, db),

        ("GET", ["sell"]) => get_sell(&req, db),
        ("POST", ["sell"]) => post_sell(&mut req, db),

        ("GET", ["listings", id]) => get_listing_detail(&req, db, parse_id(id)?),
        ("GET", ["listings", id, "financing"]) => get_financing_fragment(&req, db, parse_id(id)?),
        ("POST", ["listings", id, "like"]) => post_like(&req, db, parse_id(id)?),
        ("POST", ["listings", id, "unlike"]) => post_unlike(&req, db, parse_id(id)?),
        ("POST", ["listings", id, "delete"]) => post_delete(&req, db, parse_id(id)?),

        _ => Err(ServerError::NotFound),
    }
}

// ---------------------------------------------------------------------------
// Pages

fn get_home(req: &Request, db: &Database) -> ResultResp {
    let viewer = resolve_viewer(db, req, now_unix())?;
    let listings = listings::recent_listings(db, HOME_PAGE_LISTINGS)?;
    html_response(home_page(&listings, viewer.is_signed_in()))
}

fn get_listing_detail(req: &Request, db: &Database, listing_id: i64) -> ResultResp {
    let viewer = resolve_viewer(db, req, now_unix())?;

    let mut detail =
        listings::find_by_id_with_user(db, listing_id)?.ok_or(ServerError::NotFound)?;

    // View accounting: once per load, never for the owner, and never
    // allowed to break the page. A failed increment is only logged.
    if counts_as_view(&viewer, &detail.listing) {
        match listings::increment_views(db, listing_id) {
            Ok(()) => detail.listing.views_count += 1,
            Err(e) => warn!("view increment failed for listing {listing_id}: {e}"),
        }
    }

    let server_has_liked = match viewer.user_id() {
        Some(user_id) => db
            .with_conn(|conn| Ok(likes::has_liked(conn, user_id, listing_id)))?
            .map_err(|e| ServerError::DbError(e.to_string()))?,
        None => false,
    };

    let quote = financing_quote_from_params(&parse_query(req), detail.listing.price);
    let similar = listings::find_similar(db, listing_id, SIMILAR_LISTINGS_COUNT)?;
    let own_listing = viewer.user_id() == Some(detail.listing.user_id);

    let vm = ListingDetailVm {
        hot: default_hot_policy(&detail.listing),
        like_control: LikeControl::from_server(server_has_liked),
        can_delete: can_edit_listing(&viewer, &detail.listing),
        own_listing,
        signed_in: viewer.is_signed_in(),
        quote,
        similar: &similar,
        detail: &detail,
    };

    html_response(listing_detail_page(&vm))
}

fn get_financing_fragment(req: &Request, db: &Database, listing_id: i64) -> ResultResp {
    let detail = listings::find_by_id_with_user(db, listing_id)?.ok_or(ServerError::NotFound)?;
    let quote = financing_quote_from_params(&parse_query(req), detail.listing.price);

    html_response(crate::templates::components::financing_quote_fragment(
        &quote,
    ))
}

/// Calculator inputs arrive as free-text query params; anything missing or
/// unparsable falls back to a sane default, and the rate is clamped here
/// so the pure calculator can assume its precondition.
fn financing_quote_from_params(params: &HashMap<String, String>, price: i64) -> FinancingQuote {
    let price = price as f64;

    let down_payment = params
        .get("down_payment")
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or_else(|| min_down_payment(price));

    let term_months = params
        .get("term_months")
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|t| is_allowed_term(*t))
        .unwrap_or(DEFAULT_TERM_MONTHS);

    let annual_rate = clamp_rate(
        params
            .get("annual_rate")
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(DEFAULT_ANNUAL_RATE),
    );

    FinancingQuote::compute(price, down_payment, term_months, annual_rate)
}

// ---------------------------------------------------------------------------
// Like / unlike actions (JSON, consumed by static/like.js)

#[derive(Serialize)]
struct LikeOutcome {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    likes_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl LikeOutcome {
    fn success(action: &'static str, likes_count: i64) -> Self {
        Self {
            ok: true,
            action: Some(action),
            likes_count: Some(likes_count),
            error: None,
            message: None,
        }
    }

    fn failure(error: &'static str, message: String) -> Self {
        Self {
            ok: false,
            action: None,
            likes_count: None,
            error: Some(error),
            message: Some(message),
        }
    }
}

/// Maps a mutation rejection to a status and a machine-readable error tag.
/// `auth_required` is deliberately distinct so the client can prompt for
/// sign-in instead of showing a failure toast.
fn like_error_response(err: LikeError) -> ResultResp {
    let (status, tag) = match &err {
        LikeError::ListingNotFound => (404, "not_found"),
        LikeError::OwnListing => (403, "own_listing"),
        LikeError::NotLiked => (409, "not_liked"),
        LikeError::Db(_) => (500, "mutation_failed"),
    };
    json_response(status, &LikeOutcome::failure(tag, err.to_string()))
}

fn post_like(req: &Request, db: &Database, listing_id: i64) -> ResultResp {
    let viewer = resolve_viewer(db, req, now_unix())?;
    let Some(user_id) = viewer.user_id() else {
        return json_response(
            401,
            &LikeOutcome::failure("auth_required", "Sign in to save cars you like".into()),
        );
    };

    let result = db.with_conn(|conn| Ok(likes::like_listing(conn, user_id, listing_id, now_unix())))?;

    match result {
        Ok(()) => {
            let count = db
                .with_conn(|conn| Ok(likes::likes_count(conn, listing_id)))?
                .map_err(|e| ServerError::DbError(e.to_string()))?;
            json_response(200, &LikeOutcome::success("liked", count))
        }
        Err(err) => like_error_response(err),
    }
}

fn post_unlike(req: &Request, db: &Database, listing_id: i64) -> ResultResp {
    let viewer = resolve_viewer(db, req, now_unix())?;
    let Some(user_id) = viewer.user_id() else {
        return json_response(
            401,
            &LikeOutcome::failure("auth_required", "Sign in to manage saved cars".into()),
        );
    };

    let result = db.with_conn(|conn| Ok(likes::unlike_listing(conn, user_id, listing_id)))?;

    match result {
        Ok(()) => {
            let count = db
                .with_conn(|conn| Ok(likes::likes_count(conn, listing_id)))?
                .map_err(|e| ServerError::DbError(e.to_string()))?;
            json_response(200, &LikeOutcome::success("unliked", count))
        }
        Err(err) => like_error_response(err),
    }
}

// ---------------------------------------------------------------------------
// Sell form

fn get_sell(req: &Request, db: &Database) -> ResultResp {
    let viewer = resolve_viewer(db, req, now_unix())?;
    if !viewer.is_signed_in() {
        return redirect("/login?next=%2Fsell");
    }
    html_response(sell_page(&[], &SellFormPrefill::default()))
}

fn post_sell(req: &mut Request, db: &Database) -> ResultResp {
    let viewer = resolve_viewer(db, req, now_unix())?;
    let Some(user) = viewer.user() else {
        return redirect("/login?next=%2Fsell");
    };
    let user_id = user.id;

    let form = read_form_body(req)?;
    let prefill = prefill_from_form(&form);

    let mut errors = Vec::new();
    let new = new_listing_from_form(&form, &mut errors);

    match new {
        Some(new) if errors.is_empty() => {
            let listing_id = listings::create_listing(db, user_id, &new)?;
            redirect(&format!("/listings/{listing_id}"))
        }
        _ => html_response(sell_page(&errors, &prefill)),
    }
}

fn new_listing_from_form(
    form: &HashMap<String, String>,
    errors: &mut Vec<String>,
) -> Option<NewListing> {
    let field = |name: &str| form.get(name).map(|v| v.trim().to_string()).unwrap_or_default();

    let title = field("title");
    if title.is_empty() {
        errors.push("Title is required".into());
    }
    let make = field("make");
    if make.is_empty() {
        errors.push("Make is required".into());
    }
    let model = field("model");
    if model.is_empty() {
        errors.push("Model is required".into());
    }

    let year = field("year").parse::<i64>().unwrap_or(0);
    if !(1900..=2100).contains(&year) {
        errors.push("Year must be between 1900 and 2100".into());
    }

    let mileage_km = field("mileage_km").parse::<i64>().unwrap_or(0);
    if mileage_km < 0 {
        errors.push("Mileage can't be negative".into());
    }

    let price = field("price").parse::<i64>().unwrap_or(0);
    if price <= 0 {
        errors.push("Price must be a positive number".into());
    }

    let image_urls: Vec<String> = field("image_urls")
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    if !errors.is_empty() {
        return None;
    }

    Some(NewListing {
        title,
        make,
        model,
        year,
        mileage_km,
        price,
        description: field("description"),
        city: field("city"),
        phone: field("phone"),
        whatsapp: field("whatsapp"),
        image_urls,
    })
}

fn prefill_from_form(form: &HashMap<String, String>) -> SellFormPrefill {
    let field = |name: &str| form.get(name).cloned().unwrap_or_default();
    SellFormPrefill {
        title: field("title"),
        make: field("make"),
        model: field("model"),
        year: field("year"),
        mileage_km: field("mileage_km"),
        price: field("price"),
        city: field("city"),
        phone: field("phone"),
        whatsapp: field("whatsapp"),
        description: field("description"),
        image_urls: field("image_urls"),
    }
}

fn post_delete(req: &Request, db: &Database, listing_id: i64) -> ResultResp {
    let viewer = resolve_viewer(db, req, now_unix())?;

    let detail = listings::find_by_id_with_user(db, listing_id)?.ok_or(ServerError::NotFound)?;
    if !can_edit_listing(&viewer, &detail.listing) {
        return Err(ServerError::Forbidden(
            "only the seller can delete a listing".into(),
        ));
    }

    listings::delete_listing(db, listing_id)?;
    redirect("/")
}

// ---------------------------------------------------------------------------
// Auth

fn post_login(req: &mut Request, db: &Database) -> ResultResp {
    let form = read_form_body(req)?;
    let next = form
        .get("next")
        .filter(|n| n.starts_with('/'))
        .cloned()
        .unwrap_or_else(|| "/".into());

    let email = form.get("email").map(|e| e.trim().to_lowercase()).unwrap_or_default();
    if email.is_empty() || !email.contains('@') {
        return html_response(login_page(Some("Enter a valid email address"), Some(&next)));
    }

    let now = now_unix();
    let token = db.with_conn(|conn| {
        let user = users::find_or_create_by_email(conn, &email, now)?;
        sessions::create_session(conn, user.id, now)
    })?;

    redirect_with_cookie(
        &next,
        &format!("session={token}; Path=/; HttpOnly; SameSite=Lax"),
    )
}

fn post_logout(req: &Request, db: &Database) -> ResultResp {
    if let Some(token) = session_token(req) {
        db.with_conn(|conn| sessions::revoke_session(conn, &token, now_unix()))?;
    }
    redirect_with_cookie("/", "session=; Path=/; HttpOnly; Max-Age=0")
}

// ---------------------------------------------------------------------------
// Static assets

const MAIN_CSS: &str = include_str!("../static/main.css");
const LIKE_JS: &str = include_str!("../static/like.js");

fn get_static(file: &str) -> ResultResp {
    let (content, content_type) = match file {
        "main.css" => (MAIN_CSS, mime::TEXT_CSS_UTF_8.as_ref()),
        "like.js" => (LIKE_JS, mime::APPLICATION_JAVASCRIPT_UTF_8.as_ref()),
        _ => return Err(ServerError::NotFound),
    };

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(content.to_string()))
        .map_err(|_| ServerError::InternalError)
}

// ---------------------------------------------------------------------------
// Small request helpers

fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse::<i64>()
        .map_err(|_| ServerError::BadRequest(format!("invalid listing id: {raw}")))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => HashMap::new(),
    }
}

fn read_form_body(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable request body: {e}")))?;

    Ok(url::form_urlencoded::parse(&buf).into_owned().collect())
}

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
