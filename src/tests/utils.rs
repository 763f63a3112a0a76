use crate::db::connection::{init_db, Database};
use crate::db::{listings, sessions, users};
use crate::domain::listing::NewListing;
use crate::router::now_unix;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh throwaway DB using the production schema.
pub fn make_db(tag: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "motormart_test_{tag}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path);
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

/// Creates the user on first use and returns a session cookie value.
pub fn sign_in(db: &Database, email: &str) -> String {
    let now = now_unix();
    let token = db
        .with_conn(|conn| {
            let user = users::find_or_create_by_email(conn, email, now)?;
            sessions::create_session(conn, user.id, now)
        })
        .expect("sign in failed");
    format!("session={token}")
}

pub fn user_id(db: &Database, email: &str) -> i64 {
    db.with_conn(|conn| Ok(users::find_or_create_by_email(conn, email, now_unix())?.id))
        .expect("user lookup failed")
}

pub fn seed_listing(db: &Database, owner_email: &str, make: &str, price: i64) -> i64 {
    let owner = user_id(db, owner_email);
    listings::create_listing(
        db,
        owner,
        &NewListing {
            title: format!("{make} for sale"),
            make: make.to_string(),
            model: "Base".to_string(),
            year: 2019,
            mileage_km: 60_000,
            price,
            description: "Well kept".to_string(),
            city: "Springfield".to_string(),
            phone: "+15550100".to_string(),
            whatsapp: "+15550100".to_string(),
            image_urls: vec!["https://img.example/1.jpg".to_string()],
        },
    )
    .expect("seed listing failed")
}

pub fn request(method: Method, path: &str, cookie: Option<&str>, body: Body) -> Request {
    let mut req = Request::new(body);
    *req.method_mut() = method;
    *req.uri_mut() = path.parse().unwrap();
    if let Some(cookie) = cookie {
        req.headers_mut()
            .insert("Cookie", cookie.parse().unwrap());
    }
    req
}

pub fn get(path: &str, cookie: Option<&str>) -> Request {
    request(Method::GET, path, cookie, Body::empty())
}

pub fn post(path: &str, cookie: Option<&str>) -> Request {
    request(Method::POST, path, cookie, Body::empty())
}

pub fn post_form(path: &str, cookie: Option<&str>, form: &str) -> Request {
    let mut req = request(Method::POST, path, cookie, Body::from(form.to_string()));
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

pub fn body_string(mut resp: Response) -> String {
    let mut buf = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .expect("response body read failed");
    String::from_utf8(buf).expect("response body was not utf-8")
}
