// src/tests/router_tests/listing_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_db, post, seed_listing, sign_in};

fn views_count(db: &crate::db::Database, listing_id: i64) -> i64 {
    db.with_conn(|conn| {
        conn.query_row(
            "select views_count from listings where id = ?",
            [listing_id],
            |row| row.get(0),
        )
        .map_err(|e| ServerError::DbError(e.to_string()))
    })
    .unwrap()
}

#[test]
fn detail_page_renders_for_anonymous_viewers() {
    let db = make_db("detail_anon");
    let listing_id = seed_listing(&db, "owner@example.com", "Honda", 150_000);

    let resp = handle(get(&format!("/listings/{listing_id}"), None), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Honda for sale"));
    assert!(body.contains("Finance this car"));
    assert!(body.contains("wa.me"), "WhatsApp contact link missing");
    assert!(body.contains("tel:"), "phone contact link missing");
}

#[test]
fn anonymous_and_other_viewers_count_exactly_once_per_load() {
    let db = make_db("views_counted");
    let listing_id = seed_listing(&db, "owner@example.com", "Honda", 150_000);
    assert_eq!(views_count(&db, listing_id), 0);

    // Anonymous load counts.
    handle(get(&format!("/listings/{listing_id}"), None), &db).unwrap();
    assert_eq!(views_count(&db, listing_id), 1);

    // A different signed-in viewer counts, once per load.
    let buyer = sign_in(&db, "buyer@example.com");
    handle(get(&format!("/listings/{listing_id}"), Some(&buyer)), &db).unwrap();
    handle(get(&format!("/listings/{listing_id}"), Some(&buyer)), &db).unwrap();
    assert_eq!(views_count(&db, listing_id), 3);
}

#[test]
fn owner_views_are_never_counted() {
    let db = make_db("views_owner");
    let listing_id = seed_listing(&db, "owner@example.com", "Honda", 150_000);
    let owner = sign_in(&db, "owner@example.com");

    let resp = handle(get(&format!("/listings/{listing_id}"), Some(&owner)), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(views_count(&db, listing_id), 0);
}

#[test]
fn missing_listing_is_not_found() {
    let db = make_db("detail_missing");
    let err = handle(get("/listings/424242", None), &db).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn similar_listings_share_the_make_and_exclude_self() {
    let db = make_db("similar");
    let listing_id = seed_listing(&db, "owner@example.com", "Honda", 150_000);
    seed_listing(&db, "owner@example.com", "Honda", 165_000);
    seed_listing(&db, "owner@example.com", "Mazda", 150_000);

    let resp = handle(get(&format!("/listings/{listing_id}"), None), &db).unwrap();
    let body = body_string(resp);
    assert!(body.contains("Similar cars"));
    // Only the other Honda qualifies; a Mazda card would also say "Mazda".
    assert!(!body.contains("Mazda for sale"));
}

#[test]
fn only_the_owner_can_delete() {
    let db = make_db("delete_forbidden");
    let listing_id = seed_listing(&db, "owner@example.com", "Honda", 150_000);
    let stranger = sign_in(&db, "stranger@example.com");

    let err = handle(
        post(&format!("/listings/{listing_id}/delete"), Some(&stranger)),
        &db,
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::Forbidden(_)));

    let owner = sign_in(&db, "owner@example.com");
    let resp = handle(
        post(&format!("/listings/{listing_id}/delete"), Some(&owner)),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);

    let err = handle(get(&format!("/listings/{listing_id}"), None), &db).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
