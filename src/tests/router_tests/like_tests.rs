// src/tests/router_tests/like_tests.rs

use crate::db::likes::{self, LikeError};
use crate::router::{handle, now_unix};
use crate::tests::utils::{body_string, make_db, post, seed_listing, sign_in, user_id};

#[test]
fn like_requires_auth_with_distinguishable_error() {
    let db = make_db("like_anon");
    let listing_id = seed_listing(&db, "owner@example.com", "Toyota", 280_000);

    let resp = handle(post(&format!("/listings/{listing_id}/like"), None), &db).unwrap();

    assert_eq!(resp.status(), 401);
    let body = body_string(resp);
    assert!(body.contains("\"auth_required\""), "body was: {body}");
    assert!(body.contains("\"ok\":false"));
}

#[test]
fn like_unlike_round_trip_updates_count() {
    let db = make_db("like_round_trip");
    let listing_id = seed_listing(&db, "owner@example.com", "Toyota", 280_000);
    let cookie = sign_in(&db, "buyer@example.com");

    let resp = handle(
        post(&format!("/listings/{listing_id}/like"), Some(&cookie)),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("\"action\":\"liked\""), "body was: {body}");
    assert!(body.contains("\"likes_count\":1"));

    let resp = handle(
        post(&format!("/listings/{listing_id}/unlike"), Some(&cookie)),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("\"action\":\"unliked\""));
    assert!(body.contains("\"likes_count\":0"));
}

#[test]
fn double_like_does_not_double_count() {
    let db = make_db("like_idempotent");
    let listing_id = seed_listing(&db, "owner@example.com", "Toyota", 280_000);
    let cookie = sign_in(&db, "buyer@example.com");

    for _ in 0..2 {
        let resp = handle(
            post(&format!("/listings/{listing_id}/like"), Some(&cookie)),
            &db,
        )
        .unwrap();
        assert_eq!(resp.status(), 200);
    }

    let count = db
        .with_conn(|conn| Ok(likes::likes_count(conn, listing_id)))
        .unwrap()
        .unwrap();
    assert_eq!(count, 1, "second like must be a no-op");
}

#[test]
fn self_like_is_rejected_distinctly() {
    let db = make_db("like_self");
    let listing_id = seed_listing(&db, "owner@example.com", "Toyota", 280_000);

    // Directly at the persistence seam:
    let owner = user_id(&db, "owner@example.com");
    let err = db
        .with_conn(|conn| Ok(likes::like_listing(conn, owner, listing_id, now_unix())))
        .unwrap()
        .unwrap_err();
    assert_eq!(err, LikeError::OwnListing);

    // And over HTTP: 403 with the own_listing tag, not a generic failure.
    let cookie = sign_in(&db, "owner@example.com");
    let resp = handle(
        post(&format!("/listings/{listing_id}/like"), Some(&cookie)),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 403);
    let body = body_string(resp);
    assert!(body.contains("\"own_listing\""), "body was: {body}");
}

#[test]
fn unlike_without_prior_like_is_rejected() {
    let db = make_db("unlike_missing");
    let listing_id = seed_listing(&db, "owner@example.com", "Toyota", 280_000);
    let cookie = sign_in(&db, "buyer@example.com");

    let resp = handle(
        post(&format!("/listings/{listing_id}/unlike"), Some(&cookie)),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 409);
    assert!(body_string(resp).contains("\"not_liked\""));
}

#[test]
fn like_unknown_listing_is_not_found() {
    let db = make_db("like_missing_listing");
    let cookie = sign_in(&db, "buyer@example.com");

    let resp = handle(post("/listings/9999/like", Some(&cookie)), &db).unwrap();
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("\"not_found\""));
}
