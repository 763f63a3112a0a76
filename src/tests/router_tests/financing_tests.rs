// src/tests/router_tests/financing_tests.rs
//
// The calculator arithmetic has its own unit tests next to the code; these
// cover the htmx fragment endpoint: parsing, defaults, and which of the two
// warnings renders.

use crate::router::handle;
use crate::tests::utils::{body_string, get, make_db, seed_listing};

#[test]
fn fragment_renders_a_quote_for_valid_inputs() {
    let db = make_db("financing_valid");
    let listing_id = seed_listing(&db, "owner@example.com", "Toyota", 280_000);

    let resp = handle(
        get(
            &format!(
                "/listings/{listing_id}/financing?down_payment=84000&term_months=48&annual_rate=12.5"
            ),
            None,
        ),
        &db,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Monthly payment"), "body was: {body}");
    assert!(!body.contains("financing-warning"));
}

#[test]
fn below_minimum_down_payment_gets_the_minimum_warning() {
    let db = make_db("financing_below_min");
    let listing_id = seed_listing(&db, "owner@example.com", "Toyota", 280_000);

    // Floor is round(280000 * 0.30) = 84000; one unit under must warn.
    let resp = handle(
        get(
            &format!("/listings/{listing_id}/financing?down_payment=83999"),
            None,
        ),
        &db,
    )
    .unwrap();

    let body = body_string(resp);
    assert!(body.contains("below the 30% minimum"), "body was: {body}");
    assert!(!body.contains("exceeds the vehicle price"));
}

#[test]
fn down_payment_over_price_gets_the_exceeds_warning() {
    let db = make_db("financing_exceeds");
    let listing_id = seed_listing(&db, "owner@example.com", "Toyota", 280_000);

    let resp = handle(
        get(
            &format!("/listings/{listing_id}/financing?down_payment=280001"),
            None,
        ),
        &db,
    )
    .unwrap();

    let body = body_string(resp);
    assert!(body.contains("exceeds the vehicle price"), "body was: {body}");
    assert!(!body.contains("below the 30% minimum"));
}

#[test]
fn garbage_inputs_fall_back_to_defaults() {
    let db = make_db("financing_defaults");
    let listing_id = seed_listing(&db, "owner@example.com", "Toyota", 280_000);

    // Unparsable down payment and a disallowed term: defaults apply, so the
    // quote is valid (default down payment is exactly the minimum).
    let resp = handle(
        get(
            &format!("/listings/{listing_id}/financing?down_payment=lots&term_months=13"),
            None,
        ),
        &db,
    )
    .unwrap();

    let body = body_string(resp);
    assert!(body.contains("Monthly payment"), "body was: {body}");
}
