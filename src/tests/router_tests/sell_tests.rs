// src/tests/router_tests/sell_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, make_db, post_form, sign_in};

#[test]
fn sell_form_requires_sign_in() {
    let db = make_db("sell_anon");

    let resp = handle(get("/sell", None), &db).unwrap();
    assert_eq!(resp.status(), 302);
    let loc = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(loc.starts_with("/login"), "location was: {loc}");
}

#[test]
fn publishing_a_listing_redirects_to_its_detail_page() {
    let db = make_db("sell_ok");
    let cookie = sign_in(&db, "seller@example.com");

    let form = "title=Clean+Corolla&make=Toyota&model=Corolla&year=2018\
                &mileage_km=90000&price=250000&city=Springfield\
                &phone=%2B15550100&whatsapp=%2B15550100\
                &description=One+owner&image_urls=https%3A%2F%2Fimg.example%2Fa.jpg";
    let resp = handle(post_form("/sell", Some(&cookie), form), &db).unwrap();

    assert_eq!(resp.status(), 302);
    let loc = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(loc.starts_with("/listings/"), "location was: {loc}");

    // The new detail page renders what was submitted.
    let resp = handle(get(&loc, None), &db).unwrap();
    let body = body_string(resp);
    assert!(body.contains("Clean Corolla"));
    assert!(body.contains("img.example"));
}

#[test]
fn invalid_fields_re_render_the_form_with_errors() {
    let db = make_db("sell_invalid");
    let cookie = sign_in(&db, "seller@example.com");

    // Missing make/model, zero price.
    let form = "title=Mystery+car&make=&model=&year=2018&price=0";
    let resp = handle(post_form("/sell", Some(&cookie), form), &db).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Make is required"));
    assert!(body.contains("Model is required"));
    assert!(body.contains("Price must be a positive number"));
    // Submitted values survive the round trip.
    assert!(body.contains("Mystery car"));
}

#[test]
fn login_sets_a_session_cookie_and_redirects() {
    let db = make_db("login_flow");

    let resp = handle(post_form("/login", None, "email=new%40user.com&next=%2Fsell"), &db).unwrap();
    assert_eq!(resp.status(), 302);

    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(cookie.starts_with("session="), "cookie was: {cookie}");

    let loc = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(loc, "/sell");
}
