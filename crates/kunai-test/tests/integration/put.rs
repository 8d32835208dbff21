#![allow(clippy::unused_async)]
//! Integration tests for PUT.
//!
//! Tests:
//! - File creation and replacement
//! - Parent validation
//! - Stored bytes and etags surfacing on GET

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn put_stores_a_file_at_the_top_level() {
    let service = create_test_service();

    TestRequest::put("/hello.txt")
        .body("hello world")
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    TestRequest::get("/hello.txt")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "text/plain")
        .assert_header("Content-Length", "11")
        .assert_body_contains("hello world");
}

#[test_log::test(tokio::test)]
async fn put_replaces_an_existing_file() {
    let service = create_test_service();

    TestRequest::put("/note.txt")
        .body("first")
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    TestRequest::put("/note.txt")
        .body("second version")
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    TestRequest::get("/note.txt")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Length", "14")
        .assert_body_contains("second version")
        .assert_body_not_contains("first");
}

#[test_log::test(tokio::test)]
async fn put_into_a_collection() {
    let service = create_test_service();

    TestRequest::mkcol("/docs").send(&service).await.assert_status(StatusCode::CREATED);
    TestRequest::put("/docs/readme.md")
        .body("# hi")
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    TestRequest::get("/docs/readme.md")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("# hi");
}

#[test_log::test(tokio::test)]
async fn put_without_a_parent_is_a_conflict() {
    let service = create_test_service();

    TestRequest::put("/nodir/file.txt")
        .body("x")
        .send(&service)
        .await
        .assert_status(StatusCode::CONFLICT);
}

/// Unlike MKCOL, PUT insists the parent is a collection.
#[test_log::test(tokio::test)]
async fn put_under_a_file_parent_is_a_conflict() {
    let service = create_test_service();

    TestRequest::put("/plain.txt")
        .body("p")
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    TestRequest::put("/plain.txt/child.txt")
        .body("c")
        .send(&service)
        .await
        .assert_status(StatusCode::CONFLICT);
}

/// ## Summary
/// A put over a collection replaces the whole subtree with the file.
#[test_log::test(tokio::test)]
async fn put_replaces_a_collection_and_its_children() {
    let service = create_test_service();

    TestRequest::mkcol("/stuff").send(&service).await.assert_status(StatusCode::CREATED);
    TestRequest::put("/stuff/inner.txt")
        .body("inner")
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    TestRequest::put("/stuff")
        .body("now a file")
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    TestRequest::get("/stuff")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("now a file");

    TestRequest::get("/stuff/inner.txt")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn put_yields_a_quoted_etag_on_get() {
    let service = create_test_service();

    TestRequest::put("/tagged.txt")
        .body("content")
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    let response = TestRequest::get("/tagged.txt")
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    let etag = response.get_etag().expect("ETag header should be present");
    assert!(etag.starts_with('"') && etag.ends_with('"'), "unquoted etag: {etag}");
}

/// Identical bodies hash to the same etag; different bodies do not.
#[test_log::test(tokio::test)]
async fn etag_tracks_the_body() {
    let service = create_test_service();

    for (path, body) in [("/a.txt", "same"), ("/b.txt", "same"), ("/c.txt", "other")] {
        TestRequest::put(path)
            .body(body)
            .send(&service)
            .await
            .assert_status(StatusCode::CREATED);
    }

    let a = TestRequest::get("/a.txt").send(&service).await;
    let b = TestRequest::get("/b.txt").send(&service).await;
    let c = TestRequest::get("/c.txt").send(&service).await;

    assert_eq!(a.get_etag(), b.get_etag());
    assert_ne!(a.get_etag(), c.get_etag());
}

#[test_log::test(tokio::test)]
async fn put_with_an_empty_body_stores_an_empty_file() {
    let service = create_test_service();

    TestRequest::put("/empty.bin")
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    TestRequest::get("/empty.bin")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Length", "0");
}
