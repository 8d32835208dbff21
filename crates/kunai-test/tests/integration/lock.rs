#![allow(clippy::unused_async)]
//! Integration tests for LOCK and UNLOCK.
//!
//! The server keeps no lock state; these verify the success shape clients
//! expect before a PUT.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn lock_echoes_depth_and_timeout() {
    let service = create_test_service();

    TestRequest::lock("/doc.txt")
        .depth("0")
        .timeout("Second-3600")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("Content-Type", "text/xml; charset=\"utf-8\"")
        .assert_valid_xml()
        .assert_body_contains("<D:depth>0</D:depth>")
        .assert_body_contains("<D:timeout>Second-3600</D:timeout>")
        .assert_body_contains("<D:locktoken><D:href>opaquelocktoken:</D:href></D:locktoken>");
}

#[test_log::test(tokio::test)]
async fn lock_without_a_timeout_sends_an_empty_element() {
    let service = create_test_service();

    TestRequest::lock("/doc.txt")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("<D:timeout/>")
        .assert_body_contains("<D:depth>0</D:depth>");
}

/// The Depth value is echoed verbatim, infinity included.
#[test_log::test(tokio::test)]
async fn lock_echoes_infinity_depth() {
    let service = create_test_service();

    TestRequest::lock("/doc.txt")
        .depth("infinity")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("<D:depth>infinity</D:depth>");
}

/// No resource needs to exist for a lock to succeed; clients lock paths
/// they are about to create.
#[test_log::test(tokio::test)]
async fn lock_succeeds_on_a_missing_path() {
    let service = create_test_service();

    TestRequest::lock("/not-yet.txt")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("<D:lockdiscovery>");
}

#[test_log::test(tokio::test)]
async fn lock_scope_and_owner_stay_empty() {
    let service = create_test_service();

    TestRequest::lock("/doc.txt")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("<D:lockscope/>")
        .assert_body_contains("<D:locktype/>")
        .assert_body_contains("<D:owner/>");
}

#[test_log::test(tokio::test)]
async fn unlock_always_succeeds() {
    let service = create_test_service();

    TestRequest::unlock("/doc.txt")
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT)
        .assert_body_empty();
}

/// Locks do not block anything; a PUT after a LOCK held by nobody works.
#[test_log::test(tokio::test)]
async fn lock_does_not_guard_writes() {
    let service = create_test_service();

    TestRequest::lock("/shared.txt").send(&service).await.assert_status(StatusCode::OK);

    TestRequest::put("/shared.txt")
        .body("anyone can write")
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    TestRequest::unlock("/shared.txt")
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);
}
