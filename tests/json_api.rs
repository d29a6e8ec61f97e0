//! End-to-end tests for the JSON REST API.

use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

fn ids(posts: &Value) -> Vec<u64> {
    posts
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_crud_scenario() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client
        .post(server.url("/posts"))
        .json(&json!({ "title": "T" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["id"], 4);
    assert_eq!(created["title"], "T");

    let res = client
        .patch(server.url("/posts/2"))
        .json(&json!({ "author": "New" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["author"], "New");
    assert_eq!(
        updated["title"],
        "The Impact of Artificial Intelligence on Modern Businesses"
    );

    let res = client.delete(server.url("/posts/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Post deleted");

    let posts: Value = client
        .get(server.url("/posts"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&posts), vec![2, 3, 4]);

    let res = client.get(server.url("/posts/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Post not found" }));
}

#[tokio::test]
async fn test_ids_keep_increasing_after_delete() {
    let server = common::start_server().await;
    let client = common::client();

    let mut last = 3;
    for round in 0..3 {
        let created: Value = client
            .post(server.url("/posts"))
            .json(&json!({ "title": format!("round {round}") }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let id = created["id"].as_u64().unwrap();
        assert!(id > last);
        last = id;

        let res = client
            .delete(server.url(&format!("/posts/{id}")))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    assert_eq!(server.store.len(), 3);
}

#[tokio::test]
async fn test_malformed_ids_are_not_found() {
    let server = common::start_server().await;
    let client = common::client();

    for path in ["/posts/abc", "/posts/%20", "/posts/0"] {
        let res = client.get(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "path {path}");

        let res = client
            .patch(server.url(path))
            .json(&json!({ "title": "x" }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "path {path}");

        let res = client.delete(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "path {path}");
    }
    assert_eq!(server.store.len(), 3);
}

#[tokio::test]
async fn test_empty_patch_leaves_post_unchanged() {
    let server = common::start_server().await;
    let client = common::client();

    let before: Value = client
        .get(server.url("/posts/3"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let after: Value = client
        .patch(server.url("/posts/3"))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(before, after);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = common::start_server().await;
    let res = common::client()
        .get(server.url("/posts"))
        .send()
        .await
        .unwrap();
    assert!(res.headers().contains_key("x-request-id"));
}
