//! End-to-end tests for the form-driven interface.

use postboard::PostId;
use reqwest::StatusCode;

mod common;

fn assert_redirect_home(res: &reqwest::Response) {
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers()["location"], "/");
}

#[tokio::test]
async fn test_create_update_delete_via_forms() {
    let server = common::start_server().await;
    let client = common::no_redirect_client();

    let res = client
        .post(server.url("/api/posts"))
        .form(&[("title", "Form post"), ("content", "Body"), ("author", "Writer")])
        .send()
        .await
        .unwrap();
    assert_redirect_home(&res);
    let created = server.store.get(PostId::new(4)).unwrap();
    assert_eq!(created.title.as_deref(), Some("Form post"));

    let res = client
        .post(server.url("/api/posts/4"))
        .form(&[("title", "Edited"), ("content", ""), ("author", "Editor")])
        .send()
        .await
        .unwrap();
    assert_redirect_home(&res);
    let edited = server.store.get(PostId::new(4)).unwrap();
    assert_eq!(edited.title.as_deref(), Some("Edited"));
    assert_eq!(edited.content.as_deref(), Some(""));
    assert_eq!(edited.author.as_deref(), Some("Editor"));
    assert_eq!(edited.date, created.date);

    let res = client
        .get(server.url("/api/posts/delete/4"))
        .send()
        .await
        .unwrap();
    assert_redirect_home(&res);
    assert!(server.store.get(PostId::new(4)).is_err());
}

#[tokio::test]
async fn test_missing_ids_still_redirect() {
    let server = common::start_server().await;
    let client = common::no_redirect_client();

    let res = client
        .post(server.url("/api/posts/99"))
        .form(&[("title", "a"), ("content", "b"), ("author", "c")])
        .send()
        .await
        .unwrap();
    assert_redirect_home(&res);

    let res = client
        .get(server.url("/api/posts/delete/not-a-number"))
        .send()
        .await
        .unwrap();
    assert_redirect_home(&res);

    assert_eq!(server.store.len(), 3);
}

#[tokio::test]
async fn test_pages_render() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res
        .headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let html = res.text().await.unwrap();
    assert!(html.contains("Sustainable Living"));

    let html = client
        .get(server.url("/new"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("Create Post"));

    let res = client.get(server.url("/edit/12345")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("Update Post"));
}

#[tokio::test]
async fn test_following_redirect_shows_new_post() {
    let server = common::start_server().await;

    let res = common::client()
        .post(server.url("/api/posts"))
        .form(&[("title", "Visible after redirect"), ("content", "c"), ("author", "a")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("Visible after redirect"));
}
