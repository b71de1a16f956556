//! End-to-end flows over a real listener

mod common;

use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn anxiety_assessment_scores_severe() {
    let (_state, addr) = common::create_test_server().await;
    let client = reqwest::Client::new();

    let session: Value = client
        .post(common::api_url(addr, "/sessions"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let session_id = session["id"].as_str().unwrap().to_string();

    let responses: serde_json::Map<String, Value> = (1..=7)
        .map(|i| (i.to_string(), json!("Nearly every day")))
        .collect();

    let response = client
        .post(common::api_url(addr, "/assessments"))
        .json(&json!({"sessionId": session_id, "type": "anxiety", "responses": responses}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["score"], 21);
    assert_eq!(created["severity"], "Severe");

    let listed: Vec<Value> = client
        .get(common::api_url(addr, &format!("/assessments/{session_id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], created["id"]);

    let summary: Value = client
        .get(common::api_url(addr, &format!("/sessions/{session_id}/summary")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(summary["assessments"][0]["latestSeverity"], "Severe");
}

#[tokio::test]
async fn forum_thread_flow() {
    let (_state, addr) = common::create_test_server().await;
    let client = reqwest::Client::new();

    let post: Value = client
        .post(common::api_url(addr, "/forum/posts"))
        .json(&json!({
            "sessionId": "s1",
            "title": "Midterms",
            "content": "Anyone else struggling to sleep?",
            "category": "sleep"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let post_id = post["id"].as_str().unwrap();

    for content in ["Same here", "Try the sleep hygiene guide"] {
        let status = client
            .post(common::api_url(addr, "/forum/replies"))
            .json(&json!({"postId": post_id, "sessionId": "s2", "content": content}))
            .send()
            .await
            .unwrap()
            .status();
        assert_eq!(status, StatusCode::CREATED);
    }

    let status = client
        .post(common::api_url(addr, &format!("/forum/posts/{post_id}/like")))
        .send()
        .await
        .unwrap()
        .status();
    assert_eq!(status, StatusCode::OK);

    let fetched: Value = client
        .get(common::api_url(addr, &format!("/forum/posts/{post_id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["repliesCount"], 2);
    assert_eq!(fetched["likesCount"], 1);

    let by_category: Vec<Value> = client
        .get(common::api_url(addr, "/forum/posts"))
        .query(&[("category", "sleep")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(by_category.len(), 1);
}

#[tokio::test]
async fn errors_use_json_body() {
    let (_state, addr) = common::create_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(common::api_url(addr, "/mood-entries"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].is_string());

    let response = client
        .get(common::api_url(addr, "/resources/unknown"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "NOT_FOUND");
}
