// tests/api_tests.rs

use std::sync::Arc;

use toeic_mate::{config::Config, content::Content, routes, state::AppState, store::SessionStore};

const SESSION_HEADER: &str = "x-session-id";

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_app() -> String {
    let content = Arc::new(Content::builtin());

    let config = Config {
        port: 0,
        rust_log: "error".to_string(),
    };

    let state = AppState {
        sessions: SessionStore::new(content.clone()),
        content,
        config,
    };

    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

#[tokio::test]
async fn health_check_404() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn submit_score_works_and_computes_total() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/scores", address))
        .header(SESSION_HEADER, "submit-works")
        .json(&serde_json::json!({
            "date": "2025-01-15",
            "category": "practice",
            "listening": 405,
            "reading": 380
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 201);
    let record: serde_json::Value = response.json().await.unwrap();
    assert_eq!(record["total"], 785);
    assert_eq!(record["category"], "practice");
}

#[tokio::test]
async fn submit_score_fails_validation_and_leaves_log_unchanged() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let session = "validation-check";

    // Negative, over-range and off-step scores must all be rejected
    for (lc, rc) in [(-5, 300), (500, 300), (300, 497)] {
        let response = client
            .post(format!("{}/api/scores", address))
            .header(SESSION_HEADER, session)
            .json(&serde_json::json!({
                "date": "2025-01-15",
                "category": "practice",
                "listening": lc,
                "reading": rc
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status().as_u16(), 400, "LC {} / RC {}", lc, rc);
    }

    // Only the seed record remains
    let records: Vec<serde_json::Value> = client
        .get(format!("{}/api/scores", address))
        .header(SESSION_HEADER, session)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["total"], 760);
}

#[tokio::test]
async fn sessions_are_isolated() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/scores", address))
        .header(SESSION_HEADER, "learner-a")
        .json(&serde_json::json!({
            "date": "2025-01-15",
            "category": "practice",
            "listening": 400,
            "reading": 400
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);

    // learner-b still only has the seed record
    let records: Vec<serde_json::Value> = client
        .get(format!("{}/api/scores", address))
        .header(SESSION_HEADER, "learner-b")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn missing_session_header_gets_one_minted() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/scores", address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let minted = response
        .headers()
        .get(SESSION_HEADER)
        .expect("session id should be echoed")
        .to_str()
        .unwrap()
        .to_string();
    assert!(!minted.is_empty());

    // Reusing the minted id lands on the same session
    let post = client
        .post(format!("{}/api/scores", address))
        .header(SESSION_HEADER, &minted)
        .json(&serde_json::json!({
            "date": "2025-03-01",
            "category": "official",
            "listening": 410,
            "reading": 390
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(post.status().as_u16(), 201);

    let records: Vec<serde_json::Value> = client
        .get(format!("{}/api/scores", address))
        .header(SESSION_HEADER, &minted)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn latest_is_last_entered_not_max_date() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let session = "backdated-entry";

    for (date, lc, rc) in [("2025-01-01", 420, 400), ("2024-01-01", 300, 280)] {
        let response = client
            .post(format!("{}/api/scores", address))
            .header(SESSION_HEADER, session)
            .json(&serde_json::json!({
                "date": date,
                "category": "practice",
                "listening": lc,
                "reading": rc
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 201);
    }

    let latest: serde_json::Value = client
        .get(format!("{}/api/scores/latest", address))
        .header(SESSION_HEADER, session)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // The backdated record was entered last, so it is the latest
    assert_eq!(latest["date"], "2024-01-01");
    assert_eq!(latest["total"], 580);
}

#[tokio::test]
async fn list_scores_sorted_by_date_descending() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let session = "date-sort";

    // Seed is 2024-12-04; enter the newer sitting first to prove insertion
    // order does not leak into the date ordering
    for date in ["2025-02-09", "2025-01-12"] {
        client
            .post(format!("{}/api/scores", address))
            .header(SESSION_HEADER, session)
            .json(&serde_json::json!({
                "date": date,
                "category": "official",
                "listening": 400,
                "reading": 380
            }))
            .send()
            .await
            .unwrap();
    }

    let records: Vec<serde_json::Value> = client
        .get(format!("{}/api/scores?sort=date&descending=true", address))
        .header(SESSION_HEADER, session)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let dates: Vec<&str> = records.iter().map(|r| r["date"].as_str().unwrap()).collect();
    assert_eq!(dates, ["2025-02-09", "2025-01-12", "2024-12-04"]);
}

#[tokio::test]
async fn list_scores_rejects_unknown_sort() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/scores?sort=total", address))
        .header(SESSION_HEADER, "bad-sort")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn quiz_paper_hides_answer_key() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let paper: Vec<serde_json::Value> = client
        .get(format!("{}/api/quiz", address))
        .header(SESSION_HEADER, "paper-check")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(paper.len(), 5);
    for item in &paper {
        assert!(item["prompt"].is_string());
        assert!(item["options"].is_array());
        assert!(item.get("answer").is_none());
        assert!(item.get("explanation").is_none());
    }
}

#[tokio::test]
async fn quiz_flow_grades_selections() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let session = "quiz-flow";

    // The test knows the answer key through the library, not the API
    let bank = Content::builtin().quiz_bank;

    // Correct answers for items 0, 2, 4; a deliberate wrong option for 1 and 3
    for (index, item) in bank.iter().enumerate() {
        let option = if index % 2 == 0 {
            item.answer.clone()
        } else {
            item.options
                .iter()
                .find(|o| **o != item.answer)
                .expect("item has a wrong option")
                .clone()
        };

        let response = client
            .post(format!("{}/api/quiz/select", address))
            .header(SESSION_HEADER, session)
            .json(&serde_json::json!({ "item_index": index, "option": option }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 204);
    }

    let result: serde_json::Value = client
        .post(format!("{}/api/quiz/grade", address))
        .header(SESSION_HEADER, session)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(result["correct_count"], 3);
    assert_eq!(result["total_items"], 5);
    let flags: Vec<bool> = result["verdicts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["is_correct"].as_bool().unwrap())
        .collect();
    assert_eq!(flags, [true, false, true, false, true]);

    // Fix item 1 and re-grade; grading must reflect the new selection
    let response = client
        .post(format!("{}/api/quiz/select", address))
        .header(SESSION_HEADER, session)
        .json(&serde_json::json!({ "item_index": 1, "option": bank[1].answer }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    let regraded: serde_json::Value = client
        .post(format!("{}/api/quiz/grade", address))
        .header(SESSION_HEADER, session)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(regraded["correct_count"], 4);
}

#[tokio::test]
async fn grading_without_selections_marks_all_incorrect() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let result: serde_json::Value = client
        .post(format!("{}/api/quiz/grade", address))
        .header(SESSION_HEADER, "no-selections")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(result["correct_count"], 0);
    for verdict in result["verdicts"].as_array().unwrap() {
        assert_eq!(verdict["is_correct"], false);
        assert!(verdict["selected"].is_null());
    }
}

#[tokio::test]
async fn select_answer_rejects_bad_input() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let session = "bad-select";

    // Out-of-bounds index
    let response = client
        .post(format!("{}/api/quiz/select", address))
        .header(SESSION_HEADER, session)
        .json(&serde_json::json!({ "item_index": 99, "option": "reviewed" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    // Option not on the item
    let response = client
        .post(format!("{}/api/quiz/select", address))
        .header(SESSION_HEADER, session)
        .json(&serde_json::json!({ "item_index": 0, "option": "not an option" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn summary_returns_current_score_and_advice() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let summary: serde_json::Value = client
        .get(format!("{}/api/scores/summary", address))
        .header(SESSION_HEADER, "summary-check")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(summary["current"]["total"], 760);
    assert_eq!(summary["current"]["category"], "official");
    assert!(summary["advice"]["recommendation"].is_string());
}

#[tokio::test]
async fn schedule_lists_exam_dates() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let schedule: Vec<serde_json::Value> = client
        .get(format!("{}/api/schedule", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(schedule.len(), 3);
    assert_eq!(schedule[0]["exam_date"], "2025-01-12");
    assert_eq!(schedule[0]["results_date"], "2025-01-22");
}

#[tokio::test]
async fn part_accuracy_is_served() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let parts: Vec<serde_json::Value> = client
        .get(format!("{}/api/scores/parts", address))
        .header(SESSION_HEADER, "parts-check")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(parts.len(), 7);
    assert_eq!(parts[0]["part"], "P1");
    assert_eq!(parts[0]["accuracy"], 90);
}
