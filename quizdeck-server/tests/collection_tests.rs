use axum::http::StatusCode;
use serde_json::{json, Value};

mod common;

fn questions(n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| {
                json!({
                    "question": format!("Question {}", i + 1),
                    "options": [format!("A{i}"), format!("B{i}"), format!("C{i}"), format!("D{i}")],
                    "correct_answer": format!("A{i}")
                })
            })
            .collect(),
    )
}

#[tokio::test]
async fn test_create_collection_round_trips_questions() {
    let app = common::create_test_app().await;
    let category_id = app.category("Geography").await;
    let submitted = json!([
        {
            "question": "What is the capital of France?",
            "options": ["Paris", "London", "Berlin", "Madrid"],
            "correct_answer": "Paris"
        },
        {
            "question": "Which is the largest ocean in the world?",
            "options": ["Atlantic", "Indian", "Pacific", "Arctic"],
            "correct_answer": "Pacific"
        }
    ]);

    let created = app.collection(category_id, "Capitals", submitted.clone()).await;
    assert_eq!(created["question_count"], 2);
    assert_eq!(created["difficulty"], "Medium");
    assert_eq!(created["category_id"], category_id);
    assert!(created["created_at"].is_string());

    let (status, stored) = app
        .get(&format!("/quiz-collections/{}/questions", created["id"]))
        .await;
    assert_eq!(status, StatusCode::OK);

    let stored = stored.as_array().unwrap();
    let submitted = submitted.as_array().unwrap();
    assert_eq!(stored.len(), submitted.len());
    for (row, input) in stored.iter().zip(submitted) {
        assert_eq!(row["question"], input["question"]);
        assert_eq!(row["options"], input["options"]);
        assert_eq!(row["correct_answer"], input["correct_answer"]);
        assert_eq!(row["collection_id"], created["id"]);
    }
}

#[tokio::test]
async fn test_padded_options_are_stored_verbatim() {
    let app = common::create_test_app().await;
    let category_id = app.category("Math").await;
    let submitted = json!([
        {
            "question": " What is six times seven? ",
            "options": [" 42", "42 ", "4 2", "x"],
            "correct_answer": " 42"
        },
        {
            "question": "Pick the blank one",
            "options": ["a", "  ", "c", "d"],
            "correct_answer": "  "
        }
    ]);

    let created = app.collection(category_id, "Spacing", submitted.clone()).await;
    assert_eq!(created["question_count"], 2);

    let (_, stored) = app
        .get(&format!("/quiz-collections/{}/questions", created["id"]))
        .await;
    for (row, input) in stored.as_array().unwrap().iter().zip(submitted.as_array().unwrap()) {
        assert_eq!(row["question"], input["question"]);
        assert_eq!(row["options"], input["options"]);
        assert_eq!(row["correct_answer"], input["correct_answer"]);
    }
}

#[tokio::test]
async fn test_explicit_difficulty_is_kept() {
    let app = common::create_test_app().await;
    let category_id = app.category("Math").await;

    let (status, body) = app
        .post(
            "/quiz-collections",
            json!({
                "title": "Times tables",
                "description": "",
                "difficulty": "Hard",
                "category_id": category_id,
                "questions": questions(1),
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["difficulty"], "Hard");
}

#[tokio::test]
async fn test_bad_question_in_batch_rejects_whole_collection() {
    let app = common::create_test_app().await;
    let category_id = app.category("Science").await;
    let mut batch = questions(3);
    batch[1]["options"] = json!(["only", "three", "options"]);

    let (status, body) = app
        .post(
            "/quiz-collections",
            json!({
                "title": "Broken",
                "description": "",
                "category_id": category_id,
                "questions": batch,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (_, collections) = app
        .get(&format!("/quiz-collections?category={category_id}"))
        .await;
    assert_eq!(collections, json!([]));
}

#[tokio::test]
async fn test_unknown_category_is_400() {
    let app = common::create_test_app().await;

    let (status, body) = app
        .post(
            "/quiz-collections",
            json!({
                "title": "Lost",
                "description": "",
                "category_id": 999,
                "questions": questions(2),
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "constraint_violation");
}

#[tokio::test]
async fn test_missing_fields_are_400() {
    let app = common::create_test_app().await;
    let category_id = app.category("Sports").await;

    let (status, _) = app
        .post(
            "/quiz-collections",
            json!({ "title": "No questions key", "description": "", "category_id": category_id }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_requires_category() {
    let app = common::create_test_app().await;

    let (status, body) = app.get("/quiz-collections").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = app.get("/quiz-collections?category=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_question_count_is_live() {
    let app = common::create_test_app().await;
    let category_id = app.category("Music").await;
    let created = app.collection(category_id, "Pop", questions(3)).await;
    let collection_id = created["id"].as_i64().unwrap();

    let (_, stored) = app
        .get(&format!("/quiz-collections/{collection_id}/questions"))
        .await;
    let first_id = stored[0]["id"].as_i64().unwrap();
    let (status, _) = app.delete(&format!("/quizzes/{first_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .post(
            "/quizzes",
            json!({
                "question": "Which instrument has 88 keys?",
                "options": ["Guitar", "Piano", "Drum", "Violin"],
                "correct_answer": "Piano",
                "collection_id": collection_id
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app
        .post(
            "/quizzes",
            json!({
                "question": "Who is the King of Pop?",
                "options": ["Elvis Presley", "Justin Bieber", "Michael Jackson", "Prince"],
                "correct_answer": "Michael Jackson",
                "collection_id": collection_id
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = app
        .get(&format!("/quiz-collections?category={category_id}"))
        .await;
    assert_eq!(listed[0]["question_count"], 4);

    let (status, single) = app.get(&format!("/quiz-collections/{collection_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(single["question_count"], 4);
}

#[tokio::test]
async fn test_delete_collection() {
    let app = common::create_test_app().await;
    let category_id = app.category("Movies").await;
    let kept = app.collection(category_id, "Kept", questions(1)).await;
    let doomed = app.collection(category_id, "Doomed", questions(2)).await;

    let (status, _) = app
        .delete(&format!("/quiz-collections/{}", doomed["id"]))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, questions) = app
        .get(&format!("/quiz-collections/{}/questions", doomed["id"]))
        .await;
    assert_eq!(questions, json!([]));

    let (_, listed) = app
        .get(&format!("/quiz-collections?category={category_id}"))
        .await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], kept["id"]);

    let (status, _) = app
        .delete(&format!("/quiz-collections/{}", doomed["id"]))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .get(&format!("/quiz-collections/{}", doomed["id"]))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_collection_creates_stay_separate() {
    let app = common::create_test_app().await;
    let category_id = app.category("Technology").await;

    let batch = |tag: &str| {
        Value::Array(
            (0..6)
                .map(|i| {
                    json!({
                        "question": format!("{tag} {i}"),
                        "options": ["a", "b", "c", "d"],
                        "correct_answer": "a"
                    })
                })
                .collect(),
        )
    };

    let (left, right) = tokio::join!(
        app.collection(category_id, "Left", batch("left")),
        app.collection(category_id, "Right", batch("right")),
    );

    for (created, tag) in [(left, "left"), (right, "right")] {
        let (_, stored) = app
            .get(&format!("/quiz-collections/{}/questions", created["id"]))
            .await;
        let stored = stored.as_array().unwrap();
        assert_eq!(stored.len(), 6);
        assert!(stored
            .iter()
            .all(|q| q["question"].as_str().unwrap().starts_with(tag)));
    }
}
