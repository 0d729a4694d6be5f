//! Seed command - populate a running server with starter content
//!
//! Creates a handful of categories, each with one "Starter Quiz" collection.
//! Safe to run repeatedly: existing categories and collections (matched by
//! name and title) are left alone.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Base URL of the quiz API
    #[arg(long, env = "QUIZDECK_API_URL", default_value = "http://127.0.0.1:8000")]
    pub api_url: String,
}

const DIFFICULTIES: [&str; 3] = ["Easy", "Medium", "Hard"];

struct SeedQuestion {
    question: &'static str,
    options: [&'static str; 4],
    correct_answer: &'static str,
}

const STARTER_SETS: &[(&str, [SeedQuestion; 2])] = &[
    (
        "General Knowledge",
        [
            SeedQuestion {
                question: "What is the capital of France?",
                options: ["Paris", "London", "Berlin", "Madrid"],
                correct_answer: "Paris",
            },
            SeedQuestion {
                question: "Which planet is known as the Red Planet?",
                options: ["Earth", "Mars", "Jupiter", "Saturn"],
                correct_answer: "Mars",
            },
        ],
    ),
    (
        "Science",
        [
            SeedQuestion {
                question: "What is H2O commonly known as?",
                options: ["Oxygen", "Hydrogen", "Water", "Salt"],
                correct_answer: "Water",
            },
            SeedQuestion {
                question: "What gas do plants absorb from the atmosphere?",
                options: ["Oxygen", "Nitrogen", "Carbon Dioxide", "Helium"],
                correct_answer: "Carbon Dioxide",
            },
        ],
    ),
    (
        "History",
        [
            SeedQuestion {
                question: "Who was the first President of the United States?",
                options: [
                    "Abraham Lincoln",
                    "George Washington",
                    "John Adams",
                    "Thomas Jefferson",
                ],
                correct_answer: "George Washington",
            },
            SeedQuestion {
                question: "In which year did World War II end?",
                options: ["1945", "1939", "1918", "1965"],
                correct_answer: "1945",
            },
        ],
    ),
    (
        "Math",
        [
            SeedQuestion {
                question: "What is the value of Pi (approx)?",
                options: ["2.14", "3.14", "4.13", "3.41"],
                correct_answer: "3.14",
            },
            SeedQuestion {
                question: "What is 12 x 8?",
                options: ["96", "88", "108", "86"],
                correct_answer: "96",
            },
        ],
    ),
    (
        "Sports",
        [
            SeedQuestion {
                question: "How many players are there in a football (soccer) team?",
                options: ["9", "10", "11", "12"],
                correct_answer: "11",
            },
            SeedQuestion {
                question: "Which sport uses a shuttlecock?",
                options: ["Tennis", "Cricket", "Badminton", "Table Tennis"],
                correct_answer: "Badminton",
            },
        ],
    ),
];

#[derive(Debug, Deserialize)]
struct CategoryRow {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CollectionRow {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct QuestionPayload<'a> {
    question: &'a str,
    options: &'a [&'a str],
    correct_answer: &'a str,
}

#[derive(Debug, Serialize)]
struct CollectionPayload<'a> {
    title: &'a str,
    description: &'a str,
    difficulty: &'a str,
    category_id: i64,
    questions: Vec<QuestionPayload<'a>>,
}

/// Outcome counts, printed at the end of a run
#[derive(Debug, Default, PartialEq, Eq)]
struct SeedSummary {
    categories_created: usize,
    collections_created: usize,
    skipped: usize,
}

pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let client = Client::builder()
        .build()
        .context("Failed to build HTTP client")?;
    let base = args.api_url.trim_end_matches('/');

    tracing::info!(api = %base, "seeding starter content");

    let mut summary = SeedSummary::default();
    for (index, (category, questions)) in STARTER_SETS.iter().enumerate() {
        let category_id = ensure_category(&client, base, category, &mut summary).await?;

        let title = starter_title(category);
        let existing: Vec<CollectionRow> = handle_response(
            client
                .get(format!("{base}/quiz-collections"))
                .query(&[("category", category_id)])
                .send()
                .await
                .context("Failed to list quiz collections")?,
        )
        .await?;

        if existing.iter().any(|c| c.title == title) {
            println!("Quiz collection already exists: {title}");
            summary.skipped += 1;
            continue;
        }

        let description = format!("A starter quiz for {category}.");
        let payload = CollectionPayload {
            title: &title,
            description: &description,
            difficulty: DIFFICULTIES[index % DIFFICULTIES.len()],
            category_id,
            questions: questions
                .iter()
                .map(|q| QuestionPayload {
                    question: q.question,
                    options: &q.options,
                    correct_answer: q.correct_answer,
                })
                .collect(),
        };

        let _: serde_json::Value = handle_response(
            client
                .post(format!("{base}/quiz-collections"))
                .json(&payload)
                .send()
                .await
                .context("Failed to create quiz collection")?,
        )
        .await
        .with_context(|| format!("Creating quiz collection '{title}'"))?;

        println!("Created quiz collection: {title}");
        summary.collections_created += 1;
    }

    println!(
        "Seed complete: {} categories and {} collections created, {} already present",
        summary.categories_created, summary.collections_created, summary.skipped
    );
    Ok(())
}

fn starter_title(category: &str) -> String {
    format!("{category} Starter Quiz")
}

async fn ensure_category(
    client: &Client,
    base: &str,
    name: &str,
    summary: &mut SeedSummary,
) -> Result<i64> {
    let categories: Vec<CategoryRow> = handle_response(
        client
            .get(format!("{base}/categories"))
            .send()
            .await
            .context("Failed to list categories")?,
    )
    .await?;

    if let Some(existing) = categories.iter().find(|c| c.name == name) {
        println!("Category already exists: {name}");
        return Ok(existing.id);
    }

    let created: CategoryRow = handle_response(
        client
            .post(format!("{base}/categories"))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await
            .context("Failed to create category")?,
    )
    .await
    .with_context(|| format!("Creating category '{name}'"))?;

    println!("Created category: {name}");
    summary.categories_created += 1;
    Ok(created.id)
}

async fn handle_response<T: for<'de> Deserialize<'de>>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response.json::<T>().await.context("Failed to parse response")
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        match serde_json::from_str::<ErrorResponse>(&error_text) {
            Ok(ErrorResponse {
                error,
                message: Some(message),
            }) => Err(anyhow!("{status}: {error}: {message}")),
            Ok(ErrorResponse { error, .. }) => Err(anyhow!("{status}: {error}")),
            Err(_) => Err(anyhow!("{status}: {error_text}")),
        }
    }
}
