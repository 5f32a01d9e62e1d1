use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use std::{sync::Arc, time::Duration};

use foxbriar_sips::{
    db::{InMemoryLoreStore, LoreStore, LoreWriter},
    models::{LoreData, MenuDataset},
    routes::{create_router, AppState},
    services::{CocktailGenerator, RuleBasedGenerator},
};

struct TestApp {
    server: TestServer,
    lore: Arc<dyn LoreStore>,
}

fn create_test_app() -> TestApp {
    create_test_app_with_lore(LoreData::default())
}

fn create_test_app_with_lore(lore: LoreData) -> TestApp {
    let menu = Arc::new(MenuDataset::bundled().unwrap());
    let recommender: Arc<dyn CocktailGenerator> =
        Arc::new(RuleBasedGenerator::new(menu, Some(42)));
    let lore: Arc<dyn LoreStore> = Arc::new(InMemoryLoreStore::with_data(lore));
    let (lore_writer, _handle) = LoreWriter::new(lore.clone());

    let state = Arc::new(AppState {
        recommender: recommender.clone(),
        generator: recommender,
        lore: lore.clone(),
        lore_writer,
    });

    TestApp {
        server: TestServer::new(create_router(state)).unwrap(),
        lore,
    }
}

async fn recommend(server: &TestServer, answers: Value) -> Value {
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "answers": answers }))
        .await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app.server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = create_test_app();
    let response = app.server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_adventure_gets_exotic_drink() {
    let app = create_test_app();
    let drink = recommend(&app.server, json!({ "first_sip": "adventure" })).await;

    let menu = MenuDataset::bundled().unwrap();
    let exotic: Vec<&str> = menu
        .exotic_and_exciting
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert!(exotic.contains(&drink["selectedName"].as_str().unwrap()));
    assert_eq!(drink["names"][0], drink["selectedName"]);
    assert_eq!(drink["names"].as_array().unwrap().len(), 5);
    assert_eq!(drink["foodPairing"]["name"], "Smoked Peanuts");
}

#[tokio::test]
async fn test_empty_answers_get_last_exotic_drink() {
    let app = create_test_app();
    let drink = recommend(&app.server, json!({})).await;

    assert_eq!(drink["selectedName"], "Cannonball Spritz");
    assert_eq!(
        drink["tags"],
        json!(["circus_mystery", "atmospheric", "crafted"])
    );
}

#[tokio::test]
async fn test_shadows_get_creature_feature() {
    let app = create_test_app();
    let drink = recommend(
        &app.server,
        json!({ "evening_mood": "shadows", "sodas": "none" }),
    )
    .await;

    assert_eq!(drink["selectedName"], "The Bearded Lady's Secret");
}

#[tokio::test]
async fn test_recommendation_is_stamped() {
    let app = create_test_app();
    let drink = recommend(&app.server, json!({ "first_sip": "elegance" })).await;

    assert!(drink["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(drink["createdAt"].as_str().is_some());
    assert!(drink["rating"].is_null());
    assert!(drink["review"].is_null());
    assert_eq!(drink["ordered"], false);
    assert_eq!(drink["foodPairing"]["name"], "Truffle Popcorn");
}

#[tokio::test]
async fn test_missing_answers_is_bad_request() {
    let app = create_test_app();
    let response = app
        .server
        .post("/api/v1/generate-cocktail")
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing quiz answers");
}

#[tokio::test]
async fn test_generate_cocktail() {
    let app = create_test_app();
    let response = app
        .server
        .post("/api/v1/generate-cocktail")
        .json(&json!({ "answers": { "week_feeling": "chaotic" } }))
        .await;

    response.assert_status_ok();
    let drink: Value = response.json();
    assert!(drink["story"].as_str().unwrap().contains("Peter"));
}

#[tokio::test]
async fn test_recommendation_feeds_lore() {
    let app = create_test_app();
    let drink = recommend(&app.server, json!({})).await;
    let whisper = drink["whisper"].as_str().unwrap().to_string();

    let mut lore = app.lore.fetch().await.unwrap();
    for _ in 0..50 {
        if !lore.whispers.is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
        lore = app.lore.fetch().await.unwrap();
    }

    assert_eq!(lore.whispers, vec![whisper]);
    assert_eq!(lore.tags, vec!["circus_mystery", "atmospheric", "crafted"]);
}

#[tokio::test]
async fn test_add_and_get_lore() {
    let app = create_test_app();

    for _ in 0..2 {
        let response = app
            .server
            .post("/api/v1/lore")
            .json(&json!({ "tags": ["ice_war", "bitter_truth"], "whisper": "The ice hums." }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
    }

    let response = app.server.get("/api/v1/lore").await;
    response.assert_status_ok();
    let lore: Value = response.json();
    assert_eq!(lore["tags"], json!(["ice_war", "bitter_truth"]));
    assert_eq!(lore["whispers"], json!(["The ice hums."]));
}

#[tokio::test]
async fn test_lore_fragment() {
    let app = create_test_app_with_lore(LoreData {
        tags: vec!["garnish_conflict".to_string()],
        whispers: vec!["The garnish moved.".to_string()],
    });

    let response = app.server.get("/api/v1/lore/fragment").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["whisper"], "The garnish moved.");
    assert!(body["fragment"].as_str().unwrap().contains("garnish conflict"));
    assert_eq!(body.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_lore_fragment_when_empty() {
    let app = create_test_app();
    let response = app.server.get("/api/v1/lore/fragment").await;
    let body: Value = response.json();
    assert_eq!(body["whisper"], "The bar holds its secrets tonight.");
    assert_eq!(body["fragment"], "The bar remembers all who enter.");
}

#[tokio::test]
async fn test_rate_drink() {
    let app = create_test_app();
    let drink = recommend(&app.server, json!({ "first_sip": "mystery" })).await;

    let response = app
        .server
        .post("/api/v1/drinks/rate")
        .json(&json!({
            "drink": drink.clone(),
            "rating": 5,
            "review": "  Tasted like tomorrow ",
            "ordered": true
        }))
        .await;

    response.assert_status_ok();
    let rated: Value = response.json();
    assert_eq!(rated["id"], drink["id"]);
    assert_eq!(rated["rating"], 5);
    assert_eq!(rated["review"], "Tasted like tomorrow");
    assert_eq!(rated["ordered"], true);
    assert_eq!(rated["selectedName"], drink["selectedName"]);
}

#[tokio::test]
async fn test_rate_drink_rejects_bad_rating() {
    let app = create_test_app();
    let drink = recommend(&app.server, json!({})).await;

    for rating in [json!(9), json!(300), json!(-1), json!(3.5)] {
        let response = app
            .server
            .post("/api/v1/drinks/rate")
            .json(&json!({ "drink": drink.clone(), "rating": rating }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["error"]
            .as_str()
            .is_some_and(|e| e.starts_with("Rating must be")));
    }
}

#[tokio::test]
async fn test_drink_stats() {
    let app = create_test_app();
    let mut first = recommend(&app.server, json!({})).await;
    let mut second = recommend(&app.server, json!({ "sodas": "few" })).await;
    first["rating"] = json!(4);
    first["ordered"] = json!(true);
    second["rating"] = json!(2);

    let response = app
        .server
        .post("/api/v1/drinks/stats")
        .json(&json!({ "drinks": [first, second] }))
        .await;

    response.assert_status_ok();
    let stats: Value = response.json();
    assert_eq!(stats["drinkCount"], 2);
    assert_eq!(stats["orderedCount"], 1);
    assert_eq!(stats["averageRating"], 3.0);
    assert_eq!(
        stats["recurringTags"],
        json!(["circus_mystery", "atmospheric", "crafted"])
    );
}
