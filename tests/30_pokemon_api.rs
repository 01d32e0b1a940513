mod common;

use anyhow::Result;
use reqwest::{Method, StatusCode};
use serde_json::json;

use common::{pokemon_body, Principal, TestServer};

#[tokio::test]
async fn create_forces_owner_to_requester() -> Result<()> {
    let server = TestServer::spawn().await?;
    let alice = Principal::new();
    let team_id = server.create_team(&alice, "Aces").await?;

    let mut body = pokemon_body("Sparky");
    body["pokemon"]["owner"] = json!(uuid::Uuid::new_v4());
    let (status, created) = server
        .post(&format!("/teams/{}/pokemons", team_id), &alice, body)
        .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["pokemon"]["owner"], json!(alice.id));
    assert_eq!(created["pokemon"]["nickname"], "Sparky");
    assert_eq!(created["pokemon"]["moves"], json!(["Thunderbolt"]));
    Ok(())
}

#[tokio::test]
async fn create_rejects_missing_fields() -> Result<()> {
    let server = TestServer::spawn().await?;
    let alice = Principal::new();
    let team_id = server.create_team(&alice, "Aces").await?;
    let path = format!("/teams/{}/pokemons", team_id);

    let (status, body) = server
        .post(
            &path,
            &alice,
            json!({ "pokemon": { "nickname": "Sparky", "species": "Pikachu" } }),
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = server
        .post(
            &path,
            &alice,
            json!({
                "pokemon": {
                    "nickname": "",
                    "species": "Pikachu",
                    "ability": "Static",
                    "moves": []
                }
            }),
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["field_errors"]["nickname"].is_string(), "{}", body);

    let (_, listed) = server.get(&path, &alice).await?;
    assert_eq!(listed["pokemons"], json!([]));
    Ok(())
}

#[tokio::test]
async fn get_pokemon_requires_ownership() -> Result<()> {
    let server = TestServer::spawn().await?;
    let alice = Principal::new();
    let bob = Principal::new();
    let team_id = server.create_team(&alice, "Aces").await?;
    let pokemon_id = server.create_pokemon(&alice, &team_id, "Sparky").await?;
    let path = format!("/pokemons/{}", pokemon_id);

    let (status, body) = server.get(&path, &alice).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pokemon"]["id"], pokemon_id.as_str());

    let (status, body) = server.get(&path, &bob).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "forbidden");
    Ok(())
}

#[tokio::test]
async fn missing_pokemon_is_not_found_for_everyone() -> Result<()> {
    let server = TestServer::spawn().await?;
    let bob = Principal::new();
    let path = format!("/pokemons/{}", uuid::Uuid::new_v4());

    let (status, body) = server.get(&path, &bob).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "pokemon not found");

    let (status, _) = server.patch(&path, &bob, json!({ "pokemon": { "nickname": "X" } })).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = server.delete(&path, &bob).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn malformed_id_is_unprocessable() -> Result<()> {
    let server = TestServer::spawn().await?;
    let alice = Principal::new();

    let (status, body) = server.get("/pokemons/not-a-uuid", &alice).await?;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["field_errors"]["id"].is_string(), "{}", body);
    Ok(())
}

#[tokio::test]
async fn update_never_changes_owner() -> Result<()> {
    let server = TestServer::spawn().await?;
    let alice = Principal::new();
    let team_id = server.create_team(&alice, "Aces").await?;
    let pokemon_id = server.create_pokemon(&alice, &team_id, "Sparky").await?;
    let path = format!("/pokemons/{}", pokemon_id);

    let (status, body) = server
        .patch(
            &path,
            &alice,
            json!({ "pokemon": { "nickname": "Zappy", "owner": uuid::Uuid::new_v4() } }),
        )
        .await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (_, body) = server.get(&path, &alice).await?;
    assert_eq!(body["pokemon"]["owner"], json!(alice.id));
    assert_eq!(body["pokemon"]["nickname"], "Zappy");
    Ok(())
}

#[tokio::test]
async fn update_ignores_blank_fields() -> Result<()> {
    let server = TestServer::spawn().await?;
    let alice = Principal::new();
    let team_id = server.create_team(&alice, "Aces").await?;
    let pokemon_id = server.create_pokemon(&alice, &team_id, "Sparky").await?;
    let path = format!("/pokemons/{}", pokemon_id);

    let (status, _) = server
        .patch(&path, &alice, json!({ "pokemon": { "nickname": "", "ability": "Lightning Rod" } }))
        .await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = server.get(&path, &alice).await?;
    assert_eq!(body["pokemon"]["nickname"], "Sparky");
    assert_eq!(body["pokemon"]["ability"], "Lightning Rod");
    Ok(())
}

#[tokio::test]
async fn standalone_update_syncs_embedded_copy() -> Result<()> {
    let server = TestServer::spawn().await?;
    let alice = Principal::new();
    let team_id = server.create_team(&alice, "Aces").await?;
    let pokemon_id = server.create_pokemon(&alice, &team_id, "Sparky").await?;

    server
        .patch(
            &format!("/pokemons/{}", pokemon_id),
            &alice,
            json!({ "pokemon": { "moves": ["Thunder", "Surf"] } }),
        )
        .await?;

    let (_, body) = server.get(&format!("/teams/{}/pokemons", team_id), &alice).await?;
    assert_eq!(body["pokemons"][0]["moves"], json!(["Thunder", "Surf"]));
    Ok(())
}

#[tokio::test]
async fn non_owner_cannot_update_or_delete() -> Result<()> {
    let server = TestServer::spawn().await?;
    let alice = Principal::new();
    let bob = Principal::new();
    let team_id = server.create_team(&alice, "Aces").await?;
    let pokemon_id = server.create_pokemon(&alice, &team_id, "Sparky").await?;
    let path = format!("/pokemons/{}", pokemon_id);

    let (status, _) = server
        .patch(&path, &bob, json!({ "pokemon": { "nickname": "Stolen" } }))
        .await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = server.delete(&path, &bob).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = server.get(&path, &alice).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pokemon"]["nickname"], "Sparky");
    Ok(())
}

#[tokio::test]
async fn standalone_delete_removes_embedded_copy() -> Result<()> {
    let server = TestServer::spawn().await?;
    let alice = Principal::new();
    let team_id = server.create_team(&alice, "Aces").await?;
    let keep = server.create_pokemon(&alice, &team_id, "Keep").await?;
    let drop = server.create_pokemon(&alice, &team_id, "Drop").await?;

    let (status, _) = server.delete(&format!("/pokemons/{}", drop), &alice).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = server.get(&format!("/pokemons/{}", drop), &alice).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = server.get(&format!("/teams/{}/pokemons", team_id), &alice).await?;
    let ids: Vec<&str> = body["pokemons"]
        .as_array()
        .expect("pokemons array")
        .iter()
        .filter_map(|p| p["id"].as_str())
        .collect();
    assert_eq!(ids, vec![keep.as_str()]);
    Ok(())
}

#[tokio::test]
async fn unreadable_bodies_render_as_json_errors() -> Result<()> {
    let server = TestServer::spawn().await?;
    let alice = Principal::new();
    let team_id = server.create_team(&alice, "Aces").await?;
    let pokemon_id = server.create_pokemon(&alice, &team_id, "Sparky").await?;

    let (status, content_type, body) = server
        .send_raw(
            Method::POST,
            &format!("/teams/{}/pokemons", team_id),
            &alice,
            "{not json",
            Some("application/json"),
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, _, body) = server
        .send_raw(
            Method::PATCH,
            &format!("/pokemons/{}", pokemon_id),
            &alice,
            r#"{"pokemon":{"nickname":"Zappy"}}"#,
            None,
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (_, body) = server.get(&format!("/pokemons/{}", pokemon_id), &alice).await?;
    assert_eq!(body["pokemon"]["nickname"], "Sparky");
    Ok(())
}

#[tokio::test]
async fn lookup_runs_before_body_is_read() -> Result<()> {
    let server = TestServer::spawn().await?;
    let alice = Principal::new();
    let bob = Principal::new();
    let team_id = server.create_team(&alice, "Aces").await?;
    let pokemon_id = server.create_pokemon(&alice, &team_id, "Sparky").await?;

    let (status, _, body) = server
        .send_raw(
            Method::PATCH,
            &format!("/pokemons/{}", uuid::Uuid::new_v4()),
            &alice,
            "{not json",
            None,
        )
        .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "pokemon not found");

    let (status, _) = server
        .patch(
            &format!("/pokemons/{}", pokemon_id),
            &bob,
            json!({ "pokemon": { "moves": "Thunderbolt" } }),
        )
        .await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    Ok(())
}
