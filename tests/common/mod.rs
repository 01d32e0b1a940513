#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use pokemon_teams_api::auth::{generate_jwt, Claims};
use pokemon_teams_api::database::MemoryStore;
use pokemon_teams_api::{app, AppState};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use uuid::Uuid;

pub const DEFAULT_CAPACITY: usize = 6;

/// Router served on a free local port, backed by an in-memory store
pub struct TestServer {
    pub base_url: String,
    client: reqwest::Client,
}

/// A principal with a valid bearer token
pub struct Principal {
    pub id: Uuid,
    pub token: String,
}

impl Principal {
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        let token = generate_jwt(&Claims::new(id)).expect("failed to issue token");
        Self { id, token }
    }
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_capacity(DEFAULT_CAPACITY).await
    }

    pub async fn spawn_with_capacity(capacity: usize) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let state = AppState::new(Arc::new(MemoryStore::new()), capacity);
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app(state)).await;
        });

        let server = Self {
            base_url,
            client: reqwest::Client::new(),
        };
        server.wait_ready(Duration::from_secs(5)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = self.client.get(format!("{}/health", self.base_url)).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    /// Send a request and return the status with the parsed body (Null when empty)
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        principal: Option<&Principal>,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        let mut request = self.client.request(method, format!("{}{}", self.base_url, path));
        if let Some(principal) = principal {
            request = request.bearer_auth(&principal.token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let res = request.send().await?;
        let status = res.status();
        let text = res.text().await?;
        let value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)
                .with_context(|| format!("non-JSON body: {}", text))?
        };
        Ok((status, value))
    }

    /// Send a raw body, optionally with a Content-Type header
    pub async fn send_raw(
        &self,
        method: Method,
        path: &str,
        principal: &Principal,
        body: &str,
        content_type: Option<&str>,
    ) -> Result<(StatusCode, Option<String>, Value)> {
        let mut request = self
            .client
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&principal.token)
            .body(body.to_string());
        if let Some(content_type) = content_type {
            request = request.header(reqwest::header::CONTENT_TYPE, content_type);
        }

        let res = request.send().await?;
        let status = res.status();
        let received_type = res
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = res.text().await?;
        let value = serde_json::from_str(&text).unwrap_or(Value::Null);
        Ok((status, received_type, value))
    }

    pub async fn get(&self, path: &str, principal: &Principal) -> Result<(StatusCode, Value)> {
        self.send(Method::GET, path, Some(principal), None).await
    }

    pub async fn post(
        &self,
        path: &str,
        principal: &Principal,
        body: Value,
    ) -> Result<(StatusCode, Value)> {
        self.send(Method::POST, path, Some(principal), Some(body)).await
    }

    pub async fn patch(
        &self,
        path: &str,
        principal: &Principal,
        body: Value,
    ) -> Result<(StatusCode, Value)> {
        self.send(Method::PATCH, path, Some(principal), Some(body)).await
    }

    pub async fn delete(&self, path: &str, principal: &Principal) -> Result<(StatusCode, Value)> {
        self.send(Method::DELETE, path, Some(principal), None).await
    }

    /// Create a team and return its id
    pub async fn create_team(&self, principal: &Principal, title: &str) -> Result<String> {
        let (status, body) = self
            .post("/teams", principal, serde_json::json!({ "team": { "title": title } }))
            .await?;
        anyhow::ensure!(
            status == StatusCode::CREATED,
            "create team failed: {} {}",
            status,
            body
        );
        id_of(&body["team"])
    }

    /// Add a pokemon to a team and return its id
    pub async fn create_pokemon(
        &self,
        principal: &Principal,
        team_id: &str,
        nickname: &str,
    ) -> Result<String> {
        let (status, body) = self
            .post(
                &format!("/teams/{}/pokemons", team_id),
                principal,
                pokemon_body(nickname),
            )
            .await?;
        anyhow::ensure!(
            status == StatusCode::CREATED,
            "create pokemon failed: {} {}",
            status,
            body
        );
        id_of(&body["pokemon"])
    }
}

pub fn pokemon_body(nickname: &str) -> Value {
    serde_json::json!({
        "pokemon": {
            "nickname": nickname,
            "species": "Pikachu",
            "ability": "Static",
            "moves": ["Thunderbolt"]
        }
    })
}

pub fn id_of(entity: &Value) -> Result<String> {
    entity["id"]
        .as_str()
        .map(str::to_string)
        .with_context(|| format!("entity has no id: {}", entity))
}
