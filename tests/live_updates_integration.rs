//! Integration tests for live change notifications.
//!
//! These tests run the real server on an ephemeral port and verify the
//! end-to-end flow:
//! 1. A REST write commits and publishes one change event
//! 2. The hub pushes the same frame to every connected session
//! 3. Each client reconciles the event against its own open recipe
//! 4. Disconnects on either side are handled without affecting others

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;

use recipe_book::adapters::websocket::BroadcastHub;
use recipe_book::app::RecipeBookApp;
use recipe_book::client::{
    ui_channel, ClientConnection, LinkState, LiveUpdate, ReconciliationDispatcher, UiInbox,
};
use recipe_book::config::AppConfig;
use recipe_book::domain::foundation::RecipeId;
use recipe_book::domain::live::{self, ChangeEvent, ChangeKind, Decoded};
use recipe_book::domain::recipe::{IngredientLine, Recipe};
use recipe_book::ports::{RecipeView, ViewState};

const WAIT: Duration = Duration::from_secs(5);

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestServer {
    addr: SocketAddr,
    hub: Arc<BroadcastHub>,
    http: reqwest::Client,
}

impl TestServer {
    async fn start() -> Self {
        let app = RecipeBookApp::new(&AppConfig::default());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hub = app.hub.clone();
        let router = app.router();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            addr,
            hub,
            http: reqwest::Client::new(),
        }
    }

    fn live_url(&self) -> String {
        format!("ws://{}/ws/recipes", self.addr)
    }

    fn api(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn wait_for_sessions(&self, expected: usize) {
        timeout(WAIT, async {
            while self.hub.session_count().await != expected {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .unwrap_or_else(|_| panic!("hub never reached {expected} sessions"));
    }

    async fn create_recipe(&self, name: &str) -> Recipe {
        self.http
            .post(self.api("/api/recipes"))
            .json(&json!({ "name": name, "servings": 4, "instructions": "Cook." }))
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    async fn add_ingredient(&self, recipe_id: RecipeId, name: &str) -> IngredientLine {
        self.http
            .post(self.api(&format!("/api/recipes/{recipe_id}/ingredients")))
            .json(&json!({ "name": name, "quantity": 1.5, "unit": "cups" }))
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
            .json()
            .await
            .unwrap()
    }
}

async fn next_update(inbox: &mut UiInbox) -> LiveUpdate {
    timeout(WAIT, inbox.recv())
        .await
        .expect("timed out waiting for live update")
        .expect("handoff closed")
}

async fn next_text(
    ws: &mut tokio_tungstenite::WebSocketStream<
        tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
    >,
) -> String {
    timeout(WAIT, async {
        loop {
            match ws.next().await {
                Some(Ok(Message::Text(text))) => return text,
                Some(Ok(_)) => continue,
                other => panic!("socket ended: {other:?}"),
            }
        }
    })
    .await
    .expect("timed out waiting for frame")
}

/// View that records the refreshes it was asked to perform.
struct RecordingView {
    open: Option<RecipeId>,
    calls: Vec<String>,
}

impl ViewState for RecordingView {
    fn open_recipe_id(&self) -> Option<RecipeId> {
        self.open
    }
}

impl RecipeView for RecordingView {
    fn refresh_recipe_list(&mut self) {
        self.calls.push("refresh_list".to_string());
    }

    fn show_recipe(&mut self, recipe: &Recipe) {
        self.calls.push(format!("show_recipe {}", recipe.name()));
    }

    fn close_recipe(&mut self, id: RecipeId) {
        self.open = None;
        self.calls.push(format!("close_recipe {id}"));
    }

    fn refresh_ingredients(&mut self, id: RecipeId) {
        self.calls.push(format!("refresh_ingredients {id}"));
    }

    fn show_degraded(&mut self, reason: &str) {
        self.calls.push(format!("degraded: {reason}"));
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn every_client_receives_the_created_recipe() {
    let server = TestServer::start().await;

    let (tx_a, mut inbox_a) = ui_channel();
    let (tx_b, mut inbox_b) = ui_channel();
    let mut a = ClientConnection::connect(&server.live_url(), tx_a, 1024 * 1024).await;
    let mut b = ClientConnection::connect(&server.live_url(), tx_b, 1024 * 1024).await;
    assert_eq!(a.link_state(), LinkState::Live);
    assert_eq!(b.link_state(), LinkState::Live);
    server.wait_for_sessions(2).await;

    let recipe = server.create_recipe("Shakshuka").await;

    let expected = LiveUpdate::Event(ChangeEvent::entity_created(recipe.clone()));
    assert_eq!(next_update(&mut inbox_a).await, expected);
    assert_eq!(next_update(&mut inbox_b).await, expected);

    a.close().await;
    b.close().await;
    assert_eq!(a.link_state(), LinkState::Closed);
}

#[tokio::test]
async fn sessions_receive_byte_identical_frames() {
    let server = TestServer::start().await;

    let (mut ws_a, _) = tokio_tungstenite::connect_async(server.live_url()).await.unwrap();
    let (mut ws_b, _) = tokio_tungstenite::connect_async(server.live_url()).await.unwrap();
    server.wait_for_sessions(2).await;

    let recipe = server.create_recipe("Ramen").await;

    let frame_a = next_text(&mut ws_a).await;
    let frame_b = next_text(&mut ws_b).await;
    assert_eq!(frame_a, frame_b);
    assert_eq!(
        live::decode(&frame_a).unwrap(),
        Decoded::Event(ChangeEvent::entity_created(recipe))
    );
}

#[tokio::test]
async fn child_event_refreshes_only_the_client_viewing_that_recipe() {
    let server = TestServer::start().await;
    let recipe = server.create_recipe("Tacos").await;
    let other = server.create_recipe("Burritos").await;

    let (tx_a, mut inbox_a) = ui_channel();
    let (tx_b, mut inbox_b) = ui_channel();
    let _a = ClientConnection::connect(&server.live_url(), tx_a, 1024 * 1024).await;
    let _b = ClientConnection::connect(&server.live_url(), tx_b, 1024 * 1024).await;
    server.wait_for_sessions(2).await;

    let mut view_a = RecordingView {
        open: Some(recipe.id()),
        calls: Vec::new(),
    };
    let mut view_b = RecordingView {
        open: Some(other.id()),
        calls: Vec::new(),
    };
    let dispatcher = ReconciliationDispatcher::new();

    let line = server.add_ingredient(recipe.id(), "Tortillas").await;

    let update_a = next_update(&mut inbox_a).await;
    let update_b = next_update(&mut inbox_b).await;
    assert_eq!(
        update_a,
        LiveUpdate::Event(ChangeEvent::child_created(line))
    );
    dispatcher.apply(update_a, &mut view_a);
    dispatcher.apply(update_b, &mut view_b);

    assert_eq!(view_a.calls, vec![format!("refresh_ingredients {}", recipe.id())]);
    assert!(view_b.calls.is_empty());
}

#[tokio::test]
async fn deleting_the_open_recipe_closes_it() {
    let server = TestServer::start().await;
    let recipe = server.create_recipe("Pho").await;

    let (tx, mut inbox) = ui_channel();
    let _connection = ClientConnection::connect(&server.live_url(), tx, 1024 * 1024).await;
    server.wait_for_sessions(1).await;

    let status = server
        .http
        .delete(server.api(&format!("/api/recipes/{}", recipe.id())))
        .send()
        .await
        .unwrap()
        .status();
    assert_eq!(status, reqwest::StatusCode::NO_CONTENT);

    let mut view = RecordingView {
        open: Some(recipe.id()),
        calls: Vec::new(),
    };
    ReconciliationDispatcher::new().apply(next_update(&mut inbox).await, &mut view);

    assert_eq!(
        view.calls,
        vec!["refresh_list".to_string(), format!("close_recipe {}", recipe.id())]
    );
    assert_eq!(view.open, None);
}

#[tokio::test]
async fn rejected_write_publishes_nothing() {
    let server = TestServer::start().await;

    let (mut ws, _) = tokio_tungstenite::connect_async(server.live_url()).await.unwrap();
    server.wait_for_sessions(1).await;

    let status = server
        .http
        .put(server.api("/api/recipes/999"))
        .json(&json!({ "name": "Ghost", "servings": 1 }))
        .send()
        .await
        .unwrap()
        .status();
    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);

    let recipe = server.create_recipe("Real").await;
    let frame = next_text(&mut ws).await;
    assert_eq!(
        live::decode(&frame).unwrap(),
        Decoded::Event(ChangeEvent::entity_created(recipe))
    );
}

#[tokio::test]
async fn closed_client_is_removed_and_others_keep_receiving() {
    let server = TestServer::start().await;

    let (mut leaving, _) = tokio_tungstenite::connect_async(server.live_url()).await.unwrap();
    let (tx, mut inbox) = ui_channel();
    let _staying = ClientConnection::connect(&server.live_url(), tx, 1024 * 1024).await;
    server.wait_for_sessions(2).await;

    leaving.close(None).await.unwrap();
    server.wait_for_sessions(1).await;

    let recipe = server.create_recipe("Risotto").await;
    assert_eq!(
        next_update(&mut inbox).await,
        LiveUpdate::Event(ChangeEvent::entity_created(recipe))
    );
}

#[tokio::test]
async fn client_skips_bad_frames_and_degrades_when_server_leaves() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Minimal server: a few frames, then close.
    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
        let valid = live::encode(&ChangeEvent::entity_deleted(RecipeId::new(3))).unwrap();

        ws.send(Message::Text(r#"{"type":"EntityArchived","targetId":3}"#.to_string()))
            .await
            .unwrap();
        ws.send(Message::Text("{not json".to_string())).await.unwrap();
        ws.send(Message::Binary(vec![1, 2, 3])).await.unwrap();
        ws.send(Message::Ping(vec![9])).await.unwrap();
        ws.send(Message::Text(valid)).await.unwrap();
        ws.close(None).await.unwrap();
    });

    let (tx, mut inbox) = ui_channel();
    let connection = ClientConnection::connect(&format!("ws://{addr}"), tx, 1024 * 1024).await;

    match next_update(&mut inbox).await {
        LiveUpdate::Event(event) => {
            assert_eq!(event.kind(), ChangeKind::EntityDeleted);
            assert_eq!(event.target_id(), RecipeId::new(3));
        }
        other => panic!("expected event, got {other:?}"),
    }
    assert!(matches!(next_update(&mut inbox).await, LiveUpdate::Degraded(_)));
    assert_eq!(connection.link_state(), LinkState::Degraded);
}
