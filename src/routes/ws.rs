//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. We reply with a single JSON message per request.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{debug, error, info, instrument};

use crate::factory::Mode;
use crate::logic::*;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "fokusmat_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "fokusmat_backend", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "fokusmat_backend", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &state).await
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "fokusmat_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "fokusmat_backend", "WebSocket disconnected");
}

#[instrument(level = "info", skip(state))]
pub async fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::NewProblem { level, grade, topics } => {
      let problem = issue_problem(state, Mode::Training, level, grade, &topics).await;
      info!(target: "problem", id = %problem.id, topic = %problem.topic_key, "WS new_problem served");
      ServerWsMessage::Problem { problem }
    }

    ClientWsMessage::NewArcade { level, grade, topics } => {
      let problem = issue_problem(state, Mode::Arcade, level, grade, &topics).await;
      info!(target: "problem", id = %problem.id, topic = %problem.topic_key, "WS new_arcade served");
      ServerWsMessage::Problem { problem }
    }

    ClientWsMessage::NewDaily { level, grade } => {
      let problem = issue_problem(state, Mode::Daily, level, grade, &[]).await;
      info!(target: "problem", id = %problem.id, topic = %problem.topic_key, "WS new_daily served");
      ServerWsMessage::Problem { problem }
    }

    ClientWsMessage::SubmitAnswer { problem_id, answer, streak } => {
      let out = evaluate_answer(state, &problem_id, &answer, streak).await;
      info!(target: "problem", id = %problem_id, correct = %out.correct, "WS submit_answer evaluated");
      ServerWsMessage::AnswerResult(out)
    }

    ClientWsMessage::Hint { problem_id } => {
      let text = get_hint_text(state, &problem_id).await;
      info!(target: "problem", id = %problem_id, "WS hint served");
      ServerWsMessage::Hint { text }
    }
  }
}
