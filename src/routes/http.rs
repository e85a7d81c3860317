//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs its parameters and basic result info.

use std::sync::Arc;

use axum::{
  extract::{Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument, warn};

use crate::factory::Mode;
use crate::logic::*;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_get_problem(State(state): State<Arc<AppState>>, Query(q): Query<ProblemQuery>) -> Response {
  serve_problem(&state, Mode::Training, q).await
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_arcade(State(state): State<Arc<AppState>>, Query(q): Query<ProblemQuery>) -> Response {
  serve_problem(&state, Mode::Arcade, q).await
}

/// Daily ignores `topics`.
#[instrument(level = "info", skip(state))]
pub async fn http_get_daily(State(state): State<Arc<AppState>>, Query(q): Query<ProblemQuery>) -> Response {
  let out = issue_problem(&state, Mode::Daily, q.level, q.grade, &[]).await;
  info!(target: "problem", id = %out.id, topic = %out.topic_key, "HTTP daily served");
  Json(out).into_response()
}

async fn serve_problem(state: &AppState, mode: Mode, q: ProblemQuery) -> Response {
  let topics = match parse_topics(q.topics.as_deref()) {
    Ok(t) => t,
    Err(e) => {
      warn!(target: "problem", error = %e, "Rejected topics query");
      return (StatusCode::BAD_REQUEST, Json(ErrorOut { error: e.to_string() })).into_response();
    }
  };
  let out = issue_problem(state, mode, q.level, q.grade, &topics).await;
  info!(target: "problem", ?mode, id = %out.id, topic = %out.topic_key, "HTTP problem served");
  Json(out).into_response()
}

#[instrument(level = "info", skip(state, body), fields(%body.problem_id, answer_len = body.answer.len()))]
pub async fn http_post_answer(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AnswerIn>,
) -> impl IntoResponse {
  let out = evaluate_answer(&state, &body.problem_id, &body.answer, body.streak).await;
  info!(target: "problem", id = %body.problem_id, correct = %out.correct, "HTTP submit_answer evaluated");
  Json(out)
}

#[instrument(level = "info", skip(state), fields(%q.problem_id))]
pub async fn http_get_hint(
  State(state): State<Arc<AppState>>,
  Query(q): Query<HintQuery>,
) -> impl IntoResponse {
  let text = get_hint_text(&state, &q.problem_id).await;
  info!(target: "problem", id = %q.problem_id, "HTTP hint served");
  Json(HintOut { text })
}
