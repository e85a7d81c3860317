//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Issuing a problem for one of the three modes
//!   - Grading a submitted answer against an in-flight problem
//!   - Looking up the hint of an in-flight problem

use tracing::{info, instrument};

use crate::domain::{parse_topic_list, ParseTopicError, Topic};
use crate::factory::Mode;
use crate::grading::{check_answer, daily_reward, training_reward};
use crate::protocol::{to_out, AnswerOut, ProblemOut};
use crate::state::AppState;

/// Level used when the client does not send one.
pub const DEFAULT_LEVEL: i64 = 1;

/// Parse the optional `topics` query value. Missing or blank means mixed.
pub fn parse_topics(raw: Option<&str>) -> Result<Vec<Topic>, ParseTopicError> {
  match raw {
    Some(raw) => parse_topic_list(raw),
    None => Ok(Vec::new()),
  }
}

pub async fn issue_problem(
  state: &AppState,
  mode: Mode,
  level: Option<i64>,
  grade: Option<i64>,
  topics: &[Topic],
) -> ProblemOut {
  let p = state.issue(mode, level.unwrap_or(DEFAULT_LEVEL), grade, topics).await;
  to_out(&p, mode)
}

#[instrument(level = "info", skip(state, answer), fields(%problem_id, answer_len = answer.len()))]
pub async fn evaluate_answer(state: &AppState, problem_id: &str, answer: &str, streak: Option<u32>) -> AnswerOut {
  let Some(issued) = state.take(problem_id).await else {
    return AnswerOut {
      correct: false,
      expected: String::new(),
      unit: String::new(),
      steps: vec![],
      explanation: format!("Unknown problemId: {}", problem_id),
      reward: None,
    };
  };

  let p = issued.problem;
  let correct = check_answer(&p, answer);
  // Arcade keeps its own score on the client; only training and daily pay out.
  let reward = match issued.mode {
    _ if !correct => None,
    Mode::Training => Some(training_reward(p.level, streak.unwrap_or(0))),
    Mode::Daily => Some(daily_reward(p.level)),
    Mode::Arcade => None,
  };
  let explanation = if correct {
    "Korrekt!".to_string()
  } else {
    format!("Ikke helt. Rigtigt svar: {}.", p.expected_display())
  };
  info!(target: "problem", id = %p.id, topic = %p.topic_key, mode = ?issued.mode, %correct, "Answer graded");

  AnswerOut {
    correct,
    expected: crate::util::fmt_num(p.answer),
    unit: p.unit,
    steps: p.steps,
    explanation,
    reward,
  }
}

#[instrument(level = "info", skip(state), fields(%problem_id))]
pub async fn get_hint_text(state: &AppState, problem_id: &str) -> String {
  match state.get(problem_id).await {
    Some(issued) => issued.problem.hint,
    None => "No hint: unknown problem.".into(),
  }
}
