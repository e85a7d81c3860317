//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{AnswerFormat, Problem, Topic};
use crate::factory::Mode;
use crate::grading::Reward;

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    NewProblem {
        #[serde(default)]
        level: Option<i64>,
        #[serde(default)]
        grade: Option<i64>,
        #[serde(default)]
        topics: Vec<Topic>,
    },
    NewArcade {
        #[serde(default)]
        level: Option<i64>,
        #[serde(default)]
        grade: Option<i64>,
        #[serde(default)]
        topics: Vec<Topic>,
    },
    NewDaily {
        #[serde(default)]
        level: Option<i64>,
        #[serde(default)]
        grade: Option<i64>,
    },
    SubmitAnswer {
        #[serde(rename = "problemId")]
        problem_id: String,
        answer: String,
        #[serde(default)]
        streak: Option<u32>,
    },
    Hint {
        #[serde(rename = "problemId")]
        problem_id: String,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Problem {
        problem: ProblemOut,
    },
    AnswerResult(AnswerOut),
    Hint {
        text: String,
    },
    Error {
        message: String,
    },
}

/// DTO used by both WS and HTTP for problem delivery.
/// The answer and worked steps stay on the server until grading; the hint
/// until it is asked for.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemOut {
    pub id: String,
    pub mode: Mode,
    pub topic_key: Topic,
    pub title: String,
    pub prompt: String,
    pub unit: String,
    pub format: AnswerFormat,
    pub level: u8,
    pub grade: u8,
}

/// Convert a full `Problem` (internal) to the public DTO.
pub fn to_out(p: &Problem, mode: Mode) -> ProblemOut {
    ProblemOut {
        id: p.id.clone(),
        mode,
        topic_key: p.topic_key,
        title: p.title.clone(),
        prompt: p.prompt.clone(),
        unit: p.unit.clone(),
        format: p.format,
        level: p.level,
        grade: p.grade,
    }
}

//
// HTTP request/response DTOs
//

/// `topics` is a comma separated list of topic keys; empty means mixed.
#[derive(Debug, Deserialize)]
pub struct ProblemQuery {
    pub level: Option<i64>,
    pub grade: Option<i64>,
    pub topics: Option<String>,
}

#[derive(Deserialize)]
pub struct AnswerIn {
    #[serde(rename = "problemId")]
    pub problem_id: String,
    pub answer: String,
    #[serde(default)]
    pub streak: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct AnswerOut {
    pub correct: bool,
    pub expected: String,
    pub unit: String,
    pub steps: Vec<String>,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward: Option<Reward>,
}

#[derive(Debug, Deserialize)]
pub struct HintQuery {
    #[serde(rename = "problemId")]
    pub problem_id: String,
}
#[derive(Serialize)]
pub struct HintOut {
    pub text: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorOut {
    pub error: String,
}
