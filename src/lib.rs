//! FokusMat · math practice backend
//!
//! - Pure problem engine: difficulty model, topic selector, seven topic
//!   generators and the problem factory (training / arcade / daily)
//! - Grading + reward helpers for the session tracker
//! - Axum HTTP + WebSocket shell serving problems to the browser app
//!
//! The engine modules never touch `state` or `routes`; randomness is always
//! passed in as a `rand::Rng`.

pub mod config;
pub mod difficulty;
pub mod domain;
pub mod factory;
pub mod generators;
pub mod grading;
pub mod selector;
pub mod util;

pub mod logic;
pub mod protocol;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use domain::{AnswerFormat, Problem, Topic};
pub use factory::{Mode, ProblemFactory};
