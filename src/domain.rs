//! Domain models: topic keys, answer format, and the problem value objects.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Topic families the engine can generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
  AddSub,
  MulDiv,
  Percent,
  Geometry,
  Equations,
  Money,
  Rates,
}

impl Topic {
  /// The full universe, in canonical order ("mixed" mode).
  pub const ALL: [Topic; 7] = [
    Topic::AddSub,
    Topic::MulDiv,
    Topic::Percent,
    Topic::Geometry,
    Topic::Equations,
    Topic::Money,
    Topic::Rates,
  ];

  pub fn key(self) -> &'static str {
    match self {
      Topic::AddSub => "addsub",
      Topic::MulDiv => "muldiv",
      Topic::Percent => "percent",
      Topic::Geometry => "geometry",
      Topic::Equations => "equations",
      Topic::Money => "money",
      Topic::Rates => "rates",
    }
  }
}

impl fmt::Display for Topic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown topic key: {0}")]
pub struct ParseTopicError(pub String);

impl FromStr for Topic {
  type Err = ParseTopicError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let key = s.trim().to_ascii_lowercase();
    Topic::ALL
      .into_iter()
      .find(|t| t.key() == key)
      .ok_or(ParseTopicError(s.trim().to_string()))
  }
}

/// Parse a comma separated list like `"addsub, percent"`.
/// Empty segments are skipped; an empty list means "mixed".
pub fn parse_topic_list(raw: &str) -> Result<Vec<Topic>, ParseTopicError> {
  raw
    .split(',')
    .filter(|s| !s.trim().is_empty())
    .map(Topic::from_str)
    .collect()
}

/// Input affordance hint for the UI. Correctness is governed by `tolerance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerFormat {
  Integer,
  Decimal,
}

/// Generator output: everything except identity and the difficulty echo.
#[derive(Clone, Debug, PartialEq)]
pub struct ProblemDraft {
  pub topic: Topic,
  pub title: String,
  pub prompt: String,
  pub answer: f64,
  pub unit: String,
  pub tolerance: f64,
  pub format: AnswerFormat,
  pub hint: String,
  pub steps: Vec<String>,
}

impl ProblemDraft {
  /// Exact integer answer, no unit.
  pub fn integer(topic: Topic, title: &str, prompt: String, answer: i64, hint: &str, steps: Vec<String>) -> Self {
    Self {
      topic,
      title: title.into(),
      prompt,
      answer: answer as f64,
      unit: String::new(),
      tolerance: 0.0,
      format: AnswerFormat::Integer,
      hint: hint.into(),
      steps,
    }
  }

  /// Rounded decimal answer accepted within `tolerance`.
  pub fn decimal(topic: Topic, title: &str, prompt: String, answer: f64, tolerance: f64, hint: &str, steps: Vec<String>) -> Self {
    Self {
      topic,
      title: title.into(),
      prompt,
      answer,
      unit: String::new(),
      tolerance,
      format: AnswerFormat::Decimal,
      hint: hint.into(),
      steps,
    }
  }

  pub fn with_unit(mut self, unit: &str) -> Self {
    self.unit = unit.into();
    self
  }
}

/// A complete, immutable problem as handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
  pub id: String,
  pub topic_key: Topic,
  pub title: String,
  pub prompt: String,
  pub answer: f64,
  #[serde(default)] pub unit: String,
  #[serde(default)] pub tolerance: f64,
  pub format: AnswerFormat,
  #[serde(default)] pub hint: String,
  #[serde(default)] pub steps: Vec<String>,
  pub level: u8,
  pub grade: u8,
}

impl Problem {
  pub fn from_draft(id: String, level: u8, grade: u8, d: ProblemDraft) -> Self {
    Self {
      id,
      topic_key: d.topic,
      title: d.title,
      prompt: d.prompt,
      answer: d.answer,
      unit: d.unit,
      tolerance: d.tolerance,
      format: d.format,
      hint: d.hint,
      steps: d.steps,
      level,
      grade,
    }
  }

  /// Answer with its unit, e.g. `"80 kr"`.
  pub fn expected_display(&self) -> String {
    let n = crate::util::fmt_num(self.answer);
    if self.unit.is_empty() { n } else { format!("{} {}", n, self.unit) }
  }
}
