//! Answer checking and progression rewards.
//!
//! The engine never grades on its own; these helpers are what a session
//! tracker (or the HTTP/WS shell) uses to compare typed input against a
//! `Problem` and to turn a correct answer into points and XP.

use serde::Serialize;

use crate::difficulty::{clamp_level, MAX_LEVEL};
use crate::domain::Problem;
use crate::util::{approx_equal, parse_number};

/// True if `input` matches the problem's answer. Unparsable input is simply wrong.
pub fn check_answer(problem: &Problem, input: &str) -> bool {
  let Some(got) = parse_number(input) else { return false };
  if problem.tolerance > 0.0 {
    approx_equal(got, problem.answer, problem.tolerance)
  } else {
    got == problem.answer
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Reward {
  pub points: u32,
  pub xp: u32,
}

/// Reward for a correct training answer. Arcade answers earn none.
/// `streak` is the run of correct answers before this one.
pub fn training_reward(problem_level: u8, streak: u32) -> Reward {
  let l = clamp_level(problem_level as i64) as u32;
  Reward {
    points: 10 + l * 2 + streak.min(12),
    xp: 14 + l * 4,
  }
}

/// Reward for solving the daily challenge.
pub fn daily_reward(problem_level: u8) -> Reward {
  let l = clamp_level(problem_level as i64) as u32;
  Reward {
    points: 35 + l * 2,
    xp: 30 + l * 3,
  }
}

pub fn xp_to_next_level(level: u8) -> u32 {
  90 + (clamp_level(level as i64) as u32 - 1) * 55
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
  pub level: u8,
  pub xp: u32,
  pub leveled_up: bool,
}

/// Add XP and level up at most once. Max level keeps collecting XP.
pub fn apply_xp(level: u8, xp: u32, gained: u32) -> Progress {
  let level = clamp_level(level as i64);
  let current = xp + gained;
  let need = xp_to_next_level(level);
  if current >= need && level < MAX_LEVEL {
    Progress { level: level + 1, xp: current - need, leveled_up: true }
  } else {
    Progress { level, xp: current, leveled_up: false }
  }
}
