//! Topic generators. Each topic module owns a handful of shapes and picks one
//! at random, conditioned on the difficulty flags.
//!
//! Every module follows the same split:
//!   - `generate` draws operands and chooses a shape;
//!   - pure shape builders (`pub fn`) turn fixed operands into a `ProblemDraft`.
//!
//! Answers are always computed from the operands, never from rendered text, and
//! `steps` replays the same arithmetic in the same order.

use rand::Rng;
use tracing::debug;

use crate::difficulty::DifficultyParams;
use crate::domain::{ProblemDraft, Topic};

pub mod addsub;
pub mod equations;
pub mod geometry;
pub mod money;
pub mod muldiv;
pub mod percent;
pub mod rates;

/// Upper bound on rejection-resampling rounds for one shape.
pub const MAX_RESAMPLES: u32 = 50;

/// Generate one draft for `topic`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, topic: Topic, params: &DifficultyParams) -> ProblemDraft {
  match topic {
    Topic::AddSub => addsub::generate(rng, params),
    Topic::MulDiv => muldiv::generate(rng, params),
    Topic::Percent => percent::generate(rng, params),
    Topic::Geometry => geometry::generate(rng, params),
    Topic::Equations => equations::generate(rng, params),
    Topic::Money => money::generate(rng, params),
    Topic::Rates => rates::generate(rng, params),
  }
}

/// Redraw until `draw` reports a valid candidate.
///
/// After `MAX_RESAMPLES` rejected rounds the last candidate is returned as is,
/// so generation always terminates.
pub(crate) fn resample<R, T, F>(rng: &mut R, shape: &'static str, mut draw: F) -> T
where
  R: Rng + ?Sized,
  F: FnMut(&mut R) -> (T, bool),
{
  let mut rounds = 0;
  loop {
    rounds += 1;
    let (candidate, valid) = draw(rng);
    if valid {
      return candidate;
    }
    if rounds >= MAX_RESAMPLES {
      debug!(target: "problem", shape, rounds, "Resample cap reached; keeping last candidate");
      return candidate;
    }
  }
}
