//! Problem factory: difficulty → topic → generator → stamped `Problem`.
//!
//! Training, arcade and daily differ only in the `DifficultyParams` they
//! resolve and the topic universe they draw from; all three run through the
//! same `assemble` path. The factory holds no mutable state, so one instance
//! can be shared freely across threads.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, instrument};
use uuid::Builder;

use crate::config::EngineConfig;
use crate::difficulty::{clamp_level, resolve, resolve_arcade, DifficultyParams};
use crate::domain::{Problem, Topic};
use crate::generators;
use crate::selector;

/// Which entry point produced a problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
  Training,
  Arcade,
  Daily,
}

#[derive(Clone, Debug, Default)]
pub struct ProblemFactory {
  config: EngineConfig,
}

impl ProblemFactory {
  pub fn new(config: EngineConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &EngineConfig {
    &self.config
  }

  /// Standard training problem. An empty `allowed` means mixed mode.
  #[instrument(level = "debug", skip(self, rng, allowed), fields(allowed = allowed.len()))]
  pub fn create_problem<R: Rng + ?Sized>(&self, rng: &mut R, level: i64, grade: Option<i64>, allowed: &[Topic]) -> Problem {
    let params = resolve(level, grade);
    self.assemble(rng, Mode::Training, &params, allowed, &Topic::ALL)
  }

  /// Easier arcade problem. Mixed mode is narrowed to the configured arcade
  /// topics; an explicit selection is used as given.
  #[instrument(level = "debug", skip(self, rng, allowed), fields(allowed = allowed.len()))]
  pub fn create_arcade_problem<R: Rng + ?Sized>(&self, rng: &mut R, level: i64, grade: Option<i64>, allowed: &[Topic]) -> Problem {
    let profile = &self.config.arcade;
    let params = resolve_arcade(level, grade, profile);
    self.assemble(rng, Mode::Arcade, &params, allowed, &profile.topics)
  }

  /// Daily stretch problem: always mixed, level boosted.
  #[instrument(level = "debug", skip(self, rng))]
  pub fn create_daily_problem<R: Rng + ?Sized>(&self, rng: &mut R, base_level: i64, grade: Option<i64>) -> Problem {
    let boosted = clamp_level(base_level) as i64 + self.config.daily.level_boost as i64;
    let params = resolve(boosted, grade);
    self.assemble(rng, Mode::Daily, &params, &[], &Topic::ALL)
  }

  fn assemble<R: Rng + ?Sized>(
    &self,
    rng: &mut R,
    mode: Mode,
    params: &DifficultyParams,
    allowed: &[Topic],
    universe: &[Topic],
  ) -> Problem {
    let topic = selector::pick(rng, allowed, universe, params.grade);
    let draft = generators::generate(rng, topic, params);
    let id = Builder::from_random_bytes(rng.gen()).into_uuid().to_string();
    debug!(
      target: "problem",
      ?mode, %topic, title = %draft.title, level = params.level, grade = params.grade, %id,
      "Problem generated"
    );
    Problem::from_draft(id, params.level, params.grade, draft)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::ArcadeProfile;
  use rand::{rngs::StdRng, SeedableRng};

  #[test]
  fn same_seed_same_problem() {
    let f = ProblemFactory::default();
    for seed in 0..50 {
      let a = f.create_problem(&mut StdRng::seed_from_u64(seed), 6, Some(7), &[]);
      let b = f.create_problem(&mut StdRng::seed_from_u64(seed), 6, Some(7), &[]);
      assert_eq!(a, b);
    }
  }

  #[test]
  fn ids_are_unique_across_calls() {
    let f = ProblemFactory::default();
    let mut rng = StdRng::seed_from_u64(1);
    let a = f.create_problem(&mut rng, 1, None, &[]);
    let b = f.create_problem(&mut rng, 1, None, &[]);
    assert_ne!(a.id, b.id);
    assert!(uuid::Uuid::parse_str(&a.id).is_ok());
  }

  #[test]
  fn echoes_clamped_coordinates() {
    let f = ProblemFactory::default();
    let p = f.create_problem(&mut StdRng::seed_from_u64(2), 40, None, &[]);
    assert_eq!((p.level, p.grade), (10, 5));
  }

  #[test]
  fn daily_boosts_level_within_bounds() {
    let f = ProblemFactory::default();
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(f.create_daily_problem(&mut rng, 3, Some(4)).level, 5);
    assert_eq!(f.create_daily_problem(&mut rng, 9, Some(4)).level, 10);
    assert_eq!(f.create_daily_problem(&mut rng, -3, Some(4)).level, 3);
  }

  #[test]
  fn arcade_mixed_mode_stays_in_fast_topics() {
    let f = ProblemFactory::default();
    let mut rng = StdRng::seed_from_u64(4);
    let fast = ArcadeProfile::default().topics;
    for _ in 0..1000 {
      let p = f.create_arcade_problem(&mut rng, 8, Some(9), &[]);
      assert!(fast.contains(&p.topic_key));
      assert_eq!((p.level, p.grade), (7, 8));
    }
  }

  #[test]
  fn arcade_respects_explicit_topics() {
    let f = ProblemFactory::default();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
      let p = f.create_arcade_problem(&mut rng, 5, Some(5), &[Topic::Geometry]);
      assert_eq!(p.topic_key, Topic::Geometry);
    }
  }
}
