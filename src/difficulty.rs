//! Difficulty model: maps (level, grade) to generation bounds and feature flags.
//!
//! Inputs are never rejected, only clamped: level to 1..=10, grade to 1..=9
//! (missing grade means 5). The feature thresholds are fixed constants.
//!
//! Arcade reuses the same resolver on shifted coordinates and then switches
//! off everything that slows answering down (see `resolve_arcade`).

use serde::Serialize;

use crate::config::ArcadeProfile;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 10;
pub const MIN_GRADE: u8 = 1;
pub const MAX_GRADE: u8 = 9;
pub const DEFAULT_GRADE: i64 = 5;

/// Derived per call, never cached.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DifficultyParams {
  /// Clamped level.
  pub level: u8,
  /// Clamped grade.
  pub grade: u8,
  /// Operand bound for single-step shapes.
  pub small_max: i64,
  /// Operand bound for multi-term shapes.
  pub big_max: i64,
  pub allow_decimals: bool,
  pub allow_multi_step: bool,
  pub allow_negatives: bool,
  /// Parenthesized forms.
  pub allow_mixed_ops: bool,
  pub allow_hard_equations: bool,
  pub multi_step_chance: f64,
  /// Suppresses single-step shapes ("advanced" grade 9).
  pub avoid_too_easy: bool,
  /// Round percentages and prices only (arcade pacing).
  pub fast_pools: bool,
  pub allow_reverse_percent: bool,
}

pub fn clamp_level(level: i64) -> u8 {
  level.clamp(MIN_LEVEL as i64, MAX_LEVEL as i64) as u8
}

pub fn clamp_grade(grade: Option<i64>) -> u8 {
  grade.unwrap_or(DEFAULT_GRADE).clamp(MIN_GRADE as i64, MAX_GRADE as i64) as u8
}

fn js_round(x: f64) -> i64 {
  (x + 0.5).floor() as i64
}

/// Training parameters for the given coordinates.
pub fn resolve(level: i64, grade: Option<i64>) -> DifficultyParams {
  let l = clamp_level(level);
  let g = clamp_grade(grade);
  let (lf, gf) = (l as f64, g as f64);

  let grade_factor = 1.0 + (gf - 1.0) * 0.22;
  let level_factor = 1.0 + (lf - 1.0) * 0.08;
  let growth = grade_factor * (0.95 + level_factor * 0.35);

  let small_max = js_round((10.0 + lf * 7.0) * growth);
  let big_max = js_round((30.0 + lf * 22.0) * growth);

  let base_chance = 0.10 + lf * 0.05 + (gf - 1.0) * 0.06;
  let boosted = if g >= 8 { base_chance.max(0.55) } else { base_chance };
  let multi_step_chance = boosted.clamp(0.12, 0.82);

  DifficultyParams {
    level: l,
    grade: g,
    small_max,
    big_max,
    allow_decimals: l >= 3 || g >= 6,
    allow_multi_step: l >= 4 || g >= 6,
    allow_negatives: l >= 5 || g >= 7,
    allow_mixed_ops: l >= 6 || g >= 7,
    allow_hard_equations: (l >= 5 && g >= 6) || g >= 8,
    multi_step_chance,
    avoid_too_easy: g >= 9,
    fast_pools: false,
    allow_reverse_percent: true,
  }
}

/// Easier parameter set for the arcade: coordinates shifted down by the
/// profile offsets, single-step only, no hard equations, round pools.
pub fn resolve_arcade(level: i64, grade: Option<i64>, profile: &ArcadeProfile) -> DifficultyParams {
  let l = clamp_level(level) as i64 - profile.level_offset as i64;
  let g = clamp_grade(grade) as i64 - profile.grade_offset as i64;
  let base = resolve(l, Some(g));

  DifficultyParams {
    allow_multi_step: false,
    allow_hard_equations: false,
    avoid_too_easy: false,
    multi_step_chance: profile.multi_step_chance.clamp(0.0, 1.0),
    fast_pools: true,
    allow_reverse_percent: false,
    ..base
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn level_one_grade_five_matches_formula() {
    let p = resolve(1, Some(5));
    assert_eq!((p.level, p.grade), (1, 5));
    // (10 + 7) * 1.88 * 1.30 = 41.548
    assert_eq!(p.small_max, 42);
    // (30 + 22) * 1.88 * 1.30 = 127.088
    assert_eq!(p.big_max, 127);
    assert!(!p.allow_decimals);
    assert!(!p.allow_negatives);
    assert!(!p.allow_multi_step);
    assert!(!p.avoid_too_easy);
  }

  #[test]
  fn inputs_are_clamped_and_grade_defaults_to_five() {
    let p = resolve(-4, None);
    assert_eq!((p.level, p.grade), (1, 5));
    let p = resolve(99, Some(42));
    assert_eq!((p.level, p.grade), (10, 9));
    let p = resolve(3, Some(0));
    assert_eq!(p.grade, 1);
  }

  #[test]
  fn feature_thresholds() {
    assert!(resolve(3, Some(1)).allow_decimals);
    assert!(resolve(1, Some(6)).allow_decimals);
    assert!(resolve(4, Some(1)).allow_multi_step);
    assert!(!resolve(4, Some(1)).allow_negatives);
    assert!(resolve(5, Some(1)).allow_negatives);
    assert!(resolve(1, Some(7)).allow_negatives);
    assert!(resolve(6, Some(1)).allow_mixed_ops);
    assert!(!resolve(5, Some(5)).allow_hard_equations);
    assert!(resolve(5, Some(6)).allow_hard_equations);
    assert!(resolve(1, Some(8)).allow_hard_equations);
    assert!(resolve(1, Some(9)).avoid_too_easy);
    assert!(!resolve(10, Some(8)).avoid_too_easy);
  }

  #[test]
  fn multi_step_chance_is_bounded_and_boosted_late() {
    assert!((resolve(1, Some(1)).multi_step_chance - 0.15).abs() < 1e-9);
    assert!((resolve(1, Some(8)).multi_step_chance - 0.57).abs() < 1e-9);
    assert!((resolve(1, Some(8)).multi_step_chance) >= 0.55);
    assert!((resolve(10, Some(9)).multi_step_chance - 0.82).abs() < 1e-9);
    for l in 1..=10 {
      for g in 1..=9 {
        let c = resolve(l, Some(g)).multi_step_chance;
        assert!((0.12..=0.82).contains(&c));
      }
    }
  }

  #[test]
  fn bounds_are_monotonic_in_level_and_grade() {
    for l in 1..=10 {
      for g in 1..=9 {
        let p = resolve(l, Some(g));
        if l < 10 {
          let up = resolve(l + 1, Some(g));
          assert!(up.small_max >= p.small_max && up.big_max >= p.big_max);
        }
        if g < 9 {
          let up = resolve(l, Some(g + 1));
          assert!(up.small_max >= p.small_max && up.big_max >= p.big_max);
        }
        assert!(p.big_max > p.small_max);
      }
    }
  }

  #[test]
  fn arcade_is_easier_than_training() {
    let profile = ArcadeProfile::default();
    for l in 1..=10 {
      for g in 1..=9 {
        let t = resolve(l, Some(g));
        let a = resolve_arcade(l, Some(g), &profile);
        assert!(a.small_max <= t.small_max);
        assert!(a.big_max <= t.big_max);
        assert!(!a.allow_multi_step);
        assert!(!a.allow_hard_equations);
        assert!(!a.avoid_too_easy);
        assert!(!a.allow_reverse_percent);
        assert!(a.fast_pools);
        assert!((a.multi_step_chance - 0.12).abs() < 1e-9);
      }
    }
  }

  #[test]
  fn arcade_shifts_coordinates_down() {
    let a = resolve_arcade(5, Some(6), &ArcadeProfile::default());
    assert_eq!((a.level, a.grade), (4, 5));
    let a = resolve_arcade(1, Some(1), &ArcadeProfile::default());
    assert_eq!((a.level, a.grade), (1, 1));
  }
}
