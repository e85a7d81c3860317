//! Topic selection: grade-weighted draw over the eligible topics.
//!
//! Weights become a bag of keys, each topic replicated
//! `clamp(round(weight * 5), 2, 18)` times, and one key is drawn uniformly.
//! The replication bounds keep every eligible topic possible and stop any
//! single topic from taking over.

use rand::Rng;

use crate::domain::Topic;
use crate::util::choice;

const MIN_COPIES: i64 = 2;
const MAX_COPIES: i64 = 18;

/// Eligible topics in canonical order, without duplicates.
///
/// A non-empty `allowed` is taken verbatim; otherwise `universe` applies
/// (falling back to every topic if that is empty too).
pub fn eligible(allowed: &[Topic], universe: &[Topic]) -> Vec<Topic> {
  let source: &[Topic] = if !allowed.is_empty() {
    allowed
  } else if !universe.is_empty() {
    universe
  } else {
    &Topic::ALL
  };
  Topic::ALL.into_iter().filter(|t| source.contains(t)).collect()
}

/// Per-topic weight for a grade. Late grades lean on equations and percent.
pub fn weight(topic: Topic, grade: u8) -> f64 {
  let mut w = 1.0_f64;
  if grade >= 8 {
    w = match topic {
      Topic::Equations | Topic::Percent => w + 2.0,
      Topic::Geometry | Topic::Rates => w + 1.0,
      Topic::AddSub => (w - 0.4).max(0.6),
      _ => w,
    };
  }
  if grade >= 9 {
    w = match topic {
      Topic::AddSub => (w - 0.2).max(0.55),
      Topic::MulDiv => w + 0.5,
      _ => w,
    };
  }
  w
}

/// Number of copies a weight contributes to the bag.
pub fn copies(w: f64) -> usize {
  ((w * 5.0 + 0.5).floor() as i64).clamp(MIN_COPIES, MAX_COPIES) as usize
}

/// The flat sampling bag for a set of eligible topics.
pub fn bag(eligible: &[Topic], grade: u8) -> Vec<Topic> {
  eligible
    .iter()
    .flat_map(|&t| std::iter::repeat(t).take(copies(weight(t, grade))))
    .collect()
}

/// Pick one topic.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, allowed: &[Topic], universe: &[Topic], grade: u8) -> Topic {
  let pool = bag(&eligible(allowed, universe), grade);
  choice(rng, &pool)
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::{rngs::StdRng, SeedableRng};
  use std::collections::HashMap;

  #[test]
  fn copies_are_bounded() {
    assert_eq!(copies(1.0), 5);
    assert_eq!(copies(3.0), 15);
    assert_eq!(copies(0.1), 2);
    assert_eq!(copies(100.0), 18);
    assert_eq!(copies(1.5), 8);
  }

  #[test]
  fn grade_nudges() {
    assert_eq!(weight(Topic::Equations, 7), 1.0);
    assert_eq!(weight(Topic::Equations, 8), 3.0);
    assert_eq!(weight(Topic::Rates, 8), 2.0);
    assert!((weight(Topic::AddSub, 8) - 0.6).abs() < 1e-9);
    assert!((weight(Topic::AddSub, 9) - 0.55).abs() < 1e-9);
    assert_eq!(weight(Topic::MulDiv, 9), 1.5);
    assert_eq!(weight(Topic::Money, 9), 1.0);
  }

  #[test]
  fn grade_nine_bag_composition() {
    let b = bag(&Topic::ALL, 9);
    let count = |t: Topic| b.iter().filter(|x| **x == t).count();
    assert_eq!(count(Topic::AddSub), 3);
    assert_eq!(count(Topic::MulDiv), 8);
    assert_eq!(count(Topic::Percent), 15);
    assert_eq!(count(Topic::Equations), 15);
    assert_eq!(count(Topic::Geometry), 10);
    assert_eq!(count(Topic::Money), 5);
  }

  #[test]
  fn restriction_is_honored() {
    let mut rng = StdRng::seed_from_u64(42);
    let allowed = [Topic::Geometry, Topic::Money];
    for g in 1..=9 {
      for _ in 0..1000 {
        let t = pick(&mut rng, &allowed, &Topic::ALL, g);
        assert!(allowed.contains(&t));
      }
    }
  }

  #[test]
  fn explicit_choice_beats_the_universe() {
    let mut rng = StdRng::seed_from_u64(43);
    let narrow = [Topic::AddSub, Topic::MulDiv];
    for _ in 0..500 {
      assert_eq!(pick(&mut rng, &[Topic::Rates], &narrow, 5), Topic::Rates);
      assert!(narrow.contains(&pick(&mut rng, &[], &narrow, 5)));
    }
  }

  #[test]
  fn mixed_mode_reaches_every_topic() {
    let mut rng = StdRng::seed_from_u64(44);
    let mut seen: HashMap<Topic, usize> = HashMap::new();
    for _ in 0..2000 {
      *seen.entry(pick(&mut rng, &[], &[], 9)).or_default() += 1;
    }
    assert_eq!(seen.len(), Topic::ALL.len());
    // 15 of 66 slots vs 3 of 66
    assert!(seen[&Topic::Equations] > seen[&Topic::AddSub]);
  }

  #[test]
  fn duplicates_in_allowed_do_not_skew() {
    assert_eq!(eligible(&[Topic::Money, Topic::Money, Topic::AddSub], &[]), vec![Topic::AddSub, Topic::Money]);
  }
}
