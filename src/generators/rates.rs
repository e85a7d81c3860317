//! Rates: distance from speed (km/t) and a duration given in minutes.
//! The minutes-to-hours conversion is always its own step.

use rand::Rng;

use crate::difficulty::DifficultyParams;
use crate::domain::{ProblemDraft, Topic};
use crate::util::{choice, fmt_num, rand_int, round_to};

const MINUTES: [i64; 12] = [10, 15, 20, 25, 30, 35, 40, 45, 50, 60, 75, 90];

pub fn generate<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams) -> ProblemDraft {
  let (g, l) = (p.grade as i64, p.level as i64);
  let speed = rand_int(rng, 6 + g / 2, 12 + g + l / 2);
  let minutes = choice(rng, &MINUTES);
  distance(speed, minutes)
}

pub fn distance(speed: i64, minutes: i64) -> ProblemDraft {
  let hours = minutes as f64 / 60.0;
  let ans = round_to(speed as f64 * hours, 2);
  let shown = fmt_num(round_to(hours, 4));
  ProblemDraft::decimal(
    Topic::Rates,
    "Distance",
    format!("Du bevæger dig med {} km/t i {} minutter. Hvor langt?", speed, minutes),
    ans,
    0.02,
    "Hastighed × tid (i timer).",
    vec![format!("{}/60 = {} t", minutes, shown), format!("{} × {} = {}", speed, shown, fmt_num(ans))],
  )
  .with_unit("km")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::difficulty::resolve;
  use crate::generators::test_support::last_step_value;
  use crate::util::approx_equal;
  use rand::{rngs::StdRng, SeedableRng};

  #[test]
  fn half_hour_at_twelve() {
    let d = distance(12, 30);
    assert_eq!(d.answer, 6.0);
    assert_eq!(d.unit, "km");
    assert_eq!(d.steps, vec!["30/60 = 0.5 t", "12 × 0.5 = 6"]);
  }

  #[test]
  fn ten_minutes_is_rounded_in_steps_only() {
    let d = distance(20, 10);
    assert_eq!(d.steps[0], "10/60 = 0.1667 t");
    assert_eq!(d.answer, 3.33);
    // 20 × 0.1667 = 3.334, inside tolerance of the stored answer
    assert!(approx_equal(20.0 * 0.1667, d.answer, d.tolerance));
  }

  #[test]
  fn conversion_is_always_a_separate_step() {
    let mut rng = StdRng::seed_from_u64(30);
    for g in 1..=9 {
      let p = resolve(6, Some(g));
      for _ in 0..50 {
        let d = generate(&mut rng, &p);
        assert_eq!(d.steps.len(), 2);
        assert!(d.steps[0].contains("/60 = "));
        assert!((last_step_value(&d) - d.answer).abs() < 1e-9);
      }
    }
  }
}
