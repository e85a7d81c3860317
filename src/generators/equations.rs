//! Linear equations: `x + a = b` and, when allowed, `A·x + B = C`.
//! Both are built from a chosen `x`, so the solution is always a positive
//! whole number.

use rand::Rng;

use crate::difficulty::DifficultyParams;
use crate::domain::{ProblemDraft, Topic};
use crate::util::{chance, rand_int};

pub fn generate<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams) -> ProblemDraft {
  if p.allow_hard_equations && (p.avoid_too_easy || (p.grade >= 6 && chance(rng, 0.6))) {
    return make_two_step(rng, p);
  }
  make_one_step(rng, p)
}

fn make_one_step<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams) -> ProblemDraft {
  let small = p.small_max as f64;
  let a = rand_int(rng, 5, 12.max((small * 0.9).floor() as i64));
  let x = rand_int(rng, 2, 10.max(p.small_max / 2));
  one_step(a, x)
}

fn make_two_step<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams) -> ProblemDraft {
  let (g, l) = (p.grade as i64, p.level as i64);
  let a = rand_int(rng, 2, 4.max(g / 2 + 3));
  let x = rand_int(rng, 3, 12.max(g * 4 + l * 2));
  let b = rand_int(rng, 2, 25.max((p.small_max as f64 * 0.9).floor() as i64));
  two_step(a, x, b)
}

/// `x + a = a + x`.
pub fn one_step(a: i64, x: i64) -> ProblemDraft {
  let b = a + x;
  ProblemDraft::integer(
    Topic::Equations,
    "Ligning",
    format!("Løs: x + {} = {}. Hvad er x?", a, b),
    x,
    "Flyt a over (minus).",
    vec![format!("x = {} − {} = {}", b, a, x)],
  )
}

/// `A·x + B = C` with `C = A·x + B`.
pub fn two_step(a: i64, x: i64, b: i64) -> ProblemDraft {
  let c = a * x + b;
  let ax = c - b;
  ProblemDraft::integer(
    Topic::Equations,
    "Ligning",
    format!("Løs: {}x + {} = {}. Hvad er x?", a, b, c),
    x,
    "Minus B, divider med A.",
    vec![format!("{}x = {} − {} = {}", a, c, b, ax), format!("x = {}/{} = {}", ax, a, x)],
  )
}
