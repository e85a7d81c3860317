//! Multiplication and division.
//!
//! Integer division is only posed as `(q × d) ÷ d`, so the quotient is whole by
//! construction. The sharing word problem is the one place a remainder shows
//! up, and then only as a bonus line in `steps`.

use rand::Rng;

use crate::difficulty::DifficultyParams;
use crate::domain::{ProblemDraft, Topic};
use crate::util::{chance, fmt_num, rand_int, round_to};

pub fn generate<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams) -> ProblemDraft {
  let max = 8.max((p.small_max as f64 * 0.95).floor() as i64);

  if p.avoid_too_easy {
    return if chance(rng, 0.55) { make_share(rng, p, max) } else { make_grouped(rng, max) };
  }
  if p.allow_mixed_ops && chance(rng, 0.30) {
    return make_grouped(rng, max);
  }
  if p.allow_multi_step && chance(rng, p.multi_step_chance) {
    return make_share(rng, p, max);
  }
  make_simple(rng, max)
}

fn make_simple<R: Rng + ?Sized>(rng: &mut R, max: i64) -> ProblemDraft {
  let a = rand_int(rng, 2, max);
  let b = rand_int(rng, 2, max);
  if chance(rng, 0.5) { multiply(a, b) } else { divide(a, b) }
}

fn make_share<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams, max: i64) -> ProblemDraft {
  let packs = rand_int(rng, 3, 8.max(max / 2));
  let each = rand_int(rng, 4, max);
  let people = rand_int(rng, 2, 8 + p.grade as i64 / 2);
  share(packs, each, people)
}

fn make_grouped<R: Rng + ?Sized>(rng: &mut R, max: i64) -> ProblemDraft {
  let m = rand_int(rng, 3, 12);
  let x = rand_int(rng, 5, max);
  let y = rand_int(rng, 5, max);
  grouped_product(m, x, y)
}

pub fn multiply(a: i64, b: i64) -> ProblemDraft {
  let total = a * b;
  ProblemDraft::integer(
    Topic::MulDiv,
    "Gange",
    format!("Regn ud: {} × {}", a, b),
    total,
    "Gang tallene.",
    vec![format!("{} × {} = {}", a, b, total)],
  )
}

/// Poses `(quotient × divisor) ÷ divisor`.
pub fn divide(quotient: i64, divisor: i64) -> ProblemDraft {
  let total = quotient * divisor;
  ProblemDraft::integer(
    Topic::MulDiv,
    "Division",
    format!("Regn ud: {} ÷ {}", total, divisor),
    quotient,
    "Divider total med b.",
    vec![format!("{} ÷ {} = {}", total, divisor, quotient)],
  )
}

/// `packs × each` items shared by `people`; the answer is the whole share.
pub fn share(packs: i64, each: i64, people: i64) -> ProblemDraft {
  let total = packs * each;
  let per = total / people;
  let used = per * people;
  let rest = total - used;
  let rest_line = if rest > 0 { format!("Rest (bonus): {}", rest) } else { "Ingen rest.".to_string() };
  ProblemDraft::integer(
    Topic::MulDiv,
    "Flere trin",
    format!(
      "Du har {} pakker med {} i hver ({} i alt). Del ligeligt mellem {} personer. Hvor mange får hver? (heltal)",
      packs, each, total, people
    ),
    per,
    "Find total og divider.",
    vec![
      format!("{} × {} = {}", packs, each, total),
      format!("{} ÷ {} = {}", total, people, fmt_num(round_to(total as f64 / people as f64, 2))),
      format!("Heltal = {}/{} = {}", used, people, per),
      rest_line,
    ],
  )
}

/// `m × (x + y)`.
pub fn grouped_product(m: i64, x: i64, y: i64) -> ProblemDraft {
  let inside = x + y;
  let ans = m * inside;
  ProblemDraft::integer(
    Topic::MulDiv,
    "Parentes",
    format!("Regn ud: {} × ({} + {})", m, x, y),
    ans,
    "Først parentesen.",
    vec![format!("{} + {} = {}", x, y, inside), format!("{} × {} = {}", m, inside, ans)],
  )
}
