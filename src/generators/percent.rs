//! Percentages: discount, percent-of, and reverse percent (original price from
//! the discounted one).
//!
//! With `fast_pools` only round percentages and multiples of ten are drawn,
//! and reverse percent is switched off through `allow_reverse_percent`.

use rand::Rng;

use crate::difficulty::DifficultyParams;
use crate::domain::{ProblemDraft, Topic};
use crate::util::{chance, choice, fmt_num, rand_int, round_to};

const FAST_PCT: [f64; 4] = [10.0, 20.0, 25.0, 50.0];
const BASIC_PCT: [f64; 5] = [10.0, 15.0, 20.0, 25.0, 30.0];
const ADVANCED_PCT: [f64; 9] = [5.0, 10.0, 12.5, 15.0, 20.0, 25.0, 30.0, 40.0, 50.0];
const REVERSE_PCT: [f64; 6] = [10.0, 20.0, 25.0, 30.0, 40.0, 50.0];

pub fn generate<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams) -> ProblemDraft {
  let advanced = p.grade >= 8 || p.level >= 7;

  if p.avoid_too_easy {
    if p.allow_reverse_percent && chance(rng, 0.55) {
      return make_reverse(rng, p);
    }
    return make_percent_of(rng, p);
  }
  if advanced && p.allow_reverse_percent && chance(rng, 0.28) {
    return make_reverse(rng, p);
  }
  if (p.grade >= 7 || p.level >= 7) && chance(rng, 0.45) {
    return make_percent_of(rng, p);
  }
  make_discount(rng, p)
}

fn base(p: &DifficultyParams) -> i64 {
  90.max(p.big_max)
}

fn pct_pool(p: &DifficultyParams) -> &'static [f64] {
  if p.fast_pools {
    &FAST_PCT
  } else if p.grade >= 8 || p.level >= 7 {
    &ADVANCED_PCT
  } else {
    &BASIC_PCT
  }
}

/// Draw from `[lo, hi]`; with `fast_pools`, multiples of ten only.
fn draw_amount<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams, lo: i64, hi: i64) -> i64 {
  if p.fast_pools {
    let tens_lo = (lo + 9) / 10;
    let tens_hi = (hi / 10).max(tens_lo);
    rand_int(rng, tens_lo, tens_hi) * 10
  } else {
    rand_int(rng, lo, hi)
  }
}

fn make_discount<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams) -> ProblemDraft {
  let b = base(p);
  let price = draw_amount(rng, p, (b as f64 * 0.7).floor() as i64, b);
  let pct = choice(rng, pct_pool(p));
  discount(price, pct)
}

fn make_percent_of<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams) -> ProblemDraft {
  let b = base(p);
  let num = draw_amount(rng, p, (b as f64 * 0.6).floor() as i64, b);
  let pct = choice(rng, pct_pool(p));
  percent_of(pct, num)
}

fn make_reverse<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams) -> ProblemDraft {
  let b = base(p);
  let pct = choice(rng, &REVERSE_PCT);
  let original = rand_int(rng, (b as f64 * 0.7).floor() as i64, b);
  reverse(pct, original)
}

pub fn discount(price: i64, pct: f64) -> ProblemDraft {
  let factor = 1.0 - pct / 100.0;
  let ans = round_to(price as f64 * factor, 2);
  let shown = fmt_num(round_to(factor, 4));
  ProblemDraft::decimal(
    Topic::Percent,
    "Rabat",
    format!("En vare koster {} kr. Der er {}% rabat. Hvad koster den efter rabat?", price, fmt_num(pct)),
    ans,
    0.01,
    "Pris × (1 − pct/100).",
    vec![
      format!("Faktor: 1 − {}/100 = {}", fmt_num(pct), shown),
      format!("{} × {} = {} kr", price, shown, fmt_num(ans)),
    ],
  )
  .with_unit("kr")
}

pub fn percent_of(pct: f64, num: i64) -> ProblemDraft {
  let ans = round_to(pct / 100.0 * num as f64, 2);
  let shown = fmt_num(round_to(pct / 100.0, 4));
  ProblemDraft::decimal(
    Topic::Percent,
    "Procent af tal",
    format!("Hvad er {}% af {}?", fmt_num(pct), num),
    ans,
    0.01,
    "(pct/100) × tal.",
    vec![
      format!("{}/100 = {}", fmt_num(pct), shown),
      format!("{} × {} = {}", shown, num, fmt_num(ans)),
    ],
  )
}

/// The learner sees only the discounted price and must undo the factor.
pub fn reverse(pct: f64, original: i64) -> ProblemDraft {
  let factor = 1.0 - pct / 100.0;
  let after = round_to(original as f64 * factor, 2);
  let ans = round_to(after / factor, 2);
  let shown = fmt_num(round_to(factor, 4));
  ProblemDraft::decimal(
    Topic::Percent,
    "Omvendt procent",
    format!("Efter {}% rabat koster varen {} kr. Hvad var prisen før rabat?", fmt_num(pct), fmt_num(after)),
    ans,
    0.02,
    "Efter ÷ (1 − pct/100).",
    vec![
      format!("Faktor: 1 − {}/100 = {}", fmt_num(pct), shown),
      format!("{} ÷ {} = {} kr", fmt_num(after), shown, fmt_num(ans)),
    ],
  )
  .with_unit("kr")
}
