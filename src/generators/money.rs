//! Money: shopping total and total after a discount.

use rand::Rng;

use crate::difficulty::DifficultyParams;
use crate::domain::{ProblemDraft, Topic};
use crate::util::{chance, choice, fmt_num, rand_int, round_to};

const DISCOUNT_PCT: [i64; 6] = [5, 10, 15, 20, 25, 30];

pub fn generate<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams) -> ProblemDraft {
  let g = p.grade as i64;
  let qty = rand_int(rng, 2, 7 + g / 2);
  let price = rand_int(rng, 8 + g, 35.max(p.big_max / 4));

  if p.avoid_too_easy || ((p.grade >= 5 || p.level >= 5) && chance(rng, 0.6)) {
    let pct = choice(rng, &DISCOUNT_PCT);
    return discounted_total(qty * price, pct);
  }
  budget(qty, price)
}

pub fn budget(qty: i64, price: i64) -> ProblemDraft {
  let subtotal = qty * price;
  ProblemDraft::integer(
    Topic::Money,
    "Budget",
    format!("Du køber {} ting á {} kr. Hvad er totalprisen?", qty, price),
    subtotal,
    "Antal × pris.",
    vec![format!("{} × {} = {}", qty, price, subtotal)],
  )
  .with_unit("kr")
}

pub fn discounted_total(subtotal: i64, pct: i64) -> ProblemDraft {
  let total = round_to(subtotal as f64 * (1.0 - pct as f64 / 100.0), 2);
  ProblemDraft::decimal(
    Topic::Money,
    "Rabat",
    format!("Totalen er {} kr. Du får {}% rabat. Hvad betaler du?", subtotal, pct),
    total,
    0.02,
    "Subtotal × (1 − pct/100).",
    vec![format!("{} × (1 − {}/100) = {}", subtotal, pct, fmt_num(total))],
  )
  .with_unit("kr")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::difficulty::resolve;
  use crate::domain::AnswerFormat;
  use rand::{rngs::StdRng, SeedableRng};

  #[test]
  fn budget_multiplies() {
    let d = budget(4, 23);
    assert_eq!(d.answer, 92.0);
    assert_eq!(d.unit, "kr");
    assert_eq!(d.format, AnswerFormat::Integer);
  }

  #[test]
  fn discounted_total_rounds_to_cents() {
    let d = discounted_total(135, 15);
    assert_eq!(d.answer, 114.75);
    assert_eq!(d.steps, vec!["135 × (1 − 15/100) = 114.75"]);
    assert_eq!(d.format, AnswerFormat::Decimal);
  }

  #[test]
  fn advanced_grade_always_discounts() {
    let mut rng = StdRng::seed_from_u64(12);
    let p = resolve(2, Some(9));
    for _ in 0..100 {
      assert_eq!(generate(&mut rng, &p).title, "Rabat");
    }
  }
}
