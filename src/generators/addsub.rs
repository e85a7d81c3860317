//! Addition and subtraction: single step, three terms (optionally with
//! parentheses), and one-decimal three-term sums.

use rand::Rng;

use super::resample;
use crate::difficulty::DifficultyParams;
use crate::domain::{ProblemDraft, Topic};
use crate::util::{chance, choice, fmt_num, rand_int, round_to};

/// Three-term layouts. The first two are evaluated strictly left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThreeTermForm {
  /// a + b − c
  PlusMinus,
  /// a − b + c
  MinusPlus,
  /// (a + b) − c
  GroupedSum,
  /// a − (b − c)
  GroupedDifference,
}

const PLAIN_FORMS: [ThreeTermForm; 3] = [ThreeTermForm::PlusMinus, ThreeTermForm::GroupedSum, ThreeTermForm::MinusPlus];
const MIXED_FORMS: [ThreeTermForm; 4] = [
  ThreeTermForm::PlusMinus,
  ThreeTermForm::MinusPlus,
  ThreeTermForm::GroupedSum,
  ThreeTermForm::GroupedDifference,
];

pub fn generate<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams) -> ProblemDraft {
  if p.avoid_too_easy {
    if p.allow_decimals && chance(rng, 0.35) {
      return make_decimals(rng, p);
    }
    return make_three_term(rng, p);
  }
  if p.allow_multi_step && chance(rng, p.multi_step_chance) {
    if p.allow_decimals && p.grade >= 7 && chance(rng, 0.25) {
      return make_decimals(rng, p);
    }
    return make_three_term(rng, p);
  }
  make_easy(rng, p)
}

fn make_easy<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams) -> ProblemDraft {
  let lo = 2 + p.grade as i64;
  let hi = 12.max((p.small_max as f64 * 0.7).floor() as i64);
  let subtract = chance(rng, 0.5);
  let a = rand_int(rng, lo, hi);
  let b = rand_int(rng, lo, hi);
  if !subtract {
    return plus(a, b);
  }
  if p.allow_negatives {
    minus(a, b)
  } else {
    // Bigger minus smaller keeps the pair uniform without a redraw.
    minus_ordered(a.max(b), a.min(b))
  }
}

fn make_three_term<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams) -> ProblemDraft {
  let big = p.big_max as f64;
  let forms: &[ThreeTermForm] = if p.allow_mixed_ops { &MIXED_FORMS } else { &PLAIN_FORMS };
  resample(rng, "addsub.three_term", |rng| {
    let a = rand_int(rng, (big * 0.25).floor() as i64, (big * 0.75).floor() as i64);
    let b = rand_int(rng, (big * 0.15).floor() as i64, (big * 0.6).floor() as i64);
    let c = rand_int(rng, (big * 0.12).floor() as i64, (big * 0.55).floor() as i64);
    let form = choice(rng, forms);
    let (draft, lowest) = three_term(form, a, b, c);
    (draft, p.allow_negatives || lowest >= 0)
  })
}

fn make_decimals<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams) -> ProblemDraft {
  let hi = (p.big_max as f64 * 0.7).floor() as i64;
  resample(rng, "addsub.decimals", |rng| {
    let a = round_to(rand_int(rng, 10, hi) as f64 / 10.0, 1);
    let b = round_to(rand_int(rng, 10, hi) as f64 / 10.0, 1);
    let c = round_to(rand_int(rng, 10, hi) as f64 / 10.0, 1);
    let draft = decimals(a, b, c);
    let valid = p.allow_negatives || draft.answer >= 0.0;
    (draft, valid)
  })
}

pub fn plus(a: i64, b: i64) -> ProblemDraft {
  ProblemDraft::integer(
    Topic::AddSub,
    "Plus",
    format!("Regn ud: {} + {}", a, b),
    a + b,
    "Læg tallene sammen.",
    vec![format!("{} + {} = {}", a, b, a + b)],
  )
}

pub fn minus(a: i64, b: i64) -> ProblemDraft {
  ProblemDraft::integer(
    Topic::AddSub,
    "Minus",
    format!("Regn ud: {} − {}", a, b),
    a - b,
    "Træk b fra a.",
    vec![format!("{} − {} = {}", a, b, a - b)],
  )
}

/// `hi − lo` with `hi >= lo`.
pub fn minus_ordered(hi: i64, lo: i64) -> ProblemDraft {
  ProblemDraft {
    hint: "Træk det lille tal fra det store.".into(),
    ..minus(hi, lo)
  }
}

/// Build a three-term problem. The second value is the smallest number the
/// solver meets along the way (intermediates and answer).
pub fn three_term(form: ThreeTermForm, a: i64, b: i64, c: i64) -> (ProblemDraft, i64) {
  match form {
    ThreeTermForm::PlusMinus => {
      let first = a + b;
      let ans = first - c;
      let d = ProblemDraft::integer(
        Topic::AddSub,
        "3-led",
        format!("Regn ud: {} + {} − {}", a, b, c),
        ans,
        "Regn fra venstre mod højre.",
        vec![format!("{} + {} = {}", a, b, first), format!("{} − {} = {}", first, c, ans)],
      );
      (d, first.min(ans))
    }
    ThreeTermForm::MinusPlus => {
      let first = a - b;
      let ans = first + c;
      let d = ProblemDraft::integer(
        Topic::AddSub,
        "3-led",
        format!("Regn ud: {} − {} + {}", a, b, c),
        ans,
        "Regn fra venstre mod højre.",
        vec![format!("{} − {} = {}", a, b, first), format!("{} + {} = {}", first, c, ans)],
      );
      (d, first.min(ans))
    }
    ThreeTermForm::GroupedSum => {
      let inside = a + b;
      let ans = inside - c;
      let d = ProblemDraft::integer(
        Topic::AddSub,
        "Parentes",
        format!("Regn ud: ({} + {}) − {}", a, b, c),
        ans,
        "Først parentesen.",
        vec![format!("{} + {} = {}", a, b, inside), format!("{} − {} = {}", inside, c, ans)],
      );
      (d, inside.min(ans))
    }
    ThreeTermForm::GroupedDifference => {
      let inside = b - c;
      // a − (b − c) = a − b + c
      let ans = a - b + c;
      let d = ProblemDraft::integer(
        Topic::AddSub,
        "Parentes",
        format!("Regn ud: {} − ({} − {})", a, b, c),
        ans,
        "Minus foran en parentes skifter fortegn: a − (b − c) = a − b + c.",
        vec![format!("{} − {} = {}", b, c, inside), format!("{} − {} = {}", a, inside, ans)],
      );
      (d, inside.min(ans))
    }
  }
}

/// `a + b − c` on one-decimal operands, rounded to one digit.
pub fn decimals(a: f64, b: f64, c: f64) -> ProblemDraft {
  let first = round_to(a + b, 1);
  let ans = round_to(a + b - c, 1);
  ProblemDraft::decimal(
    Topic::AddSub,
    "Decimal",
    format!("Regn ud: {} + {} − {}", fmt_num(a), fmt_num(b), fmt_num(c)),
    ans,
    0.02,
    "Regn fra venstre mod højre.",
    vec![
      format!("{} + {} = {}", fmt_num(a), fmt_num(b), fmt_num(first)),
      format!("{} − {} = {}", fmt_num(first), fmt_num(c), fmt_num(ans)),
    ],
  )
}
