//! Geometry: rectangle area, packs needed to cover a floor, triangle area.

use rand::Rng;

use crate::difficulty::DifficultyParams;
use crate::domain::{ProblemDraft, Topic};
use crate::util::{chance, choice, fmt_num, rand_int, round_to};

const PACK_COVERAGE: [f64; 5] = [1.5, 2.0, 2.25, 2.5, 3.0];

pub fn generate<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams) -> ProblemDraft {
  let (g, l) = (p.grade as i64, p.level as i64);
  let w = rand_int(rng, 4, 12 + g + l / 2);
  let len = rand_int(rng, 5, 14 + g + l);

  if p.avoid_too_easy {
    return if chance(rng, 0.55) { make_packs(rng, w, len) } else { make_triangle(rng, p) };
  }
  if (g >= 8 || l >= 8) && chance(rng, 0.35) {
    return make_triangle(rng, p);
  }
  if (g >= 6 || l >= 6) && chance(rng, 0.55) {
    return make_packs(rng, w, len);
  }
  rect_area(w, len)
}

fn make_packs<R: Rng + ?Sized>(rng: &mut R, w: i64, len: i64) -> ProblemDraft {
  let cover = choice(rng, &PACK_COVERAGE);
  packs(w, len, cover)
}

fn make_triangle<R: Rng + ?Sized>(rng: &mut R, p: &DifficultyParams) -> ProblemDraft {
  let (g, l) = (p.grade as i64, p.level as i64);
  let b = rand_int(rng, 10, 45 + g + l * 2);
  let h = rand_int(rng, 8, 35 + g + l * 2);
  triangle(b, h)
}

pub fn rect_area(w: i64, len: i64) -> ProblemDraft {
  let area = w * len;
  ProblemDraft::integer(
    Topic::Geometry,
    "Areal",
    format!("Et rektangel er {} m bredt og {} m langt. Hvad er arealet?", w, len),
    area,
    "Areal = bredde × længde.",
    vec![format!("{} × {} = {} m²", w, len, area)],
  )
  .with_unit("m²")
}

/// Whole packs needed: `ceil(area / cover)`.
pub fn packs(w: i64, len: i64, cover: f64) -> ProblemDraft {
  let area = w * len;
  let exact = area as f64 / cover;
  let needed = exact.ceil() as i64;
  ProblemDraft::integer(
    Topic::Geometry,
    "Pakker",
    format!(
      "Et gulv er {} m × {} m ({} m²). En pakke dækker {} m². Hvor mange pakker? (afrund op)",
      w, len, area, fmt_num(cover)
    ),
    needed,
    "Areal/dækning → rund op.",
    vec![
      format!("Areal: {} × {} = {}", w, len, area),
      format!("{}/{} = {}", area, fmt_num(cover), fmt_num(round_to(exact, 2))),
      format!("Rund op = {}", needed),
    ],
  )
  .with_unit("pakker")
}

pub fn triangle(b: i64, h: i64) -> ProblemDraft {
  let ans = round_to((b * h) as f64 / 2.0, 2);
  ProblemDraft::decimal(
    Topic::Geometry,
    "Trekant",
    format!("En trekant har grundlinje {} cm og højde {} cm. Hvad er arealet?", b, h),
    ans,
    0.02,
    "1/2 × b × h.",
    vec![format!("1/2 × {} × {} = {}", b, h, fmt_num(ans))],
  )
  .with_unit("cm²")
}
