//! Small numeric helpers shared by the generators and the grading code.
//!
//! Randomness is always passed in as `&mut R: Rng`, never pulled from a global,
//! so a seeded generator reproduces every draw.

use rand::Rng;

/// Uniform integer in `[lo, hi]` (both inclusive).
/// A degenerate range (`hi < lo`) collapses to `lo`.
pub fn rand_int<R: Rng + ?Sized>(rng: &mut R, lo: i64, hi: i64) -> i64 {
  if hi <= lo { return lo; }
  rng.gen_range(lo..=hi)
}

/// Uniform pick from a non-empty slice of copyable values.
pub fn choice<R: Rng + ?Sized, T: Copy>(rng: &mut R, items: &[T]) -> T {
  items[rng.gen_range(0..items.len())]
}

/// True with probability `p` (one `f64` draw in `[0, 1)`).
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
  rng.gen::<f64>() < p
}

/// Round half-up at `dp` fractional digits.
pub fn round_to(n: f64, dp: i32) -> f64 {
  let p = 10f64.powi(dp);
  (n * p + 0.5).floor() / p
}

/// Shortest display form of a number: `6` not `6.0`, `0.5` not `0.50`.
pub fn fmt_num(n: f64) -> String {
  // Avoid "-0" after rounding tiny negatives.
  if n == 0.0 { return "0".into(); }
  format!("{}", n)
}

/// Tolerant parse of a typed answer.
///
/// Whitespace is dropped, `,` is accepted as decimal separator, and anything
/// outside `[0-9.+-eE]` is ignored. Empty or non-finite input yields `None`.
pub fn parse_number(input: &str) -> Option<f64> {
  let cleaned: String = input
    .trim()
    .chars()
    .filter(|c| !c.is_whitespace())
    .map(|c| if c == ',' { '.' } else { c })
    .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
    .collect();
  if cleaned.is_empty() { return None; }
  cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Relative comparison: `|a - b| <= tol * max(1, |b|)`.
pub fn approx_equal(a: f64, b: f64, tol: f64) -> bool {
  let scale = b.abs().max(1.0);
  (a - b).abs() <= tol * scale
}
