use funty::Floating;
use std::num::NonZeroUsize;
use unfold_base::Scalar;
use unfold_eval::{Inline, Lambda};

/// Left-rectangle approximation of the integral of `f` over `[a, b]` with
/// `n` equal subintervals, with `f` unfolded into the loop.
pub fn integrate<F, E>(f: Lambda<E, F>, a: F, b: F, n: NonZeroUsize) -> F
where
    F: Floating + Scalar,
    E: Inline<F>,
{
    let delta = (b - a) / F::from_count(n.get());
    let mut area = F::from_literal(0);
    let mut x = a;
    for _ in 0..n.get() {
        let y = f.at(x);
        area = area + y * delta;
        x = x + delta;
    }
    area
}

/// `integrate`, calling `f` through a pointer at every sample.
pub fn integrate_fp<F>(f: fn(F) -> F, a: F, b: F, n: NonZeroUsize) -> F
where
    F: Floating + Scalar,
{
    let delta = (b - a) / F::from_count(n.get());
    let mut area = F::from_literal(0);
    let mut x = a;
    for _ in 0..n.get() {
        let y = f(x);
        area = area + y * delta;
        x = x + delta;
    }
    area
}

pub fn square<F: Floating>(x: F) -> F {
    x * x
}
