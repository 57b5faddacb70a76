use funty::Floating;
use std::num::NonZeroUsize;
use tracing::debug;
use unfold_base::{err, Result, Scalar};
use unfold_eval::{Inline, Lambda};

const DEFAULT_SAMPLES: NonZeroUsize = match NonZeroUsize::new(10_000) {
    Some(n) => n,
    None => panic!("zero default sample count"),
};

/// Where and how finely to integrate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quadrature<F> {
    pub lo: F,
    pub hi: F,
    pub samples: NonZeroUsize,
}

// [0, 1] in 10k steps.
impl<F: Scalar> Default for Quadrature<F> {
    fn default() -> Self {
        Quadrature {
            lo: F::from_literal(0),
            hi: F::from_literal(1),
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl<F: Floating + Scalar> Quadrature<F> {
    pub fn new(lo: F, hi: F, samples: usize) -> Result<Self> {
        let Some(samples) = NonZeroUsize::new(samples) else {
            return Err(err("quadrature needs at least one sample"));
        };
        if !lo.is_finite() || !hi.is_finite() {
            return Err(err(format!("non-finite bounds [{}, {}]", lo, hi)));
        }
        Ok(Quadrature { lo, hi, samples })
    }

    pub fn width(&self) -> F {
        self.hi - self.lo
    }

    pub fn integrate<E: Inline<F>>(&self, f: Lambda<E, F>) -> F {
        debug!(target: "unfold", "integrating {} over [{}, {}], {} samples", f, self.lo, self.hi, self.samples);
        crate::integrate(f, self.lo, self.hi, self.samples)
    }

    pub fn integrate_fp(&self, f: fn(F) -> F) -> F {
        debug!(target: "unfold", "integrating {:p} over [{}, {}], {} samples", f, self.lo, self.hi, self.samples);
        crate::integrate_fp(f, self.lo, self.hi, self.samples)
    }
}
