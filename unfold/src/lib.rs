// Numeric integration, the demonstration that motivates the whole thing.
//
// `integrate` takes its integrand as a `Lambda`, so the loop body is the
// integrand's arithmetic unfolded in place. `integrate_fp` is the same loop
// the old-fashioned way, through a function pointer, kept as the baseline.
//
// Both use the left-rectangle rule and step `x` by accumulation rather than
// recomputing `a + i * delta`, so they agree bit for bit with each other.

mod config;
mod quad;


pub use config::Quadrature;
pub use quad::{integrate, integrate_fp, square};
