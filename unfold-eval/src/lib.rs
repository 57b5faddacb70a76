// Eval gives meaning to the expressions unfold-lang can build, two ways.
//
// `Inline` is the point of the exercise. It is a trait implemented once per
// tag shape, so `E::at(x)` for a concrete `E` is resolved entirely by
// monomorphization: every shape gets its own specialized body, each body
// calls only into its children's specialized bodies, and after inlining
// what is left is exactly the arithmetic a person would have written by
// hand. There is no tree at run time to walk.
//
// `interpret` is the other way, the plain tree-walker over `Expr`. It is
// here as the reference the inlined path is checked against, and for
// expressions that only exist at run time.

mod inline;
mod interp;
mod lambda;


pub use inline::{inline, Inline};
pub use interp::interpret;
pub use lambda::{lambda, Lambda};
