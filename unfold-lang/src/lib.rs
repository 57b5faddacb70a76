// The language here is as small as it gets: single-argument arithmetic
// over one scalar type, built from constants, the argument, sums and
// products.
//
// The twist is that an expression is not a value but a *type*. Writing
// `x * x + Const::<1>::new()` with `x: Arg<f64>` computes nothing; the
// overloaded operators just return a zero-sized value whose type is
// `Sum<Prod<Arg<f64>, Arg<f64>>, Const<1>>`. The whole syntax tree is
// folded into that type, and any generic code that receives it can unfold
// it again at compile time (see unfold-eval).
//
// `Expr` is the ordinary runtime tree for the same shapes. It exists so a
// tag can be printed, logged and compared, never so it can be evaluated in
// a hot loop.

mod expr;
mod tag;

#[cfg(test)]
mod test;

pub use expr::Expr;
pub use tag::{Arg, Const, Prod, Sum};

/// An expression tag: a type standing for one node of an expression tree.
///
/// Tags are zero-sized, so a value of one is always available for free via
/// `dummy` and carries no information beyond its type.
pub trait Exp: Copy + Default + Send + Sync + 'static {
    /// The runtime mirror of the tree encoded in this type.
    fn shape() -> Expr;

    fn dummy() -> Self {
        Self::default()
    }

    fn reify(self) -> Expr {
        Self::shape()
    }
}
