use unfold_base::Scalar;
use unfold_lang::{Arg, Const, Exp, Prod, Sum};

/// Compile-time evaluation of an expression tag at an argument of type `A`.
///
/// Implemented for exactly four shapes. Anything else, including an
/// argument tag evaluated at a type other than its own, fails to compile:
///
/// ```compile_fail
/// use unfold_eval::Inline;
/// use unfold_lang::Arg;
/// let _ = <Arg<f32> as Inline<f64>>::at(1.0);
/// ```
pub trait Inline<A>: Exp {
    fn at(arg: A) -> A;
}

impl<const N: i64, A: Scalar> Inline<A> for Const<N> {
    #[inline(always)]
    fn at(_arg: A) -> A {
        A::from_literal(N)
    }
}

impl<A: Scalar> Inline<A> for Arg<A> {
    #[inline(always)]
    fn at(arg: A) -> A {
        arg
    }
}

impl<A: Scalar, L: Inline<A>, R: Inline<A>> Inline<A> for Sum<L, R> {
    #[inline(always)]
    fn at(arg: A) -> A {
        L::at(arg) + R::at(arg)
    }
}

impl<A: Scalar, L: Inline<A>, R: Inline<A>> Inline<A> for Prod<L, R> {
    #[inline(always)]
    fn at(arg: A) -> A {
        L::at(arg) * R::at(arg)
    }
}

/// Evaluate `expr` at `arg`. The value of `expr` is never looked at; only
/// its type matters.
#[inline(always)]
pub fn inline<A, E: Inline<A>>(_expr: E, arg: A) -> A {
    E::at(arg)
}
