use crate::Inline;
use std::{fmt, marker::PhantomData};
use tracing::trace;
use unfold_base::Scalar;
use unfold_lang::{Arg, Expr};

/// A single-argument anonymous function whose body is folded into its type.
///
/// Zero-sized, like the tags it wraps. Wherever one is applied the body is
/// unfolded in place.
pub struct Lambda<E, A> {
    body: E,
    arg: PhantomData<fn(A) -> A>,
}

impl<E: Copy, A> Clone for Lambda<E, A> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<E: Copy, A> Copy for Lambda<E, A> {}

/// Bind `arg` as the parameter of `body`: `lambda(x, x * x)`.
pub fn lambda<A: Scalar, E: Inline<A>>(_arg: Arg<A>, body: E) -> Lambda<E, A> {
    trace!(target: "unfold", "lambda x. {}", E::shape());
    Lambda {
        body,
        arg: PhantomData,
    }
}

impl<A: Scalar, E: Inline<A>> Lambda<E, A> {
    #[inline(always)]
    pub fn at(self, arg: A) -> A {
        E::at(arg)
    }

    /// The same function as an ordinary function pointer, for call sites
    /// that can't be made generic. Calls through it are not unfolded.
    pub fn as_fn(self) -> fn(A) -> A {
        <E as Inline<A>>::at
    }

    pub fn body(self) -> E {
        self.body
    }

    pub fn reify(self) -> Expr {
        E::shape()
    }
}

impl<A: Scalar, E: Inline<A>> fmt::Display for Lambda<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|x| {}", E::shape())
    }
}

impl<A: Scalar, E: Inline<A>> fmt::Debug for Lambda<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = E::shape();
        f.debug_struct("Lambda").field("body", &body).finish()
    }
}
