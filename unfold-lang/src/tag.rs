use crate::{Exp, Expr};
use std::{
    fmt,
    marker::PhantomData,
    ops::{Add, Mul},
};

/// A constant, known entirely from its type.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Const<const N: i64>;

/// The function's argument, of semantic type `T`.
pub struct Arg<T>(PhantomData<fn() -> T>);

/// `L + R`.
pub struct Sum<L, R>(PhantomData<fn() -> (L, R)>);

/// `L * R`.
pub struct Prod<L, R>(PhantomData<fn() -> (L, R)>);

impl<const N: i64> Const<N> {
    pub const VALUE: i64 = N;

    pub const fn new() -> Self {
        Const
    }
}

impl<T> Arg<T> {
    pub const fn new() -> Self {
        Arg(PhantomData)
    }
}

impl<L, R> Sum<L, R> {
    pub const fn new() -> Self {
        Sum(PhantomData)
    }
}

impl<L, R> Prod<L, R> {
    pub const fn new() -> Self {
        Prod(PhantomData)
    }
}

impl<const N: i64> Exp for Const<N> {
    fn shape() -> Expr {
        Expr::Const(N)
    }
}

impl<T: 'static> Exp for Arg<T> {
    fn shape() -> Expr {
        Expr::Arg
    }
}

impl<L: Exp, R: Exp> Exp for Sum<L, R> {
    fn shape() -> Expr {
        Expr::sum(L::shape(), R::shape())
    }
}

impl<L: Exp, R: Exp> Exp for Prod<L, R> {
    fn shape() -> Expr {
        Expr::prod(L::shape(), R::shape())
    }
}

// PhantomData-carrying tags get their marker impls by hand: deriving would
// put bounds on the type parameters, and `Arg<f64>` is `Copy` whether or
// not anything it mentions is.
macro_rules! phantom_tag {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> Clone for $ty {
            fn clone(&self) -> Self {
                *self
            }
        }
        impl<$($gen)*> Copy for $ty {}
        impl<$($gen)*> Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

phantom_tag!([T] Arg<T>);
phantom_tag!([L, R] Sum<L, R>);
phantom_tag!([L, R] Prod<L, R>);

// Every tag, leaf or compound, composes with every other tag, and prints
// as the tree it encodes.
macro_rules! compose {
    ($name:literal [$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*, Rhs: Exp> Add<Rhs> for $ty
        where
            Self: Exp,
        {
            type Output = Sum<Self, Rhs>;
            #[inline(always)]
            fn add(self, _rhs: Rhs) -> Sum<Self, Rhs> {
                Sum::new()
            }
        }

        impl<$($gen)*, Rhs: Exp> Mul<Rhs> for $ty
        where
            Self: Exp,
        {
            type Output = Prod<Self, Rhs>;
            #[inline(always)]
            fn mul(self, _rhs: Rhs) -> Prod<Self, Rhs> {
                Prod::new()
            }
        }

        impl<$($gen)*> fmt::Debug for $ty
        where
            Self: Exp,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $name, Self::shape())
            }
        }
    };
}

compose!("Const" [const N: i64] Const<N>);
compose!("Arg" [T] Arg<T>);
compose!("Sum" [L, R] Sum<L, R>);
compose!("Prod" [L, R] Prod<L, R>);
