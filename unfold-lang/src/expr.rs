use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

/// An expression tree that exists at run time.
///
/// Mirrors the tag types one-for-one; see `Exp::shape`. Children are shared
/// so that reifying a large tag repeatedly stays cheap to clone.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Expr {
    Const(i64),
    Arg,
    Sum(Arc<Expr>, Arc<Expr>),
    Prod(Arc<Expr>, Arc<Expr>),
}

impl Expr {
    pub fn sum(l: Expr, r: Expr) -> Expr {
        Expr::Sum(Arc::new(l), Arc::new(r))
    }

    pub fn prod(l: Expr, r: Expr) -> Expr {
        Expr::Prod(Arc::new(l), Arc::new(r))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Const(_) | Expr::Arg)
    }

    /// Number of nodes, leaves included.
    pub fn size(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::Arg => 1,
            Expr::Sum(l, r) | Expr::Prod(l, r) => 1 + l.size() + r.size(),
        }
    }
}

// Fully parenthesized, with the argument always called `x`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(n) => write!(f, "{}", n),
            Expr::Arg => f.write_str("x"),
            Expr::Sum(l, r) => write!(f, "({} + {})", l, r),
            Expr::Prod(l, r) => write!(f, "({} * {})", l, r),
        }
    }
}
