use unfold_base::Scalar;
use unfold_lang::Expr;

/// Evaluate a runtime expression tree at `arg` by walking it.
///
/// Agrees with `Inline::at` on every shape a tag can encode.
pub fn interpret<A: Scalar>(expr: &Expr, arg: A) -> A {
    match expr {
        Expr::Const(n) => A::from_literal(*n),
        Expr::Arg => arg,
        Expr::Sum(l, r) => interpret(l, arg) + interpret(r, arg),
        Expr::Prod(l, r) => interpret(l, arg) * interpret(r, arg),
    }
}
