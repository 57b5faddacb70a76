use crate::{Arg, Const, Exp, Expr, Prod, Sum};
use std::sync::Arc;
use std::mem::size_of;
use test_log::test;

#[test]
fn test_operators_build_types() {
    let x = Arg::<f64>::new();
    let sq: Prod<Arg<f64>, Arg<f64>> = x * x;
    let poly: Sum<Prod<Arg<f64>, Arg<f64>>, Const<1>> = sq + Const::<1>::new();
    assert_eq!(poly.reify(), Expr::sum(Expr::prod(Expr::Arg, Expr::Arg), Expr::Const(1)));
}

#[test]
fn test_constant_on_either_side() {
    let x = Arg::<f64>::new();
    let two = Const::<2>::new();
    assert_eq!((two * x).reify().to_string(), "(2 * x)");
    assert_eq!((x * two).reify().to_string(), "(x * 2)");
    assert_eq!((two + two).reify().to_string(), "(2 + 2)");
}

#[test]
fn test_deep_nesting() {
    let x = Arg::<f32>::new();
    let c = Const::<{ -3 }>::new();
    let e = (x + c) * (x * (x + x)) + c;
    assert_eq!(e.reify().to_string(), "(((x + -3) * (x * (x + x))) + -3)");
    assert_eq!(e.reify().size(), 11);
}

#[test]
fn test_tags_are_zero_sized() {
    let x = Arg::<f64>::new();
    let e = (x * x + Const::<7>::new()) * x;
    assert_eq!(size_of::<Arg<f64>>(), 0);
    assert_eq!(size_of::<Const<7>>(), 0);
    assert_eq!(std::mem::size_of_val(&e), 0);
}

#[test]
fn test_dummy_matches_composed() {
    type Sq = Prod<Arg<f64>, Arg<f64>>;
    let x = Arg::<f64>::new();
    assert_eq!(Sq::dummy().reify(), (x * x).reify());
    assert_eq!(Sq::shape(), (x * x).reify());
}

#[test]
fn test_leaves() {
    assert!(Const::<0>::shape().is_leaf());
    assert!(Arg::<i32>::shape().is_leaf());
    assert!(!Sum::<Const<0>, Const<1>>::shape().is_leaf());
    assert_eq!(Const::<9>::VALUE, 9);
}

#[test]
fn test_debug() {
    let x = Arg::<f64>::new();
    assert_eq!(format!("{:?}", x * x), "Prod((x * x))");
    assert_eq!(format!("{:?}", Const::<4>::new()), "Const(4)");
}

#[test]
fn test_expr_serde() -> Result<(), Box<dyn std::error::Error>> {
    let x = Arg::<f64>::new();
    let tree = ((x * x + Const::<{ -5 }>::new()) * x).reify();
    let bytes = rmp_serde::to_vec(&tree)?;
    let back: Expr = rmp_serde::from_slice(&bytes)?;
    assert_eq!(back, tree);
    let Expr::Prod(l, r) = back else { panic!("expected a product") };
    assert_eq!(*r, Expr::Arg);
    assert!(matches!(&*l, Expr::Sum(_, c) if **c == Expr::Const(-5)));
    assert_eq!(Arc::strong_count(&l), 1);
    Ok(())
}
