use funty::Numeric;

/// A primitive number an expression can be evaluated at.
///
/// `funty::Numeric` supplies the arithmetic; this adds the two conversions
/// the rest of the system needs and that `funty` only offers in the other
/// direction: turning an integer literal baked into a type into a value,
/// and turning a sample count into a divisor.
///
/// Both conversions have `as`-cast semantics, so a negative literal
/// evaluated at an unsigned type wraps.
pub trait Scalar: Numeric {
    fn from_literal(lit: i64) -> Self;
    fn from_count(n: usize) -> Self;
}

macro_rules! scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn from_literal(lit: i64) -> Self {
                    lit as $t
                }
                #[inline(always)]
                fn from_count(n: usize) -> Self {
                    n as $t
                }
            }
        )*
    };
}

scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
