//! Property-based tests for surreal arithmetic and ordering.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{ArithContext, Surreal};

    // Strategy for small integers; depth grows linearly with magnitude
    fn small_int() -> impl Strategy<Value = i64> {
        -4i64..=4i64
    }

    // Strategy for dyadic rationals k / 2^m with a few fractional bits
    fn dyadic() -> impl Strategy<Value = f64> {
        (-12i32..=12i32, 0u32..=2u32).prop_map(|(k, m)| f64::from(k) / f64::from(1u32 << m))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn le_is_reflexive(x in dyadic()) {
            let a = Surreal::from_f64(x).unwrap();
            prop_assert!(a <= a);
            prop_assert_eq!(&a, &a);
        }

        #[test]
        fn order_matches_float_order(x in dyadic(), y in dyadic()) {
            let a = Surreal::from_f64(x).unwrap();
            let b = Surreal::from_f64(y).unwrap();
            prop_assert_eq!(a.cmp(&b), x.partial_cmp(&y).unwrap());
        }

        #[test]
        fn dyadic_round_trip(x in dyadic()) {
            let a = Surreal::from_f64(x).unwrap();
            prop_assert_eq!(a.to_f64(), x);
        }

        #[test]
        fn negation_is_involutive(x in dyadic()) {
            let a = Surreal::from_f64(x).unwrap();
            prop_assert_eq!(a.negate().negate(), a.clone());
            prop_assert_eq!(a.negate().to_f64(), -x);
        }

        #[test]
        fn add_commutative(a in small_int(), b in small_int()) {
            let mut ctx = ArithContext::new();
            let a = Surreal::from(a);
            let b = Surreal::from(b);
            let ab = ctx.add(&a, &b);
            let ba = ctx.add(&b, &a);
            prop_assert!(Surreal::ptr_eq(&ab, &ba));
        }

        #[test]
        fn add_associative(a in small_int(), b in small_int(), c in small_int()) {
            let mut ctx = ArithContext::new();
            let a = Surreal::from(a);
            let b = Surreal::from(b);
            let c = Surreal::from(c);
            let ab = ctx.add(&a, &b);
            let bc = ctx.add(&b, &c);
            prop_assert_eq!(ctx.add(&ab, &c), ctx.add(&a, &bc));
        }

        #[test]
        fn add_identity_and_inverse(x in dyadic()) {
            let mut ctx = ArithContext::new();
            let a = Surreal::from_f64(x).unwrap();
            prop_assert_eq!(ctx.add(&a, &Surreal::zero()), a.clone());
            prop_assert_eq!(ctx.add(&a, &a.negate()), Surreal::zero());
        }

        #[test]
        fn add_matches_float(x in dyadic(), y in dyadic()) {
            let mut ctx = ArithContext::new();
            let a = Surreal::from_f64(x).unwrap();
            let b = Surreal::from_f64(y).unwrap();
            prop_assert_eq!(ctx.add(&a, &b).to_f64(), x + y);
        }

        #[test]
        fn mul_identity_and_zero(a in small_int()) {
            let mut ctx = ArithContext::new();
            let a = Surreal::from(a);
            prop_assert_eq!(ctx.mul(&a, &Surreal::one()), a.clone());
            prop_assert_eq!(ctx.mul(&a, &Surreal::zero()), Surreal::zero());
        }

        #[test]
        fn mul_matches_integer_product(a in -3i64..=3i64, b in -3i64..=3i64) {
            let mut ctx = ArithContext::new();
            let product = ctx.mul(&Surreal::from(a), &Surreal::from(b));
            prop_assert_eq!(product, Surreal::from(a * b));
        }
    }
}
