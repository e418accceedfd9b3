// tests that Clone, Debug, Display, and PartialEq are implemented for a
// distribution
#[macro_export]
macro_rules! test_basic_impls {
    ($fx: expr) => {
        #[test]
        fn should_impl_debug_display_clone_and_partialeq() {
            assert_eq!($fx, $fx.clone());
            let _s1 = format!("{:?}", $fx);
            let s2 = format!("{}", $fx);
            assert!(!s2.is_empty());
        }
    };
}

// tests that every draw of a distribution lands in its support
#[macro_export]
macro_rules! test_draws_supported {
    ($fx: expr) => {
        #[test]
        fn draws_should_be_supported() {
            use rand::SeedableRng;
            let mut rng = rand_xoshiro::Xoshiro256Plus::seed_from_u64(0xABCD);
            let fx = $fx;
            let xs: Vec<f64> = fx.sample(500, &mut rng);
            assert!(xs.iter().all(|x| fx.supports(x)));
        }
    };
}
