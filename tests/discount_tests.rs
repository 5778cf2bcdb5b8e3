//! Discount strategies and calculator delegation.

use proptest::prelude::*;
use solid_patterns::discount::{self, FnDiscount};
use solid_patterns::{
    CustomerTier, DiscountCalculator, DiscountStrategy, PremiumDiscount, RegularDiscount,
    SuperVipDiscount, VipDiscount,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_discounts_on_one_hundred() {
    assert!(close(RegularDiscount.discount(100.0), 10.0));
    assert!(close(PremiumDiscount.discount(100.0), 15.0));
    assert!(close(VipDiscount.discount(100.0), 20.0));
    assert!(close(SuperVipDiscount.discount(100.0), 25.0));
}

#[test]
fn test_calculator_with_each_strategy() {
    assert!(close(DiscountCalculator::new(RegularDiscount).calculate(100.0), 10.0));
    assert!(close(DiscountCalculator::new(PremiumDiscount).calculate(100.0), 15.0));
    assert!(close(DiscountCalculator::new(VipDiscount).calculate(100.0), 20.0));
    assert!(close(DiscountCalculator::new(SuperVipDiscount).calculate(100.0), 25.0));
}

// Defined here, outside the library: nothing in the crate knows about it.
struct BlackFridayDiscount {
    cap: f64,
}

impl DiscountStrategy for BlackFridayDiscount {
    fn discount(&self, amount: f64) -> f64 {
        (amount * 0.5).min(self.cap)
    }
}

#[test]
fn test_new_strategy_by_composition_only() {
    let calculator = DiscountCalculator::new(BlackFridayDiscount { cap: 30.0 });
    assert!(close(calculator.calculate(40.0), 20.0));
    assert!(close(calculator.calculate(100.0), 30.0));
    assert!(close(calculator.strategy().cap, 30.0));
}

#[test]
fn test_closure_strategy() {
    let calculator: DiscountCalculator<FnDiscount<_>> =
        DiscountCalculator::new(discount::from_fn(|amount| amount - 1.0));
    assert!(close(calculator.calculate(3.0), 2.0));
}

#[test]
fn test_borrowed_and_boxed_strategies() {
    let vip = VipDiscount;
    let by_ref = DiscountCalculator::new(&vip);
    assert!(close(by_ref.calculate(50.0), 10.0));

    let strategies: Vec<Box<dyn DiscountStrategy>> = vec![
        Box::new(RegularDiscount),
        Box::new(CustomerTier::Premium),
        Box::new(BlackFridayDiscount { cap: 1.0 }),
    ];
    let results: Vec<f64> = strategies
        .into_iter()
        .map(|s| DiscountCalculator::new(s).calculate(100.0))
        .collect();
    assert!(close(results[0], 10.0));
    assert!(close(results[1], 15.0));
    assert!(close(results[2], 1.0));
}

#[test]
fn test_into_inner_returns_same_strategy() {
    let calculator = DiscountCalculator::new(CustomerTier::Vip);
    assert_eq!(*calculator.as_ref(), CustomerTier::Vip);
    assert_eq!(calculator.into_inner(), CustomerTier::Vip);
}

#[test]
fn test_strategies_are_shareable_across_threads() {
    let calculator = std::sync::Arc::new(DiscountCalculator::new(PremiumDiscount));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let calculator = std::sync::Arc::clone(&calculator);
            std::thread::spawn(move || calculator.calculate(f64::from(i) * 100.0))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let expected = PremiumDiscount.discount(100.0 * i as f64);
        assert!(close(handle.join().unwrap(), expected));
    }
}

proptest! {
    #[test]
    fn prop_calculator_is_transparent(amount in -1.0e9f64..1.0e9, rank in 0u8..4) {
        let tier = CustomerTier::try_from(rank).unwrap();
        let calculator = DiscountCalculator::new(tier);
        prop_assert_eq!(calculator.calculate(amount), tier.discount(amount));
    }

    #[test]
    fn prop_strategies_are_idempotent(amount in -1.0e9f64..1.0e9) {
        let strategies: [&dyn DiscountStrategy; 4] =
            [&RegularDiscount, &PremiumDiscount, &VipDiscount, &SuperVipDiscount];
        for strategy in strategies {
            prop_assert_eq!(strategy.discount(amount), strategy.discount(amount));
        }
    }

    #[test]
    fn prop_tier_matches_strategy_type(amount in 0.0f64..1.0e6) {
        prop_assert_eq!(CustomerTier::Regular.discount(amount), RegularDiscount.discount(amount));
        prop_assert_eq!(CustomerTier::Premium.discount(amount), PremiumDiscount.discount(amount));
        prop_assert_eq!(CustomerTier::Vip.discount(amount), VipDiscount.discount(amount));
        prop_assert_eq!(CustomerTier::SuperVip.discount(amount), SuperVipDiscount.discount(amount));
    }
}
