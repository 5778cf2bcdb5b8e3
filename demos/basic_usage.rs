//! Basic usage example for the solid-patterns crate.
//!
//! Run with: `cargo run --example basic_usage`

use solid_patterns::coffee::serve_espresso;
use solid_patterns::{
    AdvancedCoffeeMachine, CappuccinoMachine, CustomerTier, DiscountCalculator, DiscountStrategy,
    EmailService, Notifier, PremiumDiscount, RegularDiscount, Shape, SmsService, Square,
    VipDiscount,
};

/// A 25% discount added without touching the library
struct SuperVipDiscount;

impl DiscountStrategy for SuperVipDiscount {
    fn discount(&self, amount: f64) -> f64 {
        amount * 0.25
    }
}

fn main() {
    println!("=== Discount Strategies ===\n");

    let amount = 100.0;
    println!("Regular:   {}", DiscountCalculator::new(RegularDiscount).calculate(amount));
    println!("Premium:   {}", DiscountCalculator::new(PremiumDiscount).calculate(amount));
    println!("VIP:       {}", DiscountCalculator::new(VipDiscount).calculate(amount));
    println!("Super VIP: {}", DiscountCalculator::new(SuperVipDiscount).calculate(amount));
    println!();

    // Closed set of tiers, matched exhaustively
    println!("=== Customer Tiers ===\n");
    for tier in CustomerTier::ALL {
        println!("{tier}: {}", tier.discount(amount));
    }
    let parsed: CustomerTier = "super-vip".parse().unwrap();
    println!("\"super-vip\".parse() -> {parsed:?}");
    println!();

    println!("=== Notifications ===\n");
    Notifier::new(EmailService::stdout())
        .send_notification("ana@example.com", "Your order has shipped")
        .unwrap();
    Notifier::new(SmsService::stdout())
        .send_notification("+55 11 99999-0000", "Your order has shipped")
        .unwrap();
    println!();

    println!("=== Segregated Interfaces ===\n");
    let machine = AdvancedCoffeeMachine;
    println!("Espresso:   {}", serve_espresso(&machine));
    println!("Cappuccino: {}", machine.brew_cappuccino());
    println!();

    println!("=== Shapes ===\n");
    let mut square = Square::new(5.0);
    println!("square initial: {}", square.area());
    square.set_side(7.0);
    println!("square after:   {}", square.area());
}
