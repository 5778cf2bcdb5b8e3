//! # solid-patterns - SOLID design principles as swappable strategies.
//!
//! Each module takes one rigid design (a type-tag `if` chain, a fat interface,
//! a hard-wired dependency) and expresses the extensible alternative with
//! narrow traits.
//!
//! ## Overview
//!
//! Every module follows the same shape:
//!
//! - **Contract**: a trait with one operation ([`DiscountStrategy`],
//!   [`NotificationService`], [`RowSerializer`], [`Shape`], ...)
//! - **Implementations**: independent types implementing it
//! - **Consumer**: a struct holding exactly one implementation and delegating to it
//! - **Composition root**: [`root`], the only code that picks a concrete type
//!
//! | Module | Principle |
//! |---|---|
//! | [`article`], [`employee`] | Single responsibility |
//! | [`discount`], [`export`] | Open/closed |
//! | [`shapes`], [`series`] | Liskov substitution |
//! | [`coffee`], [`finance`] | Interface segregation |
//! | [`notification`] | Dependency inversion |
//!
//! ## Quick Start
//!
//! ```rust
//! use solid_patterns::{DiscountCalculator, DiscountStrategy};
//!
//! // A strategy the library has never heard of
//! struct StaffDiscount;
//!
//! impl DiscountStrategy for StaffDiscount {
//!     fn discount(&self, amount: f64) -> f64 {
//!         amount * 0.5
//!     }
//! }
//!
//! let calculator = DiscountCalculator::new(StaffDiscount);
//! assert!((calculator.calculate(100.0) - 50.0).abs() < f64::EPSILON);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod article;
pub mod coffee;
pub mod config;
pub mod discount;
pub mod employee;
/// Error types.
pub mod error;
pub mod export;
pub mod finance;
pub mod notification;
pub mod root;
pub mod series;
pub mod shapes;

pub use article::{
    Article, ArticleDraft, ArticleProcessor, ArticleRepository, IdGenerator, InMemoryRepository,
    ValidationRules,
};
pub use coffee::{
    AdvancedCoffeeMachine, AllInOneMachine, BasicCoffeeMachine, CappuccinoMachine, Drink,
    EspressoMachine, LatteCoffeeMachine, LatteMachine, LegacyBasicMachine, MilkSteamer,
};
pub use config::Config;
pub use discount::{
    CustomerTier, DiscountCalculator, DiscountStrategy, PremiumDiscount, RegularDiscount,
    SuperVipDiscount, VipDiscount,
};
pub use error::{ArticleError, Error, Result};
pub use export::{Format, RowSerializer};
pub use notification::{Channel, EmailService, NotificationService, Notifier, SmsService};
pub use shapes::{Rectangle, Shape, Square};
