//! Purchase discounts as swappable strategies.
//!
//! [`DiscountCalculator`] holds exactly one [`DiscountStrategy`] and forwards
//! every call to it. New discount schemes are added by implementing the trait;
//! neither the calculator nor the existing strategies change.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A discount scheme: given a purchase amount, how much is taken off?
pub trait DiscountStrategy {
    /// Returns the discount granted on `amount` (not the discounted price)
    fn discount(&self, amount: f64) -> f64;
}

impl<S: DiscountStrategy + ?Sized> DiscountStrategy for &S {
    #[inline]
    fn discount(&self, amount: f64) -> f64 {
        (**self).discount(amount)
    }
}

impl<S: DiscountStrategy + ?Sized> DiscountStrategy for Box<S> {
    #[inline]
    fn discount(&self, amount: f64) -> f64 {
        (**self).discount(amount)
    }
}

/// 10% off
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegularDiscount;

impl DiscountStrategy for RegularDiscount {
    fn discount(&self, amount: f64) -> f64 {
        amount * 0.10
    }
}

/// 15% off
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PremiumDiscount;

impl DiscountStrategy for PremiumDiscount {
    fn discount(&self, amount: f64) -> f64 {
        amount * 0.15
    }
}

/// 20% off
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VipDiscount;

impl DiscountStrategy for VipDiscount {
    fn discount(&self, amount: f64) -> f64 {
        amount * 0.20
    }
}

/// 25% off
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuperVipDiscount;

impl DiscountStrategy for SuperVipDiscount {
    fn discount(&self, amount: f64) -> f64 {
        amount * 0.25
    }
}

/// Adapter turning a plain function or closure into a [`DiscountStrategy`]
///
/// Built with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnDiscount<F>(F);

/// Wraps `f` so it can be injected wherever a [`DiscountStrategy`] is expected
///
/// ```rust
/// use solid_patterns::{DiscountCalculator, discount};
///
/// let flat_five = DiscountCalculator::new(discount::from_fn(|_| 5.0));
/// assert!((flat_five.calculate(100.0) - 5.0).abs() < f64::EPSILON);
/// ```
pub const fn from_fn<F: Fn(f64) -> f64>(f: F) -> FnDiscount<F> {
    FnDiscount(f)
}

impl<F: Fn(f64) -> f64> DiscountStrategy for FnDiscount<F> {
    #[inline]
    fn discount(&self, amount: f64) -> f64 {
        (self.0)(amount)
    }
}

/// Consumer that delegates every calculation to the strategy it was built with
///
/// The strategy is fixed at construction; there is no fallback and no
/// branching on which strategy is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct DiscountCalculator<S> {
    strategy: S,
}

impl<S: DiscountStrategy> DiscountCalculator<S> {
    /// Creates a calculator bound to `strategy`
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Returns the discount the held strategy grants on `amount`
    #[inline]
    pub fn calculate(&self, amount: f64) -> f64 {
        let discount = self.strategy.discount(amount);
        tracing::debug!(amount, discount, "discount calculated");
        discount
    }

    /// Borrows the held strategy
    #[inline]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Consumes the calculator, returning the strategy
    #[inline]
    pub fn into_inner(self) -> S {
        self.strategy
    }
}

impl<S> AsRef<S> for DiscountCalculator<S> {
    fn as_ref(&self) -> &S {
        &self.strategy
    }
}

/// Customer tiers, dispatched through an exhaustive `match`
///
/// This is the closed-set alternative to one type per strategy: adding a tier
/// is a compile error everywhere the tier is matched until it is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[must_use]
pub enum CustomerTier {
    /// Regular customers (10%)
    #[default]
    Regular,
    /// Premium customers (15%)
    Premium,
    /// VIP customers (20%)
    Vip,
    /// Super VIP customers (25%)
    SuperVip,
}

impl CustomerTier {
    /// Every tier, lowest rank first
    pub const ALL: [Self; 4] = [Self::Regular, Self::Premium, Self::Vip, Self::SuperVip];

    /// Discount rate as a fraction of the purchase amount
    #[inline]
    #[must_use]
    pub const fn rate(self) -> f64 {
        match self {
            Self::Regular => 0.10,
            Self::Premium => 0.15,
            Self::Vip => 0.20,
            Self::SuperVip => 0.25,
        }
    }

    /// Returns the numeric rank: Regular=0, Premium=1, Vip=2, SuperVip=3
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Regular => 0,
            Self::Premium => 1,
            Self::Vip => 2,
            Self::SuperVip => 3,
        }
    }

    /// Canonical lowercase name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Premium => "premium",
            Self::Vip => "vip",
            Self::SuperVip => "super-vip",
        }
    }
}

impl DiscountStrategy for CustomerTier {
    fn discount(&self, amount: f64) -> f64 {
        amount * self.rate()
    }
}

impl PartialOrd for CustomerTier {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CustomerTier {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl From<CustomerTier> for u8 {
    #[inline]
    fn from(tier: CustomerTier) -> Self {
        tier.rank()
    }
}

impl From<CustomerTier> for &'static str {
    #[inline]
    fn from(tier: CustomerTier) -> Self {
        tier.as_str()
    }
}

impl TryFrom<u8> for CustomerTier {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| Error::InvalidTier(value.to_string()))
    }
}

impl FromStr for CustomerTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(Self::Regular),
            "premium" => Ok(Self::Premium),
            "vip" => Ok(Self::Vip),
            "super-vip" | "super_vip" | "supervip" => Ok(Self::SuperVip),
            _ => Err(Error::InvalidTier(s.to_string())),
        }
    }
}

impl Display for CustomerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => write!(f, "Regular (10% off)"),
            Self::Premium => write!(f, "Premium (15% off)"),
            Self::Vip => write!(f, "VIP (20% off)"),
            Self::SuperVip => write!(f, "Super VIP (25% off)"),
        }
    }
}
