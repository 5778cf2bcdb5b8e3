//! Coffee machines with narrow capability traits.
//!
//! A machine implements only the traits for drinks it can actually make, so
//! asking a [`BasicCoffeeMachine`] for a latte is rejected by the compiler.
//! [`AllInOneMachine`] keeps the wide contract around for contrast: there the
//! same request compiles and fails at runtime.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What a machine hands back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Drink {
    /// A shot of espresso
    Espresso,
    /// Steamed milk on its own
    SteamedMilk,
    /// Espresso with steamed milk and foam
    Cappuccino,
    /// Espresso with more steamed milk
    Latte,
}

impl Display for Drink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Espresso => write!(f, "Espresso"),
            Self::SteamedMilk => write!(f, "Steamed Milk"),
            Self::Cappuccino => write!(f, "Cappuccino"),
            Self::Latte => write!(f, "Latte"),
        }
    }
}

/// Can pull an espresso shot
pub trait EspressoMachine {
    /// Brews one espresso
    fn brew_espresso(&self) -> Drink {
        tracing::debug!("brewing espresso");
        Drink::Espresso
    }
}

/// Can steam milk
pub trait MilkSteamer {
    /// Steams one portion of milk
    fn steam_milk(&self) -> Drink {
        tracing::debug!("steaming milk");
        Drink::SteamedMilk
    }
}

/// Espresso plus milk, assembled as a cappuccino
pub trait CappuccinoMachine: EspressoMachine + MilkSteamer {
    /// Brews one cappuccino
    fn brew_cappuccino(&self) -> Drink {
        self.brew_espresso();
        self.steam_milk();
        tracing::debug!("brewing cappuccino");
        Drink::Cappuccino
    }
}

/// Espresso plus milk, assembled as a latte
pub trait LatteMachine: EspressoMachine + MilkSteamer {
    /// Brews one latte
    fn brew_latte(&self) -> Drink {
        self.brew_espresso();
        self.steam_milk();
        tracing::debug!("brewing latte");
        Drink::Latte
    }
}

/// Espresso only
///
/// Milk-based drinks are not part of its surface:
///
/// ```compile_fail
/// use solid_patterns::coffee::{BasicCoffeeMachine, LatteMachine};
///
/// BasicCoffeeMachine.brew_latte();
/// ```
///
/// ```compile_fail
/// use solid_patterns::coffee::{BasicCoffeeMachine, MilkSteamer};
///
/// BasicCoffeeMachine.steam_milk();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicCoffeeMachine;

impl EspressoMachine for BasicCoffeeMachine {}

/// Espresso, milk and cappuccino
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvancedCoffeeMachine;

impl EspressoMachine for AdvancedCoffeeMachine {}
impl MilkSteamer for AdvancedCoffeeMachine {}
impl CappuccinoMachine for AdvancedCoffeeMachine {}

/// Espresso, milk and latte
#[derive(Debug, Clone, Copy, Default)]
pub struct LatteCoffeeMachine;

impl EspressoMachine for LatteCoffeeMachine {}
impl MilkSteamer for LatteCoffeeMachine {}
impl LatteMachine for LatteCoffeeMachine {}

/// Wide contract every machine is forced to implement in full
///
/// Machines lacking a capability have no choice but to fail at call time.
pub trait AllInOneMachine {
    /// Brews one espresso
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] when the machine cannot do it.
    fn brew_espresso(&self) -> Result<Drink>;

    /// Brews one cappuccino
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] when the machine cannot do it.
    fn brew_cappuccino(&self) -> Result<Drink>;

    /// Brews one latte
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] when the machine cannot do it.
    fn brew_latte(&self) -> Result<Drink>;

    /// Steams one portion of milk
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] when the machine cannot do it.
    fn steam_milk(&self) -> Result<Drink>;
}

/// Espresso-only machine stuck with the wide contract
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyBasicMachine;

impl LegacyBasicMachine {
    const fn unsupported(operation: &'static str) -> Error {
        Error::Unsupported {
            machine: "Basic",
            operation,
        }
    }
}

impl AllInOneMachine for LegacyBasicMachine {
    fn brew_espresso(&self) -> Result<Drink> {
        Ok(Drink::Espresso)
    }

    fn brew_cappuccino(&self) -> Result<Drink> {
        Err(Self::unsupported("brew Cappuccino"))
    }

    fn brew_latte(&self) -> Result<Drink> {
        Err(Self::unsupported("brew Latte"))
    }

    fn steam_milk(&self) -> Result<Drink> {
        Err(Self::unsupported("steam milk"))
    }
}

/// Serves an espresso from any machine that can make one
///
/// Generic over the narrow trait, so every machine above qualifies.
pub fn serve_espresso<M: EspressoMachine + ?Sized>(machine: &M) -> Drink {
    machine.brew_espresso()
}
