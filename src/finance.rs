//! Small, separate financial capabilities.
//!
//! Tax, invoicing and discounting are independent traits; a caller that only
//! needs invoices depends on [`InvoiceGenerator`] and nothing else. Discounts
//! live in [`crate::discount`].

/// Computes tax owed on an income
pub trait TaxCalculator {
    /// Tax owed on `income`
    fn tax(&self, income: f64) -> f64;
}

/// Renders an invoice line for an amount
pub trait InvoiceGenerator {
    /// Invoice text for `amount`
    fn invoice(&self, amount: f64) -> String;
}

/// Fixed-rate tax
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatTax {
    rate: f64,
}

impl FlatTax {
    /// Tax at `rate` (a fraction, e.g. `0.2`)
    #[must_use]
    pub const fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// The configured rate
    #[must_use]
    pub const fn rate(&self) -> f64 {
        self.rate
    }
}

impl Default for FlatTax {
    /// 20%
    fn default() -> Self {
        Self::new(0.2)
    }
}

impl TaxCalculator for FlatTax {
    fn tax(&self, income: f64) -> f64 {
        income * self.rate
    }
}

/// Produces `Invoice for {amount}`
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainInvoice;

impl InvoiceGenerator for PlainInvoice {
    fn invoice(&self, amount: f64) -> String {
        format!("Invoice for {amount}")
    }
}
