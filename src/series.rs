//! Reductions over numeric series.
//!
//! A [`DataProcessor`] sees every value. Processors that drop values first
//! implement [`FilteredDataProcessor`] instead, so they cannot be passed where
//! a whole-series reduction is expected.

/// Reduces an entire series to one number
pub trait DataProcessor {
    /// Reduces `data`
    fn process(&self, data: &[f64]) -> f64;
}

/// Reduces the subset of a series that passes a filter
pub trait FilteredDataProcessor {
    /// Reduces the retained part of `data`
    fn process_filtered(&self, data: &[f64]) -> f64;
}

/// Sum of all values
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

impl DataProcessor for Sum {
    fn process(&self, data: &[f64]) -> f64 {
        data.iter().sum()
    }
}

/// Arithmetic mean; NaN for an empty series
#[derive(Debug, Clone, Copy, Default)]
pub struct Average;

impl DataProcessor for Average {
    #[allow(clippy::cast_precision_loss)]
    fn process(&self, data: &[f64]) -> f64 {
        Sum.process(data) / data.len() as f64
    }
}

/// Sum of the strictly positive values
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveSum;

impl FilteredDataProcessor for PositiveSum {
    fn process_filtered(&self, data: &[f64]) -> f64 {
        data.iter().copied().filter(|n| *n > 0.0).sum()
    }
}

/// Runs `processor` over `data` and returns `Processed result: {value}`
pub fn process_financial_data<P: DataProcessor + ?Sized>(processor: &P, data: &[f64]) -> String {
    format!("Processed result: {}", processor.process(data))
}

/// Runs `processor` over `data` and returns `Processed filtered result: {value}`
pub fn process_filtered_financial_data<P: FilteredDataProcessor + ?Sized>(
    processor: &P,
    data: &[f64],
) -> String {
    format!("Processed filtered result: {}", processor.process_filtered(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: [f64; 5] = [-10.0, 5.0, 15.0, -5.0, 10.0];

    #[test]
    fn reductions_over_sample() {
        assert_eq!(process_financial_data(&Sum, &DATASET), "Processed result: 15");
        assert_eq!(process_financial_data(&Average, &DATASET), "Processed result: 3");
        assert_eq!(
            process_filtered_financial_data(&PositiveSum, &DATASET),
            "Processed filtered result: 30"
        );
    }

    #[test]
    fn empty_average_is_nan() {
        assert!(Average.process(&[]).is_nan());
        assert!(Sum.process(&[]).abs() < f64::EPSILON);
    }
}
