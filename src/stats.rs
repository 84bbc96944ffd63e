// Copyright © ArkBig
//! This file provides statistical calculations.

/// Statistics data such as mean.
#[derive(Default, Debug)]
pub struct Stats {
    /// Sorted samples excluding NaN(!finite).
    sorted_samples: Vec<f64>,

    /// Count of !finite.
    pub nan_count: usize,

    /// Mean of the finite samples. (μ)
    pub mean: f64,

    /// Sample standard deviation of the finite samples. (σ)
    ///
    /// Zero when there are fewer than two samples.
    pub stdev: f64,
}

impl Stats {
    /// Statistical calculation and construction.
    pub fn new(samples: &[f64]) -> Self {
        let mut sorted: Vec<f64> = samples.iter().copied().filter(|x| x.is_finite()).collect();
        // Finite values always have an order.
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let nan_count = samples.len() - sorted.len();
        if sorted.is_empty() {
            return Self {
                nan_count,
                ..Default::default()
            };
        }

        let count = sorted.len();
        let sum: f64 = sorted.iter().sum();
        let mean = sum / (count as f64);

        let stdev = if count < 2 {
            0.0
        } else {
            let mut variance = 0.0; // 分散
            for x in &sorted {
                variance += (x - mean).powi(2);
            }
            // Sample variance, so one less than the count.
            variance /= (count - 1) as f64;
            variance.sqrt()
        };

        Self {
            sorted_samples: sorted,
            nan_count,
            mean,
            stdev,
        }
    }

    /// The number of finite samples.
    pub fn count(&self) -> usize {
        self.sorted_samples.len()
    }

    /// The middle of samples
    pub fn median(&self) -> f64 {
        *self
            .sorted_samples
            .get(self.sorted_samples.len() / 2)
            .unwrap_or(&0.0)
    }
    /// The minimum of samples
    pub fn min(&self) -> f64 {
        *self.sorted_samples.first().unwrap_or(&0.0)
    }
    /// The maximum of samples.
    pub fn max(&self) -> f64 {
        *self.sorted_samples.last().unwrap_or(&0.0)
    }
}
