//! Per-kind outcome vectors and summary statistics
//!
//! Battle outcomes are per-kind survivor counts; smoothing a matchup means
//! averaging those counts over many battles. `KindVector` keeps the
//! arithmetic element-wise and allocation-free.

use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::battle::units::{UnitKind, NUM_KINDS};

/// One `f64` per unit kind, in catalogue order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindVector(pub [f64; NUM_KINDS]);

impl KindVector {
    pub const ZERO: KindVector = KindVector([0.0; NUM_KINDS]);

    pub fn from_counts(counts: &[u32; NUM_KINDS]) -> Self {
        let mut values = [0.0; NUM_KINDS];
        for (value, &count) in values.iter_mut().zip(counts) {
            *value = count as f64;
        }
        Self(values)
    }

    pub fn get(&self, kind: UnitKind) -> f64 {
        self.0[kind as usize]
    }

    pub fn sqrt(self) -> Self {
        let mut values = self.0;
        for value in &mut values {
            *value = value.sqrt();
        }
        Self(values)
    }
}

impl Add for KindVector {
    type Output = KindVector;

    fn add(self, rhs: KindVector) -> KindVector {
        let mut values = self.0;
        for (value, r) in values.iter_mut().zip(rhs.0) {
            *value += r;
        }
        KindVector(values)
    }
}

impl Sub for KindVector {
    type Output = KindVector;

    fn sub(self, rhs: KindVector) -> KindVector {
        let mut values = self.0;
        for (value, r) in values.iter_mut().zip(rhs.0) {
            *value -= r;
        }
        KindVector(values)
    }
}

/// Element-wise product (used for squaring deviations).
impl Mul for KindVector {
    type Output = KindVector;

    fn mul(self, rhs: KindVector) -> KindVector {
        let mut values = self.0;
        for (value, r) in values.iter_mut().zip(rhs.0) {
            *value *= r;
        }
        KindVector(values)
    }
}

impl Div<f64> for KindVector {
    type Output = KindVector;

    fn div(self, rhs: f64) -> KindVector {
        let mut values = self.0;
        for value in &mut values {
            *value /= rhs;
        }
        KindVector(values)
    }
}

/// Element-wise mean over a non-empty sample set.
pub fn mean(samples: &[KindVector]) -> KindVector {
    let mut sum = KindVector::ZERO;
    for &sample in samples {
        sum = sum + sample;
    }
    sum / samples.len() as f64
}

/// Element-wise sample standard deviation (divides by `n - 1`).
pub fn std_dev(samples: &[KindVector], mean: KindVector) -> KindVector {
    let mut sum = KindVector::ZERO;
    for &sample in samples {
        let deviation = sample - mean;
        sum = sum + deviation * deviation;
    }
    (sum / (samples.len() - 1) as f64).sqrt()
}
