// src/money.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

pub type PriceValue = f64;

/// A nightly rate or a reservation total. There is a single implicit currency.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(PriceValue);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub const fn new(value: PriceValue) -> Self {
        Price(value)
    }

    pub fn value(&self) -> PriceValue {
        self.0
    }

    /// Equal to within a thousandth of a unit.
    pub fn approx_eq(&self, other: Price) -> bool {
        (self.0 - other.0).abs() < 1e-3
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Self) -> Self::Output {
        Price(self.0 + other.0)
    }
}

impl Sub for Price {
    type Output = Price;

    fn sub(self, other: Self) -> Self::Output {
        Price(self.0 - other.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl SubAssign for Price {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// Multipliers (room type, date modifier, discount rate) are plain factors.
impl Mul<f64> for Price {
    type Output = Price;

    fn mul(self, factor: f64) -> Self::Output {
        Price(self.0 * factor)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
