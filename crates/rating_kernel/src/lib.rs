//! Rating Kernel - Foundational value objects for the rating core
//!
//! This crate provides the building blocks shared by the rating domain:
//! - `Money`: USD amounts with precise decimal arithmetic
//! - `Percent`: percentage points used by discounts, surcharges, and taxes

pub mod money;

pub use money::{Money, Percent};
