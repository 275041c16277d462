#![warn(clippy::all, clippy::cargo)]

//! Closed-form numerical utilities for a physically based shading pipeline:
//! Fresnel reflectance, bit-exact packed-format conversion, and SplitMix64.

pub mod fresnel;
pub mod packing;
pub mod rng;
