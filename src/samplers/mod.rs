//! Sampling strategies.
//!
//! Only uniform sampling is provided; custom strategies plug in through the
//! [`Sampler`](crate::core::Sampler) trait.

pub mod uniform;

pub use uniform::UniformRandomSampler;
