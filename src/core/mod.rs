// Copyright @yucwang 2026

pub mod cone_samples;
pub mod occlusion;
pub mod rng;
