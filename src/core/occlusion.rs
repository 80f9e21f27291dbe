// Copyright @yucwang 2026

use crate::core::cone_samples::ConeSampleSet;
use crate::math::constants::{Float, Vector3f};

/// Estimates how much of a sampled light cone a spherical occluder blocks.
/// Borrows the shared sample set read-only; every call is independent.
pub struct OcclusionEstimator<'a> {
    samples: &'a ConeSampleSet,
}

impl<'a> OcclusionEstimator<'a> {
    pub fn new(samples: &'a ConeSampleSet) -> Self {
        Self { samples }
    }

    /// Returns the *visibility* in [0, 1]: the fraction of cone samples not
    /// falling inside the occluder's angular disc.
    ///
    /// `occluder_angular_radius_sin` is the sine of the occluder's angular
    /// half-size, in [0, 1]. `axis_to_occluder_angle_cos` is the cosine of
    /// the angle between the cone axis and the occluder center, in [-1, 1].
    pub fn estimate(
        &self,
        occluder_angular_radius_sin: Float,
        axis_to_occluder_angle_cos: Float,
    ) -> Float {
        let occluder_to_beam_angle_sin =
            (1.0 - axis_to_occluder_angle_cos * axis_to_occluder_angle_cos)
                .max(0.0)
                .sqrt();
        let occluder_angle_cos =
            (1.0 - occluder_angular_radius_sin * occluder_angular_radius_sin)
                .max(0.0)
                .sqrt();
        let occluder_dir = Vector3f::new(
            occluder_to_beam_angle_sin,
            0.0,
            axis_to_occluder_angle_cos,
        );

        let hit_num = self
            .samples
            .directions()
            .iter()
            .filter(|sample| occluder_dir.dot(sample) > occluder_angle_cos)
            .count();

        1.0 - (hit_num as Float) / (self.samples.len() as Float)
    }
}
