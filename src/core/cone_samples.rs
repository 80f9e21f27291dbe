// Copyright @yucwang 2026

use crate::core::rng::LcgRng;
use crate::math::constants::{degrees_to_radians, Float, Vector3f, PI};

/// Number of directions drawn per sample set.
pub const SAMPLE_NUM: usize = 10000;

/// A fixed set of unit directions inside a cone of the given full apex angle
/// around +Z. Generated once per run and shared read-only with every
/// estimator call.
///
/// The distribution interpolates cos(theta) linearly between the cone
/// boundary and 1, which oversamples directions near the axis for wide
/// cones, and draws the azimuth as `PI * (2u - 1)`. Both quirks are part of
/// the table's definition and are kept as-is rather than replaced with
/// uniform solid-angle sampling.
pub struct ConeSampleSet {
    samples: Vec<Vector3f>,
}

impl ConeSampleSet {
    /// Draws `SAMPLE_NUM` directions from `rng` (two uniforms per sample).
    ///
    /// `cone_angle_degrees` must lie in (0, 360); values outside that range
    /// degenerate and are the caller's responsibility, not checked here.
    pub fn generate(cone_angle_degrees: Float, rng: &mut LcgRng) -> Self {
        let cos_cone_angle = (0.5 * degrees_to_radians(cone_angle_degrees)).cos();

        let mut samples = Vec::with_capacity(SAMPLE_NUM);
        for _ in 0..SAMPLE_NUM {
            let cos_theta = rng.next_f32() * (1.0 - cos_cone_angle) + cos_cone_angle;
            let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
            let phi = PI * (rng.next_f32() * 2.0 - 1.0);

            samples.push(Vector3f::new(
                sin_theta * phi.cos(),
                sin_theta * phi.sin(),
                cos_theta,
            ));
        }

        Self { samples }
    }

    pub fn directions(&self) -> &[Vector3f] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ConeSampleSet, SAMPLE_NUM};
    use crate::core::rng::LcgRng;
    use crate::math::constants::{degrees_to_radians, EPSILON};

    #[test]
    fn test_sample_count() {
        let mut rng = LcgRng::new(1);
        let set = ConeSampleSet::generate(30.0, &mut rng);
        assert_eq!(set.len(), SAMPLE_NUM);
    }

    #[test]
    fn test_directions_are_unit_length() {
        let mut rng = LcgRng::new(2);
        let set = ConeSampleSet::generate(45.0, &mut rng);
        for d in set.directions() {
            assert!((d.norm() - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_directions_stay_inside_cone() {
        let mut rng = LcgRng::new(3);
        let cone_angle = 30.0;
        let set = ConeSampleSet::generate(cone_angle, &mut rng);
        let cos_half = (0.5 * degrees_to_radians(cone_angle)).cos();
        for d in set.directions() {
            assert!(d.z >= cos_half - EPSILON);
        }
    }

    #[test]
    fn test_generation_is_deterministic_for_a_seed() {
        let mut rng_a = LcgRng::new(99);
        let mut rng_b = LcgRng::new(99);
        let a = ConeSampleSet::generate(60.0, &mut rng_a);
        let b = ConeSampleSet::generate(60.0, &mut rng_b);
        for (da, db) in a.directions().iter().zip(b.directions()) {
            assert_eq!(da, db);
        }
    }
}
