// Copyright @yucwang 2026

use crate::core::cone_samples::ConeSampleSet;
use crate::core::occlusion::OcclusionEstimator;
use crate::lut::image::LutImage;
use crate::math::constants::Float;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

/// Fills a [`LutImage`] by evaluating the occlusion estimator on a 2D grid:
/// rows sweep the occluder's angular radius sine over [0, 1] top to bottom,
/// columns sweep the axis-to-occluder angle cosine over [-1, 1] left to
/// right.
pub struct LutSweep {
    width: usize,
    height: usize,
}

/// `trunc(value * 255 + 0.5)` with a defensive clamp. The estimator is
/// bounded to [0, 1] under valid inputs, so the clamp only guards against
/// out-of-domain parameters.
pub fn quantize_unorm8(value: Float) -> u8 {
    (value * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

impl LutSweep {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Maps a row index to the occluder angular radius sine. A single-row
    /// table pins the parameter at 0 (point occluder) instead of dividing
    /// by zero.
    pub fn param_for_row(&self, row: usize) -> Float {
        if self.height > 1 {
            (row as Float) / ((self.height - 1) as Float)
        } else {
            0.0
        }
    }

    /// Maps a column index to the axis-to-occluder angle cosine. A
    /// single-column table pins the parameter at -1.
    pub fn param_for_col(&self, col: usize) -> Float {
        if self.width > 1 {
            2.0 * ((col as Float) / ((self.width - 1) as Float)) - 1.0
        } else {
            -1.0
        }
    }

    /// Runs the estimator for every pixel and quantizes the results. Rows
    /// are distributed over a worker pool; the sample set is frozen before
    /// the sweep starts, so the output is identical to a sequential
    /// row-major pass.
    pub fn build(&self, samples: &ConeSampleSet) -> LutImage {
        let mut image = LutImage::new(self.width, self.height);
        if self.width == 0 || self.height == 0 {
            return image;
        }

        log::info!(
            "Sweeping {}x{} occlusion LUT over {} cone samples.",
            self.width,
            self.height,
            samples.len()
        );

        let progress = ProgressBar::new(self.height as u64);
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rows")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let next_row = Arc::new(AtomicUsize::new(0));
        let thread_count = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(self.height);
        let (tx, rx) = mpsc::channel::<(usize, Vec<u8>)>();

        thread::scope(|scope| {
            for _ in 0..thread_count {
                let next_row = Arc::clone(&next_row);
                let tx = tx.clone();
                scope.spawn(move || {
                    let estimator = OcclusionEstimator::new(samples);
                    loop {
                        let row = next_row.fetch_add(1, Ordering::Relaxed);
                        if row >= self.height {
                            break;
                        }

                        let occluder_angular_radius_sin = self.param_for_row(row);
                        let mut bytes = Vec::with_capacity(self.width * 3);
                        for col in 0..self.width {
                            let axis_to_occluder_angle_cos = self.param_for_col(col);
                            let sample_value = estimator
                                .estimate(occluder_angular_radius_sin, axis_to_occluder_angle_cos);
                            let sample_u8 = quantize_unorm8(sample_value);
                            bytes.extend_from_slice(&[sample_u8, sample_u8, sample_u8]);
                        }
                        if tx.send((row, bytes)).is_err() {
                            break;
                        }
                    }
                });
            }

            drop(tx);
            for _ in 0..self.height {
                if let Ok((row, bytes)) = rx.recv() {
                    for col in 0..self.width {
                        image[(col, row)].copy_from_slice(&bytes[col * 3..col * 3 + 3]);
                    }
                    progress.inc(1);
                }
            }
        });
        progress.finish_and_clear();

        image
    }
}

#[cfg(test)]
mod tests {
    use super::{quantize_unorm8, LutSweep};
    use crate::core::cone_samples::ConeSampleSet;
    use crate::core::occlusion::OcclusionEstimator;
    use crate::core::rng::LcgRng;

    fn samples(seed: u64) -> ConeSampleSet {
        let mut rng = LcgRng::new(seed);
        ConeSampleSet::generate(30.0, &mut rng)
    }

    #[test]
    fn test_quantize_rounding_rule() {
        assert_eq!(quantize_unorm8(0.0), 0);
        assert_eq!(quantize_unorm8(1.0), 255);
        assert_eq!(quantize_unorm8(0.5), 128);
        // Clamped rather than wrapped for out-of-domain estimator output.
        assert_eq!(quantize_unorm8(-0.1), 0);
        assert_eq!(quantize_unorm8(1.5), 255);
    }

    #[test]
    fn test_parameter_mapping() {
        let sweep = LutSweep::new(128, 64);
        assert_eq!(sweep.param_for_row(0), 0.0);
        assert_eq!(sweep.param_for_row(63), 1.0);
        assert_eq!(sweep.param_for_col(0), -1.0);
        assert_eq!(sweep.param_for_col(127), 1.0);
        assert!((sweep.param_for_col(64) - (2.0 * 64.0 / 127.0 - 1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_single_row_and_column_do_not_divide_by_zero() {
        let sweep = LutSweep::new(1, 1);
        assert_eq!(sweep.param_for_row(0), 0.0);
        assert_eq!(sweep.param_for_col(0), -1.0);
        let image = sweep.build(&samples(21));
        assert_eq!(image.data().len(), 3);
    }

    #[test]
    fn test_buffer_shape() {
        let image = LutSweep::new(16, 8).build(&samples(22));
        assert_eq!(image.width(), 16);
        assert_eq!(image.height(), 8);
        assert_eq!(image.data().len(), 16 * 8 * 3);
    }

    #[test]
    fn test_two_by_two_corners() {
        let set = samples(23);
        let image = LutSweep::new(2, 2).build(&set);
        assert_eq!(image.data().len(), 12);

        // Top row is the point occluder: fully visible from anywhere.
        assert!(image[(0, 0)][0] >= 250);
        assert!(image[(1, 0)][0] >= 250);

        // Each pixel equals the quantized estimate at its grid parameters.
        let estimator = OcclusionEstimator::new(&set);
        assert_eq!(image[(0, 1)][0], quantize_unorm8(estimator.estimate(1.0, -1.0)));
        assert_eq!(image[(1, 1)][0], quantize_unorm8(estimator.estimate(1.0, 1.0)));
    }

    #[test]
    fn test_pixels_are_grayscale() {
        let image = LutSweep::new(5, 4).build(&samples(24));
        for y in 0..4 {
            for x in 0..5 {
                let pixel = &image[(x, y)];
                assert_eq!(pixel[0], pixel[1]);
                assert_eq!(pixel[1], pixel[2]);
            }
        }
    }

    #[test]
    fn test_sweep_matches_sequential_estimates() {
        let set = samples(25);
        let sweep = LutSweep::new(7, 3);
        let image = sweep.build(&set);
        let estimator = OcclusionEstimator::new(&set);
        for row in 0..3 {
            for col in 0..7 {
                let expected = quantize_unorm8(
                    estimator.estimate(sweep.param_for_row(row), sweep.param_for_col(col)),
                );
                assert_eq!(image[(col, row)][0], expected);
            }
        }
    }
}
