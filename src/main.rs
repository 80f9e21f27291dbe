// Copyright @yucwang 2026

use cone_sphere_occlusion_lut::core::cone_samples::ConeSampleSet;
use cone_sphere_occlusion_lut::core::rng::LcgRng;
use cone_sphere_occlusion_lut::io::tga_utils;
use cone_sphere_occlusion_lut::lut::sweep::LutSweep;
use cone_sphere_occlusion_lut::math::constants::Float;

use std::env;

const OUTPUT_PATH: &str = "cone_sphere_occlusion_lut.tga";

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        println!("Incorrect params");
        println!("Usage: {} lut_width lut_height cone_angle_in_degrees", args[0]);
        println!("{} 128 64 30", args[0]);
        std::process::exit(1);
    }

    // Unparsable arguments silently fall back to their defaults.
    let lut_width: usize = args[1].parse().unwrap_or(128);
    let lut_height: usize = args[2].parse().unwrap_or(64);
    let cone_angle: Float = args[3].parse().unwrap_or(30.0);

    let mut rng = LcgRng::from_entropy();
    let samples = ConeSampleSet::generate(cone_angle, &mut rng);

    let sweep = LutSweep::new(lut_width, lut_height);
    let image = sweep.build(&samples);

    if let Err(e) = tga_utils::write_tga_to_file(&image, OUTPUT_PATH) {
        log::error!("Failed to write {}: {}.", OUTPUT_PATH, e);
        std::process::exit(1);
    }
}
