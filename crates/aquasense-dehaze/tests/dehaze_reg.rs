//! Restoration pipeline regression test
//!
//! Exercises the full restore() path against synthetic scenes with known
//! ground truth: determinism, shape preservation, near-identity on
//! haze-free input, transmission bounds, recovery of a synthetically
//! veiled image, and stability on degenerate inputs.

use aquasense_core::Raster;
use aquasense_dehaze::{DehazeConfig, DehazeError, restore};
use aquasense_test::{RegParams, composite_haze, saturated_raster, uniform_raster};
use rand::{RngExt, SeedableRng, rngs::StdRng};

/// Defaults shrunk to fixture scale; the refinement window still dwarfs
/// the dark-channel window, as in the production configuration.
fn fixture_config() -> DehazeConfig {
    DehazeConfig {
        dark_channel_window: 5,
        guided_filter_window: 15,
        ..DehazeConfig::default()
    }
}

#[test]
fn dehaze_reg() {
    let mut rp = RegParams::new("dehaze");

    // --- Test 1: determinism, byte-identical repeat ---
    let scene = saturated_raster(96, 96);
    let cfg = fixture_config();
    let first = restore(&scene, &cfg).expect("restore");
    let second = restore(&scene, &cfg).expect("restore");
    rp.compare_rasters(&first.raster, &second.raster);
    rp.compare_maps(&first.transmission, &second.transmission, 0.0);

    // --- Test 2: shape preservation, production-size canvas, defaults ---
    let canvas = saturated_raster(416, 416);
    let result = restore(&canvas, &DehazeConfig::default()).expect("restore 416");
    rp.compare_values(416.0, result.raster.width() as f64, 0.0);
    rp.compare_values(416.0, result.raster.height() as f64, 0.0);
    rp.compare_values(416.0, result.transmission.width() as f64, 0.0);

    // --- Test 3: haze-free input passes through nearly unchanged ---
    // A scene with a vanishing dark channel reads as fully transmitting.
    let clean = saturated_raster(96, 96);
    let result = restore(&clean, &cfg).expect("restore clean");
    rp.compare_values(1.0, result.transmission.min() as f64, 0.05);
    let mad = rp.mean_abs_diff(&clean, &result.raster);
    rp.compare_values(0.0, mad, 5.0);
    eprintln!("  haze-free mean abs diff: {mad:.3}");

    // --- Test 4: transmission bounds [t0, 1] ---
    for raster in [
        saturated_raster(64, 64),
        uniform_raster(64, 64, [140, 140, 140]),
        uniform_raster(64, 64, [255, 255, 255]),
    ] {
        let result = restore(&raster, &cfg).expect("restore");
        let lo = result.transmission.min();
        let hi = result.transmission.max();
        rp.compare_values(1.0, if lo >= 0.1 { 1.0 } else { 0.0 }, 0.0);
        rp.compare_values(1.0, if hi <= 1.0 { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Test 5: recovery of a synthetically veiled scene ---
    // Clean scene with a bright white marker patch so the airlight search
    // has a veil-dominated region to lock onto, then a constant veil.
    let t = 0.7f64;
    let airlight = [220.0f64, 220.0, 220.0];
    let mut m = saturated_raster(128, 128).to_mut();
    for y in 0..8 {
        for x in 0..8 {
            m.set_pixel_unchecked(x, y, [250, 250, 250]);
        }
    }
    let clean: Raster = m.into();
    let hazy = composite_haze(&clean, t, airlight);

    let result = restore(&hazy, &fixture_config()).expect("restore hazy");

    let mad_before = rp.mean_abs_diff(&clean, &hazy);
    let mad_after = rp.mean_abs_diff(&clean, &result.raster);
    eprintln!("  veiled scene: mad before={mad_before:.2}, after={mad_after:.2}");
    // Restoration must move the image toward the clean scene...
    rp.compare_values(1.0, if mad_after < mad_before { 1.0 } else { 0.0 }, 0.0);
    // ...and land reasonably close to it.
    rp.compare_values(0.0, mad_after, 15.0);

    // The estimated transmission should track the true constant veil over
    // the bulk of the scene.
    let mean_t: f64 = result.transmission.data().iter().map(|v| *v as f64).sum::<f64>()
        / result.transmission.data().len() as f64;
    rp.compare_values(t, mean_t, 0.08);
    eprintln!("  estimated mean transmission: {mean_t:.3} (true {t})");

    // --- Test 6: minimum-size rejection ---
    let tiny = uniform_raster(4, 4, [10, 20, 30]);
    let err = restore(&tiny, &fixture_config());
    rp.compare_values(
        1.0,
        if matches!(err, Err(DehazeError::ImageTooSmall { .. })) {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    // --- Test 7: noisy flat scene stays finite and in range ---
    let mut rng = StdRng::seed_from_u64(42);
    let mut m = uniform_raster(64, 64, [0, 0, 0]).to_mut();
    for y in 0..64 {
        for x in 0..64 {
            let jitter: u8 = rng.random_range(0..30);
            m.set_pixel_unchecked(x, y, [60 + jitter, 90 + jitter, 110 + jitter]);
        }
    }
    let noisy: Raster = m.into();
    let result = restore(&noisy, &cfg).expect("restore noisy");
    let finite = result.transmission.data().iter().all(|v| v.is_finite());
    rp.compare_values(1.0, if finite { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "dehaze regression test failed");
}
