//! Color generation
//!
//! Backfills missing `color` records with evenly distributed hues: one
//! random base hue per run, rotated by the golden angle per entry index, so
//! neighboring entries land far apart on the color wheel. Saturation,
//! lightness, and gradient hints are uniform-random per entry.

use std::path::Path;

use log::{info, warn};
use rand::Rng;
use serde_json::{json, Value};

use crate::enrich::{entry_id, is_truthy, rewrite_manifest_file, EnrichOutcome};
use crate::error::Result;

/// Hue rotation between consecutive entries, in degrees.
pub const GOLDEN_ANGLE: f64 = 137.508;

/// Generate a color record for the entry at `index`.
///
/// Hue follows the golden-angle rotation from `base_hue`; everything else
/// is uniform-random. Radial anchors land in the 10-90% range of the plane.
pub fn generate_color(index: usize, base_hue: f64, rng: &mut impl Rng) -> Value {
    let hue = (base_hue + index as f64 * GOLDEN_ANGLE) % 360.0;
    let saturation = rng.gen_range(80..90);
    let lightness = rng.gen_range(45..55);
    let bg_angle = rng.gen_range(0..360);

    let radial1_x = rng.gen_range(10..90);
    let radial1_y = rng.gen_range(10..90);
    let radial2_x = rng.gen_range(10..90);
    let radial2_y = rng.gen_range(10..90);

    json!({
        "hue": hue,
        "saturation": saturation,
        "lightness": lightness,
        "bgAngle": bg_angle,
        "radial1Pos": format!("{}% {}%", radial1_x, radial1_y),
        "radial2Pos": format!("{}% {}%", radial2_x, radial2_y),
    })
}

/// Fill missing colors across the files array.
///
/// Entries whose `color` key holds any truthy value are left untouched; the
/// check is presence-only, existing records are not revalidated. Returns
/// whether anything changed.
pub fn fill_colors(files: &mut [Value], rng: &mut impl Rng) -> Result<bool> {
    let base_hue = f64::from(rng.gen_range(0..360));
    let mut updated = false;

    for (index, file) in files.iter_mut().enumerate() {
        if !file.is_object() {
            warn!("colors: skipping non-object entry at index {}", index);
            continue;
        }
        if file.get("color").is_some_and(is_truthy) {
            info!("Skipping {} (already has color)", entry_id(file));
            continue;
        }

        let color = generate_color(index, base_hue, rng);
        info!("Generated color for {}: {}", entry_id(file), color);
        file["color"] = color;
        updated = true;
    }

    Ok(updated)
}

/// Run the color generator against a manifest file on disk.
pub fn run(path: &Path) -> Result<EnrichOutcome> {
    let mut rng = rand::thread_rng();
    rewrite_manifest_file(path, |files| fill_colors(files, &mut rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_generate_color_ranges() {
        let mut rng = rng();
        for index in 0..32 {
            let color = generate_color(index, 123.0, &mut rng);
            let hue = color["hue"].as_f64().unwrap();
            assert!((0.0..360.0).contains(&hue));
            assert!((80..90).contains(&color["saturation"].as_i64().unwrap()));
            assert!((45..55).contains(&color["lightness"].as_i64().unwrap()));
            assert!((0..360).contains(&color["bgAngle"].as_i64().unwrap()));
            for key in ["radial1Pos", "radial2Pos"] {
                let pos = color[key].as_str().unwrap();
                let (x, y) = pos.split_once("% ").unwrap();
                let x: i64 = x.parse().unwrap();
                let y: i64 = y.trim_end_matches('%').parse().unwrap();
                assert!((10..90).contains(&x));
                assert!((10..90).contains(&y));
            }
        }
    }

    #[test]
    fn test_golden_angle_rotation_from_base() {
        let mut rng = rng();
        let first = generate_color(0, 100.0, &mut rng);
        let second = generate_color(1, 100.0, &mut rng);
        let third = generate_color(5, 100.0, &mut rng);

        assert_eq!(first["hue"].as_f64().unwrap(), 100.0);
        assert_eq!(second["hue"].as_f64().unwrap(), (100.0 + GOLDEN_ANGLE) % 360.0);
        assert_eq!(
            third["hue"].as_f64().unwrap(),
            (100.0 + 5.0 * GOLDEN_ANGLE) % 360.0
        );
    }

    #[test]
    fn test_fill_colors_skips_truthy_and_uses_array_index() {
        let mut files = vec![
            json!({"id": "a", "color": {"hue": 10}}),
            json!({"id": "b"}),
            json!({"id": "c", "color": {}}),
            json!({"id": "d", "color": null}),
        ];

        let updated = fill_colors(&mut files, &mut rng()).unwrap();
        assert!(updated);

        // Existing truthy colors are untouched, even an empty object.
        assert_eq!(files[0]["color"], json!({"hue": 10}));
        assert_eq!(files[2]["color"], json!({}));

        // Filled entries get hues derived from their position in the array.
        let hue_b = files[1]["color"]["hue"].as_f64().unwrap();
        let hue_d = files[3]["color"]["hue"].as_f64().unwrap();
        let delta = (hue_d - hue_b).rem_euclid(360.0);
        assert!((delta - (2.0 * GOLDEN_ANGLE).rem_euclid(360.0)).abs() < 1e-9);
    }

    #[test]
    fn test_fill_colors_reports_unchanged_when_complete() {
        let mut files = vec![
            json!({"id": "a", "color": {"hue": 10}}),
            json!({"id": "b", "color": {"hue": 20}}),
        ];
        let updated = fill_colors(&mut files, &mut rng()).unwrap();
        assert!(!updated);
    }
}
