use img_rescale::constants::MAX_OUTPUT_DIMENSION;
use img_rescale::{calculate_speedup, is_image_file, output_path, scaled_dimensions};
use proptest::prelude::*;
use std::path::Path;

proptest! {
    #[test]
    fn scaled_dimensions_round_each_side(
        width in 1u32..=4000u32,
        height in 1u32..=4000u32,
        scale in 0.01f64..8.0f64
    ) {
        let expected_w = (f64::from(width) * scale).round() as u64;
        let expected_h = (f64::from(height) * scale).round() as u64;
        let limit = u64::from(MAX_OUTPUT_DIMENSION);
        let representable = expected_w >= 1 && expected_h >= 1 && expected_w <= limit && expected_h <= limit;

        match scaled_dimensions(width, height, scale) {
            Ok((w, h)) => {
                prop_assert!(representable);
                prop_assert_eq!(u64::from(w), expected_w);
                prop_assert_eq!(u64::from(h), expected_h);
            }
            Err(_) => prop_assert!(!representable),
        }
    }

    #[test]
    fn scaled_dimensions_identity_at_scale_one(
        width in 1u32..=MAX_OUTPUT_DIMENSION,
        height in 1u32..=MAX_OUTPUT_DIMENSION
    ) {
        prop_assert_eq!(scaled_dimensions(width, height, 1.0).unwrap(), (width, height));
    }

    #[test]
    fn scaled_dimensions_rejects_non_positive_scale(scale in -100.0f64..=0.0f64) {
        prop_assert!(scaled_dimensions(100, 100, scale).is_err());
    }

    #[test]
    fn speedup_matches_formula(sequential in 1u128..1_000_000u128, concurrent in 0u128..1_000_000u128) {
        let speedup = calculate_speedup(sequential, concurrent).unwrap();
        let expected = ((sequential as f64 - concurrent as f64) / sequential as f64) * 100.0;
        prop_assert!((speedup - expected).abs() < 1e-9);
        prop_assert!(speedup <= 100.0);
    }

    #[test]
    fn speedup_undefined_for_zero_sequential(concurrent in 0u128..1_000_000u128) {
        prop_assert_eq!(calculate_speedup(0, concurrent), None);
    }

    #[test]
    fn is_image_file_recognizes_extensions(
        extension in prop::sample::select(&["png", "jpg", "jpeg", "PNG", "Jpg", "JPEG", "webp", "gif", "txt", "bmp"])
    ) {
        let filename = format!("test.{}", extension);
        let expected = matches!(extension.to_lowercase().as_str(), "png" | "jpg" | "jpeg");
        prop_assert_eq!(is_image_file(Path::new(&filename)), expected);
    }

    #[test]
    fn output_path_keeps_stem_and_forces_jpg(
        stem in "[a-zA-Z0-9_-]{1,16}",
        extension in prop::sample::select(&["png", "jpg", "jpeg", "PNG"])
    ) {
        let input = format!("images/{}.{}", stem, extension);
        let output = output_path(Path::new(&input), Path::new("output2")).unwrap();
        prop_assert_eq!(output, Path::new("output2").join(format!("{}.jpg", stem)));
    }
}
