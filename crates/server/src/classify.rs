//! Deterministic stub classifier for the development backend.
//!
//! The real model runs in the external inference service; this stand-in
//! derives a stable pseudo-score from the upload so the dashboard (and the
//! tests) see consistent results for the same patch.

use sha2::{Digest, Sha256};
use web_types::PredictResponse;

use crate::heatmap;

/// Decision threshold between the two classes.
const METASTATIC_THRESHOLD: f64 = 0.5;

/// Classify an uploaded histology patch.
///
/// Empty uploads are reported in-band, matching the reference backend's
/// catch-all error convention.
pub fn analyze(bytes: &[u8]) -> PredictResponse {
    if bytes.is_empty() {
        return PredictResponse::error("Uploaded file was empty.");
    }

    let score = score_from_bytes(bytes);
    let (label, confidence) = if score > METASTATIC_THRESHOLD {
        ("Metastatic", score)
    } else {
        ("Normal", 1.0 - score)
    };

    let message = format!(
        "AI scan complete. Tissue patterns align with {} characteristics.",
        label.to_lowercase()
    );

    let response = PredictResponse::success(
        label,
        format!("{:.2}%", confidence * 100.0),
        message,
    );

    match heatmap::render(bytes) {
        Some(data_url) => response.with_heatmap(data_url),
        None => response,
    }
}

/// Map the upload to a stable score in `[0, 1]`.
fn score_from_bytes(bytes: &[u8]) -> f64 {
    let digest = Sha256::digest(bytes);
    let head = u64::from_be_bytes(
        digest[..8].try_into().expect("SHA-256 digest is 32 bytes"),
    );
    head as f64 / u64::MAX as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_is_deterministic() {
        let first = analyze(b"patch bytes");
        let second = analyze(b"patch bytes");

        assert_eq!(first, second);
    }

    #[test]
    fn test_analyze_labels_and_confidence() {
        let resp = analyze(b"some histology patch");

        assert!(!resp.is_error());
        assert!(resp.prediction == "Metastatic" || resp.prediction == "Normal");

        // Confidence is the winning side of the score, so always >= 50%.
        let value: f64 = resp
            .confidence
            .strip_suffix('%')
            .unwrap()
            .parse()
            .unwrap();
        assert!((50.0..=100.0).contains(&value));
        assert!(resp.message.contains(&resp.prediction.to_lowercase()));
    }

    #[test]
    fn test_analyze_empty_upload_errors_in_band() {
        let resp = analyze(&[]);

        assert!(resp.is_error());
        assert!(resp.heatmap.is_none());
    }

    #[test]
    fn test_non_image_bytes_classify_without_heatmap() {
        let resp = analyze(b"plain text payload");

        assert!(!resp.is_error());
        assert!(resp.heatmap.is_none());
    }

    #[test]
    fn test_image_bytes_classify_with_heatmap() {
        let mut img = image::RgbImage::new(2, 2);
        img.put_pixel(0, 0, image::Rgb([200, 40, 40]));
        let mut png = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let resp = analyze(&png);

        assert!(!resp.is_error());
        assert!(resp.heatmap.is_some());
    }

    #[test]
    fn test_score_range() {
        for sample in [&b"a"[..], b"bb", b"ccc", b"\x00\xff"] {
            let score = score_from_bytes(sample);
            assert!((0.0..=1.0).contains(&score));
        }
    }
}
