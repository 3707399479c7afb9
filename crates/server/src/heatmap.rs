//! Stand-in heatmap synthesis for the development backend.
//!
//! Production Grad-CAM runs in the external inference service. For local
//! development the dashboard still needs something to toggle, so this module
//! fakes an activation map by tinting the uploaded patch along its luminance
//! and returning it as a `data:` URL.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;

/// Blend weight of the heat tint over the original pixel.
const OVERLAY_OPACITY: f32 = 0.45;

/// Render a heat overlay for the uploaded bytes as a PNG data URL.
///
/// Returns `None` when the bytes do not decode as an image; the response then
/// simply carries no heatmap.
pub fn render(bytes: &[u8]) -> Option<String> {
    let img = image::load_from_memory(bytes).ok()?;
    let mut rgb = img.to_rgb8();

    for px in rgb.pixels_mut() {
        let [r, g, b] = px.0;
        let lum = luminance(r, g, b);

        // Hot (bright) regions toward red, cold ones toward blue.
        let heat = [(255.0 * lum) as u8, 0, (255.0 * (1.0 - lum)) as u8];
        px.0 = [
            blend(r, heat[0]),
            blend(g, heat[1]),
            blend(b, heat[2]),
        ];
    }

    let mut png = Vec::new();
    image::DynamicImage::ImageRgb8(rgb)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .ok()?;

    Some(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}

fn luminance(r: u8, g: u8, b: u8) -> f32 {
    (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) / 255.0
}

fn blend(original: u8, heat: u8) -> u8 {
    (original as f32 * (1.0 - OVERLAY_OPACITY) + heat as f32 * OVERLAY_OPACITY) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png() -> Vec<u8> {
        let mut img = image::RgbImage::new(4, 4);
        img.put_pixel(0, 0, image::Rgb([255, 255, 255]));
        img.put_pixel(3, 3, image::Rgb([10, 10, 10]));

        let mut png = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();
        png
    }

    #[test]
    fn test_render_produces_data_url() {
        let url = render(&tiny_png()).unwrap();

        assert!(url.starts_with("data:image/png;base64,"));
        // The base64 payload must itself decode back to a PNG.
        let payload = url.strip_prefix("data:image/png;base64,").unwrap();
        let decoded = STANDARD.decode(payload).unwrap();
        assert!(image::load_from_memory(&decoded).is_ok());
    }

    #[test]
    fn test_render_rejects_non_image_bytes() {
        assert!(render(b"definitely not a png").is_none());
        assert!(render(&[]).is_none());
    }
}
