use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, RgbaImage};

use crate::error::AvatarError;

/// Decoded, straight-alpha RGBA pixels ready to be uploaded as a texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl AvatarImage {
    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let ix = ((y * self.width + x) * 4) as usize;
        self.rgba
            .get(ix..ix + 4)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }
}

impl From<RgbaImage> for AvatarImage {
    fn from(img: RgbaImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            rgba: img.into_raw(),
        }
    }
}

/// Decodes `bytes` and applies the circular avatar crop at `size` x `size` pixels.
pub fn decode_circle_avatar(bytes: &[u8], size: u32) -> Result<AvatarImage, AvatarError> {
    let decoded = image::load_from_memory(bytes)?;
    Ok(circle_crop(&decoded, size).into())
}

/// Center-crops to a square, scales to `size` and clears everything outside the
/// inscribed circle. The edge gets one pixel of coverage-based anti-aliasing.
pub fn circle_crop(img: &DynamicImage, size: u32) -> RgbaImage {
    let size = size.max(1);
    let (w, h) = img.dimensions();
    let side = w.min(h).max(1);
    let x = w.saturating_sub(side) / 2;
    let y = h.saturating_sub(side) / 2;

    let mut out = img
        .crop_imm(x, y, side, side)
        .resize_exact(size, size, FilterType::Triangle)
        .to_rgba8();

    let r = size as f32 / 2.0;
    for (px, py, pixel) in out.enumerate_pixels_mut() {
        let dx = px as f32 + 0.5 - r;
        let dy = py as f32 + 0.5 - r;
        let coverage = (r - (dx * dx + dy * dy).sqrt() + 0.5).clamp(0.0, 1.0);
        pixel[3] = (pixel[3] as f32 * coverage).round() as u8;
    }

    out
}
