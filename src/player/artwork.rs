use image::imageops::FilterType;

use crate::player::error::ClientError;

/// Side length, in pixels, art is scaled to before it reaches the UI.
pub const ART_SIDE: u32 = 32;

/// Decoded album art, downscaled to an `ART_SIDE` square of RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtImage {
    side: u32,
    pixels: Vec<[u8; 3]>,
    /// Size of the image as served, before decoding.
    pub byte_len: usize,
    pub source_width: u32,
    pub source_height: u32,
}

impl ArtImage {
    pub fn decode(bytes: &[u8]) -> Result<Self, ClientError> {
        let img = image::load_from_memory(bytes)?;
        let (source_width, source_height) = (img.width(), img.height());
        let resized = img
            .resize_exact(ART_SIDE, ART_SIDE, FilterType::Nearest)
            .to_rgb8();

        Ok(Self {
            side: ART_SIDE,
            pixels: resized.pixels().map(|p| p.0).collect(),
            byte_len: bytes.len(),
            source_width,
            source_height,
        })
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    /// Pixel at `(x, y)`, clamped to the image bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let x = x.min(self.side - 1);
        let y = y.min(self.side - 1);
        self.pixels[(y * self.side + x) as usize]
    }
}

#[cfg(test)]
pub(crate) fn png_bytes(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb(rgb));
    let mut bytes = std::io::Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
    bytes.into_inner()
}
