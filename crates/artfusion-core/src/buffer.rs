//! Pixel containers shared by every engine operation.
//!
//! [`BgrImage`] is the only color representation the engine accepts or
//! returns: 8-bit samples, three per pixel, in blue/green/red order, row-major.
//! [`Mask`] is its single-channel companion used for selections and opacity.
//!
//! Both types check their buffer length on construction and panic on a
//! mismatch. A wrongly shaped buffer is a caller bug, not a runtime condition.

/// A dense 8-bit BGR image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgrImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// BGR pixel data in row-major order (3 bytes per pixel).
    pixels: Vec<u8>,
}

impl BgrImage {
    /// Create an image from BGR pixel data.
    ///
    /// # Panics
    /// Panics if `pixels.len() != width * height * 3`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize * 3,
            "BGR buffer size mismatch for {}x{} image",
            width,
            height
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create an image filled with a single BGR color.
    pub fn filled(width: u32, height: u32, bgr: [u8; 3]) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * 3);
        for _ in 0..count {
            pixels.extend_from_slice(&bgr);
        }
        Self::new(width, height, pixels)
    }

    /// Create a black image.
    pub fn zeros(width: u32, height: u32) -> Self {
        Self::new(width, height, vec![0; width as usize * height as usize * 3])
    }

    /// Create an image from RGB-ordered pixel data.
    pub fn from_rgb(width: u32, height: u32, mut rgb: Vec<u8>) -> Self {
        swap_red_blue(&mut rgb);
        Self::new(width, height, rgb)
    }

    /// Create an image from an `image::RgbImage`, reordering channels to BGR.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self::from_rgb(width, height, img.into_raw())
    }

    /// Convert to an `image::RgbImage` with channels in RGB order.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        let (width, height) = (self.width, self.height);
        let rgb = self.to_rgb();
        image::RgbImage::from_raw(width, height, rgb)
            .unwrap_or_else(|| unreachable!("buffer length checked at construction"))
    }

    /// Copy the pixel data out in RGB order.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = self.pixels.clone();
        swap_red_blue(&mut rgb);
        rgb
    }

    /// BGR pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the image and return its BGR buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Get the BGR triple at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Build a new image of the same size by mapping every pixel.
    pub(crate) fn map_pixels<F>(&self, mut f: F) -> BgrImage
    where
        F: FnMut([u8; 3]) -> [u8; 3],
    {
        let mut out = Vec::with_capacity(self.pixels.len());
        for px in self.pixels.chunks_exact(3) {
            out.extend_from_slice(&f([px[0], px[1], px[2]]));
        }
        BgrImage::new(self.width, self.height, out)
    }
}

/// A single-channel 8-bit grid, used as a selection or opacity weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    /// Mask width in pixels.
    pub width: u32,
    /// Mask height in pixels.
    pub height: u32,
    values: Vec<u8>,
}

impl Mask {
    /// Create a mask from raw values.
    ///
    /// # Panics
    /// Panics if `values.len() != width * height`.
    pub fn new(width: u32, height: u32, values: Vec<u8>) -> Self {
        assert_eq!(
            values.len(),
            width as usize * height as usize,
            "mask buffer size mismatch for {}x{} mask",
            width,
            height
        );
        Self {
            width,
            height,
            values,
        }
    }

    /// Create a mask with every value set to `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self::new(width, height, vec![value; width as usize * height as usize])
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn into_values(self) -> Vec<u8> {
        self.values
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.values[y as usize * self.width as usize + x as usize]
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Flip every value (`255 - v`).
    pub fn inverted(&self) -> Mask {
        Mask::new(
            self.width,
            self.height,
            self.values.iter().map(|v| 255 - v).collect(),
        )
    }

    /// Replicate the mask into a three-channel image.
    pub fn to_bgr(&self) -> BgrImage {
        let mut pixels = Vec::with_capacity(self.values.len() * 3);
        for &v in &self.values {
            pixels.extend_from_slice(&[v, v, v]);
        }
        BgrImage::new(self.width, self.height, pixels)
    }
}

/// Round a float sample to the nearest 8-bit value, saturating at 0 and 255.
#[inline]
pub(crate) fn quantize(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn swap_red_blue(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
}
