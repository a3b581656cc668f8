//! .

use {
  std::path::Path,
  image::RgbImage,
  crate::{
    error::{Error, Result},
    geometry::PixelBox
  }
};

/// A flat row-major RGB raster, 3 bytes per pixel.
///
/// Pixel `(x, y)` occupies byte offset `(y * width + x) * 3 .. + 3`, holding
/// ordered `(R, G, B)` components.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
  width: u32,
  height: u32,
  pixels: Vec<u8>
}

impl PixelBuffer {
  /// A solid black buffer. The solver starts both of its working canvases
  /// from this fill, so they agree everywhere from the first iteration on.
  pub fn new(width: u32, height: u32) -> Self {
    PixelBuffer {
      width, height,
      pixels: vec![0; width as usize * height as usize * 3]
    }
  }

  pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
    if pixels.len() != width as usize * height as usize * 3 {
      return Err(Error::BufferSizeMismatch { width, height, len: pixels.len() });
    }
    Ok(PixelBuffer { width, height, pixels })
  }

  /// Read a PNG into an 8-bit 3-channel raster; wider pixel formats are
  /// downsampled to RGB.
  pub fn decode(path: impl AsRef<Path>) -> Result<Self> {
    let image = image::open(path)?.to_rgb8();
    let (width, height) = image.dimensions();
    Self::from_raw(width, height, image.into_raw())
  }

  /// Write the raster to `path` as a PNG with row stride `width * 3`.
  pub fn encode(&self, path: impl AsRef<Path>) -> Result<()> {
    RgbImage::from_raw(self.width, self.height, self.pixels.clone())
      .ok_or(Error::BufferSizeMismatch {
        width: self.width, height: self.height, len: self.pixels.len()
      })?
      .save(path)?;
    Ok(())
  }

  pub fn width(&self) -> u32 { self.width }
  pub fn height(&self) -> u32 { self.height }
  pub fn as_bytes(&self) -> &[u8] { &self.pixels }

  fn offset_of(&self, x: u32, y: u32) -> usize {
    (y as usize * self.width as usize + x as usize) * 3
  }

  /// The 3 color bytes of pixel `(x, y)`.
  pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
    let offset = self.offset_of(x, y);
    &self.pixels[offset..offset + 3]
  }

  pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
    let offset = self.offset_of(x, y);
    &mut self.pixels[offset..offset + 3]
  }

  /// Copy the pixels of `region` from `src` into `self`, one row slice at a
  /// time. Pixels outside the region are untouched. Both buffers must share
  /// dimensions.
  pub fn copy_region(&mut self, src: &PixelBuffer, region: PixelBox) {
    debug_assert_eq!((self.width, self.height), (src.width, src.height));
    let row = 3 * (region.max.x - region.min.x) as usize;
    for y in region.y_range() {
      let start = self.offset_of(region.min.x as u32, y as u32);
      self.pixels[start..start + row]
        .copy_from_slice(&src.pixels[start..start + row]);
    }
  }
}
