//! .

use {
  itertools::iproduct,
  crate::{
    buffer::PixelBuffer,
    geometry::PixelBox
  }
};

/// Euclidean color distance between two pixels,
/// `√(Δr² + Δg² + Δb²)`.
fn pixel_distance(a: &[u8], b: &[u8]) -> f64 {
  let sq = |i: usize| {
    let d = a[i] as i32 - b[i] as i32;
    (d * d) as f64
  };
  (sq(0) + sq(1) + sq(2)).sqrt()
}

/// Mean per-pixel Euclidean RGB distance between `a` and `b`, restricted to
/// `region`.
///
/// The whole image is never scanned: only the region just modified can have
/// changed score. The region must have nonzero area, which holds for any box
/// produced from a nonzero radius.
pub fn region_distance(a: &PixelBuffer, b: &PixelBuffer, region: PixelBox) -> f64 {
  let sum: f64 = iproduct!(region.y_range(), region.x_range())
    .map(|(y, x)| pixel_distance(a.pixel(x as u32, y as u32), b.pixel(x as u32, y as u32)))
    .sum();
  sum / (region.width() as f64 * region.height() as f64)
}
