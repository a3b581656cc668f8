//! .
//!
//! The origin of the coordinate system is in the top-left corner. All regions
//! are half-open in both axes, and measured in whole pixels.

use euclid::{Box2D, Point2D, Vector2D as V2};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

/// Square pixel region bounding a candidate circle, half-open in both axes.
pub type PixelBox = Box2D<i32, PixelSpace>;

/// A candidate stamp location: center in pixel coordinates, fixed radius.
#[derive(Debug, Copy, Clone)]
pub struct Circle {
  pub center: Point2D<i32, PixelSpace>,
  pub radius: i32
}

impl Circle {
  /// Square box of side `2 * radius` around the center.
  /// May stick out of the image; see [`correct`].
  pub fn bounding_box(&self) -> PixelBox {
    let r = V2::splat(self.radius);
    PixelBox::new(self.center - r, self.center + r)
  }
}

/// Shift (never shrink) `region` so it fits inside `[0, width] × [0, height]`.
///
/// Checks run in order x-low, y-low, y-high, x-high, each seeing the box as
/// mutated by the previous ones. As long as the box side does not exceed
/// either image dimension, the result is always in bounds;
/// [`crate::solver::HillClimb::new`] rejects radii that violate that.
pub fn correct(mut region: PixelBox, width: u32, height: u32) -> PixelBox {
  if region.min.x < 0 {
    region = region.translate(V2::new(-region.min.x, 0));
  }
  if region.min.y < 0 {
    region = region.translate(V2::new(0, -region.min.y));
  }
  if region.max.y > height as i32 {
    region = region.translate(V2::new(0, height as i32 - region.max.y));
  }
  if region.max.x > width as i32 {
    region = region.translate(V2::new(width as i32 - region.max.x, 0));
  }
  region
}
