//! .

use {
  itertools::iproduct,
  image::Rgb,
  crate::{
    buffer::PixelBuffer,
    geometry::PixelBox
  }
};

pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

/// A solid circle inscribed in `region`, filled with `color`.
///
/// The circle is centered on the integer-truncating midpoint of the box, not
/// on the candidate center the box was built from — after boundary correction
/// those can differ, and it is the corrected box that gets stamped.
#[derive(Debug, Copy, Clone)]
pub struct Stamp {
  pub region: PixelBox,
  pub radius: i32,
  pub color: Rgb<u8>
}

impl Draw<PixelBuffer> for Stamp {
  fn draw(&self, image: &mut PixelBuffer) {
    let center = self.region.min + (self.region.max - self.region.min) / 2;
    let r2 = self.radius * self.radius;
    iproduct!(self.region.y_range(), self.region.x_range())
      .for_each(|(y, x)| {
        let (dx, dy) = (x - center.x, y - center.y);
        // pixels inside the box but outside the circle keep their content
        if dx * dx + dy * dy <= r2 {
          image.pixel_mut(x as u32, y as u32).copy_from_slice(&self.color.0);
        }
      });
  }
}
