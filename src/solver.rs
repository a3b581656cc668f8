//! Greedy hill-climbing over candidate circles.
//!
//! Two working canvases are kept in lockstep with each other: `trial`, onto
//! which every candidate is stamped, and `accepted`, which only ever holds
//! confirmed stamps. After every iteration the two agree byte-for-byte within
//! the candidate's box — the winner's pixels are copied over the loser's — and
//! since both start from the same black fill, they agree everywhere at all
//! times. The source image is read-only throughout.

use {
  rand::{Rng, SeedableRng},
  rand_pcg::Lcg128Xsl64,
  image::Rgb,
  euclid::Point2D,
  crate::{
    buffer::PixelBuffer,
    drawing::{Draw, Stamp},
    error::{Error, Result},
    geometry::{self, Circle, PixelBox},
    metric::region_distance
  }
};

/// Outcome of a single iteration.
#[derive(Debug, Copy, Clone)]
pub struct Step {
  pub accepted: bool,
  pub region: PixelBox
}

pub struct HillClimb {
  source: PixelBuffer,
  trial: PixelBuffer,
  accepted: PixelBuffer,
  radius: i32,
  rng: Lcg128Xsl64,
  kept: u64,
  discarded: u64
}

impl HillClimb {
  /// `radius` must be nonzero, and the circle diameter must fit in both
  /// image dimensions — boundary correction only shifts boxes, so it cannot
  /// recover an oversized one.
  pub fn new(source: PixelBuffer, radius: u32, seed: u64) -> Result<Self> {
    if radius == 0 {
      return Err(Error::ZeroRadius);
    }
    let (width, height) = (source.width(), source.height());
    if radius > width.min(height) / 2 {
      return Err(Error::RadiusTooLarge { radius, width, height });
    }
    Ok(HillClimb {
      trial: PixelBuffer::new(width, height),
      accepted: PixelBuffer::new(width, height),
      source,
      radius: radius as i32,
      rng: Lcg128Xsl64::seed_from_u64(seed),
      kept: 0,
      discarded: 0
    })
  }

  /// The color of a uniformly random source pixel, independent of the
  /// candidate's center.
  fn sample_color(&mut self) -> Rgb<u8> {
    let x = self.rng.gen_range(0..self.source.width());
    let y = self.rng.gen_range(0..self.source.height());
    let pixel = self.source.pixel(x, y);
    Rgb([pixel[0], pixel[1], pixel[2]])
  }

  /// Propose, stamp, score and resolve one candidate circle.
  pub fn step(&mut self) -> Step {
    let circle = Circle {
      center: Point2D::new(
        self.rng.gen_range(0..self.source.width()) as i32,
        self.rng.gen_range(0..self.source.height()) as i32
      ),
      radius: self.radius
    };
    let color = self.sample_color();
    let region = geometry::correct(
      circle.bounding_box(), self.source.width(), self.source.height()
    );
    Stamp { region, radius: self.radius, color }.draw(&mut self.trial);

    let new_score = region_distance(&self.source, &self.trial, region);
    let old_score = region_distance(&self.source, &self.accepted, region);

    // strict less-than: a tie discards the stamp
    let accepted = new_score < old_score;
    if accepted {
      self.kept += 1;
      self.accepted.copy_region(&self.trial, region);
    } else {
      self.discarded += 1;
      self.trial.copy_region(&self.accepted, region);
    }
    Step { accepted, region }
  }

  /// Caller-driven iteration; apply `.take(n)` for a fixed run length.
  pub fn iter(&mut self) -> impl Iterator<Item = Step> + '_ {
    std::iter::repeat_with(move || self.step())
  }

  /// The last-confirmed state of the approximation.
  pub fn accepted(&self) -> &PixelBuffer { &self.accepted }
  pub fn into_accepted(self) -> PixelBuffer { self.accepted }

  pub fn kept(&self) -> u64 { self.kept }
  pub fn discarded(&self) -> u64 { self.discarded }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn solid(width: u32, height: u32, color: [u8; 3]) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    for y in 0..height {
      for x in 0..width {
        buffer.pixel_mut(x, y).copy_from_slice(&color);
      }
    }
    buffer
  }

  /// deterministic non-uniform test pattern
  fn patterned(width: u32, height: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    for y in 0..height {
      for x in 0..width {
        let i = (y * width + x) as usize;
        buffer.pixel_mut(x, y).copy_from_slice(&[
          (i * 31 % 251) as u8,
          (i * 17 % 239) as u8,
          (i * 7 % 127) as u8
        ]);
      }
    }
    buffer
  }

  #[test]
  fn preconditions_fail_fast() {
    assert!(matches!(
      HillClimb::new(PixelBuffer::new(16, 16), 0, 0),
      Err(Error::ZeroRadius)
    ));
    // diameter 18 > min(16, 32)
    assert!(matches!(
      HillClimb::new(PixelBuffer::new(16, 32), 9, 0),
      Err(Error::RadiusTooLarge { radius: 9, .. })
    ));
    assert!(HillClimb::new(PixelBuffer::new(16, 32), 8, 0).is_ok());
  }

  #[test]
  fn first_stamp_on_solid_source_is_kept() {
    // solid red source: any sampled color is red, so the very first circle
    // must beat the black canvas within its box and become permanent
    let source = solid(4, 4, [255, 0, 0]);
    let mut climb = HillClimb::new(source.clone(), 1, 0).unwrap();
    let step = climb.step();
    assert!(step.accepted);
    assert_eq!(climb.kept(), 1);

    // a radius-1 stamp paints 3 of the 4 box pixels red; the remaining
    // corner stays black, so the box residual is exactly one black pixel
    let residual = region_distance(&source, climb.accepted(), step.region);
    assert_eq!(residual, 255.0 / 4.0);

    // everything outside the box is still black
    for y in 0..4u32 {
      for x in 0..4u32 {
        let inside = step.region.x_range().contains(&(x as i32))
          && step.region.y_range().contains(&(y as i32));
        if !inside {
          assert_eq!(climb.accepted().pixel(x, y), &[0, 0, 0]);
        }
      }
    }
  }

  #[test]
  fn ties_are_rejected() {
    // all-black source over black canvases: every candidate scores exactly
    // the same as the current state, and strict less-than rejects it
    let source = solid(8, 8, [0, 0, 0]);
    let mut climb = HillClimb::new(source, 2, 7).unwrap();
    climb.iter().take(200).for_each(drop);
    assert_eq!(climb.kept(), 0);
    assert_eq!(climb.discarded(), 200);
    assert!(climb.accepted().as_bytes().iter().all(|&b| b == 0));
  }

  #[test]
  fn canvases_agree_after_every_iteration() {
    let mut climb = HillClimb::new(patterned(16, 16), 3, 42).unwrap();
    for _ in 0..300 {
      climb.step();
      assert_eq!(climb.trial.as_bytes(), climb.accepted.as_bytes());
    }
    assert!(climb.kept() > 0, "pattern source should accept some stamps");
  }

  #[test]
  fn resolution_keeps_the_better_candidate() {
    let source = patterned(16, 16);
    let mut climb = HillClimb::new(source.clone(), 3, 9).unwrap();
    for _ in 0..300 {
      let before = climb.accepted().clone();
      let step = climb.step();
      let after = region_distance(&source, climb.accepted(), step.region);
      if step.accepted {
        assert!(after < region_distance(&source, &before, step.region));
      } else {
        assert_eq!(climb.accepted().as_bytes(), before.as_bytes());
      }
    }
  }

  #[test]
  fn fixed_seed_is_deterministic() {
    let source = patterned(24, 18);
    let mut a = HillClimb::new(source.clone(), 4, 1234).unwrap();
    let mut b = HillClimb::new(source, 4, 1234).unwrap();
    a.iter().take(500).for_each(drop);
    b.iter().take(500).for_each(drop);
    assert_eq!(a.kept(), b.kept());
    assert_eq!(a.accepted().as_bytes(), b.accepted().as_bytes());
  }

  #[test]
  fn full_image_boxes_when_diameter_matches() {
    let mut climb = HillClimb::new(patterned(12, 12), 6, 3).unwrap();
    for step in climb.iter().take(50) {
      assert_eq!((step.region.min.x, step.region.min.y), (0, 0));
      assert_eq!((step.region.max.x, step.region.max.y), (12, 12));
    }
  }
}
