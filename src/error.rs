//! .

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error(transparent)]
  Image(#[from] image::ImageError),

  #[error("pixel data of length {len} does not match {width}x{height}x3")]
  BufferSizeMismatch { width: u32, height: u32, len: usize },
  #[error("iteration count must be nonzero")]
  ZeroIterations,
  #[error("circle radius must be nonzero")]
  ZeroRadius,
  /// Boundary correction only shifts boxes, never shrinks them; a diameter
  /// wider than the image cannot be corrected into bounds.
  #[error("circle radius {radius} too large for a {width}x{height} image, \
           the diameter must fit in both dimensions")]
  RadiusTooLarge { radius: u32, width: u32, height: u32 },
}
