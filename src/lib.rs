//! Approximate a raster image with randomly placed filled circles.
//!
//! Each iteration proposes one circle — random center, fixed radius, color
//! sampled from a random pixel of the source image — stamps it onto a trial
//! canvas, and keeps it only if it lowers the mean color distance to the
//! source within the circle's bounding box. Everything is localized to that
//! box: the scoring, and the copy that brings the trial and accepted canvases
//! back into agreement afterwards.
//!
//! # Basic usage
//! ```no_run
//! use dotter::{buffer::PixelBuffer, solver::HillClimb, error::Result};
//!
//! fn main() -> Result<()> {
//!   let source = PixelBuffer::decode("input.png")?;
//!   let mut climb = HillClimb::new(source, 5, 0)?;
//!   climb.iter().take(100_000).for_each(drop);
//!   println!("kept {} circles", climb.kept());
//!   climb.into_accepted().encode("output.png")?;
//!   Ok(())
//! }
//! ```
//!
//! The solver is fully deterministic for a given seed; the bundled CLI seeds
//! from the system clock and prints the seed so a run can be reproduced.

pub mod error;
pub mod geometry;
pub mod buffer;
pub mod drawing;
pub mod metric;
pub mod solver;
