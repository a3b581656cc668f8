use {
  std::{
    env,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH}
  },
  anyhow::{ensure, Context, Result},
  dotter::{buffer::PixelBuffer, solver::HillClimb}
};

struct Args {
  source_path: String,
  output_path: String,
  iterations: u64,
  radius: u32,
  make_slices: bool
}

/// Positional arguments, every one of them optional:
/// `dotter [source.png [output.png [iterations [radius [slices]]]]]`.
/// The presence of a fifth argument enables periodic snapshot export.
fn parse_args() -> Result<Args> {
  let args = env::args().collect::<Vec<_>>();
  let iterations = match args.get(3) {
    Some(s) => s.parse().context("invalid iteration count")?,
    None => 100
  };
  ensure!(iterations != 0, "iteration count must be nonzero");
  let radius = match args.get(4) {
    Some(s) => s.parse().context("invalid radius")?,
    None => 5
  };
  ensure!(radius != 0, "radius must be nonzero");
  Ok(Args {
    source_path: args.get(1).cloned().unwrap_or_else(|| "input.png".to_string()),
    output_path: args.get(2).cloned().unwrap_or_else(|| "output.png".to_string()),
    iterations,
    radius,
    make_slices: args.len() > 5
  })
}

fn main() -> Result<()> {
  let args = parse_args()?;

  let source = PixelBuffer::decode(&args.source_path)
    .with_context(|| format!("unable to open/read {}, are you sure it's a png?", args.source_path))?;

  let seed = SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|t| t.as_secs())
    .unwrap_or(0);
  println!("seed = {}", seed);

  let mut climb = HillClimb::new(source, args.radius, seed)?;

  let start = Instant::now();
  let mut last_report: Option<Instant> = None;
  let mut slice = 0u32;

  for i in 0..args.iterations {
    climb.step();

    // status update and optional snapshot, on the same coarse cadence;
    // reports are additionally throttled to one per wall-clock second
    if i % 10_000 == 1 {
      if args.make_slices {
        slice += 1;
        climb.accepted().encode(format!("out-{:04}.png", slice))?;
      }
      if last_report.map_or(true, |t| t.elapsed() >= Duration::from_secs(1)) {
        last_report = Some(Instant::now());
        let elapsed = start.elapsed().as_secs_f64();
        let fraction = i as f64 / args.iterations as f64;
        let eta = elapsed / fraction - elapsed;
        println!("{:.3}% complete, eta = {:.3} seconds", fraction * 100.0, eta);
      }
    }
  }

  climb.accepted().encode(&args.output_path)?;
  println!(
    "Written to {}. Took {} seconds, kept {} circles and discarded {} circles",
    args.output_path,
    start.elapsed().as_secs(),
    climb.kept(),
    climb.discarded()
  );
  Ok(())
}
