use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use region_finder::render::Painting;
use region_finder::tools::{
    detect_frames, frame_paths, load_frame, parse_color, pick_color, save_frame, summarize,
};
use region_finder::{Color, Frame, PixelBuffer, RegionError, RegionFinder, RegionParams};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "regiontool", version, about = "Color region finder CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find regions of the target color in a single image
    Detect {
        #[arg(long)]
        image: PathBuf,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Write a copy of an image with every region in a random color
    Recolor {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Seed for reproducible colors
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Paint the largest region of every frame in a directory onto one canvas
    Paint {
        #[arg(long)]
        frames: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Brush color as r,g,b
        #[arg(long, default_value = "0,0,255")]
        brush: String,
        #[arg(long)]
        limit: Option<usize>,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Detect regions in every image under a directory, in parallel
    Batch {
        #[arg(long)]
        root: PathBuf,
        /// Target color as r,g,b
        #[arg(long)]
        color: String,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        max_diff: Option<u8>,
        #[arg(long)]
        min_size: Option<usize>,
    },
}

#[derive(Args)]
struct TargetArgs {
    /// Target color as r,g,b
    #[arg(long, conflicts_with = "at")]
    color: Option<String>,
    /// Take the target color from the pixel at x,y of the (first) image
    #[arg(long)]
    at: Option<String>,
    /// Per-channel difference bound (overrides REGION_MAX_COLOR_DIFF)
    #[arg(long)]
    max_diff: Option<u8>,
    /// Minimum region size (overrides REGION_MIN_SIZE)
    #[arg(long)]
    min_size: Option<usize>,
}

impl TargetArgs {
    fn params(&self) -> RegionParams {
        params_from(self.max_diff, self.min_size)
    }

    fn resolve(&self, frame: &Frame) -> Result<Color, RegionError> {
        match (&self.color, &self.at) {
            (Some(color), _) => parse_color(color),
            (None, Some(at)) => {
                let (x, y) = parse_point(at)?;
                pick_color(frame, x, y)
            }
            (None, None) => Err(RegionError::NoTargetColor),
        }
    }
}

fn params_from(max_diff: Option<u8>, min_size: Option<usize>) -> RegionParams {
    let mut params = RegionParams::from_env();
    if let Some(max_diff) = max_diff {
        params = params.with_max_color_diff(max_diff);
    }
    if let Some(min_size) = min_size {
        params = params.with_min_region_size(min_size);
    }
    params
}

fn parse_point(text: &str) -> Result<(usize, usize), RegionError> {
    let invalid = || RegionError::InvalidPoint(text.to_string());
    let (x, y) = text.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<usize>().map_err(|_| invalid())?;
    let y = y.trim().parse::<usize>().map_err(|_| invalid())?;
    Ok((x, y))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Detect { image, target } => detect_cmd(&image, &target),
        Command::Recolor {
            image,
            out,
            seed,
            target,
        } => recolor_cmd(&image, &out, seed, &target),
        Command::Paint {
            frames,
            out,
            brush,
            limit,
            target,
        } => paint_cmd(&frames, &out, &brush, limit, &target),
        Command::Batch {
            root,
            color,
            limit,
            max_diff,
            min_size,
        } => batch_cmd(&root, &color, limit, params_from(max_diff, min_size)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn finder_for(frame: &Frame, target: &TargetArgs) -> Result<RegionFinder, RegionError> {
    let mut finder = RegionFinder::with_params(target.params());
    finder.set_target(target.resolve(frame)?);
    Ok(finder)
}

fn detect_cmd(image: &Path, target: &TargetArgs) -> Result<(), RegionError> {
    let frame = load_frame(image)?;
    let mut finder = finder_for(&frame, target)?;

    let start = Instant::now();
    finder.find_regions(&frame)?;
    let elapsed = start.elapsed();

    println!(
        "Image: {} ({}x{})",
        image.display(),
        frame.width(),
        frame.height()
    );
    if let Some(color) = finder.target() {
        println!("Target: {color}");
    }
    println!(
        "Found {} regions in {:.2} ms",
        finder.regions().len(),
        elapsed.as_secs_f64() * 1000.0
    );
    for (i, region) in finder.regions().iter().enumerate() {
        if let Some(seed) = region.seed() {
            println!(
                "  Region {}: size={} seed=({}, {})",
                i,
                region.len(),
                seed.x,
                seed.y
            );
        }
    }
    match finder.largest_region() {
        Some(largest) => println!("Largest region: {} pixels", largest.len()),
        None => println!("Largest region: none"),
    }
    Ok(())
}

fn recolor_cmd(
    image: &Path,
    out: &Path,
    seed: Option<u64>,
    target: &TargetArgs,
) -> Result<(), RegionError> {
    let frame = load_frame(image)?;
    let mut finder = finder_for(&frame, target)?;
    finder.find_regions(&frame)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let recolored = finder.recolor(&frame, &mut rng);
    save_frame(&recolored, out)?;
    log::info!(
        "recolored {} regions, wrote {}",
        finder.regions().len(),
        out.display()
    );
    Ok(())
}

fn paint_cmd(
    frames: &Path,
    out: &Path,
    brush: &str,
    limit: Option<usize>,
    target: &TargetArgs,
) -> Result<(), RegionError> {
    let paths = frame_paths(frames, limit);
    let Some(first) = paths.first() else {
        log::warn!("no frames found under {}", frames.display());
        return Ok(());
    };

    let first_frame = load_frame(first)?;
    let mut finder = finder_for(&first_frame, target)?;
    let mut painting = Painting::with_brush(
        first_frame.width(),
        first_frame.height(),
        parse_color(brush)?,
    );

    let mut painted = 0usize;
    for path in &paths {
        let frame = load_frame(path)?;
        if frame.width() != first_frame.width() || frame.height() != first_frame.height() {
            log::warn!(
                "skipping {}: {}x{} does not match canvas {}x{}",
                path.display(),
                frame.width(),
                frame.height(),
                first_frame.width(),
                first_frame.height()
            );
            continue;
        }
        finder.find_regions(&frame)?;
        if let Some(region) = finder.largest_region() {
            painting.paint_region(region);
            painted += 1;
        }
    }

    save_frame(painting.canvas(), out)?;
    log::info!(
        "painted {} of {} frames, wrote {}",
        painted,
        paths.len(),
        out.display()
    );
    Ok(())
}

fn batch_cmd(
    root: &Path,
    color: &str,
    limit: Option<usize>,
    params: RegionParams,
) -> Result<(), RegionError> {
    let target = parse_color(color)?;
    let paths = frame_paths(root, limit);
    let start = Instant::now();
    let results = detect_frames(&paths, target, &params);
    let elapsed = start.elapsed();

    let mut failed = 0usize;
    for (path, result) in &results {
        match result {
            Ok(regions) => {
                let summary = summarize(regions);
                println!(
                    "{}: regions={} pixels={} largest={}",
                    path.display(),
                    summary.regions,
                    summary.total_pixels,
                    summary
                        .largest
                        .map_or_else(|| "-".to_string(), |n| n.to_string())
                );
            }
            Err(err) => {
                failed += 1;
                log::warn!("{}: {}", path.display(), err);
            }
        }
    }
    println!(
        "Processed {} images ({} failed) in {:.2} s",
        results.len(),
        failed,
        elapsed.as_secs_f64()
    );
    Ok(())
}
