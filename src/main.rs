mod all;
mod assemble;
mod camera;
mod output;
mod pose;
mod sfm;
mod types;
mod util;

use all::*;
use clap::Parser;

/// Convert an SfM export into a parquet point cloud and train/val camera
/// manifests.
#[derive(Parser)]
struct Args {
  /// SfM export document.
  #[clap(long, default_value = "sfm.json")]
  input: PathBuf,
  /// Columnar point cloud output.
  #[clap(long, default_value = "point_cloud.parquet")]
  point_cloud: PathBuf,
  /// Training split manifest.
  #[clap(long, default_value = "train.json")]
  train: PathBuf,
  /// Validation split manifest.
  #[clap(long, default_value = "val.json")]
  val: PathBuf,
  /// Seed for the train/val shuffle. Omitting it makes the split differ
  /// between runs.
  #[clap(long)]
  seed: Option<u64>,
}

fn handle_error(err: &anyhow::Error) {
  for (i, e) in err.chain().enumerate() {
    println!("  {}: {}", i + 1, e);
  }
}

fn main() {
  env_logger::Builder::new()
    .filter_level(LevelFilter::Info)
    .init();
  if let Err(err) = run(&Args::parse()) {
    handle_error(&err);
    std::process::exit(1);
  }
}

fn run(args: &Args) -> Result<()> {
  let data = load_sfm(&args.input)?;
  info!("Loaded {} points, {} views, {} poses.",
    data.points.len(), data.views.len(), data.poses.len());

  write_point_cloud(&args.point_cloud, &data.points)?;

  let images = assemble_images(&data)?;
  let (train, val) = split_images(images, args.seed);
  info!("Split {} images into {} train and {} val.",
    train.len() + val.len(), train.len(), val.len());

  write_images(&args.train, &train)?;
  write_images(&args.val, &val)?;
  Ok(())
}
