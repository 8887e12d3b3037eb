use crate::all::*;
use parquet::data_type::DoubleType;
use parquet::file::properties::WriterProperties;
use parquet::file::writer::SerializedFileWriter;
use parquet::schema::parser::parse_message_type;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::sync::Arc;

pub const TRAIN_FRACTION: f64 = 0.8;

const POINT_CLOUD_SCHEMA: &str = "
  message point_cloud {
    required double x;
    required double y;
    required double z;
  }
";

// One row group, one column per axis.
pub fn write_point_cloud(path: &Path, points: &[Vector3d]) -> Result<()> {
  let schema = Arc::new(parse_message_type(POINT_CLOUD_SCHEMA)?);
  let file = File::create(path)
    .context(format!("Failed to create {}.", path.display()))?;
  let props = Arc::new(WriterProperties::builder().build());
  let mut writer = SerializedFileWriter::new(file, schema, props)?;

  let mut row_group = writer.next_row_group()?;
  for axis in 0..3 {
    let values: Vec<f64> = points.iter().map(|p| p[axis]).collect();
    let mut column = row_group.next_column()?
      .ok_or(anyhow!("Point cloud schema ran out of columns at {}.", axis))?;
    column.typed::<DoubleType>().write_batch(&values, None, None)?;
    column.close()?;
  }
  row_group.close()?;
  writer.close()?;
  Ok(())
}

// Shuffle, then cut at floor(0.8 * n). Without a seed the partition differs
// between runs.
pub fn split_images(
  mut images: Vec<ImageRecord>,
  seed: Option<u64>,
) -> (Vec<ImageRecord>, Vec<ImageRecord>) {
  let mut rng = match seed {
    Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
    None => Xoshiro256PlusPlus::from_entropy(),
  };
  images.shuffle(&mut rng);
  let split = (images.len() as f64 * TRAIN_FRACTION) as usize;
  let val = images.split_off(split);
  (images, val)
}

pub fn write_images(path: &Path, images: &[ImageRecord]) -> Result<()> {
  let file = File::create(path)
    .context(format!("Failed to create {}.", path.display()))?;
  serde_json::to_writer(file, images)
    .context(format!("Failed to write {}.", path.display()))?;
  Ok(())
}
