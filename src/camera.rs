use crate::all::*;

// Pinhole intrinsics with zero skew and a single focal length for both axes:
//   [[f, 0, cx],
//    [0, f, cy],
//    [0, 0,  1]]
pub fn intrinsic_matrix(intrinsic: &IntrinsicRecord) -> Result<Matrix3d> {
  let pp = intrinsic.principalPoint.get(0)
    .ok_or(anyhow!("Intrinsic has an empty principalPoint."))?;
  if pp.len() < 2 {
    bail!("Principal point has {} components, expected 2.", pp.len());
  }
  let cx = json_f64(&pp[0])?;
  let cy = json_f64(&pp[1])?;
  let f = json_f64(intrinsic.focalLength.get(0)
    .ok_or(anyhow!("Intrinsic has an empty focalLength."))?)?;

  Ok(Matrix3d::new(
    f, 0., cx,
    0., f, cy,
    0., 0., 1.,
  ))
}
