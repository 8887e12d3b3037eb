use crate::all::*;

// One output record per image, consumed by the downstream training pipeline.
#[derive(Clone, Debug, Serialize)]
#[allow(non_snake_case)]
pub struct ImageRecord {
  pub image_path: String,
  pub T_pointcloud_camera: [[f64; 4]; 4],
  pub camera_intrinsics: [[f64; 3]; 3],
  pub camera_height: f64,
  pub camera_width: f64,
  pub camera_id: u32,
}

pub fn assemble_images(data: &SfmData) -> Result<Vec<ImageRecord>> {
  // One camera model for the whole dataset, so intrinsic 0 applies to every
  // pose.
  let intrinsic = data.intrinsics.get(0)
    .ok_or(anyhow!("Document has no intrinsics."))?;
  let camera_intrinsics = matrix3_rows(&intrinsic_matrix(intrinsic)?);

  let mut images = Vec::with_capacity(data.poses.len());
  for pose in &data.poses {
    let id = json_id(&pose.poseId)?;
    let view = data.views.get(&id)
      .ok_or(anyhow!("Pose {} has no matching view.", id))?;
    images.push(ImageRecord {
      image_path: view.path.clone(),
      T_pointcloud_camera: matrix4_rows(&pose_matrix(pose)?),
      camera_intrinsics,
      camera_height: view.height,
      camera_width: view.width,
      camera_id: 0,
    });
  }
  Ok(images)
}
