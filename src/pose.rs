use crate::all::*;
use serde_json::Value;

#[derive(Deserialize)]
struct PoseBody {
  transform: PoseTransform,
}

#[derive(Deserialize)]
struct PoseTransform {
  rotation: Vec<Value>,
  center: Vec<Value>,
}

// Camera-to-world placement as a homogeneous transform. The rotation fills the
// upper-left 3x3 block row-major, the center fills the last column.
pub fn pose_matrix(record: &PoseRecord) -> Result<Matrix4d> {
  let body = parse_pose_body(&record.pose)?;
  let r = body.transform.rotation.iter()
    .map(json_f64)
    .collect::<Result<Vec<_>>>()
    .context("Bad pose rotation.")?;
  let c = body.transform.center.iter()
    .map(json_f64)
    .collect::<Result<Vec<_>>>()
    .context("Bad pose center.")?;
  if r.len() < 9 {
    bail!("Pose rotation has {} values, expected 9.", r.len());
  }
  if c.len() < 3 {
    bail!("Pose center has {} values, expected 3.", c.len());
  }

  Ok(Matrix4d::new(
    r[0], r[1], r[2], c[0],
    r[3], r[4], r[5], c[1],
    r[6], r[7], r[8], c[2],
    0., 0., 0., 1.,
  ))
}

// Some exports serialize the pose as a Python-style literal with single
// quotes. Consume the structured form directly and fall back to normalizing
// the quotes only when the field really is a string blob.
fn parse_pose_body(pose: &Value) -> Result<PoseBody> {
  match pose {
    Value::String(s) => serde_json::from_str(&s.replace('\'', "\""))
      .context("Failed to parse string-encoded pose."),
    _ => serde_json::from_value(pose.clone())
      .context("Failed to parse pose transform."),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn pose_record(pose: Value) -> PoseRecord {
    PoseRecord { poseId: json!("0"), pose }
  }

  #[test]
  fn test_identity_rotation() {
    let t = pose_matrix(&pose_record(json!({"transform": {
      "rotation": [1, 0, 0, 0, 1, 0, 0, 0, 1],
      "center": [1, 2, 3],
    }}))).unwrap();
    assert_eq!(t, Matrix4d::new(
      1., 0., 0., 1.,
      0., 1., 0., 2.,
      0., 0., 1., 3.,
      0., 0., 0., 1.,
    ));
  }

  #[test]
  fn test_row_major_rotation() {
    let t = pose_matrix(&pose_record(json!({"transform": {
      "rotation": ["0.1", "0.2", "0.3", "0.4", "0.5", "0.6", "0.7", "0.8", "0.9"],
      "center": ["-1.0", "0.0", "1.0"],
    }}))).unwrap();
    // First source row lands on the first matrix row.
    assert_eq!(t[(0, 0)], 0.1);
    assert_eq!(t[(0, 1)], 0.2);
    assert_eq!(t[(1, 0)], 0.4);
    assert_eq!(t[(2, 2)], 0.9);
    assert_eq!(t[(0, 3)], -1.);
    assert_eq!(t[(2, 3)], 1.);
    assert_eq!(t.row(3), Matrix4d::identity().row(3));
  }

  #[test]
  fn test_string_blob_fallback() {
    let blob = "{'transform': {'rotation': ['1', '0', '0', '0', '1', '0', '0', '0', '1'], 'center': ['5', '6', '7']}}";
    let t = pose_matrix(&pose_record(json!(blob))).unwrap();
    assert_eq!(t[(0, 3)], 5.);
    assert_eq!(t[(1, 3)], 6.);
    assert_eq!(t[(2, 3)], 7.);
  }

  #[test]
  fn test_malformed_pose() {
    // Too few rotation values.
    assert!(pose_matrix(&pose_record(json!({"transform": {
      "rotation": [1, 0, 0], "center": [1, 2, 3],
    }}))).is_err());
    // Too few center values.
    assert!(pose_matrix(&pose_record(json!({"transform": {
      "rotation": [1, 0, 0, 0, 1, 0, 0, 0, 1], "center": [1],
    }}))).is_err());
    // Unparseable blob.
    assert!(pose_matrix(&pose_record(json!("{'transform': oops"))).is_err());
    // Missing transform key.
    assert!(pose_matrix(&pose_record(json!({}))).is_err());
  }
}
