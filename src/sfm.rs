use crate::all::*;
use serde_json::Value;

// Field names mirror the upstream export schema.
#[derive(Deserialize)]
#[allow(non_snake_case)]
pub struct SfmDocument {
  pub structure: Vec<StructurePoint>,
  pub views: Vec<ViewRecord>,
  pub poses: Vec<PoseRecord>,
  pub intrinsics: Vec<IntrinsicRecord>,
}

#[derive(Deserialize)]
#[allow(non_snake_case)]
pub struct StructurePoint {
  pub X: Vec<Value>,
}

#[derive(Deserialize)]
#[allow(non_snake_case)]
pub struct ViewRecord {
  pub poseId: Value,
  pub path: String,
  pub height: Value,
  pub width: Value,
}

#[derive(Deserialize)]
#[allow(non_snake_case)]
pub struct PoseRecord {
  pub poseId: Value,
  // Either a nested transform or a string-encoded blob, see `pose_matrix`.
  pub pose: Value,
}

#[derive(Deserialize)]
#[allow(non_snake_case)]
pub struct IntrinsicRecord {
  pub principalPoint: Vec<Vec<Value>>,
  pub focalLength: Vec<Value>,
}

pub struct View {
  pub path: String,
  pub height: f64,
  pub width: f64,
}

pub struct SfmData {
  pub points: Vec<Vector3d>,
  pub views: HashMap<String, View>,
  // Source order preserved.
  pub poses: Vec<PoseRecord>,
  pub intrinsics: Vec<IntrinsicRecord>,
}

pub fn load_sfm(path: &Path) -> Result<SfmData> {
  let s = std::fs::read_to_string(path)
    .context(format!("Failed to read file {}.", path.display()))?;
  parse_sfm(&s)
    .context(format!("Failed to parse {}.", path.display()))
}

pub fn parse_sfm(s: &str) -> Result<SfmData> {
  let doc: SfmDocument = serde_json::from_str(s)?;

  let points = doc.structure.iter()
    .map(|p| structure_point(&p.X))
    .collect::<Result<Vec<_>>>()?;

  let mut views = HashMap::new();
  for v in doc.views {
    let id = json_id(&v.poseId)?;
    let view = View {
      path: v.path,
      height: json_f64(&v.height)?,
      width: json_f64(&v.width)?,
    };
    if views.insert(id.clone(), view).is_some() {
      warn!("Duplicate view for pose {}, keeping the last one.", id);
    }
  }

  Ok(SfmData {
    points,
    views,
    poses: doc.poses,
    intrinsics: doc.intrinsics,
  })
}

fn structure_point(x: &[Value]) -> Result<Vector3d> {
  if x.len() < 3 {
    bail!("Structure point has {} coordinates, expected 3.", x.len());
  }
  Ok(Vector3d::new(json_f64(&x[0])?, json_f64(&x[1])?, json_f64(&x[2])?))
}
