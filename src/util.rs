use crate::all::*;
use serde_json::Value;

// Meshroom-style exports write most numbers as decimal strings, so numeric
// fields have to accept both representations.
pub fn json_f64(v: &Value) -> Result<f64> {
  match v {
    Value::Number(n) => n.as_f64()
      .ok_or(anyhow!("Number {} does not fit in f64.", n)),
    Value::String(s) => s.trim().parse::<f64>()
      .map_err(|_| anyhow!("Cannot parse {:?} as a number.", s)),
    _ => bail!("Expected a number, got {}.", v),
  }
}

pub fn json_id(v: &Value) -> Result<String> {
  match v {
    Value::String(s) => Ok(s.clone()),
    Value::Number(n) => Ok(n.to_string()),
    _ => bail!("Expected a string or number identifier, got {}.", v),
  }
}

// nalgebra serializes matrices column-major, while the manifests want nested
// row lists, hence the explicit conversions.
pub fn matrix3_rows(m: &Matrix3d) -> [[f64; 3]; 3] {
  let mut rows = [[0.; 3]; 3];
  for i in 0..3 {
    for j in 0..3 {
      rows[i][j] = m[(i, j)];
    }
  }
  rows
}

pub fn matrix4_rows(m: &Matrix4d) -> [[f64; 4]; 4] {
  let mut rows = [[0.; 4]; 4];
  for i in 0..4 {
    for j in 0..4 {
      rows[i][j] = m[(i, j)];
    }
  }
  rows
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_json_f64() {
    assert_eq!(json_f64(&json!(1.5)).unwrap(), 1.5);
    assert_eq!(json_f64(&json!(-7)).unwrap(), -7.);
    assert_eq!(json_f64(&json!("2.25")).unwrap(), 2.25);
    assert_eq!(json_f64(&json!(" 3 ")).unwrap(), 3.);
    assert!(json_f64(&json!("banana")).is_err());
    assert!(json_f64(&json!([1.0])).is_err());
    assert!(json_f64(&json!(null)).is_err());
  }

  #[test]
  fn test_json_id() {
    assert_eq!(json_id(&json!("190300243")).unwrap(), "190300243");
    assert_eq!(json_id(&json!(42)).unwrap(), "42");
    assert!(json_id(&json!({})).is_err());
  }

  #[test]
  fn test_matrix_rows() {
    let m = Matrix3d::new(
      1., 2., 3.,
      4., 5., 6.,
      7., 8., 9.,
    );
    assert_eq!(matrix3_rows(&m), [[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);

    let m = Matrix4d::new(
      1., 0., 0., 10.,
      0., 1., 0., 20.,
      0., 0., 1., 30.,
      0., 0., 0., 1.,
    );
    assert_eq!(matrix4_rows(&m)[0], [1., 0., 0., 10.]);
    assert_eq!(matrix4_rows(&m)[3], [0., 0., 0., 1.]);
  }
}
