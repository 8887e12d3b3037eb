// NOTE This kind of import-all file isn't a common Rust idiom.

pub use crate::{
  assemble::*,
  camera::*,
  output::*,
  pose::*,
  sfm::*,
  types::*,
  util::*,
};

pub use {
  std::{
    collections::HashMap,
    fs::File,
    path::{Path, PathBuf},
  },
  log::{info, warn, LevelFilter},
  serde::{Deserialize, Serialize},
  anyhow::{anyhow, bail, Context as AnyhowContext, Result},
};
