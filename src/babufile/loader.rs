//! Babufile discovery and loading.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::dep::{Action, Declarations, DepRegistry};
use crate::error::{BabuError, Result};

use super::schema::BabufileSchema;

/// File name looked up in the working directory.
pub const BABUFILE_NAME: &str = "Babufile";

/// A loaded definition file.
#[derive(Debug)]
pub struct Babufile {
    /// Where the definitions were read from.
    pub path: PathBuf,

    /// Environment defaults for actions.
    pub env: BTreeMap<String, String>,

    /// Finalized deps.
    pub registry: DepRegistry,
}

impl Babufile {
    /// Path of the Babufile in `dir`, if there is one.
    pub fn discover(dir: &Path) -> Result<PathBuf> {
        let path = dir.join(BABUFILE_NAME);
        if path.is_file() {
            Ok(path)
        } else {
            Err(BabuError::DefinitionNotFound {
                dir: dir.to_path_buf(),
            })
        }
    }

    /// Load the Babufile for `project_root`.
    ///
    /// An explicit `file` wins; a relative one is taken from
    /// `project_root`. Otherwise the Babufile in `project_root` is used.
    pub fn locate(project_root: &Path, file: Option<&Path>) -> Result<Self> {
        let path = match file {
            Some(file) => project_root.join(file),
            None => Self::discover(project_root)?,
        };
        Self::load(&path)
    }

    /// Load and declare every dep in the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => BabuError::DefinitionNotFound {
                dir: path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_default(),
            },
            _ => BabuError::Io(e),
        })?;
        Self::parse(path, &content)
    }

    /// Parse Babufile text. `path` is used for messages and as the
    /// directory actions run in.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let schema: BabufileSchema = if content.trim().is_empty() {
            BabufileSchema::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| BabuError::DefinitionParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        tracing::debug!(
            "loaded {} dep declarations from {}",
            schema.deps.len(),
            path.display()
        );

        let BabufileSchema { env, deps } = schema;
        let mut decl = Declarations::new();
        for entry in deps {
            decl.dep(entry.name);
            for name in entry.requires {
                decl.requires(name)?;
            }
            if let Some(met) = entry.met {
                decl.met(Action::shell(met))?;
            }
            if let Some(meet) = entry.meet {
                decl.meet(Action::shell(meet))?;
            }
            decl.args(entry.args)?;
        }

        Ok(Self {
            path: path.to_path_buf(),
            env,
            registry: decl.finish(),
        })
    }

    /// Directory containing the Babufile.
    pub fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}
