use crate::planner::PlanState;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Storage {
    /// Charge l'état de planification depuis un support.
    fn load(&self) -> anyhow::Result<PlanState>;
    /// Sauvegarde de manière atomique (dernier écrivain gagnant).
    fn save(&self, state: &PlanState) -> anyhow::Result<()>;
    /// Efface l'état persisté.
    fn clear(&self) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Charge l'état, ou un état vide si le fichier n'existe pas encore.
    pub fn load_or_default(&self) -> anyhow::Result<PlanState> {
        if !self.path.exists() {
            return Ok(PlanState::default());
        }
        self.load()
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<PlanState> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let state: PlanState = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(state)
    }

    fn save(&self, state: &PlanState) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(state)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("removing {}", self.path.display()))?;
        }
        Ok(())
    }
}
