//! Object store: persistence for timed objects
//!
//! The store keeps whole objects under a name; generation structure is opaque
//! to it. Access is synchronous, callers serialize.

use crate::core::TimedObject;
use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A timed object as the store persists it, with JSON content
pub type StoredObject = TimedObject<Value>;

/// Trait for object store implementations
pub trait ObjectStore {
    /// Save an object under its name, replacing any previous version
    fn save(&mut self, object: &StoredObject) -> Result<()>;

    /// Load the object stored under `name`
    fn load(&self, name: &str) -> Result<StoredObject>;

    /// Delete the object stored under `name`
    fn delete(&mut self, name: &str) -> Result<()>;

    /// List the names of all stored objects
    fn list(&self) -> Result<Vec<String>>;
}

/// In-memory implementation of the object store
#[derive(Default)]
pub struct InMemoryStore {
    objects: HashMap<String, StoredObject>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl ObjectStore for InMemoryStore {
    fn save(&mut self, object: &StoredObject) -> Result<()> {
        self.objects
            .insert(object.name().to_string(), object.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<StoredObject> {
        self.objects
            .get(name)
            .cloned()
            .ok_or_else(|| Error::ObjectNotFound(name.to_string()))
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        self.objects
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::ObjectNotFound(name.to_string()))
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.objects.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

/// File-backed store keeping one JSON document per object
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (creating if necessary) a file store rooted at the given directory
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        // Names are file stems, not paths
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(Error::InvalidArgument(format!(
                "not a valid object name '{}'",
                name
            )));
        }
        Ok(self.root.join(format!("{}.json", name)))
    }
}

impl ObjectStore for FileStore {
    fn save(&mut self, object: &StoredObject) -> Result<()> {
        let path = self.path_for(object.name())?;
        let json = serde_json::to_string_pretty(object)?;
        fs::write(&path, json)?;
        tracing::debug!(object = %object.name(), path = %path.display(), "saved object");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<StoredObject> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Err(Error::ObjectNotFound(name.to_string()));
        }
        let json = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Err(Error::ObjectNotFound(name.to_string()));
        }
        fs::remove_file(&path)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
