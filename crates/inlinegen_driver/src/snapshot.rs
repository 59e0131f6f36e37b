//! Snapshots of host declarations and construction sites.
//!
//! A [`Snapshot`] is everything one pass needs. Hosts hand it over in
//! `MessagePack` with named fields, so snapshots stay readable across
//! field reordering.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use inlinegen_foundation::{Error, ErrorContext, ErrorKind, Result};
use inlinegen_model::RawDeclaration;
use inlinegen_usage::ConstructionSite;
use serde::{Deserialize, Serialize};

/// The input to one generation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Every type carrying the inline-collection attribute.
    pub declarations: Vec<RawDeclaration>,
    /// Every collection expression the host found.
    #[serde(default)]
    pub sites: Vec<ConstructionSite>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a declaration.
    #[must_use]
    pub fn with_declaration(mut self, declaration: RawDeclaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Builder method to add a construction site.
    #[must_use]
    pub fn with_site(mut self, site: ConstructionSite) -> Self {
        self.sites.push(site);
        self
    }

    /// Checks every declaration's input contract and that identities are unique.
    ///
    /// # Errors
    ///
    /// Returns a malformed-input error naming the first offending declaration.
    pub fn check_contract(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.declarations.len());
        for decl in &self.declarations {
            let context = ErrorContext::new()
                .with_phase("ingest")
                .with_declaration(decl.id.as_str());
            decl.check_contract()
                .map_err(|e| e.with_context(context.clone()))?;
            if !seen.insert(&decl.id) {
                return Err(Error::malformed(format!("duplicate declaration identity {}", decl.id))
                    .with_context(context));
            }
        }
        Ok(())
    }

    /// Serializes to `MessagePack` bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        rmp_serde::to_vec_named(self)
            .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
    }

    /// Deserializes from `MessagePack` bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        rmp_serde::from_slice(bytes)
            .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
    }

    /// Saves to a file, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| io_error("create", path, &e))?;
        let bytes = self.to_bytes()?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(&bytes)
            .map_err(|e| io_error("write to", path, &e))?;
        writer.flush().map_err(|e| io_error("flush", path, &e))?;
        Ok(())
    }

    /// Loads from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| io_error("open", path, &e))?;

        let mut reader = BufReader::new(file);
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| io_error("read", path, &e))?;

        Self::from_bytes(&bytes)
    }
}

fn io_error(action: &str, path: &Path, err: &std::io::Error) -> Error {
    Error::new(ErrorKind::Io(format!(
        "failed to {action} file '{}': {err}",
        path.display()
    )))
}
