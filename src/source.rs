//! Loading plays and invoices from JSON.

use crate::error::Result;
use crate::invoice::Invoice;
use crate::play::PlayCatalog;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

/// Supplies the play catalog and the invoices to bill.
pub trait DataSource {
    fn plays(&self) -> Result<PlayCatalog>;

    fn invoices(&self) -> Result<Vec<Invoice>>;
}

/// Parses a play catalog: a JSON object keyed by play identifier.
pub fn read_plays<R: Read>(reader: R) -> Result<PlayCatalog> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parses a JSON array of invoices.
pub fn read_invoices<R: Read>(reader: R) -> Result<Vec<Invoice>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads `plays.json` and `invoices.json` style files from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    plays_path: PathBuf,
    invoices_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(plays_path: impl Into<PathBuf>, invoices_path: impl Into<PathBuf>) -> Self {
        JsonFileSource {
            plays_path: plays_path.into(),
            invoices_path: invoices_path.into(),
        }
    }
}

impl DataSource for JsonFileSource {
    fn plays(&self) -> Result<PlayCatalog> {
        let file = File::open(&self.plays_path)?;
        let catalog = read_plays(BufReader::new(file))?;
        debug!("Loaded {} plays from {}", catalog.len(), self.plays_path.display());
        Ok(catalog)
    }

    fn invoices(&self) -> Result<Vec<Invoice>> {
        let file = File::open(&self.invoices_path)?;
        let invoices = read_invoices(BufReader::new(file))?;
        debug!(
            "Loaded {} invoices from {}",
            invoices.len(),
            self.invoices_path.display()
        );
        Ok(invoices)
    }
}
