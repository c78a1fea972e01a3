//! CSV dataset ingestion.
//!
//! One CSV file per source table. The file stem is the table's group; a
//! `nombre` column identifies each row and an optional `subcategoria`
//! column overrides the display label. Every other column is an attribute
//! flag normalized through the shared answer vocabulary.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::{info, warn};

use crate::answer::Answer;
use crate::error::WordBankError;
use crate::item::Item;
use crate::table::AttributeTable;

/// Identifier column every usable table must carry.
pub const NAME_COLUMN: &str = "nombre";

/// Optional display-label column; rows without it use the group.
pub const SUBCATEGORY_COLUMN: &str = "subcategoria";

/// Load every usable `*.csv` table in a category directory.
///
/// Files are visited in sorted filename order. Unreadable or unusable
/// files are reported and skipped; only a failure to list the directory
/// itself is an error.
pub fn load_category_dir(dir: &Path) -> Result<Vec<AttributeTable>, WordBankError> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "csv"))
        .collect();
    paths.sort();

    let mut tables = Vec::new();
    for path in &paths {
        let group = match path.file_stem().and_then(|stem| stem.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };
        match load_table(path, &group) {
            Ok(table) => {
                info!(
                    "loaded {}: {} rows, {} flags",
                    table.group,
                    table.len(),
                    table.attribute_names.len()
                );
                tables.push(table);
            }
            Err(err) => warn!("skipping {}: {}", path.display(), err),
        }
    }
    if tables.is_empty() {
        info!("no usable csv tables in {}", dir.display());
    }
    Ok(tables)
}

/// Load a single CSV file as an attribute table.
pub fn load_table(path: &Path, group: &str) -> Result<AttributeTable, WordBankError> {
    let file = fs::File::open(path)?;
    read_table(group, file)
}

/// Parse CSV content from any reader into an attribute table.
pub fn read_table<R: Read>(group: &str, reader: R) -> Result<AttributeTable, WordBankError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    let name_idx = headers
        .iter()
        .position(|header| header == NAME_COLUMN)
        .ok_or_else(|| WordBankError::MissingNameColumn {
            table: group.to_string(),
            column: NAME_COLUMN,
        })?;
    let subcategory_idx = headers.iter().position(|header| header == SUBCATEGORY_COLUMN);

    let attribute_names: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != name_idx && Some(*idx) != subcategory_idx)
        .map(|(_, header)| header.clone())
        .collect();

    let mut table = AttributeTable::new(group, attribute_names);
    for record in rdr.records() {
        let record = record?;
        let mut item = Item::new(record.get(name_idx).unwrap_or(""), group);

        if let Some(idx) = subcategory_idx {
            let label = record.get(idx).unwrap_or("").trim();
            if !label.is_empty() {
                item = item.with_subcategory(label);
            }
        }

        for (idx, header) in headers.iter().enumerate() {
            if idx == name_idx || Some(idx) == subcategory_idx {
                continue;
            }
            let cell = record.get(idx).unwrap_or("");
            item = item.with_attribute(header.clone(), Answer::cell_truth(cell));
        }

        table.push_row(item);
    }

    if table.is_empty() {
        return Err(WordBankError::EmptyTable {
            table: group.to_string(),
        });
    }
    Ok(table)
}
