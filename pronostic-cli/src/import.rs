use anyhow::{Context, Result};
use pronostic_db::rusqlite::Connection;
use std::path::Path;

use pronostic_db::db::insert_draw;
use pronostic_db::models::Code;

/// Nettoie une cellule brute : on ne garde que les chiffres. Deux chiffres
/// ou plus → les deux premiers ; un seul → complété par un zéro de tête ;
/// rien → cellule ignorée.
pub fn clean_cell(raw: &str) -> Option<Code> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let two = match digits.len() {
        0 => return None,
        1 => format!("0{}", digits),
        _ => digits[..2].to_string(),
    };
    two.parse().ok()
}

pub struct ImportResult {
    pub total_rows: u32,
    pub total_cells: u32,
    pub imported: u32,
    pub skipped: u32,
    pub errors: u32,
}

/// Importe un export CSV. Toutes les cellules de toutes les lignes sont
/// balayées, comme dans les exports tableur d'origine. Le fichier est
/// supposé chronologique, du plus ancien au plus récent : l'ordre
/// d'insertion fait foi en base.
pub fn import_csv(conn: &Connection, path: &Path) -> Result<ImportResult> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Impossible d'ouvrir {:?}", path))?;

    let tx = conn
        .unchecked_transaction()
        .context("Impossible de démarrer la transaction")?;

    let mut result = ImportResult {
        total_rows: 0,
        total_cells: 0,
        imported: 0,
        skipped: 0,
        errors: 0,
    };

    for record_result in reader.records() {
        result.total_rows += 1;
        match record_result {
            Ok(record) => {
                for cell in record.iter() {
                    result.total_cells += 1;
                    match clean_cell(cell) {
                        Some(code) => match insert_draw(&tx, "", code) {
                            Ok(_) => result.imported += 1,
                            Err(e) => {
                                eprintln!("Erreur insertion ligne {}: {}", result.total_rows, e);
                                result.errors += 1;
                            }
                        },
                        None => result.skipped += 1,
                    }
                }
            }
            Err(e) => {
                eprintln!("Erreur lecture ligne {}: {}", result.total_rows, e);
                result.errors += 1;
            }
        }
    }

    tx.commit().context("Échec du commit")?;
    Ok(result)
}
