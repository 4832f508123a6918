use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

use crate::models::{Code, Draw};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS draws (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    date  TEXT NOT NULL DEFAULT '',
    code  TEXT NOT NULL CHECK (length(code) = 2)
);
";

pub fn db_path() -> std::path::PathBuf {
    let mut path = std::env::current_dir().unwrap_or_default();
    path.push("data");
    path.push("pronostic.db");
    path
}

pub fn open_db(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Impossible de créer le répertoire {:?}", parent))?;
    }
    let conn = Connection::open(path)
        .with_context(|| format!("Impossible d'ouvrir la base {:?}", path))?;
    Ok(conn)
}

pub fn migrate(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)
        .context("Échec de la migration")?;
    Ok(())
}

/// Insère un tirage. Les tirages sont chronologiques : l'id croissant
/// suit l'ordre d'insertion (le plus ancien en premier).
pub fn insert_draw(conn: &Connection, date: &str, code: Code) -> Result<i64> {
    conn.execute(
        "INSERT INTO draws (date, code) VALUES (?1, ?2)",
        rusqlite::params![date, code.to_string()],
    )
    .context("Échec de l'insertion")?;
    Ok(conn.last_insert_rowid())
}

/// Les derniers tirages, le plus récent en premier.
pub fn fetch_last_draws(conn: &Connection, limit: u32) -> Result<Vec<Draw>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, code FROM draws ORDER BY id DESC LIMIT ?1",
    )?;
    let rows = stmt
        .query_map([limit], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut draws = Vec::with_capacity(rows.len());
    for (id, date, raw) in rows {
        let code: Code = raw
            .parse()
            .with_context(|| format!("Numéro corrompu en base (id {}): '{}'", id, raw))?;
        draws.push(Draw { id, date, code });
    }
    Ok(draws)
}

/// Les derniers numéros seuls, le plus récent en premier (la convention
/// attendue par le moteur : index 0 = le plus récent).
pub fn fetch_last_codes(conn: &Connection, limit: u32) -> Result<Vec<Code>> {
    Ok(fetch_last_draws(conn, limit)?
        .into_iter()
        .map(|d| d.code)
        .collect())
}

pub fn count_draws(conn: &Connection) -> Result<u32> {
    let count: u32 = conn.query_row("SELECT COUNT(*) FROM draws", [], |row| row.get(0))?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_and_count() {
        let conn = memory_db();
        assert_eq!(count_draws(&conn).unwrap(), 0);

        insert_draw(&conn, "2024-01-01", Code::new(7).unwrap()).unwrap();
        assert_eq!(count_draws(&conn).unwrap(), 1);
    }

    #[test]
    fn test_fetch_newest_first() {
        let conn = memory_db();
        insert_draw(&conn, "2024-01-01", Code::new(12).unwrap()).unwrap();
        insert_draw(&conn, "2024-01-02", Code::new(34).unwrap()).unwrap();
        insert_draw(&conn, "2024-01-03", Code::new(56).unwrap()).unwrap();

        let codes = fetch_last_codes(&conn, 10).unwrap();
        assert_eq!(codes.len(), 3);
        assert_eq!(codes[0].to_string(), "56");
        assert_eq!(codes[2].to_string(), "12");
    }

    #[test]
    fn test_fetch_limit() {
        let conn = memory_db();
        for i in 0..5 {
            insert_draw(&conn, "2024-01-01", Code::new(i).unwrap()).unwrap();
        }
        let codes = fetch_last_codes(&conn, 2).unwrap();
        assert_eq!(codes.len(), 2);
        assert_eq!(codes[0].to_string(), "04");
    }

    #[test]
    fn test_leading_zero_roundtrip() {
        let conn = memory_db();
        insert_draw(&conn, "2024-01-01", Code::new(3).unwrap()).unwrap();
        let draws = fetch_last_draws(&conn, 1).unwrap();
        assert_eq!(draws[0].code.to_string(), "03");
    }
}
