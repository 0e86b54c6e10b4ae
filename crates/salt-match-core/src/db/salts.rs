//! Canonical salt reference operations.

use rusqlite::params;

use super::{Database, DbResult};
use crate::models::CanonicalSalt;

impl Database {
    /// Insert a canonical salt, updating the timestamp if it already exists.
    pub fn upsert_salt(&self, salt: &CanonicalSalt) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO canonical_salts (name, updated_at)
            VALUES (?1, datetime('now'))
            ON CONFLICT(name) DO UPDATE SET
                updated_at = datetime('now')
            "#,
            params![salt.name],
        )?;
        Ok(())
    }

    /// Load the full reference set in insertion order.
    ///
    /// Insertion order is what the matcher's prefix fallback iterates, so a
    /// batch sees a stable, deterministic tie-break across runs.
    pub fn load_salts(&self) -> DbResult<Vec<CanonicalSalt>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM canonical_salts ORDER BY rowid")?;

        let rows = stmt.query_map([], |row| {
            Ok(CanonicalSalt {
                name: row.get(0)?,
            })
        })?;

        let mut salts = Vec::new();
        for row in rows {
            salts.push(row?);
        }
        Ok(salts)
    }

    /// Number of salts in the reference set.
    pub fn salt_count(&self) -> DbResult<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM canonical_salts", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Delete a salt. Fails if composition links still reference it.
    pub fn delete_salt(&self, name: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM canonical_salts WHERE name = ?", [name])?;
        Ok(rows_affected > 0)
    }
}
