//! Drug composition link operations.

use rusqlite::params;

use super::{Database, DbError, DbResult};
use crate::models::{CompositionLink, Role};

impl Database {
    /// Replace the links for one drug inside a single transaction.
    ///
    /// Deletes any existing links for the drug, then inserts the new set.
    /// Either every row lands or none does; a partial set for one drug can
    /// never be observed.
    pub fn replace_links(&mut self, drug_id: &str, links: &[CompositionLink]) -> DbResult<()> {
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM composition_links WHERE drug_id = ?", [drug_id])?;

        for link in links {
            if link.drug_id != drug_id {
                return Err(DbError::Constraint(format!(
                    "link for drug {} passed under drug {}",
                    link.drug_id, drug_id
                )));
            }
            tx.execute(
                r#"
                INSERT INTO composition_links (
                    drug_id, salt_name, strength_value, strength_unit, role, position
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
                params![
                    link.drug_id,
                    link.salt_name,
                    link.strength_value,
                    link.strength_unit,
                    link.role.as_str(),
                    link.position as i64,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Load the links for one drug in composition order.
    pub fn links_for_drug(&self, drug_id: &str) -> DbResult<Vec<CompositionLink>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT drug_id, salt_name, strength_value, strength_unit, role, position
            FROM composition_links
            WHERE drug_id = ?
            ORDER BY position
            "#,
        )?;

        let rows = stmt.query_map([drug_id], |row| {
            Ok(LinkRow {
                drug_id: row.get(0)?,
                salt_name: row.get(1)?,
                strength_value: row.get(2)?,
                strength_unit: row.get(3)?,
                role: row.get(4)?,
                position: row.get(5)?,
            })
        })?;

        let mut links = Vec::new();
        for row in rows {
            links.push(row?.try_into()?);
        }
        Ok(links)
    }

    /// Remove all links for a drug. Returns the number of rows removed.
    pub fn delete_links(&self, drug_id: &str) -> DbResult<usize> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM composition_links WHERE drug_id = ?", [drug_id])?;
        Ok(rows_affected)
    }

    /// Number of drugs that currently have links.
    pub fn linked_drug_count(&self) -> DbResult<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(DISTINCT drug_id) FROM composition_links",
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}

/// Intermediate row struct for database mapping.
struct LinkRow {
    drug_id: String,
    salt_name: String,
    strength_value: f64,
    strength_unit: String,
    role: String,
    position: i64,
}

impl TryFrom<LinkRow> for CompositionLink {
    type Error = DbError;

    fn try_from(row: LinkRow) -> Result<Self, Self::Error> {
        let role = match row.role.as_str() {
            "primary" => Role::Primary,
            "secondary" => Role::Secondary,
            other => {
                return Err(DbError::Constraint(format!("unknown role: {}", other)));
            }
        };
        Ok(CompositionLink {
            drug_id: row.drug_id,
            salt_name: row.salt_name,
            strength_value: row.strength_value,
            strength_unit: row.strength_unit,
            role,
            position: row.position as usize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CanonicalSalt;

    fn link(drug_id: &str, salt: &str, value: f64, position: usize) -> CompositionLink {
        CompositionLink {
            drug_id: drug_id.to_string(),
            salt_name: salt.to_string(),
            strength_value: value,
            strength_unit: "mg".to_string(),
            role: Role::from_order(position),
            position,
        }
    }

    fn setup_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.upsert_salt(&CanonicalSalt::new("Amoxicillin")).unwrap();
        db.upsert_salt(&CanonicalSalt::new("Clavulanic Acid")).unwrap();
        db
    }

    #[test]
    fn test_replace_and_read_back() {
        let mut db = setup_db();

        let links = vec![
            link("DRUG-1", "Amoxicillin", 500.0, 0),
            link("DRUG-1", "Clavulanic Acid", 125.0, 1),
        ];
        db.replace_links("DRUG-1", &links).unwrap();

        let loaded = db.links_for_drug("DRUG-1").unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].salt_name, "Amoxicillin");
        assert_eq!(loaded[0].role, Role::Primary);
        assert_eq!(loaded[1].salt_name, "Clavulanic Acid");
        assert_eq!(loaded[1].role, Role::Secondary);
    }

    #[test]
    fn test_replace_overwrites_previous_links() {
        let mut db = setup_db();

        db.replace_links("DRUG-1", &[link("DRUG-1", "Amoxicillin", 250.0, 0)])
            .unwrap();
        db.replace_links(
            "DRUG-1",
            &[
                link("DRUG-1", "Amoxicillin", 500.0, 0),
                link("DRUG-1", "Clavulanic Acid", 125.0, 1),
            ],
        )
        .unwrap();

        let loaded = db.links_for_drug("DRUG-1").unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].strength_value, 500.0);
    }

    #[test]
    fn test_unknown_salt_rolls_back_whole_write() {
        let mut db = setup_db();

        let links = vec![
            link("DRUG-1", "Amoxicillin", 500.0, 0),
            link("DRUG-1", "Never Inserted Salt", 125.0, 1),
        ];
        let result = db.replace_links("DRUG-1", &links);
        assert!(result.is_err());

        // The valid first row must not have survived the failed transaction
        assert!(db.links_for_drug("DRUG-1").unwrap().is_empty());
    }

    #[test]
    fn test_mismatched_drug_id_rejected() {
        let mut db = setup_db();

        let links = vec![link("DRUG-2", "Amoxicillin", 500.0, 0)];
        let result = db.replace_links("DRUG-1", &links);
        assert!(matches!(result, Err(DbError::Constraint(_))));
    }

    #[test]
    fn test_delete_links() {
        let mut db = setup_db();

        db.replace_links("DRUG-1", &[link("DRUG-1", "Amoxicillin", 500.0, 0)])
            .unwrap();
        assert_eq!(db.delete_links("DRUG-1").unwrap(), 1);
        assert_eq!(db.delete_links("DRUG-1").unwrap(), 0);
    }

    #[test]
    fn test_linked_drug_count() {
        let mut db = setup_db();

        db.replace_links("DRUG-1", &[link("DRUG-1", "Amoxicillin", 500.0, 0)])
            .unwrap();
        db.replace_links("DRUG-2", &[link("DRUG-2", "Amoxicillin", 250.0, 0)])
            .unwrap();

        assert_eq!(db.linked_drug_count().unwrap(), 2);
    }
}
