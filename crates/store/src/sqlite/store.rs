//! [`PatientStore`] implementation for SQLite.

use async_trait::async_trait;
use rusqlite::{OptionalExtension, Row, params};
use tracing::debug;

use crate::error::StoreResult;
use crate::page::{Page, PageRequest, Sort, SortDirection, SortField};
use crate::patient::Patient;
use crate::store::PatientStore;

use super::SqliteStore;

/// Columns selected for every patient read, in row-mapping order.
const PATIENT_COLUMNS: &str = "id, name, birth_date, sick, score";

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        birth_date: row.get(2)?,
        sick: row.get(3)?,
        score: row.get(4)?,
    })
}

/// Escapes LIKE wildcards so the keyword matches literally.
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Renders the ORDER BY clause for a page request.
///
/// Sort fields are a closed enum mapped to column names here; no caller
/// input reaches the SQL text. Natural order is the integer primary key.
fn order_by_clause(sort: Option<&Sort>) -> &'static str {
    match sort {
        None => "ORDER BY id ASC",
        Some(sort) => match (sort.field, sort.direction) {
            (SortField::Id, SortDirection::Ascending) => "ORDER BY id ASC",
            (SortField::Id, SortDirection::Descending) => "ORDER BY id DESC",
            (SortField::Name, SortDirection::Ascending) => "ORDER BY name ASC, id ASC",
            (SortField::Name, SortDirection::Descending) => "ORDER BY name DESC, id DESC",
            (SortField::BirthDate, SortDirection::Ascending) => {
                "ORDER BY birth_date ASC, id ASC"
            }
            (SortField::BirthDate, SortDirection::Descending) => {
                "ORDER BY birth_date DESC, id DESC"
            }
            (SortField::Score, SortDirection::Ascending) => "ORDER BY score ASC, id ASC",
            (SortField::Score, SortDirection::Descending) => "ORDER BY score DESC, id DESC",
        },
    }
}

#[async_trait]
impl PatientStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn save(&self, patient: Patient) -> StoreResult<Patient> {
        let conn = self.get_connection()?;

        match patient.id {
            None => {
                conn.execute(
                    "INSERT INTO patients (name, birth_date, sick, score)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![patient.name, patient.birth_date, patient.sick, patient.score],
                )?;
                let id = conn.last_insert_rowid();

                debug!(id, name = %patient.name, "Patient inserted");

                Ok(patient.with_id(id))
            }
            Some(id) => {
                // Full-record overwrite; an unknown id falls through to an
                // insert with that id (upsert semantics).
                conn.execute(
                    "INSERT INTO patients (id, name, birth_date, sick, score)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     ON CONFLICT(id) DO UPDATE SET
                         name = excluded.name,
                         birth_date = excluded.birth_date,
                         sick = excluded.sick,
                         score = excluded.score",
                    params![id, patient.name, patient.birth_date, patient.sick, patient.score],
                )?;

                debug!(id, name = %patient.name, "Patient overwritten");

                Ok(patient)
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Patient>> {
        let conn = self.get_connection()?;

        let patient = conn
            .query_row(
                &format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE id = ?1"),
                params![id],
                patient_from_row,
            )
            .optional()?;

        Ok(patient)
    }

    async fn find_all(&self) -> StoreResult<Vec<Patient>> {
        let conn = self.get_connection()?;

        let mut stmt =
            conn.prepare(&format!("SELECT {PATIENT_COLUMNS} FROM patients ORDER BY id ASC"))?;
        let patients = stmt
            .query_map([], patient_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(patients)
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        let conn = self.get_connection()?;

        let affected = conn.execute("DELETE FROM patients WHERE id = ?1", params![id])?;

        debug!(id, affected, "Patient delete");

        Ok(())
    }

    async fn find_by_name_contains(
        &self,
        keyword: &str,
        page: &PageRequest,
    ) -> StoreResult<Page<Patient>> {
        let conn = self.get_connection()?;
        let pattern = format!("%{}%", escape_like(keyword));

        let total: u64 = conn.query_row(
            "SELECT COUNT(*) FROM patients WHERE name LIKE ?1 ESCAPE '\\'",
            params![pattern],
            |row| row.get(0),
        )?;

        let sql = format!(
            "SELECT {PATIENT_COLUMNS} FROM patients
             WHERE name LIKE ?1 ESCAPE '\\'
             {}
             LIMIT ?2 OFFSET ?3",
            order_by_clause(page.sort()),
        );
        let mut stmt = conn.prepare(&sql)?;
        let items = stmt
            .query_map(
                params![pattern, page.size(), page.offset()],
                patient_from_row,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!(
            keyword,
            page = page.number(),
            size = page.size(),
            total,
            returned = items.len(),
            "Patient search"
        );

        Ok(Page::new(items, page, total))
    }

    async fn count(&self) -> StoreResult<u64> {
        let conn = self.get_connection()?;

        let count: u64 =
            conn.query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_passthrough() {
        assert_eq!(escape_like("dupont"), "dupont");
    }

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("50%_\\"), "50\\%\\_\\\\");
    }

    #[test]
    fn test_order_by_natural() {
        assert_eq!(order_by_clause(None), "ORDER BY id ASC");
    }

    #[test]
    fn test_order_by_name_descending() {
        let sort = Sort::descending(SortField::Name);
        assert_eq!(order_by_clause(Some(&sort)), "ORDER BY name DESC, id DESC");
    }
}
