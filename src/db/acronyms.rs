//! Record store operations against the `ACRONYMS` table. Every function in
//! this module encapsulates one prepared, parameter-bound statement so the
//! front end can stay focused on prompting and reporting.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::models::{AcronymRecord, NewAcronym};

/// Total number of acronym records in the store.
pub fn count(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT count(*) FROM ACRONYMS", [], |row| row.get(0))
        .context("failed to count acronym records")
}

/// The acronym of the most recently inserted record, or `None` on an empty
/// store. Insertion order is the physical rowid order.
pub fn last_acronym(conn: &Connection) -> Result<Option<String>> {
    conn.query_row(
        "SELECT Acronym FROM ACRONYMS ORDER BY rowid DESC LIMIT 1",
        [],
        |row| row.get(0),
    )
    .optional()
    .context("failed to look up the last acronym entered")
}

/// Case-insensitive `LIKE` match on the acronym column, ordered by source so
/// related records group together in the output. The pattern may carry SQL
/// wildcards (`%`, `_`).
pub fn search(conn: &Connection, pattern: &str) -> Result<Vec<AcronymRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT rowid, Acronym, Definition, Description, Source
             FROM ACRONYMS
             WHERE Acronym LIKE ?1 COLLATE NOCASE
             ORDER BY Source",
        )
        .context("failed to prepare acronym search")?;

    let records = stmt
        .query_map(params![pattern], record_from_row)
        .context("failed to run acronym search")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect matching acronyms")?;

    Ok(records)
}

/// Insert one record. All four values are bound parameters; the store assigns
/// the rowid.
pub fn insert(conn: &Connection, record: &NewAcronym) -> Result<()> {
    conn.execute(
        "INSERT INTO ACRONYMS (Acronym, Definition, Description, Source)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            record.acronym,
            record.definition,
            record.description,
            record.source
        ],
    )
    .context("failed to insert new acronym record")?;
    Ok(())
}

/// Fetch a single record by exact rowid, used to show the candidate before a
/// delete is confirmed.
pub fn fetch_by_id(conn: &Connection, id: i64) -> Result<Option<AcronymRecord>> {
    conn.query_row(
        "SELECT rowid, Acronym, Definition, Description, Source
         FROM ACRONYMS
         WHERE rowid = ?1",
        params![id],
        record_from_row,
    )
    .optional()
    .with_context(|| format!("failed to fetch acronym record {id}"))
}

/// Delete by exact rowid, returning how many records were removed (0 or 1,
/// since rowids are unique).
pub fn delete(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM ACRONYMS WHERE rowid = ?1", params![id])
        .with_context(|| format!("failed to delete acronym record {id}"))
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<AcronymRecord> {
    Ok(AcronymRecord {
        id: row.get(0)?,
        acronym: row.get(1)?,
        definition: row.get(2)?,
        description: row.get(3)?,
        source: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::{count, fetch_by_id, insert, search};
    use crate::db::open_in_memory;
    use crate::models::NewAcronym;

    #[test]
    fn quotes_and_wildcards_in_values_are_stored_verbatim() {
        let conn = open_in_memory().unwrap();
        insert(
            &conn,
            &NewAcronym {
                acronym: "O'R".to_string(),
                definition: "O'Reilly".to_string(),
                description: "100% of the time; \"quoted\"".to_string(),
                source: "books".to_string(),
            },
        )
        .unwrap();

        let stored = fetch_by_id(&conn, 1).unwrap().unwrap();
        assert_eq!(stored.acronym, "O'R");
        assert_eq!(stored.description, "100% of the time; \"quoted\"");
        assert_eq!(count(&conn).unwrap(), 1);
    }

    #[test]
    fn a_wildcard_in_the_pattern_matches_everything() {
        let conn = open_in_memory().unwrap();
        for acronym in ["BT", "2G"] {
            insert(
                &conn,
                &NewAcronym {
                    acronym: acronym.to_string(),
                    definition: String::new(),
                    description: String::new(),
                    source: String::new(),
                },
            )
            .unwrap();
        }

        assert_eq!(search(&conn, "%").unwrap().len(), 2);
    }
}
