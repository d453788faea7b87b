use anyhow::{Context, Result};
use rusqlite::Connection;

/// Retrieve distinct non-empty source tags for display during interactive
/// entry. Recomputed on every call; the set is small and entry is rare. The
/// ordering sorts by lowercase first but falls back to the original text to
/// keep capitalization stable.
pub fn list_sources(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT DISTINCT Source FROM ACRONYMS
             WHERE Source IS NOT NULL AND Source <> ''
             ORDER BY LOWER(Source), Source",
        )
        .context("failed to prepare source list query")?;

    let mut rows = stmt.query([]).context("failed to run source list query")?;

    let mut sources = Vec::new();
    while let Some(row) = rows.next().context("failed to fetch source row")? {
        sources.push(row.get(0).context("failed to read source value")?);
    }

    Ok(sources)
}
