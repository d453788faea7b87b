//! Domain models that mirror the SQLite schema and get passed between the
//! persistence layer and the command-line front end. These types stay
//! light-weight data holders so the other layers can focus on prompting and
//! query logic.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One acronym record as stored in the `ACRONYMS` table.
pub struct AcronymRecord {
    /// SQLite rowid. Assigned by the store on insert and stable while the
    /// record exists; delete flows address records through it.
    pub id: i64,
    /// The short form, e.g. `KSLOC`.
    pub acronym: String,
    /// The expanded form of the acronym.
    pub definition: String,
    /// Free-text description of what the acronym refers to.
    pub description: String,
    /// Provenance tag drawn from an open-ended set, e.g. `General ICT`.
    pub source: String,
}

impl fmt::Display for AcronymRecord {
    /// Render the record as the multi-line block shown in search results and
    /// in the delete confirmation prompt.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID:          {}", self.id)?;
        writeln!(f, "ACRONYM:     '{}' is: {}.", self.acronym, self.definition)?;
        writeln!(f, "DESCRIPTION: {}", self.description)?;
        write!(f, "SOURCE:      {}", self.source)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Field values for a record that has not been inserted yet, as collected by
/// the interactive entry flow. The store assigns the rowid on insert.
pub struct NewAcronym {
    pub acronym: String,
    pub definition: String,
    pub description: String,
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::AcronymRecord;

    #[test]
    fn display_renders_the_search_result_block() {
        let record = AcronymRecord {
            id: 7,
            acronym: "KSLOC".to_string(),
            definition: "Thousands of Source Lines of Code".to_string(),
            description: "size metric".to_string(),
            source: "General ICT".to_string(),
        };

        let rendered = record.to_string();
        assert!(rendered.starts_with("ID:          7\n"));
        assert!(rendered.contains("'KSLOC' is: Thousands of Source Lines of Code."));
        assert!(rendered.ends_with("SOURCE:      General ICT"));
    }
}
