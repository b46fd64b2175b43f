use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;
use crate::progress::{KeywordTable, PriorityLists, Taxonomy};

#[derive(Debug, Deserialize, Default)]
pub struct RawTaxonomySection {
    pub version: Option<u32>,
    pub tables: Option<Vec<KeywordTable>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawPrioritiesSection {
    pub tier1: Option<Vec<String>>,
    pub tier2: Option<Vec<String>>,
}

/// A custom taxonomy replaces the built-in one wholesale and must carry a version.
pub fn parse_taxonomy_section(
    raw: Option<RawTaxonomySection>,
    path: &Path,
) -> Result<Taxonomy, ConfigError> {
    let Some(raw) = raw else {
        return Ok(Taxonomy::builtin());
    };

    let (version, tables) = match (raw.version, raw.tables) {
        (None, None) => return Ok(Taxonomy::builtin()),
        (Some(version), Some(tables)) => (version, tables),
        (None, Some(_)) => {
            return Err(ConfigError::MissingField {
                path: path.to_path_buf(),
                field: "taxonomy.version",
            })
        }
        (Some(_), None) => {
            return Err(ConfigError::MissingField {
                path: path.to_path_buf(),
                field: "taxonomy.tables",
            })
        }
    };

    let taxonomy = Taxonomy { version, tables };
    taxonomy
        .validate()
        .map_err(|message| ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "taxonomy.tables",
            message,
        })?;
    Ok(taxonomy)
}

pub fn parse_priorities_section(
    raw: Option<RawPrioritiesSection>,
    path: &Path,
) -> Result<PriorityLists, ConfigError> {
    let raw = raw.unwrap_or_default();
    let defaults = PriorityLists::default();
    let tier1 = match raw.tier1 {
        Some(list) => validate_names(list, "priorities.tier1", path)?,
        None => defaults.tier1,
    };
    let tier2 = match raw.tier2 {
        Some(list) => validate_names(list, "priorities.tier2", path)?,
        None => defaults.tier2,
    };
    Ok(PriorityLists { tier1, tier2 })
}

fn validate_names(
    names: Vec<String>,
    field: &'static str,
    path: &Path,
) -> Result<Vec<String>, ConfigError> {
    if names.iter().any(|name| name.trim().is_empty()) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "Document names must not be empty".into(),
        });
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::Category;

    #[test]
    fn absent_taxonomy_uses_builtin() {
        let path = Path::new("c.toml");
        assert_eq!(
            parse_taxonomy_section(None, path).expect("builtin"),
            Taxonomy::builtin()
        );
        assert_eq!(
            parse_taxonomy_section(Some(RawTaxonomySection::default()), path).expect("builtin"),
            Taxonomy::builtin()
        );
    }

    #[test]
    fn tables_without_version_are_rejected() {
        let raw = RawTaxonomySection {
            version: None,
            tables: Some(Taxonomy::builtin().tables),
        };
        match parse_taxonomy_section(Some(raw), Path::new("c.toml")) {
            Err(ConfigError::MissingField { field, .. }) => assert_eq!(field, "taxonomy.version"),
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[test]
    fn incomplete_taxonomy_is_invalid() {
        let mut tables = Taxonomy::builtin().tables;
        tables.retain(|t| t.category != Category::Tools);
        let raw = RawTaxonomySection {
            version: Some(2),
            tables: Some(tables),
        };
        match parse_taxonomy_section(Some(raw), Path::new("c.toml")) {
            Err(ConfigError::InvalidField { field, message, .. }) => {
                assert_eq!(field, "taxonomy.tables");
                assert!(message.contains("tools"));
            }
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[test]
    fn blank_priority_names_are_rejected() {
        let raw = RawPrioritiesSection {
            tier1: Some(vec!["rust".into(), " ".into()]),
            tier2: None,
        };
        match parse_priorities_section(Some(raw), Path::new("c.toml")) {
            Err(ConfigError::InvalidField { field, .. }) => assert_eq!(field, "priorities.tier1"),
            other => panic!("Unexpected result: {other:?}"),
        }
    }
}
