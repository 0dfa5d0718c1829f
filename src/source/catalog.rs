//! Character sources and the in-memory catalog.
//!
//! A [`CharacterSource`] hands out random records. Lineups are built by
//! resampling: a record whose id was already drawn is skipped, and so is a
//! record that fails validation. Invalid ids are remembered too, so they are
//! never retried.

use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::record::CharacterRecord;
use crate::core::RandomSource;
use crate::fighter::FighterProfile;

/// Draw attempts allowed per requested character.
pub const ATTEMPTS_PER_CHARACTER: usize = 50;

const BUNDLED_CATALOG: &str = include_str!("catalog.json");

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("the character source has no records")]
    Empty,

    #[error("only found {found} of {wanted} distinct valid characters after {attempts} draws")]
    Exhausted {
        wanted: usize,
        found: usize,
        attempts: usize,
    },

    #[error("failed to read catalog {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog json")]
    Parse(#[from] serde_json::Error),
}

/// Provider of raw character records.
pub trait CharacterSource {
    /// Draw one record at random.
    fn draw(&mut self, rng: &mut impl RandomSource) -> Result<CharacterRecord, SourceError>;

    /// Draw `count` distinct, valid characters.
    ///
    /// Duplicate ids and invalid records are skipped and resampled.
    fn draw_lineup(
        &mut self,
        rng: &mut impl RandomSource,
        count: usize,
    ) -> Result<Vec<FighterProfile>, SourceError> {
        let max_attempts = count.saturating_mul(ATTEMPTS_PER_CHARACTER);
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut lineup = Vec::with_capacity(count);
        let mut attempts = 0;

        while lineup.len() < count {
            if attempts == max_attempts {
                return Err(SourceError::Exhausted {
                    wanted: count,
                    found: lineup.len(),
                    attempts,
                });
            }
            attempts += 1;

            let record = self.draw(rng)?;
            if !seen.insert(record.id.clone()) {
                tracing::debug!(id = %record.id, "duplicate character");
                continue;
            }
            match record.validate() {
                Ok(profile) => lineup.push(profile),
                Err(err) => tracing::debug!(id = %record.id, %err, "skipping character"),
            }
        }

        tracing::debug!(count, attempts, "lineup drawn");
        Ok(lineup)
    }
}

/// In-memory list of character records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<CharacterRecord>,
}

impl Catalog {
    #[must_use]
    pub fn new(records: Vec<CharacterRecord>) -> Self {
        Self { records }
    }

    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self, SourceError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self, SourceError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a JSON array of records from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    #[must_use]
    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CharacterSource for Catalog {
    fn draw(&mut self, rng: &mut impl RandomSource) -> Result<CharacterRecord, SourceError> {
        let index = rng.pick_index(self.records.len()).ok_or(SourceError::Empty)?;
        Ok(self.records[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn record(id: &str, alignment: &str, power: &str) -> CharacterRecord {
        CharacterRecord {
            id: id.to_string(),
            name: format!("Character {id}"),
            alignment: alignment.to_string(),
            combat: "50".to_string(),
            durability: "50".to_string(),
            intelligence: "50".to_string(),
            power: power.to_string(),
            speed: "50".to_string(),
            strength: "50".to_string(),
        }
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.len() >= 10);
    }

    #[test]
    fn test_lineup_is_distinct_and_valid() {
        let mut catalog = Catalog::bundled().unwrap();
        let mut rng = GameRng::new(42);

        let lineup = catalog.draw_lineup(&mut rng, 10).unwrap();
        assert_eq!(lineup.len(), 10);

        let names: FxHashSet<_> = lineup.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_invalid_records_skipped() {
        let mut catalog = Catalog::new(vec![
            record("1", "good", "10"),
            record("2", "-", "10"),
            record("3", "bad", "null"),
            record("4", "neutral", "10"),
        ]);
        let mut rng = GameRng::new(3);

        let lineup = catalog.draw_lineup(&mut rng, 2).unwrap();
        let mut names: Vec<_> = lineup.iter().map(|p| p.name.clone()).collect();
        names.sort();
        assert_eq!(names, vec!["Character 1", "Character 4"]);
    }

    #[test]
    fn test_exhausted() {
        let mut catalog = Catalog::new(vec![record("1", "good", "10"), record("1", "good", "10")]);
        let mut rng = GameRng::new(3);

        let err = catalog.draw_lineup(&mut rng, 2).unwrap_err();
        assert!(matches!(
            err,
            SourceError::Exhausted { wanted: 2, found: 1, attempts: 100 }
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let mut catalog = Catalog::default();
        let mut rng = GameRng::new(3);
        assert!(matches!(catalog.draw(&mut rng), Err(SourceError::Empty)));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(Catalog::from_json_str("[{]"), Err(SourceError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Catalog::from_path("/definitely/not/here.json"),
            Err(SourceError::Io { .. })
        ));
    }
}
