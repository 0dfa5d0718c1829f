//! Character records as delivered by the character data provider.
//!
//! The provider sends every value as a string. Attributes are numeric
//! strings, or the literal `"null"` when unknown; alignment is `good`, `bad`,
//! `neutral`, or something else (typically `"-"`) for unaligned characters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fighter::{Alignment, Attribute, Attributes, FighterProfile, ParseAlignmentError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("{name}: {attribute} is null")]
    NullAttribute { name: String, attribute: Attribute },

    #[error("{name}: {attribute} is not a number ({value:?})")]
    BadAttribute {
        name: String,
        attribute: Attribute,
        value: String,
    },

    #[error("{name}: {source}")]
    Alignment {
        name: String,
        #[source]
        source: ParseAlignmentError,
    },
}

/// One character as received from the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Provider identifier, unique per character.
    pub id: String,
    pub name: String,
    pub alignment: String,
    pub combat: String,
    pub durability: String,
    pub intelligence: String,
    pub power: String,
    pub speed: String,
    pub strength: String,
}

impl CharacterRecord {
    fn raw(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Combat => &self.combat,
            Attribute::Durability => &self.durability,
            Attribute::Intelligence => &self.intelligence,
            Attribute::Power => &self.power,
            Attribute::Speed => &self.speed,
            Attribute::Strength => &self.strength,
        }
    }

    fn parse_attribute(&self, attribute: Attribute) -> Result<u32, RecordError> {
        let value = self.raw(attribute).trim();
        if value == "null" {
            return Err(RecordError::NullAttribute {
                name: self.name.clone(),
                attribute,
            });
        }
        value.parse().map_err(|_| RecordError::BadAttribute {
            name: self.name.clone(),
            attribute,
            value: value.to_string(),
        })
    }

    /// Check the record and turn it into a fighter profile.
    pub fn validate(&self) -> Result<FighterProfile, RecordError> {
        let alignment: Alignment = self.alignment.parse().map_err(|source| RecordError::Alignment {
            name: self.name.clone(),
            source,
        })?;

        let attributes = Attributes {
            combat: self.parse_attribute(Attribute::Combat)?,
            durability: self.parse_attribute(Attribute::Durability)?,
            intelligence: self.parse_attribute(Attribute::Intelligence)?,
            power: self.parse_attribute(Attribute::Power)?,
            speed: self.parse_attribute(Attribute::Speed)?,
            strength: self.parse_attribute(Attribute::Strength)?,
        };

        Ok(FighterProfile::new(self.name.clone(), alignment, attributes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CharacterRecord {
        serde_json::from_str(
            r#"{
                "id": "1",
                "name": "Test Character 1",
                "alignment": "good",
                "combat": "17",
                "durability": "80",
                "intelligence": "37",
                "power": "66",
                "speed": "32",
                "strength": "33"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_validate() {
        let profile = record().validate().unwrap();
        assert_eq!(profile.name, "Test Character 1");
        assert_eq!(profile.alignment, Alignment::Good);
        assert_eq!(profile.attributes.combat, 17);
        assert_eq!(profile.attributes.strength, 33);
    }

    #[test]
    fn test_null_attribute() {
        let mut rec = record();
        rec.power = "null".to_string();
        assert_eq!(
            rec.validate(),
            Err(RecordError::NullAttribute {
                name: "Test Character 1".to_string(),
                attribute: Attribute::Power,
            })
        );
    }

    #[test]
    fn test_non_numeric_attribute() {
        let mut rec = record();
        rec.speed = "fast".to_string();
        assert!(matches!(
            rec.validate(),
            Err(RecordError::BadAttribute { attribute: Attribute::Speed, .. })
        ));
    }

    #[test]
    fn test_unknown_alignment() {
        let mut rec = record();
        rec.alignment = "-".to_string();
        let err = rec.validate().unwrap_err();
        assert!(matches!(err, RecordError::Alignment { .. }));
        assert_eq!(err.to_string(), "Test Character 1: unknown alignment \"-\"");
    }
}
