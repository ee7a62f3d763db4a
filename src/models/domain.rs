use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Both components are finite numbers
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Map viewport rectangle in degrees. `west > east` means the
/// rectangle crosses the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// Specialty tag as it arrives from the data layer: either plain text
/// (which may itself hold a serialized object) or an already structured value.
/// Any other JSON shape is kept so the candidate is not rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecialtyTag {
    Text(String),
    Object { name: String },
    Other(serde_json::Value),
}

#[derive(Deserialize)]
struct EncodedSpecialty {
    name: String,
}

/// Specialty tag normalized to the text used for matching.
///
/// Normalization happens once, when the candidate is built or deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SpecialtyTag", into = "SpecialtyTag")]
pub enum Specialty {
    Plain(String),
    Structured { name: String },
}

impl Specialty {
    /// Normalize raw tag text. Text starting with `{` is decoded and its
    /// `name` field used; anything that fails to decode stays verbatim.
    pub fn from_text(raw: &str) -> Self {
        if !raw.trim_start().starts_with('{') {
            return Specialty::Plain(raw.to_string());
        }

        match serde_json::from_str::<EncodedSpecialty>(raw) {
            Ok(encoded) => Specialty::Structured { name: encoded.name },
            Err(e) => {
                tracing::trace!("Specialty tag {:?} is not a structured value ({}), using raw text", raw, e);
                Specialty::Plain(raw.to_string())
            }
        }
    }

    /// Text used for tokenizing and category matching
    pub fn display_text(&self) -> &str {
        match self {
            Specialty::Plain(text) => text,
            Specialty::Structured { name } => name,
        }
    }
}

impl From<SpecialtyTag> for Specialty {
    fn from(tag: SpecialtyTag) -> Self {
        match tag {
            SpecialtyTag::Text(text) => Specialty::from_text(&text),
            SpecialtyTag::Object { name } => Specialty::Structured { name },
            SpecialtyTag::Other(value) => {
                tracing::trace!("Specialty tag {} has no name, using raw text", value);
                Specialty::Plain(value.to_string())
            }
        }
    }
}

impl From<Specialty> for SpecialtyTag {
    fn from(specialty: Specialty) -> Self {
        match specialty {
            Specialty::Plain(text) => SpecialtyTag::Text(text),
            Specialty::Structured { name } => SpecialtyTag::Object { name },
        }
    }
}

impl From<&str> for Specialty {
    fn from(raw: &str) -> Self {
        Specialty::from_text(raw)
    }
}

/// Workshop entity eligible for search, filtering and ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specialties: Vec<Specialty>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "startingPrice", alias = "starting_price", default)]
    pub starting_price: f64,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl Candidate {
    /// Coordinates usable for geo computations, if any
    pub fn known_coordinates(&self) -> Option<Coordinates> {
        self.coordinates.filter(Coordinates::is_finite)
    }
}

/// Text field of a candidate that contributed to its relevance score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedField {
    Name,
    Tag,
    Location,
}

/// Search hit: candidate plus accumulated relevance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a Candidate,
    pub score: f64,
    #[serde(rename = "matchedFields")]
    pub matched_fields: BTreeSet<MatchedField>,
}

/// Per-field multipliers applied to token match strengths
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldWeights {
    pub name: f64,
    pub tag: f64,
    pub location: f64,
}

impl FieldWeights {
    pub fn weight(&self, field: MatchedField) -> f64 {
        match field {
            MatchedField::Name => self.name,
            MatchedField::Tag => self.tag,
            MatchedField::Location => self.location,
        }
    }
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name: 3.0,
            tag: 2.0,
            location: 1.0,
        }
    }
}

/// Filter criteria. Every absent field is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FilterCriteria {
    pub categories: Vec<String>,
    #[validate(range(min = 0.0))]
    #[serde(rename = "minRating", alias = "min_rating")]
    pub min_rating: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(rename = "minPrice", alias = "min_price")]
    pub min_price: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(rename = "maxPrice", alias = "max_price")]
    pub max_price: Option<f64>,
}

/// Map-mode restriction applied as the last discovery stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeoConstraint {
    /// Keep candidates within `radius_meters` of `center`
    Radius { center: Coordinates, radius_meters: f64 },
    /// Keep candidates inside the viewport rectangle
    Bounds(MapBounds),
}
