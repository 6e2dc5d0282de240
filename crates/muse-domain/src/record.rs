//! Artwork record representation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sentinel creator name used upstream for unresolved identities.
///
/// Records carrying this name are excluded from per-artist aggregations.
pub const UNKNOWN_CREATOR: &str = "Unknown";

/// Creator gender, the partition key for all comparative metrics.
///
/// Always present on a record; unresolved creators carry `Unknown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    /// All gender categories in canonical display order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unknown];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

/// Error returned when parsing a gender label fails
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unrecognized gender label: {label}")]
pub struct ParseGenderError {
    pub label: String,
}

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "unknown" => Ok(Gender::Unknown),
            _ => Err(ParseGenderError {
                label: s.to_string(),
            }),
        }
    }
}

/// Physical dimensions of an artwork, in millimeters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub height_mm: f64,
    pub width_mm: f64,
    pub area_mm2: f64,
}

impl Dimensions {
    pub fn new(height_mm: f64, width_mm: f64) -> Self {
        Self {
            height_mm,
            width_mm,
            area_mm2: height_mm * width_mm,
        }
    }

    /// Area in square meters
    pub fn area_m2(&self) -> f64 {
        self.area_mm2 / 1_000_000.0
    }
}

/// A named geographic point associated with an artwork (depicted or produced)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

/// A person depicted in an artwork
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepictedPerson {
    pub gender: Gender,
}

impl DepictedPerson {
    pub fn new(gender: Gender) -> Self {
        Self { gender }
    }
}

/// A normalized artwork record as produced by the upstream harvester.
///
/// Immutable input to the analytics engine: metrics read records, never
/// mutate them. Optional fields are genuinely absent in the source data;
/// per-metric filters decide what a missing value excludes a record from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub gender: Gender,
    pub object_type: Option<String>,
    pub nationality: Option<String>,
    pub creator_name: Option<String>,
    pub birth_year: Option<i32>,
    pub production_year: Option<i32>,
    pub acquisition_year: Option<i32>,
    pub exhibitions: u32,
    pub on_display: bool,
    pub has_image: bool,
    pub dimensions: Option<Dimensions>,
    pub colors: Vec<String>,
    pub geo_locations: Vec<GeoLocation>,
    pub depicted_persons: Vec<DepictedPerson>,
    pub department: Option<String>,
}

impl ArtworkRecord {
    /// Create a minimal record with the given creator gender
    pub fn new(gender: Gender) -> Self {
        Self {
            gender,
            object_type: None,
            nationality: None,
            creator_name: None,
            birth_year: None,
            production_year: None,
            acquisition_year: None,
            exhibitions: 0,
            on_display: false,
            has_image: false,
            dimensions: None,
            colors: Vec::new(),
            geo_locations: Vec::new(),
            depicted_persons: Vec::new(),
            department: None,
        }
    }

    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = Some(object_type.into());
        self
    }

    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    pub fn with_creator(mut self, name: impl Into<String>) -> Self {
        self.creator_name = Some(name.into());
        self
    }

    pub fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }

    pub fn with_production_year(mut self, year: i32) -> Self {
        self.production_year = Some(year);
        self
    }

    pub fn with_acquisition_year(mut self, year: i32) -> Self {
        self.acquisition_year = Some(year);
        self
    }

    pub fn with_exhibitions(mut self, count: u32) -> Self {
        self.exhibitions = count;
        self
    }

    pub fn with_on_display(mut self, on_display: bool) -> Self {
        self.on_display = on_display;
        self
    }

    pub fn with_has_image(mut self, has_image: bool) -> Self {
        self.has_image = has_image;
        self
    }

    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_geo_location(mut self, location: GeoLocation) -> Self {
        self.geo_locations.push(location);
        self
    }

    pub fn with_depicted_person(mut self, gender: Gender) -> Self {
        self.depicted_persons.push(DepictedPerson::new(gender));
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// The creator name, if present and resolved.
    ///
    /// Returns `None` both for absent names and for the "Unknown" sentinel,
    /// so per-artist aggregations can filter with a single check.
    pub fn known_creator(&self) -> Option<&str> {
        match self.creator_name.as_deref() {
            Some(name) if name != UNKNOWN_CREATOR => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse() {
        assert_eq!("Male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!(" Unknown ".parse::<Gender>(), Ok(Gender::Unknown));
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_gender_display_roundtrip() {
        for gender in Gender::ALL {
            assert_eq!(gender.to_string().parse::<Gender>(), Ok(gender));
        }
    }

    #[test]
    fn test_builder() {
        let record = ArtworkRecord::new(Gender::Female)
            .with_creator("Anna Ancher")
            .with_birth_year(1859)
            .with_object_type("painting")
            .with_dimensions(Dimensions::new(500.0, 400.0));

        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.creator_name.as_deref(), Some("Anna Ancher"));
        assert_eq!(record.birth_year, Some(1859));
        let dims = record.dimensions.unwrap();
        assert!((dims.area_mm2 - 200_000.0).abs() < 1e-9);
        assert!((dims.area_m2() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_known_creator_filters_sentinel() {
        let named = ArtworkRecord::new(Gender::Male).with_creator("C. W. Eckersberg");
        assert_eq!(named.known_creator(), Some("C. W. Eckersberg"));

        let unknown = ArtworkRecord::new(Gender::Male).with_creator(UNKNOWN_CREATOR);
        assert_eq!(unknown.known_creator(), None);

        let absent = ArtworkRecord::new(Gender::Male);
        assert_eq!(absent.known_creator(), None);
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let record = ArtworkRecord::new(Gender::Unknown)
            .with_colors(vec!["#AA3311".to_string()])
            .with_geo_location(GeoLocation::new("Paris", 48.8566, 2.3522))
            .with_depicted_person(Gender::Female);

        let json = serde_json::to_string(&record).unwrap();
        let back: ArtworkRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.colors, record.colors);
        assert_eq!(back.geo_locations, record.geo_locations);
        assert_eq!(back.depicted_persons, record.depicted_persons);
    }
}
