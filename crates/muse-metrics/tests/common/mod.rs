//! Shared fixtures for metric integration tests

use muse_domain::{ArtworkRecord, Dimensions, Gender, GeoLocation, UNKNOWN_CREATOR};

/// A small mixed collection exercising every record field.
///
/// Contents: two paintings by Anna Ancher (F, 1859, Danish), one by
/// Michael Ancher (M, 1849, Danish), one print by Jens Juel (M, 1745,
/// Danish), one unattributed drawing, and one French painting with no
/// production year.
pub fn sample_collection() -> Vec<ArtworkRecord> {
    vec![
        ArtworkRecord::new(Gender::Female)
            .with_creator("Anna Ancher")
            .with_birth_year(1859)
            .with_nationality("Danish")
            .with_object_type("painting")
            .with_production_year(1885)
            .with_acquisition_year(1920)
            .with_exhibitions(4)
            .with_on_display(true)
            .with_has_image(true)
            .with_dimensions(Dimensions::new(500.0, 400.0))
            .with_colors(vec!["#AA3311".to_string(), "#F5F5F5".to_string()])
            .with_geo_location(GeoLocation::new("Skagen", 57.7209, 10.5839))
            .with_depicted_person(Gender::Female)
            .with_department("Paintings"),
        ArtworkRecord::new(Gender::Female)
            .with_creator("Anna Ancher")
            .with_birth_year(1859)
            .with_nationality("Danish")
            .with_object_type("painting")
            .with_production_year(1890)
            .with_acquisition_year(1925)
            .with_exhibitions(2)
            .with_has_image(true)
            .with_dimensions(Dimensions::new(300.0, 250.0))
            .with_colors(vec!["#aa3311".to_string()])
            .with_geo_location(GeoLocation::new("Skagen", 57.7209, 10.5839))
            .with_department("Paintings"),
        ArtworkRecord::new(Gender::Male)
            .with_creator("Michael Ancher")
            .with_birth_year(1849)
            .with_nationality("Danish")
            .with_object_type("painting")
            .with_production_year(1880)
            .with_acquisition_year(1910)
            .with_exhibitions(7)
            .with_on_display(true)
            .with_has_image(true)
            .with_dimensions(Dimensions::new(1500.0, 1200.0))
            .with_colors(vec!["#1A2B88".to_string()])
            .with_geo_location(GeoLocation::new("Skagen", 57.7209, 10.5839))
            .with_depicted_person(Gender::Male)
            .with_depicted_person(Gender::Female)
            .with_department("Paintings"),
        ArtworkRecord::new(Gender::Male)
            .with_creator("Jens Juel")
            .with_birth_year(1745)
            .with_nationality("Danish")
            .with_object_type("print")
            .with_production_year(1790)
            .with_acquisition_year(1850)
            .with_exhibitions(0)
            .with_dimensions(Dimensions::new(200.0, 150.0))
            .with_department("Prints and Drawings"),
        ArtworkRecord::new(Gender::Unknown)
            .with_creator(UNKNOWN_CREATOR)
            .with_object_type("drawing")
            .with_acquisition_year(1930)
            .with_department("Prints and Drawings"),
        ArtworkRecord::new(Gender::Male)
            .with_creator("Claude Monet")
            .with_birth_year(1840)
            .with_nationality("French")
            .with_object_type("painting")
            .with_exhibitions(12)
            .with_has_image(true)
            .with_colors(vec!["#88CC44".to_string()])
            .with_geo_location(GeoLocation::new("Paris", 48.8566, 2.3522))
            .with_department("Paintings"),
    ]
}
