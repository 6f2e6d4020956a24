use serde_json::json;
use solar_data_prep::models::{
    BodyType, Credit, MetadataRecord, PhotoCredits, RawBody, RawDataset, WikiDocument,
};

#[test]
fn test_raw_body_deserialization() {
    let json_str = r#"
    {
        "id": "lune",
        "name": "La Lune",
        "englishName": "Moon",
        "isPlanet": false,
        "aroundPlanet": {
            "planet": "terre",
            "rel": "https://api.le-systeme-solaire.net/rest/bodies/terre"
        },
        "meanRadius": 1737.0
    }
    "#;

    let body: RawBody = serde_json::from_str(json_str).unwrap();

    assert_eq!(body.english_name, "Moon");
    let parent = body.around_planet.unwrap();
    assert_eq!(parent.planet, "terre");
    assert_eq!(
        parent.extra["rel"],
        json!("https://api.le-systeme-solaire.net/rest/bodies/terre")
    );

    // Named fields are not duplicated in the pass-through attributes
    assert!(!body.attributes.contains_key("englishName"));
    assert!(!body.attributes.contains_key("aroundPlanet"));
    assert_eq!(body.attributes["name"], json!("La Lune"));
    assert_eq!(body.attributes["meanRadius"], json!(1737.0));
}

#[test]
fn test_raw_body_without_parent() {
    // aroundPlanet may be null or absent
    let body: RawBody =
        serde_json::from_str(r#"{ "englishName": "Sun", "aroundPlanet": null }"#).unwrap();
    assert!(body.around_planet.is_none());

    let body: RawBody = serde_json::from_str(r#"{ "englishName": "Sun" }"#).unwrap();
    assert!(body.around_planet.is_none());
    assert!(body.attributes.is_empty());
}

#[test]
fn test_raw_body_parent_without_planet_is_rejected() {
    let result = serde_json::from_str::<RawBody>(
        r#"{ "englishName": "Moon", "aroundPlanet": { "rel": "https://example.com" } }"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_raw_dataset_requires_bodies() {
    assert!(serde_json::from_str::<RawDataset>(r#"{ "bodies": [] }"#).is_ok());
    assert!(serde_json::from_str::<RawDataset>(r#"{ "planets": [] }"#).is_err());
}

#[test]
fn test_body_type_serialization() {
    assert_eq!(serde_json::to_value(BodyType::Star).unwrap(), json!("Star"));
    assert_eq!(
        serde_json::to_value(BodyType::GasGiant).unwrap(),
        json!("Gas Giant")
    );
    assert_eq!(
        serde_json::to_value(BodyType::IceGiant).unwrap(),
        json!("Ice Giant")
    );
    assert_eq!(
        serde_json::to_value(BodyType::DwarfPlanet).unwrap(),
        json!("Dwarf Planet")
    );

    let parsed: BodyType = serde_json::from_value(json!("Satellite")).unwrap();
    assert_eq!(parsed, BodyType::Satellite);
}

#[test]
fn test_metadata_record_serialization() {
    let summary = json!({
        "title": "Io (moon)",
        "extract": "Io is the innermost of the four Galilean moons of Jupiter."
    });

    let mut record = MetadataRecord::new(summary.as_object().unwrap().clone());

    // Without credits the summary is written unchanged
    assert_eq!(serde_json::to_value(&record).unwrap(), summary);

    record.photo_credits = Some(PhotoCredits {
        wiki: Credit::new("Public Domain", "NASA/JPL/University of Arizona"),
        texture: Credit::none(),
    });

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["title"], json!("Io (moon)"));
    assert_eq!(
        value["photo_credits"],
        json!({
            "wiki": { "cc": "Public Domain", "by": "NASA/JPL/University of Arizona" },
            "texture": { "cc": "None", "by": "None" }
        })
    );
}

#[test]
fn test_wiki_document_keeps_insertion_order() {
    let mut document = WikiDocument::new();
    for title in ["Neptune", "Earth", "Mars"] {
        let mut summary = serde_json::Map::new();
        summary.insert("title".to_string(), json!(title));
        document.insert(title.to_string(), MetadataRecord::new(summary));
    }

    // Serialized as an object in insertion order, not sorted
    let text = serde_json::to_string(&document).unwrap();
    assert_eq!(
        text,
        r#"{"Neptune":{"title":"Neptune"},"Earth":{"title":"Earth"},"Mars":{"title":"Mars"}}"#
    );
}
