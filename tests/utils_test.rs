use serde_json::json;
use solar_data_prep::utils;
use tempfile::tempdir;

#[tokio::test]
async fn test_write_json_document_creates_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("src").join("data").join("objects.json");

    let value = json!({ "moon": { "id": "moon", "aroundPlanet": { "planet": "earth" } } });
    utils::write_json_document(&path, &value).await.unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let expected = "{\n    \"moon\": {\n        \"id\": \"moon\",\n        \"aroundPlanet\": {\n            \"planet\": \"earth\"\n        }\n    }\n}";
    assert_eq!(written, expected);
}

#[tokio::test]
async fn test_write_json_document_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wiki.json");
    std::fs::write(&path, "{\"stale\": true, \"padding\": \"a much longer previous document\"}").unwrap();

    utils::write_json_document(&path, &json!({ "Sun": {} })).await.unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "{\n    \"Sun\": {}\n}");
}

#[tokio::test]
async fn test_read_document_missing_file() {
    let dir = tempdir().unwrap();
    let result = utils::read_document(&dir.path().join("raw_data.json")).await;
    assert_eq!(result.unwrap_err().kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn test_to_pretty_json_keeps_insertion_order() {
    let rendered = utils::to_pretty_json(&json!({ "zeta": 1, "alpha": [1, 2] })).unwrap();
    let text = String::from_utf8(rendered).unwrap();
    assert_eq!(text, "{\n    \"zeta\": 1,\n    \"alpha\": [\n        1,\n        2\n    ]\n}");
}
