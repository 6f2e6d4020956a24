use solar_data_prep::catalog::ALLOW_LIST;
use solar_data_prep::config::DEFAULT_SUMMARY_ENDPOINT;
use solar_data_prep::summary_url::{summary_url, SummaryUrlError};

#[test]
fn test_summary_url_for_allowed_bodies() {
    // Plain names
    let expected = "https://en.wikipedia.org/api/rest_v1/page/summary/Saturn";
    assert_eq!(summary_url(DEFAULT_SUMMARY_ENDPOINT, "Saturn").unwrap(), expected);

    // The planet, not the chemical element
    let expected = "https://en.wikipedia.org/api/rest_v1/page/summary/Mercury_(planet)";
    assert_eq!(summary_url(DEFAULT_SUMMARY_ENDPOINT, "Mercury").unwrap(), expected);

    // The moon, not the mythological figure
    let expected = "https://en.wikipedia.org/api/rest_v1/page/summary/Europa_(moon)";
    assert_eq!(summary_url(DEFAULT_SUMMARY_ENDPOINT, "Europa").unwrap(), expected);

    let expected = "https://en.wikipedia.org/api/rest_v1/page/summary/Ceres_(dwarf_planet)";
    assert_eq!(summary_url(DEFAULT_SUMMARY_ENDPOINT, "1 Ceres").unwrap(), expected);
}

#[test]
fn test_every_allowed_body_has_a_url() {
    for name in ALLOW_LIST {
        let url = summary_url(DEFAULT_SUMMARY_ENDPOINT, name).unwrap();
        assert!(!url.contains(' '), "{} produced {}", name, url);
    }
}

#[test]
fn test_summary_url_rejects_bad_names() {
    assert_eq!(
        summary_url(DEFAULT_SUMMARY_ENDPOINT, ""),
        Err(SummaryUrlError::EmptyName)
    );
    assert_eq!(
        summary_url(DEFAULT_SUMMARY_ENDPOINT, "Sun?action=raw"),
        Err(SummaryUrlError::InvalidSlugChar('?'))
    );
}
