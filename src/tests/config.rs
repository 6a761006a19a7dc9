use super::common::setup;
use crate::configs::SiteConfig;
use crate::error::ConfigError;
use crate::utils::Typewriter;

#[test]
fn test_bundled_site_content_loads() {
    setup();
    let site = SiteConfig::load().expect("bundled site.json should be valid");
    assert!(!site.owner.is_empty());
    assert_eq!(site.section_title("contact"), Some("Contact"));
    assert!(Typewriter::from_list(&site.roles).words().len() > 1);
}

#[test]
fn test_minimal_content_uses_defaults() {
    let site = SiteConfig::from_json(r#"{ "owner": "Kim", "roles": "Engineer", "intro": "" }"#).unwrap();
    assert!(site.sections.is_empty());
    assert_eq!(site.contact_email, None);
    assert_eq!(site.section_title("about"), None);
}

#[test]
fn test_rejects_duplicate_section_ids() {
    let raw = r#"{
        "owner": "Kim",
        "roles": "Engineer",
        "intro": "",
        "sections": [{ "id": "about", "title": "About" }, { "id": "about", "title": "Again" }]
    }"#;
    assert_eq!(
        SiteConfig::from_json(raw),
        Err(ConfigError::Invalid("duplicate section id 'about'".to_string()))
    );
}

#[test]
fn test_rejects_blank_owner_and_roles() {
    assert!(matches!(
        SiteConfig::from_json(r#"{ "owner": " ", "roles": "Engineer", "intro": "" }"#),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        SiteConfig::from_json(r#"{ "owner": "Kim", "roles": " , ", "intro": "" }"#),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    assert!(matches!(SiteConfig::from_json("{ owner: }"), Err(ConfigError::Parse(_))));
}

#[test]
fn test_fallback_is_valid() {
    assert_eq!(SiteConfig::fallback().validate(), Ok(()));
}
