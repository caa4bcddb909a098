use super::*;

#[test]
fn test_defaults() {
    let config = SpecConfig::default();
    assert_eq!(config.grammar_languages, vec!["antlr".to_string()]);
    assert_eq!(config.start_sentinel, "start");
    assert_eq!(config.max_heading_depth, 4);
    assert_eq!(config.locator, LocatorConfig::default());
}

#[test]
fn test_grammar_language() {
    let config = SpecConfig::default();
    assert!(config.is_grammar_language(Some("antlr")));
    assert!(config.is_grammar_language(Some(" antlr ")));
    assert!(!config.is_grammar_language(Some("ANTLR")));
    assert!(!config.is_grammar_language(Some("rust")));
    assert!(!config.is_grammar_language(None));

    let custom = SpecConfig {
        grammar_languages: vec!["ebnf".to_string(), "antlr".to_string()],
        ..SpecConfig::default()
    };
    assert!(custom.is_grammar_language(Some("ebnf")));
}
