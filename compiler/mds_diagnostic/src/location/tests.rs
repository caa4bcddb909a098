use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_location_forms() {
    assert_eq!(Location::file("a.md").to_string(), "a.md");
    assert_eq!(Location::lines("a.md", 3, 3).to_string(), "a.md(3)");
    assert_eq!(Location::lines("a.md", 3, 7).to_string(), "a.md(3-7)");
    assert_eq!(
        Location::range("a.md", (2, 5), (2, 14)).to_string(),
        "a.md(2,5,2,14)"
    );
}

#[test]
fn test_single_line_collapses() {
    assert_eq!(
        Location::lines("g.g4", 4, 4),
        Location::Line {
            file: "g.g4".to_string(),
            line: 4
        }
    );
}
