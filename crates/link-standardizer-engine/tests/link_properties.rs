//! Properties that hold across the whole link API, checked over sample
//! inputs from every dialect.

use link_standardizer_engine::links::encoding::{percent_decode, percent_encode};
use link_standardizer_engine::{
    LinkDialect, anylink_to_standardized_link, classify, internal_link_to_standardized,
    wikilink_to_mdlink,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

const SAMPLES: &[&str] = &[
    "[[MD File]]",
    "![[image file.png]]",
    "[[notes.md]]",
    "[[folder/Deep Note]]",
    "[A note](some file.md)",
    "[A note](some%20file.md)",
    "![optional title](/path/to/some image.png)",
    "![](some%20image.png)",
    "[[MD File]](path/to/MD%20File.md)",
    "![[MD File]](path/to/MD%20File.md)",
    "[Somefile link](https://go.to/somefile.html)",
    "![Embedded url image](https://go.to/somefile.png)",
    "<a href='attachments/document.pdf'>PDF Document</a>",
    "[weird (1)](file (1).md)",
    "[café](naïve résumé.md)",
];

#[rstest]
#[case("MD File")]
#[case("Daily Log 2024-01-15")]
#[case("folder/Sub Note")]
fn wikilink_without_extension_gets_md(#[case] name: &str) {
    let expected = format!("[[{name}]]({})", percent_encode(&format!("{name}.md")));
    assert_eq!(wikilink_to_mdlink(&format!("[[{name}]]")), Some(expected));
}

#[rstest]
#[case("image file.png")]
#[case("notes.md")]
#[case("archive.tar.gz")]
fn wikilink_extension_is_never_doubled(#[case] name: &str) {
    let expected = format!("[[{name}]]({})", percent_encode(name));
    assert_eq!(wikilink_to_mdlink(&format!("[[{name}]]")), Some(expected));
}

#[test]
fn standardizing_is_idempotent() {
    for sample in SAMPLES {
        let once = anylink_to_standardized_link(sample)
            .unwrap_or_else(|| panic!("{sample} should standardize"));
        let twice = anylink_to_standardized_link(&once);
        assert_eq!(twice.as_deref(), Some(once.as_str()), "input: {sample}");
    }
}

#[test]
fn standardized_output_is_canonical() {
    for sample in SAMPLES {
        let out = anylink_to_standardized_link(sample).unwrap();
        let dialect = classify(&out);
        assert!(
            matches!(
                dialect,
                LinkDialect::StandardizedInternalLink
                    | LinkDialect::UrlLink
                    | LinkDialect::AnchorLink
            ),
            "{sample} -> {out} classified as {dialect}"
        );
    }
}

#[rstest]
#[case("[t](a%0Ab.md)")]
#[case("[t](a%0Db.md)")]
#[case("[[a%0Ab]]")]
fn standardized_output_never_breaks_a_line(#[case] input: &str) {
    let Some(once) = anylink_to_standardized_link(input) else {
        return;
    };
    assert!(!once.contains(['\n', '\r']), "{input} -> {once:?}");
    assert_eq!(anylink_to_standardized_link(&once), Some(once.clone()));
}

#[test]
fn encoding_round_trips() {
    for name in ["MD File.md", "some image.png", "a (1).md", "naïve résumé.md", "100%.md"] {
        assert_eq!(percent_decode(&percent_encode(name)), name);
    }
}

#[test]
fn converters_only_accept_their_dialect() {
    for sample in SAMPLES {
        let dialect = classify(sample);
        assert_eq!(
            wikilink_to_mdlink(sample).is_some(),
            dialect == LinkDialect::WikiLink,
            "{sample}"
        );
        assert_eq!(
            internal_link_to_standardized(sample).is_some(),
            dialect == LinkDialect::InternalLink,
            "{sample}"
        );
    }
}

#[rstest]
#[case("[[MD File]]", "[[MD File]](MD%20File.md)")]
#[case("![[image file.png]]", "![[image file.png]](image%20file.png)")]
fn wikilink_scenarios(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(wikilink_to_mdlink(input).as_deref(), Some(expected));
}

#[rstest]
#[case("[A note](some file.md)", "[[some file.md]](some%20file.md)")]
#[case(
    "![optional title](/path/to/some image.png)",
    "![[some image.png]](/path/to/some%20image.png)"
)]
fn internal_link_scenarios(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(internal_link_to_standardized(input).as_deref(), Some(expected));
}

#[test]
fn url_link_scenario() {
    let input = "[Somefile link](https://go.to/somefile.html)";
    assert_eq!(classify(input), LinkDialect::UrlLink);
    assert_eq!(anylink_to_standardized_link(input).as_deref(), Some(input));
}

#[test]
fn not_a_link_scenario() {
    let input = "This does *not* have any links here";
    assert_eq!(classify(input), LinkDialect::NotALink);
    assert_eq!(wikilink_to_mdlink(input), None);
    assert_eq!(internal_link_to_standardized(input), None);
    assert_eq!(anylink_to_standardized_link(input), None);
}
