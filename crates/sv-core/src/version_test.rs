use super::*;

#[test]
fn test_textual_ordering() {
    assert!(VersionLabel::new("0.1") < VersionLabel::new("0.2"));
    assert!(VersionLabel::new("0.2") < VersionLabel::new("1.0"));
    assert!(VersionLabel::new("0.2") >= VersionLabel::new("0.2"));
}

#[test]
fn test_textual_ordering_two_digit_caveat() {
    // Labels are opaque strings: "0.10" sorts before "0.2". Authors must
    // pick labels that sort correctly.
    assert!(VersionLabel::new("0.10") < VersionLabel::new("0.2"));
}

#[test]
fn test_try_new_rejects_empty() {
    assert!(VersionLabel::try_new("").is_none());
    assert_eq!(
        VersionLabel::try_new("0.1"),
        Some(VersionLabel::new("0.1"))
    );
}

#[test]
fn test_display_and_str_eq() {
    let label = VersionLabel::new("1.4.2");
    assert_eq!(label.to_string(), "1.4.2");
    assert_eq!(label, "1.4.2");
    assert_eq!(label.as_str(), "1.4.2");
}

#[test]
fn test_serde_transparent() {
    let label = VersionLabel::new("0.2");
    let json = serde_json::to_string(&label).unwrap();
    assert_eq!(json, "\"0.2\"");

    let back: VersionLabel = serde_json::from_str(&json).unwrap();
    assert_eq!(back, label);
}
