use super::*;

#[test]
fn empty_object_uses_defaults() {
    let settings: Settings = serde_json::from_str("{}").expect("deserialize Settings");
    assert!(!settings.navigation.extended);
    assert_eq!(settings.navigation.chords, default_chord_rules());
}

#[test]
fn explicit_chords_replace_defaults() {
    let json = r#"{
        "navigation": {
            "extended": true,
            "chords": [{ "keys": "<C-W>a", "direction": "left" }]
        }
    }"#;
    let settings: Settings = serde_json::from_str(json).expect("deserialize Settings");
    assert!(settings.navigation.extended);
    assert_eq!(
        settings.navigation.chords,
        vec![ChordRule::new("<C-W>a", NavDirection::Left)]
    );
}

#[test]
fn default_rules_cover_every_direction_three_ways() {
    let rules = default_chord_rules();
    assert_eq!(rules.len(), 12);
    for direction in NavDirection::ALL {
        assert_eq!(rules.iter().filter(|r| r.direction == direction).count(), 3);
    }
}

#[test]
fn unknown_direction_is_rejected() {
    let json = r#"{ "navigation": { "chords": [{ "keys": "<C-W>x", "direction": "sideways" }] } }"#;
    assert!(serde_json::from_str::<Settings>(json).is_err());
}
