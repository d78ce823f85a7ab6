use super::*;

use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn generated_persona_has_expected_shape() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..32 {
        let p = AgentPersona::generated(&mut rng);
        assert_eq!(p.id.len(), 13);
        assert!(
            p.id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
        assert!(AGENT_COLORS.contains(&p.body_color));
        assert!(matches!(p.voice, Voice::Charon | Voice::Aoede));
        assert!(p.name.is_empty());
        assert!(p.personality.is_empty());
    }
}

#[test]
fn builder_overrides_apply() {
    let mut rng = StdRng::seed_from_u64(2);
    let p = AgentPersona::generated(&mut rng)
        .with_name("Ada")
        .with_personality("Calm and curious.")
        .with_voice(Voice::Puck)
        .with_body_color(Rgba8::rgb(1, 2, 3));
    assert_eq!(p.name, "Ada");
    assert_eq!(p.personality, "Calm and curious.");
    assert_eq!(p.voice, Voice::Puck);
    assert_eq!(p.body_color, Rgba8::rgb(1, 2, 3));
}

#[test]
fn body_color_serializes_as_hex_string() {
    let p = presets::charlotte();
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["body_color"], serde_json::json!("#a142f4"));
    let back: AgentPersona = serde_json::from_value(json).unwrap();
    assert_eq!(back, p);
}

#[test]
fn bad_hex_body_color_fails_deserialization() {
    let json = r#"{
        "id": "x", "name": "X", "personality": "p",
        "body_color": "not-a-color", "voice": "Kore"
    }"#;
    assert!(serde_json::from_str::<AgentPersona>(json).is_err());
}

#[test]
fn presets_have_unique_ids_and_nonempty_personalities() {
    let all = presets::all();
    assert_eq!(all.len(), 4);
    let mut ids: Vec<_> = all.iter().map(|p| p.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
    for p in &all {
        assert!(!p.name.is_empty());
        assert!(!p.personality.is_empty());
    }
}

#[test]
fn voice_roster_is_complete() {
    assert_eq!(Voice::ALL.len(), 8);
    for v in Voice::ALL {
        assert!(!v.as_str().is_empty());
    }
    assert_eq!(Voice::Charon.as_str(), "Charon");
}
