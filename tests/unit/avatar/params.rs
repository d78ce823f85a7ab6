use super::*;

fn variant() -> Variant {
    Variant::new(Style::Stylized, Gender::Male)
}

#[test]
fn idle_is_awake_and_silent() {
    let p = RenderParams::idle(variant());
    assert_eq!(p.eye_openness, 1.0);
    assert_eq!(p.mouth_openness, 0.0);
    assert!(!p.is_talking);
    assert!(!p.mouth_is_open());
    assert!(p.validate().is_ok());
}

#[test]
fn mouth_opens_only_when_talking_above_threshold() {
    let mut p = RenderParams::idle(variant());
    p.is_talking = true;
    p.mouth_openness = MOUTH_OPEN_THRESHOLD;
    assert!(!p.mouth_is_open(), "threshold itself must stay closed");
    p.mouth_openness = 0.2;
    assert!(p.mouth_is_open());
    p.is_talking = false;
    assert!(!p.mouth_is_open(), "openness alone never opens the mouth");
}

#[test]
fn validate_rejects_non_finite_inputs() {
    let mut p = RenderParams::idle(variant());
    p.eye_openness = f64::NAN;
    assert!(p.validate().is_err());

    let mut p = RenderParams::idle(variant());
    p.mouth_openness = f64::INFINITY;
    assert!(p.validate().is_err());

    let mut p = RenderParams::idle(variant());
    p.mouth_openness = -0.1;
    assert!(p.validate().is_err());
}

#[test]
fn overdriven_eye_openness_is_accepted() {
    // Callers bias openness above 1.0 on purpose; geometry clamps later.
    let mut p = RenderParams::idle(variant());
    p.eye_openness = 1.1;
    assert!(p.validate().is_ok());
}

#[test]
fn serde_uses_snake_case_tags_and_skips_empty_accent() {
    let p = RenderParams::idle(variant());
    let json = serde_json::to_string(&p).unwrap();
    assert!(json.contains("\"stylized\""));
    assert!(json.contains("\"male\""));
    assert!(!json.contains("accent_color"));
    let back: RenderParams = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}

#[test]
fn all_variants_are_distinct() {
    for (i, a) in Variant::ALL.iter().enumerate() {
        for b in &Variant::ALL[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
