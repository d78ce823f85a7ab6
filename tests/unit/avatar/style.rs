use super::*;

#[test]
fn stylized_palette_matches_classic_colors() {
    let m = face_style(Variant::new(Style::Stylized, Gender::Male));
    assert_eq!(m.skin, Rgba8::rgb(0xfd, 0xbc, 0xb4));
    assert_eq!(m.iris, Rgba8::rgb(0x2c, 0x55, 0x30));
    assert_eq!(m.hair, Rgba8::rgb(0x4a, 0x4a, 0x4a));
    assert_eq!(m.mouth_interior, Rgba8::rgb(0x8b, 0x00, 0x00));

    let f = face_style(Variant::new(Style::Stylized, Gender::Female));
    assert_eq!(f.iris, Rgba8::rgb(0x4a, 0x90, 0xe2));
    assert_eq!(f.hair, Rgba8::rgb(0x8b, 0x45, 0x13));
}

#[test]
fn female_variants_carry_lashes_and_blush() {
    for style in [Style::Stylized, Style::Realistic] {
        let f = face_style(Variant::new(style, Gender::Female));
        assert!(f.lash_count > 0);
        assert!(f.blush.is_some());
        let m = face_style(Variant::new(style, Gender::Male));
        assert!(m.blush.is_none());
    }
}

#[test]
fn only_realistic_male_gets_stubble() {
    for v in Variant::ALL {
        let s = face_style(v);
        let expect = v.style == Style::Realistic && v.gender == Gender::Male;
        assert_eq!(s.stubble, expect, "{v:?}");
    }
}

#[test]
fn realistic_female_widens_eyes_and_adds_lower_lashes() {
    let f = face_style(Variant::new(Style::Realistic, Gender::Female));
    assert!(f.eye_aspect > 1.0);
    assert!(f.lower_lashes);

    let m = face_style(Variant::new(Style::Realistic, Gender::Male));
    assert!(m.eye_aspect < 1.0);
    assert!(!m.lower_lashes);
}
