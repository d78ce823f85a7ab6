use super::*;

use chrono::TimeZone;

use crate::persona::agents::presets;

fn at_noon() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, 14, 12, 30, 0).unwrap()
}

#[test]
fn prompt_embeds_name_personality_and_date() {
    let agent = presets::paul();
    let user = User {
        name: "Sam".into(),
        info: String::new(),
    };
    let text = system_instructions(&agent, &user, at_noon());
    assert!(text.starts_with("Your name is Paul"));
    assert!(text.contains("(Sam)"));
    assert!(text.contains(&agent.personality));
    assert!(text.contains("Saturday, March 14, 2026"));
    assert!(text.contains("12:30 PM"));
}

#[test]
fn anonymous_user_omits_parenthetical() {
    let text = system_instructions(&presets::penny(), &User::anonymous(), at_noon());
    assert!(text.contains("with the user.\n"));
    assert!(!text.contains('('));
}

#[test]
fn user_info_section_is_conditional() {
    let agent = presets::charlotte();
    let without = system_instructions(&agent, &User::anonymous(), at_noon());
    assert!(!without.contains("Some information about"));

    let with = system_instructions(
        &agent,
        &User {
            name: String::new(),
            info: "Plays jazz piano.".into(),
        },
        at_noon(),
    );
    assert!(with.contains("Some information about the user:\nPlays jazz piano."));

    let named = system_instructions(
        &agent,
        &User {
            name: "Kim".into(),
            info: "Plays jazz piano.".into(),
        },
        at_noon(),
    );
    assert!(named.contains("Some information about Kim:"));
}

#[test]
fn spoken_style_constraints_are_always_present() {
    let text = system_instructions(&presets::shane(), &User::anonymous(), at_noon());
    assert!(text.contains("Do not use emoji"));
    assert!(text.contains("spoken, not displayed"));
    assert!(text.contains("Do not repeat"));
}

#[test]
fn afternoon_times_format_with_twelve_hour_clock() {
    let evening = Local.with_ymd_and_hms(2026, 3, 14, 21, 5, 0).unwrap();
    let text = system_instructions(&presets::paul(), &User::anonymous(), evening);
    assert!(text.contains("9:05 PM"));
}
