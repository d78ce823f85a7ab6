use chrono::{DateTime, Local};

use crate::persona::agents::AgentPersona;

/// The human side of the conversation, as far as the prompt cares.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct User {
    /// Display name; empty means anonymous.
    pub name: String,
    /// Free-text background the agent may personalize replies with; empty
    /// means none.
    pub info: String,
}

impl User {
    /// Anonymous user with no background info.
    pub fn anonymous() -> Self {
        Self::default()
    }
}

/// Assemble the system prompt for one agent/user pairing.
///
/// The personality text is embedded verbatim. The user's name appears as a
/// parenthetical only when non-empty, and the background section is emitted
/// only when `user.info` is non-empty. `now` is injected by the caller so
/// the output is deterministic under test.
pub fn system_instructions(agent: &AgentPersona, user: &User, now: DateTime<Local>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Your name is {} and you are having a voice conversation with the user",
        agent.name
    ));
    if !user.name.is_empty() {
        out.push_str(&format!(" ({})", user.name));
    }
    out.push_str(".\n\n");

    out.push_str("Your personality is described as follows:\n");
    out.push_str(&agent.personality);
    out.push('\n');

    if !user.info.is_empty() {
        let who = if user.name.is_empty() {
            "the user".to_string()
        } else {
            user.name.clone()
        };
        out.push_str(&format!(
            "\nSome information about {who}:\n{}\nUse it to make your replies more personal.\n",
            user.info
        ));
    }

    out.push_str(&format!(
        "\nToday's date is {} and the time is {}.\n\n",
        now.format("%A, %B %-d, %Y"),
        now.format("%-I:%M %p"),
    ));

    out.push_str(
        "Give replies that fit your personality. Do not use emoji or other symbols that cannot \
         be read aloud; your reply is spoken, not displayed. Keep replies short, a few \
         sentences at most, as in a real spoken conversation. Do not repeat things you have \
         already said. Speak naturally, like a person would: pause occasionally, use small \
         fillers, and react to what the user actually said.",
    );

    out
}

#[cfg(test)]
#[path = "../../tests/unit/persona/prompt.rs"]
mod tests;
