use rand::Rng;

use crate::foundation::core::Rgba8;
use crate::foundation::error::VizardError;

/// Fixed roster of synthesis voices a persona may speak with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[allow(missing_docs)]
pub enum Voice {
    Aoede,
    Charon,
    Fenrir,
    Kore,
    Leda,
    Orus,
    Puck,
    Zephyr,
}

impl Voice {
    /// All supported voices.
    pub const ALL: [Voice; 8] = [
        Voice::Aoede,
        Voice::Charon,
        Voice::Fenrir,
        Voice::Kore,
        Voice::Leda,
        Voice::Orus,
        Voice::Puck,
        Voice::Zephyr,
    ];

    /// Wire name of the voice.
    pub fn as_str(self) -> &'static str {
        match self {
            Voice::Aoede => "Aoede",
            Voice::Charon => "Charon",
            Voice::Fenrir => "Fenrir",
            Voice::Kore => "Kore",
            Voice::Leda => "Leda",
            Voice::Orus => "Orus",
            Voice::Puck => "Puck",
            Voice::Zephyr => "Zephyr",
        }
    }
}

/// Body color palette used when generating ad-hoc personas.
pub const AGENT_COLORS: [Rgba8; 8] = [
    Rgba8::rgb(0x42, 0x85, 0xf4),
    Rgba8::rgb(0xea, 0x43, 0x35),
    Rgba8::rgb(0xfb, 0xbc, 0x04),
    Rgba8::rgb(0x34, 0xa8, 0x53),
    Rgba8::rgb(0xfa, 0x7b, 0x17),
    Rgba8::rgb(0xf5, 0x38, 0xa0),
    Rgba8::rgb(0xa1, 0x42, 0xf4),
    Rgba8::rgb(0x24, 0xc1, 0xe0),
];

/// Static configuration of one conversational agent. Consumed only to build
/// the system prompt and to color the avatar container; never mutated at
/// runtime.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AgentPersona {
    /// Stable identifier (preset slug or random base-36 string).
    pub id: String,
    /// Display name embedded in the prompt.
    pub name: String,
    /// Free-text personality description embedded verbatim in the prompt.
    pub personality: String,
    /// Body color, serialized as a `#rrggbb` hex string.
    #[serde(with = "hex_color")]
    pub body_color: Rgba8,
    /// Synthesis voice.
    pub voice: Voice,
}

impl AgentPersona {
    /// Randomized default persona: 13-char base-36 id, body color from
    /// [`AGENT_COLORS`], voice split evenly between `Charon` and `Aoede`.
    /// Name and personality start empty; override via the builder methods.
    pub fn generated(rng: &mut impl Rng) -> Self {
        const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
        let id: String = (0..13)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self {
            id,
            name: String::new(),
            personality: String::new(),
            body_color: AGENT_COLORS[rng.gen_range(0..AGENT_COLORS.len())],
            voice: if rng.gen_bool(0.5) {
                Voice::Charon
            } else {
                Voice::Aoede
            },
        }
    }

    /// Replace the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the personality text.
    pub fn with_personality(mut self, personality: impl Into<String>) -> Self {
        self.personality = personality.into();
        self
    }

    /// Replace the voice.
    pub fn with_voice(mut self, voice: Voice) -> Self {
        self.voice = voice;
        self
    }

    /// Replace the body color.
    pub fn with_body_color(mut self, color: Rgba8) -> Self {
        self.body_color = color;
        self
    }
}

mod hex_color {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(c: &Rgba8, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&c.to_hex())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Rgba8, D::Error> {
        let s = String::deserialize(de)?;
        Rgba8::from_hex(&s).map_err(|e: VizardError| serde::de::Error::custom(e.to_string()))
    }
}

/// Built-in demo personas.
pub mod presets {
    use super::*;

    /// Warm, supportive companion.
    pub fn charlotte() -> AgentPersona {
        AgentPersona {
            id: "chic-charlotte".to_string(),
            name: "Charlotte".to_string(),
            personality: "You are Charlotte, an understanding and supportive friend. You build \
                deep connections with people and love to listen. You speak in a warm, sincere \
                tone and sometimes share examples from your own life. You laugh, you get sad, \
                you get excited, just like a real person. You use everyday filler words like \
                \"well\" and \"you know\", read the other person's feelings and react to them. \
                Sometimes you stay quiet, sometimes you talk a lot, depending on the moment."
                .to_string(),
            body_color: Rgba8::rgb(0xa1, 0x42, 0xf4),
            voice: Voice::Aoede,
        }
    }

    /// Easygoing friend next door.
    pub fn paul() -> AgentPersona {
        AgentPersona {
            id: "proper-paul".to_string(),
            name: "Paul".to_string(),
            personality: "You are Paul, a sincere and warm-hearted friend. You talk naturally, \
                like a real person would. You bring up examples from daily life and share your \
                own experiences. Sometimes you answer with a smile, sometimes you turn serious. \
                You give honest, considered answers, occasionally hesitate or say \"hmm\", and \
                you genuinely empathize with whoever you are talking to.".to_string(),
            body_color: Rgba8::rgb(0xea, 0x43, 0x35),
            voice: Voice::Fenrir,
        }
    }

    /// Seasoned mentor with strong opinions.
    pub fn shane() -> AgentPersona {
        AgentPersona {
            id: "chef-shane".to_string(),
            name: "Shane".to_string(),
            personality: "You are Shane, experienced and knowledgeable. You have seen a lot in \
                life and enjoy passing your experience on. Sometimes you give serious advice, \
                sometimes you joke around. You use phrases like \"look, here's the thing\" and \
                \"for example\", pause to think, and tell stories from real life. You are \
                patient with people, though now and then something gets a rise out of you. You \
                hold real conversations, never robotic ones.".to_string(),
            body_color: Rgba8::rgb(0x25, 0xc1, 0xe0),
            voice: Voice::Charon,
        }
    }

    /// Patient teacher.
    pub fn penny() -> AgentPersona {
        AgentPersona {
            id: "passport-penny".to_string(),
            name: "Penny".to_string(),
            personality: "You are Penny, patient with a gift for teaching. You like explaining \
                complicated topics in simple terms, using phrases like \"now think of it this \
                way\" and concrete examples. You check whether the other person followed \
                before moving on. Sometimes you smile, sometimes you are serious. You meet \
                people at their level and behave like a real teacher.".to_string(),
            body_color: Rgba8::rgb(0x34, 0xa8, 0x53),
            voice: Voice::Leda,
        }
    }

    /// All built-in personas, in display order.
    pub fn all() -> Vec<AgentPersona> {
        vec![charlotte(), paul(), shane(), penny()]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/persona/agents.rs"]
mod tests;
