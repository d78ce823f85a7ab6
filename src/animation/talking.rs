use std::time::{Duration, Instant};

/// Default amplitude above which audio output counts as speech.
pub const AUDIO_OUTPUT_DETECTION_THRESHOLD: f64 = 0.05;

/// Default delay between the end of audio output and leaving the talking
/// state.
pub const TALKING_STATE_COOLDOWN: Duration = Duration::from_millis(2000);

/// Two-state hysteresis machine deriving `is_talking` from a continuous
/// amplitude signal sampled at animation-frame rate.
///
/// Entry is edge-triggered and wins immediately: any sample above the
/// threshold flips the state to talking and re-arms the cooldown deadline.
/// Exit is timer-triggered: the state drops back to idle only once the
/// cooldown elapses with no renewed crossing. This keeps the mouth from
/// flickering shut on brief amplitude dips mid-syllable.
///
/// Time is passed in by the caller so the machine is trivially testable and
/// independent of any clock or timer service.
#[derive(Clone, Copy, Debug)]
pub struct TalkingState {
    threshold: f64,
    cooldown: Duration,
    talking_until: Option<Instant>,
}

impl TalkingState {
    /// Machine with the default threshold and cooldown.
    pub fn new() -> Self {
        Self::with_tuning(AUDIO_OUTPUT_DETECTION_THRESHOLD, TALKING_STATE_COOLDOWN)
    }

    /// Machine with explicit threshold and cooldown.
    pub fn with_tuning(threshold: f64, cooldown: Duration) -> Self {
        Self {
            threshold,
            cooldown,
            talking_until: None,
        }
    }

    /// Feed one amplitude sample observed at `now`; returns the state after
    /// the sample is applied.
    pub fn update(&mut self, amplitude: f64, now: Instant) -> bool {
        if amplitude > self.threshold {
            self.talking_until = Some(now + self.cooldown);
        } else if let Some(deadline) = self.talking_until
            && now >= deadline
        {
            self.talking_until = None;
        }
        self.talking_until.is_some()
    }

    /// State as of `now` without feeding a sample.
    pub fn is_talking(&self, now: Instant) -> bool {
        self.talking_until.is_some_and(|deadline| now < deadline)
    }
}

impl Default for TalkingState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/talking.rs"]
mod tests;
