//! Typing marquee: types a phrase one character at a time, erases it, then
//! moves on to the next phrase, forever.
//!
//! The machine is pure. Each [`Marquee::tick`] returns the text to display
//! and how long to wait before the next tick; the browser side only owns the
//! timer.

#[cfg(test)]
#[path = "marquee_test.rs"]
mod marquee_test;

use std::time::Duration;

use crate::config::MarqueeConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarqueeError {
    #[error("marquee needs at least one phrase")]
    NoPhrases,
    #[error("marquee phrase {index} is empty")]
    EmptyPhrase { index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Growing,
    Shrinking,
}

/// Output of one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub type_delay: Duration,
    pub erase_delay: Duration,
    pub pause: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self::from(&MarqueeConfig::default())
    }
}

impl From<&MarqueeConfig> for Timing {
    fn from(config: &MarqueeConfig) -> Self {
        Self {
            type_delay: Duration::from_millis(u64::from(config.type_delay_ms)),
            erase_delay: Duration::from_millis(u64::from(config.erase_delay_ms)),
            pause: Duration::from_millis(u64::from(config.pause_ms)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Marquee {
    // Phrases are stored as chars so slicing never splits a code point.
    phrases: Vec<Vec<char>>,
    timing: Timing,
    phrase_index: usize,
    char_index: usize,
    phase: Phase,
}

impl Marquee {
    pub fn new<I, P>(phrases: I, timing: Timing) -> Result<Self, MarqueeError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let phrases: Vec<Vec<char>> = phrases
            .into_iter()
            .map(|p| p.as_ref().chars().collect())
            .collect();
        if phrases.is_empty() {
            return Err(MarqueeError::NoPhrases);
        }
        if let Some(index) = phrases.iter().position(Vec::is_empty) {
            return Err(MarqueeError::EmptyPhrase { index });
        }
        Ok(Self {
            phrases,
            timing,
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Growing,
        })
    }

    pub fn from_config(config: &MarqueeConfig) -> Result<Self, MarqueeError> {
        Self::new(&config.phrases, Timing::from(config))
    }

    #[cfg(test)]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[cfg(test)]
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advance by one character and report what to show next.
    pub fn tick(&mut self) -> Frame {
        let len = self.phrases[self.phrase_index].len();
        let delay = match self.phase {
            Phase::Growing => {
                self.char_index += 1;
                if self.char_index >= len {
                    self.char_index = len;
                    self.phase = Phase::Shrinking;
                    self.timing.pause
                } else {
                    self.timing.type_delay
                }
            }
            Phase::Shrinking => {
                self.char_index = self.char_index.saturating_sub(1);
                if self.char_index == 0 {
                    self.phase = Phase::Growing;
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    return Frame {
                        text: String::new(),
                        delay: self.timing.type_delay,
                    };
                }
                self.timing.erase_delay
            }
        };
        Frame {
            text: self.visible_text(),
            delay,
        }
    }

    fn visible_text(&self) -> String {
        self.phrases[self.phrase_index][..self.char_index]
            .iter()
            .collect()
    }
}
