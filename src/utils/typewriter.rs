use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(90);
pub const DELETE_DELAY: Duration = Duration::from_millis(40);
/// Extra ticks the fully typed word stays on screen before deleting starts.
pub const HOLD_TICKS: usize = 2;
pub const DEFAULT_WORD: &str = "Developer";

#[derive(Clone, Debug, PartialEq)]
pub struct TypingStep {
    pub text: String,
    /// How long to wait before the next tick.
    pub delay: Duration,
}

/// Types each word out one character per tick, holds it, deletes it, then
/// moves on to the next word, cycling forever.
#[derive(Clone, Debug)]
pub struct Typewriter {
    words: Vec<String>,
    index: usize,
    cursor: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<I, S>(words: I) -> Self where I: IntoIterator<Item = S>, S: AsRef<str> {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            words.push(DEFAULT_WORD.to_string());
        }
        Self {
            words,
            index: 0,
            cursor: 0,
            deleting: false,
        }
    }

    /// Builds from a comma separated list such as a `data-words` attribute.
    pub fn from_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn current_word(&self) -> &str {
        &self.words[self.index]
    }

    pub fn tick(&mut self) -> TypingStep {
        let word = &self.words[self.index];
        let len = word.chars().count();
        let text: String = word.chars().take(self.cursor).collect();

        if self.deleting {
            if self.cursor == 0 {
                self.deleting = false;
                self.index = (self.index + 1) % self.words.len();
            } else {
                self.cursor -= 1;
            }
        } else {
            self.cursor += 1;
            if self.cursor > len + HOLD_TICKS {
                self.deleting = true;
            }
        }

        TypingStep {
            text,
            delay: if self.deleting { DELETE_DELAY } else { TYPE_DELAY },
        }
    }
}

impl Iterator for Typewriter {
    type Item = TypingStep;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.tick())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multibyte_words_are_not_split() {
        let mut tw = Typewriter::new(["héllo"]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.tick().text, "hé");
    }
}
