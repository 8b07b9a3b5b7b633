//! Hero typing effect: types each configured string forward, holds, deletes
//! it backward, pauses, then moves to the next string forever.

pub const START_DELAY_MS: u64 = 1000;
pub const TYPE_DELAY_MS: u64 = 100;
pub const DELETE_DELAY_MS: u64 = 50;
pub const HOLD_DELAY_MS: u64 = 1500;
pub const ADVANCE_DELAY_MS: u64 = 500;

/// What the caller renders after a tick, and when to tick again.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingTick {
    pub display: String,
    pub next_delay_ms: u64,
}

/// The cursor over the configured strings. One tick moves one character and
/// schedules the next; the sequence has no terminal state.
pub struct TypingSequence {
    texts: Vec<Vec<char>>,
    text_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingSequence {
    /// `None` when there is nothing to type; the component then never starts.
    pub fn new(texts: &[String]) -> Option<Self> {
        if texts.is_empty() {
            return None;
        }
        Some(Self {
            texts: texts.iter().map(|t| t.chars().collect()).collect(),
            text_index: 0,
            char_index: 0,
            deleting: false,
        })
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn text_index(&self) -> usize {
        self.text_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn tick(&mut self) -> TypingTick {
        let current = &self.texts[self.text_index];

        let mut delay = if self.deleting {
            self.char_index -= 1;
            DELETE_DELAY_MS
        } else {
            self.char_index += 1;
            TYPE_DELAY_MS
        };
        let display: String = current[..self.char_index].iter().collect();

        if !self.deleting && self.char_index == current.len() {
            // Fully typed: hold, then start deleting
            self.deleting = true;
            delay = HOLD_DELAY_MS;
        } else if self.deleting && self.char_index == 0 {
            // Fully deleted: pause, then advance to the next string
            self.deleting = false;
            self.text_index = (self.text_index + 1) % self.texts.len();
            delay = ADVANCE_DELAY_MS;
        }

        TypingTick {
            display,
            next_delay_ms: delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_list_never_starts() {
        assert!(TypingSequence::new(&[]).is_none());
    }

    #[test]
    fn test_types_forward_one_char_per_tick() {
        let mut seq = TypingSequence::new(&texts(&["Hi"])).unwrap();

        let t = seq.tick();
        assert_eq!(t.display, "H");
        assert_eq!(t.next_delay_ms, TYPE_DELAY_MS);

        let t = seq.tick();
        assert_eq!(t.display, "Hi");
        // Fully typed: the hold delay replaces the per-char delay
        assert_eq!(t.next_delay_ms, HOLD_DELAY_MS);
        assert!(seq.is_deleting());
    }

    #[test]
    fn test_deletes_backward_then_advances() {
        let mut seq = TypingSequence::new(&texts(&["ab", "xyz"])).unwrap();
        seq.tick(); // "a"
        seq.tick(); // "ab", hold
        let t = seq.tick();
        assert_eq!(t.display, "a");
        assert_eq!(t.next_delay_ms, DELETE_DELAY_MS);

        let t = seq.tick();
        assert_eq!(t.display, "");
        assert_eq!(t.next_delay_ms, ADVANCE_DELAY_MS);
        assert_eq!(seq.text_index(), 1);
        assert!(!seq.is_deleting());

        let t = seq.tick();
        assert_eq!(t.display, "x");
    }

    #[test]
    fn test_full_cycle_advances_text_index_by_one() {
        let mut seq = TypingSequence::new(&texts(&["abc", "de"])).unwrap();
        let len = 3;

        // type len chars (last one holds), delete len chars (last one pauses)
        for _ in 0..(2 * len) {
            seq.tick();
        }
        assert_eq!(seq.char_index(), 0);
        assert_eq!(seq.text_index(), 1);

        // second string wraps back to index 0
        for _ in 0..(2 * 2) {
            seq.tick();
        }
        assert_eq!(seq.char_index(), 0);
        assert_eq!(seq.text_index(), 0);
    }

    #[test]
    fn test_char_index_stays_in_bounds() {
        let mut seq = TypingSequence::new(&texts(&["rust", "go", "zig"])).unwrap();
        for _ in 0..500 {
            seq.tick();
            let len = ["rust", "go", "zig"][seq.text_index()].chars().count();
            assert!(seq.char_index() <= len);
        }
    }

    #[test]
    fn test_multibyte_strings_split_on_chars() {
        let mut seq = TypingSequence::new(&texts(&["héllo"])).unwrap();
        let t = seq.tick();
        assert_eq!(t.display, "h");
        let t = seq.tick();
        assert_eq!(t.display, "hé");
    }
}
