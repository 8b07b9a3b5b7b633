//! Transient notification bookkeeping. At most one notification is visible;
//! posting a new one supersedes the old, and a dismiss timer that outlived
//! its notification is ignored via the generation counter.

pub const DISPLAY_MS: u64 = 5000;
pub const EXIT_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            Severity::Info => (37, 99, 235),
            Severity::Success => (22, 163, 74),
            Severity::Error => (220, 38, 38),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub text: String,
    pub severity: Severity,
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    generation: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }

    /// Replace whatever is showing. The returned generation belongs to this
    /// notification alone; pass it back to `dismiss` when its timer fires.
    pub fn post(&mut self, text: impl Into<String>, severity: Severity) -> u64 {
        self.generation += 1;
        self.current = Some(Notification {
            text: text.into(),
            severity,
        });
        self.generation
    }

    /// True when `generation` still identifies the visible notification,
    /// which is then cleared. Stale timers get false and must do nothing.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_replaces_current() {
        let mut center = NotificationCenter::new();
        center.post("first", Severity::Info);
        center.post("second", Severity::Error);

        let current = center.current().unwrap();
        assert_eq!(current.text, "second");
        assert_eq!(current.severity, Severity::Error);
    }

    #[test]
    fn test_stale_dismiss_is_ignored() {
        let mut center = NotificationCenter::new();
        let first = center.post("first", Severity::Success);
        let second = center.post("second", Severity::Info);

        // The first notification's timer fires after it was superseded
        assert!(!center.dismiss(first));
        assert!(center.current().is_some());

        assert!(center.dismiss(second));
        assert!(center.current().is_none());
    }

    #[test]
    fn test_dismiss_twice_is_inert() {
        let mut center = NotificationCenter::new();
        let generation = center.post("once", Severity::Info);
        assert!(center.dismiss(generation));
        assert!(!center.dismiss(generation));
    }

    #[test]
    fn test_severity_colors_are_distinct() {
        assert_ne!(Severity::Info.color(), Severity::Success.color());
        assert_ne!(Severity::Success.color(), Severity::Error.color());
    }
}
