//! Scroll-triggered one-shot animations.
//!
//! Targets are registered once at startup and scanned against the page
//! viewport on every scroll tick. A target that crosses its visibility
//! threshold fires exactly once and is dropped from the watch list before
//! its animation starts, so no later scan can ever see it again.

/// Identifies a registered target. Ids are handed out sequentially and stay
/// valid for the page's lifetime (they index the caller's widget table).
pub type TargetId = usize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealKind {
    Fade,
    SlideLeft,
    SlideRight,
    Counter { target: i64 },
    SkillBar { level: u8 },
}

impl RevealKind {
    /// Minimum visible fraction required to fire.
    pub fn threshold(self) -> f64 {
        match self {
            RevealKind::Counter { .. } | RevealKind::SkillBar { .. } => 0.5,
            _ => 0.1,
        }
    }

    /// Pixels shaved off the bottom of the viewport before testing, so
    /// elements barely peeking in at the fold do not fire yet.
    pub fn bottom_margin(self) -> i32 {
        match self {
            RevealKind::Counter { .. } | RevealKind::SkillBar { .. } => 0,
            _ => 50,
        }
    }
}

/// The page viewport in window coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub top: i32,
    pub height: i32,
}

/// Fraction of a widget's height currently inside the viewport, after the
/// bottom margin is applied. Zero-height widgets are never visible.
pub fn visible_fraction(widget_y: i32, widget_h: i32, viewport: Viewport, bottom_margin: i32) -> f64 {
    if widget_h <= 0 || viewport.height <= 0 {
        return 0.0;
    }
    let view_bottom = viewport.top + viewport.height - bottom_margin;
    let top = widget_y.max(viewport.top);
    let bottom = (widget_y + widget_h).min(view_bottom);
    (bottom - top).max(0) as f64 / widget_h as f64
}

struct Watched {
    id: TargetId,
    kind: RevealKind,
}

pub struct RevealEngine {
    watched: Vec<Watched>,
    next_id: TargetId,
}

impl RevealEngine {
    pub fn new() -> Self {
        Self {
            watched: Vec::new(),
            next_id: 0,
        }
    }

    pub fn register(&mut self, kind: RevealKind) -> TargetId {
        let id = self.next_id;
        self.next_id += 1;
        self.watched.push(Watched { id, kind });
        id
    }

    /// Number of targets still waiting to fire.
    pub fn watched_count(&self) -> usize {
        self.watched.len()
    }

    /// Test every watched target against the viewport. Targets that cross
    /// their threshold are unregistered and returned; everything else keeps
    /// waiting. `geometry` maps a target id to its (y, height) in the same
    /// coordinate space as the viewport.
    pub fn scan<G>(&mut self, viewport: Viewport, geometry: G) -> Vec<(TargetId, RevealKind)>
    where
        G: Fn(TargetId) -> (i32, i32),
    {
        let mut fired = Vec::new();
        self.watched.retain(|w| {
            let (y, h) = geometry(w.id);
            let fraction = visible_fraction(y, h, viewport, w.kind.bottom_margin());
            if fraction >= w.kind.threshold() {
                fired.push((w.id, w.kind));
                false
            } else {
                true
            }
        });
        fired
    }
}

impl Default for RevealEngine {
    fn default() -> Self {
        Self::new()
    }
}

pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_FRAME_MS: f64 = 16.0;

/// One animation frame's worth of counter output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterFrame {
    pub value: i64,
    pub done: bool,
}

/// Linear 0 -> target interpolation over a fixed two-second window. Every
/// frame shows the ceiling of the accumulator; the last frame snaps to the
/// exact target so float drift can never overshoot.
pub struct CounterAnimation {
    target: i64,
    current: f64,
    step: f64,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            current: 0.0,
            step: target as f64 / (COUNTER_DURATION_MS / COUNTER_FRAME_MS),
        }
    }

    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.step;
        if self.current < self.target as f64 {
            CounterFrame {
                value: self.current.ceil() as i64,
                done: false,
            }
        } else {
            CounterFrame {
                value: self.target,
                done: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport {
        top: 0,
        height: 600,
    };

    #[test]
    fn test_visible_fraction_fully_inside() {
        assert_eq!(visible_fraction(100, 100, VIEW, 0), 1.0);
    }

    #[test]
    fn test_visible_fraction_half_below_fold() {
        // Bottom half of the widget hangs below the viewport
        assert_eq!(visible_fraction(550, 100, VIEW, 0), 0.5);
    }

    #[test]
    fn test_visible_fraction_outside() {
        assert_eq!(visible_fraction(700, 100, VIEW, 0), 0.0);
        assert_eq!(visible_fraction(-200, 100, VIEW, 0), 0.0);
    }

    #[test]
    fn test_bottom_margin_shrinks_viewport() {
        // Widget occupies 560..660; without margin 40/100 visible,
        // with a 50px margin only 550..660 -> nothing above the margin line
        assert!(visible_fraction(560, 100, VIEW, 0) > 0.0);
        assert_eq!(visible_fraction(560, 100, VIEW, 50), 0.0);
    }

    #[test]
    fn test_zero_height_widget_is_never_visible() {
        assert_eq!(visible_fraction(100, 0, VIEW, 0), 0.0);
    }

    #[test]
    fn test_counter_threshold_is_half() {
        let mut engine = RevealEngine::new();
        let id = engine.register(RevealKind::Counter { target: 10 });

        // 40% visible: below the 0.5 threshold
        let fired = engine.scan(VIEW, |_| (560, 100));
        assert!(fired.is_empty());
        assert_eq!(engine.watched_count(), 1);

        // 50% visible: fires
        let fired = engine.scan(VIEW, |_| (550, 100));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].0, id);
    }

    #[test]
    fn test_fade_threshold_is_tenth_with_margin() {
        let mut engine = RevealEngine::new();
        engine.register(RevealKind::Fade);

        // 10% of the widget above the margin line (550): y=540, h=100
        // visible span 540..550 = 10px
        let fired = engine.scan(VIEW, |_| (540, 100));
        assert_eq!(fired.len(), 1);
    }

    #[test]
    fn test_reveal_fires_at_most_once() {
        let mut engine = RevealEngine::new();
        engine.register(RevealKind::Fade);

        let fired = engine.scan(VIEW, |_| (100, 100));
        assert_eq!(fired.len(), 1);

        // However many further scans happen, the target is gone
        for _ in 0..10 {
            let fired = engine.scan(VIEW, |_| (100, 100));
            assert!(fired.is_empty());
        }
        assert_eq!(engine.watched_count(), 0);
    }

    #[test]
    fn test_unfired_targets_keep_waiting() {
        let mut engine = RevealEngine::new();
        let visible = engine.register(RevealKind::Fade);
        let hidden = engine.register(RevealKind::Fade);

        let fired = engine.scan(VIEW, |id| if id == visible { (100, 100) } else { (900, 100) });
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].0, visible);
        assert_eq!(engine.watched_count(), 1);

        // The second target scrolls into view later
        let fired = engine.scan(VIEW, |_| (200, 100));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].0, hidden);
    }

    #[test]
    fn test_counter_is_monotonic_and_exact() {
        let mut anim = CounterAnimation::new(250);
        let mut last = 0;
        let mut frames = 0;
        loop {
            let frame = anim.tick();
            assert!(frame.value >= last, "counter must never decrease");
            assert!(frame.value <= 250, "counter must never overshoot");
            last = frame.value;
            frames += 1;
            if frame.done {
                break;
            }
            assert!(frames < 200, "counter failed to terminate");
        }
        assert_eq!(last, 250);
        // 2000ms / 16ms = 125 frames
        assert_eq!(frames, 125);
    }

    #[test]
    fn test_counter_zero_target_finishes_immediately() {
        let mut anim = CounterAnimation::new(0);
        let frame = anim.tick();
        assert!(frame.done);
        assert_eq!(frame.value, 0);
    }

    #[test]
    fn test_counter_small_target() {
        let mut anim = CounterAnimation::new(1);
        let mut frames = 0;
        let mut last = 0;
        loop {
            let frame = anim.tick();
            assert!(frame.value <= 1);
            last = frame.value;
            frames += 1;
            if frame.done {
                break;
            }
        }
        assert_eq!(last, 1);
        assert_eq!(frames, 125);
    }
}
