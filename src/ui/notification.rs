use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app,
    enums::{Align, Color, FrameType},
    frame::Frame,
    prelude::*,
};

use crate::app::notifications::{Severity, EXIT_MS};
use crate::ui::nav_bar::NAV_HEIGHT;

pub const TOAST_W: i32 = 360;
pub const TOAST_H: i32 = 56;
const TOAST_MARGIN: i32 = 20;

const EXIT_FRAMES: i32 = 6;

/// The single floating notification frame, pinned to the window's top-right
/// corner. Showing a new notification while an exit slide is running simply
/// bumps the epoch; the old slide's timers become no-ops.
pub struct Toast {
    frame: Frame,
    epoch: Rc<Cell<u64>>,
    home_x: i32,
}

impl Toast {
    /// Build hidden. Call while the window is the current group, after the
    /// page flex, so the toast draws above the page.
    pub fn new(window_w: i32) -> Self {
        let home_x = window_w - TOAST_W - TOAST_MARGIN;
        let mut frame = Frame::new(home_x, NAV_HEIGHT + 14, TOAST_W, TOAST_H, None);
        frame.set_frame(FrameType::FlatBox);
        frame.set_label_size(13);
        frame.set_label_color(Color::White);
        frame.set_align(Align::Inside | Align::Left | Align::Wrap);
        frame.hide();

        Self {
            frame,
            epoch: Rc::new(Cell::new(0)),
            home_x,
        }
    }

    pub fn show(&mut self, text: &str, severity: Severity) {
        self.epoch.set(self.epoch.get() + 1);
        let (r, g, b) = severity.color();
        self.frame.set_color(Color::from_rgb(r, g, b));
        self.frame.set_label(text);
        self.frame.set_pos(self.home_x, self.frame.y());
        self.frame.show();
        self.frame.redraw();
    }

    /// Slide off to the right over the exit window, then hide. Interrupted
    /// by any newer `show`.
    pub fn begin_exit(&mut self) {
        let epoch = self.epoch.get();
        let step = (TOAST_W + TOAST_MARGIN) / EXIT_FRAMES;
        let interval = EXIT_MS as f64 / 1000.0 / EXIT_FRAMES as f64;
        run_exit_frame(
            self.frame.clone(),
            self.epoch.clone(),
            epoch,
            self.home_x,
            EXIT_FRAMES,
            step,
            interval,
        );
    }

    pub fn reposition(&mut self, window_w: i32) {
        self.home_x = window_w - TOAST_W - TOAST_MARGIN;
        if self.frame.visible() {
            self.frame.set_pos(self.home_x, self.frame.y());
        }
    }
}

fn run_exit_frame(
    frame: Frame,
    epoch: Rc<Cell<u64>>,
    started_at: u64,
    home_x: i32,
    frames_left: i32,
    step: i32,
    interval: f64,
) {
    let mut slot = Some(frame);
    app::add_timeout3(interval, move |_| {
        let Some(mut frame) = slot.take() else { return };
        if epoch.get() != started_at {
            // A newer notification took over the frame
            return;
        }
        if frames_left <= 0 {
            frame.hide();
            frame.set_pos(home_x, frame.y());
            return;
        }
        frame.set_pos(frame.x() + step, frame.y());
        if let Some(mut parent) = frame.parent() {
            parent.redraw();
        }
        run_exit_frame(
            frame,
            epoch.clone(),
            started_at,
            home_x,
            frames_left - 1,
            step,
            interval,
        );
    });
}
