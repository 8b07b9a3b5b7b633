use std::cell::RefCell;
use std::rc::Rc;

use fltk::{draw, prelude::*, widget::Widget};

use crate::ui::theme::Palette;

pub const SKILL_BAR_HEIGHT: i32 = 12;

struct SkillBarState {
    level: u8,
    animated: bool,
    palette: Palette,
}

/// A horizontal skill meter. The fill width is set once by the reveal
/// engine (no interpolation); until then the bar draws only its track.
#[derive(Clone)]
pub struct SkillBar {
    pub widget: Widget,
    state: Rc<RefCell<SkillBarState>>,
}

impl SkillBar {
    pub fn new(x: i32, y: i32, w: i32, palette: Palette) -> Self {
        let state = Rc::new(RefCell::new(SkillBarState {
            level: 0,
            animated: false,
            palette,
        }));

        let mut widget = Widget::new(x, y, w, SKILL_BAR_HEIGHT, None);
        let draw_state = state.clone();
        widget.draw(move |wid| {
            let st = draw_state.borrow();
            draw_skill_bar(wid, &st);
        });

        Self { widget, state }
    }

    /// Reveal: jump straight to the level and remember that we played.
    pub fn set_level(&mut self, level: u8) {
        {
            let mut st = self.state.borrow_mut();
            st.level = level.min(100);
            st.animated = true;
        }
        self.widget.redraw();
    }

    pub fn level(&self) -> u8 {
        self.state.borrow().level
    }

    pub fn is_animated(&self) -> bool {
        self.state.borrow().animated
    }

    pub fn apply_theme(&mut self, palette: Palette) {
        self.state.borrow_mut().palette = palette;
        self.widget.redraw();
    }
}

fn draw_skill_bar(wid: &Widget, st: &SkillBarState) {
    draw::set_draw_color(st.palette.track);
    draw::draw_rectf(wid.x(), wid.y(), wid.w(), wid.h());

    if st.animated && st.level > 0 {
        let fill = wid.w() * i32::from(st.level) / 100;
        draw::set_draw_color(st.palette.accent);
        draw::draw_rectf(wid.x(), wid.y(), fill, wid.h());
    }
}
