use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fltk::{
    app::{self, Sender},
    dialog,
    frame::Frame,
    group::Scroll,
    prelude::*,
    window::Window,
};

use super::contact::{self, Field, FormData};
use super::content::PortfolioContent;
use super::messages::Message;
use super::navigation::{self, MenuState};
use super::notifications::{NotificationCenter, Severity, DISPLAY_MS};
use super::parallax::ParallaxDriver;
use super::progress::{self, LoadProgress};
use super::reveal::{CounterAnimation, RevealEngine, RevealKind, TargetId, Viewport};
use super::settings::{AppSettings, ThemePreference};
use super::typing::{self, TypingSequence};
use crate::ui::main_window::MainWidgets;
use crate::ui::skill_bar::SkillBar;
use crate::ui::theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

const SLIDE_DISTANCE: i32 = 60;
const SLIDE_FRAMES: i32 = 15;
const SMOOTH_SCROLL_FRAMES: u32 = 24;
const FRAME_SECS: f64 = 0.016;
const SCROLL_WATCH_SECS: f64 = 0.1;

/// The widget a reveal target animates, kept parallel to the engine's ids.
enum RevealWidget {
    Fade(Frame),
    Slide { frame: Frame, from_left: bool },
    Counter(Frame),
    Skill(SkillBar),
}

impl RevealWidget {
    fn geometry(&self) -> (i32, i32) {
        match self {
            RevealWidget::Fade(f) | RevealWidget::Slide { frame: f, .. } | RevealWidget::Counter(f) => {
                (f.y(), f.h())
            }
            RevealWidget::Skill(bar) => (bar.widget.y(), bar.widget.h()),
        }
    }
}

pub struct AppState {
    pub widgets: MainWidgets,
    pub settings: AppSettings,
    pub dark_mode: bool,
    content: PortfolioContent,
    sender: Sender<Message>,

    menu: MenuState,
    locked_scroll_y: i32,
    /// The app's location; pages other than the landing page would set this.
    location: String,

    reveal: RevealEngine,
    reveal_widgets: Vec<RevealWidget>,
    parallax: ParallaxDriver,
    notifications: NotificationCenter,
    load_progress: Rc<RefCell<LoadProgress>>,
    submit_in_flight: bool,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        settings: AppSettings,
        content: PortfolioContent,
        sender: Sender<Message>,
        dark_mode: bool,
    ) -> Self {
        let mut state = Self {
            widgets,
            settings,
            dark_mode,
            content,
            sender,
            menu: MenuState::new(),
            locked_scroll_y: 0,
            location: "index.html".to_string(),
            reveal: RevealEngine::new(),
            reveal_widgets: Vec::new(),
            parallax: ParallaxDriver::new(),
            notifications: NotificationCenter::new(),
            load_progress: Rc::new(RefCell::new(LoadProgress::new())),
            submit_in_flight: false,
        };
        state.register_animations();
        state
    }

    /// Register every animated element exactly once. Ids from the engine are
    /// indices into `reveal_widgets`.
    fn register_animations(&mut self) {
        let page = &self.widgets.page;

        self.parallax.register(page.hero_bg.clone());

        for frame in &page.fade_frames {
            self.reveal.register(RevealKind::Fade);
            self.reveal_widgets.push(RevealWidget::Fade(frame.clone()));
        }

        for (i, frame) in page.slide_frames.iter().enumerate() {
            let from_left = i % 2 == 0;
            self.reveal.register(if from_left {
                RevealKind::SlideLeft
            } else {
                RevealKind::SlideRight
            });
            self.reveal_widgets.push(RevealWidget::Slide {
                frame: frame.clone(),
                from_left,
            });
        }

        for (frame, stat) in page.stat_values.iter().zip(&self.content.stats) {
            self.reveal.register(RevealKind::Counter {
                target: stat.target,
            });
            self.reveal_widgets
                .push(RevealWidget::Counter(frame.clone()));
        }

        for (bar, skill) in page.skill_bars.iter().zip(&self.content.skills) {
            self.reveal.register(RevealKind::SkillBar { level: skill.level });
            self.reveal_widgets.push(RevealWidget::Skill(bar.clone()));
        }
    }

    /// Kick off everything that runs from page load: theme, nav state, the
    /// typing effect, the synthetic progress bar, the scroll watcher, and an
    /// initial reveal scan for elements already in view.
    pub fn start(&mut self) {
        self.apply_theme();

        let width = self.widgets.wind.w();
        let page = navigation::current_page(&self.location).to_string();
        self.widgets.nav.set_active(&page);
        self.widgets.nav.apply_layout(width);
        self.sync_menu_widgets();

        if let Some(seq) = TypingSequence::new(&self.content.texts) {
            run_typing(
                self.widgets.page.typing.clone(),
                seq,
                typing::START_DELAY_MS,
            );
        }

        self.widgets.progress.show();
        run_progress(
            self.load_progress.clone(),
            self.widgets.progress.clone(),
            self.widgets.wind.clone(),
        );

        watch_scroll(
            self.widgets.scroll.clone(),
            Rc::new(Cell::new(self.widgets.scroll.yposition())),
            self.sender,
        );

        // The page is interactive at this point; the progress bar fills on
        // the load message, mirroring the old window load event.
        let s = self.sender;
        app::add_timeout3(0.25, move |_| s.send(Message::LoadFinished));

        self.on_scroll();
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::NavLinkClicked(index) => self.on_nav_link(index),
            Message::MenuToggle => self.on_menu_toggle(),
            Message::WindowResized(width) => self.on_window_resized(width),
            Message::MouseDown(x, y) => self.on_mouse_down(x, y),
            Message::PageScrolled => self.on_scroll(),
            Message::ToggleTheme => self.on_toggle_theme(),
            Message::FieldBlurred(field) => self.on_field_blurred(field),
            Message::FieldEdited(field) => self.widgets.page.form.clear_error(field),
            Message::FormSubmit => self.on_form_submit(),
            Message::FormOutcome(result) => self.on_form_outcome(result),
            Message::CopyEmail => self.on_copy_email(),
            Message::CallPhone => {
                self.open_external(&format!("tel:{}", self.content.contact.phone))
            }
            Message::OpenLinkedIn => self.open_external(&self.content.contact.linkedin.clone()),
            Message::OpenGitHub => self.open_external(&self.content.contact.github.clone()),
            Message::LoadFinished => self.on_load_finished(),
            Message::DismissNotification(generation) => {
                if self.notifications.dismiss(generation) {
                    self.widgets.toast.begin_exit();
                }
            }
        }
    }

    // --- Navigation ---

    fn on_nav_link(&mut self, index: usize) {
        let Some(href) = self.widgets.nav.href(index).map(str::to_string) else {
            return;
        };

        if self.menu.on_link_click() {
            self.sync_menu_widgets();
        }

        if navigation::is_anchor(&href) {
            self.smooth_scroll_to_anchor(&href);
        } else if href == navigation::current_page(&self.location) {
            // Clicking the current page's own link returns to the top
            self.smooth_scroll_to(0);
        }
    }

    fn on_menu_toggle(&mut self) {
        let opened = self.menu.toggle();
        if opened {
            self.locked_scroll_y = self.widgets.scroll.yposition();
        }
        self.sync_menu_widgets();
    }

    fn on_mouse_down(&mut self, x: i32, y: i32) {
        if self.menu.is_open() && !self.widgets.nav.is_click_inside(x, y) {
            if self.menu.on_outside_click() {
                self.sync_menu_widgets();
            }
        }
    }

    fn on_window_resized(&mut self, width: i32) {
        self.widgets.nav.apply_layout(width);
        self.widgets.toast.reposition(width);
        if self.menu.on_resize(width) {
            self.sync_menu_widgets();
        }
        // Keep the progress bar proportional to the new width
        let percent = self.load_progress.borrow().percent();
        if self.widgets.progress.visible() {
            let w = (width as f64 * percent / 100.0) as i32;
            self.widgets.progress.resize(0, 0, w, self.widgets.progress.h());
        }
        self.widgets.wind.redraw();
    }

    /// The three widget mirrors of the menu state: panel visibility, button
    /// glyph/styling, and the page scroll lock (released here by virtue of
    /// `on_scroll` no longer restoring the locked position).
    fn sync_menu_widgets(&mut self) {
        let palette = theme::palette(self.dark_mode);
        let width = self.widgets.wind.w();
        self.widgets.nav.sync_menu(self.menu, width, palette);
        self.widgets.wind.redraw();
    }

    fn smooth_scroll_to_anchor(&mut self, anchor: &str) {
        let Some(&(_, anchor_y)) = self
            .widgets
            .page
            .anchors
            .iter()
            .find(|(name, _)| name == anchor)
        else {
            return; // unknown anchors are a silent no-op
        };
        self.smooth_scroll_to(anchor_y - self.widgets.scroll.y());
    }

    fn smooth_scroll_to(&mut self, target: i32) {
        let scroll = &self.widgets.scroll;
        let max_scroll = (self.widgets.page.total_height - scroll.h()).max(0);
        let target = target.clamp(0, max_scroll);
        let steps =
            navigation::scroll_steps(scroll.yposition(), target, SMOOTH_SCROLL_FRAMES);
        if !steps.is_empty() {
            run_smooth_scroll(scroll.clone(), steps, self.sender);
        }
    }

    // --- Scroll-driven animation ---

    fn on_scroll(&mut self) {
        let scroll_y = self.widgets.scroll.yposition();

        if self.menu.is_open() {
            // Body scroll lock while the dropdown is open
            if scroll_y != self.locked_scroll_y {
                self.widgets.scroll.scroll_to(0, self.locked_scroll_y);
            }
            return;
        }

        self.parallax.apply(scroll_y);

        let viewport = Viewport {
            top: self.widgets.scroll.y(),
            height: self.widgets.scroll.h(),
        };
        let targets = &self.reveal_widgets;
        let fired = self.reveal.scan(viewport, |id| targets[id].geometry());
        for (id, kind) in fired {
            self.play_reveal(id, kind);
        }

        self.widgets.wind.redraw();
    }

    fn play_reveal(&mut self, id: TargetId, kind: RevealKind) {
        match (&mut self.reveal_widgets[id], kind) {
            (RevealWidget::Fade(frame), _) => {
                frame.show();
            }
            (RevealWidget::Slide { frame, from_left }, _) => {
                let target_x = frame.x();
                let start_x = if *from_left {
                    target_x - SLIDE_DISTANCE
                } else {
                    target_x + SLIDE_DISTANCE
                };
                frame.set_pos(start_x, frame.y());
                frame.show();
                run_slide(frame.clone(), target_x, SLIDE_FRAMES);
            }
            (RevealWidget::Counter(frame), RevealKind::Counter { target }) => {
                run_counter(frame.clone(), CounterAnimation::new(target));
            }
            (RevealWidget::Skill(bar), RevealKind::SkillBar { level }) => {
                bar.set_level(level);
            }
            _ => {}
        }
    }

    // --- Theme ---

    fn on_toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.settings.theme = Some(ThemePreference::from_dark(self.dark_mode));
        if let Err(e) = self.settings.save() {
            log::warn!("Failed to persist theme preference: {}", e);
        }
        self.apply_theme();
    }

    fn apply_theme(&mut self) {
        let palette = theme::palette(self.dark_mode);

        self.widgets.wind.set_color(palette.window_bg);
        self.widgets.scroll.set_color(palette.window_bg);
        self.widgets.progress.set_color(palette.accent);
        self.widgets.nav.apply_theme(palette, self.dark_mode);
        self.widgets.page.apply_theme(palette);
        self.sync_menu_widgets();

        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.widgets.wind, self.dark_mode);

        self.widgets.wind.redraw();
    }

    // --- Contact form ---

    fn form_data(&self) -> FormData {
        let form = &self.widgets.page.form;
        FormData {
            name: form.value(Field::Name),
            email: form.value(Field::Email),
            subject: form.value(Field::Subject),
            message: form.value(Field::Message),
        }
    }

    fn on_field_blurred(&mut self, field: Field) {
        let value = self.widgets.page.form.value(field);
        match contact::validate(field, &value) {
            Ok(()) => self.widgets.page.form.clear_error(field),
            Err(text) => self.widgets.page.form.show_error(field, text),
        }
        self.widgets.wind.redraw();
    }

    fn on_form_submit(&mut self) {
        if self.submit_in_flight {
            return;
        }

        let data = self.form_data();
        let errors = data.validate_all();
        for field in Field::ALL {
            self.widgets.page.form.clear_error(field);
        }
        if !errors.is_empty() {
            for (field, text) in errors {
                self.widgets.page.form.show_error(field, text);
            }
            self.notify(Severity::Error, contact::FIX_ERRORS_TEXT);
            self.widgets.wind.redraw();
            return;
        }

        self.submit_in_flight = true;
        let submit = &mut self.widgets.page.form.submit;
        submit.set_label(contact::SUBMIT_LABEL_SENDING);
        submit.deactivate();

        let endpoint = self.content.contact.relay_endpoint.clone();
        let sender = self.sender;
        std::thread::spawn(move || {
            let result = contact::submit_message(&endpoint, &data)
                .map(|_| contact::SUCCESS_TEXT.to_string());
            sender.send(Message::FormOutcome(result));
        });
    }

    fn on_form_outcome(&mut self, result: Result<String, String>) {
        // Restore the submit control no matter how the attempt ended
        let label = self.widgets.page.form.submit_label.clone();
        let submit = &mut self.widgets.page.form.submit;
        submit.set_label(&label);
        submit.activate();
        self.submit_in_flight = false;

        match result {
            Ok(text) => {
                self.widgets.page.form.clear_values();
                self.notify(Severity::Success, &text);
            }
            Err(text) => {
                // Entered values stay untouched for another try
                self.notify(Severity::Error, &text);
            }
        }
        self.widgets.wind.redraw();
    }

    // --- Quick actions ---

    fn on_copy_email(&mut self) {
        app::copy(&self.content.contact.email);
        self.notify(Severity::Success, "Email copied to clipboard!");
    }

    fn open_external(&mut self, target: &str) {
        if let Err(e) = open::that(target) {
            log::error!("Failed to open {}: {}", target, e);
            dialog::alert_default(&format!("Failed to open link: {}", e));
        }
    }

    // --- Notifications ---

    fn notify(&mut self, severity: Severity, text: &str) {
        let generation = self.notifications.post(text, severity);
        self.widgets.toast.show(text, severity);
        let s = self.sender;
        app::add_timeout3(DISPLAY_MS as f64 / 1000.0, move |_| {
            s.send(Message::DismissNotification(generation));
        });
    }

    // --- Page load progress ---

    fn on_load_finished(&mut self) {
        self.load_progress.borrow_mut().finish();
        let width = self.widgets.wind.w();
        self.widgets.progress.resize(0, 0, width, self.widgets.progress.h());
        self.widgets.progress.redraw();

        // Hold at 100%, then thin out over the exit window and remove
        let mut slot = Some(self.widgets.progress.clone());
        app::add_timeout3(progress::EXIT_HOLD_MS as f64 / 1000.0, move |_| {
            if let Some(frame) = slot.take() {
                let steps = frame.h().max(1);
                run_progress_fade(frame, steps, progress::EXIT_FADE_MS as f64 / 1000.0 / steps as f64);
            }
        });
    }
}

// --- Timer-chained animation runners ---
//
// Each runner keeps exactly one outstanding timeout; a tick performs one
// step and schedules the next. Ownership is threaded through an Option so
// the FnMut closures can move their captures onward.

fn run_typing(frame: Frame, seq: TypingSequence, delay_ms: u64) {
    let mut slot = Some((frame, seq));
    app::add_timeout3(delay_ms as f64 / 1000.0, move |_| {
        if let Some((mut frame, mut seq)) = slot.take() {
            let tick = seq.tick();
            frame.set_label(&tick.display);
            frame.redraw();
            run_typing(frame, seq, tick.next_delay_ms);
        }
    });
}

fn run_counter(frame: Frame, anim: CounterAnimation) {
    let mut slot = Some((frame, anim));
    app::add_timeout3(FRAME_SECS, move |_| {
        if let Some((mut frame, mut anim)) = slot.take() {
            let step = anim.tick();
            frame.set_label(&step.value.to_string());
            frame.redraw();
            if !step.done {
                run_counter(frame, anim);
            }
        }
    });
}

fn run_slide(frame: Frame, target_x: i32, frames_left: i32) {
    let mut slot = Some(frame);
    app::add_timeout3(FRAME_SECS, move |_| {
        if let Some(mut frame) = slot.take() {
            if frames_left <= 0 {
                frame.set_pos(target_x, frame.y());
                frame.redraw();
                return;
            }
            let remaining = target_x - frame.x();
            let step = remaining / frames_left;
            frame.set_pos(frame.x() + step, frame.y());
            if let Some(mut parent) = frame.parent() {
                parent.redraw();
            }
            run_slide(frame, target_x, frames_left - 1);
        }
    });
}

fn run_smooth_scroll(scroll: Scroll, mut steps: Vec<i32>, sender: Sender<Message>) {
    let mut slot = Some(scroll);
    app::add_timeout3(FRAME_SECS, move |_| {
        if let Some(mut scroll) = slot.take() {
            if steps.is_empty() {
                return;
            }
            let step = steps.remove(0);
            scroll.scroll_to(0, step);
            sender.send(Message::PageScrolled);
            if !steps.is_empty() {
                run_smooth_scroll(scroll, std::mem::take(&mut steps), sender);
            }
        }
    });
}

fn run_progress(model: Rc<RefCell<LoadProgress>>, frame: Frame, wind: Window) {
    let mut slot = Some((frame, wind));
    app::add_timeout3(progress::ADVANCE_INTERVAL_MS as f64 / 1000.0, move |_| {
        if let Some((mut frame, wind)) = slot.take() {
            let percent = {
                let mut m = model.borrow_mut();
                m.advance(progress::jitter());
                m.percent()
            };
            if model.borrow().is_finished() {
                // The finish handler owns the bar from here
                return;
            }
            let w = (wind.w() as f64 * percent / 100.0) as i32;
            frame.resize(0, 0, w, frame.h());
            frame.redraw();
            if !model.borrow().is_stalled() {
                run_progress(model.clone(), frame, wind);
            }
        }
    });
}

fn run_progress_fade(frame: Frame, steps_left: i32, interval: f64) {
    let mut slot = Some(frame);
    app::add_timeout3(interval, move |_| {
        if let Some(mut frame) = slot.take() {
            if steps_left <= 0 {
                frame.hide();
            } else {
                frame.resize(0, 0, frame.w(), frame.h() - 1);
                run_progress_fade(frame.clone(), steps_left - 1, interval);
            }
            if let Some(mut parent) = frame.parent() {
                parent.redraw();
            }
        }
    });
}

/// Scrollbar drags do not pass through the window's event filter, so a
/// lightweight watcher notices position changes and reports them.
fn watch_scroll(scroll: Scroll, last: Rc<Cell<i32>>, sender: Sender<Message>) {
    let mut slot = Some(scroll);
    app::add_timeout3(SCROLL_WATCH_SECS, move |_| {
        if let Some(scroll) = slot.take() {
            let y = scroll.yposition();
            if y != last.get() {
                last.set(y);
                sender.send(Message::PageScrolled);
            }
            watch_scroll(scroll, last.clone(), sender);
        }
    });
}
