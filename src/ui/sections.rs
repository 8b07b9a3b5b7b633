use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, CallbackTrigger, Event, Font, FrameType},
    frame::Frame,
    input::{Input, MultilineInput},
    prelude::*,
};

use crate::app::contact::Field;
use crate::app::content::PortfolioContent;
use crate::app::messages::Message;
use crate::ui::nav_bar::NAV_HEIGHT;
use crate::ui::skill_bar::SkillBar;
use crate::ui::theme::Palette;

const MARGIN_X: i32 = 32;
const CONTENT_W: i32 = 920;
const HERO_H: i32 = 430;

pub fn field_index(field: Field) -> usize {
    match field {
        Field::Name => 0,
        Field::Email => 1,
        Field::Subject => 2,
        Field::Message => 3,
    }
}

pub struct ContactFormWidgets {
    pub name: Input,
    pub email: Input,
    pub subject: Input,
    pub message: MultilineInput,
    /// One inline error frame per field, indexed by `field_index`.
    pub errors: Vec<Frame>,
    pub submit: Button,
    pub submit_label: String,
}

impl ContactFormWidgets {
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.value(),
            Field::Email => self.email.value(),
            Field::Subject => self.subject.value(),
            Field::Message => self.message.value(),
        }
    }

    pub fn clear_values(&mut self) {
        self.name.set_value("");
        self.email.set_value("");
        self.subject.set_value("");
        self.message.set_value("");
    }

    pub fn show_error(&mut self, field: Field, text: &str) {
        let frame = &mut self.errors[field_index(field)];
        frame.set_label(text);
        frame.show();
    }

    pub fn clear_error(&mut self, field: Field) {
        let frame = &mut self.errors[field_index(field)];
        frame.set_label("");
        frame.hide();
    }
}

/// Every widget on the scrolled page, grouped by role so the theme pass and
/// the reveal engine can reach them.
pub struct PageWidgets {
    pub hero_bg: Frame,
    pub hero_name: Frame,
    pub typing: Frame,
    pub tagline: Frame,

    /// Reveal targets that fade in (section headings).
    pub fade_frames: Vec<Frame>,
    /// Reveal targets that slide in; alternating left/right entry.
    pub slide_frames: Vec<Frame>,

    pub stat_cards: Vec<Frame>,
    pub stat_values: Vec<Frame>,
    pub stat_labels: Vec<Frame>,

    pub skill_names: Vec<Frame>,
    pub skill_bars: Vec<SkillBar>,

    pub quick_buttons: Vec<Button>,
    pub form_labels: Vec<Frame>,
    pub form: ContactFormWidgets,

    pub footer: Frame,

    /// Anchor name ("#about") to content y in window coordinates at scroll 0.
    pub anchors: Vec<(String, i32)>,
    /// Content height in pixels, measured from the top of the scroll area.
    pub total_height: i32,
}

/// Build the page inside the (current) scroll group. Coordinates are window
/// coordinates with the page scrolled to the top.
pub fn build_page(
    window_w: i32,
    content: &PortfolioContent,
    palette: Palette,
    sender: &Sender<Message>,
) -> PageWidgets {
    let mut anchors = Vec::new();

    // --- Hero ---
    let mut hero_bg = Frame::new(0, NAV_HEIGHT, window_w, HERO_H, None);
    hero_bg.set_frame(FrameType::FlatBox);

    let mut hero_name = Frame::new(MARGIN_X, 160, CONTENT_W, 44, None);
    hero_name.set_label(&content.name);
    hero_name.set_label_font(Font::HelveticaBold);
    hero_name.set_label_size(36);
    hero_name.set_align(Align::Inside | Align::Left);

    let mut typing = Frame::new(MARGIN_X, 216, CONTENT_W, 30, None);
    typing.set_label_size(22);
    typing.set_align(Align::Inside | Align::Left);

    let mut tagline = Frame::new(MARGIN_X, 260, CONTENT_W, 30, None);
    tagline.set_label(&content.tagline);
    tagline.set_label_size(14);
    tagline.set_align(Align::Inside | Align::Left);

    let mut fade_frames = Vec::new();
    let mut slide_frames = Vec::new();

    // --- About ---
    let about_top = NAV_HEIGHT + HERO_H + 24;
    anchors.push(("#about".to_string(), about_top));

    let mut y = about_top + 16;
    fade_frames.push(heading(MARGIN_X, y, &content.about.heading));
    y += 48;
    for paragraph in &content.about.paragraphs {
        let mut frame = Frame::new(MARGIN_X, y, CONTENT_W, 64, None);
        frame.set_label(paragraph);
        frame.set_label_size(14);
        frame.set_align(Align::Inside | Align::Left | Align::Top | Align::Wrap);
        frame.hide();
        slide_frames.push(frame);
        y += 76;
    }

    // --- Stats ---
    y += 24;
    let mut stat_cards = Vec::new();
    let mut stat_values = Vec::new();
    let mut stat_labels = Vec::new();
    let card_w = 280;
    let card_gap = 40;
    for (i, stat) in content.stats.iter().enumerate() {
        let x = MARGIN_X + (card_w + card_gap) * i as i32;
        let mut card = Frame::new(x, y, card_w, 110, None);
        card.set_frame(FrameType::FlatBox);
        stat_cards.push(card);

        let mut value = Frame::new(x, y + 16, card_w, 44, None);
        value.set_label("0");
        value.set_label_font(Font::HelveticaBold);
        value.set_label_size(32);
        stat_values.push(value);

        let mut label = Frame::new(x, y + 66, card_w, 24, None);
        label.set_label(&stat.label);
        label.set_label_size(13);
        stat_labels.push(label);
    }
    y += 140;

    // --- Skills ---
    anchors.push(("#skills".to_string(), y));
    y += 16;
    fade_frames.push(heading(MARGIN_X, y, "Skills"));
    y += 52;

    let mut skill_names = Vec::new();
    let mut skill_bars = Vec::new();
    for skill in &content.skills {
        let mut name = Frame::new(MARGIN_X, y, 320, 20, None);
        name.set_label(&format!("{} - {}%", skill.name, skill.level));
        name.set_label_size(13);
        name.set_align(Align::Inside | Align::Left);
        skill_names.push(name);

        skill_bars.push(SkillBar::new(MARGIN_X, y + 24, CONTENT_W, palette));
        y += 56;
    }
    y += 24;

    // --- Contact ---
    anchors.push(("#contact".to_string(), y));
    y += 16;
    fade_frames.push(heading(MARGIN_X, y, "Get In Touch"));
    y += 52;

    let quick_actions: [(&str, Message); 4] = [
        ("Copy Email", Message::CopyEmail),
        ("Call Me", Message::CallPhone),
        ("LinkedIn", Message::OpenLinkedIn),
        ("GitHub", Message::OpenGitHub),
    ];
    let mut quick_buttons = Vec::new();
    for (i, (label, msg)) in quick_actions.into_iter().enumerate() {
        let mut btn = Button::new(MARGIN_X + 176 * i as i32, y, 160, 36, None);
        btn.set_label(label);
        btn.set_frame(FrameType::FlatBox);
        btn.set_down_frame(FrameType::FlatBox);
        btn.clear_visible_focus();
        btn.set_callback({
            let s = *sender;
            move |_| s.send(msg.clone())
        });
        quick_buttons.push(btn);
    }
    y += 60;

    let mut form_labels = Vec::new();
    let mut errors = Vec::new();
    let half_w = 440;

    // Name and email share a row
    form_labels.push(small_label(MARGIN_X, y, "Name"));
    form_labels.push(small_label(MARGIN_X + half_w + 40, y, "Email"));
    y += 24;

    let mut name_input = Input::new(MARGIN_X, y, half_w, 32, None);
    let mut email_input = Input::new(MARGIN_X + half_w + 40, y, half_w, 32, None);
    y += 36;
    errors.push(error_frame(MARGIN_X, y, half_w, palette));
    errors.push(error_frame(MARGIN_X + half_w + 40, y, half_w, palette));
    y += 26;

    form_labels.push(small_label(MARGIN_X, y, "Subject"));
    y += 24;
    let mut subject_input = Input::new(MARGIN_X, y, CONTENT_W, 32, None);
    y += 36;
    errors.push(error_frame(MARGIN_X, y, CONTENT_W, palette));
    y += 26;

    form_labels.push(small_label(MARGIN_X, y, "Message"));
    y += 24;
    let mut message_input = MultilineInput::new(MARGIN_X, y, CONTENT_W, 140, None);
    message_input.set_wrap(true);
    y += 144;
    errors.push(error_frame(MARGIN_X, y, CONTENT_W, palette));
    y += 30;

    let mut submit = Button::new(MARGIN_X, y, 180, 40, None);
    let submit_label = "Send Message".to_string();
    submit.set_label(&submit_label);
    submit.set_frame(FrameType::FlatBox);
    submit.set_down_frame(FrameType::FlatBox);
    submit.clear_visible_focus();
    submit.set_callback({
        let s = *sender;
        move |_| s.send(Message::FormSubmit)
    });
    y += 72;

    wire_field(&mut name_input, Field::Name, sender);
    wire_field(&mut email_input, Field::Email, sender);
    wire_field(&mut subject_input, Field::Subject, sender);
    wire_field(&mut message_input, Field::Message, sender);

    // --- Footer ---
    let mut footer = Frame::new(0, y, window_w, 64, None);
    footer.set_frame(FrameType::FlatBox);
    footer.set_label(&format!("\u{00a9} 2026 {}", content.name));
    footer.set_label_size(12);
    let total_height = y + 64 - NAV_HEIGHT;

    PageWidgets {
        hero_bg,
        hero_name,
        typing,
        tagline,
        fade_frames,
        slide_frames,
        stat_cards,
        stat_values,
        stat_labels,
        skill_names,
        skill_bars,
        quick_buttons,
        form_labels,
        form: ContactFormWidgets {
            name: name_input,
            email: email_input,
            subject: subject_input,
            message: message_input,
            errors,
            submit,
            submit_label,
        },
        footer,
        anchors,
        total_height,
    }
}

fn heading(x: i32, y: i32, text: &str) -> Frame {
    let mut frame = Frame::new(x, y, CONTENT_W, 32, None);
    frame.set_label(text);
    frame.set_label_font(Font::HelveticaBold);
    frame.set_label_size(24);
    frame.set_align(Align::Inside | Align::Left);
    frame.hide();
    frame
}

fn small_label(x: i32, y: i32, text: &str) -> Frame {
    let mut frame = Frame::new(x, y, 200, 20, None);
    frame.set_label(text);
    frame.set_label_size(13);
    frame.set_align(Align::Inside | Align::Left);
    frame
}

fn error_frame(x: i32, y: i32, w: i32, palette: Palette) -> Frame {
    let mut frame = Frame::new(x, y, w, 18, None);
    frame.set_label_size(12);
    frame.set_align(Align::Inside | Align::Left);
    frame.set_label_color(palette.error);
    frame.hide();
    frame
}

fn wire_field<I: InputExt + WidgetBase + 'static>(input: &mut I, field: Field, sender: &Sender<Message>) {
    input.set_trigger(CallbackTrigger::Changed);
    input.set_callback({
        let s = *sender;
        move |_| s.send(Message::FieldEdited(field))
    });
    input.handle({
        let s = *sender;
        move |_, event| {
            if event == Event::Unfocus {
                s.send(Message::FieldBlurred(field));
            }
            false
        }
    });
}

impl PageWidgets {
    pub fn apply_theme(&mut self, palette: Palette) {
        self.hero_bg.set_color(palette.hero_bg);
        self.hero_name.set_label_color(palette.text);
        self.typing.set_label_color(palette.accent);
        self.tagline.set_label_color(palette.muted);

        for frame in &mut self.fade_frames {
            frame.set_label_color(palette.text);
        }
        for frame in &mut self.slide_frames {
            frame.set_label_color(palette.muted);
        }

        for card in &mut self.stat_cards {
            card.set_color(palette.card_bg);
        }
        for value in &mut self.stat_values {
            value.set_label_color(palette.accent);
        }
        for label in &mut self.stat_labels {
            label.set_label_color(palette.muted);
        }

        for name in &mut self.skill_names {
            name.set_label_color(palette.text);
        }
        for bar in &mut self.skill_bars {
            bar.apply_theme(palette);
        }

        for btn in &mut self.quick_buttons {
            btn.set_color(palette.card_bg);
            btn.set_label_color(palette.text);
        }
        for label in &mut self.form_labels {
            label.set_label_color(palette.muted);
        }
        for error in &mut self.form.errors {
            error.set_label_color(palette.error);
        }

        for input in [&mut self.form.name, &mut self.form.email, &mut self.form.subject] {
            input.set_color(palette.input_bg);
            input.set_text_color(palette.input_text);
            input.set_text_size(14);
        }
        self.form.message.set_color(palette.input_bg);
        self.form.message.set_text_color(palette.input_text);
        self.form.message.set_text_size(14);

        self.form.submit.set_color(palette.accent);
        self.form.submit.set_label_color(palette.card_bg);

        self.footer.set_color(palette.nav_bg);
        self.footer.set_label_color(palette.muted);
    }
}
