use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use crate::app::content::NavLink;
use crate::app::messages::Message;
use crate::app::navigation::{self, MenuState, MOBILE_BREAKPOINT};
use crate::ui::theme::{theme_glyph, Palette};

pub const NAV_HEIGHT: i32 = 56;

const LINK_W: i32 = 96;
const LINK_H: i32 = 32;
const ICON_BTN_W: i32 = 40;
const PANEL_W: i32 = 220;
const PANEL_ITEM_H: i32 = 44;
const MARGIN: i32 = 16;

/// The top navigation bar plus the collapsed-mode dropdown panel. The panel
/// is a direct child of the window so it can overlay the page below.
pub struct NavBar {
    pub bar: Group,
    brand: Frame,
    links: Vec<Button>,
    theme_btn: Button,
    menu_btn: Button,
    panel: Option<Group>,
    panel_links: Vec<Button>,
    hrefs: Vec<String>,
    active: Option<usize>,
}

impl NavBar {
    /// Build the bar itself. Must be called while the flex column is the
    /// current group; the dropdown panel is attached later with
    /// `attach_panel` once the window is current again.
    pub fn new(width: i32, nav_links: &[NavLink], sender: &Sender<Message>) -> Self {
        let mut bar = Group::new(0, 0, width, NAV_HEIGHT, None);
        bar.set_frame(FrameType::FlatBox);

        let mut brand = Frame::new(MARGIN, 12, 220, 32, None);
        brand.set_align(Align::Inside | Align::Left);
        brand.set_label_font(Font::HelveticaBold);
        brand.set_label_size(18);

        let mut links = Vec::new();
        for (i, link) in nav_links.iter().enumerate() {
            let mut btn = Button::new(0, 12, LINK_W, LINK_H, None);
            btn.set_label(&link.label);
            btn.set_frame(FrameType::FlatBox);
            btn.set_down_frame(FrameType::FlatBox);
            btn.clear_visible_focus();
            btn.set_callback({
                let s = *sender;
                move |_| s.send(Message::NavLinkClicked(i))
            });
            links.push(btn);
        }

        let mut theme_btn = Button::new(0, 12, ICON_BTN_W, LINK_H, None);
        theme_btn.set_frame(FrameType::FlatBox);
        theme_btn.set_down_frame(FrameType::FlatBox);
        theme_btn.clear_visible_focus();
        theme_btn.set_callback({
            let s = *sender;
            move |_| s.send(Message::ToggleTheme)
        });

        let mut menu_btn = Button::new(0, 12, ICON_BTN_W, LINK_H, None);
        menu_btn.set_label(navigation::MENU_GLYPH_CLOSED);
        menu_btn.set_frame(FrameType::FlatBox);
        menu_btn.set_down_frame(FrameType::FlatBox);
        menu_btn.clear_visible_focus();
        menu_btn.set_label_size(16);
        menu_btn.hide();
        menu_btn.set_callback({
            let s = *sender;
            move |_| s.send(Message::MenuToggle)
        });

        bar.end();

        Self {
            bar,
            brand,
            links,
            theme_btn,
            menu_btn,
            panel: None,
            panel_links: Vec::new(),
            hrefs: nav_links.iter().map(|l| l.href.clone()).collect(),
            active: None,
        }
    }

    /// Build the dropdown panel as a window-level overlay. Call after the
    /// page flex has ended so the window is the current group.
    pub fn attach_panel(&mut self, window_w: i32, nav_links: &[NavLink], sender: &Sender<Message>) {
        let height = PANEL_ITEM_H * nav_links.len() as i32 + 12;
        let mut panel = Group::new(window_w - PANEL_W - MARGIN, NAV_HEIGHT + 6, PANEL_W, height, None);
        panel.set_frame(FrameType::BorderBox);

        for (i, link) in nav_links.iter().enumerate() {
            let mut btn = Button::new(
                panel.x() + 6,
                panel.y() + 6 + PANEL_ITEM_H * i as i32,
                PANEL_W - 12,
                PANEL_ITEM_H,
                None,
            );
            btn.set_label(&link.label);
            btn.set_frame(FrameType::FlatBox);
            btn.set_down_frame(FrameType::FlatBox);
            btn.clear_visible_focus();
            btn.set_align(Align::Inside | Align::Left);
            btn.set_callback({
                let s = *sender;
                move |_| s.send(Message::NavLinkClicked(i))
            });
            self.panel_links.push(btn);
        }

        panel.end();
        panel.hide();
        self.panel = Some(panel);
    }

    pub fn set_brand(&mut self, name: &str) {
        self.brand.set_label(name);
    }

    /// Mark the link whose page href matches the canonical current page.
    /// Anchor links never carry the active marker.
    pub fn set_active(&mut self, page: &str) {
        self.active = self
            .hrefs
            .iter()
            .position(|href| !navigation::is_anchor(href) && href == page);
    }

    pub fn href(&self, index: usize) -> Option<&str> {
        self.hrefs.get(index).map(String::as_str)
    }

    /// Collapse or expand the link row depending on the window width, and
    /// keep the right-aligned controls pinned to the edge.
    pub fn apply_layout(&mut self, window_w: i32) {
        let mobile = window_w <= MOBILE_BREAKPOINT;

        self.theme_btn
            .set_pos(window_w - ICON_BTN_W - MARGIN, self.theme_btn.y());
        self.menu_btn
            .set_pos(window_w - ICON_BTN_W * 2 - MARGIN - 8, self.menu_btn.y());

        if mobile {
            for btn in &mut self.links {
                btn.hide();
            }
            self.menu_btn.show();
        } else {
            let count = self.links.len() as i32;
            let row_start = window_w - ICON_BTN_W - MARGIN - 8 - LINK_W * count;
            for (i, btn) in self.links.iter_mut().enumerate() {
                btn.set_pos(row_start + LINK_W * i as i32, btn.y());
                btn.show();
            }
            self.menu_btn.hide();
        }

        if let Some(panel) = &mut self.panel {
            panel.set_pos(window_w - PANEL_W - MARGIN, panel.y());
            let (px, py) = (panel.x(), panel.y());
            for (i, btn) in self.panel_links.iter_mut().enumerate() {
                btn.set_pos(px + 6, py + 6 + PANEL_ITEM_H * i as i32);
            }
        }

        self.bar.redraw();
    }

    /// Mirror the menu state into the three places that show it: the panel,
    /// the button glyph, and the button's pressed styling.
    pub fn sync_menu(&mut self, menu: MenuState, window_w: i32, palette: Palette) {
        self.menu_btn.set_label(menu.glyph());
        let show_panel = menu.is_open() && window_w <= MOBILE_BREAKPOINT;
        if show_panel {
            self.menu_btn.set_color(palette.track);
        } else {
            self.menu_btn.set_color(palette.nav_bg);
        }
        if let Some(panel) = &mut self.panel {
            if show_panel {
                panel.show();
            } else {
                panel.hide();
            }
        }
        self.menu_btn.redraw();
    }

    pub fn is_click_inside(&self, x: i32, y: i32) -> bool {
        if widget_contains(&self.menu_btn, x, y) {
            return true;
        }
        match &self.panel {
            Some(panel) => panel.visible() && widget_contains(panel, x, y),
            None => false,
        }
    }

    pub fn apply_theme(&mut self, palette: Palette, is_dark: bool) {
        self.bar.set_color(palette.nav_bg);
        self.brand.set_label_color(palette.accent);

        for (i, btn) in self.links.iter_mut().enumerate() {
            btn.set_color(palette.nav_bg);
            if self.active == Some(i) {
                btn.set_label_color(palette.accent);
                btn.set_label_font(Font::HelveticaBold);
            } else {
                btn.set_label_color(palette.text);
                btn.set_label_font(Font::Helvetica);
            }
        }

        self.theme_btn.set_color(palette.nav_bg);
        self.theme_btn.set_label(theme_glyph(is_dark));
        self.theme_btn.set_label_color(palette.text);
        self.menu_btn.set_label_color(palette.text);

        if let Some(panel) = &mut self.panel {
            panel.set_color(palette.card_bg);
        }
        for (i, btn) in self.panel_links.iter_mut().enumerate() {
            btn.set_color(palette.card_bg);
            if self.active == Some(i) {
                btn.set_label_color(palette.accent);
            } else {
                btn.set_label_color(palette.text);
            }
        }

        self.bar.redraw();
        if let Some(panel) = &mut self.panel {
            panel.redraw();
        }
    }
}

fn widget_contains(widget: &impl WidgetExt, x: i32, y: i32) -> bool {
    x >= widget.x() && x < widget.x() + widget.w() && y >= widget.y() && y < widget.y() + widget.h()
}
