use fltk::{
    app::{self, Sender},
    enums::{Event, FrameType},
    frame::Frame,
    group::{Flex, Scroll, ScrollType},
    prelude::*,
    window::Window,
};

use crate::app::content::PortfolioContent;
use crate::app::messages::Message;
use crate::ui::nav_bar::{NavBar, NAV_HEIGHT};
use crate::ui::notification::Toast;
use crate::ui::sections::{self, PageWidgets};
use crate::ui::theme::Palette;

pub const WINDOW_W: i32 = 1100;
pub const WINDOW_H: i32 = 760;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub nav: NavBar,
    pub scroll: Scroll,
    pub page: PageWidgets,
    pub toast: Toast,
    pub progress: Frame,
}

pub fn build_main_window(
    content: &PortfolioContent,
    palette: Palette,
    sender: &Sender<Message>,
) -> MainWidgets {
    let title = format!("{} - Portfolio", content.name);
    let mut wind = Window::new(100, 100, WINDOW_W, WINDOW_H, None);
    wind.set_label(&title);
    wind.set_xclass("CrabFolio");

    let mut flex = Flex::new(0, 0, WINDOW_W, WINDOW_H, None);
    flex.set_type(fltk::group::FlexType::Column);

    let mut nav = NavBar::new(WINDOW_W, &content.nav_links, sender);
    nav.set_brand(&content.name);
    flex.fixed(&nav.bar, NAV_HEIGHT);

    let mut scroll = Scroll::new(0, NAV_HEIGHT, WINDOW_W, WINDOW_H - NAV_HEIGHT, None);
    scroll.set_type(ScrollType::Vertical);
    let page = sections::build_page(WINDOW_W, content, palette, sender);
    scroll.end();

    flex.end();

    // Overlays live directly in the window so they draw above the page:
    // the dropdown panel, the notification toast, and the load progress bar.
    nav.attach_panel(WINDOW_W, &content.nav_links, sender);
    let toast = Toast::new(WINDOW_W);

    let mut progress = Frame::new(0, 0, 0, 3, None);
    progress.set_frame(FrameType::FlatBox);

    wind.end();
    wind.resizable(&flex);
    wind.size_range(520, 480, 0, 0);

    wind.handle({
        let s = *sender;
        move |w, event| {
            match event {
                Event::Push => {
                    s.send(Message::MouseDown(app::event_x(), app::event_y()));
                }
                Event::MouseWheel => {
                    s.send(Message::PageScrolled);
                }
                Event::Resize => {
                    s.send(Message::WindowResized(w.w()));
                }
                _ => {}
            }
            // Never consume; normal dispatch continues below us
            false
        }
    });

    MainWidgets {
        wind,
        flex,
        nav,
        scroll,
        page,
        toast,
        progress,
    }
}
