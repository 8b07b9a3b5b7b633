pub mod main_window;
pub mod nav_bar;
pub mod notification;
pub mod sections;
pub mod skill_bar;
pub mod theme;
