//! Application layer - everything that is not widget construction.
//!
//! # Structure
//!
//! - `content.rs` - Portfolio content embedded at build time (the page's data)
//! - `settings.rs` - Persisted theme preference
//! - `reveal.rs`, `typing.rs`, `parallax.rs`, `progress.rs` - Animation engines
//! - `navigation.rs` - Current-page rule and the collapsible menu state machine
//! - `contact.rs` - Form validation and mail-relay submission
//! - `notifications.rs` - Transient notification bookkeeping
//! - `state.rs` - Main application coordinator (owns the dispatch handlers)

pub mod contact;
pub mod content;
pub mod error;
pub mod messages;
pub mod navigation;
pub mod notifications;
pub mod parallax;
pub mod platform;
pub mod progress;
pub mod reveal;
pub mod settings;
pub mod state;
pub mod typing;

// Re-exports for convenient external access
pub use contact::{Field, FormData};
pub use content::PortfolioContent;
pub use error::AppError;
pub use messages::Message;
pub use notifications::Severity;
pub use platform::detect_system_dark_mode;
pub use settings::{AppSettings, ThemePreference};
