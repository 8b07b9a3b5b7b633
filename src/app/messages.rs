use super::contact::Field;

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks and the submission worker thread send one of these;
/// the dispatch loop in main hands them to `AppState::handle`.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    NavLinkClicked(usize),
    MenuToggle,
    WindowResized(i32),
    MouseDown(i32, i32),
    PageScrolled,

    // Theme
    ToggleTheme,

    // Contact form
    FieldBlurred(Field),
    FieldEdited(Field),
    FormSubmit,
    FormOutcome(std::result::Result<String, String>),

    // Quick actions
    CopyEmail,
    CallPhone,
    OpenLinkedIn,
    OpenGitHub,

    // Page chrome
    LoadFinished,
    DismissNotification(u64),
}
