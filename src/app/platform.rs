//! System theme detection, used only when no theme was ever persisted.

pub fn detect_system_dark_mode() -> bool {
    // Windows: Check registry for dark mode preference
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        if let Ok(hkcu) = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        {
            // AppsUseLightTheme: 0 = dark mode, 1 = light mode
            if let Ok(value) = hkcu.get_value::<u32, _>("AppsUseLightTheme") {
                return value == 0;
            }
        }
    }

    // Linux: GNOME exposes the preference through gsettings
    #[cfg(target_os = "linux")]
    {
        if gsettings_value("gtk-theme").contains("dark") {
            return true;
        }
        if gsettings_value("color-scheme").contains("prefer-dark") {
            return true;
        }
    }

    // macOS: AppleInterfaceStyle is only set when dark mode is on
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            if output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .to_lowercase()
                    .contains("dark")
            {
                return true;
            }
        }
    }

    // Default to light mode if detection fails
    false
}

#[cfg(target_os = "linux")]
fn gsettings_value(key: &str) -> String {
    use std::process::Command;

    Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .map(|out| String::from_utf8_lossy(&out.stdout).to_lowercase())
        .unwrap_or_default()
}
