use crate::app::domain::palette_config::Appearance;

/// Ask the desktop whether it prefers a dark appearance.
/// Falls back to [`Appearance::Light`] when nothing can be determined.
pub fn detect_system_appearance() -> Appearance {
    let dark = query_dark_preference().unwrap_or(false);
    tracing::debug!(dark, "detected system appearance");
    Appearance::from_dark(dark)
}

#[cfg(target_os = "windows")]
fn query_dark_preference() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let personalize = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark, 1 = light
    let light: u32 = personalize.get_value("AppsUseLightTheme").ok()?;
    Some(light == 0)
}

#[cfg(target_os = "linux")]
fn query_dark_preference() -> Option<bool> {
    let gsettings = |key: &str| {
        std::process::Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", key])
            .output()
            .ok()
            .map(|out| String::from_utf8_lossy(&out.stdout).to_lowercase())
    };

    if gsettings("color-scheme").is_some_and(|s| s.contains("prefer-dark")) {
        return Some(true);
    }
    gsettings("gtk-theme").map(|theme| theme.contains("dark"))
}

#[cfg(target_os = "macos")]
fn query_dark_preference() -> Option<bool> {
    let out = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    // The key is absent in light mode, which makes `defaults` fail
    let style = String::from_utf8_lossy(&out.stdout).to_lowercase();
    Some(out.status.success() && style.contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn query_dark_preference() -> Option<bool> {
    None
}
