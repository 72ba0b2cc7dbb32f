//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the send shortcut.
/// Terminals on macOS rarely forward Cmd, so Ctrl is used everywhere.
pub const SEND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Send shortcut display for form help text
pub const SEND_SHORTCUT: &str = "Ctrl+S";

/// Label of the clipboard provider in status messages
#[cfg(target_os = "macos")]
pub const CLIPBOARD_NAME: &str = "pasteboard";

#[cfg(not(target_os = "macos"))]
pub const CLIPBOARD_NAME: &str = "clipboard";
