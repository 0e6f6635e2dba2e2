//! Global hotkey bindings.
//!
//! Bindings are parsed from text such as `Ctrl+Shift+O`. The Win32 listener
//! registers them on a dedicated thread; everything else only sees the
//! `HotkeySource` seam.

#[cfg(windows)]
pub mod win32;

#[cfg(windows)]
pub use win32::GlobalHotkeys;

use crate::audio::PlatformError;
use crate::error::ValidationError;
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;
use thiserror::Error;

/// Set of modifier keys held for a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(1);
    pub const SHIFT: Modifiers = Modifiers(1 << 1);
    pub const ALT: Modifiers = Modifiers(1 << 2);
    pub const WIN: Modifiers = Modifiers(1 << 3);

    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn parse(name: &str) -> Option<Modifiers> {
        match name.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => Some(Modifiers::CTRL),
            "shift" => Some(Modifiers::SHIFT),
            "alt" => Some(Modifiers::ALT),
            "win" | "super" | "meta" => Some(Modifiers::WIN),
            _ => None,
        }
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

/// Non-modifier key of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// `A`..`Z`, stored uppercase
    Letter(char),

    /// `0`..`9`
    Digit(u8),

    /// `F1`..`F24`
    Function(u8),
}

impl Key {
    /// Windows virtual-key code.
    pub fn virtual_key(&self) -> u32 {
        match *self {
            // VK codes for letters and digits match their ASCII values
            Key::Letter(c) => c as u32,
            Key::Digit(d) => u32::from(b'0' + d),
            // VK_F1 = 0x70
            Key::Function(n) => 0x70 + u32::from(n) - 1,
        }
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        let mut chars = upper.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => return Ok(Key::Letter(c)),
            (Some(c), None) if c.is_ascii_digit() => return Ok(Key::Digit(c as u8 - b'0')),
            _ => {}
        }

        upper
            .strip_prefix('F')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=24).contains(n))
            .map(Key::Function)
            .ok_or_else(|| format!("unsupported key `{}`", s))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Letter(c) => write!(f, "{}", c),
            Key::Digit(d) => write!(f, "{}", d),
            Key::Function(n) => write!(f, "F{}", n),
        }
    }
}

/// A (modifier set, key) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HotkeyBinding {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl HotkeyBinding {
    /// Ctrl+Shift+O
    pub const DEFAULT_TOGGLE: HotkeyBinding = HotkeyBinding::new(
        Modifiers(Modifiers::CTRL.0 | Modifiers::SHIFT.0),
        Key::Letter('O'),
    );

    /// Ctrl+Shift+U
    pub const DEFAULT_EXIT: HotkeyBinding = HotkeyBinding::new(
        Modifiers(Modifiers::CTRL.0 | Modifiers::SHIFT.0),
        Key::Letter('U'),
    );

    pub const fn new(modifiers: Modifiers, key: Key) -> Self {
        Self { modifiers, key }
    }
}

impl FromStr for HotkeyBinding {
    type Err = HotkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| HotkeyError::InvalidBinding {
            input: s.to_string(),
            reason,
        };

        let parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let (key_part, modifier_parts) = parts
            .split_last()
            .ok_or_else(|| invalid("empty binding".to_string()))?;
        if key_part.is_empty() {
            return Err(invalid("missing key".to_string()));
        }

        let mut modifiers = Modifiers::NONE;
        for part in modifier_parts {
            let modifier =
                Modifiers::parse(part).ok_or_else(|| invalid(format!("unknown modifier `{}`", part)))?;
            if modifiers.contains(modifier) {
                return Err(invalid(format!("modifier `{}` given twice", part)));
            }
            modifiers = modifiers | modifier;
        }
        if modifiers.is_empty() {
            return Err(invalid("at least one modifier is required".to_string()));
        }

        let key = key_part.parse::<Key>().map_err(invalid)?;
        Ok(Self { modifiers, key })
    }
}

impl fmt::Display for HotkeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Modifiers::CTRL, "Ctrl"),
            (Modifiers::SHIFT, "Shift"),
            (Modifiers::ALT, "Alt"),
            (Modifiers::WIN, "Win"),
        ];
        for (modifier, name) in names {
            if self.modifiers.contains(modifier) {
                write!(f, "{}+", name)?;
            }
        }
        write!(f, "{}", self.key)
    }
}

/// The two bindings live during listen mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyBindings {
    pub toggle: HotkeyBinding,
    pub exit: HotkeyBinding,
}

impl HotkeyBindings {
    pub fn new(toggle: HotkeyBinding, exit: HotkeyBinding) -> Result<Self, ValidationError> {
        if toggle == exit {
            return Err(ValidationError::DuplicateHotkey {
                binding: toggle.to_string(),
            });
        }
        Ok(Self { toggle, exit })
    }
}

impl Default for HotkeyBindings {
    fn default() -> Self {
        Self {
            toggle: HotkeyBinding::DEFAULT_TOGGLE,
            exit: HotkeyBinding::DEFAULT_EXIT,
        }
    }
}

/// Which binding fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    ToggleMute,
    Exit,
}

/// Blocking source of hotkey events.
pub trait HotkeySource {
    /// Block until either binding fires.
    fn wait_next(&mut self) -> Result<HotkeyAction, HotkeyError>;

    /// Release both bindings. Failures are logged, not returned.
    fn unregister_all(&mut self);
}

/// Hotkey error types.
#[derive(Debug, Error)]
pub enum HotkeyError {
    #[error("Invalid hotkey `{input}`: {reason}")]
    InvalidBinding { input: String, reason: String },

    #[error("Could not register {binding}, it may be taken by another application: {source}")]
    RegistrationFailed {
        binding: String,
        #[source]
        source: PlatformError,
    },

    #[error("Failed to start hotkey thread: {0}")]
    ThreadSpawn(#[source] std::io::Error),

    #[error("Hotkey listener stopped unexpectedly")]
    ListenerStopped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_toggle() {
        let binding: HotkeyBinding = "Ctrl+Shift+O".parse().unwrap();
        assert_eq!(binding, HotkeyBinding::DEFAULT_TOGGLE);
        assert_eq!(binding.to_string(), "Ctrl+Shift+O");
    }

    #[test]
    fn test_parse_is_case_and_space_insensitive() {
        let binding: HotkeyBinding = " shift + control + u ".parse().unwrap();
        assert_eq!(binding, HotkeyBinding::DEFAULT_EXIT);
    }

    #[test]
    fn test_parse_function_and_digit_keys() {
        let f: HotkeyBinding = "Alt+Win+F12".parse().unwrap();
        assert_eq!(f.key, Key::Function(12));
        assert!(f.modifiers.contains(Modifiers::ALT));
        assert!(f.modifiers.contains(Modifiers::WIN));
        assert!(!f.modifiers.contains(Modifiers::CTRL));
        assert_eq!(f.to_string(), "Alt+Win+F12");

        let d: HotkeyBinding = "Ctrl+7".parse().unwrap();
        assert_eq!(d.key, Key::Digit(7));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for input in ["", "O", "Ctrl+", "Ctrl+Hyper+O", "Ctrl+Ctrl+O", "Ctrl+F25", "Ctrl+F0", "Ctrl+Space"] {
            assert!(
                matches!(input.parse::<HotkeyBinding>(), Err(HotkeyError::InvalidBinding { .. })),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_virtual_key_codes() {
        assert_eq!(Key::Letter('O').virtual_key(), 0x4F);
        assert_eq!(Key::Letter('U').virtual_key(), 0x55);
        assert_eq!(Key::Digit(0).virtual_key(), 0x30);
        assert_eq!(Key::Function(1).virtual_key(), 0x70);
        assert_eq!(Key::Function(24).virtual_key(), 0x87);
    }

    #[test]
    fn test_bindings_must_differ() {
        let default = HotkeyBindings::default();
        assert_eq!(default.toggle, HotkeyBinding::DEFAULT_TOGGLE);
        assert_eq!(default.exit, HotkeyBinding::DEFAULT_EXIT);

        let err = HotkeyBindings::new(HotkeyBinding::DEFAULT_TOGGLE, HotkeyBinding::DEFAULT_TOGGLE)
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateHotkey {
                binding: "Ctrl+Shift+O".to_string()
            }
        );
    }
}
