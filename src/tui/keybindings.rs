//! Keybinding definitions
//!
//! Defines the keyboard shortcuts shown in the help dialog and the footer.
//! Text fields swallow plain characters, so global keys use modifiers or
//! function keys.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::models::Step;

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active on the details step
    Details,
    /// Active on the payment step
    Payment,
    /// Active on the confirm step
    Confirm,
    /// Active in dialogs
    Dialog,
}

impl From<Step> for KeyContext {
    fn from(step: Step) -> Self {
        match step {
            Step::Details => Self::Details,
            Step::Payment => Self::Payment,
            Step::Confirm => Self::Confirm,
        }
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        key: KeyCode::Char('q'),
        modifiers: KeyModifiers::CONTROL,
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::F(1),
        modifiers: KeyModifiers::NONE,
        description: "Help",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::F(2),
        modifiers: KeyModifiers::NONE,
        description: "Terms & Conditions",
        context: KeyContext::Global,
    },
    // Details
    Keybinding {
        key: KeyCode::Tab,
        modifiers: KeyModifiers::NONE,
        description: "Next field",
        context: KeyContext::Details,
    },
    Keybinding {
        key: KeyCode::BackTab,
        modifiers: KeyModifiers::SHIFT,
        description: "Previous field",
        context: KeyContext::Details,
    },
    Keybinding {
        key: KeyCode::Left,
        modifiers: KeyModifiers::NONE,
        description: "Change country code or currency",
        context: KeyContext::Details,
    },
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Continue to payment (apply code on promo field)",
        context: KeyContext::Details,
    },
    // Payment
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Pay via UPI",
        context: KeyContext::Payment,
    },
    Keybinding {
        key: KeyCode::Left,
        modifiers: KeyModifiers::NONE,
        description: "Change display currency",
        context: KeyContext::Payment,
    },
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Go back",
        context: KeyContext::Payment,
    },
    // Confirm
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "I have paid / Submit / Done",
        context: KeyContext::Confirm,
    },
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Go back",
        context: KeyContext::Confirm,
    },
    // Dialog
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Close dialog",
        context: KeyContext::Dialog,
    },
    Keybinding {
        key: KeyCode::Up,
        modifiers: KeyModifiers::NONE,
        description: "Scroll terms",
        context: KeyContext::Dialog,
    },
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context || kb.context == KeyContext::Global)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift".to_string());
    }

    let key_str = match kb.key {
        KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "↑/↓".to_string(),
        KeyCode::Left => "←/→".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => format!("{:?}", kb.key),
    };

    parts.push(key_str);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_includes_globals() {
        let bindings = get_keybindings(KeyContext::Payment);
        assert!(bindings.iter().any(|kb| kb.description == "Quit"));
        assert!(bindings.iter().any(|kb| kb.description == "Pay via UPI"));
        assert!(!bindings.iter().any(|kb| kb.context == KeyContext::Details));
    }

    #[test]
    fn test_format_keybinding() {
        let quit = &KEYBINDINGS[0];
        assert_eq!(format_keybinding(quit), "Ctrl+Q");
        let back_tab = KEYBINDINGS
            .iter()
            .find(|kb| kb.key == KeyCode::BackTab)
            .unwrap();
        assert_eq!(format_keybinding(back_tab), "Shift+Tab");
        assert_eq!(KeyContext::from(Step::Confirm), KeyContext::Confirm);
    }
}
