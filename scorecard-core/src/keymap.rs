//! Fixed key bindings shared by every front-end.

use crate::model::Rating;

/// Rating keys, positionally mapped to ratings 1..=5
pub const RATING_KEYS: [char; 5] = ['a', 's', 'd', 'f', 'g'];
pub const NEXT_KEY: char = 'j';
pub const PREV_KEY: char = 'k';

/// Platform-neutral key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Home,
    End,
    Enter,
    Esc,
    Backspace,
    Other,
}

/// What a key press means in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    FocusNext,
    FocusPrev,
    FocusFirst,
    FocusLast,
    NextUnrated,
    Rate(Rating),
    Copy,
    OpenLoadPrompt,
    ToggleHelp,
    Quit,
}

/// Rating bound to `c`, either by home-row position or by digit
pub fn rating_for_char(c: char) -> Option<Rating> {
    if let Some(pos) = RATING_KEYS.iter().position(|&k| k == c) {
        return Rating::new(pos as u8 + 1);
    }
    c.to_digit(10).and_then(|d| Rating::new(d as u8))
}

pub fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Char(c) => action_for_char(c),
        Key::Down => Some(Action::FocusNext),
        Key::Up => Some(Action::FocusPrev),
        Key::Home => Some(Action::FocusFirst),
        Key::End => Some(Action::FocusLast),
        _ => None,
    }
}

fn action_for_char(c: char) -> Option<Action> {
    if let Some(rating) = rating_for_char(c) {
        return Some(Action::Rate(rating));
    }
    match c {
        NEXT_KEY => Some(Action::FocusNext),
        PREV_KEY => Some(Action::FocusPrev),
        'n' => Some(Action::NextUnrated),
        'y' | 'c' => Some(Action::Copy),
        'o' => Some(Action::OpenLoadPrompt),
        '?' => Some(Action::ToggleHelp),
        'q' => Some(Action::Quit),
        _ => None,
    }
}

/// (keys, description) pairs for help overlays
pub fn bindings() -> &'static [(&'static str, &'static str)] {
    &[
        ("j / Down", "Focus next record"),
        ("k / Up", "Focus previous record"),
        ("Home / End", "Focus first / last record"),
        ("n", "Focus next unrated record"),
        ("a s d f g", "Rate focused record 1-5"),
        ("1-5", "Rate focused record 1-5"),
        ("y / c", "Copy ratings to clipboard"),
        ("o", "Load a corpus from a URL or path"),
        ("?", "Toggle help"),
        ("q", "Quit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_keys_map_positionally() {
        for (i, key) in RATING_KEYS.iter().enumerate() {
            assert_eq!(
                action_for_key(Key::Char(*key)),
                Some(Action::Rate(Rating::new(i as u8 + 1).unwrap()))
            );
        }
    }

    #[test]
    fn test_digits_rate_and_zero_does_not() {
        assert_eq!(rating_for_char('3').map(Rating::value), Some(3));
        assert_eq!(rating_for_char('0'), None);
        assert_eq!(rating_for_char('6'), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(action_for_key(Key::Char('j')), Some(Action::FocusNext));
        assert_eq!(action_for_key(Key::Char('k')), Some(Action::FocusPrev));
        assert_eq!(action_for_key(Key::Down), Some(Action::FocusNext));
        assert_eq!(action_for_key(Key::End), Some(Action::FocusLast));
        assert_eq!(action_for_key(Key::Char('z')), None);
    }
}
