use super::index::CarouselState;

/// Keys the carousel reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

impl NavKey {
    /// Parse a key name as hosts report it ("ArrowLeft", "End", ...)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(NavKey::ArrowLeft),
            "ArrowRight" => Some(NavKey::ArrowRight),
            "Home" => Some(NavKey::Home),
            "End" => Some(NavKey::End),
            _ => None,
        }
    }
}

/// Maps discrete keys onto index navigation
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardNavigator;

impl KeyboardNavigator {
    /// Apply `key` to `state`, returning whether the index moved
    pub fn apply(&self, key: NavKey, state: &mut CarouselState) -> bool {
        let before = state.active_index();
        match key {
            NavKey::ArrowLeft => state.previous(),
            NavKey::ArrowRight => state.next(),
            NavKey::Home => state.set_index(0),
            NavKey::End => state.set_index(state.item_count() as i64 - 1),
        }
        state.active_index() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_right_wraps_from_last() {
        let mut state = CarouselState::new(4);
        state.set_index(3);
        assert!(KeyboardNavigator.apply(NavKey::ArrowRight, &mut state));
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_arrow_left_wraps_from_first() {
        let mut state = CarouselState::new(4);
        assert!(KeyboardNavigator.apply(NavKey::ArrowLeft, &mut state));
        assert_eq!(state.active_index(), 3);
    }

    #[test]
    fn test_home_end() {
        let mut state = CarouselState::new(6);
        state.set_index(2);
        KeyboardNavigator.apply(NavKey::End, &mut state);
        assert_eq!(state.active_index(), 5);
        KeyboardNavigator.apply(NavKey::Home, &mut state);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_empty_deck_ignores_keys() {
        let mut state = CarouselState::new(0);
        for key in [NavKey::ArrowLeft, NavKey::ArrowRight, NavKey::Home, NavKey::End] {
            assert!(!KeyboardNavigator.apply(key, &mut state));
        }
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(NavKey::from_name("ArrowRight"), Some(NavKey::ArrowRight));
        assert_eq!(NavKey::from_name("Enter"), None);
    }
}
