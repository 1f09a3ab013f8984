// Held-state of the key that unlocks wheel zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierKeyTracker {
    key: String,
    held: bool,
}

impl ModifierKeyTracker {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            held: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Returns true when the flag flipped. Auto-repeat keydowns are no-ops.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set(key, true)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.set(key, false)
    }

    fn set(&mut self, key: &str, held: bool) -> bool {
        if key != self.key || self.held == held {
            return false;
        }
        self.held = held;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_press_and_release() {
        let mut t = ModifierKeyTracker::new("Control");
        assert!(!t.is_held());
        assert!(t.key_down("Control"));
        assert!(t.is_held());
        assert!(t.key_up("Control"));
        assert!(!t.is_held());
    }

    #[test]
    fn repeated_keydown_is_idempotent() {
        let mut t = ModifierKeyTracker::new("Control");
        assert!(t.key_down("Control"));
        assert!(!t.key_down("Control"));
        assert!(!t.key_down("Control"));
        assert!(t.is_held());
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut t = ModifierKeyTracker::new("Control");
        t.key_down("Control");
        assert!(!t.key_up("Shift"));
        assert!(!t.key_down("a"));
        assert!(t.is_held());
        // key identity is an exact string match
        assert!(!t.key_up("control"));
        assert!(t.is_held());
    }

    #[test]
    fn flag_follows_last_event_for_the_key() {
        let events = [
            (true, "Control"),
            (true, "Alt"),
            (false, "Control"),
            (true, "Control"),
            (false, "Alt"),
            (true, "Control"),
            (false, "Shift"),
        ];
        let mut t = ModifierKeyTracker::new("Control");
        let mut expected = false;
        for (down, key) in events {
            if down {
                t.key_down(key);
            } else {
                t.key_up(key);
            }
            if key == "Control" {
                expected = down;
            }
            assert_eq!(t.is_held(), expected);
        }
    }

    #[test]
    fn release_without_press_is_noop() {
        let mut t = ModifierKeyTracker::new("Control");
        assert!(!t.key_up("Control"));
        assert!(!t.is_held());
    }
}
