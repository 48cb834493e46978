//! Edge detection state machine (pure logic)

/// Key action produced by a pin transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Release,
}

/// Two-state edge detector over successive pin samples.
///
/// The switch is wired active-low: a sampled level of 0 means held.
/// Starts in Released, so the first action it can ever produce is a
/// press. A sample matching the current state produces nothing, which
/// keeps emission at exactly one action per physical transition even
/// while the switch is held.
pub struct EdgeDetector {
    pressed: bool,
}

impl EdgeDetector {
    pub fn new() -> Self {
        EdgeDetector { pressed: false }
    }

    /// Feed one sampled level; returns the action if it was a transition.
    pub fn sample(&mut self, level: bool) -> Option<KeyAction> {
        let active = !level; // active-low
        match (self.pressed, active) {
            (false, true) => {
                self.pressed = true;
                Some(KeyAction::Press)
            }
            (true, false) => {
                self.pressed = false;
                Some(KeyAction::Release)
            }
            _ => None,
        }
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        EdgeDetector::new()
    }
}
