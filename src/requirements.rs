use serde::{Deserialize, Serialize};

/// Contract requirements: one non-negative counter per axis.
///
/// Subtraction saturates at zero, so playing more of a card than the
/// contract asks for is never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requirements {
    #[serde(default)]
    pub reactors: u8,
    #[serde(default)]
    pub thrusters: u8,
    #[serde(default)]
    pub shields: u8,
    #[serde(default)]
    pub damage: u8,
    #[serde(default)]
    pub crew: u8,
}

impl Requirements {
    #[inline]
    pub const fn new(reactors: u8, thrusters: u8, shields: u8, damage: u8, crew: u8) -> Self {
        Self {
            reactors,
            thrusters,
            shields,
            damage,
            crew,
        }
    }

    #[inline]
    pub fn sub_reactors(&mut self, n: u8) {
        self.reactors = self.reactors.saturating_sub(n);
    }

    #[inline]
    pub fn sub_thrusters(&mut self, n: u8) {
        self.thrusters = self.thrusters.saturating_sub(n);
    }

    #[inline]
    pub fn sub_shields(&mut self, n: u8) {
        self.shields = self.shields.saturating_sub(n);
    }

    #[inline]
    pub fn sub_damage(&mut self, n: u8) {
        self.damage = self.damage.saturating_sub(n);
    }

    #[inline]
    pub fn sub_crew(&mut self, n: u8) {
        self.crew = self.crew.saturating_sub(n);
    }

    /// True when every axis has been fulfilled.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.reactors == 0
            && self.thrusters == 0
            && self.shields == 0
            && self.damage == 0
            && self.crew == 0
    }

    /// Renders the non-zero axes as `<letter>×<count>` joined by `", "`.
    /// With `color`, each letter is wrapped in its axis's ANSI color escape.
    pub fn to_string(&self, color: bool) -> String {
        let axes: [(char, &str, u8); 5] = [
            ('R', "96", self.reactors),
            ('T', "93", self.thrusters),
            ('S', "92", self.shields),
            ('D', "33", self.damage),
            ('C', "95", self.crew),
        ];

        let mut out = String::new();
        for (letter, code, count) in axes {
            if count == 0 {
                continue;
            }
            if !out.is_empty() {
                out.push_str(", ");
            }
            if color {
                out.push_str("\x1b[");
                out.push_str(code);
                out.push('m');
                out.push(letter);
                out.push_str("\x1b[0m");
            } else {
                out.push(letter);
            }
            out.push('\u{d7}');
            out.push_str(&count.to_string());
        }
        out
    }
}
