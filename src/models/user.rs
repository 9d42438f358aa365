use serde::{Deserialize, Serialize};

use crate::models::Skill;

/// A user's training intent: what they are working toward and how long a
/// session can last.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub skill_focus: String, // e.g. "Handstand"
    pub available_time: u32, // minutes per session (15, 30, 45)
}

impl User {
    pub fn new(id: impl Into<String>, skill_focus: impl Into<String>, available_time: u32) -> Self {
        Self {
            id: id.into(),
            skill_focus: skill_focus.into(),
            available_time,
        }
    }

    /// Interpret `skill_focus` as one of the known skills, if it names one.
    pub fn focus_skill(&self) -> Option<Skill> {
        self.skill_focus.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_fields_read_back() {
        let user = User::new("u1", "Handstand", 30);
        assert_eq!(user.id, "u1");
        assert_eq!(user.skill_focus, "Handstand");
        assert_eq!(user.available_time, 30);
    }

    #[test]
    fn test_focus_skill_parsing() {
        assert_eq!(User::new("u1", "Handstand", 15).focus_skill(), Some(Skill::Handstand));
        assert_eq!(User::new("u1", "front lever", 15).focus_skill(), Some(Skill::FrontLever));
        assert_eq!(User::new("u1", "Juggling", 15).focus_skill(), None);
    }

    #[test]
    fn test_equality_depends_on_every_field() {
        let base = User::new("u1", "Planche", 45);
        assert_eq!(base, User::new("u1", "Planche", 45));
        assert_ne!(base, User::new("u2", "Planche", 45));
        assert_ne!(base, User::new("u1", "L-Sit", 45));
        assert_ne!(base, User::new("u1", "Planche", 30));
    }
}
