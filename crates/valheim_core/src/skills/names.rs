//! Built-in skill name table.
//!
//! Ids follow the game's `Skills.SkillType` enum; these are stable across
//! every release the tracker has been pointed at. Ids not listed here still
//! decode, under a synthetic `Skill_{id}` name.

struct KnownSkill {
    id: i32,
    name: &'static str,
}

#[rustfmt::skip]
const KNOWN_SKILLS: &[KnownSkill] = &[
    // Weapons
    KnownSkill { id:   1, name: "Swords" },
    KnownSkill { id:   2, name: "Knives" },
    KnownSkill { id:   3, name: "Clubs" },
    KnownSkill { id:   4, name: "Polearms" },
    KnownSkill { id:   5, name: "Spears" },
    KnownSkill { id:   6, name: "Blocking" },
    KnownSkill { id:   7, name: "Axes" },
    KnownSkill { id:   8, name: "Bows" },
    KnownSkill { id:   9, name: "Elemental Magic" },
    KnownSkill { id:  10, name: "Blood Magic" },
    KnownSkill { id:  11, name: "Unarmed" },
    KnownSkill { id:  12, name: "Pickaxes" },
    KnownSkill { id:  13, name: "Wood Cutting" },
    KnownSkill { id:  14, name: "Crossbows" },

    // Movement
    KnownSkill { id: 100, name: "Jump" },
    KnownSkill { id: 101, name: "Sneak" },
    KnownSkill { id: 102, name: "Run" },
    KnownSkill { id: 103, name: "Swim" },

    // Utility
    KnownSkill { id: 104, name: "Fishing" },
    KnownSkill { id: 110, name: "Ride" },
];

/// Resolve a numeric skill id to a display name. Unknown ids get a
/// deterministic synthetic name so no decoded record is ever dropped.
pub fn skill_name(id: i32) -> String {
    KNOWN_SKILLS
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.name.to_string())
        .unwrap_or_else(|| format!("Skill_{id}"))
}
