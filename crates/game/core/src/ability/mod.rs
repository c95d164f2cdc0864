//! Player abilities run from the states each frame.
//!
//! States decide *which* list runs ([`AbilitySlot`]); the context decides
//! *whether* each ability fires: its trigger must validate and the stamina
//! pool must cover its cost, which is consumed after use.
mod wall_jump;

pub use wall_jump::WallJump;

use crate::config::PlayerConfig;
use crate::env::CollaboratorError;
use crate::state::StateContext;

/// Which list of abilities a state runs.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbilitySlot {
    Floor,
    Air,
    Wall,
}

/// A triggered player ability.
pub trait Ability {
    fn name(&self) -> &'static str;

    /// Stamina consumed each time the ability is used.
    fn stamina_cost(&self) -> u32;

    /// Returns true if the ability should fire this frame.
    fn validate_trigger(&self, ctx: &StateContext<'_, '_>) -> Result<bool, CollaboratorError>;

    fn use_ability(&self, ctx: &mut StateContext<'_, '_>) -> Result<(), CollaboratorError>;
}

/// Ordered ability lists, one per [`AbilitySlot`].
#[derive(Default)]
pub struct Abilities {
    floor: Vec<Box<dyn Ability>>,
    air: Vec<Box<dyn Ability>>,
    wall: Vec<Box<dyn Ability>>,
}

impl Abilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock ability set: wall jump while clinging.
    pub fn standard(config: &PlayerConfig) -> Self {
        Self::new().with(AbilitySlot::Wall, WallJump::new(config.wall_jump.clone()))
    }

    pub fn with(mut self, slot: AbilitySlot, ability: impl Ability + 'static) -> Self {
        self.push(slot, ability);
        self
    }

    pub fn push(&mut self, slot: AbilitySlot, ability: impl Ability + 'static) {
        self.slot_mut(slot).push(Box::new(ability));
    }

    pub fn clear(&mut self, slot: AbilitySlot) {
        self.slot_mut(slot).clear();
    }

    pub fn slot(&self, slot: AbilitySlot) -> &[Box<dyn Ability>] {
        match slot {
            AbilitySlot::Floor => &self.floor,
            AbilitySlot::Air => &self.air,
            AbilitySlot::Wall => &self.wall,
        }
    }

    fn slot_mut(&mut self, slot: AbilitySlot) -> &mut Vec<Box<dyn Ability>> {
        match slot {
            AbilitySlot::Floor => &mut self.floor,
            AbilitySlot::Air => &mut self.air,
            AbilitySlot::Wall => &mut self.wall,
        }
    }
}

impl core::fmt::Debug for Abilities {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let names = |list: &[Box<dyn Ability>]| list.iter().map(|a| a.name()).collect::<Vec<_>>();
        f.debug_struct("Abilities")
            .field("floor", &names(&self.floor))
            .field("air", &names(&self.air))
            .field("wall", &names(&self.wall))
            .finish()
    }
}
