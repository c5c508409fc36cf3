//! Collision groups and interaction masks.
//!
//! Every entity is stamped once at spawn with a group bit and a mask of the
//! groups it may raise collision-began events against. The external broad
//! phase only reports a pair when each side's group is in the other's mask,
//! which is how bullets ignore bullets, invaders ignore invaders and the
//! loss trigger ignores bullets.

use serde::{Deserialize, Serialize};

use crate::enums::EntityRole;

/// Group bits, one per entity role.
pub struct CollisionGroups;

impl CollisionGroups {
    pub const NONE: u32 = 0;
    pub const BULLET: u32 = 1 << 0;
    pub const INVADER: u32 = 1 << 1;
    pub const LOSS_TRIGGER: u32 = 1 << 2;
    pub const BULLET_SPONGE: u32 = 1 << 3;
}

/// Group/mask pair stamped on an entity at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollisionFilter {
    /// The single group this entity belongs to.
    pub group: u32,
    /// Groups this entity may interact with.
    pub mask: u32,
}

impl CollisionFilter {
    /// The filter for an entity role.
    pub fn for_role(role: EntityRole) -> Self {
        match role {
            EntityRole::Bullet => Self {
                group: CollisionGroups::BULLET,
                mask: CollisionGroups::INVADER | CollisionGroups::BULLET_SPONGE,
            },
            EntityRole::Invader => Self {
                group: CollisionGroups::INVADER,
                mask: CollisionGroups::BULLET | CollisionGroups::LOSS_TRIGGER,
            },
            EntityRole::LossTrigger => Self {
                group: CollisionGroups::LOSS_TRIGGER,
                mask: CollisionGroups::INVADER,
            },
            EntityRole::BulletSponge => Self {
                group: CollisionGroups::BULLET_SPONGE,
                mask: CollisionGroups::BULLET,
            },
        }
    }

    /// Whether two filtered entities may raise a collision-began event.
    ///
    /// Both directions must agree: A's group in B's mask and B's group in A's mask.
    pub fn interacts_with(&self, other: &CollisionFilter) -> bool {
        (self.group & other.mask) != 0 && (other.group & self.mask) != 0
    }
}

/// Whether entities of two roles may ever collide.
pub fn should_collide(a: EntityRole, b: EntityRole) -> bool {
    CollisionFilter::for_role(a).interacts_with(&CollisionFilter::for_role(b))
}
