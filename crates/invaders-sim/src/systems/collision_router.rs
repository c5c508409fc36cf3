//! Collision event router.
//!
//! Turns collision-began notifications from the broad phase into round
//! changes. Participant order does not matter. Every handler is a no-op when
//! a participant has already been detached, which is what keeps a duplicate
//! bullet/invader notification from decrementing the counter twice.

use invaders_core::enums::{EntityRole, GamePhase};
use invaders_core::events::GameEvent;
use invaders_core::types::EntityId;

use crate::presenter::Presenter;
use crate::registry::Registry;
use crate::round::RoundState;
use crate::scene::SceneGraph;
use crate::systems::invader_movement;

/// What a collision-began notification means for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    InvaderHit { bullet: EntityId, invader: EntityId },
    BulletReclaimed { bullet: EntityId },
    LossTriggered { invader: EntityId },
    /// A participant is no longer registered.
    Stale,
    /// The roles never interact; the broad phase ignored the filters.
    Unrelated,
}

/// Classify a pair by the roles of its live participants.
pub fn classify(registry: &Registry, a: EntityId, b: EntityId) -> CollisionKind {
    let (Some(role_a), Some(role_b)) = (registry.role(a), registry.role(b)) else {
        return CollisionKind::Stale;
    };

    use EntityRole::*;
    match (role_a, role_b) {
        (Bullet, Invader) => CollisionKind::InvaderHit {
            bullet: a,
            invader: b,
        },
        (Invader, Bullet) => CollisionKind::InvaderHit {
            bullet: b,
            invader: a,
        },
        (Bullet, BulletSponge) => CollisionKind::BulletReclaimed { bullet: a },
        (BulletSponge, Bullet) => CollisionKind::BulletReclaimed { bullet: b },
        (Invader, LossTrigger) => CollisionKind::LossTriggered { invader: a },
        (LossTrigger, Invader) => CollisionKind::LossTriggered { invader: b },
        _ => CollisionKind::Unrelated,
    }
}

/// Route one collision-began notification. Returns how it was classified.
pub fn run<S, P>(
    registry: &mut Registry,
    scene: &mut S,
    presenter: &mut P,
    round: &mut RoundState,
    events: &mut Vec<GameEvent>,
    a: EntityId,
    b: EntityId,
) -> CollisionKind
where
    S: SceneGraph + ?Sized,
    P: Presenter + ?Sized,
{
    let kind = classify(registry, a, b);

    match kind {
        CollisionKind::InvaderHit { bullet, invader } => {
            registry.detach(scene, invader);
            registry.detach(scene, bullet);
            round.live_invader_count = round.live_invader_count.saturating_sub(1);
            round.stats.invaders_destroyed += 1;

            log::debug!(
                "Bullet {bullet} hit invader {invader}, {} remaining",
                round.live_invader_count
            );
            events.push(GameEvent::InvaderHit {
                bullet,
                invader,
                remaining: round.live_invader_count,
            });
            presenter.on_hit(invader, round.live_invader_count);
        }
        CollisionKind::BulletReclaimed { bullet } => {
            registry.detach(scene, bullet);
            round.stats.bullets_reclaimed += 1;
            events.push(GameEvent::BulletReclaimed { bullet });
        }
        CollisionKind::LossTriggered { invader } => {
            handle_loss(registry, scene, presenter, round, events, invader);
        }
        CollisionKind::Stale => {
            log::debug!("Ignoring collision {a}/{b}: participant already detached");
        }
        CollisionKind::Unrelated => {
            log::warn!("Ignoring collision {a}/{b}: roles do not interact");
        }
    }

    kind
}

/// First loss of the round freezes every invader and signals the presenter.
fn handle_loss<S, P>(
    registry: &mut Registry,
    scene: &mut S,
    presenter: &mut P,
    round: &mut RoundState,
    events: &mut Vec<GameEvent>,
    invader: EntityId,
) where
    S: SceneGraph + ?Sized,
    P: Presenter + ?Sized,
{
    if round.lost || !matches!(round.phase, GamePhase::Running | GamePhase::Paused) {
        log::debug!("Ignoring loss trigger from {invader} in phase {:?}", round.phase);
        return;
    }

    round.lost = true;
    round.phase = GamePhase::Lost;
    invader_movement::set_all_moving(registry, scene, false);

    log::info!("Invader {invader} reached the loss trigger");
    events.push(GameEvent::RoundLost { invader });
    presenter.on_loss();
    presenter.on_status("GAME OVER");
}
