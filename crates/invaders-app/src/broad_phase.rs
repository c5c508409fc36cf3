//! Broad-phase contact detection over the headless scene.
//!
//! Every tick the scene nodes are tested pairwise as axis-aligned boxes.
//! Only pairs whose collision filters agree are considered, and a pair is
//! reported once when contact begins. Pairs that separate, or lose a node,
//! are forgotten so a later contact is reported again.

use std::collections::BTreeSet;

use glam::Vec3;

use invaders_core::constants::*;
use invaders_core::enums::VisualKind;
use invaders_core::types::EntityId;
use invaders_sim::scene::{HeadlessScene, SceneNode};

/// Half extents of the box used for a visual.
pub fn half_extents(visual: VisualKind) -> Vec3 {
    match visual {
        VisualKind::Invader { .. } => Vec3::splat(INVADER_HALF_EXTENT),
        VisualKind::Bullet => Vec3::splat(BULLET_HALF_EXTENT),
        VisualKind::LossTrigger | VisualKind::BulletSponge => {
            Vec3::new(ZONE_HALF_WIDTH, ZONE_HALF_THICKNESS, ZONE_HALF_DEPTH)
        }
    }
}

/// Whether two nodes' boxes intersect.
pub fn overlaps(a: &SceneNode, b: &SceneNode) -> bool {
    let reach = half_extents(a.visual) + half_extents(b.visual);
    let gap = (a.position - b.position).abs();
    gap.cmplt(reach).all()
}

/// Tracks touching pairs between ticks.
#[derive(Debug, Default)]
pub struct BroadPhase {
    touching: BTreeSet<(EntityId, EntityId)>,
}

impl BroadPhase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the scene and return the pairs that started touching since the last scan.
    pub fn update(&mut self, scene: &HeadlessScene) -> Vec<(EntityId, EntityId)> {
        let nodes: Vec<(EntityId, &SceneNode)> =
            scene.nodes().filter(|(_, node)| node.filter.is_some()).collect();

        let mut current = BTreeSet::new();
        for (i, (id_a, a)) in nodes.iter().enumerate() {
            for (id_b, b) in &nodes[i + 1..] {
                let (Some(fa), Some(fb)) = (a.filter, b.filter) else {
                    continue;
                };
                if fa.interacts_with(&fb) && overlaps(a, b) {
                    current.insert(ordered(*id_a, *id_b));
                }
            }
        }

        let began: Vec<(EntityId, EntityId)> =
            current.difference(&self.touching).copied().collect();
        self.touching = current;
        began
    }

    /// Number of pairs currently in contact.
    pub fn touching(&self) -> usize {
        self.touching.len()
    }
}

fn ordered(a: EntityId, b: EntityId) -> (EntityId, EntityId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invaders_core::enums::EntityRole;
    use invaders_core::groups::CollisionFilter;
    use invaders_sim::scene::SceneGraph;

    fn spawn(scene: &mut HeadlessScene, role: EntityRole, visual: VisualKind, at: Vec3) -> EntityId {
        let id = scene.spawn_entity(at, visual).unwrap();
        scene.set_collision_filter(id, CollisionFilter::for_role(role));
        id
    }

    #[test]
    fn test_bullet_inside_invader_reported_once() {
        let mut scene = HeadlessScene::new();
        let invader = spawn(
            &mut scene,
            EntityRole::Invader,
            VisualKind::Invader { glyph: 1 },
            Vec3::new(0.0, 0.5, 0.0),
        );
        let bullet = spawn(
            &mut scene,
            EntityRole::Bullet,
            VisualKind::Bullet,
            Vec3::new(0.02, 0.48, 0.0),
        );

        let mut broad = BroadPhase::new();
        assert_eq!(broad.update(&scene), vec![ordered(invader, bullet)]);
        assert!(broad.update(&scene).is_empty());
        assert_eq!(broad.touching(), 1);
    }

    #[test]
    fn test_filtered_pairs_ignored() {
        let mut scene = HeadlessScene::new();
        spawn(
            &mut scene,
            EntityRole::Invader,
            VisualKind::Invader { glyph: 1 },
            Vec3::ZERO,
        );
        spawn(
            &mut scene,
            EntityRole::Invader,
            VisualKind::Invader { glyph: 2 },
            Vec3::new(0.01, 0.0, 0.0),
        );
        // Bullets pass through the loss trigger.
        spawn(&mut scene, EntityRole::Bullet, VisualKind::Bullet, Vec3::new(1.0, LOSS_TRIGGER_HEIGHT, 0.0));
        spawn(
            &mut scene,
            EntityRole::LossTrigger,
            VisualKind::LossTrigger,
            Vec3::new(0.0, LOSS_TRIGGER_HEIGHT, 0.0),
        );

        assert!(BroadPhase::new().update(&scene).is_empty());
    }

    #[test]
    fn test_unfiltered_nodes_ignored() {
        let mut scene = HeadlessScene::new();
        scene.spawn_entity(Vec3::ZERO, VisualKind::Bullet).unwrap();
        spawn(
            &mut scene,
            EntityRole::Invader,
            VisualKind::Invader { glyph: 1 },
            Vec3::ZERO,
        );
        assert!(BroadPhase::new().update(&scene).is_empty());
    }

    #[test]
    fn test_separated_pair_reported_again() {
        let mut scene = HeadlessScene::new();
        let sponge = spawn(
            &mut scene,
            EntityRole::BulletSponge,
            VisualKind::BulletSponge,
            Vec3::new(0.0, BULLET_SPONGE_HEIGHT, 0.0),
        );
        let bullet = spawn(
            &mut scene,
            EntityRole::Bullet,
            VisualKind::Bullet,
            Vec3::new(0.0, BULLET_SPONGE_HEIGHT, 0.0),
        );
        let mut broad = BroadPhase::new();
        assert_eq!(broad.update(&scene).len(), 1);

        scene.set_pose(bullet, Vec3::new(0.0, 0.0, 0.0), glam::Quat::IDENTITY);
        assert!(broad.update(&scene).is_empty());
        assert_eq!(broad.touching(), 0);

        scene.set_pose(bullet, Vec3::new(0.0, BULLET_SPONGE_HEIGHT, 0.0), glam::Quat::IDENTITY);
        assert_eq!(broad.update(&scene), vec![ordered(sponge, bullet)]);
    }

    #[test]
    fn test_detached_node_drops_contact() {
        let mut scene = HeadlessScene::new();
        let a = spawn(
            &mut scene,
            EntityRole::Invader,
            VisualKind::Invader { glyph: 1 },
            Vec3::ZERO,
        );
        spawn(&mut scene, EntityRole::Bullet, VisualKind::Bullet, Vec3::ZERO);
        let mut broad = BroadPhase::new();
        broad.update(&scene);

        scene.detach_entity(a);
        broad.update(&scene);
        assert_eq!(broad.touching(), 0);
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let node = |position, visual| SceneNode {
            position,
            rotation: glam::Quat::IDENTITY,
            visual,
            mesh: None,
            filter: None,
        };
        let a = node(Vec3::ZERO, VisualKind::Bullet);
        let b = node(Vec3::new(2.0 * BULLET_HALF_EXTENT + 1e-4, 0.0, 0.0), VisualKind::Bullet);
        assert!(!overlaps(&a, &b));
        let c = node(Vec3::new(BULLET_HALF_EXTENT, 0.0, 0.0), VisualKind::Bullet);
        assert!(overlaps(&a, &c));
    }
}
