//! Scene-graph collaborator.
//!
//! The engine never owns rendering resources. It asks the scene to create,
//! move, re-skin and detach entities, and receives opaque [`EntityId`]s back.
//! [`HeadlessScene`] is an in-memory implementation used by the headless
//! runner and by tests.

use std::collections::BTreeMap;

use glam::{Quat, Vec3};

use invaders_core::enums::{MeshKind, VisualKind};
use invaders_core::groups::CollisionFilter;
use invaders_core::types::EntityId;

use crate::error::SceneError;

/// Operations the engine needs from the scene graph.
pub trait SceneGraph {
    /// Create an entity at `position` and return its id.
    fn spawn_entity(&mut self, position: Vec3, visual: VisualKind) -> Result<EntityId, SceneError>;

    /// Remove an entity from the scene. Unknown ids are ignored.
    fn detach_entity(&mut self, id: EntityId);

    /// Move an entity.
    fn set_pose(&mut self, id: EntityId, position: Vec3, rotation: Quat);

    /// Swap an entity's mesh/material.
    fn set_visual(&mut self, id: EntityId, mesh: MeshKind);

    /// Stamp the group/mask pair the physics layer filters collisions with.
    fn set_collision_filter(&mut self, id: EntityId, filter: CollisionFilter);
}

/// State of one entity in a [`HeadlessScene`].
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub position: Vec3,
    pub rotation: Quat,
    pub visual: VisualKind,
    pub mesh: Option<MeshKind>,
    pub filter: Option<CollisionFilter>,
}

/// In-memory scene graph. Iteration is ordered by id for determinism.
#[derive(Debug, Default)]
pub struct HeadlessScene {
    nodes: BTreeMap<EntityId, SceneNode>,
    next_id: u64,
    capacity: Option<usize>,
    refuse: Option<std::mem::Discriminant<VisualKind>>,
    detached_total: usize,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scene that refuses to hold more than `capacity` entities at once.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// A scene that refuses every entity with the same kind of visual as `kind`.
    pub fn refusing(kind: VisualKind) -> Self {
        Self {
            refuse: Some(std::mem::discriminant(&kind)),
            ..Self::default()
        }
    }

    pub fn node(&self, id: EntityId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (EntityId, &SceneNode)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of detach requests that removed a node.
    pub fn detached_total(&self) -> usize {
        self.detached_total
    }
}

impl SceneGraph for HeadlessScene {
    fn spawn_entity(&mut self, position: Vec3, visual: VisualKind) -> Result<EntityId, SceneError> {
        if self.refuse == Some(std::mem::discriminant(&visual)) {
            return Err(SceneError::Refused { kind: visual });
        }
        if let Some(capacity) = self.capacity {
            if self.nodes.len() >= capacity {
                return Err(SceneError::CapacityExhausted { capacity });
            }
        }

        self.next_id += 1;
        let id = EntityId(self.next_id);
        self.nodes.insert(
            id,
            SceneNode {
                position,
                rotation: Quat::IDENTITY,
                visual,
                mesh: None,
                filter: None,
            },
        );
        Ok(id)
    }

    fn detach_entity(&mut self, id: EntityId) {
        if self.nodes.remove(&id).is_some() {
            self.detached_total += 1;
        }
    }

    fn set_pose(&mut self, id: EntityId, position: Vec3, rotation: Quat) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.position = position;
            node.rotation = rotation;
        }
    }

    fn set_visual(&mut self, id: EntityId, mesh: MeshKind) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.mesh = Some(mesh);
        }
    }

    fn set_collision_filter(&mut self, id: EntityId, filter: CollisionFilter) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.filter = Some(filter);
        }
    }
}
