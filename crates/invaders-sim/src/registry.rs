//! Entity/component registry.
//!
//! Wraps the hecs world with an index from scene-issued [`EntityId`]s to ECS
//! entities. Every registered entity carries its `EntityId`, `EntityRole` and
//! `Position`. Detaching removes the components and the scene node together,
//! so the registry is the single answer to "is this entity still in the
//! round".

use std::collections::HashMap;

use glam::Vec3;
use hecs::{DynamicBundle, Entity, EntityBuilder, World};

use invaders_core::components::InvaderComponent;
use invaders_core::enums::EntityRole;
use invaders_core::types::{EntityId, Position};

use crate::scene::SceneGraph;

#[derive(Default)]
pub struct Registry {
    world: World,
    index: HashMap<EntityId, Entity>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scene entity with its role, position and extra components.
    pub fn attach(
        &mut self,
        id: EntityId,
        role: EntityRole,
        position: Vec3,
        components: impl DynamicBundle,
    ) -> Entity {
        debug_assert!(!self.index.contains_key(&id), "entity {id} attached twice");

        let mut builder = EntityBuilder::new();
        builder.add(id).add(role).add(Position(position));
        builder.add_bundle(components);
        let entity = self.world.spawn(builder.build());
        self.index.insert(id, entity);
        entity
    }

    /// Drop an entity's components and detach it from the scene.
    ///
    /// Returns false when the entity was already gone, in which case the
    /// scene is not touched.
    pub fn detach<S: SceneGraph + ?Sized>(&mut self, scene: &mut S, id: EntityId) -> bool {
        let Some(entity) = self.index.remove(&id) else {
            return false;
        };
        let despawned = self.world.despawn(entity);
        debug_assert!(despawned.is_ok(), "index held stale entity for {id}");
        scene.detach_entity(id);
        true
    }

    /// Whether the entity is still part of the round.
    pub fn is_live(&self, id: EntityId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn role(&self, id: EntityId) -> Option<EntityRole> {
        let entity = *self.index.get(&id)?;
        self.world.get::<&EntityRole>(entity).ok().map(|role| *role)
    }

    pub fn position(&self, id: EntityId) -> Option<Vec3> {
        let entity = *self.index.get(&id)?;
        self.world.get::<&Position>(entity).ok().map(|pos| pos.0)
    }

    pub fn invader(&self, id: EntityId) -> Option<InvaderComponent> {
        let entity = *self.index.get(&id)?;
        self.world.get::<&InvaderComponent>(entity).ok().map(|inv| *inv)
    }

    /// Ids of every entity carrying an invader component. Unordered.
    pub fn invader_ids(&self) -> Vec<EntityId> {
        let mut query = self.world.query::<(&EntityId, &InvaderComponent)>();
        query.iter().map(|(_entity, (id, _))| *id).collect()
    }

    /// Ids of every entity with the given role. Unordered.
    pub fn ids_with_role(&self, role: EntityRole) -> Vec<EntityId> {
        let mut query = self.world.query::<(&EntityId, &EntityRole)>();
        query
            .iter()
            .filter(|(_entity, (_, r))| **r == role)
            .map(|(_entity, (id, _))| *id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access for systems. Systems must not despawn through this;
    /// removal goes through [`Registry::detach`].
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
