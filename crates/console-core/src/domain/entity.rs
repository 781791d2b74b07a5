//! Domain Layer - Core Entity Trait
//!
//! Every record the console manages carries an immutable string identifier.

/// Core trait for all domain entities
pub trait Entity: Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Find an entity by identifier
pub fn find_by_id<'a, T: Entity>(entities: &'a [T], id: &str) -> Option<&'a T> {
    entities.iter().find(|e| e.id() == id)
}

/// Replace the entity sharing `updated`'s identifier, keeping collection order.
///
/// Returns false when no entity matched.
pub fn replace_by_id<T: Entity>(entities: &mut [T], updated: T) -> bool {
    match entities.iter_mut().find(|e| e.id() == updated.id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}
