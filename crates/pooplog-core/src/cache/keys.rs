//! Cache key composition.
//!
//! All callers of the shared cache coordinate through key naming alone, so a
//! key must combine the resource type with the owning user's id - two users'
//! dog lists must never collide.

/// Compose a cache key from a resource name and its owner.
pub fn scoped(resource: &str, owner: &str) -> String {
    format!("{}_{}", resource, owner)
}

/// Key under which a user's dog profiles are cached.
pub fn dogs_key(user_id: &str) -> String {
    scoped("dogs", user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_combines_resource_and_owner() {
        assert_eq!(scoped("poops", "user_abc"), "poops_user_abc");
    }

    #[test]
    fn test_dogs_key_format() {
        assert_eq!(dogs_key("u1"), "dogs_u1");
    }

    #[test]
    fn test_keys_differ_per_user() {
        assert_ne!(dogs_key("u1"), dogs_key("u2"));
    }
}
