//! Variant 3: an extensible factory driven by a registration map.
//!
//! The enum-based factories are closed: adding a type means editing the enum and the
//! `match`. Here the set of types is data. Callers register a creation callback under a
//! string key, and anything registered can be built by name, including types defined
//! outside this crate.

use super::{Boat, FactoryError, GameObject, Plane};
use std::collections::HashMap;
use std::fmt;
use std::io::BufRead;
use tracing::{debug, info, warn};

/// Signature of a creation callback.
pub type CreateObjectCallback = Box<dyn Fn() -> Box<dyn GameObject>>;

/// Builds game objects by registered name.
///
/// Keys are case-sensitive: `"Ant"` and `"ant"` are different registrations.
#[derive(Default)]
pub struct GameObjectFactory {
    creators: HashMap<String, CreateObjectCallback>,
}

impl GameObjectFactory {
    /// An empty factory. Nothing can be built until something is registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory with the built-in `"plane"` and `"boat"` creators registered.
    pub fn with_builtins() -> Self {
        let mut factory = Self::new();
        factory.register("plane", Plane::create);
        factory.register("boat", Boat::create);
        factory
    }

    /// Registers `callback` under `key`, replacing any previous registration.
    ///
    /// Returns `true` if a previous creator was replaced.
    pub fn register<F>(&mut self, key: impl Into<String>, callback: F) -> bool
    where
        F: Fn() -> Box<dyn GameObject> + 'static,
    {
        let key = key.into();
        let replaced = self.creators.insert(key.clone(), Box::new(callback)).is_some();
        if replaced {
            warn!(%key, "Replaced existing creator");
        } else {
            debug!(%key, "Registered creator");
        }
        replaced
    }

    /// Removes the creator registered under `key`. Returns `false` if there was none.
    pub fn unregister(&mut self, key: &str) -> bool {
        let removed = self.creators.remove(key).is_some();
        debug!(key, removed, "Unregister");
        removed
    }

    pub fn is_registered(&self, key: &str) -> bool {
        self.creators.contains_key(key)
    }

    /// Registered keys in sorted order.
    pub fn registered_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.creators.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Builds one object by key.
    ///
    /// An unregistered key yields [`FactoryError::Unregistered`] and no object.
    pub fn create(&self, key: &str) -> Result<Box<dyn GameObject>, FactoryError> {
        match self.creators.get(key) {
            Some(create) => {
                let object = create();
                info!(key, kind = object.kind(), "Created game object");
                Ok(object)
            }
            None => {
                warn!(key, "No creator registered");
                Err(FactoryError::Unregistered(key.to_string()))
            }
        }
    }

    /// Builds every object named in a spawn list, in order.
    ///
    /// # Format
    /// One key per line. Surrounding whitespace is trimmed; blank lines and lines
    /// starting with `#` are skipped.
    ///
    /// ```text
    /// # opening wave
    /// plane
    /// boat
    /// Ant
    /// ```
    ///
    /// # Errors
    /// Stops at the first key with no creator ([`FactoryError::UnknownInManifest`],
    /// carrying the 1-based line number) or the first read failure ([`FactoryError::Io`]).
    pub fn spawn_from_manifest<R: BufRead>(
        &self,
        reader: R,
    ) -> Result<Vec<Box<dyn GameObject>>, FactoryError> {
        let mut objects = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let key = line.trim();
            if key.is_empty() || key.starts_with('#') {
                continue;
            }
            let Some(create) = self.creators.get(key) else {
                warn!(line = index + 1, key, "Spawn list names an unregistered key");
                return Err(FactoryError::UnknownInManifest {
                    line: index + 1,
                    key: key.to_string(),
                });
            };
            objects.push(create());
        }
        info!(count = objects.len(), "Spawned from list");
        Ok(objects)
    }
}

impl fmt::Debug for GameObjectFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameObjectFactory")
            .field("registered", &self.registered_keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_builtins_are_registered() {
        let factory = GameObjectFactory::with_builtins();
        assert_eq!(factory.registered_keys(), vec!["boat", "plane"]);
        assert_eq!(factory.create("plane").unwrap().kind(), "plane");
        assert_eq!(factory.create("boat").unwrap().kind(), "boat");
    }

    #[test]
    fn test_unregistered_key_yields_no_object() {
        let factory = GameObjectFactory::with_builtins();
        let err = factory.create("submarine").unwrap_err();
        assert!(matches!(err, FactoryError::Unregistered(ref key) if key == "submarine"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let factory = GameObjectFactory::with_builtins();
        assert!(factory.create("Plane").is_err());
    }

    #[test]
    fn test_unregister_removes_creator() {
        let mut factory = GameObjectFactory::with_builtins();
        assert!(factory.unregister("boat"));
        assert!(!factory.unregister("boat"));
        assert!(!factory.is_registered("boat"));
        assert!(factory.create("boat").is_err());
    }

    #[test]
    fn test_register_reports_replacement() {
        let mut factory = GameObjectFactory::new();
        assert!(!factory.register("craft", Plane::create));
        assert!(factory.register("craft", Boat::create));
        assert_eq!(factory.create("craft").unwrap().kind(), "boat");
    }

    #[test]
    fn test_closures_can_capture_spawn_point() {
        let mut factory = GameObjectFactory::new();
        let (x, y) = (4, 7);
        factory.register("offshore", move || -> Box<dyn GameObject> { Box::new(Boat::new(x, y)) });
        assert_eq!(factory.create("offshore").unwrap().position(), (4, 7));
    }

    #[test]
    fn test_spawn_list_skips_comments_and_blanks() {
        let factory = GameObjectFactory::with_builtins();
        let list = "# wave one\nplane\n\n  boat  \nplane\n";
        let objects = factory.spawn_from_manifest(Cursor::new(list)).unwrap();
        let kinds: Vec<_> = objects.iter().map(|o| o.kind()).collect();
        assert_eq!(kinds, vec!["plane", "boat", "plane"]);
    }

    #[test]
    fn test_spawn_list_reports_unknown_line() {
        let factory = GameObjectFactory::with_builtins();
        let list = "plane\n# comment\nzeppelin\nboat\n";
        let err = factory.spawn_from_manifest(Cursor::new(list)).unwrap_err();
        assert!(matches!(
            err,
            FactoryError::UnknownInManifest { line: 3, ref key } if key == "zeppelin"
        ));
    }
}
