//! # Startup Phase
//!
//! Asks every feature module, once and in order, to register its commands.

use std::sync::Arc;

use crate::application::registry::CommandRegistry;
use crate::strings::logs;

/// A unit of bot behaviour that owns zero or more commands.
pub trait FeatureModule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Called exactly once, before any message is dispatched.
    fn startup(&self, registry: &mut CommandRegistry);
}

/// Runs the registration phase and freezes the result.
pub fn register_all(modules: &[Arc<dyn FeatureModule>]) -> Arc<CommandRegistry> {
    let mut registry = CommandRegistry::new();

    for module in modules {
        tracing::debug!("{}", logs::module_startup(module.name()));
        module.startup(&mut registry);
    }

    for def in registry.definitions() {
        tracing::debug!(
            "{}",
            logs::registered_command(
                &def.trigger,
                &format!("{:?}", def.visibility),
                def.precondition.is_some()
            )
        );
    }
    if registry.is_empty() {
        tracing::warn!("{}", logs::EMPTY_REGISTRY);
    }

    tracing::info!("{}", logs::registration_complete(registry.len()));
    Arc::new(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Scope, Visibility};
    use futures::FutureExt;
    use std::sync::Mutex;

    struct Fixed {
        name: &'static str,
        triggers: Vec<(&'static str, Visibility)>,
        calls: Mutex<usize>,
    }

    impl Fixed {
        fn new(name: &'static str, triggers: Vec<(&'static str, Visibility)>) -> Arc<Self> {
            Arc::new(Self {
                name,
                triggers,
                calls: Mutex::new(0),
            })
        }
    }

    impl FeatureModule for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }

        fn startup(&self, registry: &mut CommandRegistry) {
            *self.calls.lock().unwrap() += 1;
            let name = self.name;
            for (trigger, visibility) in &self.triggers {
                registry.register(
                    trigger,
                    move |_ctx, _args| async move { Ok(Some(name.to_string())) }.boxed(),
                    *visibility,
                    None,
                );
            }
        }
    }

    #[test]
    fn test_each_module_registers_once_in_order() {
        let first = Fixed::new("first", vec![("ping", Visibility::All), ("a", Visibility::Public)]);
        let second = Fixed::new("second", vec![("ping", Visibility::Private), ("b", Visibility::Private)]);
        let empty = Fixed::new("empty", vec![]);

        let mut modules: Vec<Arc<dyn FeatureModule>> = Vec::new();
        modules.push(first.clone());
        modules.push(second.clone());
        modules.push(empty.clone());
        let registry = register_all(&modules);

        assert_eq!(*first.calls.lock().unwrap(), 1);
        assert_eq!(*second.calls.lock().unwrap(), 1);
        assert_eq!(*empty.calls.lock().unwrap(), 1);

        // "ping" from the second module is a duplicate and dropped.
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.lookup("ping", Scope::Public).unwrap().visibility,
            Visibility::All
        );
    }

    #[test]
    fn test_no_modules_yields_empty_registry() {
        let registry = register_all(&[]);
        assert!(registry.is_empty());
    }
}
