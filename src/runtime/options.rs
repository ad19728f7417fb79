//! Creation options passed to actor factories.

use crate::framework::{Actor, Props};
use serde::Deserialize;

/// Host-defined options handed to every actor factory.
///
/// Factories are free to ignore them; the Static actor does. Hosts that honour them call
/// [`ActorOptions::apply`] on the [`Props`] they build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActorOptions {
    /// Name to register the actor under. Anonymous when `None`.
    pub name: Option<String>,
    /// Mailbox capacity override.
    pub mailbox_capacity: Option<usize>,
}

impl ActorOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Copy the set fields onto `props`.
    pub fn apply<A: Actor>(&self, mut props: Props<A>) -> Props<A> {
        if let Some(name) = &self.name {
            props = props.with_name(name.clone());
        }
        if let Some(capacity) = self.mailbox_capacity {
            props = props.with_mailbox_capacity(capacity);
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::ActorContext;
    use crate::static_actor::StaticActor;

    #[test]
    fn test_deserialize_with_defaults() {
        let options: ActorOptions = toml::from_str("name = \"static\"").unwrap();
        assert_eq!(options, ActorOptions::named("static"));

        let empty: ActorOptions = toml::from_str("").unwrap();
        assert_eq!(empty, ActorOptions::default());
    }

    #[test]
    fn test_apply_sets_props() {
        let options = ActorOptions {
            name: Some("static".into()),
            mailbox_capacity: Some(4),
        };
        let props = options.apply(crate::framework::Props::new(|ctx: &ActorContext| {
            StaticActor::new(ctx)
        }));

        assert_eq!(props.name(), Some("static"));
        assert_eq!(props.mailbox_capacity(), 4);
    }
}
