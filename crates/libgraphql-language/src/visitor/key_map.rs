use crate::ast::NodeKind;
use crate::visitor::VisitError;
use std::collections::HashMap;

/// Overrides, per node kind, which child keys a traversal descends into and
/// in what order.
///
/// Kinds without an override use [`NodeKind::visitor_keys()`]. Every
/// overriding key must be one of the kind's real child keys.
///
/// ```rust
/// use libgraphql_language::ast::NodeKind;
/// use libgraphql_language::visitor::KeyMap;
///
/// // Visit a field's selection set before its name, and skip its
/// // arguments entirely.
/// let keys = KeyMap::new()
///     .with_keys(NodeKind::Field, &["selection_set", "name"])
///     .unwrap();
/// assert_eq!(keys.keys_for(NodeKind::Field), &["selection_set", "name"]);
/// assert!(KeyMap::new().with_keys(NodeKind::Name, &["value"]).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct KeyMap {
    overrides: HashMap<NodeKind, Vec<&'static str>>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keys visited for `kind`.
    pub fn with_keys(mut self, kind: NodeKind, keys: &[&str]) -> Result<Self, VisitError> {
        let known = kind.visitor_keys();
        let keys = keys
            .iter()
            .map(|key| {
                known
                    .iter()
                    .copied()
                    .find(|known_key| *known_key == *key)
                    .ok_or_else(|| VisitError::UnknownKey {
                        kind,
                        key: key.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.overrides.insert(kind, keys);
        Ok(self)
    }

    /// The keys visited for `kind`.
    pub fn keys_for(&self, kind: NodeKind) -> &[&'static str] {
        match self.overrides.get(&kind) {
            Some(keys) => keys,
            None => kind.visitor_keys(),
        }
    }
}
