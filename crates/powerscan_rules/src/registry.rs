//! Registry for accessing all builtin rule definitions.

use std::collections::HashMap;
use std::fmt;

use crate::rules::builtin_tables;
use crate::types::RuleDef;

/// Central registry of the builtin web-feature rules.
///
/// Holds one static table per category and an id index for direct lookup.
/// The engine compiles these definitions into its own catalog; the registry
/// itself never touches regex compilation.
pub struct RuleRegistry {
    tables: Vec<&'static [RuleDef]>,
    by_id: HashMap<&'static str, &'static RuleDef>,
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.by_id.len())
            .finish_non_exhaustive()
    }
}

impl RuleRegistry {
    /// Creates a registry pre-loaded with all builtin rule tables.
    #[must_use]
    pub fn builtin() -> Self {
        let tables = builtin_tables();
        let mut by_id = HashMap::new();

        for table in &tables {
            for rule in *table {
                by_id.insert(rule.id, rule);
            }
        }

        Self { tables, by_id }
    }

    /// Returns an iterator over every rule definition across all categories,
    /// in declaration order.
    pub fn all_rules(&self) -> impl Iterator<Item = &'static RuleDef> {
        self.tables.iter().flat_map(|table| table.iter())
    }

    /// Returns all rule definitions as a collected `Vec`.
    #[must_use]
    pub fn rules(&self) -> Vec<&'static RuleDef> {
        self.all_rules().collect()
    }

    /// Looks up a rule definition by its ID string (e.g. `"script/eval-usage"`).
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'static RuleDef> {
        self.by_id.get(id).copied()
    }

    /// Returns the total number of builtin rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns `true` if the registry contains no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
