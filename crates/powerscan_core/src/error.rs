use thiserror::Error;

/// Errors that can occur when compiling a rule or assembling a catalog.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The rule's regular expression failed to compile.
    #[error("invalid regex in rule '{id}': {source}")]
    InvalidRegex {
        /// Identifier of the rule that failed (e.g. `"script/eval-usage"`).
        id: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// Two rules in the same catalog share an identifier.
    #[error("duplicate rule id '{id}'")]
    DuplicateId {
        /// The identifier that appears more than once.
        id: String,
    },
}
