//! Compiled rules and the keyword-indexed catalog.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use aho_corasick::AhoCorasick;
use regex::Regex;

use crate::config::{CatalogError, RulesFile};
use crate::error::RuleError;

pub use powerscan_rules::{FileType, RuleDef, Severity};

/// A compiled web-feature rule ready for scanning.
///
/// Each rule combines a regular expression with metadata used for reporting
/// (severity, description) and performance (keywords for Aho-Corasick
/// pre-filtering, file-type applicability for dispatch).
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique identifier in `"category/name"` format (e.g. `"script/eval-usage"`).
    pub id: Arc<str>,
    /// Short human-readable name shown in reports.
    pub name: Box<str>,
    /// Longer description of what the rule detects.
    pub description: Box<str>,
    /// Severity assigned to findings from this rule.
    pub severity: Severity,
    /// File types the rule applies to. Empty means every type, including
    /// files with unrecognised extensions.
    pub file_types: Box<[FileType]>,
    /// Compiled regular expression that matches the flagged feature.
    pub regex: Regex,
    /// Case-insensitive keywords for Aho-Corasick pre-filtering. If non-empty,
    /// the rule is only tested against content that contains at least one keyword.
    pub keywords: Box<[Box<str>]>,
}

impl Rule {
    pub(crate) fn from_def(def: &RuleDef) -> Result<Self, RuleError> {
        let regex = Regex::new(def.regex).map_err(|source| RuleError::InvalidRegex {
            id: def.id.to_string(),
            source,
        })?;

        Ok(Self {
            id: Arc::from(def.id),
            name: def.name.into(),
            description: def.description.into(),
            severity: def.severity,
            file_types: def.file_types.into(),
            regex,
            keywords: def.keywords.iter().map(|&k| k.into()).collect(),
        })
    }

    /// Returns `true` if this rule applies to files of the given type.
    ///
    /// Rules with an empty `file_types` slice apply to everything.
    #[must_use]
    pub fn applies_to(&self, file_type: FileType) -> bool {
        self.file_types.is_empty() || self.file_types.contains(&file_type)
    }
}

/// Indexed collection of `Rule`s with Aho-Corasick pre-filtering.
///
/// The catalog stores rules in declaration order (finding order for position
/// ties depends on it) and builds a keyword automaton at construction time so
/// the scanner can cheaply skip rules whose keywords are absent from a file.
pub struct RuleCatalog {
    rules: Vec<Rule>,
    keyword_automaton: Option<AhoCorasick>,
    keyword_to_rules: Vec<Vec<usize>>,
    rules_without_keywords: Vec<usize>,
}

impl fmt::Debug for RuleCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleCatalog")
            .field("rules", &self.rules.len())
            .field("rules_without_keywords", &self.rules_without_keywords.len())
            .finish_non_exhaustive()
    }
}

impl RuleCatalog {
    /// Compiles the builtin rule set into a catalog.
    pub fn builtin() -> Result<Self, RuleError> {
        let registry = powerscan_rules::RuleRegistry::builtin();
        let rules = registry
            .all_rules()
            .map(Rule::from_def)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rules)
    }

    /// Loads and compiles a catalog from a TOML rule file.
    ///
    /// Fail-fast: an unreadable file, malformed TOML, a missing required
    /// field, an invalid regex, or a duplicate id rejects the whole catalog.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        RulesFile::load(path)?.into_catalog()
    }

    /// Creates a catalog from compiled rules, building the keyword index.
    ///
    /// Returns `RuleError::DuplicateId` if two rules share an identifier.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id.as_ref()) {
                return Err(RuleError::DuplicateId {
                    id: rule.id.to_string(),
                });
            }
        }

        let keyword_index = build_keyword_index(&rules);
        let keyword_automaton = build_automaton(&keyword_index.keywords);

        Ok(Self {
            rules,
            keyword_automaton,
            keyword_to_rules: keyword_index.keyword_to_rules,
            rules_without_keywords: keyword_index.rules_without_keywords,
        })
    }

    /// Consumes the catalog and returns the underlying rule list.
    #[must_use]
    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }

    /// Returns all rules as a slice, in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the rules applicable to a given file type, in declaration order.
    ///
    /// Rules with an empty `file_types` slice are always included.
    pub fn rules_for(&self, file_type: FileType) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |r| r.applies_to(file_type))
    }

    /// Looks up a rule by its ID string (e.g. `"script/eval-usage"`).
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id.as_ref() == id)
    }

    /// Looks up a rule by its positional index in the catalog.
    #[must_use]
    pub fn get_by_index(&self, idx: usize) -> Option<&Rule> {
        self.rules.get(idx)
    }

    /// Returns the total number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the catalog contains no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the Aho-Corasick automaton built from rule keywords, if any
    /// keywords were registered.
    #[must_use]
    pub(crate) fn keyword_automaton(&self) -> Option<&AhoCorasick> {
        self.keyword_automaton.as_ref()
    }

    /// Maps each keyword index to the rule indices that declared it.
    #[must_use]
    pub(crate) fn keyword_to_rules(&self) -> &[Vec<usize>] {
        &self.keyword_to_rules
    }

    /// Returns indices of rules that have no keywords and must be tested
    /// against all content unconditionally.
    #[must_use]
    pub(crate) fn rules_without_keywords(&self) -> &[usize] {
        &self.rules_without_keywords
    }
}

struct KeywordIndex {
    keywords: Vec<String>,
    keyword_to_rules: Vec<Vec<usize>>,
    rules_without_keywords: Vec<usize>,
}

fn build_keyword_index(rules: &[Rule]) -> KeywordIndex {
    let mut keywords = Vec::new();
    let mut keyword_to_rules = Vec::new();
    let mut rules_without_keywords = Vec::new();
    let mut keyword_positions: HashMap<String, usize> = HashMap::new();

    for (rule_idx, rule) in rules.iter().enumerate() {
        if rule.keywords.is_empty() {
            rules_without_keywords.push(rule_idx);
        } else {
            index_rule_keywords(
                rule_idx,
                rule,
                &mut keywords,
                &mut keyword_to_rules,
                &mut keyword_positions,
            );
        }
    }

    KeywordIndex {
        keywords,
        keyword_to_rules,
        rules_without_keywords,
    }
}

fn index_rule_keywords(
    rule_idx: usize,
    rule: &Rule,
    keywords: &mut Vec<String>,
    keyword_to_rules: &mut Vec<Vec<usize>>,
    keyword_positions: &mut HashMap<String, usize>,
) {
    for keyword in &rule.keywords {
        let keyword_str = keyword.to_string();

        if let Some(&existing_idx) = keyword_positions.get(&keyword_str) {
            keyword_to_rules[existing_idx].push(rule_idx);
        } else {
            let new_idx = keywords.len();
            keyword_positions.insert(keyword_str.clone(), new_idx);
            keywords.push(keyword_str);
            keyword_to_rules.push(vec![rule_idx]);
        }
    }
}

fn build_automaton(keywords: &[String]) -> Option<AhoCorasick> {
    if keywords.is_empty() {
        return None;
    }

    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(aho_corasick::MatchKind::LeftmostLongest)
        .build(keywords)
        .ok()
}
