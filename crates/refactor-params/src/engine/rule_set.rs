//! RuleSet — an ordered list of compiled rules applied in sequence.

use std::sync::LazyLock;

use refactor_params_core::errors::RuleError;
use refactor_params_core::types::collections::FxHashMap;

use crate::rules::{builtin_rules, CompiledRule, RewriteRule};

/// Indentation of each emitted field line: 20 spaces.
pub const DEFAULT_INDENT: &str = "                    ";

static BUILTIN_RULE_SET: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::from_rules(builtin_rules()).expect("built-in rewrite rules compile")
});

/// Apply the six built-in rules to `text`.
///
/// Pure and infallible: text without any recognized call site is returned
/// unchanged.
pub fn apply_all_rules(text: &str) -> String {
    BUILTIN_RULE_SET.apply(text)
}

/// Result of applying a rule set, with per-rule hit counts.
#[derive(Debug, Clone, Default)]
pub struct Rewrite {
    pub text: String,
    /// Call sites rewritten, keyed by rule name. Rules with no hits are absent.
    pub counts: FxHashMap<String, usize>,
}

impl Rewrite {
    /// Total call sites rewritten across all rules.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Ordered rules plus the indent used when reconstructing call sites.
///
/// Rules run in order, each as one pass over the output of the previous
/// rule. A rule's output is never re-scanned by an earlier rule.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
    indent: String,
}

impl RuleSet {
    pub fn new(rules: Vec<CompiledRule>) -> Self {
        Self {
            rules,
            indent: DEFAULT_INDENT.to_string(),
        }
    }

    /// Compile `rules` in order. Fails on the first invalid rule or on a
    /// duplicate name.
    pub fn from_rules(rules: impl IntoIterator<Item = RewriteRule>) -> Result<Self, RuleError> {
        let mut set = Self::new(Vec::new());
        for rule in rules {
            set.push(rule.compile()?)?;
        }
        Ok(set)
    }

    /// The built-in migration rules.
    pub fn builtin() -> Self {
        BUILTIN_RULE_SET.clone()
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// Append a rule; it runs after every rule already in the set.
    pub fn push(&mut self, rule: CompiledRule) -> Result<(), RuleError> {
        if self.rules.iter().any(|r| r.name() == rule.name()) {
            return Err(RuleError::InvalidDefinition {
                rule: rule.name().to_string(),
                message: "a rule with this name is already registered".to_string(),
            });
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Drop every rule whose name is in `names`. Unknown names are ignored.
    pub fn without<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.rules
            .retain(|rule| !names.iter().any(|n| n.as_ref() == rule.name()));
        self
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order and return the rewritten text.
    pub fn apply(&self, text: &str) -> String {
        self.apply_with_stats(text).text
    }

    /// Apply every rule in order, recording how many call sites each rewrote.
    pub fn apply_with_stats(&self, text: &str) -> Rewrite {
        let mut current = text.to_string();
        let mut counts = FxHashMap::default();

        for rule in &self.rules {
            let (rewritten, hits) = rule.rewrite(&current, &self.indent);
            if hits == 0 {
                continue;
            }
            tracing::debug!(rule = rule.name(), hits, "rule rewrote call sites");
            current = rewritten.into_owned();
            *counts.entry(rule.name().to_string()).or_insert(0) += hits;
        }

        Rewrite {
            text: current,
            counts,
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}
