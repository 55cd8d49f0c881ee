//! Rule definition, validation, and compilation.

use std::borrow::Cow;

use regex::{Captures, Regex};

use refactor_params_core::errors::RuleError;
use refactor_params_core::types::collections::SmallVec2;

/// A call-site shape and the params struct its trailing arguments move into.
///
/// Matches `<call_name>(<config>, <arg>..., <params_type> {` with one `<arg>`
/// per entry in `fields`, and rewrites it to
/// `<call_name>(<config>, <params_type> {` followed by one
/// `<field>: <arg>,` line per field, in argument order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    pub name: String,
    pub call_name: String,
    /// Qualified struct path, e.g. `crate::attributes::AddAttributeParams`.
    pub params_type: String,
    /// Field names, one per consumed positional argument.
    pub fields: SmallVec2<String>,
}

impl RewriteRule {
    pub fn new(
        name: impl Into<String>,
        call_name: impl Into<String>,
        params_type: impl Into<String>,
        fields: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            call_name: call_name.into(),
            params_type: params_type.into(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Regex source for this call-site shape.
    ///
    /// Whitespace is tolerated around the parentheses and commas. There is
    /// no word-boundary anchor and no awareness of comments or strings.
    pub fn pattern(&self) -> String {
        let mut pattern = format!(r"{}\s*\(\s*(\w+)\s*,", regex::escape(&self.call_name));
        for _ in &self.fields {
            pattern.push_str(r"\s*(\w+)\s*,");
        }
        pattern.push_str(&format!(r"\s*{}\s*\{{", regex::escape(&self.params_type)));
        pattern
    }

    /// Check the definition before compiling it.
    pub fn validate(&self) -> Result<(), RuleError> {
        let invalid = |message: String| RuleError::InvalidDefinition {
            rule: self.name.clone(),
            message,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty".to_string()));
        }
        if !is_identifier(&self.call_name) {
            return Err(invalid(format!(
                "call '{}' is not an identifier",
                self.call_name
            )));
        }
        if !is_type_path(&self.params_type) {
            return Err(invalid(format!(
                "params_type '{}' is not a `::`-separated path",
                self.params_type
            )));
        }
        if self.fields.is_empty() {
            return Err(invalid("at least one field is required".to_string()));
        }
        for (i, field) in self.fields.iter().enumerate() {
            if !is_identifier(field) {
                return Err(invalid(format!("field '{field}' is not an identifier")));
            }
            if self.fields[..i].contains(field) {
                return Err(invalid(format!("field '{field}' is listed twice")));
            }
        }
        Ok(())
    }

    /// Validate and compile into a rule that can be applied to text.
    pub fn compile(self) -> Result<CompiledRule, RuleError> {
        self.validate()?;
        let regex = Regex::new(&self.pattern()).map_err(|e| RuleError::PatternCompilation {
            rule: self.name.clone(),
            message: e.to_string(),
        })?;
        Ok(CompiledRule { rule: self, regex })
    }
}

/// A validated rule with its compiled pattern.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: RewriteRule,
    regex: Regex,
}

impl CompiledRule {
    pub fn name(&self) -> &str {
        &self.rule.name
    }

    pub fn rule(&self) -> &RewriteRule {
        &self.rule
    }

    /// Rewrite every non-overlapping match in one left-to-right pass.
    ///
    /// Returns the new text and the number of call sites rewritten. The text
    /// is borrowed when nothing matched.
    pub fn rewrite<'t>(&self, text: &'t str, indent: &str) -> (Cow<'t, str>, usize) {
        let mut hits = 0;
        let rewritten = self.regex.replace_all(text, |caps: &Captures<'_>| {
            hits += 1;
            self.render(caps, indent)
        });
        (rewritten, hits)
    }

    /// Reconstruct one call site from its captures.
    fn render(&self, caps: &Captures<'_>, indent: &str) -> String {
        let rule = &self.rule;
        let mut out = format!("{}({}, {} {{", rule.call_name, &caps[1], rule.params_type);
        for (i, field) in rule.fields.iter().enumerate() {
            out.push('\n');
            out.push_str(indent);
            out.push_str(field);
            out.push_str(": ");
            out.push_str(&caps[i + 2]);
            out.push(',');
        }
        out
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn is_type_path(s: &str) -> bool {
    s.split("::").all(is_identifier)
}
