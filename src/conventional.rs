// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Classify commit subjects by conventional-commit prefix (type(scope)!: description)
// role: domain/classification
// inputs: one commit subject, optionally its body
// outputs: Classification { kind, scope, description, breaking }
// invariants:
// - kind is always lower-case; unmatched messages get kind "other" with the whole message as description
// - breaking is true for a "!" marker or a BREAKING CHANGE / BREAKING-CHANGE token anywhere in the subject or body
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const OTHER: &str = "other";

static PREFIX: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^(?P<kind>\w+)(?:\((?P<scope>[^()]*)\))?(?P<bang>!)?\s*:\s*(?P<desc>.*)$")
    .expect("conventional prefix regex")
});

static BREAKING_TOKEN: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"BREAKING[ -]CHANGE").expect("breaking token regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
  pub kind: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub scope: Option<String>,
  pub description: String,
  pub breaking: bool,
}

pub fn classify(message: &str) -> Classification {
  let breaking_token = BREAKING_TOKEN.is_match(message);

  match PREFIX.captures(message) {
    Some(caps) => Classification {
      kind: caps["kind"].to_lowercase(),
      scope: caps
        .name("scope")
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty()),
      description: caps["desc"].trim().to_string(),
      breaking: caps.name("bang").is_some() || breaking_token,
    },
    None => Classification {
      kind: OTHER.to_string(),
      scope: None,
      description: message.trim().to_string(),
      breaking: breaking_token,
    },
  }
}

/// Classify the subject line; a `BREAKING CHANGE` footer in `body` also marks it breaking.
pub fn classify_with_body(subject: &str, body: &str) -> Classification {
  let mut c = classify(subject);
  c.breaking |= BREAKING_TOKEN.is_match(body);
  c
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn scoped_breaking_feature() {
    let c = classify("feat(x)!: change");
    assert_eq!(c.kind, "feat");
    assert_eq!(c.scope.as_deref(), Some("x"));
    assert_eq!(c.description, "change");
    assert!(c.breaking);
  }

  #[test]
  fn plain_message_is_other() {
    let c = classify("Update README");
    assert_eq!(c.kind, OTHER);
    assert_eq!(c.scope, None);
    assert!(!c.breaking);
  }

  #[test]
  fn type_is_lowercased() {
    assert_eq!(classify("FIX: handle empty input").kind, "fix");
    assert_eq!(classify("Docs(readme): typo").kind, "docs");
  }

  #[test]
  fn bang_without_scope() {
    let c = classify("feat!: major API changes");
    assert_eq!(c.kind, "feat");
    assert_eq!(c.scope, None);
    assert!(c.breaking);
  }

  #[test]
  fn breaking_change_token_marks_breaking() {
    let c = classify("refactor: drop v1 endpoints BREAKING CHANGE: clients must upgrade");
    assert_eq!(c.kind, "refactor");
    assert!(c.breaking);
    assert!(classify("tidy things, BREAKING-CHANGE inside").breaking);
  }

  #[test]
  fn breaking_footer_in_body_marks_breaking() {
    let c = classify_with_body("feat: drop v1", "Some context.\n\nBREAKING CHANGE: clients must upgrade\n");
    assert_eq!(c.kind, "feat");
    assert_eq!(c.description, "drop v1");
    assert!(c.breaking);
    assert!(!classify_with_body("feat: drop v1", "just notes\n").breaking);
  }

  #[test]
  fn space_before_colon_is_tolerated() {
    let c = classify("fix(bug) : resolve critical issue");
    assert_eq!(c.kind, "fix");
    assert_eq!(c.scope.as_deref(), Some("bug"));
    assert_eq!(c.description, "resolve critical issue");
  }

  #[test]
  fn missing_colon_is_other() {
    assert_eq!(classify("feat add thing").kind, OTHER);
    assert_eq!(classify("Merge branch 'main' into feature").kind, OTHER);
  }

  proptest! {
    #[test]
    fn kind_is_never_empty_and_lowercase(msg in ".{0,80}") {
      let c = classify(&msg);
      prop_assert!(!c.kind.is_empty());
      prop_assert_eq!(c.kind.clone(), c.kind.to_lowercase());
    }

    #[test]
    fn well_formed_prefix_roundtrips_kind(kind in "[a-z]{1,10}", desc in "[a-z ]{1,30}") {
      let c = classify(&format!("{}: {}", kind, desc));
      prop_assert_eq!(c.kind, kind);
      prop_assert!(!c.breaking);
    }
  }
}
