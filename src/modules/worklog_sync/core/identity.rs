// Decides whether a remote author is "us".
//
// Purpose
// - Isolate the author heuristic behind one seam so it can become an exact account-id match
//   once the remote side exposes stable identifiers.

pub trait IdentityMatcher: Send + Sync {
    fn matches(&self, author: &str) -> bool;
}

/// Case-insensitive substring match of a configured display name or account against the
/// author representation. An empty identity matches nobody.
#[derive(Debug, Clone)]
pub struct SubstringIdentityMatcher {
    needle: String,
}

impl SubstringIdentityMatcher {
    pub fn new(identity: impl AsRef<str>) -> Self {
        Self {
            needle: identity.as_ref().trim().to_lowercase(),
        }
    }
}

impl IdentityMatcher for SubstringIdentityMatcher {
    fn matches(&self, author: &str) -> bool {
        !self.needle.is_empty() && author.to_lowercase().contains(&self.needle)
    }
}
