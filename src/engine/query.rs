use std::fmt::{Display, Error, Formatter};

/// Prefix restricting a query to file candidates.
pub const FILE_PREFIX: &str = "f:";
/// Prefix restricting a query to command candidates.
pub const COMMAND_PREFIX: &str = "c:";

/// What a candidate stands for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "snake_case"))]
pub enum CandidateKind {
    /// An action, e.g. a menu item addressed by its menu path
    Command,
    /// A file, addressed by its path
    File,
}

/// Which candidate kinds a query applies to
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    Any,
    Only(CandidateKind),
}

impl KindFilter {
    pub fn accepts(self, kind: CandidateKind) -> bool {
        match self {
            KindFilter::Any => true,
            KindFilter::Only(only) => only == kind,
        }
    }
}

/// A filter text split into its kind prefix and the key that gets ranked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub key: String,
    pub filter: KindFilter,
}

impl Query {
    /// Parse a raw filter text. `f:` and `c:` are only recognized at the very
    /// start and are case-sensitive.
    pub fn parse(raw: &str) -> Self {
        let (filter, key) = if let Some(key) = raw.strip_prefix(FILE_PREFIX) {
            (KindFilter::Only(CandidateKind::File), key)
        } else if let Some(key) = raw.strip_prefix(COMMAND_PREFIX) {
            (KindFilter::Only(CandidateKind::Command), key)
        } else {
            (KindFilter::Any, raw)
        };
        Self {
            key: key.to_string(),
            filter,
        }
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self.filter {
            KindFilter::Any => write!(f, "{}", self.key),
            KindFilter::Only(CandidateKind::File) => write!(f, "{FILE_PREFIX}{}", self.key),
            KindFilter::Only(CandidateKind::Command) => write!(f, "{COMMAND_PREFIX}{}", self.key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_query_matches_any_kind() {
        let q = Query::parse("widget");
        assert_eq!(q.key, "widget");
        assert_eq!(q.filter, KindFilter::Any);
    }

    #[test]
    fn prefixes_select_kind() {
        let q = Query::parse("f:main.rs");
        assert_eq!(q.key, "main.rs");
        assert_eq!(q.filter, KindFilter::Only(CandidateKind::File));

        let q = Query::parse("c:save");
        assert_eq!(q.key, "save");
        assert_eq!(q.filter, KindFilter::Only(CandidateKind::Command));
    }

    #[test]
    fn prefix_is_case_sensitive_and_anchored() {
        assert_eq!(Query::parse("F:x").filter, KindFilter::Any);
        assert_eq!(Query::parse(" f:x").key, " f:x");
    }

    #[test]
    fn bare_prefix_leaves_empty_key() {
        let q = Query::parse("c:");
        assert!(q.key.is_empty());
        assert!(q.filter.accepts(CandidateKind::Command));
        assert!(!q.filter.accepts(CandidateKind::File));
    }

    #[test]
    fn display_round_trips_prefix() {
        assert_eq!(Query::parse("f:doc").to_string(), "f:doc");
        assert_eq!(Query::parse("doc").to_string(), "doc");
    }
}
