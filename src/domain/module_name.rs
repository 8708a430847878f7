use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{PkgDataError, Result, package};

/// A dotted module name such as `data.subpackage`.
///
/// Always has at least one segment, and every segment is an identifier:
/// a letter or `_` followed by letters, digits or `_`. Segments are joined
/// onto search paths, so nothing path-shaped may get through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleName(Vec<String>);

impl ModuleName {
    /// Parse a dotted name, rejecting any segment that is not an identifier.
    pub fn parse(dotted: &str) -> Result<Self> {
        if !dotted.split('.').all(is_identifier) {
            return Err(package::invalid_name(dotted));
        }
        Ok(Self(dotted.split('.').map(str::to_string).collect()))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Last segment, the name the module is found under inside its parent.
    pub fn tail(&self) -> &str {
        self.0.last().map_or("", String::as_str)
    }

    pub fn parent(&self) -> Option<ModuleName> {
        if self.0.len() <= 1 {
            return None;
        }
        Some(ModuleName(self.0[..self.0.len() - 1].to_vec()))
    }

    pub fn to_dotted(&self) -> String {
        self.0.join(".")
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars
        .next()
        .is_some_and(|first| first == '_' || first.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
}

impl Display for ModuleName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl FromStr for ModuleName {
    type Err = PkgDataError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
