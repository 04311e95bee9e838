//! # Atomic Units

use std::{borrow::Cow, fmt};

/// An atomic text unit.
///
/// Units borrow from the source text unless lower-casing forced a copy.
/// They compare and hash as byte strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Unit<'a>(Cow<'a, str>);

impl<'a> Unit<'a> {
    /// Wrap a string as a unit.
    pub fn new<S>(text: S) -> Self
    where
        S: Into<Cow<'a, str>>,
    {
        Self(text.into())
    }

    /// The unit text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The unit bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Detach the unit from the source text.
    pub fn into_owned(self) -> Unit<'static> {
        Unit(Cow::Owned(self.0.into_owned()))
    }
}

impl AsRef<str> for Unit<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<'a> From<&'a str> for Unit<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Unit<'static> {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Unit<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concatenate the unit texts.
pub fn concat_units<U: AsRef<str>>(units: &[U]) -> String {
    let mut out = String::with_capacity(units.iter().map(|u| u.as_ref().len()).sum());
    for unit in units {
        out.push_str(unit.as_ref());
    }
    out
}

/// Join the unit texts with `joiner`.
pub fn join_units<U: AsRef<str>>(
    units: &[U],
    joiner: &str,
) -> String {
    let mut out = String::new();
    for (idx, unit) in units.iter().enumerate() {
        if idx > 0 {
            out.push_str(joiner);
        }
        out.push_str(unit.as_ref());
    }
    out
}
