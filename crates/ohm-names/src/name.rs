//! Decomposition of structured names into parts, device, kind and flags.
//!
//! Names are camel-cased: each part starts with an uppercase letter followed
//! by lowercase letters and digits (`Gen1`, `P`, `U12`, `U1n`). Text between
//! such parts (a leading numeral, an all-lowercase model name) forms parts of
//! its own, and underscores only separate.

use crate::error::NameError;

/// Final part marking a name as a parameter of a quantity rather than its
/// live value, e.g. `Pv1MaxPPa`.
pub const PARAMETER_TAG: &str = "Pa";

/// A validated structured name borrowed from its source text.
///
/// # Examples
/// ```
/// use ohm_names::TagName;
/// let name = TagName::parse("Pv11U12")?;
/// assert_eq!(name.parts(), ["Pv11", "U12"]);
/// assert_eq!(name.device(), "Pv11");
/// assert_eq!(name.device_number()?, 11);
/// assert_eq!(name.kind(), "U12");
/// # Ok::<(), ohm_names::NameError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagName<'a> {
    text: &'a str,
    parts: Vec<&'a str>,
}

impl<'a> TagName<'a> {
    /// Validate `text` and split it into parts.
    ///
    /// # Errors
    /// Returns [`NameError::MalformedName`] when `text` is empty, contains a
    /// character outside `[A-Za-z0-9_]`, or consists only of underscores.
    pub fn parse(text: &'a str) -> Result<Self, NameError> {
        let malformed = |reason| NameError::MalformedName {
            name: text.to_owned(),
            reason,
        };
        if text.is_empty() {
            return Err(malformed("name is empty"));
        }
        if !text.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return Err(malformed("names may only contain letters, digits and '_'"));
        }
        let parts = split_parts(text);
        if parts.is_empty() {
            return Err(malformed("name has no parts"));
        }
        Ok(Self { text, parts })
    }

    /// The name as written.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// The parts of the name, left to right.
    #[must_use]
    pub fn parts(&self) -> &[&'a str] {
        &self.parts
    }

    /// The device part: the first part of the name.
    #[must_use]
    pub fn device(&self) -> &'a str {
        self.parts.first().copied().unwrap_or(self.text)
    }

    /// The instance number carried by the device, e.g. `2` for `Gen2P`.
    ///
    /// # Errors
    /// Returns [`NameError::MissingDeviceNumber`] when the device contains no
    /// digit and [`NameError::InvalidDeviceNumber`] when the text from the
    /// first digit onward is not a number.
    pub fn device_number(&self) -> Result<u32, NameError> {
        let device = self.device();
        let Some(start) = device.find(|c: char| c.is_ascii_digit()) else {
            return Err(NameError::MissingDeviceNumber {
                name: self.text.to_owned(),
                device: device.to_owned(),
            });
        };
        device
            .get(start..)
            .and_then(|digits| digits.parse().ok())
            .ok_or_else(|| NameError::InvalidDeviceNumber {
                name: self.text.to_owned(),
                device: device.to_owned(),
            })
    }

    /// Whether the final part is the parameter tag [`PARAMETER_TAG`].
    #[must_use]
    pub fn is_parameter(&self) -> bool {
        self.parts.last() == Some(&PARAMETER_TAG)
    }

    /// The part naming the measured quantity, which determines the units.
    ///
    /// For parameters this is the part before the tag, so `Ess1MaxPPa` and
    /// `Ess1MaxP` share the kind `P`. A bare `Pa` is its own kind.
    #[must_use]
    pub fn kind(&self) -> &'a str {
        let skip = usize::from(self.is_parameter() && self.parts.len() > 1);
        self.parts
            .iter()
            .rev()
            .nth(skip)
            .copied()
            .unwrap_or(self.text)
    }

    /// Whether this is a "big" name (device or quantity tag) rather than a
    /// lowercase model name such as `t_step`.
    #[must_use]
    pub fn is_big(&self) -> bool {
        self.text.starts_with(|c: char| c.is_ascii_uppercase())
    }
}

impl std::fmt::Display for TagName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}

/// Concatenate parts back into a name.
///
/// # Examples
/// ```
/// assert_eq!(ohm_names::join_parts(&["Gen", "P"]), "GenP");
/// ```
#[must_use]
pub fn join_parts<S: AsRef<str>>(parts: &[S]) -> String {
    parts.iter().map(AsRef::as_ref).collect()
}

/// Split ASCII text at camel-case boundaries and underscores.
fn split_parts(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut parts = Vec::new();
    let mut gap_start = 0;
    let mut pos = 0;

    while let Some(&b) = bytes.get(pos) {
        if !b.is_ascii_uppercase() {
            pos += 1;
            continue;
        }
        push_gap(text.get(gap_start..pos), &mut parts);
        let mut end = pos + 1;
        while bytes
            .get(end)
            .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            end += 1;
        }
        if let Some(part) = text.get(pos..end) {
            parts.push(part);
        }
        gap_start = end;
        pos = end;
    }

    push_gap(text.get(gap_start..), &mut parts);
    parts
}

fn push_gap<'a>(gap: Option<&'a str>, parts: &mut Vec<&'a str>) {
    if let Some(gap) = gap {
        parts.extend(gap.split('_').filter(|run| !run.is_empty()));
    }
}
