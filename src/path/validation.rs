//! Path validation
//!
//! Logical paths are slash-separated, relative and free of `.`/`..`
//! segments. The lone `.` names the virtual root.

/// The logical path naming the root of the filesystem
pub const ROOT_MARKER: &str = ".";

/// Check whether `name` is a well-formed logical path
pub fn is_valid_path(name: &str) -> bool {
    if name == ROOT_MARKER {
        return true;
    }

    !name.is_empty()
        && name
            .split('/')
            .all(|seg| !seg.is_empty() && seg != "." && seg != "..")
}

/// A logical path that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogicalPath<'a>(&'a str);

impl<'a> LogicalPath<'a> {
    /// Validate `name`, returning `None` if it is malformed.
    pub fn parse(name: &'a str) -> Option<Self> {
        is_valid_path(name).then_some(Self(name))
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT_MARKER
    }

    /// Path segments in order. The root has none.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        let inner = if self.is_root() { "" } else { self.0 };
        inner.split('/').filter(|seg| !seg.is_empty())
    }

    /// Last segment, or `.` for the root
    pub fn base_name(&self) -> &'a str {
        self.0.rsplit('/').next().unwrap_or(self.0)
    }

    /// Volume letter (uppercased) when the path starts with `<letter>:`
    pub fn volume(&self) -> Option<char> {
        match self.0.as_bytes() {
            [letter, b':', ..] if letter.is_ascii_alphabetic() => {
                Some(letter.to_ascii_uppercase() as char)
            }
            _ => None,
        }
    }

    /// True when the path is a volume prefix and nothing else, e.g. `C:`
    pub fn is_bare_volume(&self) -> bool {
        self.0.len() == 2 && self.volume().is_some()
    }

    /// Logical path of a child named `name`
    pub fn child(&self, name: &str) -> String {
        join_child(self.0, name)
    }
}

/// Join a child name onto an already validated logical path
pub(crate) fn join_child(parent: &str, name: &str) -> String {
    if parent == ROOT_MARKER {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}
