use std::fmt;

/// Kind of filesystem entry a candidate path denotes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EntryKind {
    /// A regular file (or anything that is not a directory).
    File,
    /// A directory.
    Directory,
}

impl EntryKind {
    /// Maps the `is_dir` flag used by directory walkers.
    #[must_use]
    pub const fn from_is_dir(is_dir: bool) -> Self {
        if is_dir { Self::Directory } else { Self::File }
    }

    /// Returns `true` for [`EntryKind::Directory`].
    #[must_use]
    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl From<std::fs::FileType> for EntryKind {
    fn from(file_type: std::fs::FileType) -> Self {
        Self::from_is_dir(file_type.is_dir())
    }
}

/// Which entry kinds a rule is allowed to decide for.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Applicability {
    /// Only files.
    FilesOnly,
    /// Only directories.
    DirectoriesOnly,
    /// Both files and directories.
    #[default]
    FilesAndDirectories,
}

impl Applicability {
    /// Returns `true` when a rule with this scope may decide for `kind`.
    #[must_use]
    pub const fn accepts(self, kind: EntryKind) -> bool {
        match self {
            Self::FilesOnly => matches!(kind, EntryKind::File),
            Self::DirectoriesOnly => matches!(kind, EntryKind::Directory),
            Self::FilesAndDirectories => true,
        }
    }

    /// Modifier letter used in rule text, if any.
    #[must_use]
    pub const fn modifier(self) -> Option<char> {
        match self {
            Self::FilesOnly => Some('f'),
            Self::DirectoriesOnly => Some('d'),
            Self::FilesAndDirectories => None,
        }
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FilesOnly => f.write_str("files"),
            Self::DirectoriesOnly => f.write_str("directories"),
            Self::FilesAndDirectories => f.write_str("files and directories"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matrix() {
        let cases = [
            (Applicability::FilesOnly, EntryKind::File, true),
            (Applicability::FilesOnly, EntryKind::Directory, false),
            (Applicability::DirectoriesOnly, EntryKind::File, false),
            (Applicability::DirectoriesOnly, EntryKind::Directory, true),
            (Applicability::FilesAndDirectories, EntryKind::File, true),
            (Applicability::FilesAndDirectories, EntryKind::Directory, true),
        ];

        for (scope, kind, expected) in cases {
            assert_eq!(scope.accepts(kind), expected, "{scope} / {kind:?}");
        }
    }

    #[test]
    fn default_scope_is_both() {
        assert_eq!(Applicability::default(), Applicability::FilesAndDirectories);
    }

    #[test]
    fn entry_kind_from_is_dir() {
        assert_eq!(EntryKind::from_is_dir(true), EntryKind::Directory);
        assert_eq!(EntryKind::from_is_dir(false), EntryKind::File);
        assert!(EntryKind::Directory.is_dir());
    }

    #[test]
    fn entry_kind_from_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, b"x").unwrap();

        let dir_type = std::fs::metadata(dir.path()).unwrap().file_type();
        let file_type = std::fs::metadata(&file).unwrap().file_type();
        assert_eq!(EntryKind::from(dir_type), EntryKind::Directory);
        assert_eq!(EntryKind::from(file_type), EntryKind::File);
    }
}
