//! Folder path state for the file browser.
//!
//! The path is an ordered list of segments; the root is `[""]` and every
//! deeper segment keeps its trailing `/`, so the URL form of the path is
//! simply the concatenation of all segments (`"" + "docs/" + "2024/"` =
//! `"docs/2024/"`).

/// Ordered path segments. Never empty; the first segment is always `""`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderPath {
    segments: Vec<String>,
}

impl FolderPath {
    /// The storage root.
    pub fn root() -> Self {
        Self {
            segments: vec![String::new()],
        }
    }

    /// Parse a URL fragment like `"docs/2024/"` into segments.
    /// Empty components are dropped, so `"docs//2024"` and `"docs/2024/"`
    /// parse identically.
    pub fn from_url(url: &str) -> Self {
        let mut segments = vec![String::new()];
        segments.extend(
            url.split('/')
                .filter(|part| !part.is_empty())
                .map(|part| format!("{}/", part)),
        );
        Self { segments }
    }

    /// The path one folder deeper. A trailing `/` is added to the name if
    /// the caller passed a bare folder name.
    pub fn enter(&self, name: &str) -> Self {
        let name = name.trim_start_matches('/');
        let segment = if name.ends_with('/') {
            name.to_string()
        } else {
            format!("{}/", name)
        };
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// The path one folder up, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// URL form of the path: the concatenation of all segments.
    pub fn url(&self) -> String {
        self.segments.concat()
    }

    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// Name of the current folder (`""` at the root).
    pub fn current_folder(&self) -> &str {
        self.segments
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The path made of the first `count` segments; used by breadcrumb
    /// clicks. `count` is clamped to at least the root segment.
    pub fn truncated(&self, count: usize) -> Self {
        let count = count.clamp(1, self.segments.len());
        Self {
            segments: self.segments[..count].to_vec(),
        }
    }
}

// ============================================================================
// Stale-response guard
// ============================================================================

/// Monotonic token for in-flight listing fetches. Rapid navigation starts
/// overlapping fetches; a response is applied only if its epoch is still
/// the latest, so a slow stale response cannot overwrite newer state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchEpoch(u64);

impl FetchEpoch {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn is_current(self, latest: Self) -> bool {
        self == latest
    }
}

/// Leaf component of an entry id: `"docs/a.txt"` → `"a.txt"`,
/// `"docs/sub/"` → `"sub/"`. Used to rebuild move targets on paste.
pub fn leaf_name(id: &str) -> &str {
    let trimmed = id.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(i) => &id[i + 1..],
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_invariant() {
        let root = FolderPath::root();
        assert!(root.is_root());
        assert_eq!(root.depth(), 1);
        assert_eq!(root.url(), "");
        assert_eq!(root.current_folder(), "");
        // Going up at the root is a no-op
        assert_eq!(root.parent(), None);
    }

    #[test]
    fn test_enter_and_parent_change_depth_by_one() {
        let mut path = FolderPath::root();
        for (i, name) in ["docs", "2024/", "reports"].iter().enumerate() {
            let next = path.enter(name);
            assert_eq!(next.depth(), path.depth() + 1);
            assert_eq!(next.parent().unwrap(), path);
            assert!(next.depth() >= 1);
            path = next;
            assert_eq!(path.depth(), i + 2);
        }
        // Walk all the way back up; depth never drops below 1
        while let Some(parent) = path.parent() {
            assert_eq!(parent.depth(), path.depth() - 1);
            path = parent;
        }
        assert!(path.is_root());
    }

    #[test]
    fn test_from_url() {
        assert_eq!(FolderPath::from_url(""), FolderPath::root());
        let path = FolderPath::from_url("docs/2024/");
        assert_eq!(path.segments(), &["", "docs/", "2024/"]);
        assert_eq!(path.url(), "docs/2024/");
        // Missing trailing slash and doubled separators normalize the same
        assert_eq!(FolderPath::from_url("docs/2024"), path);
        assert_eq!(FolderPath::from_url("docs//2024/"), path);
    }

    #[test]
    fn test_url_round_trip() {
        let path = FolderPath::root().enter("docs").enter("2024");
        assert_eq!(path.url(), "docs/2024/");
        assert_eq!(FolderPath::from_url(&path.url()), path);
    }

    #[test]
    fn test_truncated() {
        let path = FolderPath::from_url("a/b/c/");
        assert_eq!(path.truncated(2).url(), "a/");
        assert_eq!(path.truncated(1), FolderPath::root());
        // Clamped at both ends
        assert_eq!(path.truncated(0), FolderPath::root());
        assert_eq!(path.truncated(99), path);
    }

    #[test]
    fn test_fetch_epoch() {
        let first = FetchEpoch::default();
        let second = first.next();
        assert!(second.is_current(second));
        assert!(!first.is_current(second));
    }

    #[test]
    fn test_leaf_name() {
        assert_eq!(leaf_name("docs/a.txt"), "a.txt");
        assert_eq!(leaf_name("docs/sub/"), "sub/");
        assert_eq!(leaf_name("a.txt"), "a.txt");
        assert_eq!(leaf_name("sub/"), "sub/");
    }
}
