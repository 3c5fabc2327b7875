use std::path::{Path, PathBuf};

/// Ordered list of files to merge. Order decides output page order;
/// the same file may appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeList {
    files: Vec<PathBuf>,
}

impl MergeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn append<I>(&mut self, paths: I)
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.files.extend(paths);
    }

    /// Out-of-range indices are ignored
    pub fn remove(&mut self, index: usize) {
        if index < self.files.len() {
            self.files.remove(index);
        }
    }

    pub fn move_up(&mut self, index: usize) {
        if index > 0 && index < self.files.len() {
            self.files.swap(index, index - 1);
        }
    }

    pub fn move_down(&mut self, index: usize) {
        if index + 1 < self.files.len() {
            self.files.swap(index, index + 1);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> MergeList {
        let mut list = MergeList::new();
        list.append(names.iter().map(PathBuf::from));
        list
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut files = list(&["a.pdf", "b.pdf"]);
        files.append(vec![PathBuf::from("a.pdf"), PathBuf::from("c.pdf")]);
        assert_eq!(files, list(&["a.pdf", "b.pdf", "a.pdf", "c.pdf"]));
    }

    #[test]
    fn test_move_up_at_top_is_noop() {
        let mut files = list(&["A", "B", "C"]);
        files.move_up(0);
        assert_eq!(files, list(&["A", "B", "C"]));
    }

    #[test]
    fn test_move_down_first() {
        let mut files = list(&["A", "B", "C"]);
        files.move_down(0);
        assert_eq!(files, list(&["B", "A", "C"]));
    }

    #[test]
    fn test_move_down_at_bottom_is_noop() {
        let mut files = list(&["A", "B", "C"]);
        files.move_down(2);
        files.move_down(7);
        assert_eq!(files, list(&["A", "B", "C"]));
    }

    #[test]
    fn test_move_up_last() {
        let mut files = list(&["A", "B", "C"]);
        files.move_up(2);
        assert_eq!(files, list(&["A", "C", "B"]));
    }

    #[test]
    fn test_remove() {
        let mut files = list(&["A", "B", "C"]);
        files.remove(1);
        assert_eq!(files, list(&["A", "C"]));
        files.remove(5);
        assert_eq!(files, list(&["A", "C"]));
    }
}
