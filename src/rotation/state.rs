use crate::domain::{Story, StoryList};

/// The current story list and which story is showing.
///
/// `index` is only meaningful while the list is non-empty, and is always in
/// bounds then.
#[derive(Debug, Clone, Default)]
pub struct Rotation {
    stories: StoryList,
    index: usize,
}

impl Rotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stories(&self) -> &StoryList {
        &self.stories
    }

    /// `None` while there are no stories.
    pub fn index(&self) -> Option<usize> {
        (!self.stories.is_empty()).then_some(self.index)
    }

    pub fn current(&self) -> Option<&Story> {
        self.stories.get(self.index)
    }

    pub fn advance(&mut self) -> Option<&Story> {
        if self.stories.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.stories.len();
        self.current()
    }

    pub fn retreat(&mut self) -> Option<&Story> {
        if self.stories.is_empty() {
            return None;
        }
        let len = self.stories.len();
        self.index = (self.index + len - 1) % len;
        self.current()
    }

    /// Swap in a new list and start again from its first story.
    pub fn replace(&mut self, stories: StoryList) -> Option<&Story> {
        self.stories = stories;
        self.index = 0;
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::tests::{at, story};

    fn rotation_of(n: u32) -> Rotation {
        let mut rotation = Rotation::new();
        rotation.replace(StoryList::from_discovered(
            (0..n).map(|i| story(&format!("s{}", i), at(20 - i))).collect(),
        ));
        rotation
    }

    #[test]
    fn test_empty_rotation_is_inert() {
        let mut rotation = Rotation::new();
        assert_eq!(rotation.index(), None);
        assert!(rotation.advance().is_none());
        assert!(rotation.retreat().is_none());
        assert!(rotation.current().is_none());
    }

    #[test]
    fn test_advance_wraps() {
        let mut rotation = rotation_of(3);
        assert_eq!(rotation.current().unwrap().title, "s0");
        assert_eq!(rotation.advance().unwrap().title, "s1");
        assert_eq!(rotation.advance().unwrap().title, "s2");
        assert_eq!(rotation.advance().unwrap().title, "s0");
    }

    #[test]
    fn test_retreat_wraps() {
        let mut rotation = rotation_of(3);
        assert_eq!(rotation.retreat().unwrap().title, "s2");
        assert_eq!(rotation.retreat().unwrap().title, "s1");
        assert_eq!(rotation.index(), Some(1));
    }

    #[test]
    fn test_advance_len_times_is_cyclic() {
        for n in 1..=7 {
            let mut rotation = rotation_of(n);
            rotation.advance();
            let start = rotation.index();
            for _ in 0..n {
                rotation.advance();
            }
            assert_eq!(rotation.index(), start, "len {}", n);
        }
    }

    #[test]
    fn test_retreat_undoes_advance() {
        let mut rotation = rotation_of(5);
        for _ in 0..3 {
            rotation.advance();
        }
        for _ in 0..3 {
            rotation.retreat();
        }
        assert_eq!(rotation.index(), Some(0));
    }

    #[test]
    fn test_replace_resets_index() {
        let mut rotation = rotation_of(5);
        rotation.advance();
        rotation.advance();
        rotation.advance();
        assert_eq!(rotation.index(), Some(3));

        let shorter = StoryList::from_discovered(vec![story("only", at(1))]);
        assert_eq!(rotation.replace(shorter).unwrap().title, "only");
        assert_eq!(rotation.index(), Some(0));
    }
}
