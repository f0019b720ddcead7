pub mod source_list;
pub mod story;

pub use source_list::SourceList;
pub use story::{Story, StoryList};
