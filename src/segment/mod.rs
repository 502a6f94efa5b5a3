//! Document segmentation: heading detection and section extraction.

mod heading;
mod segmenter;

pub use heading::{is_heading, HeadingClassifier};
pub use segmenter::Segmenter;
