//! Label module for box annotations.
//!
//! Provides:
//! - VOC label file parsing
//! - Label to class index mapping
//! - Box drawing on images

pub mod classes;
pub mod draw;
pub mod voc;

pub use classes::{labels_to_classes, ClassMap};
pub use draw::{annotate_all, annotate_image, draw_voc_box, BoxStyle};
pub use voc::{parse_voc, read_voc_file, BoundingBox, VocAnnotations, VocRecord};
