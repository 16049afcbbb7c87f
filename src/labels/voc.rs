//! Pascal VOC bounding-box label files.
//!
//! One box per line: `image_name SEP x_min SEP y_min SEP x_max SEP y_max SEP label`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::Options;
use crate::error::{Error, Result};

/// Number of fields a label line must have.
const VOC_FIELDS: usize = 6;

/// Box corners in pixels, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl BoundingBox {
    pub fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Corners as `[x_min, y_min, x_max, y_max]`.
    pub fn to_array(&self) -> [i32; 4] {
        [self.x_min, self.y_min, self.x_max, self.y_max]
    }

    /// Width and height in pixels, or an error if the corners are swapped.
    pub fn size(&self) -> Result<(u32, u32)> {
        let width = i64::from(self.x_max) - i64::from(self.x_min) + 1;
        let height = i64::from(self.y_max) - i64::from(self.y_min) + 1;

        if width < 1 || height < 1 {
            return Err(Error::InvalidBox(format!(
                "corners out of order: {:?}",
                self.to_array()
            )));
        }

        let width = u32::try_from(width)
            .map_err(|_| Error::InvalidBox(format!("box too wide: {:?}", self.to_array())))?;
        let height = u32::try_from(height)
            .map_err(|_| Error::InvalidBox(format!("box too tall: {:?}", self.to_array())))?;

        Ok((width, height))
    }
}

/// One labelled box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocRecord {
    pub image_name: String,
    pub bbox: BoundingBox,
    pub label: String,
}

/// A parsed label file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocAnnotations {
    pub records: Vec<VocRecord>,
}

impl VocAnnotations {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn image_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.image_name.as_str()).collect()
    }

    pub fn bounding_boxes(&self) -> Vec<BoundingBox> {
        self.records.iter().map(|r| r.bbox).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.label.as_str()).collect()
    }

    /// Boxes grouped per image, images in order of first appearance.
    pub fn group_by_image(&self) -> Vec<(&str, Vec<BoundingBox>)> {
        let mut groups: Vec<(&str, Vec<BoundingBox>)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for record in &self.records {
            let name = record.image_name.as_str();
            match index.get(name) {
                Some(&position) => groups[position].1.push(record.bbox),
                None => {
                    index.insert(name, groups.len());
                    groups.push((name, vec![record.bbox]));
                }
            }
        }

        groups
    }
}

/// Parse one label line. `line_no` is 1-based and only used in errors.
pub fn parse_voc_line(line: &str, separator: &str, line_no: usize) -> Result<VocRecord> {
    let values: Vec<&str> = line.split(separator).collect();

    if values.len() < VOC_FIELDS {
        return Err(Error::MalformedLabel {
            line: line_no,
            message: format!(
                "expected {} fields separated by '{}', got {}",
                VOC_FIELDS,
                separator,
                values.len()
            ),
        });
    }

    let coordinate = |index: usize, name: &str| -> Result<i32> {
        let raw = values[index].trim();
        raw.parse::<i32>().map_err(|_| Error::MalformedLabel {
            line: line_no,
            message: format!("{} '{}' is not an integer", name, raw),
        })
    };

    Ok(VocRecord {
        image_name: values[0].to_string(),
        bbox: BoundingBox {
            x_min: coordinate(1, "x_min")?,
            y_min: coordinate(2, "y_min")?,
            x_max: coordinate(3, "x_max")?,
            y_max: coordinate(4, "y_max")?,
        },
        label: values[5].trim().to_string(),
    })
}

/// Parse the text of a label file. Blank lines are skipped.
pub fn parse_voc(text: &str, separator: &str) -> Result<VocAnnotations> {
    let records = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_voc_line(line, separator, index + 1))
        .collect::<Result<Vec<_>>>()?;

    Ok(VocAnnotations { records })
}

/// Read and parse a label file.
pub fn read_voc_file(path: &Path, separator: &str, options: &Options) -> Result<VocAnnotations> {
    let text = fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
    let annotations = parse_voc(&text, separator)?;

    if options.verbose {
        tracing::info!(
            "Read {} lines from {}",
            annotations.len(),
            path.display()
        );
    }

    Ok(annotations)
}
