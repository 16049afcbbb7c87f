//! Drawing VOC boxes onto images.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageError, Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::config::{LabelsConfig, Options};
use crate::error::{Error, Result};
use crate::labels::voc::{BoundingBox, VocAnnotations};

/// Box color and line thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxStyle {
    pub color: Rgb<u8>,
    pub thickness: u32,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            color: Rgb([255, 0, 0]),
            thickness: 2,
        }
    }
}

impl From<&LabelsConfig> for BoxStyle {
    fn from(labels: &LabelsConfig) -> Self {
        Self {
            color: Rgb(labels.box_color),
            thickness: labels.box_thickness,
        }
    }
}

/// Draw a hollow box; extra thickness grows outwards. Parts outside the
/// image are clipped.
pub fn draw_voc_box(image: &mut RgbImage, bbox: &BoundingBox, style: &BoxStyle) -> Result<()> {
    let (width, height) = bbox.size()?;

    // The outermost ring must fit in u32; inner rings are smaller
    let outer = style.thickness.saturating_sub(1).checked_mul(2);
    let fits = |side: u32| outer.and_then(|extra| side.checked_add(extra)).is_some();
    if !fits(width) || !fits(height) {
        return Err(Error::InvalidBox(format!(
            "{:?} with thickness {} is too large to draw",
            bbox.to_array(),
            style.thickness
        )));
    }

    for ring in 0..style.thickness {
        let inset = i32::try_from(ring)
            .map_err(|_| Error::InvalidBox(format!("thickness {} too large", style.thickness)))?;
        let rect = Rect::at(bbox.x_min.saturating_sub(inset), bbox.y_min.saturating_sub(inset))
            .of_size(width + 2 * ring, height + 2 * ring);
        draw_hollow_rect_mut(image, rect, style.color);
    }

    Ok(())
}

/// Open an image, draw every box on it and save the result.
pub fn annotate_image(
    image_path: &Path,
    boxes: &[BoundingBox],
    style: &BoxStyle,
    output_path: &Path,
) -> Result<()> {
    let mut image = image::open(image_path)
        .map_err(|e| image_error(image_path, e))?
        .to_rgb8();

    for bbox in boxes {
        draw_voc_box(&mut image, bbox, style)?;
    }

    image.save(output_path).map_err(|e| image_error(output_path, e))?;
    Ok(())
}

/// Annotate every image named in `annotations`, writing copies to `output_dir`.
///
/// Images are processed in order of first appearance; `limit` caps how many.
/// Each copy is named after the last component of the image name, so label
/// files holding absolute or nested paths still write inside `output_dir`.
/// Returns the number of written images.
pub fn annotate_all(
    annotations: &VocAnnotations,
    images_dir: &Path,
    output_dir: &Path,
    style: &BoxStyle,
    limit: Option<usize>,
    options: &Options,
) -> Result<usize> {
    fs::create_dir_all(output_dir).map_err(|e| Error::from_io(output_dir, e))?;

    let groups = annotations.group_by_image();
    let take = limit.unwrap_or(groups.len());

    let mut count = 0;
    for (image_name, boxes) in groups.into_iter().take(take) {
        let image_path = images_dir.join(image_name);
        let output_path = annotated_path(output_dir, &image_path, image_name)?;
        annotate_image(&image_path, &boxes, style, &output_path)?;
        count += 1;
        if options.verbose {
            tracing::info!("Annotated {} ({} boxes)", image_name, boxes.len());
        }
    }

    Ok(count)
}

/// Output file for `image_name`; never the source image itself.
fn annotated_path(output_dir: &Path, image_path: &Path, image_name: &str) -> Result<PathBuf> {
    let file_name = Path::new(image_name)
        .file_name()
        .ok_or_else(|| Error::InvalidFilename(format!("'{}' names no file", image_name)))?;
    let output_path = output_dir.join(file_name);

    let same_file = match (fs::canonicalize(image_path), fs::canonicalize(&output_path)) {
        (Ok(source), Ok(output)) => source == output,
        _ => false,
    };
    if same_file {
        return Err(Error::InvalidFilename(format!(
            "'{}' would overwrite its source image",
            output_path.display()
        )));
    }

    Ok(output_path)
}

fn image_error(path: &Path, err: ImageError) -> Error {
    match err {
        ImageError::IoError(e) => Error::from_io(path, e),
        other => Error::Image(other),
    }
}
