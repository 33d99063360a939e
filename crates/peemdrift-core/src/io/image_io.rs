use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat, Luma};
use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;

use crate::error::Result;
use crate::stack::ImageStack;

/// Load a grayscale image into an f32 array in [0, 1].
pub fn load_image(path: &Path) -> Result<Array2<f32>> {
    let img = image::open(path)?;
    let gray = img.to_luma16();
    let (w, h) = gray.dimensions();
    let mut data = Array2::<f32>::zeros((h as usize, w as usize));

    for row in 0..h as usize {
        for col in 0..w as usize {
            let pixel = gray.get_pixel(col as u32, row as u32);
            data[[row, col]] = pixel.0[0] as f32 / 65535.0;
        }
    }

    Ok(data)
}

/// Load an ordered file list into a stack. All frames must share one shape;
/// decoding runs in parallel, stack order follows the input order.
pub fn load_stack(paths: &[PathBuf]) -> Result<ImageStack> {
    let slices: Vec<Array2<f32>> = paths
        .par_iter()
        .map(|p| load_image(p))
        .collect::<Result<_>>()?;
    ImageStack::from_slices(slices)
}

/// Save a slice as 8-bit grayscale PNG, e.g. for template previews.
pub fn save_png(slice: ArrayView2<'_, f32>, path: &Path) -> Result<()> {
    let (h, w) = slice.dim();

    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let val = (slice[[row, col]].clamp(0.0, 1.0) * 255.0) as u8;
            img.put_pixel(col as u32, row as u32, Luma([val]));
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a slice as 16-bit grayscale TIFF.
pub fn save_tiff(slice: ArrayView2<'_, f32>, path: &Path) -> Result<()> {
    let (h, w) = slice.dim();

    let mut pixels: Vec<u16> = Vec::with_capacity(h * w);
    for row in 0..h {
        for col in 0..w {
            let val = (slice[[row, col]].clamp(0.0, 1.0) * 65535.0) as u16;
            pixels.push(val);
        }
    }

    let img = image::ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(w as u32, h as u32, pixels)
        .expect("buffer size matches dimensions");
    img.save(path)?;
    Ok(())
}
