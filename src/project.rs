pub mod cube;
pub mod gore;

use rayon::prelude::*;

use crate::raster::buffer::PixelBuffer;

/// A sweep that writes one shape's pixels into a page.
///
/// Rows are independent of each other, so the page can be filled sequentially
/// or split across a rayon pool with byte-identical results.
pub trait NetProjector: Sync {
    /// Fill canvas row `y`. `row` holds exactly one row of RGBA8 pixels.
    fn project_row(&self, y: u32, row: &mut [u8]);

    fn project(&self, canvas: &mut PixelBuffer, parallel: bool) {
        if parallel {
            canvas
                .par_rows_mut()
                .enumerate()
                .for_each(|(y, row)| self.project_row(y as u32, row));
        } else {
            for (y, row) in canvas.rows_mut().enumerate() {
                self.project_row(y as u32, row);
            }
        }
    }
}
