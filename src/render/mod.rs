/// BMP raster output.
pub mod bmp;
/// Terminal preview.
pub mod console;
