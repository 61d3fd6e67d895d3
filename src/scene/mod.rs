pub mod model;
pub mod raster;
pub mod svg;
