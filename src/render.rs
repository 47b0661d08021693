pub(crate) mod data_uri;
pub(crate) mod raster;
pub(crate) mod svg;
