pub mod fragments;
pub mod geocoder;
pub mod raster;
