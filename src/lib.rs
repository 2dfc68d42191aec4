pub mod config;
pub mod icon_gen;
pub mod shapes;
