pub mod classes;
pub mod predict;
pub mod profile;
