pub mod archive;
pub mod collision;
pub mod config;
pub mod fs_utils;
pub mod resolver;
