pub mod args;
pub mod color_when;
pub mod options_file;
