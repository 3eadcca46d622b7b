pub mod fs_utils;
pub mod logic;
pub mod xml;

pub use logic::ExportLogic;
