pub mod cell;
pub mod output;
pub mod workbook;
