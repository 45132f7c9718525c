pub mod workbook_io;
