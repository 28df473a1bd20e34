mod reader_tests;
mod image_tests;
