mod test_utils;
mod line_tests;
mod polygon_tests;
