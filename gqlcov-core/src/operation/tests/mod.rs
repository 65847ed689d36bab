mod extract_tests;
mod name_tests;
mod scanner_tests;
