mod directory_tests;
mod markdown_tests;
mod sections_tests;
