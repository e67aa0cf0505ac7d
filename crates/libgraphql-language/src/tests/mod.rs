mod parser_schema_tests;
mod parser_tests;
mod utils;
mod visitor_type_info_tests;
