mod test_errors;
mod test_parser;
