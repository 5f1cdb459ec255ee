mod add_tests;
mod new_tests;
mod sub_tests;
