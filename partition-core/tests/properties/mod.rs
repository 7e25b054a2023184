mod settings_tests;
mod tracing_tests;
mod tree_tests;
