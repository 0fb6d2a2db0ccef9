pub mod palette_function;
