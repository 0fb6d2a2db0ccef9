pub mod fractal;
pub mod fractal_kinds;
pub mod julia;
pub mod mandelbrot;
