pub mod shared_error_display;

pub use shared_error_display::SharedErrorDisplay;
