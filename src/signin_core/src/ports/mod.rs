pub mod services;
pub mod view;
