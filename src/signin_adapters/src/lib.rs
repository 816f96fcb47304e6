pub mod config;
pub mod display;
pub mod gateway;
pub mod navigation;

pub use display::SharedErrorDisplay;
pub use gateway::{MockLoginGateway, ReqwestLoginGateway};
pub use navigation::InMemoryNavigator;
