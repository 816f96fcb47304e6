pub mod use_cases;

pub use use_cases::login::{LoginError, LoginResponse, LoginUseCase};
