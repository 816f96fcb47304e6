pub mod mock_login_gateway;
pub mod reqwest_login_gateway;

pub use mock_login_gateway::MockLoginGateway;
pub use reqwest_login_gateway::ReqwestLoginGateway;
