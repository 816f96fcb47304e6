pub mod env {
    /// Prefix of environment overrides, e.g. `SIGNIN__API__BASE_URL`
    pub const ENV_PREFIX: &str = "SIGNIN";
    pub const ENV_SEPARATOR: &str = "__";
}

/// Optional TOML file read from the working directory
pub const CONFIG_FILE_NAME: &str = "signin";

pub mod prod {
    pub mod api {
        pub const BASE_URL: &str = "http://localhost:8080/";
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }
}

pub mod test {
    pub mod api {
        pub const TIMEOUT_IN_MILLIS: u64 = 200;
    }
}
