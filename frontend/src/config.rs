pub struct Config {
    /// Election endpoints.
    pub api_base_url: &'static str,
    /// Member-service endpoints (candidate records live there).
    pub members_api_base_url: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            api_base_url: "/api",
            members_api_base_url: "/members-api",
        }
    }
}

pub const CONFIG: Config = Config::new();
