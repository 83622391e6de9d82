use anyhow::{Context, Result, anyhow};
use shared::model::RouteAccessConfig;
use tracing::info;

pub const DEFAULT_DEMO_PASSWORD: &str = "123456";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub route_access: RouteAccessConfig,
    pub demo_password: String,
    pub bcrypt_cost: u32,
    pub secure_cookie: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;
        let port_str = lookup("PORT").context("Missing environment variable: PORT")?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let route_access = match lookup("ROUTE_ACCESS_FILE") {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read ROUTE_ACCESS_FILE at {path}"))?;
                info!("Loading route access table from {path}");
                RouteAccessConfig::from_json(&raw)
                    .with_context(|| format!("Invalid route access table in {path}"))?
            }
            None => RouteAccessConfig::default(),
        };

        let demo_password =
            lookup("DEMO_PASSWORD").unwrap_or_else(|| DEFAULT_DEMO_PASSWORD.to_string());

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => raw
                .parse::<u32>()
                .context("BCRYPT_COST must be a valid u32 integer")?,
            None => bcrypt::DEFAULT_COST,
        };

        let secure_cookie = match lookup("SECURE_COOKIE") {
            Some(raw) => parse_flag("SECURE_COOKIE", &raw)?,
            None => false,
        };

        Ok(Self {
            port,
            jwt_secret,
            route_access,
            demo_password,
            bcrypt_cost,
            secure_cookie,
        })
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}
