use anyhow::{Context, Result};
use helper::{env_load, env_var};
use nutype::nutype;
use std::net::IpAddr;
use std::str::FromStr;

env_var!(SERVER_PORT);
env_var!(SERVER_ADDRESS);
env_var!(METRICS_POOL_SIZE);

#[nutype(validate(greater = 0), derive(Debug, Clone, Copy))]
pub struct ServerPort(u16);

#[nutype(validate(predicate = is_ip_address), derive(Debug, Clone))]
pub struct ServerAddress(String);

#[nutype(validate(greater_or_equal = 1), derive(Debug, Clone, Copy))]
pub struct MetricsPoolSize(usize);

fn is_ip_address(input: &str) -> bool { IpAddr::from_str(input).is_ok() }

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port:       ServerPort,
    pub server_address:    ServerAddress,
    /// Number of metric encoders kept between two scrapes
    pub metrics_pool_size: MetricsPoolSize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server_port:       env_load!(ServerPort, SERVER_PORT, u16),
            server_address:    env_load!(
                ServerAddress,
                SERVER_ADDRESS,
                String,
                "0.0.0.0".to_string()
            ),
            metrics_pool_size: env_load!(
                MetricsPoolSize,
                METRICS_POOL_SIZE,
                usize,
                16
            ),
        })
    }
}
