use std::env;

#[derive(Clone)]
pub struct Config {
    pub data_dir: String,
    pub server_host: String,
    pub server_port: u16,
    pub assumed_speed_kmh: f64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            data_dir: env::var("DATA_DIR")
                .unwrap_or_else(|_| "data".to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            assumed_speed_kmh: env::var("ASSUMED_SPEED_KMH")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("ASSUMED_SPEED_KMH must be a number"),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Assumed travel speed in km per minute, as used for ETA estimates
    pub fn speed_km_per_minute(&self) -> f64 {
        self.assumed_speed_kmh / 60.0
    }
}
