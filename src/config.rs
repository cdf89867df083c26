use std::env;

/// HS256 needs a key of at least 256 bits.
const MIN_JWT_KEY_BYTES: usize = 32;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub mongo: MongoSettings,
    pub jwt: JwtSettings,
    pub cors_allowed_origin: String,
    pub static_dir: String,
}

#[derive(Clone, Debug)]
pub struct MongoSettings {
    pub connection_string: String,
    pub database_name: String,
}

#[derive(Clone, Debug)]
pub struct JwtSettings {
    pub key: String,
    pub issuer: String,
    pub audience: String,
}

impl JwtSettings {
    pub fn new(key: String, issuer: String, audience: String) -> Result<Self, String> {
        if key.len() < MIN_JWT_KEY_BYTES {
            return Err(format!(
                "JWT key must be at least {} bytes for HS256",
                MIN_JWT_KEY_BYTES
            ));
        }
        Ok(JwtSettings {
            key,
            issuer,
            audience,
        })
    }
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let jwt = JwtSettings::new(
            Self::get_env("JWT_KEY"),
            Self::get_env("JWT_ISSUER"),
            Self::get_env("JWT_AUDIENCE"),
        )
        .unwrap_or_else(|e| panic!("{}", e));

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            mongo: MongoSettings {
                connection_string: Self::get_env("MONGODB_CONNECTION_STRING"),
                database_name: Self::get_env("MONGODB_DATABASE_NAME"),
            },
            jwt,
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:4200".to_string()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "wwwroot".to_string()),
        }
    }
}
