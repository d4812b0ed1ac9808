use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Ugyldig JSON-input; `path` peker på feltet som feilet (serde_path_to_error).
    #[error("parse error ({context}) at {path}: {message}")]
    Parse {
        context: &'static str,
        path: String,
        message: String,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Deserialiser JSON med sti-sporing, slik at feilen navngir feltet.
pub fn from_json_str<T>(json_in: &str, context: &'static str) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let mut de = serde_json::Deserializer::from_str(json_in);
    serde_path_to_error::deserialize(&mut de).map_err(|e| AnalyticsError::Parse {
        context,
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}
