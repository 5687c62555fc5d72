pub type BlueprintResult<T> = Result<T, BlueprintError>;

#[derive(thiserror::Error, Debug)]
pub enum BlueprintError {
    #[error("{category}: empty identity key")]
    EmptyKey { category: &'static str },

    #[error("{category}: duplicate key '{key}'")]
    DuplicateKey { category: &'static str, key: String },

    #[error("animation stage '{stage}' has no actions")]
    EmptyActions { stage: String },

    #[error("animation stage '{stage}': duplicate action '{action}'")]
    DuplicateAction { stage: String, action: String },

    #[error("{context}: '{value}' is not a renderable color")]
    InvalidColor { context: String, value: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("{action} '{path}': {source}")]
    Io {
        action: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl BlueprintError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn io(action: &'static str, path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.display().to_string(),
            source,
        }
    }

    pub fn invalid_color(context: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            context: context.into(),
            value: value.into(),
        }
    }
}
