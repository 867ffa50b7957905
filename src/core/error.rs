use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseFailed,

    ValidationInvalidArgument,

    BuilderNotFound,
    ModuleNotFound,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigParseFailed => "config.parse_failed",

            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::BuilderNotFound => "builder.not_found",
            ErrorCode::ModuleNotFound => "module.not_found",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigParseDetails {
    pub source: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderNotFoundDetails {
    pub builder: String,
    pub catalog: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundDetails {
    pub id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    /// A configuration blob (catalog, descriptor, settings file) did not
    /// deserialize into the expected shape.
    pub fn config_parse(source: impl Into<String>, error: impl Into<String>) -> Self {
        let source = source.into();
        let error = error.into();
        let message = format!("failed to parse {}: {}", source, error);

        Self::new(
            ErrorCode::ConfigParseFailed,
            message,
            to_details(ConfigParseDetails { source, error }),
        )
    }

    pub fn builder_not_found(builder: impl Into<String>, catalog: impl Into<String>) -> Self {
        let builder = builder.into();
        let catalog = catalog.into();
        let message = format!(
            "the {} builder is not defined in the {} configuration",
            builder, catalog
        );

        Self::new(
            ErrorCode::BuilderNotFound,
            message,
            to_details(BuilderNotFoundDetails { builder, catalog }),
        )
        .with_hint("Run 'modbuild builders' (or 'modbuild builders --custom') to list builders")
    }

    pub fn module_not_found(name: impl Into<String>) -> Self {
        let name = name.into();
        let message = format!("the {} module is not defined in the project descriptor", name);

        Self::new(
            ErrorCode::ModuleNotFound,
            message,
            to_details(NotFoundDetails { id: name }),
        )
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        let problem = problem.into();
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.clone(),
        });

        Self::new(ErrorCode::ValidationInvalidArgument, problem, details)
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    /// Prefix the message with caller context, keeping code and details.
    pub fn with_context(mut self, context: impl AsRef<str>) -> Self {
        self.message = format!("{}: {}", context.as_ref(), self.message);
        self
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
