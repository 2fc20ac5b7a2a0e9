use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: Failed to access file", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: Invalid JSON", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: Invalid YAML", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document parsed, but `location` does not have the expected shape.
    #[error("Expected {expected} at `{location}`, found {found}")]
    Structure {
        location: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to serialize output")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// True for malformed input, whichever format it was read as.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Json { .. } | Error::Yaml { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_cause_is_not_repeated_in_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let cause = source.to_string();
        let err = Error::Json {
            path: PathBuf::from("openapi.json"),
            source,
        };
        assert_eq!(err.to_string(), "openapi.json: Invalid JSON");
        assert_eq!(err.source().unwrap().to_string(), cause);

        let err = Error::io(
            "missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "missing.json: Failed to access file");
        assert_eq!(err.source().unwrap().to_string(), "not found");
    }
}
