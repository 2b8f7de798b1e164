//! Error types for speciset.

/// Result type alias for speciset operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for speciset.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Dominance threshold outside the valid range.
    #[error("threshold must be between 0 (exclusive) and 1 (inclusive), got {value}")]
    InvalidThreshold {
        /// The rejected threshold value.
        value: f64,
    },

    /// Per-class count data could not be prepared for dominance analysis.
    #[error("data preparation failed for class '{class}'")]
    DataPreparation {
        /// Name of the offending class.
        class: String,
    },

    /// Failed to read a species count file.
    #[error("failed to read species count file '{path}'")]
    CountFileRead {
        /// Path to the count file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a species count file.
    #[error("failed to parse species count file '{path}'")]
    CountFileParse {
        /// Path to the count file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to read a species map file for cross-referencing.
    #[error("failed to read species map file '{path}'")]
    SpeciesMapRead {
        /// Path to the species map file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a species map file for cross-referencing.
    #[error("failed to parse species map file '{path}'")]
    SpeciesMapParse {
        /// Path to the species map file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to read a directory during dataset traversal.
    #[error("failed to read directory '{path}'")]
    DirRead {
        /// Path to the unreadable directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Dataset directory does not exist or is not a directory.
    #[error("dataset directory does not exist: {path}")]
    DatasetDirNotFound {
        /// Path to the missing directory.
        path: std::path::PathBuf,
    },

    /// No species count file was provided while dominance filtering was requested.
    #[error(
        "no species count file specified (use --counts or set paths.species_counts in config)"
    )]
    CountFileMissing,

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreate {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a manifest file.
    #[error("failed to write manifest file '{path}'")]
    ManifestWrite {
        /// Path to the manifest file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a JSON output file.
    #[error("failed to write JSON output file '{path}'")]
    JsonWrite {
        /// Path to the JSON file.
        path: std::path::PathBuf,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to create a Parquet output file.
    #[error("failed to create Parquet file '{path}'")]
    ParquetFileCreate {
        /// Path to the Parquet file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Parquet write operation failed.
    #[error("parquet write failed: {context}")]
    ParquetWrite {
        /// Description of the failed operation.
        context: String,
        /// Underlying Parquet error.
        #[source]
        source: parquet::errors::ParquetError,
    },
}
