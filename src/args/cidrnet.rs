use std::path::{Path, PathBuf};

use netcalc::RequestFields;

use crate::common::format::{DescriptionStyle, OutputFormat};

#[derive(clap::Parser)]
#[clap(author, version, about = "Describe an IPv4 or IPv6 network", long_about = None)]
pub struct Args {
    #[command(flatten)]
    request: RequestArgs,

    /// Path to a JSON file of requests to resolve
    #[clap(short = 'c', long = "config", conflicts_with_all = ["prefix", "ip", "mask"])]
    config_file: Option<PathBuf>,

    /// Output format. Overrides the format set in the request file
    #[clap(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print the request and response field reference and exit
    #[clap(long)]
    pub describe: bool,

    /// Style used by --describe
    #[clap(long, value_enum, default_value_t = DescriptionStyle::Markdown)]
    pub description_style: DescriptionStyle,

    /// Enable verbose logging
    #[clap(short, long)]
    pub verbose: bool,
}

/// A single request given on the command line
#[derive(Debug, clap::Args)]
struct RequestArgs {
    /// Address and mask length in CIDR notation (such as 10.0.0.1/8)
    #[clap(long)]
    prefix: Option<String>,

    /// Address to describe. Requires --mask
    #[clap(long)]
    ip: Option<String>,

    /// Network mask written as an address (such as 255.0.0.0). Requires --ip
    #[clap(long)]
    mask: Option<String>,
}

/// Representation of a request file
#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestFile {
    /// Output format to use unless --output is given
    #[serde(default)]
    pub output: Option<OutputFormat>,
    /// Requests to resolve, in order
    pub networks: Vec<RequestFields>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read request file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse request file due to: {message} at `{path}`")]
    Json { path: String, message: String },
    #[error("Request file {} contains no networks", .0.display())]
    Empty(PathBuf),
}

impl Args {
    /// Whether requests come from a file rather than the command line
    pub fn has_config_file(&self) -> bool {
        self.config_file.is_some()
    }

    /// Collect the requests to resolve from the chosen source
    pub fn data(&self) -> Result<RequestFile, ConfigError> {
        match self.config_file {
            Some(ref path) => RequestFile::load(path),
            None => Ok(RequestFile {
                output: None,
                networks: vec![RequestFields {
                    prefix: self.request.prefix.clone(),
                    ip: self.request.ip.clone(),
                    mask: self.request.mask.clone(),
                }],
            }),
        }
    }
}

impl RequestFile {
    /// Load a request file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let data = Self::parse(&contents)?;

        // A file with nothing in it is almost certainly a mistake
        if data.networks.is_empty() {
            return Err(ConfigError::Empty(path.to_owned()));
        }

        log::debug!(
            "Loaded {} request(s) from {}",
            data.networks.len(),
            path.display()
        );
        Ok(data)
    }

    /// Parse a request file, reporting where in the document parsing failed
    fn parse(contents: &str) -> Result<Self, ConfigError> {
        let mut deserializer = serde_json::Deserializer::from_str(contents);
        serde_path_to_error::deserialize(&mut deserializer).map_err(|err| ConfigError::Json {
            path: err.path().to_string(),
            message: err.inner().to_string(),
        })
    }
}
