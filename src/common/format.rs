//! Rendering of resolved networks and of the field reference.
//!
//! Nothing here is used by `netcalc` itself. The resolver only produces typed
//! summaries; how they are written out is decided at this boundary.

use netcalc::NetworkSummary;
use owo_colors::{OwoColorize, Stream::Stdout};

/// How resolved networks are written to STDOUT
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One aligned `field  value` block per network
    #[default]
    Text,
    /// The response record as JSON
    Json,
}

/// How field descriptions are written by `--describe`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DescriptionStyle {
    /// Plain text with code spans unwrapped
    Plain,
    /// Markdown, suitable for generated documentation
    #[default]
    Markdown,
}

/// Whether a field is read from a request or written to a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldRole {
    Input,
    Computed,
}

struct FieldDescription {
    name: &'static str,
    role: FieldRole,
    description: &'static str,
}

const FIELDS: [FieldDescription; 9] = [
    FieldDescription {
        name: "prefix",
        role: FieldRole::Input,
        description: "The IPv4 or IPv6 address and network mask in CIDR notation. \
            The address may denote a specific address (using a host identifier, such as `10.0.0.1/8`), \
            or the beginning address of an entire network (using a host identifier of 0, such as `10.0.0.0/8`).",
    },
    FieldDescription {
        name: "ip",
        role: FieldRole::Input,
        description: "The IPv4 or IPv6 address (such as `10.0.0.1` or `2001:db8::68`). Requires `mask`.",
    },
    FieldDescription {
        name: "mask",
        role: FieldRole::Input,
        description: "The IPv4 or IPv6 network mask (such as `255.0.0.0` or `ffff:ffff:ffff::`). Requires `ip`.",
    },
    FieldDescription {
        name: "mask_bits",
        role: FieldRole::Computed,
        description: "The number of leading set bits in the network mask.",
    },
    FieldDescription {
        name: "network",
        role: FieldRole::Computed,
        description: "The network in CIDR notation (such as `10.0.0.0/8` or `2001:db8::/48`).",
    },
    FieldDescription {
        name: "first_ip",
        role: FieldRole::Computed,
        description: "The first usable address in the range (such as `10.0.0.1` or `2001:db8::`).",
    },
    FieldDescription {
        name: "last_ip",
        role: FieldRole::Computed,
        description: "The last usable address in the range \
            (such as `10.255.255.254` or `2001:db8:0:ffff:ffff:ffff:ffff:ffff`).",
    },
    FieldDescription {
        name: "broadcast",
        role: FieldRole::Computed,
        description: "The IPv4 broadcast address (such as `10.255.255.255`). Empty for IPv6 networks.",
    },
    FieldDescription {
        name: "hostnum",
        role: FieldRole::Computed,
        description: "The host number of the address within its network (such as `1`).",
    },
];

impl FieldDescription {
    fn describe(&self, style: DescriptionStyle) -> String {
        let description = match style {
            DescriptionStyle::Markdown => self.description.to_owned(),
            DescriptionStyle::Plain => self.description.replace('`', ""),
        };
        description.trim().to_owned()
    }
}

/// Writes the reference for every request and response field
pub fn describe_fields(style: DescriptionStyle) -> String {
    let mut output = String::new();
    for role in [FieldRole::Input, FieldRole::Computed] {
        let heading = match role {
            FieldRole::Input => "Request fields",
            FieldRole::Computed => "Response fields",
        };
        match style {
            DescriptionStyle::Markdown => output.push_str(&format!("## {heading}\n\n")),
            DescriptionStyle::Plain => output.push_str(&format!("{heading}:\n")),
        }

        for field in FIELDS.iter().filter(|field| field.role == role) {
            let line = match style {
                DescriptionStyle::Markdown => format!("- `{}`: {}\n", field.name, field.describe(style)),
                DescriptionStyle::Plain => format!("  {:<10} {}\n", field.name, field.describe(style)),
            };
            output.push_str(&line);
        }
        output.push('\n');
    }
    output
}

/// Renders one network as an aligned block of fields
pub fn text(summary: &NetworkSummary) -> String {
    let broadcast = summary.broadcast.map(|b| b.to_string()).unwrap_or_default();
    let rows = [
        ("prefix", summary.prefix().to_string()),
        ("ip", summary.ip.to_string()),
        ("mask", summary.mask.to_string()),
        ("mask_bits", summary.mask_bits.to_string()),
        ("network", summary.network.to_string()),
        ("first_ip", summary.first_ip.to_string()),
        ("last_ip", summary.last_ip.to_string()),
        ("broadcast", broadcast),
        ("hostnum", summary.hostnum.to_string()),
    ];

    rows.iter()
        .map(|(name, value)| {
            format!(
                "{} {}\n",
                format!("{name:<10}").if_supports_color(Stdout, |text| text.bright_black()),
                value
            )
        })
        .collect()
}

/// Renders networks in the requested format.
///
/// A lone network from the command line is written as a single JSON object,
/// networks from a request file as an array.
pub fn render(
    summaries: &[NetworkSummary],
    format: OutputFormat,
    as_list: bool,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(summaries.iter().map(text).collect::<Vec<_>>().join("\n")),
        OutputFormat::Json => {
            let json = match (summaries, as_list) {
                ([summary], false) => serde_json::to_string_pretty(summary)?,
                _ => serde_json::to_string_pretty(summaries)?,
            };
            Ok(json + "\n")
        }
    }
}
