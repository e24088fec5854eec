//! Configuration types deserialized from `sift.toml`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// The top-level routing configuration parsed from `sift.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct RoutingConfig {
    /// Settings that apply to every file.
    #[serde(default)]
    pub routing: RoutingSection,
    /// One entry per input file that gets its own diagnostics output.
    #[serde(default)]
    pub files: Vec<FileRoute>,
}

/// Global routing settings.
#[derive(Debug, Default, Deserialize)]
pub struct RoutingSection {
    /// Where diagnostics that belong to no registered file are printed.
    #[serde(default)]
    pub fallback: Fallback,
    /// The output format for files that don't choose one.
    #[serde(default)]
    pub format: OutputFormat,
    /// Whether terminal output uses ANSI colors.
    #[serde(default)]
    pub color: bool,
    /// Extra sources to load without routing their diagnostics anywhere.
    ///
    /// Accepts either a single string or a list of strings.
    #[serde(default, deserialize_with = "deserialize_string_or_vec")]
    pub sources: Vec<String>,
}

/// A single input file and where its diagnostics go.
#[derive(Debug, Deserialize)]
pub struct FileRoute {
    /// Path of the input file, relative to the configuration directory.
    pub path: String,
    /// Path of the diagnostics output. When absent, diagnostics located in
    /// this file are suppressed.
    #[serde(default)]
    pub output: Option<String>,
    /// Output format overriding [`RoutingSection::format`].
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl FileRoute {
    /// Returns this file's format, falling back to `default`.
    pub fn format_or(&self, default: OutputFormat) -> OutputFormat {
        self.format.unwrap_or(default)
    }
}

/// Deserializes a field that can be either a single string or a list of strings.
///
/// Allows `sources = "lib/core.x"` as well as `sources = ["a.x", "b.x"]`.
fn deserialize_string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut vec = Vec::new();
            while let Some(val) = seq.next_element::<String>()? {
                vec.push(val);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Destination for diagnostics not claimed by any registered file.
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Fallback {
    /// Print them to standard error (default).
    #[default]
    Stderr,
    /// Register no catch-all consumer; unclaimed located diagnostics are dropped.
    None,
}

/// How a file's diagnostics are written.
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rendered terminal text (default).
    #[default]
    Text,
    /// One JSON object per line, written when compilation finishes.
    Json,
    /// Accepted and discarded.
    Null,
}
