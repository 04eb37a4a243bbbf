//! Core metadata file (`PKG-INFO`)
//!
//! Written in the `Metadata-Version: 1.1` key/value format. Absent or empty
//! fields are rendered as `UNKNOWN`; continuation lines of the long
//! description are indented by eight spaces.

use serde::Serialize;

use crate::descriptor::PackageDescriptor;
use crate::error::Result;

pub const METADATA_VERSION: &str = "1.1";

const UNKNOWN: &str = "UNKNOWN";
const CONTINUATION: &str = "        ";

/// Package metadata carried inside the artifact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoreMetadata {
    pub name: String,
    pub version: String,
    pub summary: Option<String>,
    pub home_page: Option<String>,
    pub author: Option<String>,
    pub author_email: Option<String>,
    pub license: Option<String>,
    pub description: Option<String>,
    pub platforms: Vec<String>,
}

fn known(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != UNKNOWN)
}

impl CoreMetadata {
    /// Build metadata from a validated descriptor and its resolved long description
    pub fn from_descriptor(
        descriptor: &PackageDescriptor,
        long_description: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            name: descriptor.require_name()?.to_string(),
            version: descriptor.require_version()?.to_string(),
            summary: known(descriptor.description.as_ref()),
            home_page: known(descriptor.url.as_ref()),
            author: known(descriptor.author.as_ref()),
            author_email: known(descriptor.author_email.as_ref()),
            license: known(descriptor.license.as_ref()),
            description: long_description.filter(|d| !d.trim().is_empty()),
            platforms: descriptor
                .platforms
                .iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
        })
    }

    /// Render the `PKG-INFO` text
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut field = |key: &str, value: Option<&str>| {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(value.unwrap_or(UNKNOWN));
            out.push('\n');
        };

        field("Metadata-Version", Some(METADATA_VERSION));
        field("Name", Some(self.name.as_str()));
        field("Version", Some(self.version.as_str()));
        field("Summary", self.summary.as_deref());
        field("Home-page", self.home_page.as_deref());
        field("Author", self.author.as_deref());
        field("Author-email", self.author_email.as_deref());
        field("License", self.license.as_deref());

        let description = self.description.as_deref().map(|text| {
            text.trim_end_matches('\n')
                .lines()
                .collect::<Vec<_>>()
                .join(&format!("\n{CONTINUATION}"))
        });
        field("Description", description.as_deref());

        if self.platforms.is_empty() {
            field("Platform", None);
        } else {
            for platform in &self.platforms {
                field("Platform", Some(platform.as_str()));
            }
        }

        out
    }

    /// Parse `PKG-INFO` text
    ///
    /// Returns the reason when `Name` or `Version` is missing.
    pub fn parse(text: &str) -> std::result::Result<Self, String> {
        let mut metadata = Self::default();
        let mut name = None;
        let mut version = None;
        let mut in_description = false;
        let mut description: Vec<String> = Vec::new();

        for line in text.lines() {
            if in_description && (line.starts_with(' ') || line.is_empty()) {
                let continued = line.strip_prefix(CONTINUATION).unwrap_or(line.trim_start());
                description.push(continued.to_string());
                continue;
            }
            in_description = false;

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            let optional = || {
                Some(value.to_string()).filter(|v| !v.is_empty() && v != UNKNOWN)
            };

            match key {
                "Name" => name = Some(value.to_string()),
                "Version" => version = Some(value.to_string()),
                "Summary" => metadata.summary = optional(),
                "Home-page" => metadata.home_page = optional(),
                "Author" => metadata.author = optional(),
                "Author-email" => metadata.author_email = optional(),
                "License" => metadata.license = optional(),
                "Description" => {
                    in_description = true;
                    description = vec![value.to_string()];
                }
                "Platform" => {
                    if let Some(platform) = optional() {
                        metadata.platforms.push(platform);
                    }
                }
                _ => {}
            }
        }

        metadata.name = name.ok_or("missing Name field")?;
        metadata.version = version.ok_or("missing Version field")?;

        let joined = description.join("\n");
        let joined = joined.trim_end().to_string();
        if !joined.is_empty() && joined != UNKNOWN {
            metadata.description = Some(joined);
        }

        Ok(metadata)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn wheatley() -> PackageDescriptor {
        let mut descriptor = PackageDescriptor::new("wheatley", "0.1");
        descriptor.author = Some("Example Author".to_string());
        descriptor.author_email = Some("author@example.org".to_string());
        descriptor.license = Some("Expat".to_string());
        descriptor.description = Some("does some stuff with things & stuff".to_string());
        descriptor.url = Some(String::new());
        descriptor.platforms = vec!["any".to_string()];
        descriptor
    }

    #[test]
    fn test_render_wheatley() {
        let metadata = CoreMetadata::from_descriptor(&wheatley(), None).unwrap();
        assert_eq!(
            metadata.render(),
            "Metadata-Version: 1.1\n\
             Name: wheatley\n\
             Version: 0.1\n\
             Summary: does some stuff with things & stuff\n\
             Home-page: UNKNOWN\n\
             Author: Example Author\n\
             Author-email: author@example.org\n\
             License: Expat\n\
             Description: UNKNOWN\n\
             Platform: any\n"
        );
    }

    #[test]
    fn test_multiline_description_is_indented() {
        let metadata = CoreMetadata::from_descriptor(
            &wheatley(),
            Some("# Wheatley\n\nA core.\n".to_string()),
        )
        .unwrap();
        let rendered = metadata.render();
        assert!(rendered.contains("Description: # Wheatley\n        \n        A core.\n"));
    }

    #[test]
    fn test_parse_reverses_render() {
        let metadata = CoreMetadata::from_descriptor(
            &wheatley(),
            Some("# Wheatley\n\nA core.".to_string()),
        )
        .unwrap();
        let parsed = CoreMetadata::parse(&metadata.render()).unwrap();
        assert_eq!(parsed, metadata);
    }

    #[test]
    fn test_no_platforms_renders_unknown() {
        let descriptor = PackageDescriptor::new("bare", "1");
        let metadata = CoreMetadata::from_descriptor(&descriptor, None).unwrap();
        assert!(metadata.render().contains("Platform: UNKNOWN\n"));
    }

    #[test]
    fn test_parse_requires_name_and_version() {
        assert!(CoreMetadata::parse("Metadata-Version: 1.1\nVersion: 1\n").is_err());
        assert!(CoreMetadata::parse("Metadata-Version: 1.1\nName: a\n").is_err());
    }
}
