//! Display functions for manifests, records and metadata

use console::Style;

use crate::artifact::{CoreMetadata, RecordEntry};
use crate::bundler::{FileKind, ManifestEntry};
use crate::warning::BuildWarning;

macro_rules! display_opt_field {
    ($label:expr, $value:expr) => {
        if let Some(ref v) = $value {
            println!("  {} {}", Style::new().bold().apply_to($label), v);
        }
    };
}

/// A bundled file as shown in listings
pub trait FileRow {
    fn path(&self) -> &str;
    fn kind(&self) -> FileKind;
    fn size(&self) -> u64;
}

impl FileRow for ManifestEntry {
    fn path(&self) -> &str {
        &self.path
    }

    fn kind(&self) -> FileKind {
        self.kind
    }

    fn size(&self) -> u64 {
        ManifestEntry::size(self)
    }
}

impl FileRow for RecordEntry {
    fn path(&self) -> &str {
        &self.path
    }

    fn kind(&self) -> FileKind {
        self.kind
    }

    fn size(&self) -> u64 {
        self.size
    }
}

/// Human-readable byte count
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;

    if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// One listing line without styling
pub fn format_file_row(row: &dyn FileRow) -> String {
    format!(
        "{:<8} {} ({})",
        row.kind().to_string(),
        row.path(),
        format_size(row.size())
    )
}

/// Print files, one per line, with kind and size
pub fn display_files<'a, R, I>(rows: I)
where
    R: FileRow + 'a,
    I: IntoIterator<Item = &'a R>,
{
    for row in rows {
        let kind = match row.kind() {
            FileKind::Module => Style::new().cyan(),
            FileKind::Resource => Style::new().green(),
        };
        println!(
            "  {} {} {}",
            kind.apply_to(format!("{:<8}", row.kind().to_string())),
            row.path(),
            Style::new().dim().apply_to(format!("({})", format_size(row.size())))
        );
    }
}

/// Print the totals line of a listing
pub fn display_summary(modules: usize, resources: usize, total_size: u64) {
    println!(
        "{} {} module(s), {} resource(s), {}",
        Style::new().bold().apply_to("Total:"),
        modules,
        resources,
        format_size(total_size)
    );
}

/// Print core metadata fields that are set
pub fn display_metadata(metadata: &CoreMetadata) {
    println!(
        "{} {}",
        Style::new().bold().yellow().apply_to(&metadata.name),
        metadata.version
    );
    display_opt_field!("Summary:", metadata.summary);
    display_opt_field!("Home-page:", metadata.home_page);
    display_opt_field!("Author:", metadata.author);
    display_opt_field!("License:", metadata.license);
    if !metadata.platforms.is_empty() {
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Platforms:"),
            metadata.platforms.join(", ")
        );
    }
}

/// Print warnings to stderr
pub fn display_warnings(warnings: &[BuildWarning]) {
    for warning in warnings {
        eprintln!(
            "{} {}",
            Style::new().yellow().bold().for_stderr().apply_to("warning:"),
            warning
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KiB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MiB");
    }

    #[test]
    fn test_format_file_row() {
        let entry = ManifestEntry::new(
            "wheatley/plugin.hy".to_string(),
            "wheatley".to_string(),
            FileKind::Resource,
            b"(hy)".to_vec(),
        );
        assert_eq!(
            format_file_row(&entry),
            "resource wheatley/plugin.hy (4 B)"
        );
    }

    #[test]
    fn test_record_entry_row() {
        let entry = RecordEntry {
            path: "wheatley/__init__".to_string(),
            package: "wheatley".to_string(),
            kind: FileKind::Module,
            size: 0,
            hash: crate::hash::hash_bytes(b""),
        };
        assert_eq!(format_file_row(&entry), "module   wheatley/__init__ (0 B)");
    }
}
