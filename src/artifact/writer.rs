//! Reproducible artifact writer
//!
//! Entries are written in path order with fixed ownership, permissions and
//! timestamps, and the gzip header carries no mtime, so the same plan
//! always produces the same bytes. The archive is assembled in a temporary
//! file next to its destination and renamed into place once complete.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use flate2::{Compression, GzBuilder};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::{PKG_INFO, RECORD_FILE, artifact_file_name};
use crate::bundler::BuildPlan;
use crate::error::{Result, fs};

const FILE_MODE: u32 = 0o644;

fn append_file<W: Write>(
    builder: &mut tar::Builder<W>,
    path: &str,
    contents: &[u8],
) -> io::Result<()> {
    let mut header = tar::Header::new_gnu();
    header.set_entry_type(tar::EntryType::Regular);
    header.set_size(contents.len() as u64);
    header.set_mode(FILE_MODE);
    header.set_mtime(0);
    header.set_uid(0);
    header.set_gid(0);
    builder.append_data(&mut header, path, contents)
}

fn write_archive<W: Write>(plan: &BuildPlan, root: &str, out: W) -> io::Result<W> {
    let encoder = GzBuilder::new().mtime(0).write(out, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let record_json = plan
        .record
        .to_json()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    append_file(
        &mut builder,
        &format!("{root}/{PKG_INFO}"),
        plan.metadata.render().as_bytes(),
    )?;
    append_file(
        &mut builder,
        &format!("{root}/{RECORD_FILE}"),
        record_json.as_bytes(),
    )?;

    for entry in plan.manifest.iter() {
        debug!(path = %entry.path, size = entry.size(), "adding entry");
        append_file(&mut builder, &format!("{root}/{}", entry.path), &entry.contents)?;
    }

    let encoder = builder.into_inner()?;
    encoder.finish()
}

/// Write the artifact for `plan` into `out_dir`, returning its path
pub fn write_artifact(plan: &BuildPlan, out_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir).map_err(|e| fs::write_failed(out_dir, e))?;

    let root = plan.record.distribution_name();
    let final_path = out_dir.join(artifact_file_name(&root));

    let temp = NamedTempFile::new_in(out_dir).map_err(|e| fs::write_failed(out_dir, e))?;
    let file = write_archive(plan, &root, temp.as_file())
        .map_err(|e| fs::write_failed(&final_path, e))?;
    file.sync_all().map_err(|e| fs::write_failed(&final_path, e))?;

    temp.persist(&final_path)
        .map_err(|e| fs::write_failed(&final_path, e.error))?;

    info!(
        artifact = %final_path.display(),
        files = plan.manifest.len(),
        "artifact written"
    );

    Ok(final_path)
}
