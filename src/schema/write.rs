use anyhow::{Context, Result};
use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use super::VerbRecord;

/// Render `verbs` exactly as they land on disk: a pretty-printed array with
/// two-space indentation, non-ASCII text written as-is, no trailing newline.
pub fn to_json_bytes(verbs: &[VerbRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(verbs.len() * 1024);
    serde_json::to_writer_pretty(&mut buf, verbs).context("serializing verbs to JSON")?;
    Ok(buf)
}

/// Write `verbs` to `path`.
///
/// The JSON goes to a hidden `.<name>.tmp` sibling first and is then renamed
/// over `path`, so a failed run leaves any previous output untouched.
pub fn write_verbs<P: AsRef<Path>>(path: P, verbs: &[VerbRecord]) -> Result<()> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("output path {:?} has no file name", path))?;
    let tmp_path: PathBuf = path.with_file_name(format!(".{}.tmp", file_name));

    let bytes = to_json_bytes(verbs)?;
    debug!(bytes = bytes.len(), tmp = %tmp_path.display(), "writing verbs");

    {
        let tmp = fs::File::create(&tmp_path)
            .with_context(|| format!("creating {:?}", tmp_path))?;
        let mut w = BufWriter::new(tmp);
        w.write_all(&bytes)
            .with_context(|| format!("writing {:?}", tmp_path))?;
        w.flush().with_context(|| format!("flushing {:?}", tmp_path))?;
    }

    fs::rename(&tmp_path, path)
        .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))?;

    info!(verbs = verbs.len(), path = %path.display(), "wrote verbs");
    Ok(())
}
