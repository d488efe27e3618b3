//! CI output sink - where the derived values are written as key=value lines.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ImageTagsError, Result};
use crate::tagset::TagSet;

/// Resolve the output file path.
///
/// An explicit `--output` path wins; otherwise `$GITHUB_OUTPUT`. Having
/// neither is fatal - there is nowhere to deliver the result.
pub fn resolve_sink(output_flag: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = output_flag {
        return Ok(PathBuf::from(path));
    }

    match env::var("GITHUB_OUTPUT") {
        Ok(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Err(ImageTagsError::environment(
            "GITHUB_OUTPUT is not set and no --output path was given",
        )),
    }
}

/// Write the four output lines for a derived tag set.
///
/// Opens the sink in append mode: the GitHub output file is shared with
/// every other step in the job.
pub fn write_outputs(path: &Path, set: &TagSet) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    writeln!(file, "version={}", set.version)?;
    writeln!(file, "channel={}", set.channel)?;
    writeln!(file, "image={}", set.image)?;
    writeln!(file, "tags={}", set.tags.join(","))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Channel;
    use std::fs;
    use tempfile::NamedTempFile;

    fn sample_set() -> TagSet {
        TagSet {
            version: "1.4.0".to_string(),
            channel: Channel::Release,
            image: "acme/widget".to_string(),
            tags: vec![
                "ghcr.io/acme/widget:1.4.0".to_string(),
                "ghcr.io/acme/widget:latest".to_string(),
            ],
        }
    }

    #[test]
    fn test_write_outputs_emits_four_keys_in_order() {
        let file = NamedTempFile::new().unwrap();
        write_outputs(file.path(), &sample_set()).unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "version=1.4.0");
        assert_eq!(lines[1], "channel=release");
        assert_eq!(lines[2], "image=acme/widget");
        assert_eq!(
            lines[3],
            "tags=ghcr.io/acme/widget:1.4.0,ghcr.io/acme/widget:latest"
        );
    }

    #[test]
    fn test_write_outputs_appends() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "previous-step=ok\n").unwrap();

        write_outputs(file.path(), &sample_set()).unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        assert!(contents.starts_with("previous-step=ok\n"));
        assert!(contents.contains("version=1.4.0"));
    }

    #[test]
    fn test_resolve_sink_prefers_flag() {
        let path = resolve_sink(Some("/tmp/out.txt")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/out.txt"));
    }
}
