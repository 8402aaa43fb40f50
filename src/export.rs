use crate::ShadeScale;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes a shade scale to `path` as pretty-printed JSON, creating the
/// destination directory if needed. Keys serialize as stringified step
/// numbers in ascending order.
pub fn export_shades(shades: &ShadeScale, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    let mut file = fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(&mut file, shades)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_shades;

    #[test]
    fn exported_scale_reads_back_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("successShades.json");
        let scale = generate_shades("#1e9e3c", 8).unwrap();
        export_shades(&scale, &path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let restored: ShadeScale = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored, scale);
        assert_eq!(restored[&500], "#1e9e3c");
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out").join("greyShades.json");
        let scale = generate_shades("#4d5b70", 4).unwrap();
        export_shades(&scale, &path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn keys_serialize_as_step_number_strings() {
        let scale = generate_shades("#28b6d2", 2).unwrap();
        let json = serde_json::to_value(&scale).unwrap();
        let obj = json.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["400", "500", "600"]);
    }
}
