use crate::error::{CatalogError, Result};
use crate::types::DeviceRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub fn load_device_file(path: impl AsRef<Path>) -> Result<DeviceRecord> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let rec: DeviceRecord = serde_yaml::from_str(&raw).map_err(|source| CatalogError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), device = %rec.device, "loaded device file");
    Ok(rec)
}

/// Load every entry of `dir`, ordered by file name.
///
/// Stops at the first entry that cannot be read or decoded; no partial
/// result is returned.
pub fn load_devices_dir(dir: impl AsRef<Path>) -> Result<Vec<DeviceRecord>> {
    let dir = dir.as_ref();
    let read_err = |source: std::io::Error| CatalogError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        entries.push(entry.path());
    }
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut records = Vec::with_capacity(entries.len());
    for p in entries {
        records.push(load_device_file(&p)?);
    }
    info!(dir = %dir.display(), count = records.len(), "loaded device documentation");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_load_dir_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "el2008.yml", "Device: el2008\nDescription: 8-channel output\n");
        write(tmp.path(), "ek1100.yml", "Device: ek1100\nDescription: TODO\n");
        write(tmp.path(), "el1008.yml", "Device: el1008\nChannels: 8\n");

        let recs = load_devices_dir(tmp.path()).unwrap();
        let names: Vec<&str> = recs.iter().map(|r| r.device.as_str()).collect();
        assert_eq!(names, ["ek1100", "el1008", "el2008"]);
        assert_eq!(recs[1].channels, 8);
    }

    #[test]
    fn test_empty_dir() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(load_devices_dir(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_dir_is_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        match load_devices_dir(&missing) {
            Err(CatalogError::Read { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_file_aborts_load() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "a.yml", "Device: good\n");
        write(tmp.path(), "b.yml", "Device: [unterminated\n");
        write(tmp.path(), "c.yml", "Device: also-good\n");

        let err = load_devices_dir(tmp.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Decode { .. }));
        assert_eq!(err.path(), tmp.path().join("b.yml"));
        assert!(err.to_string().contains("b.yml"));
    }

    #[test]
    fn test_subdirectory_is_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        let err = load_devices_dir(tmp.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
