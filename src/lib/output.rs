use super::geojson::Entity;
use serde_json::to_string;
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const GEOJSON_EXTENSION: &str = "geojson";

pub trait Output {
    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
}

impl Output for Entity {
    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        let string = to_string(self)?;
        writeln!(writer, "{}", string)?;
        Ok(())
    }
}

/// Destination for exported files.
pub trait Sink {
    /// Store `contents` under `file_name` and return where it ended up.
    fn put(&mut self, file_name: &str, contents: &[u8]) -> Result<PathBuf, Box<dyn Error>>;
}

/// Writes files into a directory on disk.
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    /// Create `dir` (and its parents) if needed.
    pub fn create(dir: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .map_err(|e| format!("could not create {}: {}", dir.display(), e))?;
        Ok(DirSink { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Sink for DirSink {
    fn put(&mut self, file_name: &str, contents: &[u8]) -> Result<PathBuf, Box<dyn Error>> {
        let path = self.dir.join(file_name);
        fs::write(&path, contents)
            .map_err(|e| format!("could not write {}: {}", path.display(), e))?;
        Ok(path)
    }
}

/// Keeps files in memory, sorted by name.
#[derive(Default)]
pub struct MemorySink {
    pub files: BTreeMap<String, Vec<u8>>,
}

impl Sink for MemorySink {
    fn put(&mut self, file_name: &str, contents: &[u8]) -> Result<PathBuf, Box<dyn Error>> {
        self.files.insert(file_name.to_string(), contents.to_vec());
        Ok(PathBuf::from(file_name))
    }
}

/// Make a timezone name usable as a file name (`America/New_York` becomes
/// `America-New_York`).
pub fn safe_name(name: &str) -> String {
    name.replace('/', "-")
}

pub fn file_name(name: &str) -> String {
    format!("{}.{}", safe_name(name), GEOJSON_EXTENSION)
}

/// Fail if two names would be written to the same file.
pub fn check_collisions<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), Box<dyn Error>> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for name in names {
        if let Some(other) = seen.insert(safe_name(name), name) {
            return Err(format!(
                "timezones {:?} and {:?} both map to {}",
                other,
                name,
                file_name(name)
            )
            .into());
        }
    }
    Ok(())
}

pub fn put_entity(
    sink: &mut dyn Sink,
    file_name: &str,
    entity: &Entity,
) -> Result<PathBuf, Box<dyn Error>> {
    let mut buf = Vec::new();
    entity.write_geojson(&mut buf)?;
    sink.put(file_name, &buf)
}
