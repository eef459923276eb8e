use crate::utils::{ConversionError, Result};
use std::fs::File;
use std::io;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const ARCHIVE_ROOT: &str = "translations";

const COMPRESSION_LEVEL: i64 = 9;

#[derive(Debug, Clone, Copy, Default)]
pub struct ArchiveBuilder;

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self
    }

    pub async fn build(&self, source_dir: &Path, dest: &Path) -> Result<()> {
        let file = File::create(dest)?;
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(COMPRESSION_LEVEL));

        writer.add_directory(format!("{ARCHIVE_ROOT}/"), options)?;
        append_dir_recursive(&mut writer, source_dir, source_dir, options)?;

        // the caller offers the file for download as soon as this returns
        let file = writer.finish()?;
        file.sync_all()?;
        Ok(())
    }
}

fn append_dir_recursive(
    writer: &mut ZipWriter<File>,
    root: &Path,
    path: &Path,
    options: SimpleFileOptions,
) -> Result<()> {
    let mut entries: Vec<_> = std::fs::read_dir(path)?.collect::<io::Result<_>>()?;
    entries.sort_by_key(|entry| entry.path());

    for entry in entries {
        let entry_path = entry.path();
        let relative = entry_path.strip_prefix(root).map_err(|_| {
            ConversionError::Io(io::Error::new(
                io::ErrorKind::Other,
                "workspace entry escaped its root",
            ))
        })?;
        let name = entry_name(relative);

        if entry.file_type()?.is_dir() {
            writer.add_directory(format!("{name}/"), options)?;
            append_dir_recursive(writer, root, &entry_path, options)?;
        } else {
            writer.start_file(name, options)?;
            let mut source = File::open(&entry_path)?;
            io::copy(&mut source, writer)?;
        }
    }

    Ok(())
}

fn entry_name(relative: &Path) -> String {
    let mut name = String::from(ARCHIVE_ROOT);
    for component in relative.components() {
        name.push('/');
        name.push_str(&component.as_os_str().to_string_lossy());
    }
    name
}
