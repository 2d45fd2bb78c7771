//! File-backed secure element
//!
//! Stores each data object as `<OID>.bin` under a root directory, so objects
//! survive between runs of the command line tool.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, trace};

use super::data_object::{apply_write, copy_out};
use crate::error::{DeviceError, SepalResult};
use crate::model::Oid;
use crate::ports::{SecureElement, WriteMode, DEFAULT_OBJECT_CAPACITY};

#[derive(Debug, Clone)]
pub struct FileSecureElement {
    root: PathBuf,
}

impl FileSecureElement {
    /// Open (and create if needed) the object store at `root`
    pub fn open(root: impl Into<PathBuf>) -> SepalResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(DeviceError::from)?;
        debug!("Opened file backed secure element at {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn object_path(&self, oid: Oid) -> PathBuf {
        self.root.join(format!("{:04X}.bin", oid.value()))
    }

    fn load(&self, oid: Oid) -> SepalResult<Option<Vec<u8>>> {
        match fs::read(self.object_path(oid)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DeviceError::from(e).into()),
        }
    }
}

impl SecureElement for FileSecureElement {
    fn write_data(
        &mut self,
        oid: Oid,
        mode: WriteMode,
        offset: u8,
        data: &[u8],
    ) -> SepalResult<()> {
        trace!(
            "write {} bytes to {} at offset {} (mode {:#04x})",
            data.len(),
            oid,
            offset,
            mode.code()
        );

        let current = match mode {
            WriteMode::WriteOnly => self.load(oid)?,
            WriteMode::EraseAndWrite => None,
        };
        let contents = apply_write(
            oid,
            current.as_deref(),
            DEFAULT_OBJECT_CAPACITY,
            mode,
            offset,
            data,
        )?;

        // Stage next to the target so the rename stays on one filesystem
        let mut staged = NamedTempFile::new_in(&self.root).map_err(DeviceError::from)?;
        staged.write_all(&contents).map_err(DeviceError::from)?;
        staged
            .persist(self.object_path(oid))
            .map_err(|e| DeviceError::from(e.error))?;
        Ok(())
    }

    fn read_data(&mut self, oid: Oid, offset: u8, buffer: &mut [u8]) -> SepalResult<usize> {
        trace!("read {} from offset {} into {} bytes", oid, offset, buffer.len());

        let contents = self.load(oid)?.ok_or(DeviceError::NoSuchObject { oid })?;
        copy_out(oid, &contents, offset, buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract_tests_for;
    use crate::ports::contract_tests::secure_element_contract;

    use tempfile::TempDir;

    /// File element that removes its store when dropped
    struct ScratchStore {
        element: FileSecureElement,
        _dir: TempDir,
    }

    impl SecureElement for ScratchStore {
        fn write_data(
            &mut self,
            oid: Oid,
            mode: WriteMode,
            offset: u8,
            data: &[u8],
        ) -> SepalResult<()> {
            self.element.write_data(oid, mode, offset, data)
        }

        fn read_data(&mut self, oid: Oid, offset: u8, buffer: &mut [u8]) -> SepalResult<usize> {
            self.element.read_data(oid, offset, buffer)
        }
    }

    fn make_element() -> ScratchStore {
        let dir = tempfile::tempdir().unwrap();
        let element = FileSecureElement::open(dir.path()).unwrap();
        ScratchStore { element, _dir: dir }
    }

    contract_tests_for!(
        file_secure_element_contract,
        make = make_element,
        tests = {
            test_write_then_read => secure_element_contract::test_write_then_read,
            test_erase_and_write_clears_previous_contents => secure_element_contract::test_erase_and_write_clears_previous_contents,
            test_write_only_keeps_trailing_bytes => secure_element_contract::test_write_only_keeps_trailing_bytes,
            test_read_from_offset => secure_element_contract::test_read_from_offset,
            test_read_is_bounded_by_buffer => secure_element_contract::test_read_is_bounded_by_buffer,
            test_read_missing_object => secure_element_contract::test_read_missing_object,
            test_read_offset_out_of_range => secure_element_contract::test_read_offset_out_of_range,
            test_write_beyond_capacity => secure_element_contract::test_write_beyond_capacity,
        }
    );

    #[test]
    fn test_objects_persist_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let oid = Oid::new(0xE0E8).unwrap();

        let mut first = FileSecureElement::open(dir.path()).unwrap();
        first
            .write_data(oid, WriteMode::EraseAndWrite, 0, b"trust anchor")
            .unwrap();

        let mut second = FileSecureElement::open(dir.path()).unwrap();
        let mut buffer = [0u8; 32];
        let len = second.read_data(oid, 0, &mut buffer).unwrap();
        assert_eq!(&buffer[..len], b"trust anchor");
        assert!(dir.path().join("E0E8.bin").exists());
    }

    #[test]
    fn test_open_creates_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("store");

        let element = FileSecureElement::open(&root).unwrap();
        assert!(element.root().is_dir());
    }

    #[test]
    fn test_erase_and_write_replaces_file_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let oid = Oid::new(0xE0E1).unwrap();
        let mut element = FileSecureElement::open(dir.path()).unwrap();

        element
            .write_data(oid, WriteMode::EraseAndWrite, 0, &[0xAA; 64])
            .unwrap();
        element
            .write_data(oid, WriteMode::EraseAndWrite, 0, b"replacement")
            .unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["E0E1.bin"]);
        assert_eq!(fs::read(dir.path().join("E0E1.bin")).unwrap(), b"replacement");
    }
}
