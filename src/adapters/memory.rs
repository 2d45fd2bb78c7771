//! In-memory secure element
//!
//! Keeps data objects in a map and counts every primitive call. Used by the
//! test suites and by callers that want a directory without hardware.

use std::collections::HashMap;

use tracing::trace;

use super::data_object::{apply_write, copy_out};
use crate::error::{DeviceError, SepalResult};
use crate::model::Oid;
use crate::ports::{SecureElement, WriteMode, DEFAULT_OBJECT_CAPACITY};

#[derive(Debug, Clone, Default)]
pub struct MemorySecureElement {
    objects: HashMap<Oid, Vec<u8>>,
    capacities: HashMap<Oid, usize>,
    write_failure: Option<u16>,
    read_failure: Option<u16>,
    write_calls: usize,
    read_calls: usize,
}

impl MemorySecureElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the object at `oid` to `capacity` bytes
    pub fn with_capacity(mut self, oid: Oid, capacity: usize) -> Self {
        self.capacities.insert(oid, capacity);
        self
    }

    /// Start with `data` already stored at `oid`
    pub fn with_object(mut self, oid: Oid, data: impl Into<Vec<u8>>) -> Self {
        self.objects.insert(oid, data.into());
        self
    }

    /// Answer every following write with `status`
    pub fn fail_writes(&mut self, status: u16) {
        self.write_failure = Some(status);
    }

    /// Answer every following read with `status`
    pub fn fail_reads(&mut self, status: u16) {
        self.read_failure = Some(status);
    }

    pub fn clear_failures(&mut self) {
        self.write_failure = None;
        self.read_failure = None;
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls
    }

    pub fn read_calls(&self) -> usize {
        self.read_calls
    }

    pub fn object(&self, oid: Oid) -> Option<&[u8]> {
        self.objects.get(&oid).map(Vec::as_slice)
    }

    fn capacity(&self, oid: Oid) -> usize {
        self.capacities
            .get(&oid)
            .copied()
            .unwrap_or(DEFAULT_OBJECT_CAPACITY)
    }
}

impl SecureElement for MemorySecureElement {
    fn write_data(
        &mut self,
        oid: Oid,
        mode: WriteMode,
        offset: u8,
        data: &[u8],
    ) -> SepalResult<()> {
        self.write_calls += 1;
        trace!(
            "write {} bytes to {} at offset {} (mode {:#04x})",
            data.len(),
            oid,
            offset,
            mode.code()
        );

        if let Some(status) = self.write_failure {
            return Err(DeviceError::Status { oid, status }.into());
        }

        let contents = apply_write(
            oid,
            self.objects.get(&oid).map(Vec::as_slice),
            self.capacity(oid),
            mode,
            offset,
            data,
        )?;
        self.objects.insert(oid, contents);
        Ok(())
    }

    fn read_data(&mut self, oid: Oid, offset: u8, buffer: &mut [u8]) -> SepalResult<usize> {
        self.read_calls += 1;
        trace!("read {} from offset {} into {} bytes", oid, offset, buffer.len());

        if let Some(status) = self.read_failure {
            return Err(DeviceError::Status { oid, status }.into());
        }

        let contents = self
            .objects
            .get(&oid)
            .ok_or(DeviceError::NoSuchObject { oid })?;
        copy_out(oid, contents, offset, buffer)
    }
}
