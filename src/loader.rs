// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Opens a `nox` bytecode file, maps it read-only, and validates its header.
//!
//! Per-instruction validation (is this opcode defined? is this jump target
//! in range?) is deliberately not this module's job — it belongs to the
//! execution engine, which is the only component that knows what "valid"
//! means for a given instruction in context.

#[cfg(test)]
mod loader_test;

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::engine::MAX_MEM;
use crate::error::LoaderError;
use crate::instruction::{INSTRUCTION_SIZE, Instruction};

/// The 8-byte ASCII magic prefix identifying the `nox` bytecode format.
pub const MAGIC: &[u8; 8] = b".noxbc--";

/// Size in bytes of the fixed file header (magic + header word).
pub const HEADER_SIZE: usize = 16;

/// A validated, mapped bytecode program.
///
/// The mapping is kept alive for the lifetime of the `Program`; dropping it
/// unmaps the file, mirroring the loader's "unmap and close on exit"
/// contract.
pub struct Program {
    mapping: Mmap,
    /// Instruction index where execution begins.
    pub entrypoint: i64,
    /// Number of global memory slots reserved at the start of `MEMORY`.
    pub globals: i64,
    /// Number of instructions in the program.
    pub n: i64,
}

impl Program {
    /// Open, map, and validate a bytecode file per the loader algorithm.
    pub fn load(path: &Path) -> Result<Self, LoaderError> {
        let file = File::open(path).map_err(LoaderError::Open)?;
        let size = file.metadata().map_err(LoaderError::SizeQuery)?.len();
        // SAFETY: the mapping is read-only and kept alive for the program's
        // lifetime; we do not rely on the backing file staying unmodified,
        // only on the bytes we read from it being some valid snapshot.
        let mapping = unsafe { Mmap::map(&file) }.map_err(LoaderError::Mmap)?;

        if (size as usize) < HEADER_SIZE || &mapping[0..8] != MAGIC {
            return Err(LoaderError::Magic);
        }

        let body_size = size as usize - HEADER_SIZE;
        if body_size % INSTRUCTION_SIZE != 0 {
            return Err(LoaderError::Truncated);
        }

        let mut header_bytes = [0u8; 8];
        header_bytes.copy_from_slice(&mapping[8..16]);
        let header = i64::from_le_bytes(header_bytes) as u64;
        let globals = (header & 0xFFFF_FFFF) as i64;
        let entrypoint = (header >> 32) as i64;
        let n = (body_size / INSTRUCTION_SIZE) as i64;

        if entrypoint < 0 || entrypoint >= n {
            return Err(LoaderError::Entrypoint);
        }

        if globals < 0 || globals as usize >= MAX_MEM {
            return Err(LoaderError::Globals);
        }

        Ok(Self { mapping, entrypoint, globals, n })
    }

    /// Decode the instruction at index `ip`.
    ///
    /// # Panics
    /// Panics if `ip` is outside `[0, n)`; callers must range-check `ip`
    /// against [`Program::n`] first (the execution engine always does, as
    /// part of its own runtime checks).
    #[must_use]
    pub fn instruction(&self, ip: i64) -> Instruction {
        let start = HEADER_SIZE + ip as usize * INSTRUCTION_SIZE;
        Instruction::decode(&self.mapping[start..start + INSTRUCTION_SIZE])
    }
}
