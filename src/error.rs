// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Error taxonomy for the `nox` virtual machine.
//!
//! Every fatal condition the VM can encounter has exactly one variant here,
//! grouped by the subsystem that detects it. The `Display` impl of each
//! variant produces the diagnostic line the VM writes to standard output
//! before exiting with code -1 — there is no separate formatting step.

use thiserror::Error;

/// CLI argument errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    /// Wrong number of positional arguments.
    #[error("Usage: vm <filename>")]
    WrongArgCount,
}

/// Errors raised while opening and validating a bytecode file.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The file could not be opened.
    #[error("load error: open: {0}")]
    Open(#[source] std::io::Error),
    /// The file's size could not be queried.
    #[error("load error: size query: {0}")]
    SizeQuery(#[source] std::io::Error),
    /// The file could not be mapped into memory.
    #[error("load error: mmap: {0}")]
    Mmap(#[source] std::io::Error),
    /// The file is too short or does not start with the magic bytes.
    #[error("load error: magic")]
    Magic,
    /// The instruction stream is not a whole number of 16-byte instructions.
    #[error("load error: truncated")]
    Truncated,
    /// The header's entrypoint is not a valid instruction index.
    #[error("load error: entrypoint")]
    Entrypoint,
    /// The header's `globals` count does not fit inside `MEMORY`.
    #[error("load error: globals")]
    Globals,
}

/// Errors raised by the dynamic list object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    /// `get`/`set` index outside `[0, size)`.
    #[error("list error: index {index} out of range (size {size})")]
    IndexOutOfRange {
        /// The offending index.
        index: i64,
        /// The list's current size.
        size: i64,
    },
    /// A slice bound was negative and not the `-1` sentinel.
    #[error("list error: invalid negative slice bound {bound}")]
    InvalidSliceBound {
        /// The offending bound.
        bound: i64,
    },
    /// A slice bound exceeded the list's size.
    #[error("list error: slice bound {bound} exceeds size {size}")]
    SliceOutOfRange {
        /// The offending bound.
        bound: i64,
        /// The list's current size.
        size: i64,
    },
    /// Reference to an unknown or already-freed list handle.
    #[error("list error: invalid handle {0}")]
    InvalidHandle(i64),
}

/// Errors raised while executing a loaded program.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    /// The byte at `ip` is not one of the defined opcodes.
    #[error("runtime error at ip={ip}: invalid opcode {opcode:#04x}")]
    InvalidOpcode {
        /// Instruction pointer at the time of the fault.
        ip: i64,
        /// The offending opcode byte.
        opcode: u8,
    },
    /// `ip` ran off either end of the instruction stream.
    #[error("runtime error at ip={ip}: ip out of bounds")]
    IpOutOfBounds {
        /// Instruction pointer at the time of the fault.
        ip: i64,
    },
    /// `LEAVE` was reached.
    #[error("runtime error at ip={ip}: LEAVE reached")]
    Leave {
        /// Instruction pointer at the time of the fault.
        ip: i64,
    },
    /// Operand stack push while already at capacity.
    #[error("runtime error at ip={ip}: operand stack overflow")]
    StackOverflow {
        /// Instruction pointer at the time of the fault.
        ip: i64,
    },
    /// Operand stack pop while empty.
    #[error("runtime error at ip={ip}: operand stack underflow")]
    StackUnderflow {
        /// Instruction pointer at the time of the fault.
        ip: i64,
    },
    /// Call stack push while already at capacity.
    #[error("runtime error at ip={ip}: call stack overflow")]
    CallStackOverflow {
        /// Instruction pointer at the time of the fault.
        ip: i64,
    },
    /// Call stack pop while empty.
    #[error("runtime error at ip={ip}: call stack underflow")]
    CallStackUnderflow {
        /// Instruction pointer at the time of the fault.
        ip: i64,
    },
    /// Frame-size stack push while already at capacity.
    #[error("runtime error at ip={ip}: frame-size stack overflow")]
    FrameStackOverflow {
        /// Instruction pointer at the time of the fault.
        ip: i64,
    },
    /// Frame-size stack pop while empty.
    #[error("runtime error at ip={ip}: frame-size stack underflow")]
    FrameStackUnderflow {
        /// Instruction pointer at the time of the fault.
        ip: i64,
    },
    /// `LOAD`/`STORE` offset outside the current frame.
    #[error("runtime error at ip={ip}: local address {addr} out of range")]
    LocalOutOfRange {
        /// Instruction pointer at the time of the fault.
        ip: i64,
        /// The offending address.
        addr: i64,
    },
    /// `GLOAD`/`GSTORE` offset outside `[0, globals)`.
    #[error("runtime error at ip={ip}: global address {addr} out of range")]
    GlobalOutOfRange {
        /// Instruction pointer at the time of the fault.
        ip: i64,
        /// The offending address.
        addr: i64,
    },
    /// `mem` would leave `[globals, MAX_MEM)`.
    #[error("runtime error at ip={ip}: memory exhausted")]
    MemoryExhausted {
        /// Instruction pointer at the time of the fault.
        ip: i64,
    },
    /// `JMP`/`JZ`/`JNZ`/`CALL` target outside `[0, n)`.
    #[error("runtime error at ip={ip}: jump target {target} out of range")]
    JumpTargetOutOfRange {
        /// Instruction pointer at the time of the fault.
        ip: i64,
        /// The offending target.
        target: i64,
    },
    /// `CALL` target instruction is not `ENTER`.
    #[error("runtime error at ip={ip}: call target {target} is not ENTER")]
    CallTargetNotEnter {
        /// Instruction pointer at the time of the fault.
        ip: i64,
        /// The offending target.
        target: i64,
    },
    /// `DIV`/`MOD` with a zero divisor.
    #[error("runtime error at ip={ip}: division by zero")]
    DivisionByZero {
        /// Instruction pointer at the time of the fault.
        ip: i64,
    },
    /// `SYSCALL` argument is not a known syscall number.
    #[error("runtime error at ip={ip}: unknown syscall {number}")]
    UnknownSyscall {
        /// Instruction pointer at the time of the fault.
        ip: i64,
        /// The offending syscall number.
        number: i64,
    },
    /// A list syscall failed.
    #[error("runtime error at ip={ip}: {source}")]
    List {
        /// Instruction pointer at the time of the fault.
        ip: i64,
        /// The underlying list error.
        #[source]
        source: ListError,
    },
    /// Reading from or writing to the host failed.
    #[error("runtime error at ip={ip}: io error")]
    Io {
        /// Instruction pointer at the time of the fault.
        ip: i64,
    },
    /// `SYS_INPUT` did not see a well-formed decimal integer.
    #[error("runtime error at ip={ip}: malformed integer on input")]
    MalformedInput {
        /// Instruction pointer at the time of the fault.
        ip: i64,
    },
}

/// Top-level error, covering every way the binary entry point can fail.
#[derive(Debug, Error)]
pub enum VmError {
    /// CLI argument parsing failed.
    #[error(transparent)]
    Args(#[from] ArgsError),
    /// Loading the bytecode file failed.
    #[error(transparent)]
    Loader(#[from] LoaderError),
    /// Executing the loaded program faulted.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
