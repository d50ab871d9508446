//! Low-level wgpu plumbing.

pub mod context;

pub use context::GpuContext;
