// src/platforms/mod.rs
// =============================================================================
// The Platform Registry: which sites we check and how to build profile URLs.
//
// Submodules:
// - builtin: the static table of platforms shipped with the tool
// - registry: PlatformSpec / PlatformRegistry types and their operations
// =============================================================================

mod builtin;
mod registry;

pub use registry::{PlatformRegistry, PlatformSpec, USERNAME_PLACEHOLDER};
