//! small self-contained helpers for game scripting: a seeded fisher-yates
//! shuffler, collection and string-casting utilities, a per-frame job
//! budget, activation propagation over a scene hierarchy, and a couple of
//! plane-projection and connectivity odds and ends

pub mod cast;
pub mod collection;
pub mod frame;
pub mod scene;
pub mod shuffle;

// the probe is the only thing in the crate that talks to the outside world,
// and the only reason for the http client dependency
#[cfg(feature = "net")]
pub mod net;

// the projections are in glam's vocabulary. nothing else in the crate needs
// a math crate, so it stays optional
#[cfg(feature = "glam")]
pub mod vector;
