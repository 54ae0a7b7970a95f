//! Platform-independent animation logic. Nothing here touches web APIs, so
//! it builds and tests on the host.

pub mod config;
pub mod constants;
pub mod lens;
pub mod particles;
pub mod pointer;
pub mod scheduler;
pub mod surface;
pub mod ticker;

pub use config::*;
pub use lens::*;
pub use particles::*;
pub use pointer::*;
pub use scheduler::*;
pub use surface::*;
