//! Platform-agnostic core of the pointer trail: spring-chain physics, the hue
//! oscillator, curve geometry, occlusion filtering and the activation/frame
//! lifecycle. Nothing here touches the DOM; the web front-end plugs in through
//! the [`Surface`], [`ElementQuery`] and [`FrameHost`] traits.

pub mod activation;
pub mod chain;
pub mod config;
pub mod effect;
pub mod error;
pub mod occlusion;
pub mod oscillator;
pub mod path;
pub mod runtime;
pub mod scheduler;
pub mod surface;

pub use activation::*;
pub use chain::*;
pub use config::*;
pub use effect::*;
pub use error::*;
pub use occlusion::*;
pub use oscillator::*;
pub use path::*;
pub use runtime::*;
pub use scheduler::*;
pub use surface::*;
