pub mod aggregate;
pub mod emit;
pub mod engine;
pub mod error;
pub mod extract;
pub mod logging;
pub mod model;
pub mod naming;
pub mod origin;
pub mod sink;

pub use aggregate::{Aggregator, OriginBundle};
pub use engine::{HintEngine, RunReport};
pub use error::{HintforgeError, Result};
pub use origin::{Origin, OriginOverrides};
pub use sink::{FsSink, MemorySink};
