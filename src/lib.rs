pub mod conductance;
pub use self::conductance::{community_conductance, conductance, weighted_conductance};
pub mod coverage;
pub use self::coverage::coverage;
pub mod modularity;
pub use self::modularity::modularity;
pub mod nmi;
pub use self::nmi::nmi;
mod common;
pub use self::common::*;
