mod naptr;
mod probe;
mod report;
mod service;
mod validation;

pub use naptr::*;
pub use probe::*;
pub use report::*;
pub use service::*;
pub use validation::*;
