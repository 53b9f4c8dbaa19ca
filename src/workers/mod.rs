pub mod pool;
pub use pool::*;

pub mod summary;
pub use summary::*;

pub mod worker;
pub use worker::*;
