pub mod bar;
pub mod forecast;
pub mod indicators;
pub mod report;
pub mod signal;

pub use bar::*;
pub use forecast::*;
pub use indicators::*;
pub use report::*;
pub use signal::*;
