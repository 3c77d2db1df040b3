pub mod aggregate;
pub mod interval;
pub mod logic;
pub mod time_context;

pub use logic::Core;
pub use time_context::{Clock, FixedClock, SystemClock, TimeContext};
