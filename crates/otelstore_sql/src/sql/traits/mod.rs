pub mod log;
pub mod trace;

pub use log::LogSqlLogic;
pub use trace::TraceSqlLogic;
