//! Result sinks - the append-only log and an in-memory sink

mod file;
mod memory;

pub use file::AppendFileSink;
pub use memory::MemorySink;
