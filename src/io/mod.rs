pub mod output;
pub mod walker;

pub use output::{
    create_writer, write_json_report, write_terminal_summary, NullSink, OutputFormat, ScoreSink,
    StreamSink,
};
pub use walker::{resolve_patterns, FileWalker};
