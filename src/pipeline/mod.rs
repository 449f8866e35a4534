//! Pipeline components: discovery, extraction workers, row transport,
//! aggregating writer, archival.

pub mod archive;
pub mod context;
pub mod discover;
pub mod orchestrator;
pub mod reader;
pub mod writer;

pub use archive::archive_inputs;
pub use context::{PipelineChannels, ROW_CHANNEL_CAP, create_pipeline_channels};
pub use discover::discover_inputs;
pub use orchestrator::run_pipeline;
pub use reader::spawn_readers;
pub use writer::{create_output, resolve_output_path, spawn_writer};
