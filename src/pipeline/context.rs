//! Channels shared by the reader pool and the writer.

use crossbeam_channel::{Receiver, Sender, bounded};

use crate::types::{InputFile, Row};

/// Row transport capacity. A full channel suspends the sending reader
/// (backpressure) so extraction can never outrun the writer unboundedly.
pub const ROW_CHANNEL_CAP: usize = 1024;

/// Channels for one run. The file channel doubles as the claim mechanism:
/// it is pre-filled with every descriptor and closed before readers start,
/// so each descriptor is received (claimed) by exactly one reader.
pub struct PipelineChannels {
    pub file_tx: Sender<InputFile>,
    pub file_rx: Receiver<InputFile>,
    pub row_tx: Sender<Row>,
    pub row_rx: Receiver<Row>,
}

/// Create the file-claim and row channels for `input_count` descriptors.
/// The file channel holds the whole input set, so filling it never blocks.
pub fn create_pipeline_channels(input_count: usize) -> PipelineChannels {
    let (file_tx, file_rx) = bounded::<InputFile>(input_count.max(1));
    let (row_tx, row_rx) = bounded::<Row>(ROW_CHANNEL_CAP);

    PipelineChannels {
        file_tx,
        file_rx,
        row_tx,
        row_rx,
    }
}
