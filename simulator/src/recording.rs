use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use solitaire::Move;

/// Writes one JSON document per finished game into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
}

/// What gets persisted for a single game. The move list replays the whole
/// game from the starting position, so the outcome can be re-derived.
#[derive(Serialize, Deserialize)]
pub struct GameRecording {
    pub strategy: String,
    pub moves: Vec<Move>,
    pub pieces_remaining: u32,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self { num: 1, directory })
    }

    pub fn write_game_recording(&mut self, recording: &GameRecording) -> anyhow::Result<()> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(filepath)?);
        serde_json::to_writer_pretty(writer, recording)?;
        self.num += 1;
        Ok(())
    }
}
