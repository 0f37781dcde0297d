use state_processing::{BlockProcessingError, SlotProcessingError};
use std::io;
use types::EthSpecId;

macro_rules! easy_from_to {
    ($from: ident, $to: ident) => {
        impl From<$from> for $to {
            fn from(e: $from) -> $to {
                $to::$from(e)
            }
        }
    };
}

#[derive(Debug)]
pub enum Error {
    BlockProcessingError(BlockProcessingError),
    SlotProcessingError(SlotProcessingError),
    /// The config was written for a different preset than the chain runs.
    InconsistentPreset {
        config: EthSpecId,
        chain: EthSpecId,
    },
    /// The config file could not be opened.
    UnableToOpenFile(io::Error),
    /// The config file could not be parsed as YAML.
    UnableToParseFile(serde_yaml::Error),
    /// The config could not be serialized as YAML.
    UnableToEncodeFile(serde_yaml::Error),
    /// The config file could not be created.
    UnableToWriteFile(io::Error),
}

easy_from_to!(BlockProcessingError, Error);
easy_from_to!(SlotProcessingError, Error);
