mod field;
#[allow(clippy::module_inception)]
mod user_config;

pub(crate) use field::{read_field, value_kind, write_field};

pub use user_config::UserConfig;

pub(crate) const ROOM_ID_CODE: &str = "room_id_code";
pub(crate) const ROOM_DESCRIPTION: &str = "room_description";
pub(crate) const ASSISTANT_NAME: &str = "assistant_name";
pub(crate) const MAX_USER_DATA_LEN: &str = "max_user_data_len";
pub(crate) const CLEANUP_INTERVAL: &str = "cleanup_interval";
pub(crate) const VOLUME: &str = "volume";
pub(crate) const SPEECH_RATE: &str = "speech_rate";
pub(crate) const ASSISTANT_MEMORY_SIZE: &str = "assistant_memory_size";
pub(crate) const USE_LLM_REPLAY: &str = "use_llm_replay";
pub(crate) const FIRST_START: &str = "first_start";

/// Wire keys of every `UserConfig` field, in declaration order.
pub const FIELD_NAMES: [&str; 10] = [
    ROOM_ID_CODE,
    ROOM_DESCRIPTION,
    ASSISTANT_NAME,
    MAX_USER_DATA_LEN,
    CLEANUP_INTERVAL,
    VOLUME,
    SPEECH_RATE,
    ASSISTANT_MEMORY_SIZE,
    USE_LLM_REPLAY,
    FIRST_START,
];

/// Lowest volume the audio output accepts.
pub const MIN_VOLUME: f64 = 1.0;
/// Highest volume the audio output accepts.
pub const MAX_VOLUME: f64 = 100.0;

/// Slowest speech rate (0.5x playback).
pub const MIN_SPEECH_RATE: f64 = -50.0;
/// Fastest speech rate (2.0x playback).
pub const MAX_SPEECH_RATE: f64 = 100.0;
