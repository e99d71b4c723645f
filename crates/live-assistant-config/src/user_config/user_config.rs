//! The per-user configuration snapshot shared by the frontend and backend.
//!
//! Construction is permissive: every known key is looked up by exact name,
//! unknown keys are dropped, and anything missing stays unset. The only
//! failure is text that does not parse into a key/value mapping.

use crate::{
    FormatError, FormatResult,
    user_config::{
        ASSISTANT_MEMORY_SIZE, ASSISTANT_NAME, CLEANUP_INTERVAL, FIRST_START, MAX_SPEECH_RATE,
        MAX_USER_DATA_LEN, MAX_VOLUME, MIN_SPEECH_RATE, MIN_VOLUME, ROOM_DESCRIPTION,
        ROOM_ID_CODE, SPEECH_RATE, USE_LLM_REPLAY, VOLUME, read_field, value_kind, write_field,
    },
};

use std::{fmt, panic::Location, str::FromStr};

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

/// User configuration record.
///
/// `None` marks a field the source did not provide (or provided with the
/// wrong JSON type). It is never replaced with a default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserConfig {
    /// Identity code of the live room.
    pub room_id_code: Option<String>,
    /// Free-form description of the room and its host.
    pub room_description: Option<String>,
    /// Display name of the assistant.
    pub assistant_name: Option<String>,
    /// Upper bound on stored per-user data.
    pub max_user_data_len: Option<i64>,
    /// How often inactive user data is cleaned up.
    pub cleanup_interval: Option<i64>,
    /// Playback volume.
    pub volume: Option<f64>,
    /// Broadcast speech rate.
    pub speech_rate: Option<f64>,
    /// Capacity of the assistant's conversational memory.
    pub assistant_memory_size: Option<i64>,
    /// Whether replies are generated by the LLM.
    pub use_llm_replay: Option<bool>,
    /// Whether this is the first launch.
    pub first_start: Option<bool>,
}

impl UserConfig {
    /// Convenience constructor, equivalent to [`UserConfig::from_mapping`].
    ///
    /// An omitted source is `UserConfig::default()`, which is the same as
    /// building from an empty mapping.
    pub fn create_from(mapping: &Map<String, Value>) -> Self {
        Self::from_mapping(mapping)
    }

    /// Build a record from an already-parsed mapping.
    ///
    /// Never fails. Extra keys are ignored; missing, `null` or mistyped
    /// values leave the field unset.
    pub fn from_mapping(mapping: &Map<String, Value>) -> Self {
        Self {
            room_id_code: read_field(mapping, ROOM_ID_CODE),
            room_description: read_field(mapping, ROOM_DESCRIPTION),
            assistant_name: read_field(mapping, ASSISTANT_NAME),
            max_user_data_len: read_field(mapping, MAX_USER_DATA_LEN),
            cleanup_interval: read_field(mapping, CLEANUP_INTERVAL),
            volume: read_field(mapping, VOLUME),
            speech_rate: read_field(mapping, SPEECH_RATE),
            assistant_memory_size: read_field(mapping, ASSISTANT_MEMORY_SIZE),
            use_llm_replay: read_field(mapping, USE_LLM_REPLAY),
            first_start: read_field(mapping, FIRST_START),
        }
    }

    /// Parse serialized JSON text into a record.
    ///
    /// Fails with [`FormatError::InvalidSyntax`] for malformed text and
    /// [`FormatError::NotAMapping`] when the top level is not an object.
    #[track_caller]
    #[instrument(skip(text), fields(text_len = text.len()))]
    pub fn parse_from_text(text: &str) -> FormatResult<Self> {
        let value: Value = serde_json::from_str(text)?;

        match value {
            Value::Object(mapping) => {
                let config = Self::from_mapping(&mapping);
                debug!(
                    keys = mapping.len(),
                    unset = config.unset_count(),
                    "User config parsed"
                );
                Ok(config)
            }
            other => Err(FormatError::NotAMapping {
                found: value_kind(&other),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// The set fields as a mapping keyed by their wire names.
    ///
    /// Unset fields are omitted rather than written as `null`.
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut mapping = Map::new();
        write_field(&mut mapping, ROOM_ID_CODE, &self.room_id_code);
        write_field(&mut mapping, ROOM_DESCRIPTION, &self.room_description);
        write_field(&mut mapping, ASSISTANT_NAME, &self.assistant_name);
        write_field(&mut mapping, MAX_USER_DATA_LEN, &self.max_user_data_len);
        write_field(&mut mapping, CLEANUP_INTERVAL, &self.cleanup_interval);
        write_field(&mut mapping, VOLUME, &self.volume);
        write_field(&mut mapping, SPEECH_RATE, &self.speech_rate);
        write_field(&mut mapping, ASSISTANT_MEMORY_SIZE, &self.assistant_memory_size);
        write_field(&mut mapping, USE_LLM_REPLAY, &self.use_llm_replay);
        write_field(&mut mapping, FIRST_START, &self.first_start);
        mapping
    }

    /// Volume bounded to `[MIN_VOLUME, MAX_VOLUME]`.
    ///
    /// Read-side view only; the stored value is left as received.
    pub fn effective_volume(&self) -> Option<f64> {
        self.volume.map(|volume| volume.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    /// Speech rate bounded to `[MIN_SPEECH_RATE, MAX_SPEECH_RATE]`.
    pub fn effective_speech_rate(&self) -> Option<f64> {
        self.speech_rate
            .map(|rate| rate.clamp(MIN_SPEECH_RATE, MAX_SPEECH_RATE))
    }

    fn unset_count(&self) -> usize {
        [
            self.room_id_code.is_none(),
            self.room_description.is_none(),
            self.assistant_name.is_none(),
            self.max_user_data_len.is_none(),
            self.cleanup_interval.is_none(),
            self.volume.is_none(),
            self.speech_rate.is_none(),
            self.assistant_memory_size.is_none(),
            self.use_llm_replay.is_none(),
            self.first_start.is_none(),
        ]
        .into_iter()
        .filter(|unset| *unset)
        .count()
    }
}

impl FromStr for UserConfig {
    type Err = FormatError;

    #[track_caller]
    fn from_str(text: &str) -> FormatResult<Self> {
        Self::parse_from_text(text)
    }
}

impl fmt::Display for UserConfig {
    /// Compact JSON text of the set fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.to_mapping()))
    }
}

impl Serialize for UserConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_mapping().serialize(serializer)
    }
}

// Deserializing goes through the same permissive lookup as `from_mapping`,
// so transports that use serde directly see identical behaviour.
impl<'de> Deserialize<'de> for UserConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mapping = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_mapping(&mapping))
    }
}
