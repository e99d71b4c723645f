//! Live-assistant user configuration.
//!
//! Typed view of the per-user configuration record exchanged between the
//! frontend and the backend. Records are built from JSON text or from an
//! already-parsed mapping; missing fields stay unset and unknown keys are
//! ignored.
//!
//! # Example
//!
//! ```
//! use live_assistant_config::{FormatResult, UserConfig};
//!
//! fn main() -> FormatResult<()> {
//!     let config = UserConfig::parse_from_text(
//!         r#"{"room_id_code":"R1","volume":0.8,"use_llm_replay":true}"#,
//!     )?;
//!
//!     assert_eq!(config.room_id_code.as_deref(), Some("R1"));
//!     assert_eq!(config.assistant_name, None);
//!     Ok(())
//! }
//! ```

mod error;
mod user_config;

pub use {
    error::{FormatError, Result as FormatResult},
    user_config::{
        FIELD_NAMES, MAX_SPEECH_RATE, MAX_VOLUME, MIN_SPEECH_RATE, MIN_VOLUME, UserConfig,
    },
};
