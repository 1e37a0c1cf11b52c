//! Scripted input timelines
//!
//! A script is a JSON array of segments, each holding a set of keys for a
//! number of frames:
//!
//! ```json
//! [
//!   { "frames": 60 },
//!   { "frames": 30, "charge": true },
//!   { "frames": 20, "right": true },
//!   { "frames": 1, "restart": true }
//! ]
//! ```
//!
//! Restart fires once, on the first frame of its segment.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sim::TickInput;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Segment {
    pub frames: u32,
    pub left: bool,
    pub right: bool,
    pub charge: bool,
    pub restart: bool,
}

impl Segment {
    fn input(&self, frame: u32) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            charge: self.charge,
            restart: self.restart && frame == 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputScript {
    pub segments: Vec<Segment>,
}

impl InputScript {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let script = serde_json::from_str(&json).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded input script from {}", path.display());
        Ok(script)
    }

    /// A short run over the first stretch of the course
    pub fn demo() -> Self {
        let seg = |frames, left, right, charge| Segment {
            frames,
            left,
            right,
            charge,
            restart: false,
        };
        Self {
            segments: vec![
                seg(60, false, false, false),
                seg(40, false, false, true),
                seg(20, false, true, false),
                seg(45, false, true, true),
                seg(30, false, false, false),
                seg(45, false, true, true),
                seg(20, true, false, false),
                seg(60, false, false, false),
            ],
        }
    }

    pub fn total_frames(&self) -> u64 {
        self.segments.iter().map(|s| u64::from(s.frames)).sum()
    }

    /// One input per frame, in order
    pub fn inputs(&self) -> impl Iterator<Item = TickInput> + '_ {
        self.segments
            .iter()
            .flat_map(|seg| (0..seg.frames).map(move |frame| seg.input(frame)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_defaults() {
        let script = InputScript::from_json_str(
            r#"[{ "frames": 2 }, { "frames": 3, "charge": true }, { "frames": 2, "restart": true }]"#,
        )
        .unwrap();
        assert_eq!(script.segments.len(), 3);
        assert_eq!(script.total_frames(), 7);

        let inputs: Vec<_> = script.inputs().collect();
        assert_eq!(inputs.len(), 7);
        assert_eq!(inputs[0], TickInput::default());
        assert!(inputs[2].charge && inputs[4].charge);
        assert!(inputs[5].restart);
        assert!(!inputs[6].restart);
    }

    #[test]
    fn test_rejects_non_array() {
        assert!(InputScript::from_json_str(r#"{ "frames": 2 }"#).is_err());
    }

    #[test]
    fn test_demo_is_nonempty() {
        let demo = InputScript::demo();
        assert!(demo.total_frames() > 0);
        assert!(demo.inputs().any(|i| i.charge));
    }
}
