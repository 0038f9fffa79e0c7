use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Every mutating gauge operation, as a tagged JSON object.
///
/// `{"command": "set_current", "value": 42}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum GaugeCommand {
    SetCurrent { value: i32 },
    AddDelta { delta: i32 },
    ApplyDeltaPercent { percent: f32 },
    SetMinMax { min: i32, max: i32 },
    SetMin { min: i32 },
    SetMax { max: i32 },
}

/// Snapshot of a gauge handed back after every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeStatus {
    pub name: String,
    pub current: i32,
    pub last_value: i32,
    pub min: i32,
    pub max: i32,
    pub increment: i32,
    pub changed: bool,
    pub initialized: bool,
}

pub fn parse_command(buf: &[u8]) -> anyhow::Result<GaugeCommand> {
    serde_json::from_slice(buf).context("Invalid gauge command")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_current() {
        let cmd = parse_command(br#"{"command": "set_current", "value": -12}"#).unwrap();
        assert_eq!(cmd, GaugeCommand::SetCurrent { value: -12 });
    }

    #[test]
    fn test_parse_set_min_max() {
        let cmd = parse_command(br#"{"command": "set_min_max", "min": 0, "max": 1023}"#).unwrap();
        assert_eq!(cmd, GaugeCommand::SetMinMax { min: 0, max: 1023 });
    }

    #[test]
    fn test_parse_apply_delta_percent() {
        let cmd = parse_command(br#"{"command": "apply_delta_percent", "percent": 12.5}"#).unwrap();
        assert_eq!(cmd, GaugeCommand::ApplyDeltaPercent { percent: 12.5 });
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        let err = parse_command(br#"{"command": "reboot"}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid gauge command"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        assert!(parse_command(br#"{"command": "set_min"}"#).is_err());
    }

    #[test]
    fn test_status_serializes_flat() {
        let status = GaugeStatus {
            name: "servo".to_string(),
            current: 90,
            last_value: 89,
            min: 0,
            max: 180,
            increment: 1,
            changed: true,
            initialized: true,
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["name"], "servo");
        assert_eq!(json["current"], 90);
        assert_eq!(json["changed"], true);
    }
}
