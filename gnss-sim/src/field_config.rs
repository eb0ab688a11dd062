use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use anyhow::Result;
use directories::ProjectDirs;
use log::info;
use serde::{Deserialize, Serialize};

use crate::field_command::FieldCommand;

/// Field values as stored on disk. Every field is optional, absent ones stay unset.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FieldConfigSerde {
    pub utc: Option<UtcSerde>,
    pub position: Option<PositionSerde>,
    pub quality: Option<u8>,
    pub num_satellites: Option<u8>,
    pub hdop: Option<f32>,
    pub altitude: Option<f32>,
    pub geoid_height: Option<f32>,
    pub dgps: Option<DgpsSerde>,
    pub heading: Option<f32>,
    pub status: Option<char>,
    pub speed_knots: Option<f32>,
    pub course: Option<f32>,
    pub date: Option<DateSerde>,
    pub magnetic_variation: Option<f32>,
    pub mode_indicator: Option<char>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct UtcSerde {
    pub hour: u8,
    pub minute: u8,
    pub second: f32,
}

impl Into<FieldCommand> for UtcSerde {
    fn into(self) -> FieldCommand {
        FieldCommand::Utc {
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PositionSerde {
    pub latitude: f64,
    pub longitude: f64,
}

impl Into<FieldCommand> for PositionSerde {
    fn into(self) -> FieldCommand {
        FieldCommand::Position {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DgpsSerde {
    pub age: f32,
    pub station_id: u16,
}

impl Into<FieldCommand> for DgpsSerde {
    fn into(self) -> FieldCommand {
        FieldCommand::Dgps {
            age: self.age,
            station_id: self.station_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DateSerde {
    pub day: u8,
    pub month: u8,
    pub year: u16,
}

impl Into<FieldCommand> for DateSerde {
    fn into(self) -> FieldCommand {
        FieldCommand::Date {
            day: self.day,
            month: self.month,
            year: self.year,
        }
    }
}

impl FieldConfigSerde {
    /// Values the simulator falls back to when no config file is found.
    pub fn builtin() -> Self {
        Self {
            utc: Some(UtcSerde {
                hour: 0,
                minute: 34,
                second: 14.30,
            }),
            position: Some(PositionSerde {
                latitude: 35.68114,
                longitude: 139.767061,
            }),
            quality: Some(4),
            num_satellites: Some(14),
            hdop: Some(0.7),
            altitude: Some(12.635),
            geoid_height: Some(34.091),
            dgps: Some(DgpsSerde {
                age: 1.3,
                station_id: 1686,
            }),
            heading: Some(62.528),
            status: Some('A'),
            speed_knots: Some(0.0),
            course: Some(0.0),
            date: Some(DateSerde {
                day: 14,
                month: 2,
                year: 2026,
            }),
            magnetic_variation: None,
            mode_indicator: Some('A'),
        }
    }

    /// Setter calls for every present field, in declaration order.
    pub fn commands(&self) -> Vec<FieldCommand> {
        let commands: [Option<FieldCommand>; 15] = [
            self.utc.map(Into::into),
            self.position.map(Into::into),
            self.quality.map(FieldCommand::Quality),
            self.num_satellites.map(FieldCommand::NumSatellites),
            self.hdop.map(FieldCommand::Hdop),
            self.altitude.map(FieldCommand::Altitude),
            self.geoid_height.map(FieldCommand::GeoidHeight),
            self.dgps.map(Into::into),
            self.heading.map(FieldCommand::Heading),
            self.status.map(FieldCommand::Status),
            self.speed_knots.map(FieldCommand::SpeedKnots),
            self.course.map(FieldCommand::Course),
            self.date.map(Into::into),
            self.magnetic_variation.map(FieldCommand::MagneticVariation),
            self.mode_indicator.map(FieldCommand::ModeIndicator),
        ];
        commands.into_iter().flatten().collect()
    }
}

pub fn read_field_config<P: AsRef<Path>>(path: P) -> Result<FieldConfigSerde> {
    let config = read_to_string(path)?;
    let config: FieldConfigSerde = serde_json::from_str(&config)?;
    Ok(config)
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gnss-sim").map(|dirs| dirs.config_dir().join("fields.json"))
}

/// Reads `path` if given, then the per-user `fields.json`, then falls back to the built-in values.
pub fn load_field_config(path: Option<&Path>) -> Result<FieldConfigSerde> {
    if let Some(path) = path {
        info!("Loading fields from {}", path.display());
        return read_field_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            info!("Loading fields from {}", path.display());
            read_field_config(path)
        }
        _ => {
            info!("No field config found, using built-in values");
            Ok(FieldConfigSerde::builtin())
        }
    }
}
