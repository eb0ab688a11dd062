use std::str::FromStr;

use anyhow::{anyhow, Result};
use nmea_builder::SentenceBuilder;

/// One builder setter call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldCommand {
    Utc { hour: u8, minute: u8, second: f32 },
    Position { latitude: f64, longitude: f64 },
    Quality(u8),
    NumSatellites(u8),
    Hdop(f32),
    Altitude(f32),
    GeoidHeight(f32),
    Dgps { age: f32, station_id: u16 },
    Heading(f32),
    Status(char),
    SpeedKnots(f32),
    Course(f32),
    Date { day: u8, month: u8, year: u16 },
    MagneticVariation(f32),
    ModeIndicator(char),
}

impl FieldCommand {
    pub fn apply(self, builder: &mut SentenceBuilder) {
        match self {
            FieldCommand::Utc {
                hour,
                minute,
                second,
            } => builder.set_utc(hour, minute, second),
            FieldCommand::Position {
                latitude,
                longitude,
            } => builder.set_position(latitude, longitude),
            FieldCommand::Quality(quality) => builder.set_quality(quality),
            FieldCommand::NumSatellites(num_satellites) => {
                builder.set_num_satellites(num_satellites)
            }
            FieldCommand::Hdop(hdop) => builder.set_hdop(hdop),
            FieldCommand::Altitude(altitude) => builder.set_altitude(altitude),
            FieldCommand::GeoidHeight(geoid_height) => builder.set_geoid_height(geoid_height),
            FieldCommand::Dgps { age, station_id } => builder.set_dgps(age, station_id),
            FieldCommand::Heading(heading) => builder.set_heading(heading),
            FieldCommand::Status(status) => builder.set_status(status),
            FieldCommand::SpeedKnots(speed_knots) => builder.set_speed_knots(speed_knots),
            FieldCommand::Course(course) => builder.set_course(course),
            FieldCommand::Date { day, month, year } => builder.set_date(day, month, year),
            FieldCommand::MagneticVariation(variation) => {
                builder.set_magnetic_variation(variation)
            }
            FieldCommand::ModeIndicator(mode) => builder.set_mode_indicator(mode),
        }
    }
}

fn expect_args(name: &str, args: &[&str], count: usize) -> Result<()> {
    if args.len() != count {
        return Err(anyhow!(
            "{} takes {} value(s), got {}",
            name,
            count,
            args.len()
        ));
    }
    Ok(())
}

fn parse_arg<T>(name: &str, arg: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    arg.parse::<T>()
        .map_err(|e| anyhow!("invalid value {:?} for {}: {}", arg, name, e))
}

/// Parses console input such as `position 35.68114 139.767061` or `quality 4`.
impl FromStr for FieldCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let name = words
            .next()
            .ok_or_else(|| anyhow!("empty command"))?
            .to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        let arity = match name.as_str() {
            "utc" | "date" => 3,
            "position" | "dgps" => 2,
            _ => 1,
        };
        expect_args(&name, &args, arity)?;
        let name = name.as_str();

        Ok(match name {
            "utc" => FieldCommand::Utc {
                hour: parse_arg(name, args[0])?,
                minute: parse_arg(name, args[1])?,
                second: parse_arg(name, args[2])?,
            },
            "position" => FieldCommand::Position {
                latitude: parse_arg(name, args[0])?,
                longitude: parse_arg(name, args[1])?,
            },
            "quality" => FieldCommand::Quality(parse_arg(name, args[0])?),
            "num_satellites" | "sats" => FieldCommand::NumSatellites(parse_arg(name, args[0])?),
            "hdop" => FieldCommand::Hdop(parse_arg(name, args[0])?),
            "altitude" | "alt" => FieldCommand::Altitude(parse_arg(name, args[0])?),
            "geoid_height" | "geoid" => FieldCommand::GeoidHeight(parse_arg(name, args[0])?),
            "dgps" => FieldCommand::Dgps {
                age: parse_arg(name, args[0])?,
                station_id: parse_arg(name, args[1])?,
            },
            "heading" => FieldCommand::Heading(parse_arg(name, args[0])?),
            "status" => FieldCommand::Status(parse_arg(name, args[0])?),
            "speed_knots" | "speed" => FieldCommand::SpeedKnots(parse_arg(name, args[0])?),
            "course" => FieldCommand::Course(parse_arg(name, args[0])?),
            "date" => FieldCommand::Date {
                day: parse_arg(name, args[0])?,
                month: parse_arg(name, args[1])?,
                year: parse_arg(name, args[2])?,
            },
            "magnetic_variation" | "magvar" => {
                FieldCommand::MagneticVariation(parse_arg(name, args[0])?)
            }
            "mode_indicator" | "mode" => FieldCommand::ModeIndicator(parse_arg(name, args[0])?),
            _ => return Err(anyhow!("unknown field {:?}", name)),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_group_commands() {
        assert_eq!(
            "utc 0 34 14.30".parse::<FieldCommand>().unwrap(),
            FieldCommand::Utc {
                hour: 0,
                minute: 34,
                second: 14.30
            }
        );
        assert_eq!(
            "position 35.68114 -139.767061".parse::<FieldCommand>().unwrap(),
            FieldCommand::Position {
                latitude: 35.68114,
                longitude: -139.767061
            }
        );
        assert_eq!(
            "DGPS 1.3 1686".parse::<FieldCommand>().unwrap(),
            FieldCommand::Dgps {
                age: 1.3,
                station_id: 1686
            }
        );
    }

    #[test]
    fn parse_aliases() {
        assert_eq!(
            "sats 9".parse::<FieldCommand>().unwrap(),
            FieldCommand::NumSatellites(9)
        );
        assert_eq!(
            "magvar -3.5".parse::<FieldCommand>().unwrap(),
            FieldCommand::MagneticVariation(-3.5)
        );
        assert_eq!(
            "mode D".parse::<FieldCommand>().unwrap(),
            FieldCommand::ModeIndicator('D')
        );
    }

    #[test]
    fn reject_bad_input() {
        assert!("".parse::<FieldCommand>().is_err());
        assert!("quality".parse::<FieldCommand>().is_err());
        assert!("quality four".parse::<FieldCommand>().is_err());
        assert!("position 1.0".parse::<FieldCommand>().is_err());
        assert!("status AV".parse::<FieldCommand>().is_err());
        assert!("pdop 1.0".parse::<FieldCommand>().is_err());
    }

    #[test]
    fn apply_sets_builder_field() {
        let mut builder = SentenceBuilder::new();
        FieldCommand::Heading(62.528).apply(&mut builder);
        assert_eq!(builder.heading(), Some(62.528));
        assert_eq!(
            builder.render_hdt().unwrap().as_str(),
            "$GPHDT,62.528,T*0E"
        );
    }
}
