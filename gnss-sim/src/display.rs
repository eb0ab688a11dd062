use std::fmt::{self, Display, Formatter};

use nmea_builder::{Field, SentenceBuilder, SentenceType};

const UNSET: &str = "--";

/// Human readable view of the values currently held by a builder.
pub struct StatusScreen<'a>(pub &'a SentenceBuilder);

fn or_unset<T>(value: Option<T>, show: impl FnOnce(T) -> String) -> String {
    value.map_or(UNSET.into(), show)
}

fn quality_label(quality: u8) -> &'static str {
    match quality {
        0 => "invalid",
        1 => "SPS",
        2 => "DGPS",
        4 => "RTK fixed",
        5 => "RTK float",
        _ => "unknown",
    }
}

fn hemisphere(value: f64, positive: char, negative: char) -> (f64, char) {
    if value >= 0.0 {
        (value, positive)
    } else {
        (-value, negative)
    }
}

impl Display for StatusScreen<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let builder = self.0;
        let rows = [
            (
                "UTC",
                or_unset(builder.utc(), |utc| {
                    format!("{:02}:{:02}:{:05.2}", utc.hour, utc.minute, utc.second)
                }),
            ),
            (
                "Date",
                or_unset(builder.date(), |date| {
                    format!("{:04}-{:02}-{:02}", date.year, date.month, date.day)
                }),
            ),
            (
                "Position",
                or_unset(builder.position(), |position| {
                    let (latitude, ns) = hemisphere(position.latitude, 'N', 'S');
                    let (longitude, ew) = hemisphere(position.longitude, 'E', 'W');
                    format!("{:.6} {} {:.6} {}", latitude, ns, longitude, ew)
                }),
            ),
            (
                "Quality",
                or_unset(builder.quality(), |quality| {
                    format!("{} ({})", quality, quality_label(quality))
                }),
            ),
            (
                "Satellites",
                or_unset(builder.num_satellites(), |n| n.to_string()),
            ),
            ("HDOP", or_unset(builder.hdop(), |hdop| format!("{:.1}", hdop))),
            (
                "Altitude",
                or_unset(builder.altitude(), |altitude| format!("{:.3} m", altitude)),
            ),
            (
                "Geoid",
                or_unset(builder.geoid_height(), |geoid| format!("{:.3} m", geoid)),
            ),
            (
                "DGPS",
                or_unset(builder.dgps(), |dgps| {
                    format!("age {:.1} s, station {:04}", dgps.age, dgps.station_id)
                }),
            ),
            (
                "Heading",
                or_unset(builder.heading(), |heading| format!("{:.3} deg", heading)),
            ),
            ("Status", or_unset(builder.status(), |status| status.to_string())),
            (
                "Speed",
                or_unset(builder.speed_knots(), |speed| format!("{:.1} kn", speed)),
            ),
            (
                "Course",
                or_unset(builder.course(), |course| format!("{:.1} deg", course)),
            ),
            (
                "Mag. var.",
                or_unset(builder.magnetic_variation(), |variation| {
                    let (variation, ew) = hemisphere(variation as f64, 'E', 'W');
                    format!("{:.1} {}", variation, ew)
                }),
            ),
            ("Mode", or_unset(builder.mode_indicator(), |mode| mode.to_string())),
        ];

        for (label, value) in rows {
            writeln!(f, "{:<11}{}", label, value)?;
        }

        writeln!(f)?;
        for sentence in SentenceType::ALL {
            let missing: Vec<&str> = sentence
                .required_fields()
                .iter()
                .filter(|field| !builder.is_set(**field))
                .map(Field::name)
                .collect();
            if missing.is_empty() {
                writeln!(f, "{:<11}ready", sentence.id())?;
            } else {
                writeln!(f, "{:<11}missing {}", sentence.id(), missing.join(", "))?;
            }
        }
        Ok(())
    }
}
