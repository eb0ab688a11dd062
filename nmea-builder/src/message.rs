/// UTC time of day, no date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UtcTime {
    pub hour: u8,
    pub minute: u8,
    /// Seconds with fraction (0.00-59.99)
    pub second: f32,
}

/// Position in decimal degrees. Positive latitude is north, positive longitude is east.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// Differential GPS correction metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dgps {
    /// Age of the differential data [s]
    pub age: f32,
    pub station_id: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Date {
    pub day: u8,
    pub month: u8,
    /// Full year, e.g. 2026
    pub year: u16,
}

/// Every value the builder holds. Grouped values (utc, position, dgps, date) count as one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Utc,
    Position,
    Quality,
    NumSatellites,
    Hdop,
    Altitude,
    GeoidHeight,
    Dgps,
    Heading,
    Status,
    SpeedKnots,
    Course,
    Date,
    MagneticVariation,
    ModeIndicator,
}

impl Field {
    pub const ALL: [Field; 15] = [
        Field::Utc,
        Field::Position,
        Field::Quality,
        Field::NumSatellites,
        Field::Hdop,
        Field::Altitude,
        Field::GeoidHeight,
        Field::Dgps,
        Field::Heading,
        Field::Status,
        Field::SpeedKnots,
        Field::Course,
        Field::Date,
        Field::MagneticVariation,
        Field::ModeIndicator,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Utc => "utc",
            Field::Position => "position",
            Field::Quality => "quality",
            Field::NumSatellites => "num_satellites",
            Field::Hdop => "hdop",
            Field::Altitude => "altitude",
            Field::GeoidHeight => "geoid_height",
            Field::Dgps => "dgps",
            Field::Heading => "heading",
            Field::Status => "status",
            Field::SpeedKnots => "speed_knots",
            Field::Course => "course",
            Field::Date => "date",
            Field::MagneticVariation => "magnetic_variation",
            Field::ModeIndicator => "mode_indicator",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sentence types the builder can render. The talker is always `GP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SentenceType {
    /// Fix data
    Gga,
    /// True heading
    Hdt,
    /// Recommended minimum navigation data
    Rmc,
}

impl SentenceType {
    pub const ALL: [SentenceType; 3] = [SentenceType::Gga, SentenceType::Hdt, SentenceType::Rmc];

    /// Talker + sentence identifier, the first field of the payload.
    pub fn id(&self) -> &'static str {
        match self {
            SentenceType::Gga => "GPGGA",
            SentenceType::Hdt => "GPHDT",
            SentenceType::Rmc => "GPRMC",
        }
    }

    /// Fields that must be set before rendering, in the order they are checked.
    pub fn required_fields(&self) -> &'static [Field] {
        match self {
            SentenceType::Gga => &[
                Field::Utc,
                Field::Position,
                Field::Quality,
                Field::NumSatellites,
                Field::Hdop,
                Field::Altitude,
                Field::GeoidHeight,
                Field::Dgps,
            ],
            SentenceType::Hdt => &[Field::Heading],
            SentenceType::Rmc => &[
                Field::Utc,
                Field::Status,
                Field::Position,
                Field::SpeedKnots,
                Field::Course,
                Field::Date,
                Field::ModeIndicator,
            ],
        }
    }

    /// Accepts `gga` or `GPGGA` style names, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        SentenceType::ALL.into_iter().find(|sentence| {
            let id = sentence.id();
            name.eq_ignore_ascii_case(id) || name.eq_ignore_ascii_case(&id[2..])
        })
    }
}

impl core::fmt::Display for SentenceType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_names() {
        assert_eq!(SentenceType::from_name("gga"), Some(SentenceType::Gga));
        assert_eq!(SentenceType::from_name("GPHDT"), Some(SentenceType::Hdt));
        assert_eq!(SentenceType::from_name("Rmc"), Some(SentenceType::Rmc));
        assert_eq!(SentenceType::from_name("GNGGA"), None);
        assert_eq!(SentenceType::from_name("gsv"), None);
    }

    #[test]
    fn gga_check_order() {
        let names: Vec<&str> = SentenceType::Gga
            .required_fields()
            .iter()
            .map(|field| field.name())
            .collect();
        assert_eq!(
            names,
            [
                "utc",
                "position",
                "quality",
                "num_satellites",
                "hdop",
                "altitude",
                "geoid_height",
                "dgps"
            ]
        );
    }
}
