#![cfg_attr(not(test), no_std)]

mod fmt;

mod common;
mod error;
mod gga;
mod hdt;
mod message;
mod rmc;

use core::fmt::Write;

use heapless::String;

pub use crate::common::checksum;
pub use crate::error::BuildError;
pub use crate::message::{Date, Dgps, Field, Position, SentenceType, UtcTime};

/// Capacity of a rendered sentence, `$` and checksum included. Line terminators are added by
/// the transport.
pub const MAX_SENTENCE_LEN: usize = 128;

/// A complete sentence, `$<payload>*<checksum>`.
pub type Sentence = String<MAX_SENTENCE_LEN>;

pub(crate) type Payload = String<MAX_SENTENCE_LEN>;

/// Accumulates navigation fields and renders GPGGA, GPHDT and GPRMC sentences from them.
///
/// Every field starts unset and keeps its value until the next call to its setter, so one
/// value is shared by every render that uses it. Setters store values as given, range checks
/// are left to the caller.
///
/// The builder does no locking. Share it between tasks through a mutex or a single owner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentenceBuilder {
    pub(crate) utc: Option<UtcTime>,
    pub(crate) position: Option<Position>,
    pub(crate) quality: Option<u8>,
    pub(crate) num_satellites: Option<u8>,
    pub(crate) hdop: Option<f32>,
    pub(crate) altitude: Option<f32>,
    pub(crate) geoid_height: Option<f32>,
    pub(crate) dgps: Option<Dgps>,
    pub(crate) heading: Option<f32>,
    pub(crate) status: Option<char>,
    pub(crate) speed_knots: Option<f32>,
    pub(crate) course: Option<f32>,
    pub(crate) date: Option<Date>,
    pub(crate) magnetic_variation: Option<f32>,
    pub(crate) mode_indicator: Option<char>,
}

impl SentenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `second` may carry a fraction, 0.00-59.99
    pub fn set_utc(&mut self, hour: u8, minute: u8, second: f32) {
        self.utc = Some(UtcTime {
            hour,
            minute,
            second,
        });
    }

    /// Decimal degrees. Positive latitude is north, positive longitude is east.
    pub fn set_position(&mut self, latitude: f64, longitude: f64) {
        self.position = Some(Position {
            latitude,
            longitude,
        });
    }

    /// Fix quality (0: invalid, 1: SPS, 2: DGPS, 4: RTK fixed, 5: RTK float)
    pub fn set_quality(&mut self, quality: u8) {
        self.quality = Some(quality);
    }

    pub fn set_num_satellites(&mut self, num_satellites: u8) {
        self.num_satellites = Some(num_satellites);
    }

    pub fn set_hdop(&mut self, hdop: f32) {
        self.hdop = Some(hdop);
    }

    /// Antenna altitude above mean sea level [m]
    pub fn set_altitude(&mut self, altitude: f32) {
        self.altitude = Some(altitude);
    }

    /// Geoidal separation [m]
    pub fn set_geoid_height(&mut self, geoid_height: f32) {
        self.geoid_height = Some(geoid_height);
    }

    /// `age` in seconds since the last differential correction
    pub fn set_dgps(&mut self, age: f32, station_id: u16) {
        self.dgps = Some(Dgps { age, station_id });
    }

    /// True heading [degrees] (0.000-359.999)
    pub fn set_heading(&mut self, heading: f32) {
        self.heading = Some(heading);
    }

    /// `A` (valid) or `V` (warning)
    pub fn set_status(&mut self, status: char) {
        self.status = Some(status);
    }

    pub fn set_speed_knots(&mut self, speed_knots: f32) {
        self.speed_knots = Some(speed_knots);
    }

    /// Course over ground [degrees] (0.0-359.9)
    pub fn set_course(&mut self, course: f32) {
        self.course = Some(course);
    }

    pub fn set_date(&mut self, day: u8, month: u8, year: u16) {
        self.date = Some(Date { day, month, year });
    }

    /// Positive is east. `0.0` is a real value and renders as `0.0,E`.
    pub fn set_magnetic_variation(&mut self, magnetic_variation: f32) {
        self.magnetic_variation = Some(magnetic_variation);
    }

    /// `A` (autonomous), `D` (differential), `E` (estimated) or `N` (not valid)
    pub fn set_mode_indicator(&mut self, mode_indicator: char) {
        self.mode_indicator = Some(mode_indicator);
    }

    pub fn utc(&self) -> Option<UtcTime> {
        self.utc
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn quality(&self) -> Option<u8> {
        self.quality
    }

    pub fn num_satellites(&self) -> Option<u8> {
        self.num_satellites
    }

    pub fn hdop(&self) -> Option<f32> {
        self.hdop
    }

    pub fn altitude(&self) -> Option<f32> {
        self.altitude
    }

    pub fn geoid_height(&self) -> Option<f32> {
        self.geoid_height
    }

    pub fn dgps(&self) -> Option<Dgps> {
        self.dgps
    }

    pub fn heading(&self) -> Option<f32> {
        self.heading
    }

    pub fn status(&self) -> Option<char> {
        self.status
    }

    pub fn speed_knots(&self) -> Option<f32> {
        self.speed_knots
    }

    pub fn course(&self) -> Option<f32> {
        self.course
    }

    pub fn date(&self) -> Option<Date> {
        self.date
    }

    pub fn magnetic_variation(&self) -> Option<f32> {
        self.magnetic_variation
    }

    pub fn mode_indicator(&self) -> Option<char> {
        self.mode_indicator
    }

    pub fn is_set(&self, field: Field) -> bool {
        match field {
            Field::Utc => self.utc.is_some(),
            Field::Position => self.position.is_some(),
            Field::Quality => self.quality.is_some(),
            Field::NumSatellites => self.num_satellites.is_some(),
            Field::Hdop => self.hdop.is_some(),
            Field::Altitude => self.altitude.is_some(),
            Field::GeoidHeight => self.geoid_height.is_some(),
            Field::Dgps => self.dgps.is_some(),
            Field::Heading => self.heading.is_some(),
            Field::Status => self.status.is_some(),
            Field::SpeedKnots => self.speed_knots.is_some(),
            Field::Course => self.course.is_some(),
            Field::Date => self.date.is_some(),
            Field::MagneticVariation => self.magnetic_variation.is_some(),
            Field::ModeIndicator => self.mode_indicator.is_some(),
        }
    }

    pub fn render_gga(&self) -> Result<Sentence, BuildError> {
        self.render(SentenceType::Gga)
    }

    pub fn render_hdt(&self) -> Result<Sentence, BuildError> {
        self.render(SentenceType::Hdt)
    }

    pub fn render_rmc(&self) -> Result<Sentence, BuildError> {
        self.render(SentenceType::Rmc)
    }

    pub fn render(&self, sentence: SentenceType) -> Result<Sentence, BuildError> {
        let payload = match sentence {
            SentenceType::Gga => gga::gga_payload(self),
            SentenceType::Hdt => hdt::hdt_payload(self),
            SentenceType::Rmc => rmc::rmc_payload(self),
        };
        let payload = payload.inspect_err(|e| log_debug!("render failed: {}", e))?;

        let mut framed = Sentence::new();
        write!(framed, "${}*{:02X}", payload, checksum(&payload))
            .map_err(|_| BuildError::Overflow { sentence })?;
        log_trace!("rendered {}", framed.as_str());
        Ok(framed)
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use super::*;
    use alloc::format;

    fn gga_builder() -> SentenceBuilder {
        let mut builder = SentenceBuilder::new();
        builder.set_utc(0, 34, 14.30);
        builder.set_position(35.68114, 139.767061);
        builder.set_quality(4);
        builder.set_num_satellites(14);
        builder.set_hdop(0.7);
        builder.set_altitude(12.635);
        builder.set_geoid_height(34.091);
        builder.set_dgps(1.3, 1686);
        builder
    }

    fn rmc_builder() -> SentenceBuilder {
        let mut builder = SentenceBuilder::new();
        builder.set_utc(0, 34, 14.30);
        builder.set_status('A');
        builder.set_position(35.68114, 139.767061);
        builder.set_speed_knots(0.0);
        builder.set_course(0.0);
        builder.set_date(14, 2, 2026);
        builder.set_mode_indicator('A');
        builder
    }

    fn assert_well_formed(sentence: &str) {
        assert!(sentence.starts_with('$'));
        assert_eq!(sentence.matches('*').count(), 1);
        let (payload, sum) = sentence[1..].split_once('*').unwrap();
        assert_eq!(sum.len(), 2);
        assert!(sum.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
        assert_eq!(u8::from_str_radix(sum, 16).unwrap(), checksum(payload));
    }

    #[test]
    fn gga() {
        let sentence = gga_builder().render_gga().unwrap();
        assert_eq!(
            sentence.as_str(),
            "$GPGGA,003414.30,3540.86840,N,13946.02366,E,4,14,0.7,12.635,M,34.091,M,1.3,1686*7B"
        );
        assert_well_formed(&sentence);
    }

    #[test]
    fn gga_southern_western_hemisphere() {
        let mut builder = SentenceBuilder::new();
        builder.set_utc(0, 34, 14.30);
        builder.set_position(-33.8520575, -151.2057611667);
        builder.set_quality(1);
        builder.set_num_satellites(8);
        builder.set_hdop(1.2);
        builder.set_altitude(-5.0);
        builder.set_geoid_height(0.0);
        builder.set_dgps(0.0, 0);
        assert_eq!(
            builder.render_gga().unwrap().as_str(),
            "$GPGGA,003414.30,3351.12345,S,15112.34567,W,1,08,1.2,-5.000,M,0.000,M,0.0,0000*5F"
        );
    }

    #[test]
    fn hdt() {
        let mut builder = SentenceBuilder::new();
        builder.set_heading(62.528);
        assert_eq!(builder.render_hdt().unwrap().as_str(), "$GPHDT,62.528,T*0E");

        builder.set_heading(0.0);
        assert_eq!(builder.render_hdt().unwrap().as_str(), "$GPHDT,0.000,T*35");
    }

    #[test]
    fn rmc_without_magnetic_variation() {
        let sentence = rmc_builder().render_rmc().unwrap();
        assert_eq!(
            sentence.as_str(),
            "$GPRMC,003414.30,A,3540.86840,N,13946.02366,E,0.0,0.0,140226,,,A*54"
        );
        assert_well_formed(&sentence);
    }

    #[test]
    fn rmc_with_magnetic_variation() {
        let mut builder = rmc_builder();
        builder.set_speed_knots(12.5);
        builder.set_course(271.3);
        builder.set_magnetic_variation(-7.3);
        builder.set_mode_indicator('D');
        assert_eq!(
            builder.render_rmc().unwrap().as_str(),
            "$GPRMC,003414.30,A,3540.86840,N,13946.02366,E,12.5,271.3,140226,7.3,W,D*1D"
        );
    }

    #[test]
    fn rmc_zero_magnetic_variation_is_set() {
        let mut builder = SentenceBuilder::new();
        builder.set_utc(23, 59, 59.99);
        builder.set_status('V');
        builder.set_position(-33.8520575, -151.2057611667);
        builder.set_speed_knots(0.0);
        builder.set_course(359.9);
        builder.set_date(31, 12, 1999);
        builder.set_magnetic_variation(0.0);
        builder.set_mode_indicator('N');
        assert_eq!(
            builder.render_rmc().unwrap().as_str(),
            "$GPRMC,235959.99,V,3351.12345,S,15112.34567,W,0.0,359.9,311299,0.0,E,N*24"
        );
    }

    #[test]
    fn gga_missing_quality() {
        let mut builder = SentenceBuilder::new();
        builder.set_utc(0, 34, 14.30);
        builder.set_position(35.68114, 139.767061);
        builder.set_num_satellites(14);
        builder.set_hdop(0.7);
        builder.set_altitude(12.635);
        builder.set_geoid_height(34.091);
        builder.set_dgps(1.3, 1686);

        let error = builder.render_gga().unwrap_err();
        assert_eq!(
            error,
            BuildError::MissingField {
                sentence: SentenceType::Gga,
                field: Field::Quality,
            }
        );
        assert_eq!(format!("{}", error), "GPGGA: quality has not been set");
    }

    #[test]
    fn missing_fields_reported_in_check_order() {
        for sentence in SentenceType::ALL {
            let mut builder = SentenceBuilder::new();
            let required = sentence.required_fields();
            for (i, field) in required.iter().enumerate() {
                assert_eq!(
                    builder.render(sentence),
                    Err(BuildError::MissingField {
                        sentence,
                        field: *field,
                    })
                );
                set_any(&mut builder, *field);
                assert!(builder.is_set(*field), "{} after {} fields", field, i);
            }
            assert!(builder.render(sentence).is_ok());
        }
    }

    fn set_any(builder: &mut SentenceBuilder, field: Field) {
        match field {
            Field::Utc => builder.set_utc(1, 2, 3.0),
            Field::Position => builder.set_position(1.0, 2.0),
            Field::Quality => builder.set_quality(1),
            Field::NumSatellites => builder.set_num_satellites(4),
            Field::Hdop => builder.set_hdop(1.0),
            Field::Altitude => builder.set_altitude(100.0),
            Field::GeoidHeight => builder.set_geoid_height(10.0),
            Field::Dgps => builder.set_dgps(1.0, 1),
            Field::Heading => builder.set_heading(90.0),
            Field::Status => builder.set_status('A'),
            Field::SpeedKnots => builder.set_speed_knots(1.0),
            Field::Course => builder.set_course(45.0),
            Field::Date => builder.set_date(1, 1, 2020),
            Field::MagneticVariation => builder.set_magnetic_variation(1.0),
            Field::ModeIndicator => builder.set_mode_indicator('A'),
        }
    }

    #[test]
    fn renders_are_idempotent() {
        let mut builder = gga_builder();
        builder.set_heading(62.528);
        assert_eq!(builder.render_gga(), builder.render_gga());
        assert_eq!(builder.render_hdt(), builder.render_hdt());
    }

    #[test]
    fn fields_shared_between_sentences() {
        let mut builder = gga_builder();
        builder.set_status('A');
        builder.set_speed_knots(0.0);
        builder.set_course(0.0);
        builder.set_date(14, 2, 2026);
        builder.set_mode_indicator('A');

        let gga = builder.render_gga().unwrap();
        let rmc = builder.render_rmc().unwrap();
        assert!(gga.contains("003414.30,3540.86840,N,13946.02366,E"));
        assert!(rmc.contains("003414.30,A,3540.86840,N,13946.02366,E"));
    }

    #[test]
    fn setter_overwrites_whole_group() {
        let mut builder = gga_builder();
        builder.set_utc(12, 0, 0.0);
        builder.set_dgps(2.5, 7);
        assert_eq!(
            builder.utc(),
            Some(UtcTime {
                hour: 12,
                minute: 0,
                second: 0.0
            })
        );
        let sentence = builder.render_gga().unwrap();
        assert!(sentence.starts_with("$GPGGA,120000.00,"));
        assert!(sentence.contains(",2.5,0007*"));
        assert_well_formed(&sentence);
    }

    #[test]
    fn unset_fields_read_as_none() {
        let builder = SentenceBuilder::new();
        for field in Field::ALL {
            assert!(!builder.is_set(field));
        }
        assert_eq!(builder.position(), None);
        assert_eq!(builder.magnetic_variation(), None);
    }

    #[test]
    fn oversized_values_overflow() {
        let mut builder = gga_builder();
        builder.set_altitude(f32::MAX);
        builder.set_geoid_height(f32::MAX);
        assert_eq!(
            builder.render_gga(),
            Err(BuildError::Overflow {
                sentence: SentenceType::Gga
            })
        );
    }
}
