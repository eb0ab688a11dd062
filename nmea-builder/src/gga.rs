use core::fmt::Write;

use crate::common::{Hhmmss, Latitude, Longitude};
use crate::error::BuildError;
use crate::message::{Field, SentenceType};
use crate::{Payload, SentenceBuilder};

pub(crate) fn gga_payload(builder: &SentenceBuilder) -> Result<Payload, BuildError> {
    let missing = |field| BuildError::MissingField {
        sentence: SentenceType::Gga,
        field,
    };
    let utc = builder.utc.ok_or_else(|| missing(Field::Utc))?;
    let position = builder.position.ok_or_else(|| missing(Field::Position))?;
    let quality = builder.quality.ok_or_else(|| missing(Field::Quality))?;
    let num_satellites = builder
        .num_satellites
        .ok_or_else(|| missing(Field::NumSatellites))?;
    let hdop = builder.hdop.ok_or_else(|| missing(Field::Hdop))?;
    let altitude = builder.altitude.ok_or_else(|| missing(Field::Altitude))?;
    let geoid_height = builder
        .geoid_height
        .ok_or_else(|| missing(Field::GeoidHeight))?;
    let dgps = builder.dgps.ok_or_else(|| missing(Field::Dgps))?;

    let mut payload = Payload::new();
    write!(
        payload,
        "{},{},{},{},{},{:02},{:.1},{:.3},M,{:.3},M,{:.1},{:04}",
        SentenceType::Gga.id(),
        Hhmmss(utc),
        Latitude(position.latitude),
        Longitude(position.longitude),
        quality,
        num_satellites,
        hdop,
        altitude,
        geoid_height,
        dgps.age,
        dgps.station_id,
    )
    .map_err(|_| BuildError::Overflow {
        sentence: SentenceType::Gga,
    })?;
    Ok(payload)
}
