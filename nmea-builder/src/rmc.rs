use core::fmt::Write;

use crate::common::{Ddmmyy, Hhmmss, Latitude, Longitude, Variation};
use crate::error::BuildError;
use crate::message::{Field, SentenceType};
use crate::{Payload, SentenceBuilder};

pub(crate) fn rmc_payload(builder: &SentenceBuilder) -> Result<Payload, BuildError> {
    let missing = |field| BuildError::MissingField {
        sentence: SentenceType::Rmc,
        field,
    };
    let utc = builder.utc.ok_or_else(|| missing(Field::Utc))?;
    let status = builder.status.ok_or_else(|| missing(Field::Status))?;
    let position = builder.position.ok_or_else(|| missing(Field::Position))?;
    let speed_knots = builder
        .speed_knots
        .ok_or_else(|| missing(Field::SpeedKnots))?;
    let course = builder.course.ok_or_else(|| missing(Field::Course))?;
    let date = builder.date.ok_or_else(|| missing(Field::Date))?;
    let mode_indicator = builder
        .mode_indicator
        .ok_or_else(|| missing(Field::ModeIndicator))?;

    let mut payload = Payload::new();
    write!(
        payload,
        "{},{},{},{},{},{:.1},{:.1},{},{},{}",
        SentenceType::Rmc.id(),
        Hhmmss(utc),
        status,
        Latitude(position.latitude),
        Longitude(position.longitude),
        speed_knots,
        course,
        Ddmmyy(date),
        Variation(builder.magnetic_variation),
        mode_indicator,
    )
    .map_err(|_| BuildError::Overflow {
        sentence: SentenceType::Rmc,
    })?;
    Ok(payload)
}
