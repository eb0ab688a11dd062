use core::fmt::Write;

use crate::error::BuildError;
use crate::message::{Field, SentenceType};
use crate::{Payload, SentenceBuilder};

pub(crate) fn hdt_payload(builder: &SentenceBuilder) -> Result<Payload, BuildError> {
    let heading = builder.heading.ok_or(BuildError::MissingField {
        sentence: SentenceType::Hdt,
        field: Field::Heading,
    })?;

    let mut payload = Payload::new();
    write!(payload, "{},{:.3},T", SentenceType::Hdt.id(), heading).map_err(|_| {
        BuildError::Overflow {
            sentence: SentenceType::Hdt,
        }
    })?;
    Ok(payload)
}
