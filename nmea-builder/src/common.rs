use core::fmt::{self, Display, Formatter, Write};

use heapless::String;

use crate::message::{Date, UtcTime};

/// XOR of every byte between `$` and `*`.
pub fn checksum(payload: &str) -> u8 {
    payload.bytes().fold(0, |checksum, byte| checksum ^ byte)
}

/// `hhmmss.ss`
pub(crate) struct Hhmmss(pub UtcTime);

impl Display for Hhmmss {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}{:05.2}",
            self.0.hour, self.0.minute, self.0.second
        )
    }
}

/// `ddmmyy`
pub(crate) struct Ddmmyy(pub Date);

impl Display for Ddmmyy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}{:02}",
            self.0.day,
            self.0.month,
            self.0.year % 100
        )
    }
}

/// `ddmm.mmmmm,N` or `ddmm.mmmmm,S`
pub(crate) struct Latitude(pub f64);

impl Display for Latitude {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write_angle(f, self.0, 2, 'N', 'S')
    }
}

/// `dddmm.mmmmm,E` or `dddmm.mmmmm,W`
pub(crate) struct Longitude(pub f64);

impl Display for Longitude {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write_angle(f, self.0, 3, 'E', 'W')
    }
}

/// `v.v,E`, `v.v,W`, or `,` when unset.
pub(crate) struct Variation(pub Option<f32>);

impl Display for Variation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.0 {
            Some(variation) => {
                let (magnitude, direction) = split_sign(variation as f64, 'E', 'W');
                write!(f, "{:.1},{}", magnitude, direction)
            }
            None => f.write_char(','),
        }
    }
}

// core has no f64::abs without std
fn split_sign(value: f64, positive: char, negative: char) -> (f64, char) {
    if value >= 0.0 {
        (value, positive)
    } else {
        (-value, negative)
    }
}

fn write_angle(
    f: &mut Formatter,
    degrees: f64,
    degree_digits: usize,
    positive: char,
    negative: char,
) -> fmt::Result {
    let (magnitude, hemisphere) = split_sign(degrees, positive, negative);
    let mut whole = magnitude as u32;
    let minutes = (magnitude - whole as f64) * 60.0;

    let mut minutes_text = String::<24>::new();
    write!(minutes_text, "{:08.5}", minutes)?;
    if minutes_text.starts_with("60") {
        // rounded up to a full degree
        whole += 1;
        minutes_text.clear();
        minutes_text.push_str("00.00000").map_err(|_| fmt::Error)?;
    }

    write!(
        f,
        "{:0width$}{},{}",
        whole,
        minutes_text,
        hemisphere,
        width = degree_digits
    )
}
