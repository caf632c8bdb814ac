//! Reads GPS tags out of a photo's EXIF block and turns them into a
//! signed decimal-degree position.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{Exif, In, Reader, Tag, Value};
use geo::Point;

use crate::error::{ExtractError, Result};

/// A degrees/minutes/seconds triple as stored in the EXIF GPS IFD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DmsAngle {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl DmsAngle {
    /// Unsigned decimal degrees; the hemisphere reference supplies the sign.
    pub fn to_decimal_degrees(self) -> f64 {
        self.degrees + self.minutes / 60.0 + self.seconds / 3600.0
    }
}

/// The raw GPS fields pulled from the metadata block, before any
/// conversion. Fields are optional because files routinely carry only a
/// subset (or none) of them.
#[derive(Debug, Clone, Default)]
pub struct GpsTags {
    pub latitude: Option<DmsAngle>,
    pub latitude_ref: Option<String>,
    pub longitude: Option<DmsAngle>,
    pub longitude_ref: Option<String>,
}

/// Extract the recorded GPS position from a single photo.
///
/// Returns the position as `Point { x: longitude, y: latitude }` in decimal
/// degrees, or the reason the file yielded none.
pub fn extract_position(path: &Path) -> Result<Point<f64>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let exif = Reader::new()
        .read_from_container(&mut reader)
        .map_err(ExtractError::NoMetadataContainer)?;

    let tags = read_gps_tags(&exif)?;
    position_from_tags(&tags)
}

/// Collect the four GPS fields into a typed record.
pub fn read_gps_tags(exif: &Exif) -> Result<GpsTags> {
    Ok(GpsTags {
        latitude: dms_field(exif, Tag::GPSLatitude)?,
        latitude_ref: ref_field(exif, Tag::GPSLatitudeRef),
        longitude: dms_field(exif, Tag::GPSLongitude)?,
        longitude_ref: ref_field(exif, Tag::GPSLongitudeRef),
    })
}

/// Combine the decoded tags into a signed position.
///
/// References containing `S` or `W` negate the respective axis; anything
/// else leaves it positive. Values outside the valid coordinate ranges are
/// rejected rather than passed through to the output.
pub fn position_from_tags(tags: &GpsTags) -> Result<Point<f64>> {
    let (lat, lat_ref, lon, lon_ref) = match (
        tags.latitude,
        &tags.latitude_ref,
        tags.longitude,
        &tags.longitude_ref,
    ) {
        (Some(lat), Some(lat_ref), Some(lon), Some(lon_ref)) => (lat, lat_ref, lon, lon_ref),
        _ => return Err(ExtractError::NoLocationData),
    };

    let mut latitude = lat.to_decimal_degrees();
    if lat_ref.contains('S') {
        latitude = -latitude;
    }

    let mut longitude = lon.to_decimal_degrees();
    if lon_ref.contains('W') {
        longitude = -longitude;
    }

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ExtractError::malformed(format!(
            "latitude {} out of range",
            latitude
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ExtractError::malformed(format!(
            "longitude {} out of range",
            longitude
        )));
    }

    Ok(Point::new(longitude, latitude))
}

fn dms_field(exif: &Exif, tag: Tag) -> Result<Option<DmsAngle>> {
    match exif.get_field(tag, In::PRIMARY) {
        Some(field) => dms_from_value(&field.value).map(Some),
        None => Ok(None),
    }
}

/// Decode a GPS coordinate field. The GPS IFD stores these as three
/// rationals (degrees, minutes, seconds); some writers append extra
/// components, which are ignored.
pub fn dms_from_value(value: &Value) -> Result<DmsAngle> {
    match value {
        Value::Rational(rationals) if rationals.len() >= 3 => Ok(DmsAngle {
            degrees: rationals[0].to_f64(),
            minutes: rationals[1].to_f64(),
            seconds: rationals[2].to_f64(),
        }),
        Value::Rational(_) => Err(ExtractError::malformed(
            "expected three rational components",
        )),
        _ => Err(ExtractError::malformed(
            "coordinate field is not a rational triple",
        )),
    }
}

fn ref_field(exif: &Exif, tag: Tag) -> Option<String> {
    exif.get_field(tag, In::PRIMARY)
        .map(|field| field.display_value().to_string())
}
