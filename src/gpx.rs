//! Provides reader and writer of GPX track files.
//!
//! The writer preserves the original text except the `lat` and `lon`
//! attribute values of points, which are written with 6 digits
//! after the decimal point.
use std::ffi::OsStr;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::Write;
use std::ops::Range;
use std::path::{Path, PathBuf};

use log::{info, trace};
use tempfile::NamedTempFile;

use crate::converter::{Converter, TrackPoint};
use crate::utils::to_fixed;
use crate::{Coordinate, System};

/// The namespace of GPX 1.1.
pub const GPX_1_1: &str = "http://www.topografix.com/GPX/1/1";
/// The namespace of GPX 1.0.
pub const GPX_1_0: &str = "http://www.topografix.com/GPX/1/0";

const BOM: char = '\u{feff}';

/// The element kind of a GPX point.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum PointKind {
    /// `trkpt`, a point of a track segment
    Track,
    /// `rtept`, a point of a route
    Route,
    /// `wpt`, a standalone waypoint
    Way,
}

impl PointKind {
    /// Returns the element name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Track => "trkpt",
            Self::Route => "rtept",
            Self::Way => "wpt",
        }
    }

    fn from_node(node: &roxmltree::Node) -> Option<Self> {
        let name = node.tag_name();
        if !matches!(name.namespace(), Some(GPX_1_1 | GPX_1_0)) {
            return None;
        }

        match name.name() {
            "trkpt" => Some(Self::Track),
            "rtept" => Some(Self::Route),
            "wpt" => Some(Self::Way),
            _ => None,
        }
    }
}

impl Display for PointKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point of a GPX document.
///
/// Only the coordinate is accessible,
/// the other contents stay in the [`Document`] as they are.
#[derive(Debug, PartialEq, Clone)]
pub struct Waypoint {
    kind: PointKind,
    index: usize,
    coordinate: Coordinate,
    lon: Range<usize>,
    lat: Range<usize>,
}

impl Waypoint {
    /// Returns the element kind.
    pub const fn kind(&self) -> PointKind {
        self.kind
    }

    /// Returns the position of `self` among all points of the document, from 0.
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl TrackPoint for Waypoint {
    #[inline]
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[inline]
    fn set_coordinate(&mut self, coord: Coordinate) {
        self.coordinate = coord;
    }
}

/// A parsed GPX document.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # use gcjtrans::gpx::Document;
/// # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
/// let xml = r#"<gpx xmlns="http://www.topografix.com/GPX/1/1" version="1.1">
///   <trk><trkseg>
///     <trkpt lat="39.915" lon="116.404"><ele>44.5</ele></trkpt>
///   </trkseg></trk>
/// </gpx>"#;
///
/// let mut doc = Document::parse(xml)?;
/// assert_eq!(doc.len(), 1);
/// assert_eq!(doc.waypoints()[0].coordinate(), Coordinate::new(116.404, 39.915));
///
/// Converter::new(System::BD09, System::GCJ02).convert_all(doc.waypoints_mut());
/// assert!(doc.to_xml().contains(r#"<trkpt lat="39.908891" lon="116.397543"><ele>44.5</ele></trkpt>"#));
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct Document {
    bom: bool,
    text: String,
    waypoints: Vec<Waypoint>,
}

impl Document {
    /// Parses a GPX document.
    ///
    /// Points are `trkpt`, `rtept` and `wpt` elements
    /// in GPX 1.1 or 1.0 namespace, in document order.
    ///
    /// # Errors
    ///
    /// If `text` is not well-formed XML,
    /// or a point lacks `lat`/`lon` or has a non-numeric one.
    pub fn parse(text: &str) -> Result<Self, GpxError> {
        let (bom, body) = match text.strip_prefix(BOM) {
            Some(body) => (true, body),
            None => (false, text),
        };

        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc =
            roxmltree::Document::parse_with_options(body, options).map_err(GpxError::new_xml)?;

        let mut waypoints = Vec::new();
        for node in doc.descendants().filter(|node| node.is_element()) {
            let Some(kind) = PointKind::from_node(&node) else {
                continue;
            };

            let index = waypoints.len();
            let (longitude, lon) = read_degree(node, kind, index, "lon")?;
            let (latitude, lat) = read_degree(node, kind, index, "lat")?;
            trace!("{kind} #{index}: lon={longitude}, lat={latitude}");

            waypoints.push(Waypoint {
                kind,
                index,
                coordinate: Coordinate::new(longitude, latitude),
                lon,
                lat,
            });
        }

        Ok(Self {
            bom,
            text: body.to_string(),
            waypoints,
        })
    }

    /// Returns the points.
    #[inline]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Returns the points, mutable.
    #[inline]
    pub fn waypoints_mut(&mut self) -> &mut [Waypoint] {
        &mut self.waypoints
    }

    /// Returns the count of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Returns `true` if the document has no point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Returns the document text with the current coordinates.
    ///
    /// Each `lat` and `lon` has 6 digits after the decimal point,
    /// the rest of the text is the same as the parsed one.
    pub fn to_xml(&self) -> String {
        let mut edits: Vec<(&Range<usize>, String)> = self
            .waypoints
            .iter()
            .flat_map(|w| {
                [
                    (&w.lon, to_fixed(w.coordinate.longitude)),
                    (&w.lat, to_fixed(w.coordinate.latitude)),
                ]
            })
            .collect();
        edits.sort_unstable_by_key(|(range, _)| range.start);

        let mut buf = String::with_capacity(self.text.len() + 4 * edits.len() + BOM.len_utf8());
        if self.bom {
            buf.push(BOM);
        }

        let mut pos = 0;
        for (range, value) in edits {
            buf.push_str(&self.text[pos..range.start]);
            buf.push_str(&value);
            pos = range.end;
        }
        buf.push_str(&self.text[pos..]);

        buf
    }
}

fn read_degree(
    node: roxmltree::Node,
    kind: PointKind,
    index: usize,
    attribute: &'static str,
) -> Result<(f64, Range<usize>), GpxError> {
    let attr = node
        .attribute_node(attribute)
        .ok_or_else(|| GpxError::new_missing_attribute(kind, index, attribute))?;

    let value = attr
        .value()
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GpxError::new_invalid_number(kind, index, attribute, attr.value()))?;

    Ok((value, attr.range_value()))
}

/// Returns the converted GPX text.
///
/// # Errors
///
/// If `source` and/or `target` is not one of `bd09`, `gcj02` and `wgs84`,
/// or `xml` is invalid, see [`Document::parse`].
/// The system names are checked before parsing `xml`.
///
/// # Example
///
/// ```
/// # use gcjtrans::gpx::convert_str;
/// # fn main() -> gcjtrans::Result<()> {
/// let xml = r#"<gpx xmlns="http://www.topografix.com/GPX/1/1"><wpt lat="39.915" lon="116.404"/></gpx>"#;
///
/// assert_eq!(
///     convert_str(xml, "bd09", "wgs84")?,
///     r#"<gpx xmlns="http://www.topografix.com/GPX/1/1"><wpt lat="39.907488" lon="116.391300"/></gpx>"#,
/// );
/// # Ok(())}
/// ```
pub fn convert_str(xml: &str, source: &str, target: &str) -> crate::Result<String> {
    let converter = Converter::from_tags(source, target)?;

    let mut doc = Document::parse(xml)?;
    converter.convert_all(doc.waypoints_mut());

    Ok(doc.to_xml())
}

/// Converts the GPX file `input` and writes the result into `output`,
/// returns the count of converted points.
///
/// `output` may be the same as `input`.
///
/// # Errors
///
/// If `source` and/or `target` is not one of `bd09`, `gcj02` and `wgs84`,
/// reading/writing fails, or the contents is invalid, see [`Document::parse`].
/// `output` is replaced at once by a renamed temporary file,
/// it is left as it was on error.
pub fn convert_file<P, Q>(input: P, output: Q, source: &str, target: &str) -> crate::Result<usize>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let converter = Converter::from_tags(source, target)?;
    convert_file_with(input, output, &converter)
}

/// Converts the GPX file `input` by `converter` and writes the result into `output`,
/// returns the count of converted points.
///
/// see [`convert_file`].
pub fn convert_file_with<P, Q>(input: P, output: Q, converter: &Converter) -> crate::Result<usize>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (input, output) = (input.as_ref(), output.as_ref());

    let text = fs::read_to_string(input).map_err(|err| GpxError::new_read(input, err))?;
    let mut doc = Document::parse(&text)?;
    converter.convert_all(doc.waypoints_mut());

    write_atomic(output, doc.to_xml().as_bytes())?;

    info!(
        "converted {} point(s) from {} to {}: {} -> {}",
        doc.len(),
        converter.source(),
        converter.target(),
        input.display(),
        output.display()
    );

    Ok(doc.len())
}

/// Writes `contents` into a temporary file in the directory of `path`,
/// and renames it to `path`.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), GpxError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|err| GpxError::new_write(path, err))?;
    file.write_all(contents)
        .map_err(|err| GpxError::new_write(path, err))?;
    file.persist(path)
        .map_err(|err| GpxError::new_write(path, err.error))?;

    Ok(())
}

/// Returns the default output path of `input`,
/// the file name with its extension replaced by `_{target}.gpx`.
///
/// # Example
///
/// ```
/// # use std::path::{Path, PathBuf};
/// # use gcjtrans::System;
/// # use gcjtrans::gpx::default_output_path;
/// assert_eq!(
///     default_output_path(Path::new("tracks/ride.gpx"), System::WGS84),
///     PathBuf::from("tracks/ride_wgs84.gpx")
/// );
/// assert_eq!(
///     default_output_path(Path::new("ride"), System::BD09),
///     PathBuf::from("ride_bd09.gpx")
/// );
/// ```
pub fn default_output_path(input: &Path, target: System) -> PathBuf {
    let mut name = input.file_stem().map(OsStr::to_os_string).unwrap_or_default();
    name.push(format!("_{target}.gpx"));
    input.with_file_name(name)
}

/// An error which can be returned on reading/writing GPX.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct GpxError {
    kind: GpxErrorKind,
}

/// An error kind used by [`GpxError`].
#[derive(Debug, thiserror::Error)]
pub enum GpxErrorKind {
    /// Not well-formed XML.
    #[error("invalid XML")]
    Xml(#[source] roxmltree::Error),
    /// A point lacks `lat` or `lon`.
    #[error("{element} #{index}: missing '{attribute}' attribute")]
    MissingAttribute {
        element: PointKind,
        /// The position among all points, from 0
        index: usize,
        attribute: &'static str,
    },
    /// A point has non-numeric or non-finite `lat` or `lon`.
    #[error("{element} #{index}: invalid '{attribute}' attribute '{value}'")]
    InvalidNumber {
        element: PointKind,
        /// The position among all points, from 0
        index: usize,
        attribute: &'static str,
        value: String,
    },
    #[error("failed to read '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GpxError {
    #[cold]
    fn new_xml(err: roxmltree::Error) -> Self {
        Self {
            kind: GpxErrorKind::Xml(err),
        }
    }

    #[cold]
    fn new_missing_attribute(element: PointKind, index: usize, attribute: &'static str) -> Self {
        Self {
            kind: GpxErrorKind::MissingAttribute {
                element,
                index,
                attribute,
            },
        }
    }

    #[cold]
    fn new_invalid_number(
        element: PointKind,
        index: usize,
        attribute: &'static str,
        value: &str,
    ) -> Self {
        Self {
            kind: GpxErrorKind::InvalidNumber {
                element,
                index,
                attribute,
                value: value.to_string(),
            },
        }
    }

    #[cold]
    fn new_read(path: &Path, source: std::io::Error) -> Self {
        Self {
            kind: GpxErrorKind::Read {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    #[cold]
    fn new_write(path: &Path, source: std::io::Error) -> Self {
        Self {
            kind: GpxErrorKind::Write {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Returns the detailed cause.
    pub const fn kind(&self) -> &GpxErrorKind {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::primitive::{bd09_to_gcj02, wgs84_to_gcj02};

    const TRACK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- recorded on a phone -->
<gpx xmlns="http://www.topografix.com/GPX/1/1" xmlns:ext="urn:example:ext" version="1.1" creator="tracker">
  <metadata><name>Morning ride</name><time>2024-05-01T06:00:00Z</time></metadata>
  <wpt lat='39.915000' lon='116.404000'><name>Start</name></wpt>
  <trk>
    <name>Ride &amp; run</name>
    <trkseg>
      <trkpt lat="39.915000" lon="116.404000"><ele>44.5</ele><time>2024-05-01T06:00:00Z</time></trkpt>
      <trkpt lon="121.473700" lat="31.230400"><ele>4.0</ele><extensions><ext:hr>120</ext:hr></extensions></trkpt>
      <trkpt   lat = "23.129100"  lon="113.264400" />
    </trkseg>
  </trk>
  <rte><rtept lat="30.572800" lon="104.066800"/></rte>
</gpx>
"#;

    #[test]
    fn test_parse() {
        let doc = Document::parse(TRACK).unwrap();
        assert_eq!(doc.len(), 5);

        let actual: Vec<_> = doc
            .waypoints()
            .iter()
            .map(|w| (w.kind(), w.index(), w.coordinate()))
            .collect();
        assert_eq!(
            actual,
            vec![
                (PointKind::Way, 0, Coordinate::new(116.404, 39.915)),
                (PointKind::Track, 1, Coordinate::new(116.404, 39.915)),
                (PointKind::Track, 2, Coordinate::new(121.4737, 31.2304)),
                (PointKind::Track, 3, Coordinate::new(113.2644, 23.1291)),
                (PointKind::Route, 4, Coordinate::new(104.0668, 30.5728)),
            ]
        );
    }

    #[test]
    fn test_to_xml_unchanged() {
        let doc = Document::parse(TRACK).unwrap();
        assert_eq!(doc.to_xml(), TRACK);
    }

    #[test]
    fn test_to_xml_converted() {
        let mut doc = Document::parse(TRACK).unwrap();
        Converter::new(System::BD09, System::GCJ02).convert_all(doc.waypoints_mut());

        let actual = doc.to_xml();
        let expected = TRACK
            .replace(
                r#"<trkpt lat="39.915000" lon="116.404000">"#,
                r#"<trkpt lat="39.908891" lon="116.397543">"#,
            )
            .replace(
                "<wpt lat='39.915000' lon='116.404000'>",
                "<wpt lat='39.908891' lon='116.397543'>",
            )
            .replace(
                r#"<trkpt lon="121.473700" lat="31.230400">"#,
                r#"<trkpt lon="121.467203" lat="31.224441">"#,
            )
            .replace(
                r#"lat = "23.129100"  lon="113.264400""#,
                r#"lat = "23.123336"  lon="113.257860""#,
            )
            .replace(
                r#"<rtept lat="30.572800" lon="104.066800"/>"#,
                r#"<rtept lat="30.566488" lon="104.060371"/>"#,
            );
        assert_eq!(actual, expected);

        // re-parsed values are the converted ones in 6 digits
        let reparsed = Document::parse(&actual).unwrap();
        let original = Document::parse(TRACK).unwrap();
        for (w, o) in reparsed.waypoints().iter().zip(original.waypoints()) {
            let e = bd09_to_gcj02(o.coordinate());
            assert!((w.coordinate().longitude - e.longitude).abs() <= 5e-7);
            assert!((w.coordinate().latitude - e.latitude).abs() <= 5e-7);
        }
    }

    #[test]
    fn test_parse_gpx_1_0_and_foreign() {
        let xml = r#"<gpx xmlns="http://www.topografix.com/GPX/1/0">
  <trk><trkseg><trkpt lat="1" lon="2"/></trkseg></trk>
  <other xmlns="urn:other"><trkpt lat="x" lon="y"/></other>
</gpx>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.waypoints()[0].coordinate(), Coordinate::new(2.0, 1.0));
        assert_eq!(
            doc.to_xml(),
            xml.replace(r#"lat="1" lon="2""#, r#"lat="1.000000" lon="2.000000""#)
        );
    }

    #[test]
    fn test_parse_no_namespace() {
        let doc = Document::parse(r#"<gpx><trk><trkseg><trkpt lat="1" lon="2"/></trkseg></trk></gpx>"#)
            .unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_doctype() {
        let xml = concat!(
            "<?xml version=\"1.0\"?>\n",
            "<!DOCTYPE gpx>\n",
            "<gpx xmlns=\"http://www.topografix.com/GPX/1/1\">",
            "<trk><trkseg><trkpt lat=\"39.915000\" lon=\"116.404000\"/></trkseg></trk>",
            "</gpx>\n",
        );

        let doc = Document::parse(xml).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.waypoints()[0].coordinate(), Coordinate::new(116.404, 39.915));
        assert_eq!(doc.to_xml(), xml);
    }

    #[test]
    fn test_parse_bom() {
        let xml = format!("{BOM}{TRACK}");
        let doc = Document::parse(&xml).unwrap();
        assert_eq!(doc.len(), 5);
        assert_eq!(doc.to_xml(), xml);
    }

    #[test]
    fn test_parse_missing_attribute() {
        let xml = r#"<gpx xmlns="http://www.topografix.com/GPX/1/1">
  <trk><trkseg><trkpt lat="1" lon="2"/><trkpt lat="1"/></trkseg></trk>
</gpx>"#;
        let err = Document::parse(xml).unwrap_err();
        assert!(matches!(
            err.kind(),
            GpxErrorKind::MissingAttribute {
                element: PointKind::Track,
                index: 1,
                attribute: "lon"
            }
        ));
        assert_eq!(err.to_string(), "trkpt #1: missing 'lon' attribute");
    }

    #[test]
    fn test_parse_invalid_number() {
        for value in ["", "north", "1.2.3", "NaN", "inf"] {
            let xml = format!(
                r#"<gpx xmlns="http://www.topografix.com/GPX/1/1"><wpt lat="{value}" lon="2"/></gpx>"#
            );
            let err = Document::parse(&xml).unwrap_err();
            assert!(matches!(
                err.kind(),
                GpxErrorKind::InvalidNumber {
                    element: PointKind::Way,
                    index: 0,
                    attribute: "lat",
                    value: v,
                } if v == value
            ));
        }
    }

    #[test]
    fn test_parse_invalid_xml() {
        let err = Document::parse("<gpx><trk></gpx>").unwrap_err();
        assert!(matches!(err.kind(), GpxErrorKind::Xml(_)));
    }

    #[test]
    fn test_convert_str() {
        let xml = r#"<gpx xmlns="http://www.topografix.com/GPX/1/1"><trkpt lat="31.2304" lon="121.4737"/></gpx>"#;
        let actual = convert_str(xml, "WGS84", "gcj02").unwrap();

        let e = wgs84_to_gcj02(Coordinate::new(121.4737, 31.2304));
        assert_eq!(
            actual,
            format!(
                r#"<gpx xmlns="http://www.topografix.com/GPX/1/1"><trkpt lat="{}" lon="{}"/></gpx>"#,
                to_fixed(e.latitude),
                to_fixed(e.longitude)
            )
        );
    }

    #[test]
    fn test_convert_str_invalid_tag_first() {
        // the tag is checked before the (broken) document
        let err = convert_str("<gpx", "bd09", "gcj").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidSystem { tag, .. } if tag == "gcj"));

        let err = convert_str("<gpx", "bd09", "gcj02").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Gpx(_)));
    }

    #[test]
    fn test_convert_file() {
        let dir = assert_fs::TempDir::new().unwrap();
        let input = dir.path().join("ride.gpx");
        let output = dir.path().join("ride_wgs84.gpx");
        fs::write(&input, TRACK).unwrap();

        let count = convert_file(&input, &output, "wgs84", "wgs84").unwrap();
        assert_eq!(count, 5);
        assert_eq!(fs::read_to_string(&output).unwrap(), TRACK);

        // in place
        let count = convert_file(&input, &input, "bd09", "gcj02").unwrap();
        assert_eq!(count, 5);
        assert!(fs::read_to_string(&input)
            .unwrap()
            .contains(r#"<rtept lat="30.566488" lon="104.060371"/>"#));

        dir.close().unwrap();
    }

    #[test]
    fn test_convert_file_missing() {
        let dir = assert_fs::TempDir::new().unwrap();
        let input = dir.path().join("missing.gpx");
        let output = dir.path().join("out.gpx");

        let err = convert_file(&input, &output, "bd09", "wgs84").unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::Gpx(e) if matches!(e.kind(), GpxErrorKind::Read { .. })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_convert_file_keeps_output_on_error() {
        let dir = assert_fs::TempDir::new().unwrap();
        let input = dir.path().join("broken.gpx");
        fs::write(&input, "<gpx><trkpt lat=\"1\"").unwrap();

        // in place, the input survives a failed conversion
        let err = convert_file(&input, &input, "bd09", "wgs84").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Gpx(_)));
        assert_eq!(fs::read_to_string(&input).unwrap(), "<gpx><trkpt lat=\"1\"");

        // no temporary file is left behind
        let input = dir.path().join("ride.gpx");
        fs::write(&input, TRACK).unwrap();
        convert_file(&input, &input, "bd09", "gcj02").unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);

        // unwritable output
        let output = dir.path().join("missing").join("ride.gpx");
        let err = convert_file(&input, &output, "bd09", "gcj02").unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::Gpx(e) if matches!(e.kind(), GpxErrorKind::Write { .. })
        ));
        assert!(!output.exists());

        dir.close().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_default_output_path_non_utf8() {
        use std::ffi::OsString;
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let input = PathBuf::from(OsString::from_vec(b"tracks/r\xffde.gpx".to_vec()));
        let actual = default_output_path(&input, System::WGS84);
        assert_eq!(actual.file_name().unwrap().as_bytes(), b"r\xffde_wgs84.gpx");
        assert_eq!(actual.parent(), Some(Path::new("tracks")));
    }

    #[test]
    fn test_default_output_path() {
        for (e, input, target) in [
            ("track_wgs84.gpx", "track.gpx", System::WGS84),
            ("track_gcj02.gpx", "track", System::GCJ02),
            ("a.b_bd09.gpx", "a.b.gpx", System::BD09),
            ("dir.v1/track_wgs84.gpx", "dir.v1/track", System::WGS84),
        ] {
            assert_eq!(default_output_path(Path::new(input), target), PathBuf::from(e));
        }
    }
}
