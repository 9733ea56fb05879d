//! Parameter model: capture geometry and device pose for one request.
//!
//! The serde field names are part of the wire format — the server expects
//! camelCase keys (`sceneWidth`, `isPortrait`, …) inside the JSON block of
//! the request frame, so every rename attribute here is load-bearing.
//!
//! All records are constructed once per request and never mutated.

use serde::{Deserialize, Serialize};

/// Device rotation at capture time, as a quaternion (w, x, y, z).
///
/// Magnitude should be ≈ 1; the constructor does not normalize, so callers
/// that derive this from sensor fusion output are responsible for passing a
/// unit quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }
}

/// Capture geometry: scene dimensions, orientation flag, and field of view.
///
/// Built once from the capture session's floating-point dimensions;
/// the scene size is truncated to whole pixels, matching what the server
/// expects. The portrait flag travels as `0`/`1`, not a JSON boolean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalParameters {
    pub scene_height: i64,
    pub scene_width: i64,
    pub is_portrait: i64,
    pub fov: f32,
}

impl InternalParameters {
    /// Builds capture geometry from floating-point scene dimensions.
    ///
    /// Dimensions are truncated toward zero, and `is_portrait` is encoded as
    /// the integer `1` or `0`.
    pub fn new(scene_width: f64, scene_height: f64, field_of_view: f32, is_portrait: bool) -> Self {
        Self {
            scene_width: scene_width as i64,
            scene_height: scene_height as i64,
            is_portrait: if is_portrait { 1 } else { 0 },
            fov: field_of_view,
        }
    }
}

/// Device pose at capture time: geodetic position plus orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExternalParameters {
    pub latitude: f64,
    pub longitude: f64,
    /// Height above the reference ellipsoid, in meters. May be negative.
    pub height: f64,
    pub quaternion: Quaternion,
}

impl ExternalParameters {
    pub fn new(latitude: f64, longitude: f64, height: f64, orientation: Quaternion) -> Self {
        Self {
            latitude,
            longitude,
            height,
            quaternion: orientation,
        }
    }
}

/// The structured metadata half of a request: one [`InternalParameters`]
/// composed with one [`ExternalParameters`].
///
/// Serialized as
/// `{"internalParameters":{…},"externalParameters":{…}}` — the JSON document
/// that occupies the tail of the request frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParameters {
    pub internal_parameters: InternalParameters,
    pub external_parameters: ExternalParameters,
}

impl RequestParameters {
    pub fn new(internal: InternalParameters, external: ExternalParameters) -> Self {
        Self {
            internal_parameters: internal,
            external_parameters: external,
        }
    }
}

/// One localization request: an encoded image buffer plus its parameters.
///
/// Owns both halves; exists only for the duration of one encode-and-send
/// operation.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizationRequest {
    pub image: Vec<u8>,
    pub parameters: RequestParameters,
}

impl LocalizationRequest {
    pub fn new(image: Vec<u8>, parameters: RequestParameters) -> Self {
        Self { image, parameters }
    }

    /// Encodes this request into one binary frame.
    ///
    /// See [`crate::protocol::frame::encode_request`] for the layout.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EncodeError`] if the parameters contain a non-finite
    /// value or the image is too large for the length prefix.
    pub fn encode(&self) -> Result<Vec<u8>, crate::EncodeError> {
        crate::protocol::frame::encode_request(&self.image, &self.parameters)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_parameters_truncate_scene_dimensions() {
        // Arrange / Act: fractional dimensions must truncate, not round
        let p = InternalParameters::new(1280.9, 720.7, 40.0, false);

        // Assert
        assert_eq!(p.scene_width, 1280);
        assert_eq!(p.scene_height, 720);
    }

    #[test]
    fn test_internal_parameters_portrait_flag_is_integer() {
        let portrait = InternalParameters::new(720.0, 1280.0, 40.0, true);
        let landscape = InternalParameters::new(1280.0, 720.0, 40.0, false);
        assert_eq!(portrait.is_portrait, 1);
        assert_eq!(landscape.is_portrait, 0);
    }

    #[test]
    fn test_parameters_serialize_with_wire_field_names() {
        // Arrange
        let params = RequestParameters::new(
            InternalParameters::new(1280.0, 720.0, 40.0, false),
            ExternalParameters::new(37.358, -121.935, -11.0, Quaternion::new(0.1, 0.1, 0.7, 0.7)),
        );

        // Act
        let json = serde_json::to_string(&params).unwrap();

        // Assert: the server parses these exact camelCase keys
        assert!(json.contains(r#""internalParameters""#));
        assert!(json.contains(r#""externalParameters""#));
        assert!(json.contains(r#""sceneWidth":1280"#));
        assert!(json.contains(r#""sceneHeight":720"#));
        assert!(json.contains(r#""isPortrait":0"#));
        assert!(json.contains(r#""fov":40.0"#));
        assert!(json.contains(r#""quaternion""#));
    }

    #[test]
    fn test_parameters_json_round_trip() {
        // Arrange
        let original = RequestParameters::new(
            InternalParameters::new(1920.0, 1080.0, 62.5, true),
            ExternalParameters::new(
                48.8584,
                2.2945,
                35.0,
                Quaternion::new(0.7071, 0.0, 0.7071, 0.0),
            ),
        );

        // Act
        let json = serde_json::to_string(&original).unwrap();
        let decoded: RequestParameters = serde_json::from_str(&json).unwrap();

        // Assert
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_negative_height_round_trips() {
        // Below-ellipsoid capture locations are valid (e.g. Santa Clara valley)
        let external = ExternalParameters::new(37.358, -121.935, -11.0, Quaternion::new(1.0, 0.0, 0.0, 0.0));
        let json = serde_json::to_string(&external).unwrap();
        let decoded: ExternalParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.height, -11.0);
    }
}
