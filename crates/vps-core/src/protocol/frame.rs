//! Request frame encoder.
//!
//! Wire format, fixed by the deployed server:
//!
//! ```text
//! [image_len:4][image:image_len][parameters JSON:remainder]
//! ```
//!
//! The length prefix is an **explicitly little-endian** u32. No delimiter
//! precedes the JSON block; the server reads exactly `4 + image_len` bytes
//! and treats everything after as one JSON document. Changing either choice
//! would require a protocol version bump on the server side.

use thiserror::Error;

use crate::domain::params::RequestParameters;

/// Errors that can occur while encoding a request frame.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// A parameter value is NaN or infinite and has no JSON representation.
    ///
    /// serde_json would serialize a non-finite float as `null`, which the
    /// server cannot parse, so finiteness is checked up front instead.
    #[error("parameter '{field}' is not a finite number")]
    NonFinite { field: &'static str },

    /// The image does not fit the 4-byte length prefix.
    #[error("image of {len} bytes exceeds the u32 length prefix")]
    ImageTooLarge { len: usize },

    /// The parameter structure could not be serialized to JSON.
    #[error("parameter serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encodes one image buffer plus its parameters into a single binary frame.
///
/// Pure transform; no side effects.
///
/// # Errors
///
/// Returns [`EncodeError`] if any parameter value is non-finite or the image
/// is longer than `u32::MAX` bytes.
///
/// # Examples
///
/// ```rust
/// use vps_core::{encode_request, ExternalParameters, InternalParameters, Quaternion, RequestParameters};
///
/// let params = RequestParameters::new(
///     InternalParameters::new(1280.0, 720.0, 40.0, false),
///     ExternalParameters::new(37.358, -121.935, -11.0, Quaternion::new(1.0, 0.0, 0.0, 0.0)),
/// );
/// let frame = encode_request(b"jpeg bytes", &params).unwrap();
/// assert_eq!(&frame[..4], &10u32.to_le_bytes());
/// assert_eq!(&frame[4..14], b"jpeg bytes");
/// ```
pub fn encode_request(image: &[u8], parameters: &RequestParameters) -> Result<Vec<u8>, EncodeError> {
    check_finite(parameters)?;

    let image_len =
        u32::try_from(image.len()).map_err(|_| EncodeError::ImageTooLarge { len: image.len() })?;

    let json = serde_json::to_vec(parameters)?;

    let mut frame = Vec::with_capacity(4 + image.len() + json.len());
    frame.extend_from_slice(&image_len.to_le_bytes());
    frame.extend_from_slice(image);
    frame.extend_from_slice(&json);
    Ok(frame)
}

/// Rejects NaN and infinity in every floating-point parameter field.
fn check_finite(p: &RequestParameters) -> Result<(), EncodeError> {
    let f32_fields = [("fov", p.internal_parameters.fov)];
    for (field, value) in f32_fields {
        if !value.is_finite() {
            return Err(EncodeError::NonFinite { field });
        }
    }

    let ext = &p.external_parameters;
    let f64_fields = [
        ("latitude", ext.latitude),
        ("longitude", ext.longitude),
        ("height", ext.height),
        ("quaternion.w", ext.quaternion.w),
        ("quaternion.x", ext.quaternion.x),
        ("quaternion.y", ext.quaternion.y),
        ("quaternion.z", ext.quaternion.z),
    ];
    for (field, value) in f64_fields {
        if !value.is_finite() {
            return Err(EncodeError::NonFinite { field });
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
