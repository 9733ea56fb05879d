//! Integration tests for the vps-core wire protocol.
//!
//! These tests exercise the full public API — parameter construction, frame
//! encoding, and reply decoding — the way the session layer uses it.

use vps_core::{
    decode_reply, encode_request, DecodeError, ExternalParameters, InternalParameters,
    LocalizationRequest, PositionFix, Quaternion, RequestParameters, ServerReply,
};

/// The reference capture used in the original field test: landscape
/// 1280×720 at 40° FOV, shot in the Santa Clara valley.
fn reference_parameters() -> RequestParameters {
    RequestParameters::new(
        InternalParameters::new(1280.0, 720.0, 40.0, false),
        ExternalParameters::new(
            37.35791604,
            -121.93528937,
            -11.0,
            Quaternion::new(
                0.11332562565803528,
                0.14226141571998596,
                0.7066415548324585,
                0.6837958097457886,
            ),
        ),
    )
}

#[test]
fn test_frame_prefix_matches_image_length_for_various_sizes() {
    let params = reference_parameters();

    for len in [0usize, 1, 3, 512, 70_000] {
        let image = vec![0x5Au8; len];
        let frame = encode_request(&image, &params).expect("encode must succeed");

        let prefix = u32::from_le_bytes(frame[..4].try_into().unwrap());
        assert_eq!(prefix as usize, len, "prefix must equal image length");
        assert_eq!(&frame[4..4 + len], image.as_slice());
    }
}

#[test]
fn test_empty_image_reference_frame() {
    // An empty image still produces a frame of 4 + 0 + len(JSON) whose
    // prefix decodes back to zero and whose JSON suffix parses to the
    // original parameter values.
    let params = reference_parameters();
    let frame = encode_request(&[], &params).unwrap();

    assert_eq!(u32::from_le_bytes(frame[..4].try_into().unwrap()), 0);

    let decoded: RequestParameters = serde_json::from_slice(&frame[4..]).unwrap();
    assert_eq!(decoded, params);
    assert_eq!(decoded.internal_parameters.scene_width, 1280);
    assert_eq!(decoded.internal_parameters.scene_height, 720);
    assert_eq!(decoded.internal_parameters.is_portrait, 0);
    assert_eq!(decoded.external_parameters.height, -11.0);
}

#[test]
fn test_request_encode_method_matches_free_function() {
    let params = reference_parameters();
    let request = LocalizationRequest::new(b"jpeg".to_vec(), params);

    let via_method = request.encode().unwrap();
    let via_function = encode_request(b"jpeg", &params).unwrap();

    assert_eq!(via_method, via_function);
}

#[test]
fn test_parameters_round_trip_through_wire_json() {
    // JSON round-trip idempotence across the portrait/landscape split.
    for is_portrait in [false, true] {
        let params = RequestParameters::new(
            InternalParameters::new(405.0, 720.0, 40.0, is_portrait),
            ExternalParameters::new(
                37.35791604,
                -121.93528937,
                -11.0,
                Quaternion::new(0.1133, 0.1423, 0.7066, 0.6838),
            ),
        );
        let json = serde_json::to_string(&params).unwrap();
        let decoded: RequestParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, params);
    }
}

#[test]
fn test_decode_success_reply_example() {
    let text = r#"{"status":"success","data":{"latitude":1,"longitude":2,"x":0,"y":0,"z":0,"height":0,"yx":0,"xx":0}}"#;

    let reply = decode_reply(text).unwrap();

    assert_eq!(
        reply,
        ServerReply::Success(PositionFix {
            latitude: 1.0,
            longitude: 2.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            height: 0.0,
            yx: 0.0,
            xx: 0.0,
        })
    );
}

#[test]
fn test_decode_failure_reply_example() {
    let reply = decode_reply(r#"{"msg":"bad request","status":"failure"}"#).unwrap();
    assert_eq!(
        reply,
        ServerReply::Failure {
            message: "bad request".to_string()
        }
    );
    assert!(!reply.is_success());
}

#[test]
fn test_decode_garbage_is_reported() {
    let result = decode_reply("<html>503 Service Unavailable</html>");
    assert!(matches!(result, Err(DecodeError::UnknownEnvelope { .. })));
}
