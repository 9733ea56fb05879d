//! Protocol layer: the outbound binary frame and the inbound JSON envelopes.
//!
//! Outbound (one binary WebSocket message per request):
//!
//! ```text
//! [image_len:4 LE][image bytes:image_len][parameters JSON:remainder]
//! ```
//!
//! Inbound (UTF-8 text frames), one of:
//!
//! ```json
//! {"status":"success","data":{"latitude":…,"longitude":…,"x":…,"y":…,"z":…,"height":…,"yx":…,"xx":…}}
//! {"msg":"…","status":"failure"}
//! ```

pub mod frame;
pub mod reply;

pub use frame::{encode_request, EncodeError};
pub use reply::{decode_reply, DecodeError, PositionFix, ServerReply};
