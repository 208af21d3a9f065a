//! Frame-type ids carried in the body's `frame_type` field.

/// Request the hub's room list.
pub const ROOM_LIST_REQ: u16 = 256;

/// Request the device list behind a hub.
pub const DEVICE_LIST_REQ: u16 = 288;

/// Device list response.
pub const DEVICE_LIST_RESP: u16 = 289;

/// Execute an actuator command on a device.
pub const DEVICE_EXECUTE_REQ: u16 = 290;

/// Device status response.
pub const DEVICE_STATUS_RESP: u16 = 291;

/// Request a device's internal parameters (position and the like).
pub const DEVICE_PARA_REQ: u16 = 298;

/// Device parameter response.
pub const DEVICE_PARA_RESP: u16 = 299;

/// Request a device's radio signal strength.
pub const DEVICE_RSSI_REQ: u16 = 300;

/// Returns a human-readable name for a frame-type id.
pub fn name(id: u16) -> &'static str {
    match id {
        ROOM_LIST_REQ => "ROOM_LIST_REQ",
        DEVICE_LIST_REQ => "DEVICE_LIST_REQ",
        DEVICE_LIST_RESP => "DEVICE_LIST_RESP",
        DEVICE_EXECUTE_REQ => "DEVICE_EXECUTE_REQ",
        DEVICE_STATUS_RESP => "DEVICE_STATUS_RESP",
        DEVICE_PARA_REQ => "DEVICE_PARA_REQ",
        DEVICE_PARA_RESP => "DEVICE_PARA_RESP",
        DEVICE_RSSI_REQ => "DEVICE_RSSI_REQ",
        _ => "UNKNOWN",
    }
}
