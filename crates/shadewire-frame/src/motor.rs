//! Motor command opcodes carried in the `DEVICE_CMD` field.

/// Raise the shade fully.
pub const UP: u8 = 16;

/// Lower the shade fully.
pub const DOWN: u8 = 18;

/// Move to a target position. Takes a three-byte `DEVICE_CMD_DATA`
/// argument of the form `[1, percent, 0]`.
pub const SET_POSITION: u8 = 25;
