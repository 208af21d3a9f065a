//! The DataKey registry: a compiled-in, read-only table mapping numeric field
//! identifiers to their wire type.
//!
//! The table is fixed at build time; new fields require rebuilding it. Lookup
//! by an unrecognized id returns `None`, never an error, so decoding can
//! skip fields this build does not know about.

/// Wire representation of a keyed field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKeyType {
    /// UTF-8 text, length-delimited.
    String,
    /// A single byte.
    Byte,
    /// A raw byte range, length-delimited.
    Bytes,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer, current body order.
    Uint16,
    /// Unsigned 32-bit integer, current body order.
    Uint32,
}

/// A typed, named field identifier. The name is diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataKey {
    pub id: u16,
    pub name: &'static str,
    pub kind: DataKeyType,
}

impl DataKey {
    const fn new(id: u16, name: &'static str, kind: DataKeyType) -> Self {
        Self { id, name, kind }
    }
}

impl std::fmt::Display for DataKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

use DataKeyType::{Byte, Bytes, String, Uint16, Uint32, Uint8};

pub const HOST_VERSION: DataKey = DataKey::new(1, "HOST_VERSION", String);
pub const CLIENT_TYPE: DataKey = DataKey::new(2, "CLIENT_TYPE", Byte);
pub const AUTH_RESULT: DataKey = DataKey::new(5, "AUTH_RESULT", Byte);
pub const ERROR_CODE: DataKey = DataKey::new(6, "ERROR_CODE", Byte);
pub const HOST_TYPE: DataKey = DataKey::new(7, "HOST_TYPE", Byte);
pub const HOST_NAME: DataKey = DataKey::new(8, "HOST_NAME", String);
pub const HOST_IP: DataKey = DataKey::new(9, "HOST_IP", String);
pub const HOST_PORT: DataKey = DataKey::new(10, "HOST_PORT", Uint16);
pub const TIME: DataKey = DataKey::new(12, "TIME", Bytes);
pub const DELAY_TIME: DataKey = DataKey::new(13, "DELAY_TIME", Uint16);
pub const NAME: DataKey = DataKey::new(14, "NAME", String);
pub const PICTURE: DataKey = DataKey::new(15, "PICTURE", Byte);
pub const NUMBER: DataKey = DataKey::new(16, "NUMBER", Uint8);
pub const SERIAL_NO: DataKey = DataKey::new(17, "SERIAL_NO", Byte);
pub const USER_NAME: DataKey = DataKey::new(18, "USER_NAME", String);
pub const USER_PASSWD: DataKey = DataKey::new(19, "USER_PASSWD", String);
pub const USER_ROLE: DataKey = DataKey::new(20, "USER_ROLE", Byte);
pub const HOST_MAC: DataKey = DataKey::new(23, "HOST_MAC", Bytes);
pub const DEVICE_ADDR_CHANNEL: DataKey = DataKey::new(257, "DEVICE_ADDR_CHANNEL", Bytes);
pub const DEVICE_TYPE: DataKey = DataKey::new(258, "DEVICE_TYPE", Uint16);
pub const DEVICE_CMD: DataKey = DataKey::new(259, "DEVICE_CMD", Byte);
pub const DEVICE_CMD_DATA: DataKey = DataKey::new(260, "DEVICE_CMD_DATA", Bytes);
pub const DEVICE_KIND: DataKey = DataKey::new(261, "DEVICE_KIND", Byte);
pub const DEVICE_SECRET_KEY: DataKey = DataKey::new(262, "DEVICE_SECRET_KEY", Byte);
pub const DEVICE_CHANNEL: DataKey = DataKey::new(265, "DEVICE_CHANNEL", Uint8);
pub const DEVICE_ATTR: DataKey = DataKey::new(268, "DEVICE_ATTR", Byte);
pub const EMITTER_KEY_NUMBER: DataKey = DataKey::new(272, "EMITTER_KEY_NUMBER", Uint8);
pub const TRANSVERTER_CHANNEL_NUMBER: DataKey =
    DataKey::new(273, "TRANSVERTER_CHANNEL_NUMBER", Uint8);
pub const ROOM_ID: DataKey = DataKey::new(512, "ROOM_ID", Bytes);
pub const SCENE_ID: DataKey = DataKey::new(528, "SCENE_ID", Bytes);
pub const SCENE_EXECUTE_MODE: DataKey = DataKey::new(529, "SCENE_EXECUTE_MODE", Uint8);
pub const SCENE_ADD_MODE: DataKey = DataKey::new(530, "SCENE_ADD_MODE", Uint8);
pub const SCENE_CMD_NUMBER: DataKey = DataKey::new(531, "SCENE_CMD_NUMBER", Uint8);
pub const TIMER_ID: DataKey = DataKey::new(544, "TIMER_ID", Bytes);
pub const TIMER_ONOFF_MARK: DataKey = DataKey::new(545, "TIMER_ONOFF_MARK", Uint8);
pub const TIMER_LOOP_MARK: DataKey = DataKey::new(546, "TIMER_LOOP_MARK", Uint32);
pub const START_TIME: DataKey = DataKey::new(568, "START_TIME", Bytes);
pub const END_TIME: DataKey = DataKey::new(569, "END_TIME", Bytes);
pub const LIST_ID: DataKey = DataKey::new(570, "LIST_ID", Byte);
pub const HOUR: DataKey = DataKey::new(571, "HOUR", Byte);
pub const MINUTE: DataKey = DataKey::new(572, "MINUTE", Byte);
pub const TIMER_CMD_TYPE: DataKey = DataKey::new(573, "TIMER_CMD_TYPE", Uint8);
pub const INNER_PARA_BYTES_COUNT: DataKey = DataKey::new(577, "INNER_PARA_BYTES_COUNT", Byte);
pub const PARA_START_ADDR: DataKey = DataKey::new(578, "PARA_START_ADDR", Uint8);
pub const INNER_PARA_DATA: DataKey = DataKey::new(579, "INNER_PARA_DATA", Bytes);
pub const USER_AUTHORITY: DataKey = DataKey::new(592, "USER_AUTHORITY", Uint8);
pub const SCENE_ATTR: DataKey = DataKey::new(593, "SCENE_ATTR", Uint8);
pub const HUB_CHECK_CODE: DataKey = DataKey::new(594, "HUB_CHECK_CODE", Uint16);
pub const MCU_SOFTWARE_VERSION: DataKey = DataKey::new(595, "MCU_SOFTWARE_VERSION", String);
pub const WIFI_SOFTWARE_VERSION: DataKey = DataKey::new(596, "WIFI_SOFTWARE_VERSION", String);
pub const WIFI_HARDWARE_VERSION: DataKey = DataKey::new(597, "WIFI_HARDWARE_VERSION", String);
pub const WIFI_MAC_ADDR: DataKey = DataKey::new(598, "WIFI_MAC_ADDR", Bytes);
pub const WIFI_IP: DataKey = DataKey::new(599, "WIFI_IP", String);
pub const WIFI_SECRET_KEY: DataKey = DataKey::new(608, "WIFI_SECRET_KEY", Uint8);
pub const TDBU_PART: DataKey = DataKey::new(630, "TDBU_PART", Byte);
pub const TDBU_ID: DataKey = DataKey::new(631, "TDBU_ID", Bytes);
pub const RS485_MAC: DataKey = DataKey::new(632, "RS485_MAC", Bytes);
pub const ERROR: DataKey = DataKey::new(768, "ERROR", Uint16);

/// Every registered key, sorted by id.
pub static DATA_KEYS: &[DataKey] = &[
    HOST_VERSION,
    CLIENT_TYPE,
    AUTH_RESULT,
    ERROR_CODE,
    HOST_TYPE,
    HOST_NAME,
    HOST_IP,
    HOST_PORT,
    TIME,
    DELAY_TIME,
    NAME,
    PICTURE,
    NUMBER,
    SERIAL_NO,
    USER_NAME,
    USER_PASSWD,
    USER_ROLE,
    HOST_MAC,
    DEVICE_ADDR_CHANNEL,
    DEVICE_TYPE,
    DEVICE_CMD,
    DEVICE_CMD_DATA,
    DEVICE_KIND,
    DEVICE_SECRET_KEY,
    DEVICE_CHANNEL,
    DEVICE_ATTR,
    EMITTER_KEY_NUMBER,
    TRANSVERTER_CHANNEL_NUMBER,
    ROOM_ID,
    SCENE_ID,
    SCENE_EXECUTE_MODE,
    SCENE_ADD_MODE,
    SCENE_CMD_NUMBER,
    TIMER_ID,
    TIMER_ONOFF_MARK,
    TIMER_LOOP_MARK,
    START_TIME,
    END_TIME,
    LIST_ID,
    HOUR,
    MINUTE,
    TIMER_CMD_TYPE,
    INNER_PARA_BYTES_COUNT,
    PARA_START_ADDR,
    INNER_PARA_DATA,
    USER_AUTHORITY,
    SCENE_ATTR,
    HUB_CHECK_CODE,
    MCU_SOFTWARE_VERSION,
    WIFI_SOFTWARE_VERSION,
    WIFI_HARDWARE_VERSION,
    WIFI_MAC_ADDR,
    WIFI_IP,
    WIFI_SECRET_KEY,
    TDBU_PART,
    TDBU_ID,
    RS485_MAC,
    ERROR,
];

/// Look up a key by its wire id. Unknown ids return `None`.
pub fn lookup(id: u16) -> Option<&'static DataKey> {
    DATA_KEYS
        .binary_search_by_key(&id, |key| key.id)
        .ok()
        .map(|index| &DATA_KEYS[index])
}
