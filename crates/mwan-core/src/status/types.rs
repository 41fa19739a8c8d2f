use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Mode value the daemon writes when running primary/backup failover.
pub const MODE_FAILOVER: &str = "failover";

pub const DEFAULT_CHECK_INTERVAL_SECS: i64 = 30;

/// One parsed status snapshot.
///
/// `timestamp` and `check_interval` are `None` when the file carried a value
/// with no leading digits; formatters treat that the same as a missing value.
///
/// Serializes as one flat object. Unknown keys sit next to the fixed ones,
/// except a global named like a fixed field, which is left out.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub mode: String,
    pub timestamp: Option<i64>,
    pub check_interval: Option<i64>,
    pub interfaces: Vec<Interface>,
    /// Global keys this version does not know about, kept verbatim.
    pub extra: BTreeMap<String, String>,
}

const STATUS_FIELDS: [&str; 4] = ["mode", "timestamp", "check_interval", "interfaces"];

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("mode", &self.mode)?;
        map.serialize_entry("timestamp", &self.timestamp)?;
        map.serialize_entry("check_interval", &self.check_interval)?;
        map.serialize_entry("interfaces", &self.interfaces)?;
        for (key, value) in &self.extra {
            if !STATUS_FIELDS.contains(&key.as_str()) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

impl Default for Status {
    fn default() -> Self {
        Self {
            mode: String::new(),
            timestamp: Some(0),
            check_interval: Some(DEFAULT_CHECK_INTERVAL_SECS),
            interfaces: Vec::new(),
            extra: BTreeMap::new(),
        }
    }
}

impl Status {
    pub fn is_failover(&self) -> bool {
        self.mode == MODE_FAILOVER
    }
}

/// One `[name]` section of the snapshot.
///
/// Every value is kept as the raw string from the file; numeric and time
/// fields are interpreted when formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interface {
    pub name: String,
    pub device: String,
    pub status: String,
    pub status_since: String,
    pub last_check: String,
    pub latency: String,
    pub gateway: String,
    pub ping_target: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            device: String::new(),
            status: InterfaceStatus::Unknown.as_str().to_string(),
            status_since: String::new(),
            last_check: String::new(),
            latency: "0".to_string(),
            gateway: String::new(),
            ping_target: String::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Store a key verbatim. Known keys land in their field, the rest in `extra`.
    pub fn set(&mut self, key: &str, value: String) {
        match key {
            "name" => self.name = value,
            "device" => self.device = value,
            "status" => self.status = value,
            "status_since" => self.status_since = value,
            "last_check" => self.last_check = value,
            "latency" => self.latency = value,
            "gateway" => self.gateway = value,
            "ping_target" => self.ping_target = value,
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }

    pub fn status_code(&self) -> InterfaceStatus {
        InterfaceStatus::from_code(&self.status)
    }
}

/// Status codes the daemon writes for an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceStatus {
    Up,
    Down,
    InterfaceDown,
    Disabled,
    NoGateway,
    Unknown,
}

impl InterfaceStatus {
    /// Total mapping: anything unrecognized is `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "up" => InterfaceStatus::Up,
            "down" => InterfaceStatus::Down,
            "interface_down" => InterfaceStatus::InterfaceDown,
            "disabled" => InterfaceStatus::Disabled,
            "no_gateway" => InterfaceStatus::NoGateway,
            _ => InterfaceStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceStatus::Up => "up",
            InterfaceStatus::Down => "down",
            InterfaceStatus::InterfaceDown => "interface_down",
            InterfaceStatus::Disabled => "disabled",
            InterfaceStatus::NoGateway => "no_gateway",
            InterfaceStatus::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults() {
        let status = Status::default();
        assert_eq!(status.mode, "");
        assert_eq!(status.timestamp, Some(0));
        assert_eq!(status.check_interval, Some(30));
        assert!(status.interfaces.is_empty());
        assert!(!status.is_failover());
    }

    #[test]
    fn test_interface_defaults() {
        let iface = Interface::new("wan");
        assert_eq!(iface.name, "wan");
        assert_eq!(iface.status, "unknown");
        assert_eq!(iface.latency, "0");
        assert_eq!(iface.device, "");
        assert_eq!(iface.status_code(), InterfaceStatus::Unknown);
    }

    #[test]
    fn test_interface_set_known_and_extra() {
        let mut iface = Interface::new("wan");
        iface.set("device", "eth0".to_string());
        iface.set("metric", "10".to_string());

        assert_eq!(iface.device, "eth0");
        assert_eq!(iface.extra.get("metric").map(String::as_str), Some("10"));
        assert!(!iface.extra.contains_key("device"));
    }

    #[test]
    fn test_unrecognized_status_is_preserved_but_unknown() {
        let mut iface = Interface::new("wan");
        iface.set("status", "degraded".to_string());
        assert_eq!(iface.status, "degraded");
        assert_eq!(iface.status_code(), InterfaceStatus::Unknown);
    }

    #[test]
    fn test_status_code_round_trip_for_known_codes() {
        for code in ["up", "down", "interface_down", "disabled", "no_gateway", "unknown"] {
            assert_eq!(InterfaceStatus::from_code(code).as_str(), code);
        }
    }

    #[test]
    fn test_serialize_flattens_extra_fields() {
        let mut status = Status::default();
        status.extra.insert("version".to_string(), "1.2".to_string());
        let mut iface = Interface::new("wan");
        iface.set("weight", "3".to_string());
        status.interfaces.push(iface);

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["version"], "1.2");
        assert_eq!(json["interfaces"][0]["weight"], "3");
        assert_eq!(json["check_interval"], 30);
    }

    #[test]
    fn test_serialize_never_repeats_fixed_keys() {
        let mut status = Status::default();
        status.mode = "failover".to_string();
        status.extra.insert("interfaces".to_string(), "legacy".to_string());
        status.extra.insert("mode".to_string(), "stale".to_string());
        status.interfaces.push(Interface::new("wan"));

        let text = serde_json::to_string(&status).unwrap();
        assert_eq!(text.matches(r#""interfaces":"#).count(), 1);
        assert_eq!(text.matches(r#""mode":"#).count(), 1);

        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["interfaces"][0]["name"], "wan");
        assert_eq!(json["mode"], "failover");
    }
}
