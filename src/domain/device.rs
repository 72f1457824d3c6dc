use serde::{Deserialize, Serialize};

/// Device row owned by the device repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: i64,
    pub uid: String,
    pub device_id: String,
    pub device_name: String,
    pub device_model: String,
}

/// Device shape handed to the messaging core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    pub id: i64,
    pub uid: String,
    pub device_id: String,
    pub device_name: String,
    pub device_model: String,
}

impl From<Device> for DeviceDescriptor {
    fn from(device: Device) -> Self {
        Self {
            id: device.id,
            uid: device.uid,
            device_id: device.device_id,
            device_name: device.device_name,
            device_model: device.device_model,
        }
    }
}
