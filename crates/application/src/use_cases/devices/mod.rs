mod get_devices;
mod refresh_devices;
mod remove_devices;
mod unblock_device;

pub use get_devices::GetDevicesUseCase;
pub use refresh_devices::RefreshDevicesUseCase;
pub use remove_devices::RemoveDevicesUseCase;
pub use unblock_device::UnblockDeviceUseCase;
