use candle_core::{DType, Device};
use tracing::debug;

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::{info, warn};

/// Picks the first usable GPU backend compiled in, falling back to CPU.
pub fn select_device() -> Device {
    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            info!("Using CUDA GPU acceleration");
            return device;
        }
        Err(e) => warn!(error = %e, "CUDA device unavailable"),
    }

    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            info!("Using Metal GPU acceleration");
            return device;
        }
        Err(e) => warn!(error = %e, "Metal device unavailable"),
    }

    debug!("Using CPU device");
    Device::Cpu
}

/// Weights are kept in F32 on CPU and F16 on accelerators.
pub fn select_dtype(device: &Device) -> DType {
    if device.is_cpu() {
        DType::F32
    } else {
        DType::F16
    }
}
