//! Boot-time output line setup.
//!
//! Every line in [`pins::OUTPUT_GPIOS`] becomes a push-pull output parked
//! LOW before anything else runs, so the bridge and the six channels are
//! de-energized while the welcome animation is still being built.

use core::fmt;

use log::info;

use crate::pins;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::{
    esp, gpio_config, gpio_config_t, gpio_int_type_t_GPIO_INTR_DISABLE, gpio_mode_t_GPIO_MODE_OUTPUT,
    gpio_pulldown_t_GPIO_PULLDOWN_DISABLE, gpio_pullup_t_GPIO_PULLUP_DISABLE, gpio_set_level,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    /// `gpio_config` rejected the output mask (carries `esp_err_t`).
    OutputConfig(i32),
    /// Parking a line LOW failed.
    InitialLevel { pin: i32, rc: i32 },
}

impl fmt::Display for HwInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutputConfig(rc) => write!(f, "output line config rejected (rc={rc})"),
            Self::InitialLevel { pin, rc } => write!(f, "GPIO{pin} could not be parked LOW (rc={rc})"),
        }
    }
}

fn output_mask() -> u64 {
    pins::OUTPUT_GPIOS.iter().map(|&pin| 1u64 << pin).fold(0, |mask, bit| mask | bit)
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: output_mask(),
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: runs once from main() before the HTTP task exists.
    esp!(unsafe { gpio_config(&cfg) }).map_err(|e| HwInitError::OutputConfig(e.code()))?;

    for pin in pins::OUTPUT_GPIOS {
        // SAFETY: the pin was configured as an output just above.
        esp!(unsafe { gpio_set_level(pin, 0) })
            .map_err(|e| HwInitError::InitialLevel { pin, rc: e.code() })?;
    }

    info!("hw_init: {} output lines parked LOW (mask {:#x})", pins::OUTPUT_GPIOS.len(), output_mask());
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    info!("hw_init(sim): would park mask {:#x} LOW", output_mask());
    Ok(())
}

/// Drive one configured output line.
#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: only pins from `pins::OUTPUT_GPIOS` reach here, all configured
    // by init_peripherals(). The rc is ignored: a configured output cannot fail.
    unsafe {
        gpio_set_level(pin, u32::from(high));
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}
