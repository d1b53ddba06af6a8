//! SoC power-domain gating exposed as a regulator
//!
//! Enabling a domain sets its bit in the configuration register and waits
//! for the same bit to appear in the block power status register; disabling
//! clears it and waits for the status bit to drop. The wait is bounded.

use embedded_hal::delay::DelayNs;

use s6d05a_hal::{PowerDomainRegs, Regulator, RegulatorError};

/// Maximum number of status polls before giving up
pub const POLL_LIMIT: u32 = 1000;

/// Busy-wait between status polls
pub const POLL_INTERVAL_US: u32 = 1;

/// Static description of one power domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DomainConfig {
    /// Supply name
    pub name: &'static str,
    /// Control bit, shared by the config and status registers
    pub ctrl_bit: u32,
    /// Nominal supply voltage
    pub microvolts: u32,
}

/// 3D graphics domain
pub const DOMAIN_G: DomainConfig = DomainConfig {
    name: "domain_g",
    ctrl_bit: 1 << 10,
    microvolts: 5_000_000,
};

/// Video codec domain
pub const DOMAIN_V: DomainConfig = DomainConfig {
    name: "domain_v",
    ctrl_bit: 1 << 9,
    microvolts: 5_000_000,
};

/// Camera and JPEG domain
pub const DOMAIN_I: DomainConfig = DomainConfig {
    name: "domain_i",
    ctrl_bit: 1 << 12,
    microvolts: 5_000_000,
};

/// 2D graphics, TV encoder and scaler domain
pub const DOMAIN_P: DomainConfig = DomainConfig {
    name: "domain_p",
    ctrl_bit: 1 << 13,
    microvolts: 5_000_000,
};

/// Rotator, post-processor and display controller domain
pub const DOMAIN_F: DomainConfig = DomainConfig {
    name: "domain_f",
    ctrl_bit: 1 << 14,
    microvolts: 5_000_000,
};

/// A gated power domain
pub struct PowerDomain<G, D> {
    config: DomainConfig,
    regs: G,
    delay: D,
}

impl<G: PowerDomainRegs, D: DelayNs> PowerDomain<G, D> {
    /// Create a domain handle over the gating registers
    pub fn new(config: DomainConfig, regs: G, delay: D) -> Self {
        Self {
            config,
            regs,
            delay,
        }
    }

    /// Domain description
    pub fn config(&self) -> &DomainConfig {
        &self.config
    }

    /// Give back the register interface and delay provider
    pub fn release(self) -> (G, D) {
        (self.regs, self.delay)
    }

    fn status_bit(&self) -> bool {
        self.regs.read_status() & self.config.ctrl_bit != 0
    }

    fn wait_for(&mut self, on: bool) -> Result<(), RegulatorError> {
        for _ in 0..POLL_LIMIT {
            if self.status_bit() == on {
                return Ok(());
            }
            self.delay.delay_us(POLL_INTERVAL_US);
        }

        if self.status_bit() == on {
            Ok(())
        } else {
            Err(RegulatorError::Timeout)
        }
    }

    fn switch(&mut self, on: bool) -> Result<(), RegulatorError> {
        let cfg = self.regs.read_config();
        let cfg = if on {
            cfg | self.config.ctrl_bit
        } else {
            cfg & !self.config.ctrl_bit
        };
        self.regs.write_config(cfg);

        self.wait_for(on).inspect_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "{}: failed to {} power domain",
                self.config.name,
                if on { "enable" } else { "disable" }
            );
        })
    }
}

impl<G: PowerDomainRegs, D: DelayNs> Regulator for PowerDomain<G, D> {
    fn enable(&mut self) -> Result<(), RegulatorError> {
        self.switch(true)
    }

    fn disable(&mut self) -> Result<(), RegulatorError> {
        self.switch(false)
    }

    fn is_enabled(&self) -> bool {
        self.status_bit()
    }

    fn microvolts(&self) -> Option<u32> {
        Some(self.config.microvolts)
    }
}
