//! Power domain register access
//!
//! SoC power domains are gated through a configuration register and report
//! their actual state through a separate status register. Chip-specific
//! code implements [`PowerDomainRegs`]; the gating logic itself lives in
//! the driver crate.

/// Access to the power-domain configuration and status registers
pub trait PowerDomainRegs {
    /// Read the domain configuration register (one enable bit per domain)
    fn read_config(&self) -> u32;

    /// Write the domain configuration register
    fn write_config(&mut self, value: u32);

    /// Read the block power status register
    fn read_status(&self) -> u32;
}
