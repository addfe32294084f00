use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::errors::ScanError;

/// First and last address of a CIDR block, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressSpace {
    start: u32,
    end: u32,
}

impl AddressSpace {
    pub fn new(start: u32, end: u32) -> Result<Self, ScanError> {
        if start > end {
            return Err(ScanError::InvalidRange(format!(
                "{} is after {}",
                Ipv4Addr::from(start),
                Ipv4Addr::from(end)
            )));
        }
        Ok(Self { start, end })
    }

    /// Parses `a.b.c.d/len`. Host bits of the address are masked off, so the
    /// space always starts at the network address and ends at broadcast.
    pub fn from_cidr(cidr: &str) -> Result<Self, ScanError> {
        let invalid = || ScanError::InvalidRange(format!("invalid CIDR address: {}", cidr));

        let (addr, prefix) = cidr.split_once('/').ok_or_else(invalid)?;
        let addr = Ipv4Addr::from_str(addr).map_err(|_| invalid())?;

        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let prefix: u32 = prefix.parse().map_err(|_| invalid())?;
        if prefix > 32 {
            return Err(invalid());
        }

        let mask = u32::MAX.checked_shl(32 - prefix).unwrap_or(0);
        let start = u32::from(addr) & mask;
        let end = start | !mask;

        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Fails when the block holds more addresses than `usize` can count,
    /// i.e. `/0` on 32-bit targets.
    pub fn total_addresses(&self) -> Result<usize, ScanError> {
        let total = u64::from(self.end) - u64::from(self.start) + 1;
        usize::try_from(total).map_err(|_| {
            ScanError::InvalidRange(format!("{} addresses do not fit on this platform", total))
        })
    }

    pub fn feeder(&self) -> RangeFeeder {
        RangeFeeder {
            current: self.start,
            end: self.end,
            finished: false,
        }
    }

    /// Every address of the space in ascending order, broadcast included.
    pub fn addresses(&self) -> Result<Vec<Ipv4Addr>, ScanError> {
        let mut addresses = Vec::with_capacity(self.total_addresses()?);
        addresses.extend(self.feeder());
        Ok(addresses)
    }
}

/// Walks an [`AddressSpace`] one address at a time. Stops after yielding
/// `end` instead of comparing past it, so `255.255.255.255` never wraps.
pub struct RangeFeeder {
    current: u32,
    end: u32,
    finished: bool,
}

impl Iterator for RangeFeeder {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.current;

        if self.current == self.end {
            self.finished = true;
        } else {
            self.current += 1;
        }

        Some(Ipv4Addr::from(result))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let remaining = u64::from(self.end) - u64::from(self.current) + 1;
        match usize::try_from(remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

pub fn expand(cidr: &str) -> Result<AddressSpace, ScanError> {
    AddressSpace::from_cidr(cidr)
}

pub fn enumerate(space: &AddressSpace) -> Result<Vec<Ipv4Addr>, ScanError> {
    space.addresses()
}
